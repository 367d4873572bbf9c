use aya_ebpf::programs::XdpContext;
use wgxdp_common::{PacketBuf, ParseError};

/// Packet bytes of an XDP frame, `[data, data_end)`.
pub struct XdpBuf<'a> {
    ctx: &'a XdpContext,
}

impl<'a> XdpBuf<'a> {
    #[inline(always)]
    pub fn new(ctx: &'a XdpContext) -> Self {
        Self { ctx }
    }
}

impl PacketBuf for XdpBuf<'_> {
    #[inline(always)]
    fn header<const N: usize>(&self, offset: usize) -> Result<&[u8; N], ParseError> {
        let start = self.ctx.data();
        let end = self.ctx.data_end();

        if start + offset + N > end {
            return Err(ParseError::Malformed);
        }

        // SAFETY: the whole range was checked against data_end above and the
        // frame is not written to while the program runs.
        Ok(unsafe { &*((start + offset) as *const [u8; N]) })
    }
}
