use network_types::udp::UdpHdr;

/// Bounds-checked view over a UDP header.
pub struct UdpHdrView<'a>(&'a [u8; UdpHdr::LEN]);

impl<'a> UdpHdrView<'a> {
    #[inline(always)]
    pub fn new(bytes: &'a [u8; UdpHdr::LEN]) -> Self {
        Self(bytes)
    }

    /// Destination port in host byte order.
    #[inline(always)]
    pub fn dst_port(&self) -> u16 {
        u16::from_be_bytes([self.0[2], self.0[3]])
    }
}
