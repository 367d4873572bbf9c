use crate::ParseError;

/// A contiguous, read-only packet buffer.
///
/// `header` is the only way the parsers reach packet bytes. An implementation
/// must prove that `[offset, offset + N)` lies inside the buffer before it
/// hands out the view, and report [`ParseError::Malformed`] otherwise.
pub trait PacketBuf {
    fn header<const N: usize>(&self, offset: usize) -> Result<&[u8; N], ParseError>;
}

impl PacketBuf for [u8] {
    #[inline(always)]
    fn header<const N: usize>(&self, offset: usize) -> Result<&[u8; N], ParseError> {
        let end = offset.checked_add(N).ok_or(ParseError::Malformed)?;
        self.get(offset..end)
            .and_then(|bytes| <&[u8; N]>::try_from(bytes).ok())
            .ok_or(ParseError::Malformed)
    }
}
