use network_types::{
    ip::{IpProto, Ipv4Hdr, Ipv6Hdr},
    udp::UdpHdr,
};

use crate::{udp::UdpHdrView, PacketBuf, ParseError};

pub const IPPROTO_UDP: u8 = IpProto::Udp as u8;

/// Bounds-checked view over the fixed 20 bytes of an IPv4 header.
pub struct Ipv4HdrView<'a>(&'a [u8; Ipv4Hdr::LEN]);

impl<'a> Ipv4HdrView<'a> {
    #[inline(always)]
    pub fn new(bytes: &'a [u8; Ipv4Hdr::LEN]) -> Self {
        Self(bytes)
    }

    /// Header length in bytes, options included (IHL * 4).
    #[inline(always)]
    pub fn header_len(&self) -> usize {
        ((self.0[0] & 0x0f) as usize) << 2
    }

    #[inline(always)]
    pub fn proto(&self) -> u8 {
        self.0[9]
    }
}

/// Bounds-checked view over an IPv6 header.
pub struct Ipv6HdrView<'a>(&'a [u8; Ipv6Hdr::LEN]);

impl<'a> Ipv6HdrView<'a> {
    #[inline(always)]
    pub fn new(bytes: &'a [u8; Ipv6Hdr::LEN]) -> Self {
        Self(bytes)
    }

    #[inline(always)]
    pub fn next_hdr(&self) -> u8 {
        self.0[6]
    }
}

/// Network header located by the link-layer protocol tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkHeader {
    Ipv4 { offset: usize },
    Ipv6 { offset: usize },
}

impl NetworkHeader {
    /// Destination port of the UDP datagram carried by this header.
    #[inline(always)]
    pub fn udp_dst_port<B: PacketBuf + ?Sized>(self, buf: &B) -> Result<u16, ParseError> {
        match self {
            NetworkHeader::Ipv4 { offset } => parse_ipv4(buf, offset),
            NetworkHeader::Ipv6 { offset } => parse_ipv6(buf, offset),
        }
    }
}

/// Parses the IPv4 header at `offset` and returns the UDP destination port.
///
/// Options are skipped with the IHL field, the UDP header is bounds-checked at
/// the resulting offset.
#[inline(always)]
pub fn parse_ipv4<B: PacketBuf + ?Sized>(buf: &B, offset: usize) -> Result<u16, ParseError> {
    let ipv4 = Ipv4HdrView::new(buf.header(offset)?);

    if ipv4.proto() != IPPROTO_UDP {
        return Err(ParseError::NotRelevant);
    }

    let header_len = ipv4.header_len();
    if header_len < Ipv4Hdr::LEN {
        return Err(ParseError::Malformed);
    }

    let udp = UdpHdrView::new(buf.header::<{ UdpHdr::LEN }>(offset + header_len)?);
    Ok(udp.dst_port())
}

/// Parses the IPv6 header at `offset` and returns the UDP destination port.
///
/// Only the immediate next header is looked at. Extension headers are not
/// walked, so UDP behind any of them is reported as not relevant.
#[inline(always)]
pub fn parse_ipv6<B: PacketBuf + ?Sized>(buf: &B, offset: usize) -> Result<u16, ParseError> {
    let ipv6 = Ipv6HdrView::new(buf.header(offset)?);

    if ipv6.next_hdr() != IPPROTO_UDP {
        return Err(ParseError::NotRelevant);
    }

    let udp = UdpHdrView::new(buf.header::<{ UdpHdr::LEN }>(offset + Ipv6Hdr::LEN)?);
    Ok(udp.dst_port())
}
