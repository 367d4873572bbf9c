use network_types::eth::{EthHdr, EtherType};

use crate::{ParseError, PacketBuf};

pub const ETH_P_IP: u16 = u16::from_be(EtherType::Ipv4 as u16);
pub const ETH_P_IPV6: u16 = u16::from_be(EtherType::Ipv6 as u16);
pub const ETH_P_ARP: u16 = u16::from_be(EtherType::Arp as u16);

/// Bounds-checked view over an Ethernet II header.
pub struct EthHdrView<'a>(&'a [u8; EthHdr::LEN]);

impl<'a> EthHdrView<'a> {
    #[inline(always)]
    pub fn new(bytes: &'a [u8; EthHdr::LEN]) -> Self {
        Self(bytes)
    }

    /// EtherType in host byte order.
    #[inline(always)]
    pub fn ether_type(&self) -> u16 {
        u16::from_be_bytes([self.0[12], self.0[13]])
    }
}

/// Result of stripping the link-layer header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthFrame {
    pub ether_type: u16,
    pub payload_offset: usize,
}

#[inline(always)]
pub fn parse_eth<B: PacketBuf + ?Sized>(buf: &B) -> Result<EthFrame, ParseError> {
    let eth = EthHdrView::new(buf.header(0)?);

    Ok(EthFrame {
        ether_type: eth.ether_type(),
        payload_offset: EthHdr::LEN,
    })
}
