use crate::{
    eth::{parse_eth, ETH_P_ARP, ETH_P_IP, ETH_P_IPV6},
    ip::NetworkHeader,
    PacketBuf, ParseError, Verdict, WIREGUARD_PORT,
};

/// Why a packet was let through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accepted {
    /// UDP to [`WIREGUARD_PORT`] over IPv4 or IPv6.
    WireGuard,
    /// ARP, never inspected past the Ethernet header.
    Arp,
}

/// Runs the full policy and reports the reason behind the outcome.
///
/// Default is deny: only WireGuard datagrams and ARP are accepted.
#[inline(always)]
pub fn inspect<B: PacketBuf + ?Sized>(buf: &B) -> Result<Accepted, ParseError> {
    let frame = parse_eth(buf)?;

    let network = match frame.ether_type {
        ETH_P_IP => NetworkHeader::Ipv4 {
            offset: frame.payload_offset,
        },
        ETH_P_IPV6 => NetworkHeader::Ipv6 {
            offset: frame.payload_offset,
        },
        ETH_P_ARP => return Ok(Accepted::Arp),
        _ => return Err(ParseError::NotRelevant),
    };

    match network.udp_dst_port(buf)? {
        WIREGUARD_PORT => Ok(Accepted::WireGuard),
        _ => Err(ParseError::NotRelevant),
    }
}

#[inline(always)]
pub fn classify<B: PacketBuf + ?Sized>(buf: &B) -> Verdict {
    match inspect(buf) {
        Ok(_) => Verdict::Pass,
        Err(_) => Verdict::Drop,
    }
}
