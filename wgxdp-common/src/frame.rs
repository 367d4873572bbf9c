//! Hand-built frames for the parser tests.

use crate::eth::{ETH_P_ARP, ETH_P_IP, ETH_P_IPV6};

pub const IPPROTO_TCP: u8 = 6;
pub const IPPROTO_ICMP: u8 = 1;
pub const IPPROTO_HOPOPTS: u8 = 0;

const DST_MAC: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x01];
const SRC_MAC: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x02];

pub fn eth(ether_type: u16) -> Vec<u8> {
    let mut pkt = Vec::with_capacity(64);
    pkt.extend_from_slice(&DST_MAC);
    pkt.extend_from_slice(&SRC_MAC);
    pkt.extend_from_slice(&ether_type.to_be_bytes());
    pkt
}

fn udp(pkt: &mut Vec<u8>, dst_port: u16) {
    pkt.extend_from_slice(&40000u16.to_be_bytes());
    pkt.extend_from_slice(&dst_port.to_be_bytes());
    pkt.extend_from_slice(&8u16.to_be_bytes());
    pkt.extend_from_slice(&[0, 0]);
}

/// Ethernet + IPv4 (with `option_words` words of NOP options) + 8 bytes of
/// transport header carrying `dst_port` where UDP keeps its destination port.
pub fn ipv4(proto: u8, option_words: u8, dst_port: u16) -> Vec<u8> {
    let mut pkt = eth(ETH_P_IP);
    let ihl = 5 + option_words;
    let tot_len = ihl as u16 * 4 + 8;
    pkt.push(0x40 | ihl);
    pkt.push(0);
    pkt.extend_from_slice(&tot_len.to_be_bytes());
    pkt.extend_from_slice(&[0x12, 0x34, 0x40, 0x00]);
    pkt.push(64);
    pkt.push(proto);
    pkt.extend_from_slice(&[0, 0]);
    pkt.extend_from_slice(&[192, 0, 2, 1]);
    pkt.extend_from_slice(&[192, 0, 2, 2]);
    pkt.extend(std::iter::repeat(0x01).take(option_words as usize * 4));
    udp(&mut pkt, dst_port);
    pkt
}

/// Ethernet + IPv6 + 8 bytes of transport header carrying `dst_port`.
pub fn ipv6(next_hdr: u8, dst_port: u16) -> Vec<u8> {
    let mut pkt = eth(ETH_P_IPV6);
    ipv6_fixed(&mut pkt, next_hdr, 8);
    udp(&mut pkt, dst_port);
    pkt
}

/// Ethernet + IPv6 + hop-by-hop options + UDP to `dst_port`.
pub fn ipv6_hop_by_hop_udp(dst_port: u16) -> Vec<u8> {
    let mut pkt = eth(ETH_P_IPV6);
    ipv6_fixed(&mut pkt, IPPROTO_HOPOPTS, 16);
    // next header UDP, length 0 (8 bytes), PadN
    pkt.extend_from_slice(&[17, 0, 1, 4, 0, 0, 0, 0]);
    udp(&mut pkt, dst_port);
    pkt
}

fn ipv6_fixed(pkt: &mut Vec<u8>, next_hdr: u8, payload_len: u16) {
    pkt.extend_from_slice(&[0x60, 0, 0, 0]);
    pkt.extend_from_slice(&payload_len.to_be_bytes());
    pkt.push(next_hdr);
    pkt.push(64);
    let mut src = [0u8; 16];
    src[..2].copy_from_slice(&[0x20, 0x01]);
    src[15] = 1;
    let mut dst = src;
    dst[15] = 2;
    pkt.extend_from_slice(&src);
    pkt.extend_from_slice(&dst);
}

/// Ethernet + ARP request.
pub fn arp() -> Vec<u8> {
    let mut pkt = eth(ETH_P_ARP);
    pkt.extend_from_slice(&[0x00, 0x01, 0x08, 0x00, 6, 4, 0x00, 0x01]);
    pkt.extend_from_slice(&SRC_MAC);
    pkt.extend_from_slice(&[192, 0, 2, 2]);
    pkt.extend_from_slice(&[0; 6]);
    pkt.extend_from_slice(&[192, 0, 2, 1]);
    pkt
}
