#![cfg_attr(not(test), no_std)]

use core::fmt;

pub mod buf;
pub mod classify;
pub mod eth;
pub mod ip;
pub mod udp;

#[cfg(test)]
pub(crate) mod frame;

pub use buf::PacketBuf;
pub use classify::{classify, inspect, Accepted};

/// UDP destination port of the traffic allowed through to the host stack.
///
/// WireGuard listens on 51820 unless told otherwise. Changing the matched
/// port means rebuilding the BPF object.
pub const WIREGUARD_PORT: u16 = 51820;

/// Outward decision for a single packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Hand the packet to the regular network stack.
    Pass,
    /// Discard the packet.
    Drop,
}

/// Reasons a packet is not accepted. Both collapse to [`Verdict::Drop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer ends before the header needed at the current stage.
    Malformed,
    /// Well formed, but outside the accepted protocol/port set.
    NotRelevant,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Malformed => f.write_str("packet truncated before a required header"),
            ParseError::NotRelevant => f.write_str("packet outside the accepted protocol set"),
        }
    }
}
