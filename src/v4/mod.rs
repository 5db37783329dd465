//! DHCPv4 wire format
//!
//! This module contains the announcement packet and the value types it
//! carries:
//! - Hardware address parsing and display
//! - Bounded hostnames
//! - Fixed-layout packet encoding

pub mod packet;

#[cfg(test)]
mod tests;

pub use packet::{AnnouncePacket, Hostname, MacAddr, PACKET_LEN};
