//! Local identity lookups
//!
//! This module reads the host facts an announcement carries:
//! - The hardware address of an interface, from sysfs
//! - The IPv4 address bound to an interface, from `getifaddrs(3)`
//! - The system hostname, from `gethostname(2)`

pub mod hostname;
pub mod ifaddr;
pub mod mac;

pub use hostname::hostname;
pub use ifaddr::{find_ipv4, interface_addresses, InterfaceAddr};
pub use mac::read_mac_address;
