//! # iamme - Announce This Host to a DHCP/DNS Server
//!
//! iamme sends one DHCP REQUEST-shaped datagram carrying the host's name and
//! hardware address to a DHCP server. A server that couples DHCP and DNS
//! (dnsmasq, for example) picks up the hostname option and refreshes its
//! name-to-address binding. No lease is negotiated, no reply is read and the
//! local network configuration is never touched.
//!
//! ## Example
//!
//! ```rust,no_run
//! use iamme::{AnnounceConfig, Announcer};
//! use std::net::Ipv4Addr;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AnnounceConfig::new("eth0".to_string(), Ipv4Addr::new(192, 168, 1, 1));
//!     let announcement = Announcer::new(config).run().await?;
//!     println!("Announced to {}", announcement.destination);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod network;
pub mod sysinfo;
pub mod v4;

pub use client::{Announcement, Announcer};
pub use config::{AnnounceConfig, Args};
pub use error::IammeError;
