//! Announcement driver
//!
//! Gathers the local identity, fills in the packet in a fixed order
//! (hardware address, client address, hostname) and sends it once.

use crate::{
    config::AnnounceConfig,
    error::IammeError,
    network,
    sysinfo,
    v4::AnnouncePacket,
};
use bytes::Bytes;
use std::net::SocketAddrV4;

/// What was sent, and where.
#[derive(Debug, Clone)]
pub struct Announcement {
    pub payload: Bytes,
    pub destination: SocketAddrV4,
    /// `None` when the transport failed. Transport failures are not fatal.
    pub bytes_sent: Option<usize>,
}

pub struct Announcer {
    config: AnnounceConfig,
}

impl Announcer {
    pub fn new(config: AnnounceConfig) -> Self {
        Self { config }
    }

    /// Builds the packet from local system state.
    ///
    /// Each fact is echoed to stdout as it is found. A missing IPv4 address
    /// on the address interface leaves `ciaddr` at 0.0.0.0; every other
    /// lookup failure is returned.
    pub async fn build_packet(&self) -> Result<AnnouncePacket, IammeError> {
        let mut packet = AnnouncePacket::new();

        let mac = sysinfo::read_mac_address(&self.config.sysfs_root, &self.config.interface).await?;
        println!("mac: {mac}");
        packet.set_chaddr(mac);

        let addrs = sysinfo::interface_addresses()?;
        match sysinfo::find_ipv4(&addrs, &self.config.address_interface) {
            Some(ip) => {
                println!("ip: {ip}");
                packet.set_ciaddr(ip);
            }
            None => tracing::debug!(
                "No IPv4 address on '{}', leaving ciaddr unset",
                self.config.address_interface
            ),
        }

        let hostname = sysinfo::hostname()?;
        println!("host: {hostname}");
        packet.set_hostname(hostname);

        Ok(packet)
    }

    /// Builds the packet and sends it to the configured server.
    pub async fn run(&self) -> Result<Announcement, IammeError> {
        let payload = self.build_packet().await?.encode();
        let destination = self.config.destination();

        let bytes_sent = match network::send_datagram(&payload, destination).await {
            Ok(len) => {
                tracing::info!("Sent {} byte announcement to {}", len, destination);
                Some(len)
            }
            Err(e) => {
                tracing::warn!("Announcement to {} was not sent: {}", destination, e);
                None
            }
        };

        Ok(Announcement {
            payload,
            destination,
            bytes_sent,
        })
    }
}
