use clap::Parser;
use std::{
    net::{Ipv4Addr, SocketAddrV4},
    path::PathBuf,
};

pub const DHCP_SERVER_PORT: u16 = 67;
/// Interface whose IPv4 address fills `ciaddr`, independent of the
/// interface given on the command line.
pub const DEFAULT_ADDRESS_INTERFACE: &str = "eth0";
pub const SYSFS_NET_ROOT: &str = "/sys/class/net";

#[derive(Parser, Debug)]
#[command(name = "iamme", version, about, long_about = None)]
pub struct Args {
    /// The network interface whose hardware address is announced (e.g., 'eth0')
    pub interface: String,

    /// The DHCP/DNS server to notify, as a dotted-decimal IPv4 address
    pub dhcp_server: Ipv4Addr,

    /// Anything after the server address is accepted and ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,
}

pub struct AnnounceConfig {
    pub interface: String,
    pub server: Ipv4Addr,
    pub server_port: u16,
    pub address_interface: String,
    pub sysfs_root: PathBuf,
}

impl AnnounceConfig {
    pub fn new(interface: String, server: Ipv4Addr) -> Self {
        Self {
            interface,
            server,
            server_port: DHCP_SERVER_PORT,
            address_interface: DEFAULT_ADDRESS_INTERFACE.to_string(),
            sysfs_root: PathBuf::from(SYSFS_NET_ROOT),
        }
    }

    pub fn destination(&self) -> SocketAddrV4 {
        SocketAddrV4::new(self.server, self.server_port)
    }
}

impl From<Args> for AnnounceConfig {
    fn from(args: Args) -> Self {
        Self::new(args.interface, args.dhcp_server)
    }
}
