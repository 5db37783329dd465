//! Fixed-layout DHCP request carrying the hostname option.
//!
//! The packet is always [`PACKET_LEN`] bytes. Every field is written
//! individually, in wire order, with multi-byte fields in network byte order.

use crate::error::IammeError;
use bytes::{BufMut as _, Bytes, BytesMut};
use std::{fmt, net::Ipv4Addr, str::FromStr};

pub const BOOTREQUEST: u8 = 1;
pub const HTYPE_ETHERNET: u8 = 1;
pub const ETHERNET_ADDR_LEN: usize = 6;
/// Transaction id of every announcement. No reply is ever matched against it.
pub const IAMME_XID: u32 = 0x1701D;

pub const CHADDR_LEN: usize = 16;
pub const SNAME_LEN: usize = 64;
pub const FILE_LEN: usize = 128;

pub const MAGIC_COOKIE: [u8; 4] = [0x63, 0x82, 0x53, 0x63];
pub const OPT_HOSTNAME: u8 = 12;
pub const OPT_MESSAGE_TYPE: u8 = 53;
pub const OPT_END: u8 = 255;
pub const DHCPREQUEST: u8 = 3;

/// Largest hostname the name option can carry (Linux `HOST_NAME_MAX`).
pub const HOST_NAME_MAX: usize = 64;

pub const CHADDR_OFFSET: usize = 28;
pub const OPTIONS_OFFSET: usize = CHADDR_OFFSET + CHADDR_LEN + SNAME_LEN + FILE_LEN;
pub const MESSAGE_TYPE_OFFSET: usize = OPTIONS_OFFSET + MAGIC_COOKIE.len();
pub const HOSTNAME_OFFSET: usize = MESSAGE_TYPE_OFFSET + 3;
pub const END_OFFSET: usize = HOSTNAME_OFFSET + 2 + HOST_NAME_MAX;
pub const PACKET_LEN: usize = END_OFFSET + 1;

/// A 48-bit Ethernet hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MacAddr([u8; ETHERNET_ADDR_LEN]);

impl MacAddr {
    pub const fn new(octets: [u8; ETHERNET_ADDR_LEN]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; ETHERNET_ADDR_LEN] {
        self.0
    }
}

impl FromStr for MacAddr {
    type Err = IammeError;

    /// Parses the sysfs form, six colon-separated hex octets such as
    /// `0a:1b:2c:3d:4e:5f`. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut octets = [0u8; ETHERNET_ADDR_LEN];
        let mut parts = s.split(':');
        for octet in octets.iter_mut() {
            let part = parts
                .next()
                .ok_or_else(|| IammeError::MacParse(format!("'{s}' has fewer than 6 octets")))?;
            if part.len() != 2 {
                return Err(IammeError::MacParse(format!(
                    "octet '{part}' in '{s}' is not two hex digits"
                )));
            }
            *octet = u8::from_str_radix(part, 16)
                .map_err(|e| IammeError::MacParse(format!("octet '{part}' in '{s}': {e}")))?;
        }
        if parts.next().is_some() {
            return Err(IammeError::MacParse(format!("'{s}' has more than 6 octets")));
        }
        Ok(Self(octets))
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// Hostname bytes as they go on the wire, at most [`HOST_NAME_MAX`] long.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hostname(Bytes);

impl Hostname {
    pub fn new(name: impl Into<Bytes>) -> Result<Self, IammeError> {
        let name = name.into();
        if name.len() > HOST_NAME_MAX {
            return Err(IammeError::HostnameTooLong {
                len: name.len(),
                max: HOST_NAME_MAX,
            });
        }
        Ok(Self(name))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// The announcement datagram.
///
/// Only the client address, hardware address and hostname vary; every other
/// field is fixed or zero. Build it with [`AnnouncePacket::new`], fill it in
/// with the setters, then [`encode`](AnnouncePacket::encode) it once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncePacket {
    xid: u32,
    ciaddr: Ipv4Addr,
    chaddr: MacAddr,
    hostname: Hostname,
}

impl Default for AnnouncePacket {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnouncePacket {
    pub fn new() -> Self {
        Self {
            xid: IAMME_XID,
            ciaddr: Ipv4Addr::UNSPECIFIED,
            chaddr: MacAddr::default(),
            hostname: Hostname::default(),
        }
    }

    pub fn set_chaddr(&mut self, mac: MacAddr) -> &mut Self {
        self.chaddr = mac;
        self
    }

    pub fn set_ciaddr(&mut self, addr: Ipv4Addr) -> &mut Self {
        self.ciaddr = addr;
        self
    }

    pub fn set_hostname(&mut self, hostname: Hostname) -> &mut Self {
        self.hostname = hostname;
        self
    }

    pub fn xid(&self) -> u32 {
        self.xid
    }

    pub fn ciaddr(&self) -> Ipv4Addr {
        self.ciaddr
    }

    pub fn chaddr(&self) -> MacAddr {
        self.chaddr
    }

    pub fn hostname(&self) -> &Hostname {
        &self.hostname
    }

    /// Serializes the packet into exactly [`PACKET_LEN`] bytes.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(PACKET_LEN);

        buf.put_u8(BOOTREQUEST);
        buf.put_u8(HTYPE_ETHERNET);
        buf.put_u8(ETHERNET_ADDR_LEN as u8);
        buf.put_u8(0); // hops
        buf.put_u32(self.xid);
        buf.put_u16(0); // secs
        buf.put_u16(0); // flags

        buf.put_slice(&self.ciaddr.octets());
        buf.put_slice(&Ipv4Addr::UNSPECIFIED.octets()); // yiaddr
        buf.put_slice(&Ipv4Addr::UNSPECIFIED.octets()); // siaddr
        buf.put_slice(&Ipv4Addr::UNSPECIFIED.octets()); // giaddr

        buf.put_slice(&self.chaddr.octets());
        buf.put_bytes(0, CHADDR_LEN - ETHERNET_ADDR_LEN);
        buf.put_bytes(0, SNAME_LEN);
        buf.put_bytes(0, FILE_LEN);

        buf.put_slice(&MAGIC_COOKIE);

        buf.put_u8(OPT_MESSAGE_TYPE);
        buf.put_u8(1);
        buf.put_u8(DHCPREQUEST);

        // Trailing bytes of the name field stay zero, which reads as PAD.
        let name = self.hostname.as_bytes();
        buf.put_u8(OPT_HOSTNAME);
        buf.put_u8(name.len() as u8);
        buf.put_slice(name);
        buf.put_bytes(0, HOST_NAME_MAX - name.len());

        buf.put_u8(OPT_END);

        debug_assert_eq!(buf.len(), PACKET_LEN);
        tracing::debug!(
            "Encoded announcement: xid={:#x}, ciaddr={}, chaddr={}, hostname={}",
            self.xid,
            self.ciaddr,
            self.chaddr,
            self.hostname
        );
        buf.freeze()
    }
}
