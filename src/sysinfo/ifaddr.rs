use crate::error::IammeError;
use std::{
    ffi::CStr,
    io,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    ptr,
};

/// One address entry of a network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddr {
    pub name: String,
    pub addr: IpAddr,
}

/// Owns the list returned by `getifaddrs` and frees it on drop.
struct IfAddrs(*mut libc::ifaddrs);

impl Drop for IfAddrs {
    fn drop(&mut self) {
        // SAFETY: the pointer came from a successful getifaddrs call and is
        // freed exactly once.
        unsafe { libc::freeifaddrs(self.0) }
    }
}

/// Lists the IPv4 and IPv6 addresses of every configured interface, in the
/// order the system reports them. Entries of other families are skipped.
pub fn interface_addresses() -> Result<Vec<InterfaceAddr>, IammeError> {
    let mut head: *mut libc::ifaddrs = ptr::null_mut();
    // SAFETY: getifaddrs only writes the list head through the pointer.
    if unsafe { libc::getifaddrs(&mut head) } == -1 {
        return Err(IammeError::InterfaceList(io::Error::last_os_error()));
    }
    let list = IfAddrs(head);

    let mut addrs = Vec::new();
    let mut cursor = list.0;
    while !cursor.is_null() {
        // SAFETY: every node of the list stays valid until `list` is dropped.
        let ifa = unsafe { &*cursor };
        cursor = ifa.ifa_next;

        if ifa.ifa_addr.is_null() {
            continue;
        }
        // SAFETY: ifa_addr is non-null and points at a sockaddr whose
        // concrete type is given by sa_family.
        let addr = unsafe {
            match i32::from((*ifa.ifa_addr).sa_family) {
                libc::AF_INET => {
                    let sin = &*(ifa.ifa_addr as *const libc::sockaddr_in);
                    IpAddr::V4(Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr)))
                }
                libc::AF_INET6 => {
                    let sin6 = &*(ifa.ifa_addr as *const libc::sockaddr_in6);
                    IpAddr::V6(Ipv6Addr::from(sin6.sin6_addr.s6_addr))
                }
                _ => continue,
            }
        };
        // SAFETY: ifa_name is a NUL-terminated string owned by the list.
        let name = unsafe { CStr::from_ptr(ifa.ifa_name) }
            .to_string_lossy()
            .into_owned();

        addrs.push(InterfaceAddr { name, addr });
    }

    tracing::debug!("Enumerated {} interface addresses", addrs.len());
    Ok(addrs)
}

/// Returns the first IPv4 address bound to `interface`, if any.
pub fn find_ipv4(addrs: &[InterfaceAddr], interface: &str) -> Option<Ipv4Addr> {
    addrs.iter().find_map(|entry| match entry.addr {
        IpAddr::V4(ip) if entry.name == interface => Some(ip),
        _ => None,
    })
}
