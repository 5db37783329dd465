use crate::{error::IammeError, v4::MacAddr};
use std::path::Path;
use tokio::fs;

/// Length of the sysfs text form, `aa:bb:cc:dd:ee:ff`.
pub const SYSFS_ETHADDR_LEN: usize = 17;

/// Reads and parses the hardware address of `interface` below `sysfs_root`
/// (normally `/sys/class/net`).
pub async fn read_mac_address(sysfs_root: &Path, interface: &str) -> Result<MacAddr, IammeError> {
    let path = sysfs_root.join(interface).join("address");
    tracing::debug!("Reading hardware address from {}", path.display());

    let raw = fs::read(&path)
        .await
        .map_err(|source| IammeError::SysfsOpen {
            path: path.clone(),
            source,
        })?;
    let text = std::str::from_utf8(&raw).map_err(|source| IammeError::SysfsRead {
        path: path.clone(),
        source,
    })?;

    let text = text.trim_end();
    if text.len() < SYSFS_ETHADDR_LEN {
        return Err(IammeError::SysfsShortRead {
            interface: interface.to_string(),
            len: text.len(),
            expected: SYSFS_ETHADDR_LEN,
        });
    }

    // Longer link-layer addresses (InfiniBand, tunnels) keep their first six octets.
    text.get(..SYSFS_ETHADDR_LEN)
        .ok_or_else(|| IammeError::MacParse(format!("'{text}' is not an ASCII address")))?
        .parse()
}
