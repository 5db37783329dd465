use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IammeError {
    #[error("error opening sysfs address (path: {})", path.display())]
    SysfsOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading sysfs address (path: {})", path.display())]
    SysfsRead {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("error reading {interface} address: got {len} characters, expected at least {expected}")]
    SysfsShortRead {
        interface: String,
        len: usize,
        expected: usize,
    },

    #[error("Failed to parse MAC address: {0}")]
    MacParse(String),

    #[error("error reading interface addresses")]
    InterfaceList(#[source] io::Error),

    #[error("error getting hostname")]
    Hostname(#[source] io::Error),

    #[error("hostname is {len} bytes long, the limit is {max}")]
    HostnameTooLong { len: usize, max: usize },
}
