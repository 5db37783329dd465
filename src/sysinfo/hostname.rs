use crate::{
    error::IammeError,
    v4::{packet::HOST_NAME_MAX, Hostname},
};
use std::io;

/// Returns the current system hostname.
pub fn hostname() -> Result<Hostname, IammeError> {
    // One extra byte so a maximum-length name still gets its terminator.
    let mut buf = [0u8; HOST_NAME_MAX + 1];
    // SAFETY: the buffer is valid for writes of `buf.len()` bytes.
    let ret = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
    if ret != 0 {
        return Err(IammeError::Hostname(io::Error::last_os_error()));
    }

    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    Hostname::new(buf[..len].to_vec())
}
