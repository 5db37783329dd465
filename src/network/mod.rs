use std::{
    io,
    net::{Ipv4Addr, SocketAddr, SocketAddrV4, UdpSocket as StdUdpSocket},
};
use thiserror::Error;
use tokio::net::UdpSocket as TokioUdpSocket;

/// Defines all possible errors for socket operations.
#[derive(Error, Debug)]
pub enum SocketError {
    #[error("Failed to create a new socket")]
    CreateSocket(#[source] io::Error),

    #[error("Failed to bind socket to address")]
    BindSocket(#[source] io::Error),

    #[error("Failed to set socket to non-blocking mode")]
    SetNonBlocking(#[source] io::Error),

    #[error("Failed to convert socket to TokioUdpSocket")]
    ConvertToTokio(#[source] io::Error),

    #[error("Failed to send datagram to {destination}")]
    Send {
        destination: SocketAddrV4,
        #[source]
        source: io::Error,
    },
}

/// Creates a `tokio::net::UdpSocket` bound to an ephemeral port on all
/// IPv4 addresses.
///
/// The socket is never bound to a device and never receives; it only carries
/// the outgoing announcement.
pub fn new_tokio_socket() -> Result<TokioUdpSocket, SocketError> {
    use socket2::{Domain, Protocol, Socket, Type};

    let socket2 = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))
        .map_err(SocketError::CreateSocket)?;

    let addr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0));
    socket2.bind(&addr.into()).map_err(SocketError::BindSocket)?;

    // Convert to a standard socket, then into a Tokio socket.
    let std_socket: StdUdpSocket = socket2.into();
    std_socket
        .set_nonblocking(true)
        .map_err(SocketError::SetNonBlocking)?;
    TokioUdpSocket::from_std(std_socket).map_err(SocketError::ConvertToTokio)
}

/// Sends `payload` as a single datagram to `destination`.
///
/// Nothing is awaited beyond the send itself. The socket is closed when this
/// returns, whatever the outcome.
pub async fn send_datagram(payload: &[u8], destination: SocketAddrV4) -> Result<usize, SocketError> {
    let socket = new_tokio_socket()?;
    tracing::debug!(
        "Sending {} bytes from {:?} to {}",
        payload.len(),
        socket.local_addr().ok(),
        destination
    );
    socket
        .send_to(payload, destination)
        .await
        .map_err(|source| SocketError::Send {
            destination,
            source,
        })
}
