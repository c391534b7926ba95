//! UDP intake for notification datagrams.

use anyhow::Context;
use tokio::net::UdpSocket;

/// Bind the notification socket. Failing to bind is fatal for the daemon.
pub async fn bind(host: &str, port: u16) -> Result<UdpSocket, anyhow::Error> {
    let socket = UdpSocket::bind((host, port))
        .await
        .with_context(|| format!("Unable to listen on {host}:{port}"))?;
    tracing::info!(addr = %socket.local_addr()?, "Listening for notifications");
    Ok(socket)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_ephemeral_port() {
        let socket = bind("127.0.0.1", 0).await.unwrap();
        assert_ne!(socket.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn port_in_use_is_an_error() {
        let first = bind("127.0.0.1", 0).await.unwrap();
        let port = first.local_addr().unwrap().port();
        let err = bind("127.0.0.1", port).await.unwrap_err();
        assert!(err.to_string().contains(&port.to_string()));
    }
}
