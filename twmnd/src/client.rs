//! Sending side of the protocol, used by `twmnc`.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use anyhow::Context;
use tokio::net::UdpSocket;
use twmn_protocol::{Fields, MAX_DATAGRAM_SIZE};

/// Encode `fields` and send them as one datagram to `host:port`.
///
/// Returns the number of bytes sent. Delivery is not confirmed.
pub async fn send(host: &str, port: u16, fields: &Fields) -> Result<usize, anyhow::Error> {
    let payload = twmn_protocol::encode(fields)?;
    if payload.len() > MAX_DATAGRAM_SIZE {
        anyhow::bail!(
            "notification is {} bytes, limit is {MAX_DATAGRAM_SIZE}",
            payload.len()
        );
    }

    let mut target = tokio::net::lookup_host((host, port))
        .await
        .with_context(|| format!("cannot resolve {host}"))?
        .next()
        .with_context(|| format!("no address for {host}"))?;
    // A daemon listening on every interface is reached through loopback.
    if target.ip().is_unspecified() {
        target.set_ip(loopback(target.ip()));
    }
    let local = if target.is_ipv4() {
        "0.0.0.0:0"
    } else {
        "[::]:0"
    };

    let socket = UdpSocket::bind(local).await?;
    let sent = socket
        .send_to(payload.as_bytes(), target)
        .await
        .with_context(|| format!("failed to send to {target}"))?;
    tracing::debug!(%target, bytes = sent, "Notification sent");
    Ok(sent)
}

fn loopback(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::LOCALHOST),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listener;

    #[tokio::test]
    async fn sent_datagram_decodes_on_the_daemon_side() {
        let socket = listener::bind("127.0.0.1", 0).await.unwrap();
        let port = socket.local_addr().unwrap().port();
        let fields: Fields = [("title", "Build"), ("content", "OK & done")]
            .into_iter()
            .collect();

        let sent = send("127.0.0.1", port, &fields).await.unwrap();

        let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
        let (len, _) = socket.recv_from(&mut buf).await.unwrap();
        assert_eq!(len, sent);
        assert_eq!(twmn_protocol::decode(&buf[..len]).unwrap(), fields);
    }

    #[tokio::test]
    async fn unspecified_host_is_sent_to_loopback() {
        let socket = listener::bind("127.0.0.1", 0).await.unwrap();
        let port = socket.local_addr().unwrap().port();
        let fields: Fields = [("title", "Any")].into_iter().collect();

        send("0.0.0.0", port, &fields).await.unwrap();

        let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
        let (len, _) = socket.recv_from(&mut buf).await.unwrap();
        assert_eq!(twmn_protocol::decode(&buf[..len]).unwrap(), fields);
    }

    #[tokio::test]
    async fn oversized_notification_is_refused() {
        let fields: Fields = [("content", "x".repeat(MAX_DATAGRAM_SIZE))]
            .into_iter()
            .collect();
        assert!(send("127.0.0.1", 9, &fields).await.is_err());
    }
}
