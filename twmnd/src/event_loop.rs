//! Single-task event loop.
//!
//! Datagram reception, sequencer timers and animation frames are all
//! dispatched from one task, so the popup state needs no locking. Each wake
//! is followed by one [`Popup::poll`] with the current instant.

use std::future::Future;
use std::time::Instant;

use tokio::net::UdpSocket;
use twmn_protocol::MAX_DATAGRAM_SIZE;

use crate::notification::Popup;
use crate::surface::Surface;

/// Counters reported when the loop exits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoopStats {
    pub datagrams: u64,
    pub accepted: u64,
    pub dropped: u64,
}

/// Run until `shutdown` resolves.
pub async fn run<S: Surface, F: Future<Output = ()>>(
    socket: &UdpSocket,
    popup: &mut Popup<S>,
    shutdown: F,
) -> LoopStats {
    tokio::pin!(shutdown);
    let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
    let mut stats = LoopStats::default();

    loop {
        let deadline = popup.next_deadline();
        let received = tokio::select! {
            biased;
            _ = &mut shutdown => {
                tracing::info!("Event loop stopping");
                break;
            }
            received = socket.recv_from(&mut buf) => Some(received),
            _ = sleep_until(deadline) => None,
        };

        match received {
            Some(Ok((len, peer))) => {
                stats.datagrams += 1;
                tracing::debug!(%peer, len, "Datagram received");
                if popup.on_datagram(&buf[..len], Instant::now()) {
                    stats.accepted += 1;
                } else {
                    stats.dropped += 1;
                }
            }
            Some(Err(e)) => tracing::warn!(error = %e, "Failed to receive datagram"),
            None => {}
        }

        popup.poll(Instant::now());
    }

    stats
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await,
        None => std::future::pending::<()>().await,
    }
}
