use crate::event_loop::LoopStats;
use crate::notification::Popup;
use crate::surface::Surface;

/// Resolve on Ctrl-C, or SIGTERM on unix.
pub async fn wait_for_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => tracing::info!("Received Ctrl-C"),
                    _ = term.recv() => tracing::info!("Received SIGTERM"),
                }
                return;
            }
            Err(e) => tracing::warn!("Cannot install SIGTERM handler: {e}"),
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

pub fn graceful_shutdown<S: Surface>(popup: &mut Popup<S>, stats: LoopStats) {
    tracing::info!("Shutdown sequence started");

    popup.surface_mut().hide();

    let pending = popup.queue().len();
    if pending > 0 {
        tracing::warn!("Shutdown: discarding {pending} queued notifications");
        for message in popup.queue().iter() {
            tracing::debug!(
                title = message.title.as_deref().unwrap_or(""),
                "Discarded notification"
            );
        }
    }

    tracing::info!(
        received = stats.datagrams,
        accepted = stats.accepted,
        dropped = stats.dropped,
        displayed = popup.displayed(),
        "Shutdown sequence completed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    use popup_render::FixedAdvanceMeasurer;

    use crate::config::SettingsManager;
    use crate::notification::icon::IconResolver;
    use crate::notification::position::{Anchor, Size};
    use crate::notification::{Message, PopupOptions};
    use crate::surface::RecordingSurface;

    fn popup() -> Popup<RecordingSurface> {
        let options = PopupOptions {
            anchor: Anchor::TopRight,
            height: 18,
            hold: Duration::from_millis(3000),
            animation: Duration::from_millis(1000),
            sound: None,
        };
        Popup::new(
            options,
            RecordingSurface::new(Size::new(1920, 1080)),
            Box::new(FixedAdvanceMeasurer::for_pixel_size(13)),
            IconResolver::new(SettingsManager::default()),
        )
    }

    #[test]
    fn shutdown_hides_a_visible_popup() {
        let t0 = Instant::now();
        let mut p = popup();
        p.enqueue(Message::text(Some("Showing"), None), t0);
        p.enqueue(Message::text(Some("Waiting"), None), t0);
        p.poll(t0 + Duration::from_millis(30));
        p.poll(t0 + Duration::from_millis(500));
        assert!(p.surface().visible);
        let hides = p.surface().hides;

        graceful_shutdown(&mut p, LoopStats::default());

        assert!(!p.surface().visible);
        assert_eq!(p.surface().hides, hides + 1);
        // Nothing is replayed; the remaining messages are only reported.
        assert_eq!(p.queue().len(), 2);
        let titles: Vec<_> = p.queue().iter().map(|m| m.title.as_deref()).collect();
        assert_eq!(titles, [Some("Showing"), Some("Waiting")]);
    }
}
