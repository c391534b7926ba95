//! Popup notification system.
//!
//! Decoded messages go through a FIFO queue and are shown one at a time as a
//! bar that slides out of a screen corner, holds, and slides back.

pub mod animation;
pub mod content;
pub mod easing;
pub mod icon;
pub mod position;
pub mod queue;
pub mod sequencer;
pub mod types;


pub use sequencer::{Popup, PopupOptions, TimerKind};
pub use types::{DisplayPhase, Message};

use popup_render::{FixedAdvanceMeasurer, GlyphMeasurer, TextMeasurer};

use crate::config::{AppConfig, SettingsManager};
use crate::surface::{Style, Surface};
use icon::IconResolver;

/// Build the popup for `surface` from the loaded configuration.
pub fn initialize<S: Surface>(
    config: &AppConfig,
    settings: &SettingsManager,
    mut surface: S,
) -> Popup<S> {
    surface.apply_style(&Style::from_config(config));
    let popup = Popup::new(
        PopupOptions::from_config(config),
        surface,
        build_measurer(config),
        IconResolver::new(settings.clone()),
    );
    tracing::info!(
        position = popup.anchor().as_str(),
        height = config.height,
        "Notification popup initialized"
    );
    popup
}

/// Text measurer for the configured fonts, or a size-based estimate.
pub fn build_measurer(config: &AppConfig) -> Box<dyn TextMeasurer> {
    let estimate = || -> Box<dyn TextMeasurer> {
        Box::new(FixedAdvanceMeasurer::for_pixel_size(config.font_size))
    };

    let Some(font) = &config.font else {
        tracing::info!("No gui/font configured, estimating text widths");
        return estimate();
    };

    match GlyphMeasurer::from_files(font, config.bold_font.as_deref(), config.font_size as f32) {
        Ok(measurer) => Box::new(measurer),
        Err(e) => {
            tracing::warn!(
                font = %font.display(),
                error = %e,
                "Font unusable, estimating text widths"
            );
            estimate()
        }
    }
}
