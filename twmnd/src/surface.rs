//! Display surface the popup is drawn on.
//!
//! The sequencer only decides *what* is shown and *where*; a surface turns
//! that into pixels. The daemon ships a headless surface that logs geometry.

use crate::config::AppConfig;
use crate::notification::content::ContentView;
use crate::notification::position::{Rect, Size};

/// Colours and font size handed to the surface once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub background_color: String,
    pub foreground_color: String,
    pub font_size: u32,
}

impl Style {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            background_color: config.background_color.clone(),
            foreground_color: config.foreground_color.clone(),
            font_size: config.font_size,
        }
    }
}

pub trait Surface {
    /// Usable screen area the popup is anchored in.
    fn available_size(&self) -> Size;
    fn apply_style(&mut self, style: &Style);
    fn set_content(&mut self, content: &ContentView);
    fn set_geometry(&mut self, rect: Rect);
    fn show(&mut self);
    fn hide(&mut self);
}

/// Surface without a window: reports every change through `tracing`.
#[derive(Debug)]
pub struct TracingSurface {
    screen: Size,
    visible: bool,
    geometry: Rect,
}

impl TracingSurface {
    pub fn new(screen: Size) -> Self {
        Self {
            screen,
            visible: false,
            geometry: Rect::default(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }
}

impl Surface for TracingSurface {
    fn available_size(&self) -> Size {
        self.screen
    }

    fn apply_style(&mut self, style: &Style) {
        tracing::info!(
            background = %style.background_color,
            foreground = %style.foreground_color,
            font_size = style.font_size,
            "Surface style applied"
        );
    }

    fn set_content(&mut self, content: &ContentView) {
        tracing::info!(
            title = %content.title.text,
            text = %content.text.text,
            icon = ?content.icon.as_ref().map(|i| (i.width(), i.height())),
            "Popup content"
        );
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.geometry = rect;
        tracing::trace!(
            x = rect.x,
            y = rect.y,
            w = rect.width,
            h = rect.height,
            "Popup geometry"
        );
    }

    fn show(&mut self) {
        if !self.visible {
            tracing::debug!("Popup shown");
        }
        self.visible = true;
    }

    fn hide(&mut self) {
        if self.visible {
            tracing::debug!("Popup hidden");
        }
        self.visible = false;
    }
}

/// Surface that records every call, for assertions in tests.
#[cfg(test)]
#[derive(Debug)]
pub struct RecordingSurface {
    pub screen: Size,
    pub visible: bool,
    pub contents: Vec<ContentView>,
    pub geometries: Vec<Rect>,
    pub styles: Vec<Style>,
    pub hides: usize,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new(screen: Size) -> Self {
        Self {
            screen,
            visible: false,
            contents: Vec::new(),
            geometries: Vec::new(),
            styles: Vec::new(),
            hides: 0,
        }
    }

    pub fn last_geometry(&self) -> Option<Rect> {
        self.geometries.last().copied()
    }

    pub fn max_width(&self) -> u32 {
        self.geometries.iter().map(|r| r.width).max().unwrap_or(0)
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn available_size(&self) -> Size {
        self.screen
    }

    fn apply_style(&mut self, style: &Style) {
        self.styles.push(style.clone());
    }

    fn set_content(&mut self, content: &ContentView) {
        self.contents.push(content.clone());
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.geometries.push(rect);
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.hides += 1;
    }
}
