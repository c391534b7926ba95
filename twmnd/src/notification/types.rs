//! Notification type definitions.

use std::collections::BTreeMap;

use popup_render::Icon;
use twmn_protocol::Fields;

use super::icon::IconResolver;

/// A decoded notification waiting to be displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Present whenever the datagram carried an `icon` field, even if it
    /// could not be resolved (the placeholder is used then).
    pub icon: Option<Icon>,
    /// Fields without a meaning for the popup, kept as received.
    pub extra: BTreeMap<String, String>,
}

impl Message {
    pub fn from_fields(mut fields: Fields, icons: &IconResolver) -> Self {
        let title = fields.remove("title");
        let content = fields.remove("content");
        let icon = fields.remove("icon").map(|value| icons.resolve(&value));
        Self {
            title,
            content,
            icon,
            extra: fields.into_inner(),
        }
    }

    /// Text-only message, mostly for tests and local injection.
    pub fn text(title: Option<&str>, content: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            content: content.map(str::to_string),
            icon: None,
            extra: BTreeMap::new(),
        }
    }
}

/// Phase of the display cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPhase {
    Idle,
    AnimatingForward,
    Holding,
    AnimatingBackward,
}
