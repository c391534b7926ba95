//! Corner anchoring of the popup bar.

use serde::Serialize;

/// Integer size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// On-screen rectangle; the origin is the top-left corner of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Screen corner the popup is pinned to.
///
/// Two edges stay on the screen boundary; the bar grows away from the
/// corner horizontally. The height never animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Default for Anchor {
    fn default() -> Self {
        Self::TopRight
    }
}

impl Anchor {
    pub fn from_str_setting(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "top_left" => Self::TopLeft,
            "bottom_left" => Self::BottomLeft,
            "bottom_right" => Self::BottomRight,
            "top_right" => Self::TopRight,
            other => {
                tracing::warn!("Unknown position {other:?}, using top_right");
                Self::TopRight
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top_left",
            Self::TopRight => "top_right",
            Self::BottomLeft => "bottom_left",
            Self::BottomRight => "bottom_right",
        }
    }

    /// Rectangle for a bar of `width` × `height` on a screen of `screen` size.
    pub fn rect(self, width: u32, height: u32, screen: Size) -> Rect {
        let right = screen.width as i32 - width as i32;
        let bottom = screen.height as i32 - height as i32;
        let (x, y) = match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (right, 0),
            Self::BottomLeft => (0, bottom),
            Self::BottomRight => (right, bottom),
        };
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Size = Size {
        width: 1920,
        height: 1080,
    };

    fn rect(x: i32, y: i32, width: u32, height: u32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn each_corner_pins_two_edges() {
        let cases = [
            (Anchor::TopLeft, rect(0, 0, 100, 18)),
            (Anchor::TopRight, rect(1820, 0, 100, 18)),
            (Anchor::BottomLeft, rect(0, 1062, 100, 18)),
            (Anchor::BottomRight, rect(1820, 1062, 100, 18)),
        ];
        for (anchor, expected) in cases {
            assert_eq!(anchor.rect(100, 18, SCREEN), expected, "{anchor:?}");
        }
    }

    #[test]
    fn right_anchored_bar_slides_left_as_it_grows() {
        let narrow = Anchor::TopRight.rect(10, 18, SCREEN);
        let wide = Anchor::TopRight.rect(300, 18, SCREEN);
        assert_eq!(narrow.x + narrow.width as i32, 1920);
        assert_eq!(wide.x + wide.width as i32, 1920);
        assert!(wide.x < narrow.x);
    }

    #[test]
    fn parses_setting_values() {
        assert_eq!(Anchor::from_str_setting("top_left"), Anchor::TopLeft);
        assert_eq!(Anchor::from_str_setting("BOTTOM_RIGHT"), Anchor::BottomRight);
        assert_eq!(Anchor::from_str_setting("diagonal"), Anchor::TopRight);
        let all = [
            Anchor::TopLeft,
            Anchor::TopRight,
            Anchor::BottomLeft,
            Anchor::BottomRight,
        ];
        for anchor in all {
            assert_eq!(Anchor::from_str_setting(anchor.as_str()), anchor);
        }
    }
}
