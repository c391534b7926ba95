//! Contents of the popup bar for one message.

use popup_render::{FontWeight, ICON_CROP_SIZE, Icon, TextMeasurer};

use super::types::Message;

/// One text label of the bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextView {
    pub text: String,
    pub bold: bool,
}

/// Icon, title and text labels, laid out left to right with no spacing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentView {
    pub icon: Option<Icon>,
    pub title: TextView,
    pub text: TextView,
}

impl ContentView {
    pub fn from_message(message: &Message) -> Self {
        let icon = message
            .icon
            .as_ref()
            .map(|icon| icon.cropped(ICON_CROP_SIZE));

        let title = match &message.title {
            Some(title) => TextView {
                text: if icon.is_some() {
                    format!(" {title}")
                } else {
                    title.clone()
                },
                bold: true,
            },
            None => TextView::default(),
        };

        let text = match &message.content {
            Some(content) => TextView {
                text: format!(" {content} "),
                bold: false,
            },
            None => TextView::default(),
        };

        Self { icon, title, text }
    }

    /// Width the bar needs to show everything.
    ///
    /// The title is measured with regular metrics and the text with bold
    /// metrics, whatever weight each is drawn with.
    pub fn width(&self, measurer: &dyn TextMeasurer) -> u32 {
        let icon = self.icon.as_ref().map_or(0, Icon::width);
        measurer.measure(&self.title.text, FontWeight::Regular)
            + measurer.measure(&self.text.text, FontWeight::Bold)
            + icon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;
    use popup_render::FixedAdvanceMeasurer;

    const M: FixedAdvanceMeasurer = FixedAdvanceMeasurer {
        regular: 7,
        bold: 8,
    };

    #[test]
    fn empty_message_has_zero_width() {
        let view = ContentView::from_message(&Message::text(None, None));
        assert_eq!(view, ContentView::default());
        assert_eq!(view.width(&M), 0);
    }

    #[test]
    fn title_only_uses_regular_metrics() {
        let view = ContentView::from_message(&Message::text(Some("Build"), None));
        let expected = TextView {
            text: "Build".into(),
            bold: true,
        };
        assert_eq!(view.title, expected);
        assert_eq!(view.width(&M), M.measure("Build", FontWeight::Regular));
    }

    #[test]
    fn content_is_padded_and_measured_bold() {
        let view = ContentView::from_message(&Message::text(Some("Build"), Some("OK")));
        assert_eq!(view.text.text, " OK ");
        assert_eq!(view.width(&M), 5 * 7 + 4 * 8);
    }

    #[test]
    fn icon_prefixes_title_and_adds_cropped_width() {
        let mut msg = Message::text(Some("Mail"), None);
        msg.icon = Some(Icon::from_image(RgbaImage::new(48, 48)));
        let view = ContentView::from_message(&msg);

        assert_eq!(view.title.text, " Mail");
        assert_eq!(view.icon.as_ref().unwrap().width(), ICON_CROP_SIZE);
        assert_eq!(view.width(&M), 5 * 7 + ICON_CROP_SIZE);
    }

    #[test]
    fn placeholder_icon_counts_one_pixel() {
        let mut msg = Message::text(None, None);
        msg.icon = Some(Icon::placeholder());
        assert_eq!(ContentView::from_message(&msg).width(&M), 1);
    }
}
