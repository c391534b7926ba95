//! Text measurement for sizing the popup bar.
//!
//! The bar's width is the sum of its labels' advance widths, so only
//! horizontal metrics are needed here; nothing is rasterized.

use std::path::Path;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use tracing::debug;

use crate::{RenderError, Result};

/// Weight used to pick the face a string is measured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Measures the rendered pixel width of a single line of text.
pub trait TextMeasurer {
    fn measure(&self, text: &str, weight: FontWeight) -> u32;
}

/// Measures with real glyph advances and kerning from TTF/OTF faces.
pub struct GlyphMeasurer {
    regular: FontVec,
    bold: Option<FontVec>,
    scale: PxScale,
}

impl GlyphMeasurer {
    pub fn new(regular: FontVec, bold: Option<FontVec>, pixel_size: f32) -> Self {
        Self {
            regular,
            bold,
            scale: PxScale::from(pixel_size),
        }
    }

    /// Load the regular face and an optional bold face from disk.
    ///
    /// Without a bold face, bold text is measured with the regular one.
    pub fn from_files(regular: &Path, bold: Option<&Path>, pixel_size: f32) -> Result<Self> {
        let regular = load_font(regular)?;
        let bold = bold.map(load_font).transpose()?;
        debug!(pixel_size, has_bold = bold.is_some(), "Loaded measurement fonts");
        Ok(Self::new(regular, bold, pixel_size))
    }

    fn face(&self, weight: FontWeight) -> &FontVec {
        match (weight, &self.bold) {
            (FontWeight::Bold, Some(bold)) => bold,
            _ => &self.regular,
        }
    }
}

impl TextMeasurer for GlyphMeasurer {
    fn measure(&self, text: &str, weight: FontWeight) -> u32 {
        measure_text_width(self.face(weight), self.scale, text)
    }
}

/// Approximates widths with a constant per-character advance.
///
/// Used when no font file is configured.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasurer {
    pub regular: u32,
    pub bold: u32,
}

impl FixedAdvanceMeasurer {
    /// Estimate advances from a pixel size (roughly 0.6em, one pixel wider when bold).
    pub fn for_pixel_size(pixel_size: u32) -> Self {
        let regular = (pixel_size * 3).div_ceil(5).max(1);
        Self {
            regular,
            bold: regular + 1,
        }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, weight: FontWeight) -> u32 {
        let advance = match weight {
            FontWeight::Regular => self.regular,
            FontWeight::Bold => self.bold,
        };
        text.chars().count() as u32 * advance
    }
}

/// Measure the pixel width of a string at the given font and scale.
pub fn measure_text_width<F: Font>(font: &F, scale: PxScale, text: &str) -> u32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width.ceil() as u32
}

fn load_font(path: &Path) -> Result<FontVec> {
    let data = std::fs::read(path)?;
    FontVec::try_from_vec(data).map_err(|e| RenderError::InvalidFont {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const DEJAVU_DIR: &str = "/usr/share/fonts/truetype/dejavu";

    /// DejaVu Sans regular and bold, when installed.
    fn system_faces() -> Option<(PathBuf, PathBuf)> {
        let dir = Path::new(DEJAVU_DIR);
        let regular = dir.join("DejaVuSans.ttf");
        let bold = dir.join("DejaVuSans-Bold.ttf");
        (regular.exists() && bold.exists()).then_some((regular, bold))
    }

    #[test]
    fn fixed_advance_counts_characters() {
        let m = FixedAdvanceMeasurer {
            regular: 7,
            bold: 8,
        };
        assert_eq!(m.measure("Build", FontWeight::Regular), 35);
        assert_eq!(m.measure(" OK ", FontWeight::Bold), 32);
        assert_eq!(m.measure("", FontWeight::Bold), 0);
        // Multi-byte characters count once.
        assert_eq!(m.measure("é", FontWeight::Regular), 7);
    }

    #[test]
    fn fixed_advance_from_pixel_size() {
        let m = FixedAdvanceMeasurer::for_pixel_size(13);
        assert_eq!(m.regular, 8);
        assert_eq!(m.bold, 9);
        assert_eq!(FixedAdvanceMeasurer::for_pixel_size(0).regular, 1);
    }

    #[test]
    fn missing_font_file_is_an_io_error() {
        let result = GlyphMeasurer::from_files(Path::new("/nonexistent/font.ttf"), None, 13.0);
        assert!(matches!(result, Err(RenderError::Io(_))));
    }

    #[test]
    fn garbage_font_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        let result = GlyphMeasurer::from_files(&path, None, 13.0);
        assert!(matches!(result, Err(RenderError::InvalidFont { .. })));
    }

    #[test]
    fn glyph_widths_follow_the_face() {
        let Some((regular, bold)) = system_faces() else {
            eprintln!("no DejaVu fonts under {DEJAVU_DIR}, skipping");
            return;
        };
        let m = GlyphMeasurer::from_files(&regular, Some(&bold), 13.0).unwrap();

        assert_eq!(m.measure("", FontWeight::Regular), 0);
        let narrow = m.measure("iii", FontWeight::Regular);
        let wide = m.measure("WWW", FontWeight::Regular);
        assert!(narrow > 0 && narrow < wide, "{narrow} vs {wide}");
        assert!(m.measure("Build", FontWeight::Bold) > m.measure("Build", FontWeight::Regular));
    }

    #[test]
    fn glyph_width_scales_with_pixel_size_and_includes_kerning() {
        let Some((regular, _)) = system_faces() else {
            eprintln!("no DejaVu fonts under {DEJAVU_DIR}, skipping");
            return;
        };
        let font = load_font(&regular).unwrap();

        let small = measure_text_width(&font, PxScale::from(13.0), "Notification");
        let large = measure_text_width(&font, PxScale::from(26.0), "Notification");
        assert!(large.abs_diff(small * 2) <= 2, "{small} vs {large}");

        // Whole-string width never exceeds the sum of per-character widths.
        let scale = PxScale::from(13.0);
        let pair = measure_text_width(&font, scale, "AV");
        let apart = measure_text_width(&font, scale, "A") + measure_text_width(&font, scale, "V");
        assert!(pair <= apart, "{pair} vs {apart}");
    }

    #[test]
    fn bold_falls_back_to_regular_face() {
        let Some((regular, _)) = system_faces() else {
            eprintln!("no DejaVu fonts under {DEJAVU_DIR}, skipping");
            return;
        };
        let m = GlyphMeasurer::from_files(&regular, None, 13.0).unwrap();
        assert_eq!(
            m.measure("Build", FontWeight::Bold),
            m.measure("Build", FontWeight::Regular)
        );
    }
}
