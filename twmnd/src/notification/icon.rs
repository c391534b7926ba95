//! Icon lookup for the `icon` field.

use popup_render::Icon;

use crate::config::SettingsManager;

/// Resolves an `icon` field value to an image.
///
/// The value is tried as an image path first, then as a name under the
/// `icons/` settings namespace. Anything else becomes the transparent
/// placeholder, so callers always get an icon.
#[derive(Debug, Clone)]
pub struct IconResolver {
    settings: SettingsManager,
}

impl IconResolver {
    pub fn new(settings: SettingsManager) -> Self {
        Self { settings }
    }

    pub fn resolve(&self, value: &str) -> Icon {
        match Icon::load(value) {
            Ok(icon) => return icon,
            Err(e) => {
                tracing::debug!(icon = value, error = %e, "Icon is not a direct image path")
            }
        }

        if let Some(path) = self.settings.icon_path(value) {
            match Icon::load(path) {
                Ok(icon) => return icon,
                Err(e) => {
                    tracing::warn!(icon = value, path, error = %e, "Configured icon failed to load")
                }
            }
        }

        tracing::debug!(icon = value, "Using placeholder icon");
        Icon::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_png(dir: &std::path::Path, name: &str, w: u32, h: u32) -> String {
        let path = dir.join(name);
        RgbaImage::from_pixel(w, h, Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();
        path.display().to_string()
    }

    fn resolver_with_icons(entries: &[(&str, &str)]) -> IconResolver {
        let mut text = String::from("[icons]\n");
        for (name, path) in entries {
            text.push_str(&format!("{name} = {path:?}\n"));
        }
        IconResolver::new(SettingsManager::from_toml_str(&text).unwrap())
    }

    #[test]
    fn direct_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let direct = write_png(dir.path(), "direct.png", 3, 2);
        let icon = resolver_with_icons(&[]).resolve(&direct);
        assert_eq!((icon.width(), icon.height()), (3, 2));
    }

    #[test]
    fn falls_back_to_configured_icon_name() {
        let dir = tempfile::tempdir().unwrap();
        let named = write_png(dir.path(), "named.png", 5, 5);
        let icon = resolver_with_icons(&[("ok", &named)]).resolve("ok");
        assert_eq!((icon.width(), icon.height()), (5, 5));
        assert!(!icon.is_placeholder());
    }

    #[test]
    fn unknown_name_gives_placeholder() {
        let icon = resolver_with_icons(&[]).resolve("missing");
        assert!(icon.is_placeholder());
    }

    #[test]
    fn broken_configured_path_gives_placeholder() {
        let icon = resolver_with_icons(&[("ok", "/nonexistent/ok.png")]).resolve("ok");
        assert!(icon.is_placeholder());
    }
}
