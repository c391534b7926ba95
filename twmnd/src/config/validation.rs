//! Setting value validation.

use regex::Regex;
use std::sync::LazyLock;

static RE_HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").unwrap()
});
static RE_NAMED_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());

const POSITIONS: [&str; 4] = ["top_left", "top_right", "bottom_left", "bottom_right"];

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "gui/position" => {
            let position = value.trim().to_lowercase();
            if !POSITIONS.contains(&position.as_str()) {
                return Err("must be top_left, top_right, bottom_left, or bottom_right".into());
            }
        }
        "gui/background_color" | "gui/foreground_color" => {
            if !is_color(value) {
                return Err("must be #rgb, #rrggbb, #aarrggbb, or a colour name".into());
            }
        }
        "gui/font_size" => validate_int_range(value, 1, 200)?,
        "gui/height" => validate_int_range(value, 1, 1024)?,
        "gui/screen_width" | "gui/screen_height" => validate_int_range(value, 1, 16384)?,
        "main/port" => validate_int_range(value, 1, 65535)?,
        "main/host" => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
        }
        "main/duration" => validate_int_range(value, 0, 600_000)?,
        "main/animation_duration" => validate_int_range(value, 100, 60_000)?,
        _ => {}
    }
    Ok(())
}

fn is_color(value: &str) -> bool {
    value.is_empty() || RE_HEX_COLOR.is_match(value) || RE_NAMED_COLOR.is_match(value)
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.trim().parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
