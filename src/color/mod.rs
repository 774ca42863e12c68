pub mod models;

use std::sync::LazyLock;
use regex::Regex;

pub static HEX_COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?[0-9a-fA-F]{6}$").unwrap()
});

pub fn is_valid_hex_color(hex: &str) -> bool {
    HEX_COLOR_PATTERN.is_match(hex)
}

/// Normalizes a color string to the canonical `#rrggbb` form, prepending
/// the `#` if it was omitted. Returns `None` for anything that is not
/// exactly 6 hex digits.
pub fn normalize_hex(hex: &str) -> Option<String> {
    is_valid_hex_color(hex)
        .then(|| format!("#{}", hex.trim_start_matches('#').to_lowercase()))
}

/// Converts RGB channels to a 6-digit lowercase hex string, without the `#`.
/// Out-of-range channels are clamped to [0, 255] rather than rejected.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    [r, g, b].iter()
        .map(|channel| format!("{:02x}", channel.round().clamp(0.0, 255.0) as u8))
        .collect()
}

/// Converts a hex string to RGB channels. Accepts an optional leading `#`
/// and 3-digit shorthand (`f00` -> `ff0000`).
///
/// Does not validate its input; malformed strings parse as 0. Callers that
/// take free text must validate first (see the picker controller).
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');

    let expanded: String = if hex.len() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_owned()
    };

    let int = u32::from_str_radix(&expanded, 16).unwrap_or(0);

    (
        ((int >> 16) & 255) as u8,
        ((int >> 8) & 255) as u8,
        (int & 255) as u8,
    )
}

/// Converts RGB channels to HSL. Hue is rounded to integer degrees as the
/// final step; saturation and lightness stay unrounded in [0, 1] so callers
/// decide when to turn them into percentages.
#[allow(clippy::float_cmp)] // channel maxima compare exactly by construction
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (i32, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = f64::midpoint(max, min);

    if max == min {
        // Achromatic (gray)
        return (0, 0.0, lightness);
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let hue = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    ((hue / 6.0 * 360.0).round() as i32, saturation, lightness)
}

/// Converts HSL to RGB channels. Hue is in degrees and may be any real;
/// it wraps through the periodic interpolation helper. Saturation and
/// lightness are fractions in [0, 1].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h / 360.0;

    if s == 0.0 {
        // Achromatic (gray)
        let channel = (l * 255.0).round() as u8;
        return (channel, channel, channel);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let channel = |t: f64| (hue_to_rgb(p, q, t) * 255.0).round() as u8;

    (
        channel(h + 1.0 / 3.0),
        channel(h),
        channel(h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
