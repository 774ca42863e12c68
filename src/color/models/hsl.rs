use std::sync::LazyLock;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::color;

pub static HSL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\(\s*(\d{1,3}(?:\.\d+)?)\s*,\s*(\d{1,3}(?:\.\d+)?)%\s*,\s*(\d{1,3}(?:\.\d+)?)%\s*\)$").unwrap()
});

/// Hue in degrees, saturation and lightness as fractions in [0, 1] to
/// match the conversion core. The percentage forms only exist at the
/// string and snapshot boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl super::ColorModel for Hsl {
    fn from_hex(hex: &str) -> Self {
        let (r, g, b) = color::hex_to_rgb(hex);
        let (h, s, l) = color::rgb_to_hsl(r, g, b);

        Self { h: h as f64, s, l }
    }

    fn from_string(s: &str) -> Option<Self> {
        let captures = HSL_PATTERN.captures(s.trim())?;
        let h = captures.get(1)?.as_str().parse::<f64>().ok()?;
        let saturation = captures.get(2)?.as_str().parse::<f64>().ok()?;
        let lightness = captures.get(3)?.as_str().parse::<f64>().ok()?;

        Some(Self {
            h,
            s: saturation / 100.0,
            l: lightness / 100.0,
        })
    }

    fn into_hex(self) -> String {
        let (r, g, b) = color::hsl_to_rgb(self.h, self.s, self.l);
        format!("#{}", color::rgb_to_hex(r as f64, g as f64, b as f64))
    }

    fn into_string(self) -> String {
        format!("hsl({:.2}, {:.2}%, {:.2}%)", self.h, self.s * 100.0, self.l * 100.0)
    }
}
