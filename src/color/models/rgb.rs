use std::sync::LazyLock;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::color;

pub static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl super::ColorModel for Rgb {
    fn from_hex(hex: &str) -> Self {
        let (r, g, b) = color::hex_to_rgb(hex);
        Self { r, g, b }
    }

    fn from_string(s: &str) -> Option<Self> {
        let captures = RGB_PATTERN.captures(s.trim())?;
        let r = captures.get(1)?.as_str().parse::<u8>().ok()?;
        let g = captures.get(2)?.as_str().parse::<u8>().ok()?;
        let b = captures.get(3)?.as_str().parse::<u8>().ok()?;

        Some(Self { r, g, b })
    }

    fn into_hex(self) -> String {
        format!("#{}", color::rgb_to_hex(self.r as f64, self.g as f64, self.b as f64))
    }

    fn into_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
