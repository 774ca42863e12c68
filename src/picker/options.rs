use serde::{Deserialize, Serialize};

/// Construction options for a [`ColorPicker`](super::ColorPicker). The
/// `show_*` flags gate which representations the controller pushes
/// refreshes into; they never gate which updates it accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerOptions {
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_true")]
    pub show_hex: bool,
    #[serde(default = "default_true")]
    pub show_rgb: bool,
    #[serde(default)]
    pub show_hsl: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            color: default_color(),
            show_hex: true,
            show_rgb: true,
            show_hsl: false,
        }
    }
}

fn default_color() -> String {
    "#ff0000".to_owned()
}

fn default_true() -> bool {
    true
}
