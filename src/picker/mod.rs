pub mod bindings;
pub mod options;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::{self, models::{ColorModel as _, Rgb}};
use crate::error::PickerError;
use self::bindings::{InputBinding, Origin};
use self::options::PickerOptions;

/// HSL components rounded for display: hue in integer degrees, saturation
/// and lightness as integer percentages. Reading these back after an
/// HSL-originated update can drift by up to 1% against what the caller
/// supplied; that loss is inherent to the hex canonical form and accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HslPercent {
    pub h: i32,
    pub s: u8,
    pub l: u8,
}

/// An immutable snapshot of the current color in all three representations.
/// The fields are mutually consistent: `rgb` and `hsl` are derived from
/// `hex` at the instant the snapshot is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: HslPercent,
}

type ChangeListener = Box<dyn FnMut(&Color)>;

/// Single-slot holder of the canonical color. Accepts updates tagged with
/// the representation that produced them, re-derives the other
/// representations through the conversion core, and synchronously notifies
/// the registered listener and input bindings.
///
/// Holds no reference to any rendering primitive; the rendering and input
/// layers subscribe through [`InputBinding`] and a change listener.
pub struct ColorPicker {
    options: PickerOptions,
    color: String,
    on_change: Option<ChangeListener>,
    bindings: Vec<Box<dyn InputBinding>>,
}

impl ColorPicker {
    pub fn new(options: PickerOptions) -> Result<Self, PickerError> {
        let color = color::normalize_hex(&options.color)
            .ok_or_else(|| PickerError::InvalidInitialColor(options.color.clone()))?;

        Ok(Self {
            options,
            color,
            on_change: None,
            bindings: Vec::new(),
        })
    }

    /// Registers the change listener. Only one listener is held at a time,
    /// last registration wins; collaborators needing fan-out must
    /// multiplex externally.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&Color) + 'static,
    {
        self.on_change = Some(Box::new(listener));
    }

    pub fn register_binding(&mut self, binding: Box<dyn InputBinding>) {
        self.bindings.push(binding);
    }

    /// Accepts a new color and synchronously pushes it into every other
    /// representation, then invokes the change listener with a fresh
    /// snapshot.
    ///
    /// `value` must be exactly 6 hex digits with an optional leading `#`
    /// (the bare form is normalized by prepending it). Anything else is
    /// discarded with a warning and the canonical color stays unchanged;
    /// the field is commonly fed by free-text input, so a hard failure
    /// would be the wrong tradeoff.
    pub fn set_color(&mut self, value: &str, origin: Origin) {
        let Some(normalized) = color::normalize_hex(value) else {
            warn!(value, "invalid color format, update discarded");
            return;
        };

        self.color = normalized;
        let snapshot = self.snapshot();
        debug!(color = %snapshot.hex, ?origin, "color updated");

        for binding in &mut self.bindings {
            let binding_origin = binding.origin();
            let shown = match binding_origin {
                Origin::Hex => self.options.show_hex,
                Origin::Rgb => self.options.show_rgb,
                Origin::Hsl => self.options.show_hsl,
                Origin::Canvas => true,
            };

            // Never echo the update back into the representation that
            // produced it. The picking surface is display-only and always
            // repaints, even when it sourced the update itself.
            if shown && (binding_origin == Origin::Canvas || binding_origin != origin) {
                binding.refresh(&snapshot);
            }
        }

        if let Some(listener) = &mut self.on_change {
            listener(&snapshot);
        }
    }

    /// Returns a fresh snapshot built from the canonical hex. Idempotent
    /// and side-effect-free.
    pub fn get_color(&self) -> Color {
        self.snapshot()
    }

    fn snapshot(&self) -> Color {
        let rgb = Rgb::from_hex(&self.color);
        let (h, s, l) = color::rgb_to_hsl(rgb.r, rgb.g, rgb.b);

        Color {
            hex: self.color.clone(),
            rgb,
            hsl: HslPercent {
                h,
                s: (s * 100.0).round() as u8,
                l: (l * 100.0).round() as u8,
            },
        }
    }
}

impl std::fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorPicker")
            .field("options", &self.options)
            .field("color", &self.color)
            .field("bindings", &self.bindings.len())
            .finish_non_exhaustive()
    }
}
