//! Embeddable color picker core: hex/RGB/HSL conversions plus a state
//! controller that keeps every representation of the current color in sync
//! and notifies a listener on change. Rendering and input widgets live
//! outside this crate and talk to the controller through [`InputBinding`].

pub mod color;
pub mod error;
pub mod picker;

pub use error::PickerError;
pub use picker::bindings::{InputBinding, Origin};
pub use picker::options::PickerOptions;
pub use picker::{Color, ColorPicker, HslPercent};
