use serde::{Deserialize, Serialize};

use super::Color;

/// Which representation produced a color update. The controller uses this
/// only to avoid echoing an update back into the widgets that produced it;
/// it has no effect on the stored color or the emitted snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Hex,
    Rgb,
    Hsl,
    /// The 2-D picking surface. Surface bindings are display-only, so they
    /// are refreshed on every accepted update.
    Canvas,
}

/// The seam between the controller and whatever input widgets the host
/// environment offers. A binding renders one representation of the current
/// color; the rendering layer registers one binding per representation it
/// shows and forwards user edits back through
/// [`ColorPicker::set_color`](super::ColorPicker::set_color).
pub trait InputBinding {
    /// The representation this binding renders.
    fn origin(&self) -> Origin;

    /// Pushes a fresh snapshot into the bound widgets.
    fn refresh(&mut self, color: &Color);
}
