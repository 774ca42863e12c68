pub mod rgb;
pub mod hsl;

pub use rgb::Rgb;
pub use hsl::Hsl;

pub trait ColorModel {
    /// Gets this color from a hex string.
    fn from_hex(hex: &str) -> Self where Self: Sized;

    /// Gets this color from its CSS-style string representation.
    fn from_string(string: &str) -> Option<Self> where Self: Sized;

    /// Gets this color from another color model, going through the hex
    /// form as the common interchange.
    fn from_model<M: ColorModel>(source: M) -> Self where Self: Sized {
        Self::from_hex(&source.into_hex())
    }

    /// Converts this color into a `#rrggbb` hex string.
    fn into_hex(self) -> String;

    /// Converts this color into its CSS-style string representation.
    fn into_string(self) -> String;
}
