use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("invalid initial color {0:?}, expected 6 hex digits with an optional leading '#'")]
    InvalidInitialColor(String),
}
