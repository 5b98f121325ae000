use std::fmt::{self, Display};

/// Errors produced by strict model parsers.
///
/// The loose shortcode path never produces these; they only surface when a
/// caller asks for an exact parse (for example `"carousel".parse::<Layout>()`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownLayout(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownLayout(raw) => {
                write!(f, "unknown layout: {raw:?}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
