use core::fmt::Display;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing interchange values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failed to parse a hex color string. Holds the offending input.
    /// After stripping a leading `#`, the string must be 3, 6 or 8
    /// hex digits long.
    ColorParsing(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ColorParsing(s) => write!(
                f,
                "failed to parse color '{}': expected 3, 6 or 8 hex digits (0-9, a-f)",
                s
            ),
        }
    }
}

impl std::error::Error for Error {}
