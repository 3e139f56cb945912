//! Utility module with prettymoji's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An invalid color.
///
/// This is the only error raised by the matching engine itself, and only
/// [`parse_color`](crate::parse_color) raises it. A color is valid if it
/// consists of a `#` followed by exactly six hexadecimal digits. The variants
/// record which part of that grammar the text failed, which is useful for
/// diagnostics but does not change how callers should react.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidColor {
    /// A color that does not start with `#`. For example, `7C4DFF`.
    MissingHash,

    /// A color with too few or too many characters after the `#`. For example,
    /// `#7C4DF` is missing a digit and `#7C4DFFF` has one too many.
    UnexpectedLength,

    /// A color with the right length but characters that are not hexadecimal
    /// digits. For example, `#ZZZZZZ`.
    MalformedHex,
}

impl core::fmt::Display for InvalidColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use InvalidColor::*;

        match *self {
            MissingHash => f.write_str("color should start with `#` but does not"),
            UnexpectedLength => {
                f.write_str("color should have exactly 6 hexadecimal digits after `#`")
            }
            MalformedHex => f.write_str("color should contain only hexadecimal digits"),
        }
    }
}

impl std::error::Error for InvalidColor {}

#[cfg(feature = "pyffi")]
impl From<InvalidColor> for PyErr {
    fn from(value: InvalidColor) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error while turning a document into a [`Dataset`](crate::Dataset).
///
/// Loading datasets happens at the boundary and is not part of the matching
/// engine. The engine never sees a dataset that failed to load; callers should
/// treat such a failure exactly like an empty dataset.
#[cfg(feature = "json")]
#[derive(Debug)]
pub enum DatasetError {
    /// The document is not a well-formed JSON array of records.
    Json(serde_json::Error),

    /// The record at the given index has an empty symbol.
    EmptySymbol { index: usize },
}

#[cfg(feature = "json")]
impl core::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::Json(ref error) => write!(f, "could not parse dataset document: {}", error),
            Self::EmptySymbol { index } => {
                write!(f, "record {} should have a symbol but it is empty", index)
            }
        }
    }
}

#[cfg(feature = "json")]
impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::Json(ref error) => Some(error),
            Self::EmptySymbol { .. } => None,
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[cfg(feature = "json")]
impl From<DatasetError> for std::io::Error {
    fn from(value: DatasetError) -> Self {
        std::io::Error::other(value)
    }
}

#[cfg(all(feature = "json", feature = "pyffi"))]
impl From<DatasetError> for PyErr {
    fn from(value: DatasetError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
