//! Error types.

use core::fmt;

/// Result type with `bishop-art`'s [`Error`] as the error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Base64-related errors in the input.
    #[cfg(feature = "alloc")]
    Base64(base64ct::Error),

    /// Invalid hexadecimal digest.
    Hex,

    /// Invalid length.
    Length,

    /// Unknown palette name.
    PaletteUnknown,

    /// Input/output errors.
    #[cfg(feature = "std")]
    Io(std::io::ErrorKind),

    /// The walk was interrupted before it completed.
    Interrupted,
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            #[cfg(feature = "alloc")]
            Self::Base64(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "alloc")]
            Error::Base64(err) => write!(f, "Base64 encoding error: {err}"),
            Error::Hex => write!(f, "hexadecimal digest invalid"),
            Error::Length => write!(f, "length invalid"),
            Error::PaletteUnknown => write!(f, "unknown palette"),
            #[cfg(feature = "std")]
            Error::Io(err) => write!(f, "I/O error: {}", std::io::Error::from(*err)),
            Error::Interrupted => write!(f, "interrupted"),
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Error {
        match err {
            hex::FromHexError::InvalidHexCharacter { .. } => Error::Hex,
            _ => Error::Length,
        }
    }
}

#[cfg(feature = "alloc")]
impl From<base64ct::Error> for Error {
    fn from(err: base64ct::Error) -> Error {
        Error::Base64(err)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err.kind())
    }
}
