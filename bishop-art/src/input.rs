//! Preparation of input blobs before they are fingerprinted.

use crate::Result;
use alloc::vec::Vec;
use base64ct::{Base64, Encoding as _};
use core::{fmt, str};

/// How the input blob is encoded.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Encoding {
    /// Bytes are fingerprinted as-is.
    #[default]
    Raw,

    /// Standard (padded) Base64 which is decoded before fingerprinting.
    Base64,
}

impl Encoding {
    /// Get the string identifier which corresponds to this encoding.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Base64 => "base64",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strip trailing ASCII whitespace (including a final newline).
pub fn trim_trailing_whitespace(input: &[u8]) -> &[u8] {
    let len = input
        .iter()
        .rposition(|byte| !byte.is_ascii_whitespace())
        .map_or(0, |pos| pos.saturating_add(1));

    input.get(..len).unwrap_or_default()
}

/// Decode `input` into the bytes to fingerprint.
///
/// Trailing whitespace is stripped first. Base64 input may be wrapped over
/// several lines.
pub fn decode(input: &[u8], encoding: Encoding) -> Result<Vec<u8>> {
    let input = trim_trailing_whitespace(input);

    match encoding {
        Encoding::Raw => Ok(input.to_vec()),
        Encoding::Base64 => {
            let unwrapped = input
                .iter()
                .copied()
                .filter(|byte| !byte.is_ascii_whitespace())
                .collect::<Vec<u8>>();

            Ok(Base64::decode_vec(str::from_utf8(&unwrapped).map_err(|_| {
                base64ct::Error::InvalidEncoding
            })?)?)
        }
    }
}
