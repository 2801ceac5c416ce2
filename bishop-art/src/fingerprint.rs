//! MD5 fingerprints of arbitrary input.

use crate::{Error, Moves, Result, Rgb};
use core::{fmt, str::FromStr};
use md5::{Digest, Md5};

/// Size of an MD5 digest in bytes.
const MD5_SIZE: usize = 16;

/// MD5 fingerprint of an input blob.
///
/// MD5 serves purely as a deterministic source of bits for the walk; no
/// security properties are claimed.
///
/// The [`FromStr`] and [`Display`][`fmt::Display`] impls use the familiar
/// 32-character lowercase hexadecimal form:
///
/// ```text
/// d41d8cd98f00b204e9800998ecf8427e
/// ```
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Fingerprint([u8; MD5_SIZE]);

impl Fingerprint {
    /// Compute the fingerprint of the given data.
    pub fn new(data: &[u8]) -> Self {
        Self(Md5::digest(data).into())
    }

    /// Create a fingerprint from a raw digest.
    pub const fn from_bytes(bytes: [u8; MD5_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw digest output as bytes.
    pub fn as_bytes(&self) -> &[u8; MD5_SIZE] {
        &self.0
    }

    /// Decode the moves of the bishop's walk.
    pub fn moves(&self) -> Moves {
        Moves::from_digest(&self.0)
    }

    /// Color derived from the first three bytes of the digest.
    pub fn color(&self) -> Rgb {
        let [r, g, b, ..] = self.0;
        Rgb::new(r, g, b)
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

impl FromStr for Fingerprint {
    type Err = Error;

    fn from_str(hex: &str) -> Result<Self> {
        let mut bytes = [0u8; MD5_SIZE];
        hex::decode_to_slice(hex, &mut bytes)?;
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::Fingerprint;
    use crate::{Error, Moves, Rgb};
    use hex_literal::hex;

    #[test]
    fn empty_input() {
        let fingerprint = Fingerprint::new(b"");
        assert_eq!(
            fingerprint.as_bytes(),
            &hex!("d41d8cd98f00b204e9800998ecf8427e")
        );
    }

    #[test]
    fn parse() {
        let fingerprint = "0CC175B9C0F1B6A831C399E269772661"
            .parse::<Fingerprint>()
            .unwrap();
        assert_eq!(fingerprint, Fingerprint::new(b"a"));
        assert_eq!(
            "0cc175b9c0f1b6a831c399e2697726".parse::<Fingerprint>(),
            Err(Error::Length)
        );
        assert_eq!(
            "0cc175b9c0f1b6a831c399e26977266g".parse::<Fingerprint>(),
            Err(Error::Hex)
        );
    }

    #[test]
    fn color() {
        assert_eq!(Fingerprint::new(b"a").color(), Rgb::new(0x0c, 0xc1, 0x75));
    }

    #[test]
    fn moves_match_hex_decoder() {
        let fingerprint = Fingerprint::new(b"a");
        assert_eq!(
            fingerprint.moves(),
            Moves::from_hex("0cc175b9c0f1b6a831c399e269772661").unwrap()
        );
    }
}
