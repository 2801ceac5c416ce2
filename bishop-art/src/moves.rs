//! Decoding of digests into bishop moves.

use crate::{Error, Result};
use core::{iter, slice};

/// Size of the digest consumed by the move decoder in bytes.
const DIGEST_SIZE: usize = 16;

/// Length of the digest when encoded as hexadecimal.
const HEX_SIZE: usize = 32;

/// Number of moves encoded in each digest byte.
const MOVES_PER_BYTE: usize = 4;

/// Number of moves decoded from a digest.
const MOVE_COUNT: usize = DIGEST_SIZE * MOVES_PER_BYTE;

/// A single diagonal step of the bishop.
///
/// Bit 0 selects the horizontal direction (`0` = left, `1` = right) and bit 1
/// the vertical direction (`0` = up, `1` = down).
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Move {
    /// `0b00`: one column left, one row up.
    #[default]
    UpLeft = 0,

    /// `0b01`: one column right, one row up.
    UpRight = 1,

    /// `0b10`: one column left, one row down.
    DownLeft = 2,

    /// `0b11`: one column right, one row down.
    DownRight = 3,
}

impl Move {
    /// Decode a move from the two least significant bits of `bits`.
    ///
    /// All higher bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::UpLeft,
            1 => Self::UpRight,
            2 => Self::DownLeft,
            _ => Self::DownRight,
        }
    }

    /// Get the two-bit value of this move.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Horizontal displacement: `-1` or `+1`.
    pub const fn dx(self) -> isize {
        if self.bits() & 0x1 == 0 { -1 } else { 1 }
    }

    /// Vertical displacement: `-1` or `+1`.
    pub const fn dy(self) -> isize {
        if self.bits() & 0x2 == 0 { -1 } else { 1 }
    }
}

impl From<Move> for u8 {
    fn from(mv: Move) -> u8 {
        mv.bits()
    }
}

/// The full sequence of moves derived from a 16-byte digest.
///
/// Each byte contributes four moves, least significant bit pair first.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Moves([Move; MOVE_COUNT]);

impl Moves {
    /// Number of moves in every sequence.
    pub const LEN: usize = MOVE_COUNT;

    /// Create a move sequence from an explicit list of moves.
    pub const fn new(moves: [Move; MOVE_COUNT]) -> Self {
        Self(moves)
    }

    /// Decode the moves encoded by the given digest.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn from_digest(digest: &[u8; DIGEST_SIZE]) -> Self {
        let mut moves = [Move::default(); MOVE_COUNT];

        for (chunk, mut byte) in moves
            .chunks_exact_mut(MOVES_PER_BYTE)
            .zip(digest.iter().copied())
        {
            for mv in chunk {
                *mv = Move::from_bits(byte);
                byte >>= 2;
            }
        }

        Self(moves)
    }

    /// Decode the moves encoded by a 32-character hexadecimal digest.
    pub fn from_hex(digest: &str) -> Result<Self> {
        let mut bytes = [0u8; DIGEST_SIZE];

        if digest.len() != HEX_SIZE {
            return Err(Error::Length);
        }

        hex::decode_to_slice(digest, &mut bytes)?;
        Ok(Self::from_digest(&bytes))
    }

    /// Get the moves as a slice.
    pub fn as_slice(&self) -> &[Move] {
        &self.0
    }

    /// Number of moves in the sequence (always [`Moves::LEN`]).
    pub const fn len(&self) -> usize {
        Self::LEN
    }

    /// Move sequences are never empty.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the moves in walk order.
    pub fn iter(&self) -> iter::Copied<slice::Iter<'_, Move>> {
        self.0.iter().copied()
    }
}

impl AsRef<[Move]> for Moves {
    fn as_ref(&self) -> &[Move] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = Move;
    type IntoIter = iter::Copied<slice::Iter<'a, Move>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
