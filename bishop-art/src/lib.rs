#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/6ee8e381/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/6ee8e381/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::arithmetic_side_effects,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod escape;

#[cfg(feature = "alloc")]
pub mod input;

mod error;
mod field;
mod fingerprint;
mod moves;
mod palette;
mod render;
mod walker;

#[cfg(feature = "std")]
mod terminal;

pub use crate::{
    error::{Error, Result},
    escape::Rgb,
    field::{Field, HEIGHT, Position, START, WIDTH},
    fingerprint::Fingerprint,
    moves::{Move, Moves},
    palette::{BISHOP_GLYPH, END_GLYPH, Palette, START_GLYPH},
    render::{Frame, Renderer},
    walker::{Phase, Walker},
};

#[cfg(feature = "std")]
pub use crate::terminal::{Terminal, animate};

/// Number of lines occupied by a single frame: the field plus its top and
/// bottom borders.
pub const FRAME_LINES: usize = HEIGHT + 2;
