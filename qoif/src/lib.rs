//! QOIF reference implementation.
//!
//! # Format
//!
//! ## Header (big-endian, 14 bytes)
//!
//! - 4-byte magic: `qoif`
//! - u32be width
//! - u32be height
//! - u8 channels: 3 (RGB) or 4 (RGBA)
//! - u8 colorspace: 0 (sRGB) or 1 (linear)
//!
//! ## Stream format
//!
//! ```plain
//! .- QOI_OP_RGB -------------------------------------------------.
//! |         Byte[0]         | Byte[1] | Byte[2] | Byte[3] |
//! |  7  6  5  4  3  2  1  0 | 7 .. 0  | 7 .. 0  | 7 .. 0  |
//! |--------------------------+---------+---------+---------|
//! |  1  1  1  1  1  1  1  0 |    red  |  green  |   blue  |
//! `----------------------------------------------------------------`
//! ```
//! - 8-bit tag b11111110
//! - 8-bit red, green, blue channel values
//! - alpha carries over from the previous pixel
//!
//! ```plain
//! .- QOI_OP_RGBA ------------------------------------------------------------.
//! |         Byte[0]         | Byte[1] | Byte[2] | Byte[3] | Byte[4] |
//! |  7  6  5  4  3  2  1  0 | 7 .. 0  | 7 .. 0  | 7 .. 0  | 7 .. 0  |
//! |--------------------------+---------+---------+---------+---------|
//! |  1  1  1  1  1  1  1  1 |    red  |  green  |   blue  |  alpha  |
//! `----------------------------------------------------------------------------`
//! ```
//! - 8-bit tag b11111111
//! - 8-bit red, green, blue, alpha channel values
//!
//! ```plain
//! .- QOI_OP_INDEX ----------.
//! |         Byte[0]         |
//! |  7  6  5  4  3  2  1  0 |
//! |-------+-----------------|
//! |  0  0 |      index      |
//! `-------------------------`
//! ```
//! - 2-bit tag b00
//! - 6-bit index into the color index array: 0..63
//!
//! ```plain
//! .- QOI_OP_DIFF -----------.
//! |         Byte[0]         |
//! |  7  6  5  4  3  2  1  0 |
//! |-------+-----+-----+-----|
//! |  0  1 |  dr |  dg |  db |
//! `-------------------------`
//! ```
//! - 2-bit tag b01
//! - 2-bit red/green/blue channel differences from the previous pixel, each
//!   biased by +2, range -2..1
//!
//! ```plain
//! .- QOI_OP_LUMA -------------------------------------.
//! |         Byte[0]         |         Byte[1]         |
//! |  7  6  5  4  3  2  1  0 |  7  6  5  4  3  2  1  0 |
//! |----------+--------------+-------------+-----------|
//! |  1  0 |    green diff   |   dr - dg   |  db - dg  |
//! `---------------------------------------------------`
//! ```
//! - 2-bit tag b10
//! - 6-bit green channel difference from the previous pixel, biased by +32,
//!   range -32..31
//! - 4-bit red channel difference minus green channel difference, biased by
//!   +8, range -8..7
//! - 4-bit blue channel difference minus green channel difference, biased by
//!   +8, range -8..7
//!
//! ```plain
//! .- QOI_OP_RUN ------------.
//! |         Byte[0]         |
//! |  7  6  5  4  3  2  1  0 |
//! |-------+-----------------|
//! |  1  1 |       run       |
//! `-------------------------`
//! ```
//! - 2-bit tag b11
//! - 6-bit run-length repeating the previous pixel, biased by -1, range
//!   1..62 (63 and 64 are reserved for [`QOI_OP_RGB`](consts::QOI_OP_RGB) and
//!   [`QOI_OP_RGBA`](consts::QOI_OP_RGBA))
//!
//! ## Footer
//!
//! Eight bytes, `00 00 00 00 00 00 00 01`, mark the end of the chunk stream.
//!
//! Chunk selection follows a fixed precedence: a pixel equal to the previous
//! one extends a RUN; otherwise INDEX is tried, then DIFF, then LUMA, and
//! only then the unconditional RGB/RGBA fallback.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod chunk;
pub mod consts;
pub mod error;
pub mod format;
pub mod pixel;
pub mod stream;

#[cfg(feature = "alloc")]
pub mod decode;
#[cfg(feature = "alloc")]
pub mod encode;

#[cfg(feature = "alloc")]
pub use decode::decode;
#[cfg(feature = "alloc")]
pub use encode::encode;
#[cfg(feature = "std")]
pub use encode::std_api::encode_to_writer;

pub use error::{DecodeError, EncodeError};
pub use format::{Channels, ColorSpace, Image};
pub use pixel::Pixel;
