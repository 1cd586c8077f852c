//! Small value types shared between the encoder and decoder surfaces.

use alloc::vec::Vec;

use crate::error::DecodeError;

/// Channel count a raw pixel buffer is packed with. The decoder always
/// produces [`Channels::Rgba`] regardless of the source image's count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    Rgb = 3,
    Rgba = 4,
}

impl Channels {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn bytes_per_pixel(self) -> usize {
        self as u8 as usize
    }
}

impl TryFrom<u8> for Channels {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Channels::Rgb),
            4 => Ok(Channels::Rgba),
            channels => Err(DecodeError::UnsupportedChannels { channels }),
        }
    }
}

/// The colorspace byte. Purely informational: the reference encoder always
/// writes [`ColorSpace::Linear`] and decoders are not required to act on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Srgb = 0,
    Linear = 1,
}

impl ColorSpace {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<u8> for ColorSpace {
    fn from(value: u8) -> Self {
        if value == 0 {
            ColorSpace::Srgb
        } else {
            ColorSpace::Linear
        }
    }
}

/// A fully decoded image: always 4 channels (RGBA), row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub channels: Channels,
    pub colorspace: ColorSpace,
    pub pixels: Vec<u8>,
}
