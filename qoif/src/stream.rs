//! Stream framing: the 14-byte header and 8-byte end-of-stream footer that
//! bracket every chunk body.

use alloc::vec::Vec;
use snafu::{ensure, OptionExt};

use crate::consts::{QOIF_FOOTER, QOIF_HEADER_SIZE, QOIF_MAGIC};
use crate::error::{BadMagicSnafu, DecodeError, TruncatedSnafu};
use crate::format::{Channels, ColorSpace};

/// The parsed contents of a QOIF header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub width: u32,
    pub height: u32,
    pub channels: Channels,
    pub colorspace: ColorSpace,
}

impl Header {
    /// Appends the 14-byte wire representation of this header to `out`.
    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&QOIF_MAGIC);
        out.extend_from_slice(&self.width.to_be_bytes());
        out.extend_from_slice(&self.height.to_be_bytes());
        out.push(self.channels.as_u8());
        out.push(self.colorspace.as_u8());
    }

    /// Parses a header from the first [`QOIF_HEADER_SIZE`] bytes of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, DecodeError> {
        let header = data.get(..QOIF_HEADER_SIZE).context(TruncatedSnafu)?;

        ensure!(header[..4] == QOIF_MAGIC, BadMagicSnafu);

        let width = u32::from_be_bytes(header[4..8].try_into().unwrap());
        let height = u32::from_be_bytes(header[8..12].try_into().unwrap());
        let channels = Channels::try_from(header[12])?;
        let colorspace = ColorSpace::from(header[13]);

        Ok(Self { width, height, channels, colorspace })
    }
}

/// Appends the 8-byte end-of-stream marker to `out`.
pub fn write_footer(out: &mut Vec<u8>) {
    out.extend_from_slice(&QOIF_FOOTER);
}
