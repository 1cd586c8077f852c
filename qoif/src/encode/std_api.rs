//! `std::io::Write`-based encoder entry point, for callers (the CLI) that
//! want to stream encoded bytes straight to a file instead of building a
//! `Vec<u8>` first.

use std::io::Write;

use snafu::ResultExt;

use crate::encode::encode;
use crate::error::{IoSnafu, WriteError};
use crate::format::{Channels, ColorSpace};

/// Encodes `pixels` and writes the resulting QOIF stream to `writer`.
pub fn encode_to_writer<W: Write>(
    pixels: &[u8],
    width: u32,
    height: u32,
    channels: Channels,
    colorspace: ColorSpace,
    mut writer: W,
) -> Result<(), WriteError> {
    let bytes = encode(pixels, width, height, channels, colorspace)?;
    writer.write_all(&bytes).context(IoSnafu)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_the_same_bytes_encode_would_produce() {
        let pixels = [1u8, 2, 3, 255, 1, 2, 3, 255];
        let direct = encode(&pixels, 2, 1, Channels::Rgba, ColorSpace::Linear).unwrap();

        let mut via_writer = Vec::new();
        encode_to_writer(&pixels, 2, 1, Channels::Rgba, ColorSpace::Linear, &mut via_writer)
            .unwrap();

        assert_eq!(direct, via_writer);
    }
}
