//! A bounds-relaxed decode entry point for callers (the `qoif-c` shim) that
//! already know the exact output buffer size and want to avoid the `Vec`
//! allocation `decode` performs.
//!
//! Mirrors the unchecked decode path real QOI-family codecs expose
//! alongside their safe API for FFI and other tight-loop callers.

use crate::chunk::Chunk;
use crate::consts::{QOIF_FOOTER, QOIF_FOOTER_SIZE, QOIF_HEADER_SIZE};
use crate::decode::DecodeContext;
use crate::error::DecodeError;
use crate::stream::Header;

/// Decodes a QOIF stream into a caller-provided RGBA buffer.
///
/// Returns the number of pixels written on success.
///
/// # Safety
/// This function does not perform the defense-in-depth checks `decode`
/// does; it trusts the header's declared width/height against `output`'s
/// length and otherwise relies on [`Chunk::parse`]'s own bounds checks for
/// soundness. The caller must ensure `data` is a well-formed QOIF stream;
/// feeding malformed input can still return a `DecodeError` (chunk parsing
/// remains checked) but a buffer shorter than the header declares is
/// rejected up front rather than causing out-of-bounds writes.
pub unsafe fn decode_to_slice(data: &[u8], output: &mut [u8]) -> Result<usize, DecodeError> {
    let header = Header::parse(data)?;
    let pixel_count = header.width as usize * header.height as usize;

    if output.len() < pixel_count * 4 {
        return Err(DecodeError::PixelOverflow);
    }

    let footer_start = data
        .len()
        .checked_sub(QOIF_FOOTER_SIZE)
        .filter(|&end| end >= QOIF_HEADER_SIZE)
        .ok_or(DecodeError::Truncated)?;
    let body = &data[QOIF_HEADER_SIZE..footer_start];

    let mut ctx = DecodeContext::new();
    let mut cursor = 0usize;
    let mut written = 0usize;

    while written < pixel_count {
        let (chunk, consumed) = Chunk::parse(&body[cursor..])?;
        cursor += consumed;
        written = ctx.apply_into_slice(chunk, pixel_count, output, written)?;
    }

    if data[footer_start..] != QOIF_FOOTER {
        return Err(DecodeError::BadFooter);
    }

    Ok(written)
}

impl DecodeContext {
    /// Same chunk application as [`DecodeContext::apply`], but writing
    /// directly into a flat `&mut [u8]` at a given pixel offset instead of
    /// appending to a `Vec`.
    fn apply_into_slice(
        &mut self,
        chunk: Chunk,
        pixel_count: usize,
        output: &mut [u8],
        written: usize,
    ) -> Result<usize, DecodeError> {
        use crate::pixel::{apply_diff, Pixel};

        let (pixel, count) = match chunk {
            Chunk::Rgb { r, g, b } => (Pixel::new(r, g, b, self.prev.a), 1),
            Chunk::Rgba { r, g, b, a } => (Pixel::new(r, g, b, a), 1),
            Chunk::Index(index) => (self.palette.get(index), 1),
            Chunk::Diff { dr, dg, db } => (
                Pixel::new(
                    apply_diff(self.prev.r, dr),
                    apply_diff(self.prev.g, dg),
                    apply_diff(self.prev.b, db),
                    self.prev.a,
                ),
                1,
            ),
            Chunk::Luma { dg, dr_dg, db_dg } => (
                Pixel::new(
                    apply_diff(self.prev.r, dr_dg.wrapping_add(dg)),
                    apply_diff(self.prev.g, dg),
                    apply_diff(self.prev.b, db_dg.wrapping_add(dg)),
                    self.prev.a,
                ),
                1,
            ),
            Chunk::Run(count) => (self.prev, count as usize),
        };

        let new_total = written + count;
        if new_total > pixel_count {
            return Err(DecodeError::PixelOverflow);
        }

        for i in 0..count {
            let offset = (written + i) * 4;
            output[offset] = pixel.r;
            output[offset + 1] = pixel.g;
            output[offset + 2] = pixel.b;
            output[offset + 3] = pixel.a;
        }

        self.prev = pixel;
        self.palette.insert(pixel);
        Ok(new_total)
    }
}
