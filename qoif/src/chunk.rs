//! The six QOIF chunk kinds: a tagged representation plus the exact bit
//! layouts used to pack/unpack them.

use alloc::vec::Vec;
use snafu::OptionExt;

use crate::consts::{
    QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_LUMA, QOI_OP_RGB, QOI_OP_RGBA, QOI_OP_RUN, QOI_PAYLOAD_MASK,
    QOI_RUN_MAX, QOI_TAG_MASK,
};
use crate::error::{DecodeError, TruncatedSnafu};

/// One chunk's worth of encoded data. Carries no pixel-count information
/// beyond what's implicit in the variant; [`Chunk::Run`] stores the actual
/// repeat count (1..=62), already debiased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk {
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: u8 },
    Index(u8),
    Diff { dr: i8, dg: i8, db: i8 },
    Luma { dg: i8, dr_dg: i8, db_dg: i8 },
    Run(u8),
}

impl Chunk {
    /// Appends this chunk's exact byte encoding to `out`.
    ///
    /// Assumes the caller (the encoder selector) already guaranteed every
    /// field is in range; this only biases and masks, it never validates.
    pub fn pack(self, out: &mut Vec<u8>) {
        match self {
            Chunk::Rgb { r, g, b } => out.extend_from_slice(&[QOI_OP_RGB, r, g, b]),
            Chunk::Rgba { r, g, b, a } => out.extend_from_slice(&[QOI_OP_RGBA, r, g, b, a]),
            Chunk::Index(index) => {
                debug_assert!(index < 64);
                out.push(QOI_OP_INDEX | (index & QOI_PAYLOAD_MASK));
            }
            Chunk::Diff { dr, dg, db } => {
                debug_assert!((-2..=1).contains(&dr));
                debug_assert!((-2..=1).contains(&dg));
                debug_assert!((-2..=1).contains(&db));
                let byte = QOI_OP_DIFF
                    | (((dr + 2) as u8 & 0x03) << 4)
                    | (((dg + 2) as u8 & 0x03) << 2)
                    | ((db + 2) as u8 & 0x03);
                out.push(byte);
            }
            Chunk::Luma { dg, dr_dg, db_dg } => {
                debug_assert!((-32..=31).contains(&dg));
                debug_assert!((-8..=7).contains(&dr_dg));
                debug_assert!((-8..=7).contains(&db_dg));
                out.push(QOI_OP_LUMA | ((dg + 32) as u8 & QOI_PAYLOAD_MASK));
                out.push((((dr_dg + 8) as u8 & 0x0f) << 4) | ((db_dg + 8) as u8 & 0x0f));
            }
            Chunk::Run(count) => {
                debug_assert!((1..=QOI_RUN_MAX).contains(&count));
                out.push(QOI_OP_RUN | ((count - 1) & QOI_PAYLOAD_MASK));
            }
        }
    }

    /// The number of bytes this chunk occupies on the wire.
    pub const fn byte_len(self) -> usize {
        match self {
            Chunk::Rgb { .. } => 4,
            Chunk::Rgba { .. } => 5,
            Chunk::Luma { .. } => 2,
            Chunk::Index(_) | Chunk::Diff { .. } | Chunk::Run(_) => 1,
        }
    }

    /// Parses one chunk from the front of `data`, returning it along with
    /// the number of bytes consumed.
    ///
    /// `data` must be restricted to the body region (header and footer
    /// excluded) by the caller: a chunk whose tail would run past the end
    /// of `data` is reported as [`DecodeError::Truncated`], which is exactly
    /// how a chunk that bleeds into the footer region is caught when the
    /// driver passes a footer-excluded slice.
    pub fn parse(data: &[u8]) -> Result<(Chunk, usize), DecodeError> {
        let &tag = data.first().context(TruncatedSnafu)?;

        match tag {
            QOI_OP_RGB => {
                let bytes = data.get(1..4).context(TruncatedSnafu)?;
                Ok((Chunk::Rgb { r: bytes[0], g: bytes[1], b: bytes[2] }, 4))
            }
            QOI_OP_RGBA => {
                let bytes = data.get(1..5).context(TruncatedSnafu)?;
                Ok((
                    Chunk::Rgba { r: bytes[0], g: bytes[1], b: bytes[2], a: bytes[3] },
                    5,
                ))
            }
            _ => match tag & QOI_TAG_MASK {
                QOI_OP_INDEX => Ok((Chunk::Index(tag & QOI_PAYLOAD_MASK), 1)),
                QOI_OP_DIFF => {
                    let dr = ((tag >> 4) & 0x03) as i8 - 2;
                    let dg = ((tag >> 2) & 0x03) as i8 - 2;
                    let db = (tag & 0x03) as i8 - 2;
                    Ok((Chunk::Diff { dr, dg, db }, 1))
                }
                QOI_OP_LUMA => {
                    let second = *data.get(1).context(TruncatedSnafu)?;
                    let dg = (tag & QOI_PAYLOAD_MASK) as i8 - 32;
                    let dr_dg = (second >> 4) as i8 - 8;
                    let db_dg = (second & 0x0f) as i8 - 8;
                    Ok((Chunk::Luma { dg, dr_dg, db_dg }, 2))
                }
                QOI_OP_RUN => {
                    let run = (tag & QOI_PAYLOAD_MASK) + 1;
                    Ok((Chunk::Run(run), 1))
                }
                _ => unreachable!("tag & 0xc0 only takes the four 2-bit values"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(chunk: Chunk) -> Vec<u8> {
        let mut out = Vec::new();
        chunk.pack(&mut out);
        out
    }

    #[test]
    fn rgb_round_trips() {
        let chunk = Chunk::Rgb { r: 10, g: 20, b: 30 };
        let bytes = pack(chunk);
        assert_eq!(bytes, [0xfe, 10, 20, 30]);
        assert_eq!(Chunk::parse(&bytes), Ok((chunk, 4)));
    }

    #[test]
    fn rgba_round_trips() {
        let chunk = Chunk::Rgba { r: 10, g: 20, b: 30, a: 128 };
        let bytes = pack(chunk);
        assert_eq!(bytes, [0xff, 10, 20, 30, 128]);
        assert_eq!(Chunk::parse(&bytes), Ok((chunk, 5)));
    }

    #[test]
    fn index_round_trips() {
        let chunk = Chunk::Index(37);
        let bytes = pack(chunk);
        assert_eq!(bytes, [0b0010_0101]);
        assert_eq!(Chunk::parse(&bytes), Ok((chunk, 1)));
    }

    #[test]
    fn diff_round_trips_and_matches_fixture() {
        // dr=1, dg=1, db=1 -> biased to 3 each -> 01 11 11 11 = 0x7f
        let chunk = Chunk::Diff { dr: 1, dg: 1, db: 1 };
        let bytes = pack(chunk);
        assert_eq!(bytes, [0x7f]);
        assert_eq!(Chunk::parse(&bytes), Ok((chunk, 1)));
    }

    #[test]
    fn diff_handles_negative_extremes() {
        let chunk = Chunk::Diff { dr: -2, dg: -2, db: -2 };
        let bytes = pack(chunk);
        assert_eq!(bytes, [0x40]);
        assert_eq!(Chunk::parse(&bytes), Ok((chunk, 1)));
    }

    #[test]
    fn luma_round_trips() {
        let chunk = Chunk::Luma { dg: 0, dr_dg: 0, db_dg: 0 };
        let bytes = pack(chunk);
        assert_eq!(bytes, [0b1010_0000, 0b1000_1000]);
        assert_eq!(Chunk::parse(&bytes), Ok((chunk, 2)));
    }

    #[test]
    fn run_round_trips_and_excludes_rgb_rgba_tags() {
        let chunk = Chunk::Run(1);
        assert_eq!(pack(chunk), [0xc0]);
        let chunk = Chunk::Run(62);
        let bytes = pack(chunk);
        assert_eq!(bytes, [0xfd]);
        assert_ne!(bytes[0], 0xfe);
        assert_ne!(bytes[0], 0xff);
        assert_eq!(Chunk::parse(&bytes), Ok((chunk, 1)));
    }

    #[test]
    fn parse_reports_truncated_multi_byte_chunks() {
        assert_eq!(Chunk::parse(&[0xfe, 1, 2]), Err(DecodeError::Truncated));
        assert_eq!(Chunk::parse(&[0xff, 1, 2, 3]), Err(DecodeError::Truncated));
        assert_eq!(Chunk::parse(&[0b1000_0000]), Err(DecodeError::Truncated));
        assert_eq!(Chunk::parse(&[]), Err(DecodeError::Truncated));
    }
}
