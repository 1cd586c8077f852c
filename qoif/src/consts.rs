//! Wire-format constants: the fixed byte values and masks the format spec
//! pins down verbatim — not implementation choices.

/// Header magic bytes, `"qoif"`.
pub const QOIF_MAGIC: [u8; 4] = *b"qoif";

/// Header size in bytes: magic (4) + width (4) + height (4) + channels (1) +
/// colorspace (1).
pub const QOIF_HEADER_SIZE: usize = 14;

/// End-of-stream marker: seven zero bytes followed by a single `0x01`.
pub const QOIF_FOOTER: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];

/// Size of [`QOIF_FOOTER`] in bytes.
pub const QOIF_FOOTER_SIZE: usize = QOIF_FOOTER.len();

/// Full 8-bit tag for a raw RGB chunk.
pub const QOI_OP_RGB: u8 = 0xfe;
/// Full 8-bit tag for a raw RGBA chunk.
pub const QOI_OP_RGBA: u8 = 0xff;

/// 2-bit tag for an INDEX chunk, already shifted into the top two bits.
pub const QOI_OP_INDEX: u8 = 0x00;
/// 2-bit tag for a DIFF chunk.
pub const QOI_OP_DIFF: u8 = 0x40;
/// 2-bit tag for a LUMA chunk.
pub const QOI_OP_LUMA: u8 = 0x80;
/// 2-bit tag for a RUN chunk.
pub const QOI_OP_RUN: u8 = 0xc0;

/// Mask isolating the 2-bit tag field of a non-RGB(A) byte.
pub const QOI_TAG_MASK: u8 = 0xc0;
/// Mask isolating the payload bits once the tag has been stripped.
pub const QOI_PAYLOAD_MASK: u8 = 0x3f;

/// Number of slots in the recently-seen-pixel palette.
pub const PALETTE_SIZE: usize = 64;

/// Maximum pixels a single RUN chunk may encode. 63 and 64 are reserved for
/// [`QOI_OP_RGB`] and [`QOI_OP_RGBA`].
pub const QOI_RUN_MAX: u8 = 62;

/// Palette hash coefficients, applied to (r, g, b, a) respectively.
pub const HASH_R: u8 = 3;
pub const HASH_G: u8 = 5;
pub const HASH_B: u8 = 7;
pub const HASH_A: u8 = 11;
