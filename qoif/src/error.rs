use snafu::Snafu;

/// Errors surfaced while decoding a QOIF byte stream.
///
/// The decoder never swallows a malformed stream silently: every failure
/// mode gets its own variant instead of a generic "invalid data" catch-all.
#[derive(Debug, Snafu, PartialEq, Eq, Clone, Copy)]
#[snafu(visibility(pub(crate)))]
pub enum DecodeError {
    #[snafu(display("input is too short to contain a valid QOIF stream"))]
    Truncated,

    #[snafu(display("header magic bytes did not match `qoif`"))]
    BadMagic,

    #[snafu(display("stream did not end with the `00 00 00 00 00 00 00 01` footer"))]
    BadFooter,

    #[snafu(display("header declared {channels} channels, only 3 or 4 are valid"))]
    UnsupportedChannels { channels: u8 },

    #[snafu(display(
        "decoding produced more pixels than the header's width * height declares"
    ))]
    PixelOverflow,
}

/// Errors surfaced while encoding a pixel buffer into a QOIF byte stream.
///
/// The encoder is otherwise infallible: every channel operation is modular
/// and total, so the only way to fail is a caller-supplied buffer whose
/// length disagrees with the declared width/height/channel count.
#[derive(Debug, Snafu, PartialEq, Eq, Clone, Copy)]
#[snafu(visibility(pub(crate)))]
pub enum EncodeError {
    #[snafu(display(
        "specified image dimensions don't match the number of pixels: \
         {width} * {height} * {channels} == {expected} bytes, but {actual} bytes were given"
    ))]
    InvalidDimensions {
        width: u32,
        height: u32,
        channels: u8,
        expected: usize,
        actual: usize,
    },
}

#[cfg(feature = "std")]
#[derive(Debug, Snafu)]
pub enum WriteError {
    #[snafu(display("{source}"))]
    Encode { source: EncodeError },

    #[snafu(display("failed to write encoded bytes: {source}"))]
    Io { source: std::io::Error },
}

#[cfg(feature = "std")]
impl From<EncodeError> for WriteError {
    fn from(source: EncodeError) -> Self {
        WriteError::Encode { source }
    }
}
