use qoif::format::{Channels, ColorSpace};
use qoif::{decode, encode};

/// Builds a synthetic RGBA buffer that exercises every chunk kind: runs of
/// identical pixels, palette hits, small diffs, a larger luma-range diff,
/// and an outright RGBA fallback with a changing alpha channel.
fn synthetic_image(width: u32, height: u32) -> Vec<u8> {
    let count = width as usize * height as usize;
    let mut pixels = Vec::with_capacity(count * 4);

    for i in 0..count {
        let (r, g, b, a) = match i % 7 {
            0 | 1 | 2 => (10, 20, 30, 255),       // run
            3 => (10, 20, 30, 255),               // index hit (repeat of above)
            4 => (11, 19, 29, 255),               // diff
            5 => (30, 40, 10, 255),               // luma
            _ => (200, 100, 50, (i % 256) as u8), // rgba fallback
        };
        pixels.extend_from_slice(&[r, g, b, a]);
    }

    pixels
}

#[test]
fn round_trips_a_synthetic_image_through_every_chunk_kind() {
    let (width, height) = (32, 4);
    let pixels = synthetic_image(width, height);

    let encoded = encode(&pixels, width, height, Channels::Rgba, ColorSpace::Linear).unwrap();
    let decoded = decode(&encoded).unwrap();

    assert_eq!(decoded.width, width);
    assert_eq!(decoded.height, height);
    assert_eq!(decoded.pixels, pixels);
}

#[test]
fn round_trips_a_single_pixel_image() {
    let pixels = vec![1u8, 2, 3, 4];
    let encoded = encode(&pixels, 1, 1, Channels::Rgba, ColorSpace::Srgb).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.pixels, pixels);
}

#[test]
fn round_trips_rgb_input_with_synthesized_opaque_alpha() {
    let pixels = vec![10u8, 20, 30, 40, 50, 60];
    let encoded = encode(&pixels, 2, 1, Channels::Rgb, ColorSpace::Linear).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(
        decoded.pixels,
        vec![10, 20, 30, 255, 40, 50, 60, 255],
        "decoder always emits RGBA regardless of the source channel count"
    );
}

#[test]
fn round_trips_a_long_run() {
    let width = 200usize;
    let pixels: Vec<u8> = std::iter::repeat([5u8, 6, 7, 255])
        .take(width)
        .flatten()
        .collect();

    let encoded = encode(&pixels, width as u32, 1, Channels::Rgba, ColorSpace::Linear).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.pixels, pixels);
}

#[test]
fn matches_the_unsafe_slice_decoder() {
    let (width, height) = (16, 2);
    let pixels = synthetic_image(width, height);
    let encoded = encode(&pixels, width, height, Channels::Rgba, ColorSpace::Linear).unwrap();

    let mut output = vec![0u8; width as usize * height as usize * 4];
    let written =
        unsafe { qoif::decode::slice_api::decode_to_slice(&encoded, &mut output).unwrap() };

    assert_eq!(written, width as usize * height as usize);
    assert_eq!(output, pixels);
}
