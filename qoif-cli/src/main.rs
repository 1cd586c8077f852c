use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use image::{ImageFormat, RgbaImage};
use log::debug;
use qoif::format::{Channels, ColorSpace};
use snafu::{ResultExt, Snafu};

/// QOIF cli encoder and decoder.
#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Encodes a PNG/JPG/BMP image as QOIF.
    Encode(Encode),
    /// Decodes a QOIF image back into a PNG/JPG/BMP image.
    Decode(Decode),
    /// Compares two QOIF images pixel by pixel.
    Compare(Compare),
    /// Prints a QOIF stream's header fields without fully decoding it.
    Info(Info),
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorSpaceArg {
    Srgb,
    Linear,
}

impl From<ColorSpaceArg> for ColorSpace {
    fn from(value: ColorSpaceArg) -> Self {
        match value {
            ColorSpaceArg::Srgb => ColorSpace::Srgb,
            ColorSpaceArg::Linear => ColorSpace::Linear,
        }
    }
}

#[derive(clap::Args)]
struct Encode {
    /// the input image (PNG, JPG, or BMP; format is guessed from content)
    input: PathBuf,
    /// the output QOIF file
    output: PathBuf,

    /// colorspace byte to store in the header
    #[arg(long, value_enum, default_value_t = ColorSpaceArg::Srgb)]
    colorspace: ColorSpaceArg,
}

#[derive(clap::Args)]
struct Decode {
    /// the input QOIF file
    input: PathBuf,
    /// the output image; format is inferred from the file extension
    output: PathBuf,
}

#[derive(clap::Args)]
struct Compare {
    /// first QOIF file
    a: PathBuf,
    /// second QOIF file
    b: PathBuf,
}

#[derive(clap::Args)]
struct Info {
    /// the QOIF file to inspect
    input: PathBuf,
}

#[derive(Debug, Snafu)]
enum CliError {
    #[snafu(display("failed to read `{}`: {source}", path.display()))]
    Io { path: PathBuf, source: std::io::Error },

    #[snafu(display("image adapter failed for `{}`: {source}", path.display()))]
    Adapter { path: PathBuf, source: image::ImageError },

    #[snafu(display("failed to decode QOIF stream: {source}"))]
    Codec { source: qoif::DecodeError },

    #[snafu(display(
        "image dimensions don't match: `{}` is {w1}x{h1}, `{}` is {w2}x{h2}",
        a.display(), b.display()
    ))]
    DimensionMismatch { a: PathBuf, b: PathBuf, w1: u32, h1: u32, w2: u32, h2: u32 },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Encode(options) => encode(options)?,
        Command::Decode(options) => decode(options)?,
        Command::Compare(options) => compare(options)?,
        Command::Info(options) => info(options)?,
    }

    Ok(())
}

fn encode(options: Encode) -> Result<(), CliError> {
    let Encode { input, output, colorspace } = options;

    let image = image::io::Reader::open(&input)
        .context(IoSnafu { path: input.clone() })?
        .with_guessed_format()
        .context(IoSnafu { path: input.clone() })?
        .decode()
        .context(AdapterSnafu { path: input.clone() })?;

    let width = image.width();
    let height = image.height();
    debug!("encoding {width}x{height} image from `{}`", input.display());

    let rgba = image.into_rgba8();
    let encoded = qoif::encode(
        rgba.as_raw(),
        width,
        height,
        Channels::Rgba,
        colorspace.into(),
    )
    .expect("dimensions were just derived from the decoded image");

    std::fs::write(&output, &encoded).context(IoSnafu { path: output.clone() })?;
    println!("written {} bytes to `{}`", encoded.len(), output.display());

    Ok(())
}

fn decode(options: Decode) -> Result<(), CliError> {
    let Decode { input, output } = options;

    let bytes = std::fs::read(&input).context(IoSnafu { path: input.clone() })?;
    debug!("decoding `{}`", input.display());

    let image = qoif::decode(&bytes).context(CodecSnafu)?;
    let rgba = RgbaImage::from_vec(image.width, image.height, image.pixels)
        .expect("decode() always returns width*height*4 bytes");

    let format = ImageFormat::from_path(&output).context(AdapterSnafu { path: output.clone() })?;
    rgba.save_with_format(&output, format)
        .context(AdapterSnafu { path: output.clone() })?;

    println!(
        "written {}x{} image to `{}`",
        image.width,
        image.height,
        output.display()
    );

    Ok(())
}

fn compare(options: Compare) -> Result<(), CliError> {
    let Compare { a, b } = options;

    let bytes_a = std::fs::read(&a).context(IoSnafu { path: a.clone() })?;
    let bytes_b = std::fs::read(&b).context(IoSnafu { path: b.clone() })?;

    let image_a = qoif::decode(&bytes_a).context(CodecSnafu)?;
    let image_b = qoif::decode(&bytes_b).context(CodecSnafu)?;

    if image_a.width != image_b.width || image_a.height != image_b.height {
        return DimensionMismatchSnafu {
            a,
            b,
            w1: image_a.width,
            h1: image_a.height,
            w2: image_b.width,
            h2: image_b.height,
        }
        .fail();
    }

    let mut first_diff = None;
    let mut diff_count = 0usize;

    for (i, (pa, pb)) in image_a
        .pixels
        .chunks_exact(4)
        .zip(image_b.pixels.chunks_exact(4))
        .enumerate()
    {
        if pa != pb {
            diff_count += 1;
            if first_diff.is_none() {
                first_diff = Some((i % image_a.width as usize, i / image_a.width as usize));
            }
        }
    }

    match first_diff {
        None => println!("images are pixel-identical"),
        Some((x, y)) => println!(
            "first differing pixel at ({x}, {y}); {diff_count} of {} pixels differ",
            image_a.width as usize * image_a.height as usize
        ),
    }

    Ok(())
}

fn info(options: Info) -> Result<(), CliError> {
    let Info { input } = options;

    let bytes = std::fs::read(&input).context(IoSnafu { path: input.clone() })?;
    let header = qoif::stream::Header::parse(&bytes).context(CodecSnafu)?;

    println!("width:      {}", header.width);
    println!("height:     {}", header.height);
    println!(
        "channels:   {}",
        match header.channels {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    );
    println!(
        "colorspace: {}",
        match header.colorspace {
            ColorSpace::Srgb => "sRGB",
            ColorSpace::Linear => "linear",
        }
    );

    Ok(())
}
