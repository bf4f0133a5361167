//! PNG reading and writing.
//!
//! Every PNG the decoder accepts is normalized to 8-bit RGBA:
//!
//! - palette and low bit-depth images are expanded
//! - 16-bit samples are reduced to their high byte
//! - grayscale is replicated into R, G and B
//! - missing alpha becomes 255
//!
//! Output is always 8-bit RGBA with an sRGB chunk.
//!
//! # Example
//!
//! ```rust
//! use photon_core::Raster;
//! use photon_io::png::{decode, encode};
//!
//! let img = Raster::filled(3, 2, [10, 20, 30, 255]);
//! let bytes = encode(&img).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), img);
//! ```

use crate::{IoError, IoResult};
use photon_core::Raster;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Decodes PNG bytes into an RGBA raster.
pub fn decode(bytes: &[u8]) -> IoResult<Raster> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder.read_info()?;
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    trace!(
        width = info.width,
        height = info.height,
        color = ?info.color_type,
        depth = ?info.bit_depth,
        "png::decode"
    );

    if info.bit_depth != png::BitDepth::Eight {
        return Err(IoError::DecodeError(format!(
            "unexpected bit depth {:?} after expansion",
            info.bit_depth
        )));
    }

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        png::ColorType::Indexed => {
            return Err(IoError::DecodeError("palette was not expanded".into()));
        }
    };

    Ok(Raster::from_rgba(info.width, info.height, rgba)?)
}

/// Encodes a raster as an 8-bit RGBA PNG.
///
/// # Errors
///
/// [`IoError::EncodeError`] for an empty raster, which PNG cannot store.
pub fn encode(raster: &Raster) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    encode_into(&mut out, raster)?;
    Ok(out)
}

fn encode_into<W: Write>(writer: W, raster: &Raster) -> IoResult<()> {
    if raster.is_empty() {
        return Err(IoError::EncodeError(format!(
            "cannot encode a {}x{} image",
            raster.width(),
            raster.height()
        )));
    }

    let mut encoder = png::Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(raster.data())?;
    png_writer.finish()?;
    Ok(())
}

/// Reads a PNG file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let raster = decode(&bytes)?;
    debug!(path = %path.display(), width = raster.width(), height = raster.height(), "Loaded PNG");
    Ok(raster)
}

/// Writes a raster to a PNG file.
pub fn write<P: AsRef<Path>>(path: P, raster: &Raster) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    encode_into(BufWriter::new(file), raster)?;
    debug!(path = %path.display(), width = raster.width(), height = raster.height(), "Wrote PNG");
    Ok(())
}
