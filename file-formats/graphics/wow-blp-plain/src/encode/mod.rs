/// Error types for BLP encoding operations
pub mod error;

use crate::buffer::{PixelBuffer, buffer_len};
use crate::source::ImageSource;
use crate::types::{BYTES_PER_PIXEL, BlpHeader, Compression, HEADER_SIZE, Rect};
pub use error::Error;
use log::*;
use std::io::Write;
use std::path::Path;

/// Encode `source` into a BLP2 file with the given compression.
///
/// Only [`Compression::Plain`] is implemented, other variants fail with
/// [`Error::UnsupportedCompression`].
pub fn encode_blp<S>(source: &S, compression: Compression) -> Result<Vec<u8>, Error>
where
    S: ImageSource + ?Sized,
{
    match compression {
        Compression::Plain => encode_plain_blp(source),
        Compression::Palettized | Compression::Dxt => {
            error!("Requested {compression} compression, only plain BLP2 can be encoded");
            Err(Error::UnsupportedCompression(compression))
        }
    }
}

/// Encode `source` into an uncompressed BLP2 file held in memory.
///
/// Both dimensions must be powers of two. The result is the 1172 byte
/// header followed by `4 * width * height` bytes of BGRA pixels.
///
/// # Panics
///
/// If the pixel data of the image cannot be addressed or does not fit the
/// 32 bit mipmap length field. No power of two image small enough to be
/// held in memory gets there.
pub fn encode_plain_blp<S>(source: &S) -> Result<Vec<u8>, Error>
where
    S: ImageSource + ?Sized,
{
    let (header, pixels) = prepare_plain(source)?;
    let mut output = Vec::with_capacity(HEADER_SIZE + pixels.len());
    write_parts(&header, &pixels, &mut output)?;
    Ok(output)
}

/// Same as [`encode_plain_blp`], but streams the file into `writer`.
///
/// Nothing is written if the image fails validation. A failed write leaves
/// a truncated file behind that must not be used.
pub fn write_plain_blp<S, W>(source: &S, writer: &mut W) -> Result<(), Error>
where
    S: ImageSource + ?Sized,
    W: Write,
{
    let (header, pixels) = prepare_plain(source)?;
    write_parts(&header, &pixels, writer)
}

/// Encode `source` with the given compression and write it to `path`.
pub fn save_blp<S, Q>(source: &S, compression: Compression, path: Q) -> Result<(), Error>
where
    S: ImageSource + ?Sized,
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = encode_blp(source, compression)?;
    std::fs::write(path, &bytes).map_err(|e| Error::FileSystem(path.to_owned(), e))?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn prepare_plain<S>(source: &S) -> Result<(BlpHeader, PixelBuffer), Error>
where
    S: ImageSource + ?Sized,
{
    let bounds = source.bounds();
    let width = validate_dimension("width", bounds.width)?;
    let height = validate_dimension("height", bounds.height)?;
    debug!("Encoding {width}x{height} image as plain BLP2");

    let payload_len = buffer_len(BYTES_PER_PIXEL as i64, bounds.width, bounds.height)
        .and_then(|len| u32::try_from(len).ok())
        .unwrap_or_else(|| {
            panic!("Pixel data of a {width}x{height} image does not fit into a BLP2 mipmap")
        });

    let mut pixels = PixelBuffer::new(Rect::from_size(width, height));
    pixels.copy_from(source, (bounds.x, bounds.y));

    let header = BlpHeader::plain(width, height, payload_len);
    trace!("Header: {header:?}");
    trace!("Payload of mipmap 0: {payload_len} bytes at offset {HEADER_SIZE}");
    Ok((header, pixels))
}

// Exact single-bit test, 0 and negative values are rejected
fn validate_dimension(name: &str, value: i64) -> Result<u32, Error> {
    match u32::try_from(value) {
        Ok(v) if v.is_power_of_two() => Ok(v),
        _ => {
            error!("Image {name} {value} is not a power of 2");
            Err(Error::Validation(format!(
                "image {name} must be a power of 2, got {value}"
            )))
        }
    }
}

fn write_parts<W: Write>(
    header: &BlpHeader,
    pixels: &PixelBuffer,
    writer: &mut W,
) -> Result<(), Error> {
    header.write(writer)?;
    writer.write_all(pixels.as_bytes())?;
    Ok(())
}
