use super::pixel::{BYTES_PER_PIXEL, BgraPixel};
use crate::debug::trimmed_collection_fmt;
use std::fmt;
use std::io::{self, Write};

/// Magic bytes opening every BLP2 file
pub const BLP2_MAGIC: [u8; 4] = *b"BLP2";

/// Value of the content (`itype`) field written by this encoder
pub const BLP2_CONTENT_DIRECT: u32 = 1;

/// Number of mipmap slots in the header, used or not
pub const MAX_MIPMAPS: usize = 16;

/// Number of entries in the colour palette block
pub const PALETTE_LEN: usize = 256;

/// Bit depth written into the alpha fields for plain images
pub const PLAIN_ALPHA_BITS: u8 = 8;

/// Size in bytes of the serialized header. Pixel data of the first mipmap
/// starts right after it.
pub const HEADER_SIZE: usize = 4 // magic
    + 4 // content
    + 4 // compression, alpha bits, alpha type, has mipmaps
    + 4 + 4 // width, height
    + MAX_MIPMAPS * 4 // offsets
    + MAX_MIPMAPS * 4 // lengths
    + PALETTE_LEN * BYTES_PER_PIXEL;

/// Compression tag stored in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Compression {
    /// Indices into the colour palette
    Palettized = 1,
    /// S3TC block compression
    Dxt = 2,
    /// Raw BGRA pixels
    Plain = 3,
}

impl From<Compression> for u8 {
    fn from(v: Compression) -> u8 {
        v as u8
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compression::Palettized => "palettized",
            Compression::Dxt => "DXT",
            Compression::Plain => "plain",
        };
        write!(f, "{name}")
    }
}

/// BLP2 file header. Field order matches the on-disk layout.
#[derive(custom_debug::Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlpHeader {
    /// Content type, `1` for direct (non-JPEG) content
    pub content: u32,
    /// Compression of the pixel data
    pub compression: Compression,
    /// Bit depth of the alpha channel
    pub alpha_bits: u8,
    /// Alpha encoding tag
    pub alpha_type: u8,
    /// Non-zero when mipmaps beyond the first level are present
    pub has_mipmaps: u8,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// File offsets of each mipmap level
    pub mipmap_offsets: [u32; MAX_MIPMAPS],
    /// Byte lengths of each mipmap level
    pub mipmap_lengths: [u32; MAX_MIPMAPS],
    /// Colour palette, unused by plain images but always present
    #[debug(with = trimmed_collection_fmt)]
    pub palette: [BgraPixel; PALETTE_LEN],
}

impl BlpHeader {
    /// Header of a plain image with a single mipmap of `payload_len` bytes
    /// placed right after the header.
    pub fn plain(width: u32, height: u32, payload_len: u32) -> Self {
        let mut mipmap_offsets = [0; MAX_MIPMAPS];
        let mut mipmap_lengths = [0; MAX_MIPMAPS];
        mipmap_offsets[0] = HEADER_SIZE as u32;
        mipmap_lengths[0] = payload_len;

        Self {
            content: BLP2_CONTENT_DIRECT,
            compression: Compression::Plain,
            alpha_bits: PLAIN_ALPHA_BITS,
            alpha_type: PLAIN_ALPHA_BITS,
            has_mipmaps: 0,
            width,
            height,
            mipmap_offsets,
            mipmap_lengths,
            palette: [BgraPixel::default(); PALETTE_LEN],
        }
    }

    /// Size in bytes of the serialized header
    pub const fn size() -> usize {
        HEADER_SIZE
    }

    /// Write the header field by field in little-endian order
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&BLP2_MAGIC)?;
        writer.write_all(&self.content.to_le_bytes())?;
        writer.write_all(&[
            self.compression.into(),
            self.alpha_bits,
            self.alpha_type,
            self.has_mipmaps,
        ])?;
        writer.write_all(&self.width.to_le_bytes())?;
        writer.write_all(&self.height.to_le_bytes())?;

        for offset in &self.mipmap_offsets {
            writer.write_all(&offset.to_le_bytes())?;
        }
        for length in &self.mipmap_lengths {
            writer.write_all(&length.to_le_bytes())?;
        }
        for color in &self.palette {
            writer.write_all(&color.to_bytes())?;
        }

        Ok(())
    }
}
