pub use image::Rgba;

/// Number of bytes each pixel occupies in BGRA storage.
pub const BYTES_PER_PIXEL: usize = 4;

/// Fully transparent black, returned for reads outside of image bounds.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Single colour as it is laid out on disk: blue, green, red, alpha.
///
/// Used for the colour palette of the header. Samples exchanged with callers
/// are [`Rgba<u8>`] instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BgraPixel {
    /// Blue channel
    pub b: u8,
    /// Green channel
    pub g: u8,
    /// Red channel
    pub r: u8,
    /// Alpha channel
    pub a: u8,
}

impl BgraPixel {
    /// Bytes in storage order
    pub fn to_bytes(self) -> [u8; BYTES_PER_PIXEL] {
        [self.b, self.g, self.r, self.a]
    }
}

impl From<Rgba<u8>> for BgraPixel {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        Self { b, g, r, a }
    }
}

impl From<BgraPixel> for Rgba<u8> {
    fn from(v: BgraPixel) -> Self {
        Rgba([v.r, v.g, v.b, v.a])
    }
}
