use crate::debug::trimmed_collection_fmt;
use crate::source::ImageSource;
use crate::types::{BYTES_PER_PIXEL, BgraPixel, Rect, Rgba, TRANSPARENT};

/// Computes `bytes_per_pixel * width * height` for a pixel allocation.
///
/// Returns `None` if any factor is negative or if the product does not fit
/// the largest size an allocation may have (`isize::MAX`). The factors are
/// multiplied in 128 bits, so the result is never a wrapped value.
pub fn buffer_len(bytes_per_pixel: i64, width: i64, height: i64) -> Option<usize> {
    let bytes_per_pixel = u64::try_from(bytes_per_pixel).ok()?;
    let width = u64::try_from(width).ok()?;
    let height = u64::try_from(height).ok()?;

    let row = u64::try_from(u128::from(bytes_per_pixel) * u128::from(width)).ok()?;
    let total = u128::from(row) * u128::from(height);
    let total = isize::try_from(total).ok()?;
    usize::try_from(total).ok()
}

/// In-memory image storing 4 bytes per pixel in B, G, R, A order.
///
/// Rows are `stride` bytes apart and the buffer holds exactly
/// `stride * height` bytes. Accessors exchange colours as [`Rgba<u8>`];
/// reads outside of the bounds yield transparent black and writes outside of
/// the bounds are ignored.
#[derive(custom_debug::Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    #[debug(with = trimmed_collection_fmt)]
    pixels: Vec<u8>,
    bounds: Rect,
    stride: usize,
}

impl PixelBuffer {
    /// Allocate a zeroed (transparent black) buffer covering `bounds`.
    ///
    /// # Panics
    ///
    /// If the bounds have a negative extent or the byte length cannot be
    /// represented. The check happens before anything is allocated.
    pub fn new(bounds: Rect) -> Self {
        let bpp = BYTES_PER_PIXEL as i64;
        let (stride, len) = match (
            buffer_len(bpp, bounds.width, 1),
            buffer_len(bpp, bounds.width, bounds.height),
        ) {
            (Some(stride), Some(len)) => (stride, len),
            _ => panic!(
                "PixelBuffer bounds have huge or negative dimensions: {}x{}",
                bounds.width, bounds.height
            ),
        };

        Self {
            pixels: vec![0; len],
            bounds,
            stride,
        }
    }

    /// Area covered by the buffer
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Number of pixel columns
    pub fn width(&self) -> i64 {
        self.bounds.width
    }

    /// Number of pixel rows
    pub fn height(&self) -> i64 {
        self.bounds.height
    }

    /// Distance in bytes between the starts of two consecutive rows
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Length of the pixel data in bytes
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when the buffer covers no pixels
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Raw BGRA bytes, row after row
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Take the raw BGRA bytes out of the buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    /// Index of the first byte of pixel `(x, y)`.
    ///
    /// Not bounds checked: for points outside of the bounds the result is
    /// meaningless and may be negative.
    pub fn offset_of(&self, x: i64, y: i64) -> i64 {
        (y - self.bounds.y) * self.stride as i64 + (x - self.bounds.x) * BYTES_PER_PIXEL as i64
    }

    /// Colour at `(x, y)`, transparent black outside of the bounds
    pub fn get(&self, x: i64, y: i64) -> Rgba<u8> {
        if !self.bounds.contains(x, y) {
            return TRANSPARENT;
        }

        let n = self.offset_of(x, y) as usize;
        let pix = &self.pixels[n..n + BYTES_PER_PIXEL];
        Rgba([pix[2], pix[1], pix[0], pix[3]])
    }

    /// Store `color` at `(x, y)`. Does nothing outside of the bounds.
    pub fn set(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if !self.bounds.contains(x, y) {
            return;
        }

        let n = self.offset_of(x, y) as usize;
        self.pixels[n..n + BYTES_PER_PIXEL].copy_from_slice(&BgraPixel::from(color).to_bytes());
    }

    /// Fill the whole buffer from `source`.
    ///
    /// The pixel at `source_origin` lands on the top left corner of the
    /// buffer; only source points mapping into the buffer are read.
    pub fn copy_from<S>(&mut self, source: &S, source_origin: (i64, i64))
    where
        S: ImageSource + ?Sized,
    {
        if self.pixels.is_empty() {
            return;
        }

        let (sx, sy) = source_origin;
        for (dy, row) in self.pixels.chunks_exact_mut(self.stride).enumerate() {
            for (dx, cell) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let color = source.rgba_at(sx + dx as i64, sy + dy as i64);
                cell.copy_from_slice(&BgraPixel::from(color).to_bytes());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_buffer_len() {
        assert_eq!(buffer_len(4, 4, 4), Some(64));
        assert_eq!(buffer_len(4, 0, 1 << 40), Some(0));
        assert_eq!(buffer_len(4, 1, 1), Some(4));
        assert_eq!(buffer_len(-4, 1, 1), None);
        assert_eq!(buffer_len(4, -1, 1), None);
        assert_eq!(buffer_len(4, 1, -1), None);
        assert_eq!(buffer_len(4, i64::MAX, i64::MAX), None);
        assert_eq!(buffer_len(4, 1 << 31, 1 << 31), None);
        assert_eq!(buffer_len(1, isize::MAX as i64, 1), Some(isize::MAX as usize));
        assert_eq!(buffer_len(2, isize::MAX as i64, 1), None);
    }

    #[test]
    fn test_new_sizes() {
        let buffer = PixelBuffer::new(Rect::new(5, -3, 3, 2));
        assert_eq!(buffer.stride(), 12);
        assert_eq!(buffer.len(), 24);
        assert!(buffer.as_bytes().iter().all(|&b| b == 0));
        assert_eq!((buffer.width(), buffer.height()), (3, 2));
        assert_eq!(buffer.len(), buffer.stride() * buffer.height() as usize);

        let empty = PixelBuffer::new(Rect::from_size(0, 16));
        assert!(empty.is_empty());
        assert_eq!(empty.stride(), 0);
        assert_eq!((empty.width(), empty.height()), (0, 16));
    }

    #[test]
    #[should_panic(expected = "huge or negative dimensions")]
    fn test_new_rejects_overflow() {
        PixelBuffer::new(Rect::new(0, 0, 1 << 40, 1 << 40));
    }

    #[test]
    #[should_panic(expected = "huge or negative dimensions")]
    fn test_new_rejects_negative() {
        PixelBuffer::new(Rect::new(0, 0, -4, 4));
    }

    #[test]
    #[should_panic(expected = "huge or negative dimensions")]
    fn test_new_rejects_huge_stride() {
        PixelBuffer::new(Rect::new(0, 0, i64::MAX, 0));
    }

    #[test]
    fn test_channel_order() {
        let mut buffer = PixelBuffer::new(Rect::from_size(4, 4));
        buffer.set(2, 1, Rgba([10, 20, 30, 40]));

        assert_eq!(buffer.get(2, 1), Rgba([10, 20, 30, 40]));
        let n = buffer.offset_of(2, 1) as usize;
        assert_eq!(n, 24);
        assert_eq!(&buffer.as_bytes()[n..n + 4], &[30, 20, 10, 40]);
    }

    #[test]
    fn test_offset_with_origin() {
        let buffer = PixelBuffer::new(Rect::new(10, 20, 8, 2));
        assert_eq!(buffer.offset_of(10, 20), 0);
        assert_eq!(buffer.offset_of(11, 20), 4);
        assert_eq!(buffer.offset_of(10, 21), 32);
        assert_eq!(buffer.offset_of(9, 20), -4);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut buffer = PixelBuffer::new(Rect::new(1, 1, 2, 2));
        buffer.set(1, 1, Rgba([1, 2, 3, 4]));
        let before = buffer.clone();

        buffer.set(0, 0, Rgba([255; 4]));
        buffer.set(3, 1, Rgba([255; 4]));
        buffer.set(1, 3, Rgba([255; 4]));
        assert_eq!(buffer, before);

        assert_eq!(buffer.get(1, 1), Rgba([1, 2, 3, 4]));
        assert_eq!(buffer.get(0, 0), TRANSPARENT);
        assert_eq!(buffer.get(-100, 2), TRANSPARENT);
        assert_eq!(buffer.get(2, 3), TRANSPARENT);
    }

    #[test]
    fn test_copy_from_offset_source() {
        let mut source = PixelBuffer::new(Rect::new(-1, -1, 3, 3));
        for y in -1..2 {
            for x in -1..2 {
                source.set(x, y, Rgba([(x + 1) as u8, (y + 1) as u8, 0, 255]));
            }
        }

        let mut target = PixelBuffer::new(Rect::from_size(2, 2));
        target.copy_from(&source, (0, 0));

        assert_eq!(target.get(0, 0), Rgba([1, 1, 0, 255]));
        assert_eq!(target.get(1, 1), Rgba([2, 2, 0, 255]));
        assert_eq!(&target.as_bytes()[0..4], &[0, 1, 1, 255]);
    }
}
