use crate::buffer::PixelBuffer;
use crate::types::{Rect, Rgba, TRANSPARENT};
use image::{DynamicImage, GenericImageView, ImageBuffer};
use std::ops::Deref;

/// Anything the encoder can read pixels from.
///
/// `rgba_at` must return a meaningful colour for every point inside
/// `bounds`; outside of them implementations return transparent black.
pub trait ImageSource {
    /// Area covered by the image
    fn bounds(&self) -> Rect;

    /// Colour of pixel `(x, y)` with 8 bits per channel
    fn rgba_at(&self, x: i64, y: i64) -> Rgba<u8>;
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn rgba_at(&self, x: i64, y: i64) -> Rgba<u8> {
        (**self).rgba_at(x, y)
    }
}

impl ImageSource for PixelBuffer {
    fn bounds(&self) -> Rect {
        PixelBuffer::bounds(self)
    }

    fn rgba_at(&self, x: i64, y: i64) -> Rgba<u8> {
        self.get(x, y)
    }
}

impl<C> ImageSource for ImageBuffer<Rgba<u8>, C>
where
    C: Deref<Target = [u8]>,
{
    fn bounds(&self) -> Rect {
        Rect::from_size(self.width(), self.height())
    }

    fn rgba_at(&self, x: i64, y: i64) -> Rgba<u8> {
        if !ImageSource::bounds(self).contains(x, y) {
            return TRANSPARENT;
        }
        *self.get_pixel(x as u32, y as u32)
    }
}

/// Any pixel type is converted to 8 bit RGBA by `image`.
impl ImageSource for DynamicImage {
    fn bounds(&self) -> Rect {
        Rect::from_size(self.width(), self.height())
    }

    fn rgba_at(&self, x: i64, y: i64) -> Rgba<u8> {
        if !ImageSource::bounds(self).contains(x, y) {
            return TRANSPARENT;
        }
        GenericImageView::get_pixel(self, x as u32, y as u32)
    }
}
