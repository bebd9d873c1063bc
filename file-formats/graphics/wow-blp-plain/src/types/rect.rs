/// Rectangular image bounds: an origin plus an extent.
///
/// Coordinates are signed so that the origin can sit anywhere, the same way
/// sub-images of a larger canvas keep their parent coordinates. A negative
/// extent is representable but never produces a valid [`PixelBuffer`].
///
/// [`PixelBuffer`]: crate::PixelBuffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Horizontal coordinate of the top left corner
    pub x: i64,
    /// Vertical coordinate of the top left corner
    pub y: i64,
    /// Extent along the x axis
    pub width: i64,
    /// Extent along the y axis
    pub height: i64,
}

impl Rect {
    /// Create bounds from an origin and an extent
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounds with the origin at `(0, 0)`
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i64, height as i64)
    }

    /// Check whether the point lies inside, right and bottom edges excluded
    pub fn contains(&self, x: i64, y: i64) -> bool {
        // Widened so that far apart coordinates cannot overflow
        let (dx, dy) = (x as i128 - self.x as i128, y as i128 - self.y as i128);
        dx >= 0 && dy >= 0 && dx < self.width as i128 && dy < self.height as i128
    }

    /// True when the rectangle covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}
