/// BLP2 file header and compression tags
pub mod header;
/// Pixel value types
pub mod pixel;
/// Image bounds
pub mod rect;

pub use header::*;
pub use pixel::*;
pub use rect::*;
