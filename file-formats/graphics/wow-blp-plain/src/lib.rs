//! Encoder for World of Warcraft BLP2 texture files in the uncompressed
//! ("plain") variant.
//!
//! A plain BLP2 file is a fixed 1172 byte header followed by the raw BGRA
//! pixels of the base mipmap. This crate copies any [`ImageSource`] into a
//! [`PixelBuffer`] with that byte order and prepends the header.
//!
//! # Examples
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use wow_blp_plain::{encode::encode_plain_blp, types::HEADER_SIZE};
//!
//! let image = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 40]));
//! let bytes = encode_plain_blp(&image).unwrap();
//!
//! assert_eq!(&bytes[0..4], b"BLP2");
//! assert_eq!(bytes.len(), HEADER_SIZE + 4 * 4 * 4);
//! // Pixels are stored as B, G, R, A
//! assert_eq!(&bytes[HEADER_SIZE..HEADER_SIZE + 4], &[30, 20, 10, 40]);
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// BGRA pixel storage used as the encoder's intermediate image
pub mod buffer;
/// Trimmed `Debug` formatting for large collections
pub mod debug;
/// Serialization of images into BLP2 files
pub mod encode;
/// Image sources the encoder can read from
pub mod source;
/// BLP2 header and geometry types
pub mod types;

pub use buffer::PixelBuffer;
pub use encode::{Error, encode_blp, encode_plain_blp, save_blp, write_plain_blp};
pub use source::ImageSource;
pub use types::{BgraPixel, BlpHeader, Compression, Rect};
