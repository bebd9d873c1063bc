//! Integration tests for the layout of encoded BLP2 files

use image::{DynamicImage, Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use wow_blp_plain::types::{HEADER_SIZE, MAX_MIPMAPS};
use wow_blp_plain::{Compression, Error, encode_blp, encode_plain_blp, save_blp};

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, (x ^ y) as u8, 255 - x as u8])
    })
}

#[test]
fn test_file_length_for_power_of_two_sizes() {
    for (width, height) in [(1, 1), (1, 64), (2, 8), (16, 16), (128, 4), (256, 256)] {
        let bytes = encode_plain_blp(&gradient(width, height)).expect("valid image");
        assert_eq!(
            bytes.len(),
            1172 + 4 * (width * height) as usize,
            "{width}x{height}"
        );
    }
}

#[test]
fn test_single_pixel_image() {
    let image = RgbaImage::from_pixel(1, 1, Rgba([10, 20, 30, 40]));
    let bytes = encode_plain_blp(&image).unwrap();

    assert_eq!(bytes.len(), 1176);
    assert_eq!(u32_at(&bytes, 84), 4);
    assert_eq!(&bytes[1172..], &[30, 20, 10, 40]);
}

#[test]
fn test_rejects_non_power_of_two() {
    for (width, height) in [(3, 4), (4, 5), (100, 128), (64, 100), (0, 4), (4, 0)] {
        let result = encode_plain_blp(&RgbaImage::new(width, height));
        assert!(
            matches!(result, Err(Error::Validation(_))),
            "{width}x{height} should be rejected"
        );
    }
}

#[test]
fn test_header_fields_of_4x4_image() {
    let bytes = encode_plain_blp(&gradient(4, 4)).unwrap();

    assert_eq!(&bytes[0..4], b"BLP2");
    assert_eq!(u32_at(&bytes, 4), 1);
    assert_eq!(bytes[8], 3);
    assert_eq!(bytes[9], 8);
    assert_eq!(bytes[10], 8);
    assert_eq!(bytes[11], 0);
    assert_eq!(u32_at(&bytes, 12), 4);
    assert_eq!(u32_at(&bytes, 16), 4);
    assert_eq!(u32_at(&bytes, 20), 1172);
    assert_eq!(u32_at(&bytes, 84), 64);
    for i in 1..MAX_MIPMAPS {
        assert_eq!(u32_at(&bytes, 20 + 4 * i), 0, "offset of mipmap {i}");
        assert_eq!(u32_at(&bytes, 84 + 4 * i), 0, "length of mipmap {i}");
    }
    assert_eq!(&bytes[148..1172], &[0u8; 1024][..]);
}

#[test]
fn test_payload_is_bgra_row_major() {
    let image = gradient(4, 2);
    let bytes = encode_plain_blp(&image).unwrap();
    let payload = &bytes[HEADER_SIZE..];

    for (x, y, pixel) in image.enumerate_pixels() {
        let n = (y as usize * 4 + x as usize) * 4;
        let [r, g, b, a] = pixel.0;
        assert_eq!(&payload[n..n + 4], &[b, g, r, a], "pixel ({x}, {y})");
    }
}

#[test]
fn test_encoding_is_deterministic() {
    let image = DynamicImage::ImageRgba8(gradient(32, 8));
    assert_eq!(
        encode_plain_blp(&image).unwrap(),
        encode_plain_blp(&image).unwrap()
    );
}

#[test]
fn test_non_rgba_sources_get_opaque_alpha() {
    let image = DynamicImage::new_rgb8(2, 2);
    let bytes = encode_blp(&image, Compression::Plain).unwrap();
    assert_eq!(&bytes[HEADER_SIZE..HEADER_SIZE + 4], &[0, 0, 0, 255]);
}

#[test]
fn test_save_blp_writes_encoded_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("texture.blp");
    let image = gradient(8, 8);

    save_blp(&image, Compression::Plain, &path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), encode_plain_blp(&image).unwrap());
}

#[test]
fn test_save_blp_leaves_no_file_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("texture.blp");

    let result = save_blp(&RgbaImage::new(3, 3), Compression::Plain, &path);
    assert!(matches!(result, Err(Error::Validation(_))));
    let result = save_blp(&RgbaImage::new(4, 4), Compression::Dxt, &path);
    assert!(matches!(result, Err(Error::UnsupportedCompression(Compression::Dxt))));
    assert!(!path.exists());
}

#[test]
fn test_save_blp_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("texture.blp");

    match save_blp(&RgbaImage::new(4, 4), Compression::Plain, &path) {
        Err(Error::FileSystem(failed, _)) => assert_eq!(failed, path),
        other => panic!("unexpected result {other:?}"),
    }
}
