#![doc = r#"
Cover art conversion for on-screen display

Chart files ship cover art as tightly packed 3-channel RGB bytes. Display
surfaces want 4-channel RGBA and usually a real image container, so this
module expands the pixels with an opaque alpha channel and encodes them to
an in-memory PNG.

Only compiled with the `cover-image` feature.
"#]

use crate::chart::CoverArt;
use alloc::vec::Vec;
use image::{ImageError, RgbaImage};
use thiserror::Error;

/// Bytes per pixel of the packed layout this converter consumes.
const RGB_BYTES_PER_PIXEL: usize = 3;

/// Bytes per pixel of the expanded layout it produces.
const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Errors produced while converting cover art into a displayable image.
#[derive(Debug, Error)]
pub enum CoverImageError {
    /// The cover's dimensions cannot describe an image.
    #[error("cover dimensions {width}x{height} cannot form an image")]
    Dimensions {
        /// Width as stored in the chart.
        width: i32,
        /// Height as stored in the chart.
        height: i32,
    },
    /// The PNG encoder rejected the image.
    #[error("png encoding failed: {0}")]
    Encoding(#[from] ImageError),
}

/// Expand tightly packed RGB bytes to RGBA with every pixel fully opaque.
///
/// The output is always `width * height * 4` bytes. Input shorter than
/// `width * height * 3` leaves the tail of the output as transparent
/// black; excess input is ignored.
pub fn rgb_to_rgba(rgb: &[u8], width: u32, height: u32) -> Vec<u8> {
    let pixels = width as usize * height as usize;
    let mut rgba = alloc::vec![0u8; pixels * RGBA_BYTES_PER_PIXEL];

    for (src, dst) in rgb
        .chunks_exact(RGB_BYTES_PER_PIXEL)
        .zip(rgba.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        dst[..RGB_BYTES_PER_PIXEL].copy_from_slice(src);
        dst[RGB_BYTES_PER_PIXEL] = u8::MAX;
    }

    rgba
}

impl CoverArt {
    /// Encode the cover as an in-memory PNG, treating
    /// [`data`](Self::data) as tightly packed RGB.
    ///
    /// The texture format tag is not consulted; every chart observed in
    /// the wild stores 3-channel RGB, and the tag exists for formats that
    /// have not shipped yet.
    pub fn to_png(&self) -> Result<Vec<u8>, CoverImageError> {
        let dimensions = || CoverImageError::Dimensions {
            width: self.width(),
            height: self.height(),
        };
        let width = u32::try_from(self.width()).map_err(|_| dimensions())?;
        let height = u32::try_from(self.height()).map_err(|_| dimensions())?;

        let rgba = rgb_to_rgba(self.data(), width, height);
        let image = RgbaImage::from_raw(width, height, rgba).ok_or_else(dimensions)?;

        let mut png = std::io::Cursor::new(Vec::new());
        image.write_to(&mut png, image::ImageFormat::Png)?;
        Ok(png.into_inner())
    }
}

#[test]
fn expands_rgb_with_opaque_alpha() {
    use pretty_assertions::assert_eq;

    let rgb = [10, 20, 30, 40, 50, 60];
    let rgba = rgb_to_rgba(&rgb, 2, 1);
    assert_eq!(rgba, [10, 20, 30, 255, 40, 50, 60, 255]);
}

#[test]
fn short_pixel_data_leaves_the_tail_transparent() {
    use pretty_assertions::assert_eq;

    let rgba = rgb_to_rgba(&[1, 2, 3], 2, 1);
    assert_eq!(rgba, [1, 2, 3, 255, 0, 0, 0, 0]);
}

#[test]
fn png_round_trips_dimensions() {
    let data = alloc::vec![0x7F; 4 * 2 * RGB_BYTES_PER_PIXEL];
    let cover = CoverArt::new(0, 4, 2, data);

    let png = cover.to_png().unwrap();
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!(decoded.width(), 4);
    assert_eq!(decoded.height(), 2);
}

#[test]
fn negative_dimensions_are_an_error() {
    let cover = CoverArt::new(0, -1, 8, Vec::new());
    assert!(matches!(
        cover.to_png(),
        Err(CoverImageError::Dimensions { width: -1, .. })
    ));
}
