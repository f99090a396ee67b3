//! Synthetic image builders for testing.

use image::{DynamicImage, Rgb, RgbImage};
use pod_core::ImageInfo;

/// Builder for creating synthetic test images.
///
/// Provides images with known tonal distributions: hard two-tone artwork
/// that classifies as a drawing and smooth ramps that classify as a photo.
pub struct SyntheticImageBuilder;

impl SyntheticImageBuilder {
    // === Drawing-like Images ===

    /// Creates an image whose left half is black and right half white.
    ///
    /// Half the pixels land in bin 0 and half in bin 255, whatever the size,
    /// as long as `width` is even.
    #[must_use]
    pub fn black_and_white(width: u32, height: u32) -> ImageInfo {
        let img = RgbImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        ImageInfo::new("synthetic://black_and_white", DynamicImage::ImageRgb8(img))
    }

    /// Creates a high-contrast checkerboard with 8 pixel cells.
    #[must_use]
    pub fn checkerboard(width: u32, height: u32) -> ImageInfo {
        Self::checkerboard_with_cell_size(width, height, 8)
    }

    /// Creates a checkerboard with custom cell size.
    #[must_use]
    pub fn checkerboard_with_cell_size(width: u32, height: u32, cell_size: u32) -> ImageInfo {
        let cell_size = cell_size.max(1);
        let img = RgbImage::from_fn(width, height, |x, y| {
            if (x / cell_size + y / cell_size) % 2 == 0 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        });
        ImageInfo::new("synthetic://checkerboard", DynamicImage::ImageRgb8(img))
    }

    /// Creates dark ink lines on pale paper, one line every 8 pixels in
    /// both directions.
    #[must_use]
    pub fn line_art(width: u32, height: u32) -> ImageInfo {
        let img = RgbImage::from_fn(width, height, |x, y| {
            if x % 8 == 0 || y % 8 == 0 {
                Rgb([20, 20, 20])
            } else {
                Rgb([240, 240, 240])
            }
        });
        ImageInfo::new("synthetic://line_art", DynamicImage::ImageRgb8(img))
    }

    // === Photo-like Images ===

    /// Creates a horizontal gray ramp from `low` at the left edge to `high`
    /// at the right edge.
    ///
    /// With `width == high - low + 1` every column gets its own gray level.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn tonal_gradient(width: u32, height: u32, low: u8, high: u8) -> ImageInfo {
        let span = u32::from(high.saturating_sub(low));
        let last = width.saturating_sub(1).max(1);
        let img = RgbImage::from_fn(width, height, |x, _| {
            let v = low + (x * span / last) as u8;
            Rgb([v, v, v])
        });
        ImageInfo::new("synthetic://tonal_gradient", DynamicImage::ImageRgb8(img))
    }

    /// The standard photo-like image: a 100x10 ramp over levels 50 to 149.
    #[must_use]
    pub fn photo_like() -> ImageInfo {
        Self::tonal_gradient(100, 10, 50, 149)
    }

    /// The standard drawing-like image: a 2x2 black and white block.
    #[must_use]
    pub fn drawing_like() -> ImageInfo {
        Self::black_and_white(2, 2)
    }

    // === Edge Cases ===

    /// Creates a uniform gray image.
    #[must_use]
    pub fn uniform_gray(width: u32, height: u32, value: u8) -> ImageInfo {
        Self::rgb_uniform(width, height, value, value, value)
    }

    /// Creates a uniform RGB color image.
    #[must_use]
    pub fn rgb_uniform(width: u32, height: u32, r: u8, g: u8, b: u8) -> ImageInfo {
        let img = RgbImage::from_fn(width, height, |_, _| Rgb([r, g, b]));
        ImageInfo::new("synthetic://rgb_uniform", DynamicImage::ImageRgb8(img))
    }

    /// Creates an image without pixels.
    #[must_use]
    pub fn empty() -> ImageInfo {
        ImageInfo::new("synthetic://empty", DynamicImage::new_rgb8(0, 0))
    }
}
