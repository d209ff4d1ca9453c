//! Image inspection utilities for testing.
//!
//! This module provides helper functions for checking rendered figures.

use image::{DynamicImage, GenericImageView, ImageError, ImageFormat, Rgba};
use std::path::Path;

/// Load an image from a file
pub fn load_image(path: &Path) -> Result<DynamicImage, ImageError> {
    image::open(path)
}

/// Detect the encoded format of a file from its leading bytes
pub fn detect_file_format(path: &Path) -> Option<ImageFormat> {
    let bytes = std::fs::read(path).ok()?;
    image::guess_format(&bytes).ok()
}

/// Assert that an image has the given dimensions
pub fn assert_dimensions(image: &DynamicImage, width: u32, height: u32) {
    let (actual_width, actual_height) = image.dimensions();
    assert_eq!(
        (actual_width, actual_height),
        (width, height),
        "Image dimensions differ: actual = {}x{}, expected = {}x{}",
        actual_width,
        actual_height,
        width,
        height
    );
}

/// Count pixels that exactly match `color` (alpha ignored)
pub fn count_pixels_with_color(image: &DynamicImage, color: [u8; 3]) -> usize {
    image
        .pixels()
        .filter(|(_, _, Rgba(p))| p[0] == color[0] && p[1] == color[1] && p[2] == color[2])
        .count()
}

/// Fraction of pixels that are not pure white
pub fn ink_fraction(image: &DynamicImage) -> f64 {
    let total = image.width() as usize * image.height() as usize;
    if total == 0 {
        return 0.0;
    }
    let white = count_pixels_with_color(image, [255, 255, 255]);
    (total - white) as f64 / total as f64
}
