// ============================================================================
// PADDING OPERATION: resize the logo and center it on a transparent canvas
// ============================================================================

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::error::InvalidDimensionError;

/// Edge length of the generated icon canvas, in pixels.
pub const CANVAS_SIZE: u32 = 1024;

/// Fraction of the canvas edge the logo occupies. The remainder becomes the
/// transparent safe margin, split between the two sides.
pub const LOGO_RATIO: f64 = 0.60;

/// Edge length of the resized logo: `floor(canvas * ratio)`.
///
/// Rejects results below one pixel instead of asking the resampler for an
/// empty image.
pub fn scaled_logo_size(canvas: u32, ratio: f64) -> Result<u32, InvalidDimensionError> {
    let computed = (canvas as f64 * ratio).floor();
    if computed < 1.0 {
        return Err(InvalidDimensionError {
            canvas,
            ratio,
            computed: computed as i64,
        });
    }
    Ok(computed as u32)
}

/// Top/left margin that centers a `logo`-sized square on a `canvas`-sized
/// one. Integer division of the gap, so an odd gap puts the extra pixel on
/// the bottom/right side.
pub fn centered_offset(canvas: u32, logo: u32) -> i64 {
    (i64::from(canvas) - i64::from(logo)) / 2
}

/// Resize `src` to `logo_size` on both axes and composite it centered on a
/// freshly allocated, fully transparent `canvas_size` square.
///
/// Non-square sources are scaled non-uniformly to fit the square target.
/// The resized image's own alpha drives the blend, so transparent source
/// regions leave the canvas transparent.
pub fn compose_centered(src: &RgbaImage, canvas_size: u32, logo_size: u32) -> RgbaImage {
    let resized = imageops::resize(src, logo_size, logo_size, FilterType::Lanczos3);

    // RgbaImage::new zero-fills, so the canvas starts fully transparent.
    let mut canvas = RgbaImage::new(canvas_size, canvas_size);
    let offset = centered_offset(canvas_size, logo_size);
    imageops::overlay(&mut canvas, &resized, offset, offset);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn logo_size_is_the_floored_fraction_of_the_canvas() {
        assert_eq!(scaled_logo_size(CANVAS_SIZE, LOGO_RATIO).unwrap(), 614);
        assert_eq!(scaled_logo_size(100, 0.5).unwrap(), 50);
        assert_eq!(scaled_logo_size(3, 0.5).unwrap(), 1);
    }

    #[test]
    fn offset_centers_the_logo() {
        assert_eq!(centered_offset(CANVAS_SIZE, 614), 205);
        assert_eq!(centered_offset(100, 50), 25);
    }

    #[test]
    fn odd_gap_puts_the_extra_pixel_on_the_far_side() {
        // Canvas 11, logo 4: gap 7 splits into margins of 3 and 4.
        assert_eq!(centered_offset(11, 4), 3);
    }

    #[test]
    fn non_positive_logo_size_is_rejected() {
        let err = scaled_logo_size(1024, 0.0).unwrap_err();
        assert_eq!(err.computed, 0);
        assert!(scaled_logo_size(1, 0.4).is_err());
        assert!(scaled_logo_size(1024, -2.0).is_err());
    }

    #[test]
    fn canvas_has_the_requested_dimensions() {
        let src = RgbaImage::from_pixel(300, 300, Rgba([9, 9, 9, 255]));
        let canvas = compose_centered(&src, 64, 38);
        assert_eq!(canvas.dimensions(), (64, 64));
    }

    #[test]
    fn margins_stay_transparent_and_the_center_is_filled() {
        let src = RgbaImage::from_pixel(4, 4, Rgba([10, 200, 60, 255]));
        let canvas = compose_centered(&src, 16, 8);
        for (x, y, px) in canvas.enumerate_pixels() {
            let inside = (4..12).contains(&x) && (4..12).contains(&y);
            if inside {
                assert_eq!(px.0, [10, 200, 60, 255], "logo pixel at ({x},{y})");
            } else {
                assert_eq!(px.0, [0, 0, 0, 0], "margin pixel at ({x},{y})");
            }
        }
    }

    #[test]
    fn partial_alpha_survives_composition() {
        let src = RgbaImage::from_pixel(8, 8, Rgba([100, 100, 100, 128]));
        let canvas = compose_centered(&src, 8, 4);
        let px = canvas.get_pixel(3, 3);
        assert_eq!(px.0[3], 128);
        for c in 0..3 {
            assert!(
                px.0[c].abs_diff(100) <= 1,
                "channel {c} drifted: {:?}",
                px.0
            );
        }
    }

    #[test]
    fn non_square_sources_are_squashed_onto_the_square_logo_area() {
        let src = RgbaImage::from_pixel(8, 4, Rgba([0, 0, 255, 255]));
        let canvas = compose_centered(&src, 16, 8);
        for (x, y, px) in canvas.enumerate_pixels() {
            let inside = (4..12).contains(&x) && (4..12).contains(&y);
            if inside {
                assert_eq!(px.0, [0, 0, 255, 255], "logo pixel at ({x},{y})");
            } else {
                assert_eq!(px.0[3], 0, "margin pixel at ({x},{y})");
            }
        }
    }
}
