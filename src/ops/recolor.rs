// ============================================================================
// RECOLOR OPERATION: force every visible pixel to pure white
// ============================================================================

use image::RgbaImage;
use rayon::prelude::*;

/// Set the RGB channels of every pixel with alpha > 0 to pure white, keeping
/// the alpha value. Fully transparent pixels pass through unchanged, RGB
/// bytes included.
///
/// Each pixel is updated independently, so the pass parallelizes freely and
/// applying it twice gives the same buffer as applying it once.
pub fn whiten(img: &mut RgbaImage) {
    img.par_chunks_exact_mut(4).for_each(|px| {
        if px[3] > 0 {
            px[0] = 255;
            px[1] = 255;
            px[2] = 255;
        }
    });
}
