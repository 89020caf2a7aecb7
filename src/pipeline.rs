// ============================================================================
// FILE PIPELINES: the two utilities as load -> transform -> save functions
// ============================================================================

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::PrepError;
use crate::io;
use crate::ops::{pad, recolor};

/// What the padding pipeline produced, for the caller's status output.
#[derive(Debug)]
pub struct PadReport {
    /// Where the icon was written.
    pub output: PathBuf,
    /// Edge length of the resized logo, in pixels.
    pub logo_size: u32,
    /// Edge length of the square canvas, in pixels.
    pub canvas_size: u32,
}

/// Recolor `input` to a pure-white logo and write it as `output_name` in the
/// input's directory. Returns the output path.
pub fn whiten_logo(input: &Path, output_name: &str) -> Result<PathBuf, PrepError> {
    let mut img = io::load_rgba(input)?;
    recolor::whiten(&mut img);

    let output = io::output_sibling(input, output_name);
    io::write_png(&img, &output)?;
    info!("whitened {} -> {}", input.display(), output.display());
    Ok(output)
}

/// Resize `input` to [`pad::LOGO_RATIO`] of [`pad::CANVAS_SIZE`], center it
/// on a transparent square canvas, and write the result as `output_name` in
/// the input's directory.
pub fn pad_adaptive_icon(input: &Path, output_name: &str) -> Result<PadReport, PrepError> {
    let src = io::load_rgba(input)?;
    let (width, height) = src.dimensions();
    if width != height {
        warn!(
            "{} is {}x{}; it will be scaled non-uniformly to a square logo",
            input.display(),
            width,
            height
        );
    }

    let logo_size = pad::scaled_logo_size(pad::CANVAS_SIZE, pad::LOGO_RATIO)?;
    let canvas = pad::compose_centered(&src, pad::CANVAS_SIZE, logo_size);

    let output = io::output_sibling(input, output_name);
    io::write_png(&canvas, &output)?;
    info!(
        "padded {} into {} ({}x{} logo on a {}x{} canvas)",
        input.display(),
        output.display(),
        logo_size,
        logo_size,
        pad::CANVAS_SIZE,
        pad::CANVAS_SIZE
    );
    Ok(PadReport {
        output,
        logo_size,
        canvas_size: pad::CANVAS_SIZE,
    })
}
