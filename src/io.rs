// ============================================================================
// IMAGE I/O: decode to RGBA, encode to PNG, derive sibling output paths
// ============================================================================

use image::codecs::png::PngEncoder;
use image::io::Reader as ImageReader;
use image::{ColorType, ImageEncoder, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{DecodeError, EncodeError};

/// Decode `path` into an RGBA image.
///
/// The container format is sniffed from the file content, so a mismatched
/// extension still decodes. Sources without an alpha channel come back
/// fully opaque.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, DecodeError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| DecodeError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let decoded = reader.decode().map_err(|source| DecodeError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let img = decoded.to_rgba8();
    debug!("decoded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img)
}

/// Encode `img` as an RGBA PNG at `path`.
///
/// The buffer goes to the encoder verbatim, alpha channel and all, so RGB
/// values under fully transparent pixels survive a write/read cycle.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<(), EncodeError> {
    let file = File::create(path).map_err(|source| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    PngEncoder::new(&mut writer)
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)
        .map_err(|source| EncodeError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(|source| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("wrote {} ({}x{})", path.display(), img.width(), img.height());
    Ok(())
}

/// Output path rule shared by both utilities: same directory as the input,
/// different file name.
pub fn output_sibling(input: &Path, file_name: &str) -> PathBuf {
    input.with_file_name(file_name)
}
