// ============================================================================
// ERROR TYPES: decode, encode, and geometry failures
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

/// Reading or decoding an input image failed.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The file could not be opened or sniffed for its format.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file opened fine but its content did not decode.
    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Writing or encoding an output image failed.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// Creating or flushing the output file failed.
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The PNG encoder rejected the pixel data.
    #[error("cannot encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// A computed resize target was not a positive pixel count.
#[derive(Error, Debug)]
#[error("scaled logo size {computed} is not positive ({canvas} px canvas, ratio {ratio})")]
pub struct InvalidDimensionError {
    pub canvas: u32,
    pub ratio: f64,
    pub computed: i64,
}

/// Everything a file pipeline can fail with.
///
/// Transparent wrappers, so callers print the underlying message unchanged.
#[derive(Error, Debug)]
pub enum PrepError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    InvalidDimension(#[from] InvalidDimensionError),
}
