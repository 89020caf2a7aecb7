//! Logo preparation utilities for app icon assets.
//!
//! Two small pipelines over RGBA images: recoloring a logo to pure white
//! while keeping its alpha channel, and centering a resized logo on a
//! transparent square canvas to produce an adaptive launcher icon. Both are
//! exposed as library functions (see [`pipeline`]) and as the `whiten_logo`
//! and `pad_logo` binaries with fixed asset paths.

pub mod error;
pub mod io;
pub mod ops;
pub mod pipeline;

pub use error::{DecodeError, EncodeError, InvalidDimensionError, PrepError};
