//! Error types for the Chladni simulator.
//!
//! The membrane model itself never fails: out-of-range inputs are clamped or
//! mapped to a fallback mode. These errors only surface at the outer
//! boundaries (raster construction, name lookups, color parsing, file output).

use thiserror::Error;

/// Errors produced at the boundaries of the simulator.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero (or overflowed) when creating a raster.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A raster was built from a buffer whose length does not match its size.
    #[error("buffer of length {len} does not fit a {width}x{height} raster")]
    BufferMismatch {
        len: usize,
        width: usize,
        height: usize,
    },

    /// No engine is registered under the requested name.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// A vibration mode name did not match any known mode.
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed or looked up.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// Writing a snapshot or other output failed.
    #[error("i/o error: {0}")]
    Io(String),
}
