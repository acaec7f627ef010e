//! PNG output of rendered frames.
//!
//! Feature-gated behind `png` (default on) so that embedders which only need
//! the in-memory buffers from [`crate::pixel`] avoid the `image` dependency.

use chladni_core::error::EngineError;
use std::path::Path;

/// Writes an RGBA8 buffer of `width` × `height` pixels as a PNG.
///
/// Returns `EngineError::InvalidDimensions` if the dimensions overflow `u32`
/// or do not match the buffer, and `EngineError::Io` on write failure.
pub fn write_png(rgba: Vec<u8>, width: usize, height: usize, path: &Path) -> Result<(), EngineError> {
    let w = u32::try_from(width).map_err(|_| EngineError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| EngineError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba).ok_or(EngineError::InvalidDimensions)?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))?;
    tracing::debug!(path = %path.display(), width, height, "wrote png");
    Ok(())
}
