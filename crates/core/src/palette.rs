//! Named color ramps for mapping density rasters to pixels.
//!
//! Stops are evenly spaced along `t` and blended in linear light.

use crate::color::{mix, Srgb};
use crate::error::EngineError;

const PRESETS: &[(&str, &[&str])] = &[
    ("filings", &["#000000", "#5a5a5a", "#d3d3d3"]),
    ("monochrome", &["#000000", "#ffffff"]),
    ("brass", &["#0b0704", "#6b4a1c", "#c89b3c", "#f6e7b0"]),
    ("ocean", &["#03071e", "#0a4c6a", "#2a9d8f", "#e9f5f2"]),
];

/// A ramp of sRGB color stops sampled by interpolation.
///
/// `sample(0.0)` returns the first stop, `sample(1.0)` the last.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Srgb>,
}

impl Palette {
    /// Creates a palette from color stops. Requires at least one color.
    pub fn new(colors: Vec<Srgb>) -> Result<Self, EngineError> {
        if colors.is_empty() {
            return Err(EngineError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    /// Creates a palette by parsing hex color strings.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, EngineError> {
        let colors = hexes
            .iter()
            .map(|h| Srgb::from_hex(h))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Looks up a preset by name (case insensitive).
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        PRESETS
            .iter()
            .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
            .ok_or_else(|| EngineError::InvalidPalette(format!("unknown palette: {name}")))
            .and_then(|(_, hexes)| Self::from_hex(hexes))
    }

    /// Names of all preset palettes.
    pub fn list_names() -> Vec<&'static str> {
        PRESETS.iter().map(|(name, _)| *name).collect()
    }

    /// Light gray filings on black, the look of the classic figure.
    pub fn filings() -> Self {
        Self::from_name("filings").unwrap_or_else(|_| Self::fallback())
    }

    fn fallback() -> Self {
        Self {
            colors: vec![Srgb::BLACK],
        }
    }

    /// Number of color stops.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Samples the palette at `t`, clamped to [0, 1]. NaN samples the first stop.
    pub fn sample(&self, t: f64) -> Srgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.colors.len();
        if n == 1 {
            return self.colors[0];
        }
        let scaled = t * (n - 1) as f64;
        let idx = (scaled as usize).min(n - 2);
        mix(self.colors[idx], self.colors[idx + 1], scaled - idx as f64)
    }
}
