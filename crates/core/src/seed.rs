//! Reproducible description of one simulation run.
//!
//! A [`Seed`] captures everything needed to recreate a rendered figure:
//! engine name, raster dimensions, parameters, PRNG seed, and tick count.
//! It lives only in memory; hosts may print it so a run can be repeated.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Reproducible description of one run.
///
/// Two identical `Seed` values fed to the same binary produce bit-identical
/// particle positions and rasters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    pub engine: String,
    pub width: usize,
    pub height: usize,
    pub params: serde_json::Value,
    pub seed: u64,
    pub steps: usize,
}

impl Seed {
    /// Creates a new Seed with empty params (`{}`) and zero steps.
    pub fn new(engine: &str, width: usize, height: usize, seed: u64) -> Self {
        Self {
            engine: engine.to_string(),
            width,
            height,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            steps: 0,
        }
    }

    /// Sets the parameter object.
    pub fn with_params(mut self, params: serde_json::Value) -> Self {
        self.params = params;
        self
    }

    /// Sets the number of ticks to run.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Validates that the raster has non-zero dimensions and that
    /// `width * height` does not overflow.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(EngineError::InvalidDimensions)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_creates_seed_with_default_params_and_steps() {
        let s = Seed::new("chladni", 400, 400, 42);
        assert_eq!(s.engine, "chladni");
        assert_eq!(s.width, 400);
        assert_eq!(s.height, 400);
        assert_eq!(s.seed, 42);
        assert_eq!(s.steps, 0);
        assert_eq!(s.params, json!({}));
    }

    #[test]
    fn builders_set_params_and_steps() {
        let s = Seed::new("chladni", 64, 64, 1)
            .with_params(json!({"freq_x": 5}))
            .with_steps(300);
        assert_eq!(s.params["freq_x"], 5);
        assert_eq!(s.steps, 300);
    }

    #[test]
    fn json_contains_expected_keys() {
        let s = Seed::new("chladni", 128, 128, 1);
        let v = serde_json::to_value(&s).unwrap();
        for key in ["engine", "width", "height", "params", "seed", "steps"] {
            assert!(v.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn deserializes_printed_seed() {
        let s = Seed::new("chladni", 256, 256, 99)
            .with_params(json!({"mode": "complex", "particles": 1200}))
            .with_steps(5000);
        let text = serde_json::to_string_pretty(&s).unwrap();
        let restored: Seed = serde_json::from_str(&text).unwrap();
        assert_eq!(s, restored);
    }

    #[test]
    fn validate_accepts_valid_and_rejects_degenerate() {
        assert!(Seed::new("chladni", 512, 512, 42).validate().is_ok());
        assert!(Seed::new("chladni", 0, 512, 42).validate().is_err());
        assert!(Seed::new("chladni", 512, 0, 42).validate().is_err());
        assert!(Seed::new("chladni", usize::MAX, 2, 42).validate().is_err());
    }
}
