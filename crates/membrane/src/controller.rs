//! Host-facing façade over the particle system.
//!
//! [`Chladni`] is what a presentation layer talks to: synchronous setters
//! replace the widget callbacks, [`Chladni::advance`] is called once per
//! host tick, and read accessors expose positions plus display metadata.
//! It also implements [`Engine`], exposing a density raster of the filings
//! that is rebuilt on first read after the filings move.

use std::cell::OnceCell;

use chladni_core::params::{param_i64, param_usize};
use chladni_core::{Engine, EngineError, Field, RandomSource, Xorshift64};
use glam::DVec2;
use serde_json::{json, Value};
use tracing::debug;

use crate::amplitude::{
    FieldParameters, Mode, DEFAULT_FREQ_X, DEFAULT_FREQ_Y, FREQ_MAX, FREQ_MIN,
};
use crate::particles::{ParticleSystem, DEFAULT_PARTICLES, PARTICLES_MAX, PARTICLES_MIN};

/// Starting configuration for a [`Chladni`] controller.
///
/// Use [`Default`] for the classic figure: frequencies 3 × 2, standard mode,
/// 800 filings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChladniConfig {
    pub field: FieldParameters,
    pub particles: usize,
}

impl Default for ChladniConfig {
    fn default() -> Self {
        Self {
            field: FieldParameters::default(),
            particles: DEFAULT_PARTICLES,
        }
    }
}

impl ChladniConfig {
    /// Extracts a configuration from a JSON object, falling back to defaults.
    ///
    /// `mode` may be a selector index or a name. Values that match no mode
    /// select [`Mode::Unknown`] rather than failing.
    pub fn from_json(params: &Value) -> Self {
        let freq = |name, default: i32| {
            let raw = param_i64(params, name, i64::from(default));
            i32::try_from(raw).unwrap_or(if raw < 0 { i32::MIN } else { i32::MAX })
        };
        Self {
            field: FieldParameters {
                freq_x: freq("freq_x", DEFAULT_FREQ_X),
                freq_y: freq("freq_y", DEFAULT_FREQ_Y),
                mode: mode_from_json(params.get("mode")),
            },
            particles: param_usize(params, "particles", DEFAULT_PARTICLES),
        }
    }
}

fn mode_from_json(value: Option<&Value>) -> Mode {
    match value {
        None | Some(Value::Null) => Mode::Standard,
        Some(Value::Number(n)) => n.as_i64().map_or(Mode::Unknown, Mode::from_index),
        Some(Value::String(s)) => Mode::from_name(s).unwrap_or_else(|e| {
            debug!(error = %e, "unrecognized mode in params");
            Mode::Unknown
        }),
        Some(_) => Mode::Unknown,
    }
}

/// Chladni figure controller.
///
/// Filings start scattered uniformly and drift toward the nodal lines of the
/// selected amplitude field as the host calls [`Chladni::advance`]. Nothing
/// here keeps time: each call is one fixed step.
#[derive(Debug, Clone)]
pub struct Chladni<R = Xorshift64> {
    system: ParticleSystem<R>,
    /// Zeroed raster of the host's size; template for `density`.
    blank: Field,
    /// Density of the current filings, filled lazily by [`Engine::field`].
    density: OnceCell<Field>,
}

impl Chladni<Xorshift64> {
    /// Creates a controller whose scatter is drawn from `Xorshift64::new(seed)`.
    ///
    /// `width` × `height` is the size of the density raster returned by
    /// [`Engine::field`]. Returns `EngineError::InvalidDimensions` if either is zero.
    pub fn new(
        width: usize,
        height: usize,
        seed: u64,
        config: ChladniConfig,
    ) -> Result<Self, EngineError> {
        Self::with_source(width, height, config, Xorshift64::new(seed))
    }

    /// Creates a controller from a JSON params object.
    pub fn from_json(
        width: usize,
        height: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, EngineError> {
        Self::new(width, height, seed, ChladniConfig::from_json(params))
    }
}

impl<R: RandomSource> Chladni<R> {
    /// Creates a controller drawing its scatter from `rng`.
    pub fn with_source(
        width: usize,
        height: usize,
        config: ChladniConfig,
        rng: R,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            system: ParticleSystem::new(config.field, config.particles, rng),
            blank: Field::new(width, height)?,
            density: OnceCell::new(),
        })
    }

    /// Sets both frequencies, clamped to `[1, 10]`.
    pub fn set_frequencies(&mut self, freq_x: i32, freq_y: i32) {
        self.system.set_frequencies(freq_x, freq_y);
    }

    /// Sets the vibration mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.system.set_mode(mode);
    }

    /// Sets the vibration mode from a selector index; unknown indices select
    /// [`Mode::Unknown`].
    pub fn set_mode_index(&mut self, index: i64) {
        self.set_mode(Mode::from_index(index));
    }

    /// Replaces all filings with `count` fresh ones, clamped to `[100, 2000]`.
    pub fn set_particle_count(&mut self, count: usize) {
        self.system.set_particle_count(count);
        self.density.take();
    }

    /// Re-scatters all filings, keeping frequencies, mode and count.
    pub fn reset(&mut self) {
        self.system.reset();
        self.density.take();
    }

    /// Advances every filing by one tick.
    pub fn advance(&mut self) {
        self.system.advance();
        self.density.take();
    }

    /// Filing positions in `[0, 1]²`, in stable order.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        self.system.positions()
    }

    /// The underlying particle system.
    pub fn system(&self) -> &ParticleSystem<R> {
        &self.system
    }

    pub fn freq_x(&self) -> i32 {
        self.system.params().freq_x
    }

    pub fn freq_y(&self) -> i32 {
        self.system.params().freq_y
    }

    pub fn mode(&self) -> Mode {
        self.system.params().mode
    }

    /// Display name of the current mode.
    pub fn mode_name(&self) -> &'static str {
        self.mode().name()
    }

    pub fn particle_count(&self) -> usize {
        self.system.particle_count()
    }

    /// One-line status, e.g. `Mode: Standard | Freq: 3×2`.
    pub fn caption(&self) -> String {
        format!(
            "Mode: {} | Freq: {}×{}",
            self.mode_name(),
            self.freq_x(),
            self.freq_y()
        )
    }

}

impl<R: RandomSource> Engine for Chladni<R> {
    fn step(&mut self) -> Result<(), EngineError> {
        self.advance();
        Ok(())
    }

    fn field(&self) -> &Field {
        self.density.get_or_init(|| {
            let mut density = self.blank.clone();
            density.splat_density(self.system.positions().map(|p| (p.x, p.y)));
            density
        })
    }

    fn params(&self) -> Value {
        json!({
            "freq_x": self.freq_x(),
            "freq_y": self.freq_y(),
            "mode": self.mode_name().to_ascii_lowercase(),
            "particles": self.particle_count(),
        })
    }

    fn param_schema(&self) -> Value {
        let modes: Vec<String> = Mode::ALL
            .iter()
            .map(|m| m.name().to_ascii_lowercase())
            .collect();
        json!({
            "freq_x": {
                "type": "integer",
                "default": DEFAULT_FREQ_X,
                "min": FREQ_MIN,
                "max": FREQ_MAX,
                "description": "Standing-wave frequency along x"
            },
            "freq_y": {
                "type": "integer",
                "default": DEFAULT_FREQ_Y,
                "min": FREQ_MIN,
                "max": FREQ_MAX,
                "description": "Standing-wave frequency along y"
            },
            "mode": {
                "type": "string",
                "default": "standard",
                "enum": modes,
                "description": "Amplitude field shape; a selector index 0-3 is also accepted"
            },
            "particles": {
                "type": "integer",
                "default": DEFAULT_PARTICLES,
                "min": PARTICLES_MIN,
                "max": PARTICLES_MAX,
                "description": "Number of filings; changing it re-scatters them"
            }
        })
    }
}
