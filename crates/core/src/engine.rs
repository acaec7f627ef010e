//! The `Engine` trait through which hosts drive a simulation.
//!
//! The trait is object-safe so a host can hold `Box<dyn Engine>` and switch
//! simulations at runtime without knowing their concrete type.

use crate::error::EngineError;
use crate::field::Field;
use serde_json::Value;

/// A tick-driven simulation that a host advances and renders.
///
/// The host owns the clock: it calls [`Engine::step`] at whatever cadence it
/// chooses and reads [`Engine::field`] between calls. Engines never sleep or
/// schedule work of their own.
pub trait Engine {
    /// Advance the simulation by exactly one tick.
    fn step(&mut self) -> Result<(), EngineError>;

    /// Raster view of the current state, values in [0, 1].
    fn field(&self) -> &Field;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}
