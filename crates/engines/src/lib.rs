#![deny(unsafe_code)]
//! Engine registry: maps engine names to implementations and renders frames.
//!
//! This crate sits between `chladni-core` (which defines the `Engine` trait)
//! and the simulation crates. Hosts (the CLI, or any embedder) construct
//! engines here by name or from a [`Seed`], so dispatch lives in one place.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use chladni_core::error::EngineError;
use chladni_core::field::Field;
use chladni_core::{Engine, Seed};
use chladni_membrane::Chladni;
use serde_json::Value;

use crate::pixel::{draw_figure, FigureStyle};

/// All available engine names.
const ENGINE_NAMES: &[&str] = &["chladni"];

/// Enumeration of all available engines.
///
/// Wraps each engine implementation and delegates `Engine` trait methods.
/// Use [`EngineKind::from_name`] or [`EngineKind::from_seed`] for
/// string-based construction.
#[derive(Debug)]
pub enum EngineKind {
    /// Filings on a vibrating square membrane.
    Chladni(Chladni),
}

impl EngineKind {
    /// Constructs an engine by name.
    ///
    /// Returns `EngineError::UnknownEngine` if the name is not recognized.
    pub fn from_name(
        name: &str,
        width: usize,
        height: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, EngineError> {
        match name {
            "chladni" => Ok(EngineKind::Chladni(Chladni::from_json(
                width, height, seed, params,
            )?)),
            _ => Err(EngineError::UnknownEngine(name.to_string())),
        }
    }

    /// Constructs the engine a [`Seed`] describes and runs its `steps` ticks.
    pub fn from_seed(seed: &Seed) -> Result<Self, EngineError> {
        seed.validate()?;
        let mut engine =
            Self::from_name(&seed.engine, seed.width, seed.height, seed.seed, &seed.params)?;
        (0..seed.steps).try_for_each(|_| engine.step())?;
        tracing::debug!(engine = %seed.engine, steps = seed.steps, "engine built from seed");
        Ok(engine)
    }

    /// Returns a slice of all recognized engine names.
    pub fn list_engines() -> &'static [&'static str] {
        ENGINE_NAMES
    }

    /// One-line status for display under the figure.
    pub fn caption(&self) -> String {
        match self {
            EngineKind::Chladni(e) => e.caption(),
        }
    }

    /// Particle positions in membrane coordinates, in stable order.
    pub fn positions(&self) -> Vec<(f64, f64)> {
        match self {
            EngineKind::Chladni(e) => e.positions().map(|p| (p.x, p.y)).collect(),
        }
    }

    /// Draws the current state as the gridded membrane figure.
    pub fn draw_figure(&self, style: &FigureStyle) -> Result<Vec<u8>, EngineError> {
        let field = self.field();
        draw_figure(self.positions(), field.width(), field.height(), style)
    }
}

impl Engine for EngineKind {
    fn step(&mut self) -> Result<(), EngineError> {
        match self {
            EngineKind::Chladni(e) => e.step(),
        }
    }

    fn field(&self) -> &Field {
        match self {
            EngineKind::Chladni(e) => e.field(),
        }
    }

    fn params(&self) -> Value {
        match self {
            EngineKind::Chladni(e) => e.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            EngineKind::Chladni(e) => e.param_schema(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_name_chladni_succeeds() {
        let engine = EngineKind::from_name("chladni", 32, 32, 42, &json!({}));
        assert!(engine.is_ok());
    }

    #[test]
    fn from_name_unknown_returns_error() {
        let result = EngineKind::from_name("wave-tank", 32, 32, 42, &json!({}));
        assert!(matches!(result, Err(EngineError::UnknownEngine(_))));
    }

    #[test]
    fn list_engines_includes_chladni() {
        assert!(EngineKind::list_engines().contains(&"chladni"));
    }

    #[test]
    fn trait_delegation_step_and_field() {
        let mut engine = EngineKind::from_name("chladni", 16, 12, 42, &json!({})).unwrap();
        assert_eq!(engine.field().width(), 16);
        assert_eq!(engine.field().height(), 12);
        engine.step().unwrap();
    }

    #[test]
    fn trait_delegation_params_and_schema() {
        let engine =
            EngineKind::from_name("chladni", 16, 16, 42, &json!({"freq_x": 7})).unwrap();
        assert_eq!(engine.params()["freq_x"], 7);
        assert!(engine.param_schema().get("particles").is_some());
    }

    #[test]
    fn caption_and_positions_delegate() {
        let engine = EngineKind::from_name(
            "chladni",
            16,
            16,
            42,
            &json!({"mode": "radial", "particles": 150}),
        )
        .unwrap();
        assert_eq!(engine.caption(), "Mode: Radial | Freq: 3×2");
        assert_eq!(engine.positions().len(), 150);
    }

    #[test]
    fn from_seed_runs_requested_steps() {
        let seed = Seed::new("chladni", 32, 32, 5)
            .with_params(json!({"freq_x": 4, "freq_y": 5}))
            .with_steps(40);
        let from_seed = EngineKind::from_seed(&seed).unwrap();

        let mut by_hand = EngineKind::from_name("chladni", 32, 32, 5, &seed.params).unwrap();
        for _ in 0..40 {
            by_hand.step().unwrap();
        }
        assert_eq!(from_seed.positions(), by_hand.positions());
    }

    #[test]
    fn from_seed_rejects_invalid_dimensions() {
        let seed = Seed::new("chladni", 0, 32, 5);
        assert!(matches!(
            EngineKind::from_seed(&seed),
            Err(EngineError::InvalidDimensions)
        ));
    }

    #[test]
    fn determinism_same_seed() {
        let mut a = EngineKind::from_name("chladni", 32, 32, 99, &json!({})).unwrap();
        let mut b = EngineKind::from_name("chladni", 32, 32, 99, &json!({})).unwrap();
        for _ in 0..10 {
            a.step().unwrap();
            b.step().unwrap();
        }
        assert!(a
            .field()
            .data()
            .iter()
            .zip(b.field().data().iter())
            .all(|(va, vb)| va.to_bits() == vb.to_bits()));
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn draw_figure_matches_field_size() {
        let engine = EngineKind::from_name("chladni", 40, 30, 1, &json!({})).unwrap();
        let buf = engine.draw_figure(&FigureStyle::default()).unwrap();
        assert_eq!(buf.len(), 40 * 30 * 4);
    }

    #[test]
    fn object_safety() {
        let engine = EngineKind::from_name("chladni", 16, 16, 42, &json!({})).unwrap();
        let boxed: Box<dyn Engine> = Box::new(engine);
        assert_eq!(boxed.field().width(), 16);
    }
}
