#![deny(unsafe_code)]
//! Core types and traits shared by the Chladni simulator crates.
//!
//! Provides the `Engine` trait, the raster `Field`, `Srgb` colors and
//! `Palette` ramps, the `RandomSource` trait with its `Xorshift64` default,
//! the `Seed` run description, and JSON parameter helpers.

pub mod color;
pub mod engine;
pub mod error;
pub mod field;
pub mod palette;
pub mod params;
pub mod prng;
pub mod seed;

pub use color::Srgb;
pub use engine::Engine;
pub use error::EngineError;
pub use field::Field;
pub use palette::Palette;
pub use prng::{RandomSource, Xorshift64};
pub use seed::Seed;
