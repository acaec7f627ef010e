#![deny(unsafe_code)]
//! Chladni membrane model.
//!
//! Iron filings scattered on a square plate drift toward the nodal lines of a
//! standing wave. The wave is a closed-form amplitude field selected by two
//! integer frequencies and a [`Mode`]; the force on a filing is the negated
//! finite-difference gradient of that field; filings integrate with damped
//! explicit Euler steps and are clamped to the plate.
//!
//! Leaves first:
//! - [`amplitude`]: the pure field and its parameters
//! - [`force`]: central-difference force
//! - [`particles`]: the filing buffer and its integration step
//! - [`controller`]: the [`Chladni`] façade a host drives

pub mod amplitude;
pub mod controller;
pub mod force;
pub mod particles;

pub use amplitude::{evaluate, FieldParameters, Mode};
pub use controller::{Chladni, ChladniConfig};
pub use force::gradient;
pub use particles::{Particle, ParticleSystem};
