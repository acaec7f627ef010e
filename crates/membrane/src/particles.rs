//! Filings on the membrane and their damped integration.
//!
//! Each [`ParticleSystem::advance`] is one explicit Euler step with linear
//! velocity damping, pushing every filing along the negated amplitude
//! gradient. Positions are clamped to `[0, 1]` per axis after the step;
//! velocity is left untouched, so a filing pinned against a wall keeps its
//! momentum into it.

use chladni_core::{RandomSource, Xorshift64};
use glam::DVec2;
use tracing::debug;

use crate::amplitude::{FieldParameters, Mode, FREQ_MAX, FREQ_MIN};
use crate::force::gradient;

/// Scale from force to velocity change per tick.
pub const FORCE_SCALE: f64 = 0.002;
/// Fraction of velocity kept each tick.
pub const DAMPING: f64 = 0.95;
/// Fewest filings a system holds.
pub const PARTICLES_MIN: usize = 100;
/// Most filings a system holds.
pub const PARTICLES_MAX: usize = 2000;
/// Filing count used when none is given.
pub const DEFAULT_PARTICLES: usize = 800;

/// One filing: membrane position in `[0, 1]²` and velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
}

impl Particle {
    /// A filing at rest at `position`.
    pub fn at_rest(position: DVec2) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
        }
    }

    /// Applies one integration step under `params`.
    pub fn integrate(&mut self, params: &FieldParameters) {
        let force = gradient(self.position.x, self.position.y, params);
        self.velocity += force * FORCE_SCALE;
        self.velocity *= DAMPING;
        self.position += self.velocity;
        self.position = self.position.clamp(DVec2::ZERO, DVec2::ONE);
    }
}

/// The filing buffer together with the field that drives it.
///
/// Randomness comes only from the injected source `R`, so two systems built
/// from equal sources and fed the same calls stay bit-identical.
#[derive(Debug, Clone)]
pub struct ParticleSystem<R = Xorshift64> {
    particles: Vec<Particle>,
    params: FieldParameters,
    target_count: usize,
    rng: R,
}

impl<R: RandomSource> ParticleSystem<R> {
    /// Creates a system with `count` filings scattered uniformly at rest.
    ///
    /// Frequencies and count are clamped to their accepted ranges.
    pub fn new(params: FieldParameters, count: usize, rng: R) -> Self {
        let mut system = Self {
            particles: Vec::new(),
            params: FieldParameters {
                freq_x: clamp_frequency(params.freq_x),
                freq_y: clamp_frequency(params.freq_y),
                mode: params.mode,
            },
            target_count: clamp_count(count),
            rng,
        };
        system.scatter();
        system
    }

    /// Replaces both frequencies, clamped to `[FREQ_MIN, FREQ_MAX]`.
    /// Filings keep their positions and velocities.
    pub fn set_frequencies(&mut self, freq_x: i32, freq_y: i32) {
        self.params.freq_x = clamp_frequency(freq_x);
        self.params.freq_y = clamp_frequency(freq_y);
        debug!(
            freq_x = self.params.freq_x,
            freq_y = self.params.freq_y,
            "frequencies set"
        );
    }

    /// Replaces the mode. Filings keep their positions and velocities.
    pub fn set_mode(&mut self, mode: Mode) {
        self.params.mode = mode;
        debug!(%mode, "mode set");
    }

    /// Discards every filing and scatters `count` new ones at rest.
    ///
    /// `count` is clamped to `[PARTICLES_MIN, PARTICLES_MAX]`.
    pub fn set_particle_count(&mut self, count: usize) {
        self.target_count = clamp_count(count);
        self.scatter();
    }

    /// Re-scatters the current number of filings; parameters are unchanged.
    pub fn reset(&mut self) {
        self.scatter();
    }

    /// Runs one integration step over every filing.
    pub fn advance(&mut self) {
        let params = self.params;
        for particle in &mut self.particles {
            particle.integrate(&params);
        }
    }

    /// Filings in stable order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Filing positions in the same order as [`Self::particles`].
    pub fn positions(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        self.particles.iter().map(|p| p.position)
    }

    /// Current field parameters.
    pub fn params(&self) -> FieldParameters {
        self.params
    }

    /// Number of filings the buffer is rebuilt to.
    pub fn particle_count(&self) -> usize {
        self.target_count
    }

    fn scatter(&mut self) {
        let rng = &mut self.rng;
        self.particles = (0..self.target_count)
            .map(|_| {
                let x = rng.next_unit();
                let y = rng.next_unit();
                Particle::at_rest(DVec2::new(x, y))
            })
            .collect();
        debug!(count = self.target_count, "scattered filings");
    }
}

fn clamp_frequency(freq: i32) -> i32 {
    let clamped = freq.clamp(FREQ_MIN, FREQ_MAX);
    if clamped != freq {
        debug!(requested = freq, clamped, "frequency clamped");
    }
    clamped
}

fn clamp_count(count: usize) -> usize {
    let clamped = count.clamp(PARTICLES_MIN, PARTICLES_MAX);
    if clamped != count {
        debug!(requested = count, clamped, "particle count clamped");
    }
    clamped
}
