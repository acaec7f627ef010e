//! Closed-form standing-wave amplitude over the unit membrane.
//!
//! The amplitude is a pure function of position, two integer frequencies and
//! a [`Mode`]. It is defined everywhere, not only on `[0, 1]²`, because the
//! force estimator samples a small step past the membrane edge.

use std::f64::consts::PI;
use std::fmt;

use chladni_core::EngineError;

/// Lowest frequency a controller accepts.
pub const FREQ_MIN: i32 = 1;
/// Highest frequency a controller accepts.
pub const FREQ_MAX: i32 = 10;
/// Default horizontal frequency.
pub const DEFAULT_FREQ_X: i32 = 3;
/// Default vertical frequency.
pub const DEFAULT_FREQ_Y: i32 = 2;

/// Shape of the amplitude field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Product of sines along each axis.
    #[default]
    Standard,
    /// Rings in radius times lobes in angle around the membrane center.
    Circular,
    /// Product of two radial sines.
    Radial,
    /// Standard plus a half-strength shifted-frequency overtone.
    Complex,
    /// Any unrecognized selector. Evaluates to a flat zero field.
    Unknown,
}

impl Mode {
    /// The four selectable modes, in index order.
    pub const ALL: [Mode; 4] = [Mode::Standard, Mode::Circular, Mode::Radial, Mode::Complex];

    /// Maps a selector index (`0..=3`) to a mode; anything else is `Unknown`.
    pub fn from_index(index: i64) -> Mode {
        match index {
            0 => Mode::Standard,
            1 => Mode::Circular,
            2 => Mode::Radial,
            3 => Mode::Complex,
            _ => Mode::Unknown,
        }
    }

    /// Selector index, or `None` for `Unknown`.
    pub fn index(self) -> Option<u8> {
        match self {
            Mode::Standard => Some(0),
            Mode::Circular => Some(1),
            Mode::Radial => Some(2),
            Mode::Complex => Some(3),
            Mode::Unknown => None,
        }
    }

    /// Parses a mode name (case insensitive) or a selector index.
    ///
    /// Returns `EngineError::UnknownMode` for anything that is neither.
    pub fn from_name(name: &str) -> Result<Mode, EngineError> {
        let trimmed = name.trim();
        if let Ok(index) = trimmed.parse::<i64>() {
            return Ok(Mode::from_index(index));
        }
        Mode::ALL
            .into_iter()
            .chain([Mode::Unknown])
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::UnknownMode(name.to_string()))
    }

    /// Display name shown alongside the figure.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Standard => "Standard",
            Mode::Circular => "Circular",
            Mode::Radial => "Radial",
            Mode::Complex => "Complex",
            Mode::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Frequencies and mode that together select one amplitude field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldParameters {
    pub freq_x: i32,
    pub freq_y: i32,
    pub mode: Mode,
}

impl Default for FieldParameters {
    fn default() -> Self {
        Self {
            freq_x: DEFAULT_FREQ_X,
            freq_y: DEFAULT_FREQ_Y,
            mode: Mode::Standard,
        }
    }
}

impl FieldParameters {
    /// Amplitude of this field at `(x, y)`.
    pub fn amplitude(&self, x: f64, y: f64) -> f64 {
        evaluate(x, y, self.freq_x, self.freq_y, self.mode)
    }
}

/// Evaluates the amplitude field at `(x, y)`.
///
/// Frequencies are used as given; range limits belong to the caller.
pub fn evaluate(x: f64, y: f64, freq_x: i32, freq_y: i32, mode: Mode) -> f64 {
    let fx = f64::from(freq_x);
    let fy = f64::from(freq_y);
    match mode {
        Mode::Standard => standard(x, y, fx, fy),
        Mode::Circular => {
            let (dx, dy) = (x - 0.5, y - 0.5);
            // atan2(0, 0) is 0, so the center is finite.
            let theta = dy.atan2(dx);
            (fx * PI * radius(x, y)).sin() * (fy * theta).cos()
        }
        Mode::Radial => {
            let r = radius(x, y);
            (fx * PI * r).sin() * (fy * PI * r).sin()
        }
        Mode::Complex => standard(x, y, fx, fy) + complex_overtone(x, y, fx, fy),
        Mode::Unknown => 0.0,
    }
}

fn standard(x: f64, y: f64, fx: f64, fy: f64) -> f64 {
    (fx * PI * x).sin() * (fy * PI * y).sin()
}

/// Correction term of the complex mode. Identically zero when `fy == 1`.
fn complex_overtone(x: f64, y: f64, fx: f64, fy: f64) -> f64 {
    0.5 * ((fx + 1.0) * PI * x).sin() * ((fy - 1.0) * PI * y).sin()
}

/// Twice the distance from the membrane center, so the inscribed circle is `r = 1`.
fn radius(x: f64, y: f64) -> f64 {
    2.0 * ((x - 0.5).powi(2) + (y - 0.5).powi(2)).sqrt()
}
