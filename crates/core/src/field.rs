//! Two-dimensional raster of values in [0, 1].
//!
//! A `Field` stores `width * height` f64 values in row-major layout. It is the
//! render-facing view of a simulation: membrane coordinates in `[0, 1]²` map
//! onto cells, with the membrane edge belonging to the last row/column.
//! Out-of-range coordinates are clamped, never wrapped, since the membrane has
//! walls rather than a toroidal topology.

use crate::error::EngineError;

/// A 2D raster with values in [0, 1].
#[derive(Debug, Clone)]
pub struct Field {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Field {
    /// Creates a zero-filled field of the given dimensions.
    ///
    /// Returns `EngineError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    /// Creates a field from a pre-built row-major buffer.
    ///
    /// Values are clamped to [0, 1]. Returns `EngineError::BufferMismatch`
    /// if `data.len() != width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> Result<Self, EngineError> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(EngineError::BufferMismatch {
                len: data.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            data: data.into_iter().map(|v| v.clamp(0.0, 1.0)).collect(),
        })
    }

    /// Field width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Value at cell `(x, y)`, or `None` outside the raster.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        (x < self.width && y < self.height).then(|| self.data[y * self.width + x])
    }

    /// Maps membrane coordinates to the cell that contains them.
    ///
    /// Coordinates outside `[0, 1]` (and NaN) land on the nearest edge cell.
    pub fn cell_of(&self, u: f64, v: f64) -> (usize, usize) {
        (to_cell(u, self.width), to_cell(v, self.height))
    }

    /// Rebuilds the field as a normalized density of `points`.
    ///
    /// Each point adds one to the cell containing it; the result is divided
    /// by the busiest cell so the densest spot reads 1.0. With no points the
    /// field is all zeros.
    pub fn splat_density<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        self.data.fill(0.0);
        for (u, v) in points {
            let (x, y) = self.cell_of(u, v);
            self.data[y * self.width + x] += 1.0;
        }
        let max = self.data.iter().copied().fold(0.0_f64, f64::max);
        if max > 0.0 {
            self.data.iter_mut().for_each(|c| *c /= max);
        }
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, EngineError> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .ok_or(EngineError::InvalidDimensions)
}

fn to_cell(coord: f64, size: usize) -> usize {
    if coord.is_nan() {
        return 0;
    }
    ((coord.clamp(0.0, 1.0) * size as f64) as usize).min(size - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_zeroed_field() {
        let f = Field::new(8, 4).unwrap();
        assert_eq!(f.width(), 8);
        assert_eq!(f.height(), 4);
        assert_eq!(f.data().len(), 32);
        assert!(f.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            Field::new(0, 4),
            Err(EngineError::InvalidDimensions)
        ));
        assert!(matches!(
            Field::new(4, 0),
            Err(EngineError::InvalidDimensions)
        ));
    }

    #[test]
    fn new_rejects_overflowing_dimensions() {
        assert!(Field::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn from_data_validates_length() {
        let err = Field::from_data(3, 3, vec![0.0; 8]).unwrap_err();
        assert!(matches!(err, EngineError::BufferMismatch { len: 8, .. }));
    }

    #[test]
    fn from_data_clamps_values() {
        let f = Field::from_data(2, 1, vec![-1.0, 3.0]).unwrap();
        assert_eq!(f.data(), &[0.0, 1.0]);
    }

    #[test]
    fn get_respects_bounds() {
        let f = Field::from_data(2, 2, vec![0.0, 0.25, 0.5, 0.75]).unwrap();
        assert_eq!(f.get(1, 1), Some(0.75));
        assert_eq!(f.get(2, 0), None);
        assert_eq!(f.get(0, 2), None);
    }

    #[test]
    fn cell_of_maps_edges_inside_raster() {
        let f = Field::new(10, 5).unwrap();
        assert_eq!(f.cell_of(0.0, 0.0), (0, 0));
        assert_eq!(f.cell_of(1.0, 1.0), (9, 4));
        assert_eq!(f.cell_of(0.55, 0.5), (5, 2));
        assert_eq!(f.cell_of(-3.0, 7.0), (0, 4));
        assert_eq!(f.cell_of(f64::NAN, 0.0), (0, 0));
    }

    #[test]
    fn splat_density_normalizes_to_busiest_cell() {
        let mut f = Field::new(2, 2).unwrap();
        f.splat_density([(0.1, 0.1), (0.2, 0.2), (0.9, 0.9)]);
        assert_eq!(f.get(0, 0), Some(1.0));
        assert_eq!(f.get(1, 1), Some(0.5));
        assert_eq!(f.get(1, 0), Some(0.0));
    }

    #[test]
    fn splat_density_without_points_clears_field() {
        let mut f = Field::new(3, 3).unwrap();
        f.splat_density([(0.5, 0.5)]);
        f.splat_density(std::iter::empty());
        assert!(f.data().iter().all(|&v| v == 0.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn splat_density_stays_in_unit_interval(
                w in 1_usize..32,
                h in 1_usize..32,
                points in proptest::collection::vec((-0.5_f64..1.5, -0.5_f64..1.5), 0..200),
            ) {
                let mut f = Field::new(w, h).unwrap();
                f.splat_density(points.iter().copied());
                for &v in f.data() {
                    prop_assert!((0.0..=1.0).contains(&v), "density out of range: {v}");
                }
                if !points.is_empty() {
                    let max = f.data().iter().copied().fold(0.0_f64, f64::max);
                    prop_assert!((max - 1.0).abs() < 1e-12);
                }
            }
        }
    }
}
