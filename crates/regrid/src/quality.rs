//! Quality-mask aggregation across bands.

use ndarray::Array2;

/// Running per-pixel validity grid, ANDed across bands.
///
/// Starts all-true; each regridded band contributes "interpolated value is at
/// least 0". NaN compares false, so cells the interpolation could not cover
/// drop out along with genuinely negative readings. The in-range boundary
/// here is 0, distinct from the -1 fill threshold used for value
/// replacement.
#[derive(Debug, Clone)]
pub struct QualityMask {
    grid: Array2<bool>,
}

impl QualityMask {
    /// Create an all-true mask shaped like the target grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: Array2::from_elem((rows, cols), true),
        }
    }

    /// AND the running grid with one band's in-range test.
    pub fn accumulate(&mut self, plane: &Array2<f32>) {
        for ((r, c), q) in self.grid.indexed_iter_mut() {
            *q = *q && plane[[r, c]] >= 0.0;
        }
    }

    /// Merge the running grid into a mask plane.
    ///
    /// The plane's values are reinterpreted as booleans (any nonzero value,
    /// NaN included, counts as set) and ANDed with the running grid. Returns
    /// a 1.0/0.0 plane ready to store as the output's mask band.
    pub fn merge_into(&self, mask_plane: &Array2<f32>) -> Array2<f32> {
        let mut out = Array2::from_elem(self.grid.dim(), 0.0f32);
        for ((r, c), v) in mask_plane.indexed_iter() {
            if *v != 0.0 && self.grid[[r, c]] {
                out[[r, c]] = 1.0;
            }
        }
        out
    }

    /// The running grid.
    pub fn as_grid(&self) -> &Array2<bool> {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_ands_across_bands() {
        let mut quality = QualityMask::new(1, 3);

        let band_a = Array2::from_shape_vec((1, 3), vec![1.0, -0.5, 2.0]).unwrap();
        let band_b = Array2::from_shape_vec((1, 3), vec![0.0, 3.0, f32::NAN]).unwrap();
        quality.accumulate(&band_a);
        quality.accumulate(&band_b);

        let grid = quality.as_grid();
        assert!(grid[[0, 0]], "0.0 is in range");
        assert!(!grid[[0, 1]], "negative value drops the pixel");
        assert!(!grid[[0, 2]], "NaN drops the pixel");
    }

    #[test]
    fn test_merge_respects_mask_values() {
        let mut quality = QualityMask::new(1, 4);
        let band = Array2::from_shape_vec((1, 4), vec![1.0, 1.0, -1.0, 1.0]).unwrap();
        quality.accumulate(&band);

        let mask_plane = Array2::from_shape_vec((1, 4), vec![1.0, 0.0, 1.0, f32::NAN]).unwrap();
        let merged = quality.merge_into(&mask_plane);

        assert_eq!(merged[[0, 0]], 1.0, "set mask and good quality");
        assert_eq!(merged[[0, 1]], 0.0, "unset mask wins");
        assert_eq!(merged[[0, 2]], 0.0, "bad quality wins");
        // NaN mask values count as set but only survive with good quality.
        assert_eq!(merged[[0, 3]], 1.0);
    }
}
