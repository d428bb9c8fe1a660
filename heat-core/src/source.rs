use crate::error::ConfigError;
use crate::grid::Grid;

/// Square of fixed temperature stamped at the grid center before every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatSource {
    half_width: usize,
    temperature: f64,
}

impl HeatSource {
    pub fn new(half_width: usize, temperature: f64) -> HeatSource {
        HeatSource {
            half_width,
            temperature,
        }
    }

    /// Source sized from the row count: half-width `(nx / 10) / 2`.
    pub fn centered(nx: usize, temperature: f64) -> HeatSource {
        HeatSource::new(Self::half_width_for(nx), temperature)
    }

    pub fn half_width_for(nx: usize) -> usize {
        (nx / 10) / 2
    }

    pub fn half_width(&self) -> usize {
        self.half_width
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Rejects a square that would reach past the edges of an `nx` by `ny` grid.
    pub fn check_fits(&self, nx: usize, ny: usize) -> Result<(), ConfigError> {
        if self.half_width > nx / 2 || self.half_width > ny / 2 {
            return Err(ConfigError::HotRegionOutOfBounds {
                half_width: self.half_width,
                nx,
                ny,
            });
        }
        Ok(())
    }

    /// Rows and columns covered, as half-open ranges.
    pub fn region(&self, nx: usize, ny: usize) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let w = self.half_width;
        ((nx / 2 - w)..(nx / 2 + w), (ny / 2 - w)..(ny / 2 + w))
    }

    /// Overwrites the square with the source temperature. The region must fit in `grid`.
    pub fn inject(&self, grid: &mut Grid) {
        let (rows, cols) = self.region(grid.nx(), grid.ny());
        let ny = grid.ny();
        let data = grid.as_mut_slice();
        for i in rows {
            data[i * ny + cols.start..i * ny + cols.end].fill(self.temperature);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_width_uses_integer_division() {
        assert_eq!(HeatSource::half_width_for(9), 0);
        assert_eq!(HeatSource::half_width_for(10), 0);
        assert_eq!(HeatSource::half_width_for(20), 1);
        assert_eq!(HeatSource::half_width_for(39), 1);
        assert_eq!(HeatSource::half_width_for(100), 5);
    }

    #[test]
    fn inject_fills_exactly_the_square() {
        let mut g = Grid::zeros(100, 60);
        let src = HeatSource::centered(100, 100.0);
        src.inject(&mut g);

        let (rows, cols) = src.region(100, 60);
        assert_eq!(rows, 45..55);
        assert_eq!(cols, 25..35);
        for i in 0..100 {
            for j in 0..60 {
                let expected = if rows.contains(&i) && cols.contains(&j) { 100.0 } else { 0.0 };
                assert_eq!(g.get(i, j), expected, "cell ({i}, {j})");
            }
        }
    }

    #[test]
    fn inject_overrides_existing_values() {
        let mut g = Grid::zeros(40, 40);
        g.fill(250.0);
        HeatSource::new(2, 100.0).inject(&mut g);
        assert_eq!(g.get(19, 19), 100.0);
        assert_eq!(g.get(18, 21), 100.0);
        assert_eq!(g.get(22, 20), 250.0);
    }

    #[test]
    fn fit_check_matches_grid_halves() {
        assert!(HeatSource::new(2, 1.0).check_fits(4, 4).is_ok());
        assert!(HeatSource::new(2, 1.0).check_fits(5, 4).is_ok());
        assert_eq!(
            HeatSource::new(2, 1.0).check_fits(4, 3),
            Err(ConfigError::HotRegionOutOfBounds {
                half_width: 2,
                nx: 4,
                ny: 3
            })
        );
    }

    #[test]
    fn zero_half_width_touches_nothing() {
        let mut g = Grid::zeros(10, 10);
        HeatSource::centered(10, 100.0).inject(&mut g);
        assert_eq!(g.max(), 0.0);
    }
}
