//! Explicit 5-point update of the 2D diffusion equation.
//!
//! The interior pass reads only `current` and writes only `next`, so rows of
//! `next` are handed out to rayon workers as disjoint `&mut` chunks with no
//! locking. Boundary reflection reads freshly written interior values and
//! runs after the parallel pass has joined.

use crate::grid::Grid;
use rayon::prelude::*;

/// Physical constants of one update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diffusion {
    pub alpha: f64,
    pub dx: f64,
    pub dy: f64,
    pub dt: f64,
}

impl Diffusion {
    #[inline]
    fn cell(&self, c: f64, up: f64, down: f64, left: f64, right: f64) -> f64 {
        let dx2 = self.dx * self.dx;
        let dy2 = self.dy * self.dy;
        c + self.alpha * self.dt * ((down - 2.0 * c + up) / dx2 + (right - 2.0 * c + left) / dy2)
    }

    fn update_row(&self, src: &[f64], ny: usize, i: usize, dst_row: &mut [f64]) {
        let row = i * ny;
        for j in 1..ny - 1 {
            let idx = row + j;
            dst_row[j] = self.cell(
                src[idx],
                src[idx - ny],
                src[idx + ny],
                src[idx - 1],
                src[idx + 1],
            );
        }
    }
}

/// Interior pass, rows distributed over the rayon pool the caller runs in.
pub fn apply_interior(diff: &Diffusion, current: &Grid, next: &mut Grid) {
    debug_assert_eq!((current.nx(), current.ny()), (next.nx(), next.ny()));
    let (nx, ny) = (current.nx(), current.ny());
    let src = current.as_slice();

    next.as_mut_slice()[ny..(nx - 1) * ny]
        .par_chunks_mut(ny)
        .enumerate()
        .for_each(|(r, dst_row)| diff.update_row(src, ny, r + 1, dst_row));
}

/// Single-threaded interior pass. Produces bit-identical results to [`apply_interior`].
pub fn apply_interior_serial(diff: &Diffusion, current: &Grid, next: &mut Grid) {
    debug_assert_eq!((current.nx(), current.ny()), (next.nx(), next.ny()));
    let (nx, ny) = (current.nx(), current.ny());
    let src = current.as_slice();

    for (r, dst_row) in next.as_mut_slice()[ny..(nx - 1) * ny]
        .chunks_mut(ny)
        .enumerate()
    {
        diff.update_row(src, ny, r + 1, dst_row);
    }
}

/// Copies row 1 onto row 0 and row `nx-2` onto row `nx-1`.
pub fn reflect_rows(grid: &mut Grid) {
    let (nx, ny) = (grid.nx(), grid.ny());
    let data = grid.as_mut_slice();
    data.copy_within(ny..2 * ny, 0);
    data.copy_within((nx - 2) * ny..(nx - 1) * ny, (nx - 1) * ny);
}

/// Copies column 1 onto column 0 and column `ny-2` onto column `ny-1`.
pub fn reflect_columns(grid: &mut Grid) {
    let ny = grid.ny();
    for row in grid.as_mut_slice().chunks_mut(ny) {
        row[0] = row[1];
        row[ny - 1] = row[ny - 2];
    }
}

/// Zero-gradient edges. Corners end up equal to their diagonal interior
/// neighbour whichever pass runs first.
pub fn reflect_boundaries(grid: &mut Grid) {
    reflect_rows(grid);
    reflect_columns(grid);
}

/// Full update: parallel interior pass followed by boundary reflection.
pub fn step(diff: &Diffusion, current: &Grid, next: &mut Grid) {
    apply_interior(diff, current, next);
    reflect_boundaries(next);
}
