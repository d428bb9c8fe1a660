/// Temperature field of `nx` rows by `ny` columns, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    nx: usize,
    ny: usize,
    data: Vec<f64>,
}

impl Grid {
    pub fn zeros(nx: usize, ny: usize) -> Grid {
        Grid {
            nx,
            ny,
            data: vec![0.0; nx * ny],
        }
    }

    /// Wraps an existing row-major buffer. Returns `None` on a size mismatch.
    pub fn from_vec(nx: usize, ny: usize, data: Vec<f64>) -> Option<Grid> {
        if data.len() != nx * ny {
            return None;
        }
        Some(Grid { nx, ny, data })
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.nx, "row {i} out of range 0..{}", self.nx);
        debug_assert!(j < self.ny, "column {j} out of range 0..{}", self.ny);
        i * self.ny + j
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.index(i, j)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.index(i, j);
        self.data[idx] = value;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        let start = self.index(i, 0);
        &self.data[start..start + self.ny]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    // ---- Statistics ----

    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// The two time-level buffers of a run.
///
/// `current` names the slot holding the latest field; the other slot is the
/// write target of the next step. Swapping flips the tag, the data never moves.
#[derive(Debug, Clone)]
pub struct GridPair {
    slots: [Grid; 2],
    current: usize,
}

impl GridPair {
    pub fn zeros(nx: usize, ny: usize) -> GridPair {
        GridPair {
            slots: [Grid::zeros(nx, ny), Grid::zeros(nx, ny)],
            current: 0,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.slots[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Grid {
        &mut self.slots[self.current]
    }

    /// Borrows the current field for reading and the other slot for writing.
    pub fn split(&mut self) -> (&Grid, &mut Grid) {
        let [a, b] = &mut self.slots;
        let (read, write) = if self.current == 0 { (a, b) } else { (b, a) };
        (&*read, write)
    }

    pub fn swap(&mut self) {
        self.current ^= 1;
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.fill(0.0);
        }
        self.current = 0;
    }

    pub fn into_current(self) -> Grid {
        let [a, b] = self.slots;
        if self.current == 0 { a } else { b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        let g = Grid::zeros(4, 7);
        assert_eq!(g.index(0, 0), 0);
        assert_eq!(g.index(0, 6), 6);
        assert_eq!(g.index(1, 0), 7);
        assert_eq!(g.index(3, 6), 27);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "column 7 out of range")]
    fn index_checks_bounds_in_debug() {
        let g = Grid::zeros(4, 7);
        g.index(0, 7);
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(Grid::from_vec(2, 3, vec![0.0; 5]).is_none());
        let g = Grid::from_vec(2, 3, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(g.row(1), &[3.0, 4.0, 5.0]);
        assert_eq!(g.get(0, 2), 2.0);
    }

    #[test]
    fn swap_exchanges_roles_without_copying() {
        let mut pair = GridPair::zeros(3, 3);
        {
            let (_, next) = pair.split();
            next.set(1, 1, 5.0);
        }
        assert_eq!(pair.current().get(1, 1), 0.0);

        let before = pair.current().as_slice().as_ptr();
        pair.swap();
        assert_eq!(pair.current().get(1, 1), 5.0);
        assert_ne!(pair.current().as_slice().as_ptr(), before);

        pair.swap();
        assert_eq!(pair.current().as_slice().as_ptr(), before);
    }

    #[test]
    fn clear_resets_both_slots() {
        let mut pair = GridPair::zeros(3, 3);
        pair.current_mut().fill(2.0);
        pair.swap();
        pair.current_mut().fill(3.0);
        pair.clear();
        assert_eq!(pair.current().max(), 0.0);
        pair.swap();
        assert_eq!(pair.current().total(), 0.0);
    }
}
