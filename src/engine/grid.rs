use super::direction::Direction;
use rand::Rng;

/// A cell of the board.  `x` grows to the right, `z` grows downwards/towards
/// the viewer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) z: i32,
}

impl Cell {
    /// The center of the board, where every game starts
    pub(crate) const ORIGIN: Cell = Cell { x: 0, z: 0 };

    pub(crate) const fn new(x: i32, z: i32) -> Cell {
        Cell { x, z }
    }

    /// Return the neighboring cell in `direction`.  The result may lie
    /// outside of any board.
    pub(crate) fn step(self, direction: Direction) -> Cell {
        let (dx, dz) = direction.delta();
        Cell {
            x: self.x.saturating_add(dx),
            z: self.z.saturating_add(dz),
        }
    }

    /// Place the cell in 3D space at height `y`
    pub(crate) fn embed(self, y: i32) -> Point3 {
        Point3 {
            x: self.x,
            y,
            z: self.z,
        }
    }
}

impl From<Point3> for Cell {
    fn from(p: Point3) -> Cell {
        Cell::new(p.x, p.z)
    }
}

/// A grid cell as handed to renderers: the board lies in the `x`/`z` plane at
/// a fixed `y`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Point3 {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) z: i32,
}

/// A square board of even side length `N`, centered on the origin.  Valid
/// coordinates on both axes lie in `-N/2..N/2`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    side: u16,
}

impl Grid {
    /// Returns `None` unless `side` is even and nonzero
    pub(crate) fn new(side: u16) -> Option<Grid> {
        (side > 0 && side % 2 == 0).then_some(Grid { side })
    }

    pub(crate) fn side(self) -> u16 {
        self.side
    }

    fn half(self) -> i32 {
        i32::from(self.side / 2)
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        let range = -self.half()..self.half();
        range.contains(&cell.x) && range.contains(&cell.z)
    }

    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.side) * usize::from(self.side)
    }

    /// Pick a cell uniformly at random
    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Cell {
        let half = self.half();
        let x = rng.random_range(-half..half);
        let z = rng.random_range(-half..half);
        Cell { x, z }
    }

    /// Iterate over every cell, row by row
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        let half = self.half();
        (-half..half).flat_map(move |z| (-half..half).map(move |x| Cell { x, z }))
    }

    /// Return the zero-based column & row of `cell` counting from the
    /// top-left corner of the board, or `None` if it's off the board.
    pub(crate) fn offset(self, cell: Cell) -> Option<(u16, u16)> {
        if !self.contains(cell) {
            return None;
        }
        let col = u16::try_from(cell.x + self.half()).ok()?;
        let row = u16::try_from(cell.z + self.half()).ok()?;
        Some((col, row))
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid {
            side: crate::consts::GRID_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    #[rstest]
    #[case(0, None)]
    #[case(7, None)]
    #[case(2, Some(2))]
    #[case(20, Some(20))]
    fn test_new(#[case] side: u16, #[case] r: Option<u16>) {
        assert_eq!(Grid::new(side).map(Grid::side), r);
    }

    #[rstest]
    #[case(Cell::ORIGIN, true)]
    #[case(Cell::new(-10, -10), true)]
    #[case(Cell::new(9, 9), true)]
    #[case(Cell::new(10, 0), false)]
    #[case(Cell::new(0, 10), false)]
    #[case(Cell::new(-11, 0), false)]
    #[case(Cell::new(0, -11), false)]
    fn test_contains(#[case] cell: Cell, #[case] inside: bool) {
        assert_eq!(Grid::default().contains(cell), inside);
    }

    #[rstest]
    #[case(Cell::new(-10, -10), Some((0, 0)))]
    #[case(Cell::ORIGIN, Some((10, 10)))]
    #[case(Cell::new(9, -10), Some((19, 0)))]
    #[case(Cell::new(10, 3), None)]
    fn test_offset(#[case] cell: Cell, #[case] r: Option<(u16, u16)>) {
        assert_eq!(Grid::default().offset(cell), r);
    }

    #[test]
    fn cells_cover_board() {
        let grid = Grid::new(4).expect("4 is a valid side");
        let cells = grid.cells().collect::<Vec<_>>();
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells.first(), Some(&Cell::new(-2, -2)));
        assert_eq!(cells.last(), Some(&Cell::new(1, 1)));
        assert!(cells.iter().all(|&c| grid.contains(c)));
    }

    #[test]
    fn random_cells_stay_on_board() {
        let grid = Grid::new(6).expect("6 is a valid side");
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        for _ in 0..500 {
            let cell = grid.random_cell(&mut rng);
            assert!(grid.contains(cell), "{cell:?} is off the board");
        }
    }

    #[test]
    fn embed_roundtrip() {
        let p = Cell::new(3, -4).embed(0);
        assert_eq!(p, Point3 { x: 3, y: 0, z: -4 });
        assert_eq!(Cell::from(p), Cell::new(3, -4));
    }
}
