use super::grid::{Cell, Grid};
use super::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};

/// Choose a cell for the next piece of food, uniformly at random among the
/// cells not occupied by `snake`.
///
/// Random cells are drawn until one is free.  After
/// [`FOOD_SAMPLING_ATTEMPTS`][consts::FOOD_SAMPLING_ATTEMPTS] misses, the
/// whole board is scanned instead.  Returns `None` if the snake covers the
/// entire board.
pub(super) fn place_food<R: Rng>(grid: Grid, snake: &Snake, rng: &mut R) -> Option<Cell> {
    if snake.len() >= grid.cell_count() {
        return None;
    }
    for _ in 0..consts::FOOD_SAMPLING_ATTEMPTS {
        let cell = grid.random_cell(rng);
        if !snake.contains(cell) {
            return Some(cell);
        }
    }
    grid.cells().filter(|&c| !snake.contains(c)).choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn food_avoids_snake() {
        let grid = Grid::new(4).expect("4 is a valid side");
        let snake = Snake::from_cells(grid.cells().skip(1)).expect("snake is nonempty");
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..20 {
            assert_eq!(
                place_food(grid, &snake, &mut rng),
                Some(Cell::new(-2, -2))
            );
        }
    }

    #[test]
    fn food_on_board() {
        let grid = Grid::default();
        let snake = Snake::from_cells([Cell::ORIGIN, Cell::new(-1, 0), Cell::new(-2, 0)])
            .expect("snake is nonempty");
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..200 {
            let food = place_food(grid, &snake, &mut rng).expect("board has room");
            assert!(grid.contains(food));
            assert!(!snake.contains(food), "food placed on snake at {food:?}");
        }
    }

    #[test]
    fn full_board() {
        let grid = Grid::new(2).expect("2 is a valid side");
        let snake = Snake::from_cells(grid.cells()).expect("snake is nonempty");
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(place_food(grid, &snake, &mut rng), None);
    }
}
