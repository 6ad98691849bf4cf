use rand::Rng;

use crate::config::FOOD_PLACEMENT_ATTEMPTS;
use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Picks a random cell on `grid` that the snake does not occupy.
///
/// Uniform rejection sampling is tried first. Once the snake covers most of
/// the board that can take many draws, so after `FOOD_PLACEMENT_ATTEMPTS`
/// misses the free cells are enumerated and one is picked uniformly. Returns
/// `None` only when the snake fills the whole board.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Cell> {
    if grid.cols == 0 || grid.rows == 0 {
        return None;
    }

    for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
        let candidate = Cell {
            x: rng.gen_range(1..=grid.cols_i32()),
            y: rng.gen_range(1..=grid.rows_i32()),
        };
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    log::debug!(
        "food placement fell back to a free-cell scan ({} of {} cells occupied)",
        snake.len(),
        grid.total_cells()
    );
    place_from_free_cells(rng, grid, snake)
}

fn place_from_free_cells<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Cell> {
    let mut candidates = Vec::new();

    for y in 1..=grid.rows_i32() {
        for x in 1..=grid.cols_i32() {
            let cell = Cell { x, y };
            if !snake.occupies(cell) {
                candidates.push(cell);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
