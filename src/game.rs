use rand::Rng;

use crate::config::BASELINE_DELAY_MS;
use crate::food::place_food;
use crate::grid::{Cell, Grid};
use crate::input::{Direction, InputQueue};
use crate::snake::Snake;

/// Complete mutable game state for one session.
///
/// Owned by the session controller and mutated in place by the movement
/// engine. Everything here is reinitialized together on reset.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Cell>,
    pub input: InputQueue,
    pub delay_ms: u64,
    pub food_eaten: u32,
}

impl GameState {
    /// Canonical reset state: one cell at the grid center, fresh food,
    /// default direction, baseline delay and an empty input queue.
    #[must_use]
    pub fn initial<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        let snake = Snake::new(grid.center());
        let food = place_food(rng, grid, &snake);

        Self {
            snake,
            food,
            input: InputQueue::new(Direction::DEFAULT),
            delay_ms: BASELINE_DELAY_MS,
            food_eaten: 0,
        }
    }

    /// Builds a state from explicit parts, for scenarios and tests.
    #[must_use]
    pub fn from_parts(snake: Snake, food: Option<Cell>, direction: Direction) -> Self {
        Self {
            snake,
            food,
            input: InputQueue::new(direction),
            delay_ms: BASELINE_DELAY_MS,
            food_eaten: 0,
        }
    }

    /// Returns true when this is the canonical reset state for `grid`,
    /// ignoring where the food landed.
    #[must_use]
    pub fn is_reset_state(&self, grid: Grid) -> bool {
        self.snake == Snake::new(grid.center())
            && self.input == InputQueue::new(Direction::DEFAULT)
            && self.delay_ms == BASELINE_DELAY_MS
            && self.food_eaten == 0
    }
}
