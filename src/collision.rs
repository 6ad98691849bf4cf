use crate::grid::Grid;
use crate::snake::Snake;

/// Result of validating the snake after a step.
///
/// Both checks are always evaluated, so a head that is outside the board and
/// on its own body reports both flags.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct CollisionReport {
    pub wall_hit: bool,
    pub self_hit: bool,
}

impl CollisionReport {
    /// Returns true when neither a wall nor the body was hit.
    #[must_use]
    pub fn is_ok(self) -> bool {
        !self.wall_hit && !self.self_hit
    }
}

/// Classifies the current head position against the walls and the body.
#[must_use]
pub fn check_collision(snake: &Snake, grid: Grid) -> CollisionReport {
    CollisionReport {
        wall_hit: !snake.head().is_within(grid),
        self_hit: snake.head_overlaps_body(),
    }
}
