use rand::Rng;

use crate::food::place_food;
use crate::game::GameState;
use crate::grid::{Cell, Grid};
use crate::speed::next_delay;

/// What one movement step did to the state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Step {
    /// The snake moved without eating; length unchanged.
    Moved,
    /// The snake ate and grew; the tick interval is now `delay_ms`.
    Ate { delay_ms: u64 },
    /// The snake ate and no free cell is left for new food.
    BoardFilled,
}

/// Advances the snake by one cell.
///
/// Consumes at most one buffered direction, moves the head, and either grows
/// (food eaten: new food placed, delay shortened) or drops the tail. Walls
/// and self-overlap are left for the collision check that follows.
pub fn advance<R: Rng + ?Sized>(state: &mut GameState, grid: Grid, rng: &mut R) -> Step {
    let direction = state.input.commit_next();
    let head = state.snake.head();
    let (dx, dy) = direction.offset();
    let next_head = Cell {
        x: head.x + dx,
        y: head.y + dy,
    };

    state.snake.push_head(next_head);

    if state.food != Some(next_head) {
        let _ = state.snake.pop_tail();
        return Step::Moved;
    }

    state.food_eaten += 1;
    state.delay_ms = next_delay(state.delay_ms);
    state.food = place_food(rng, grid, &state.snake);

    match state.food {
        Some(_) => Step::Ate {
            delay_ms: state.delay_ms,
        },
        None => Step::BoardFilled,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::game::GameState;
    use crate::grid::{Cell, Grid};
    use crate::input::{Direction, RawKey};
    use crate::snake::Snake;

    use super::{advance, Step};

    fn state(segments: Vec<Cell>, food: Cell, direction: Direction) -> GameState {
        GameState::from_parts(Snake::from_segments(segments), Some(food), direction)
    }

    #[test]
    fn eating_keeps_the_tail_and_relocates_food() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut state = state(vec![Cell::new(5, 5)], Cell::new(6, 5), Direction::Right);

        let step = advance(&mut state, Grid::new(10, 10), &mut rng);

        assert_eq!(step, Step::Ate { delay_ms: 145 });
        assert_eq!(state.snake.to_vec(), vec![Cell::new(6, 5), Cell::new(5, 5)]);
        let food = state.food.expect("food relocated");
        assert_ne!(food, Cell::new(6, 5));
        assert_ne!(food, Cell::new(5, 5));
        assert_eq!(state.food_eaten, 1);
        assert_eq!(state.delay_ms, 145);
    }

    #[test]
    fn moving_without_food_drops_the_tail() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut state = state(
            vec![Cell::new(5, 5), Cell::new(4, 5)],
            Cell::new(9, 9),
            Direction::Right,
        );

        let step = advance(&mut state, Grid::new(10, 10), &mut rng);

        assert_eq!(step, Step::Moved);
        assert_eq!(state.snake.to_vec(), vec![Cell::new(6, 5), Cell::new(5, 5)]);
        assert_eq!(state.food, Some(Cell::new(9, 9)));
        assert_eq!(state.delay_ms, 150);
    }

    #[test]
    fn one_buffered_direction_is_consumed_per_step() {
        let mut rng = StdRng::seed_from_u64(4);
        let grid = Grid::new(10, 10);
        let mut state = state(vec![Cell::new(5, 5)], Cell::new(9, 9), Direction::Right);
        state.input.submit(RawKey::ArrowUp);
        state.input.submit(RawKey::ArrowLeft);

        advance(&mut state, grid, &mut rng);
        assert_eq!(state.snake.head(), Cell::new(5, 4));

        advance(&mut state, grid, &mut rng);
        assert_eq!(state.snake.head(), Cell::new(4, 4));

        advance(&mut state, grid, &mut rng);
        assert_eq!(state.snake.head(), Cell::new(3, 4));
        assert_eq!(state.input.committed(), Direction::Left);
    }

    #[test]
    fn every_direction_moves_one_cell() {
        let mut rng = StdRng::seed_from_u64(4);
        let cases = [
            (Direction::Up, Cell::new(5, 4)),
            (Direction::Down, Cell::new(5, 6)),
            (Direction::Left, Cell::new(4, 5)),
            (Direction::Right, Cell::new(6, 5)),
        ];

        for (direction, expected) in cases {
            let mut state = state(vec![Cell::new(5, 5)], Cell::new(9, 9), direction);
            advance(&mut state, Grid::new(10, 10), &mut rng);
            assert_eq!(state.snake.head(), expected, "{direction:?}");
        }
    }

    #[test]
    fn movement_does_not_stop_at_the_wall() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut state = state(vec![Cell::new(1, 3)], Cell::new(9, 9), Direction::Left);

        advance(&mut state, Grid::new(10, 10), &mut rng);

        assert_eq!(state.snake.head(), Cell::new(0, 3));
    }

    #[test]
    fn eating_the_last_free_cell_fills_the_board() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut state = state(
            vec![Cell::new(1, 2), Cell::new(1, 1), Cell::new(2, 1)],
            Cell::new(2, 2),
            Direction::Right,
        );

        let step = advance(&mut state, Grid::new(2, 2), &mut rng);

        assert_eq!(step, Step::BoardFilled);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.food, None);
    }
}
