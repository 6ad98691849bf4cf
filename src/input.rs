use std::collections::VecDeque;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Direction a fresh session starts moving in.
    pub const DEFAULT: Self = Self::Right;

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the `(dx, dy)` step for one tick; y grows downwards.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Raw key identifiers recognized by the core.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RawKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Start,
    Other,
}

impl RawKey {
    /// Maps the key to a direction; `None` for non-arrow keys.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::ArrowUp => Some(Direction::Up),
            Self::ArrowDown => Some(Direction::Down),
            Self::ArrowLeft => Some(Direction::Left),
            Self::ArrowRight => Some(Direction::Right),
            Self::Start | Self::Other => None,
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// FIFO of directions pressed between ticks plus the committed direction.
///
/// Every accepted press is kept, so quick two-key turns land on consecutive
/// ticks instead of the second press overwriting the first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InputQueue {
    committed: Direction,
    pending: VecDeque<Direction>,
}

impl InputQueue {
    #[must_use]
    pub fn new(committed: Direction) -> Self {
        Self {
            committed,
            pending: VecDeque::new(),
        }
    }

    /// Buffers the direction for `key` unless it reverses the effective one.
    ///
    /// Non-arrow keys are ignored.
    pub fn submit(&mut self, key: RawKey) {
        let Some(candidate) = key.direction() else {
            return;
        };

        if direction_change_is_valid(self.effective_current(), candidate) {
            self.pending.push_back(candidate);
        }
    }

    /// Dequeues the oldest buffered direction without committing it.
    pub fn next_direction(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    /// Commits the oldest buffered direction, if any, and returns the
    /// direction the next step moves in.
    pub fn commit_next(&mut self) -> Direction {
        if let Some(direction) = self.next_direction() {
            self.committed = direction;
        }
        self.committed
    }

    /// Direction the next tick will use: front of the queue, else committed.
    #[must_use]
    pub fn effective_current(&self) -> Direction {
        self.pending.front().copied().unwrap_or(self.committed)
    }

    #[must_use]
    pub fn committed(&self) -> Direction {
        self.committed
    }

    /// Buffered directions, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &Direction> {
        self.pending.iter()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drops buffered directions and commits `direction`.
    pub fn reset(&mut self, direction: Direction) {
        self.committed = direction;
        self.pending.clear();
    }

    /// Drops buffered directions, keeping the committed one.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
