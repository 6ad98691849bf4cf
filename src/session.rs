use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision::{check_collision, CollisionReport};
use crate::config::BASELINE_DELAY_MS;
use crate::game::GameState;
use crate::grid::{compute_grid, Cell, Grid};
use crate::input::RawKey;
use crate::movement::{advance, Step};
use crate::scheduler::TickScheduler;
use crate::snake::Snake;

/// Lifecycle phase of the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionPhase {
    /// Waiting for the start signal; instructions are shown.
    Idle,
    /// Timer active; instructions hidden.
    Running,
}

/// Why the session was reset.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ResetReason {
    Collision(CollisionReport),
    BoardFilled,
    ViewportChange,
}

/// Result of one tick while running.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    Moved,
    Ate { delay_ms: u64 },
    /// The step hit a wall or the body; the session is back to idle.
    Collided(CollisionReport),
    /// The snake covers every cell; the session is back to idle.
    BoardFilled,
}

/// Read-only view of the state handed to the renderer once per frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub snake: &'a Snake,
    pub food: Option<Cell>,
    pub phase: SessionPhase,
    pub grid: Grid,
    pub delay_ms: u64,
    pub food_eaten: u32,
}

/// Session controller: owns the game state, the grid and the tick timer,
/// and drives the idle/running lifecycle.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    cell_px: u32,
    state: GameState,
    phase: SessionPhase,
    scheduler: TickScheduler,
    rng: StdRng,
}

impl Session {
    /// Creates an idle session for the given viewport, seeded from entropy.
    #[must_use]
    pub fn new(viewport: (u32, u32), cell_px: u32) -> Self {
        Self::with_rng(viewport, cell_px, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible play.
    #[must_use]
    pub fn new_with_seed(viewport: (u32, u32), cell_px: u32, seed: u64) -> Self {
        Self::with_rng(viewport, cell_px, StdRng::seed_from_u64(seed))
    }

    fn with_rng(viewport: (u32, u32), cell_px: u32, mut rng: StdRng) -> Self {
        let grid = compute_grid(viewport.0, viewport.1, cell_px);
        let state = GameState::initial(grid, &mut rng);
        log::info!("session created on a {}x{} grid", grid.cols, grid.rows);

        Self {
            grid,
            cell_px,
            state,
            phase: SessionPhase::Idle,
            scheduler: TickScheduler::new(Duration::from_millis(BASELINE_DELAY_MS)),
            rng,
        }
    }

    /// Starts the tick timer when idle. Returns false if already running.
    pub fn start_signal(&mut self, now: Instant) -> bool {
        if self.phase == SessionPhase::Running {
            return false;
        }

        self.state.input.clear();
        self.scheduler.set_interval(Duration::from_millis(self.state.delay_ms), now);
        self.scheduler.start(now);
        self.phase = SessionPhase::Running;
        log::info!("session started");
        true
    }

    /// Feeds one raw key into the session.
    ///
    /// `Start` while idle is the start signal; arrows go to the input queue;
    /// anything else is ignored.
    pub fn submit(&mut self, key: RawKey, now: Instant) {
        match key {
            RawKey::Start => {
                let _ = self.start_signal(now);
            }
            other => self.state.input.submit(other),
        }
    }

    /// Recomputes the grid for a new viewport and resets the session.
    pub fn on_viewport_change(&mut self, width: u32, height: u32) {
        self.grid = compute_grid(width, height, self.cell_px);
        log::debug!(
            "viewport {width}x{height} -> grid {}x{}",
            self.grid.cols,
            self.grid.rows
        );
        self.reset(ResetReason::ViewportChange);
    }

    /// Runs a tick if the timer is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.phase != SessionPhase::Running || !self.scheduler.poll(now) {
            return None;
        }

        self.tick(now)
    }

    /// Performs one tick immediately: advance, then validate.
    ///
    /// Returns `None` while idle.
    pub fn tick(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.phase != SessionPhase::Running {
            return None;
        }

        let step = advance(&mut self.state, self.grid, &mut self.rng);

        let report = check_collision(&self.state.snake, self.grid);
        if !report.is_ok() {
            self.reset(ResetReason::Collision(report));
            return Some(TickOutcome::Collided(report));
        }

        let outcome = match step {
            Step::Moved => TickOutcome::Moved,
            Step::Ate { delay_ms } => {
                log::debug!(
                    "food eaten ({} total), delay now {delay_ms}ms",
                    self.state.food_eaten
                );
                self.scheduler.set_interval(Duration::from_millis(delay_ms), now);
                TickOutcome::Ate { delay_ms }
            }
            Step::BoardFilled => {
                self.reset(ResetReason::BoardFilled);
                TickOutcome::BoardFilled
            }
        };

        Some(outcome)
    }

    /// Reinitializes the game state and returns to idle.
    pub fn reset(&mut self, reason: ResetReason) {
        match reason {
            ResetReason::Collision(report) => log::info!(
                "session over after {} food (wall hit: {}, self hit: {})",
                self.state.food_eaten,
                report.wall_hit,
                report.self_hit
            ),
            ResetReason::BoardFilled => log::info!(
                "board filled with {} segments, session won",
                self.state.snake.len()
            ),
            ResetReason::ViewportChange => {
                log::debug!("session reset: {reason:?}");
            }
        }

        self.scheduler.cancel();
        self.state = GameState::initial(self.grid, &mut self.rng);
        self.phase = SessionPhase::Idle;
    }

    /// Read-only view for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.state.snake,
            food: self.state.food,
            phase: self.phase,
            grid: self.grid,
            delay_ms: self.state.delay_ms,
            food_eaten: self.state.food_eaten,
        }
    }

    /// Time until the next tick is due; `None` while idle.
    #[must_use]
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_due(now)
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for scripted scenarios.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }
}
