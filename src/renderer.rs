use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    Theme, BORDER_HALF_BLOCK, COLUMNS_PER_ROW_HEIGHT, GLYPH_FOOD, GLYPH_SNAKE,
    VIEWPORT_UNITS_PER_ROW,
};
use crate::grid::{Cell, Grid};
use crate::session::{SessionPhase, Snapshot};
use crate::ui::hud::render_hud;
use crate::ui::menu::render_start_menu;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FrameLayout {
    /// Bordered play area.
    pub play_area: Rect,
    /// Drawable board inside the border.
    pub board: Rect,
    /// Status line below the play area.
    pub hud: Rect,
}

impl FrameLayout {
    #[must_use]
    pub fn new(area: Rect, theme: &Theme) -> Self {
        let [play_area, hud] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let board = board_block(theme).inner(play_area);

        Self {
            play_area,
            board,
            hud,
        }
    }

    /// Size of the board in viewport units.
    ///
    /// A row is `VIEWPORT_UNITS_PER_ROW` units tall and `COLUMNS_PER_ROW_HEIGHT`
    /// columns cover the same distance, so a square in units looks square on
    /// screen. The cell size passed to the grid model then decides how many
    /// rows and columns one grid cell covers.
    #[must_use]
    pub fn viewport(self) -> (u32, u32) {
        let width = u32::from(self.board.width) * VIEWPORT_UNITS_PER_ROW
            / u32::from(COLUMNS_PER_ROW_HEIGHT);
        let height = u32::from(self.board.height) * VIEWPORT_UNITS_PER_ROW;

        (width.max(1), height.max(1))
    }
}

/// Renders the full game frame from a read-only snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>, theme: &Theme) {
    let layout = FrameLayout::new(frame.area(), theme);

    frame.render_widget(board_block(theme), layout.play_area);

    if snapshot.phase == SessionPhase::Running {
        if let Some(food) = snapshot.food {
            render_food(frame, layout.board, snapshot.grid, food, theme);
        }
    }
    render_snake(frame, layout.board, snapshot, theme);
    render_hud(frame, layout.hud, snapshot, theme);

    if snapshot.phase == SessionPhase::Idle {
        render_start_menu(frame, layout.play_area, theme);
    }
}

fn board_block(theme: &Theme) -> Block<'static> {
    Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg))
}

fn render_food(frame: &mut Frame<'_>, board: Rect, grid: Grid, food: Cell, theme: &Theme) {
    let Some(area) = cell_area(board, grid, food) else {
        return;
    };

    fill(frame, area, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, board: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let head_style = Style::new()
        .fg(theme.snake_head)
        .add_modifier(Modifier::BOLD);
    let body_style = Style::new().fg(theme.snake_body);

    for (index, segment) in snapshot.snake.segments().enumerate() {
        let Some(area) = cell_area(board, snapshot.grid, *segment) else {
            continue;
        };

        let style = if index == 0 { head_style } else { body_style };
        fill(frame, area, GLYPH_SNAKE, style);
    }
}

fn fill(frame: &mut Frame<'_>, area: Rect, glyph: &str, style: Style) {
    let buffer = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buffer.set_string(x, y, glyph, style);
        }
    }
}

/// Terminal rectangle covered by a 1-indexed grid cell.
///
/// The board is split evenly across the grid, so every cell covers the same
/// number of rows and columns, give or take one when the sizes do not divide.
/// Returns `None` for cells off the grid or too small to draw.
fn cell_area(board: Rect, grid: Grid, cell: Cell) -> Option<Rect> {
    if !cell.is_within(grid) {
        return None;
    }

    let column = u32::try_from(cell.x - 1).ok()?;
    let row = u32::try_from(cell.y - 1).ok()?;
    let (left, right) = span(board.x, board.width, grid.cols, column)?;
    let (top, bottom) = span(board.y, board.height, grid.rows, row)?;

    Some(Rect::new(left, top, right - left, bottom - top))
}

/// Start and end of slot `index` when `length` is split into `slots` parts.
fn span(origin: u16, length: u16, slots: u16, index: u32) -> Option<(u16, u16)> {
    let length = u32::from(length);
    let slots = u32::from(slots);
    let start = index * length / slots;
    let end = (index + 1) * length / slots;
    if end <= start {
        return None;
    }

    let start = origin.checked_add(u16::try_from(start).ok()?)?;
    let end = origin.checked_add(u16::try_from(end).ok()?)?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use ratatui::Terminal;

    use crate::config::{Theme, DEFAULT_CELL_PX, THEME};
    use crate::grid::{compute_grid, Cell, Grid};
    use crate::session::{SessionPhase, Snapshot};
    use crate::snake::Snake;

    use super::{cell_area, render, FrameLayout};

    #[test]
    fn layout_reserves_border_and_status_line() {
        let layout = FrameLayout::new(Rect::new(0, 0, 42, 12), &THEME);

        assert_eq!(layout.hud, Rect::new(0, 11, 42, 1));
        assert_eq!(layout.board, Rect::new(1, 1, 40, 9));
    }

    #[test]
    fn custom_theme_drives_layout_and_border() {
        let theme = Theme {
            border_fg: Color::Magenta,
            food: Color::Yellow,
            ..THEME
        };
        assert_eq!(
            FrameLayout::new(Rect::new(0, 0, 42, 12), &theme),
            FrameLayout::new(Rect::new(0, 0, 42, 12), &THEME)
        );

        let mut terminal = Terminal::new(TestBackend::new(42, 12)).expect("test terminal");
        let snake = Snake::new(Cell::new(1, 1));
        let snapshot = Snapshot {
            snake: &snake,
            food: Some(Cell::new(4, 2)),
            phase: SessionPhase::Running,
            grid: Grid::new(20, 9),
            delay_ms: 150,
            food_eaten: 0,
        };

        terminal
            .draw(|frame| render(frame, &snapshot, &theme))
            .expect("draw succeeds");

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 5)].fg, Color::Magenta);
        assert_eq!(buffer[(7, 2)].fg, Color::Yellow);
    }

    #[test]
    fn default_cell_size_gives_one_row_and_two_columns_per_cell() {
        let layout = FrameLayout::new(Rect::new(0, 0, 42, 12), &THEME);
        let (width, height) = layout.viewport();

        assert_eq!(
            compute_grid(width, height, DEFAULT_CELL_PX),
            Grid::new(20, 9)
        );
    }

    #[test]
    fn larger_cell_size_gives_a_coarser_grid() {
        let layout = FrameLayout::new(Rect::new(0, 0, 82, 26), &THEME);
        let (width, height) = layout.viewport();

        // Board is 80x23 terminal cells.
        assert_eq!(compute_grid(width, height, 15), Grid::new(40, 23));
        assert_eq!(compute_grid(width, height, 30), Grid::new(19, 11));
        assert_eq!(compute_grid(width, height, 45), Grid::new(12, 7));
    }

    #[test]
    fn cells_split_the_board_evenly() {
        let board = Rect::new(1, 1, 40, 9);

        let fine = Grid::new(20, 9);
        assert_eq!(cell_area(board, fine, Cell::new(1, 1)), Some(Rect::new(1, 1, 2, 1)));
        assert_eq!(cell_area(board, fine, Cell::new(20, 9)), Some(Rect::new(39, 9, 2, 1)));

        let coarse = Grid::new(10, 3);
        assert_eq!(cell_area(board, coarse, Cell::new(1, 1)), Some(Rect::new(1, 1, 4, 3)));
        assert_eq!(cell_area(board, coarse, Cell::new(10, 3)), Some(Rect::new(37, 7, 4, 3)));
    }

    #[test]
    fn cells_off_the_grid_are_not_drawn() {
        let board = Rect::new(1, 1, 40, 9);
        let grid = Grid::new(20, 9);

        assert_eq!(cell_area(board, grid, Cell::new(0, 1)), None);
        assert_eq!(cell_area(board, grid, Cell::new(21, 1)), None);
        // A grid finer than the board cannot be drawn.
        assert_eq!(cell_area(board, Grid::new(80, 9), Cell::new(1, 1)), None);
    }

    #[test]
    fn running_frame_draws_snake_and_food() {
        let mut terminal = Terminal::new(TestBackend::new(42, 12)).expect("test terminal");
        let snake = Snake::from_segments(vec![Cell::new(2, 1), Cell::new(1, 1)]);
        let snapshot = Snapshot {
            snake: &snake,
            food: Some(Cell::new(4, 2)),
            phase: SessionPhase::Running,
            grid: Grid::new(20, 9),
            delay_ms: 150,
            food_eaten: 0,
        };

        terminal
            .draw(|frame| render(frame, &snapshot, &THEME))
            .expect("draw succeeds");

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(1, 1)].symbol(), "█");
        assert_eq!(buffer[(2, 1)].symbol(), "█");
        assert_eq!(buffer[(3, 1)].symbol(), "█");
        assert_eq!(buffer[(7, 2)].symbol(), "◆");
        assert_eq!(buffer[(8, 2)].symbol(), "◆");
    }

    #[test]
    fn coarse_grid_cells_fill_several_terminal_cells() {
        let mut terminal = Terminal::new(TestBackend::new(42, 12)).expect("test terminal");
        let snake = Snake::new(Cell::new(2, 2));
        let snapshot = Snapshot {
            snake: &snake,
            food: None,
            phase: SessionPhase::Running,
            grid: Grid::new(10, 3),
            delay_ms: 150,
            food_eaten: 0,
        };

        terminal
            .draw(|frame| render(frame, &snapshot, &THEME))
            .expect("draw succeeds");

        let buffer = terminal.backend().buffer();
        for y in 4..7 {
            for x in 5..9 {
                assert_eq!(buffer[(x, y)].symbol(), "█", "({x}, {y})");
            }
        }
        assert_ne!(buffer[(9, 4)].symbol(), "█");
    }

    #[test]
    fn idle_frame_hides_food() {
        let mut terminal = Terminal::new(TestBackend::new(42, 12)).expect("test terminal");
        let snake = Snake::new(Cell::new(1, 1));
        let snapshot = Snapshot {
            snake: &snake,
            food: Some(Cell::new(20, 9)),
            phase: SessionPhase::Idle,
            grid: Grid::new(20, 9),
            delay_ms: 150,
            food_eaten: 0,
        };

        terminal
            .draw(|frame| render(frame, &snapshot, &THEME))
            .expect("draw succeeds");

        let buffer = terminal.backend().buffer();
        assert_ne!(buffer[(39, 9)].symbol(), "◆");
    }
}
