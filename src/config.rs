use ratatui::style::Color;
use ratatui::symbols::border;

/// Viewport units covered by one grid cell edge.
pub const DEFAULT_CELL_PX: u32 = 15;

/// Tick interval a fresh session starts with, in milliseconds.
pub const BASELINE_DELAY_MS: u64 = 150;

/// Shortest tick interval the speed curve ever reaches, in milliseconds.
pub const FLOOR_DELAY_MS: u64 = 25;

/// Rejection-sampling attempts before food placement scans for free cells.
pub const FOOD_PLACEMENT_ATTEMPTS: u32 = 256;

/// Viewport units covered by one terminal row.
///
/// At the default cell size one grid cell is exactly one row tall; larger
/// cell sizes make grid cells span several rows.
pub const VIEWPORT_UNITS_PER_ROW: u32 = 15;

/// Terminal columns that match the height of one row.
///
/// Terminal glyphs are roughly twice as tall as they are wide, so a square
/// spans two columns.
pub const COLUMNS_PER_ROW_HEIGHT: u16 = 2;

/// Smallest accepted cell size: one grid cell must cover at least one row.
pub const MIN_CELL_PX: u32 = VIEWPORT_UNITS_PER_ROW;

/// Upper bound for one frame of the event loop when no tick is due sooner.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Application directory name used under the platform config/data dirs.
pub const APP_DIR_NAME: &str = "gridsnake";

/// Glyph filling every terminal cell covered by a snake segment.
pub const GLYPH_SNAKE: &str = "█";

/// Glyph filling every terminal cell covered by the food.
pub const GLYPH_FOOD: &str = "◆";

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub border_fg: Color,
    pub hud: Color,
    pub overlay_title: Color,
    pub overlay_footer: Color,
}

pub const THEME: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::Red,
    border_fg: Color::DarkGray,
    hud: Color::Gray,
    overlay_title: Color::Green,
    overlay_footer: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};
