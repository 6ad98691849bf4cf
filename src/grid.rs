/// Grid position in 1-indexed logical cell coordinates.
///
/// Coordinates are signed so a head that has just left the board can still be
/// represented and classified as a wall hit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the cell lies inside `[1, cols] x [1, rows]`.
    #[must_use]
    pub fn is_within(self, grid: Grid) -> bool {
        self.x >= 1 && self.y >= 1 && self.x <= grid.cols_i32() && self.y <= grid.rows_i32()
    }
}

/// Playable board dimensions, recomputed whenever the viewport changes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    pub cols: u16,
    pub rows: u16,
}

impl Grid {
    #[must_use]
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }

    /// Returns the cell a fresh snake starts on.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell {
            x: (self.cols_i32() / 2).max(1),
            y: (self.rows_i32() / 2).max(1),
        }
    }

    #[must_use]
    pub fn cols_i32(self) -> i32 {
        i32::from(self.cols)
    }

    #[must_use]
    pub fn rows_i32(self) -> i32 {
        i32::from(self.rows)
    }
}

/// Derives grid dimensions from a viewport size.
///
/// The shorter viewport edge decides how many cells fit; the longer edge is
/// scaled by the aspect ratio so cells stay square. Both dimensions are
/// clamped to at least one cell.
#[must_use]
pub fn compute_grid(viewport_width: u32, viewport_height: u32, cell_px: u32) -> Grid {
    debug_assert!(viewport_width > 0 && viewport_height > 0 && cell_px > 0);

    let width = f64::from(viewport_width);
    let height = f64::from(viewport_height.max(1));
    let base = viewport_width.min(viewport_height);
    let cell_count = f64::from(base / cell_px.max(1));
    let ratio = width / height;

    let (cols, rows) = if ratio > 1.0 {
        ((cell_count * ratio).round(), cell_count)
    } else {
        (cell_count, (cell_count / ratio).round())
    };

    Grid {
        cols: clamp_dimension(cols),
        rows: clamp_dimension(rows),
    }
}

fn clamp_dimension(value: f64) -> u16 {
    // Float-to-int `as` saturates, so out-of-range values land on the bounds.
    (value as u16).max(1)
}
