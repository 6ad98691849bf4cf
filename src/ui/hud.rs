use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::session::{SessionPhase, Snapshot};

/// Renders the one-line status bar below the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(status_line(snapshot))
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.hud)),
        area,
    );
}

fn status_line(snapshot: &Snapshot<'_>) -> Line<'static> {
    let phase = match snapshot.phase {
        SessionPhase::Idle => "idle",
        SessionPhase::Running => "running",
    };

    Line::from(vec![
        Span::raw(format!("Length {}", snapshot.snake.len())),
        Span::raw(" | "),
        Span::raw(format!("Food {}", snapshot.food_eaten)),
        Span::raw(" | "),
        Span::raw(format!("{}ms", snapshot.delay_ms)),
        Span::raw(" | "),
        Span::raw(format!("{}x{}", snapshot.grid.cols, snapshot.grid.rows)),
        Span::raw(" | "),
        Span::raw(phase),
    ])
}
