use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;

const TITLE: &str = "SNAKE";
const INSTRUCTIONS: [&str; 3] = [
    "Press [Space] to start",
    "Steer with the arrow keys",
    "[Q]/[Esc] Quit",
];
const FOOTER: &str = "Eat to grow; every bite speeds you up";

/// Draws the instruction overlay shown while the session is idle.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, popup_width(), popup_height());
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from(TITLE))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.overlay_title)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let body: Vec<Line<'_>> = INSTRUCTIONS.iter().map(|line| Line::from(*line)).collect();
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" start ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from(FOOTER))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.overlay_footer)),
        footer_row,
    );
}

/// Widest line plus the body border and one column of padding per side.
fn popup_width() -> u16 {
    let widest = INSTRUCTIONS
        .iter()
        .chain([TITLE, FOOTER].iter())
        .map(|line| line.width())
        .max()
        .unwrap_or(0);

    u16::try_from(widest + 4).unwrap_or(u16::MAX)
}

fn popup_height() -> u16 {
    // Title, bordered body, footer.
    let body = u16::try_from(INSTRUCTIONS.len()).unwrap_or(u16::MAX);
    1 + body.saturating_add(2) + 1
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(mid);

    center
}
