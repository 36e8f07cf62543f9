use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::render_field;
use crate::ui::app::{App, Focus};
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = theme::panel("Set Your Budget", app.focus == Focus::Budget);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Budget field
            Constraint::Length(1),
            Constraint::Length(4), // Current budget
            Constraint::Min(0),
        ])
        .split(inner);

    render_field(f, chunks[0], app, Focus::Budget, "Total Budget", "$ ", "0.00");

    let current = Paragraph::new(vec![
        Line::from(Span::styled("Current Budget", theme::dim_style())),
        Line::from(Span::styled(
            format_amount(app.state.budget),
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::SURFACE)),
    );
    f.render_widget(current, chunks[2]);
}
