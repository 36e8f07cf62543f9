use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use crate::tracker::Summary;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let summary = app.summary();
    render_spent_card(f, cards[0], &summary);
    render_remaining_card(f, cards[1], &summary);
    render_usage_card(f, cards[2], &summary);
}

fn render_spent_card(f: &mut Frame, area: Rect, summary: &Summary) {
    render_card(
        f,
        area,
        "Total Spent",
        format_amount(summary.total_spent),
        theme::ORANGE,
        summary.item_count_label(),
    );
}

fn render_remaining_card(f: &mut Frame, area: Rect, summary: &Summary) {
    let (title, subtitle) = if summary.is_over_budget {
        ("Over Budget", "Exceeds budget")
    } else {
        ("Remaining", "Left to spend")
    };
    render_card(
        f,
        area,
        title,
        format_amount(summary.remaining.abs()),
        theme::budget_color(summary.is_over_budget),
        subtitle.to_string(),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: String,
    color: Color,
    subtitle: String,
) {
    // Red amounts get a red border too.
    let border = if color == theme::RED {
        theme::RED
    } else {
        theme::OVERLAY
    };
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            amount,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(theme::panel(title, false).border_style(Style::default().fg(border)));
    f.render_widget(text, area);
}

fn render_usage_card(f: &mut Frame, area: Rect, summary: &Summary) {
    let block = theme::panel("Budget Usage", false);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress label
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Over-budget note
            Constraint::Min(0),
        ])
        .split(inner);

    let pct = format!("{}%", summary.progress_label);
    let width = rows[0].width as usize;
    let pad = width.saturating_sub("Progress".len() + pct.len());
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Progress", theme::dim_style()),
            Span::raw(" ".repeat(pad)),
            Span::styled(pct, theme::normal_style().add_modifier(Modifier::BOLD)),
        ])),
        rows[0],
    );

    let bar_color = if summary.is_over_budget {
        theme::RED
    } else {
        theme::PURPLE
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(bar_color).bg(theme::SURFACE))
        .ratio(summary.progress_ratio)
        .label("");
    f.render_widget(gauge, rows[1]);

    if let Some(over) = summary.over_budget_by() {
        let note = Paragraph::new(Line::from(Span::styled(
            format!("You've exceeded your budget by {}", format_amount(over)),
            Style::default().fg(theme::RED),
        )))
        .centered();
        f.render_widget(note, rows[2]);
    }
}
