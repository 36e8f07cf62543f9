use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::render_field;
use crate::ui::app::{App, Focus};
use crate::ui::theme;
use crate::ui::util::{format_amount, spread};

/// Rows the item list loses to the form above it and the panel borders.
pub(crate) const FORM_HEIGHT: u16 = 3 + 3 + 1 + 1 + 2;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = matches!(
        app.focus,
        Focus::ItemName | Focus::ItemPrice | Focus::ItemList
    );
    let block = theme::panel("Shopping List", focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Price
            Constraint::Length(1), // Submit hint
            Constraint::Min(2),    // List
        ])
        .split(inner);

    render_field(
        f,
        chunks[0],
        app,
        Focus::ItemName,
        "Item Name",
        "",
        "Enter item name",
    );
    render_field(f, chunks[1], app, Focus::ItemPrice, "Price", "$ ", "0.00");

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("[Enter] ", Style::default().fg(theme::GREEN)),
        Span::styled("Add Item", theme::dim_style()),
    ]))
    .centered();
    f.render_widget(hint, chunks[2]);

    render_list(f, chunks[3], app);
}

fn render_list(f: &mut Frame, area: Rect, app: &App) {
    let list_focused = app.focus == Focus::ItemList;
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(if list_focused {
            theme::ACCENT
        } else {
            theme::OVERLAY
        }))
        .title(Span::styled(
            format!(" Items ({}) ", app.state.items.len()),
            theme::dim_style(),
        ));

    if app.state.items.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled("No items added yet", theme::dim_style())),
            Line::from(Span::styled("Add your first item above", theme::dim_style())),
        ])
        .centered()
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let rows: Vec<ListItem> = app
        .state
        .items
        .iter()
        .enumerate()
        .skip(app.items_cursor.scroll)
        .take(area.height.saturating_sub(1) as usize)
        .map(|(i, item)| {
            let selected = i == app.items_cursor.index;
            let style = if selected && list_focused {
                theme::selected_style()
            } else if selected {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            let line = spread(&item.name, &format_amount(item.price), width.saturating_sub(1));
            ListItem::new(Line::from(Span::styled(format!(" {line}"), style)))
        })
        .collect();

    f.render_widget(List::new(rows).block(block), area);
}
