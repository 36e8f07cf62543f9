pub(crate) mod budget;
pub(crate) mod items;
pub(crate) mod summary;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, Focus, InputMode};
use crate::ui::theme;

/// Draw one bordered input field. `prefix` is shown before the value (e.g.
/// a currency sign); `placeholder` when the value is empty. Places the
/// terminal cursor at the end of the text while the field is being edited.
pub(crate) fn render_field(
    f: &mut Frame,
    area: Rect,
    app: &App,
    field: Focus,
    label: &str,
    prefix: &str,
    placeholder: &str,
) {
    let value = match field {
        Focus::Budget => &app.budget_input,
        Focus::ItemName => &app.item_name_input,
        Focus::ItemPrice => &app.item_price_input,
        Focus::ItemList => return,
    };
    let focused = app.focus == field;
    let editing = focused && app.input_mode == InputMode::Editing;

    let body = if value.is_empty() && !editing {
        Span::styled(placeholder.to_string(), theme::dim_style())
    } else {
        Span::styled(value.clone(), theme::normal_style())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::field_border(focused, editing))
        .title(Span::styled(format!(" {label} "), theme::dim_style()));
    let para = Paragraph::new(Line::from(vec![
        Span::styled(prefix.to_string(), Style::default().fg(theme::TEXT_DIM)),
        body,
    ]))
    .block(block);
    f.render_widget(para, area);

    if editing {
        let offset = u16::try_from(prefix.chars().count() + value.chars().count())
            .unwrap_or(u16::MAX);
        let max_x = area.x.saturating_add(area.width.saturating_sub(2));
        let x = area.x.saturating_add(1).saturating_add(offset).min(max_x);
        f.set_cursor_position((x, area.y + 1));
    }
}
