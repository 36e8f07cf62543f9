use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::db::Database;
use crate::tracker::is_numeric_char;
use crate::ui::app::{App, Focus, InputMode, PendingAction};
use crate::ui::commands;

pub(crate) fn as_tui(db: &mut Database) -> Result<()> {
    let mut app = App::new(db.load_state());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, db);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %format!("{e:#}"), "tui exited with error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    db: &mut Database,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            app.visible_rows = crate::ui::render::list_capacity(f.area().height);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(key, app, db)?;
        }
    }
    Ok(())
}

pub(crate) fn handle_key(key: KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app, db),
        InputMode::Command => handle_command_input(key, app, db),
        InputMode::Editing => {
            handle_editing_input(key, app, db);
            Ok(())
        }
        InputMode::Confirm => {
            handle_confirm_input(key, app, db);
            Ok(())
        }
    }
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                app.items_cursor.up();
            }
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Enter | KeyCode::Char('i') => {
            let focus = app.focus;
            start_editing(app, focus);
        }
        KeyCode::Char('b') => start_editing(app, Focus::Budget),
        KeyCode::Char('a') => start_editing(app, Focus::ItemName),
        KeyCode::Char('j') | KeyCode::Down => {
            if app.focus == Focus::ItemList {
                move_down(app);
            } else {
                app.focus = app.focus.next();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.focus == Focus::ItemList {
                app.items_cursor.up();
            } else {
                app.focus = app.focus.prev();
            }
        }
        KeyCode::Char('g') => app.items_cursor.top(),
        KeyCode::Char('G') => {
            app.items_cursor.bottom(app.state.items.len(), app.visible_rows);
        }
        KeyCode::Char('D') | KeyCode::Delete => {
            commands::handle_command("delete", app, db)?;
        }
        KeyCode::Esc => app.set_status(""),
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            commands::handle_command(&input, app, db)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            if app.command_input.pop().is_none() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: KeyEvent, app: &mut App, db: &mut Database) {
    let focus = app.focus;
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Tab => start_editing(app, focus.next()),
        KeyCode::BackTab => start_editing(app, focus.prev()),
        KeyCode::Enter => match focus {
            Focus::Budget => app.input_mode = InputMode::Normal,
            Focus::ItemName if app.item_price_input.trim().is_empty() => {
                app.focus = Focus::ItemPrice;
            }
            _ => {
                if app.submit_item_form(db) {
                    app.focus = Focus::ItemName;
                }
            }
        },
        KeyCode::Backspace => {
            if let Some(input) = app.focused_input_mut() {
                input.pop();
            }
            if focus == Focus::Budget {
                app.apply_budget_input(db);
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if focus.is_numeric() && !is_numeric_char(c) {
                return;
            }
            if let Some(input) = app.focused_input_mut() {
                input.push(c);
            }
            if focus == Focus::Budget {
                app.apply_budget_input(db);
            }
        }
        _ => {}
    }
}

fn handle_confirm_input(key: KeyEvent, app: &mut App, db: &mut Database) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.pending_action.take() {
                match action {
                    PendingAction::DeleteItem { id } => app.delete_item(&id, db),
                }
            }
        }
        _ => {
            app.pending_action = None;
            app.set_status("Cancelled");
        }
    }
    app.confirm_message.clear();
    app.input_mode = InputMode::Normal;
}

// ── Helpers ──────────────────────────────────────────────────

fn start_editing(app: &mut App, focus: Focus) {
    app.focus = focus;
    app.input_mode = if focus.is_field() {
        InputMode::Editing
    } else {
        InputMode::Normal
    };
}

fn move_down(app: &mut App) {
    app.items_cursor.down(app.state.items.len(), app.visible_rows);
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tui_tests;
