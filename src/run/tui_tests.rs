#![allow(clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal_macros::dec;

use super::handle_key;
use crate::db::Database;
use crate::models::BudgetState;
use crate::ui::app::{App, Focus, InputMode};

fn setup() -> (App, Database) {
    (
        App::new(BudgetState::default()),
        Database::open_in_memory().unwrap(),
    )
}

fn press(app: &mut App, db: &mut Database, code: KeyCode) {
    handle_key(KeyEvent::new(code, KeyModifiers::NONE), app, db).unwrap();
}

fn ctrl(app: &mut App, db: &mut Database, c: char) {
    handle_key(
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL),
        app,
        db,
    )
    .unwrap();
}

fn type_text(app: &mut App, db: &mut Database, text: &str) {
    for c in text.chars() {
        press(app, db, KeyCode::Char(c));
    }
}

fn add_via_form(app: &mut App, db: &mut Database, name: &str, price: &str) {
    press(app, db, KeyCode::Char('a'));
    type_text(app, db, name);
    press(app, db, KeyCode::Enter);
    type_text(app, db, price);
    press(app, db, KeyCode::Enter);
}

#[test]
fn test_budget_updates_on_every_keystroke() {
    let (mut app, mut db) = setup();
    press(&mut app, &mut db, KeyCode::Char('b'));
    assert_eq!(app.input_mode, InputMode::Editing);

    type_text(&mut app, &mut db, "10");
    assert_eq!(app.state.budget, dec!(10));
    press(&mut app, &mut db, KeyCode::Char('0'));
    assert_eq!(app.state.budget, dec!(100));
    assert_eq!(db.load_state().budget, dec!(100));

    press(&mut app, &mut db, KeyCode::Backspace);
    assert_eq!(app.state.budget, dec!(10));
}

#[test]
fn test_budget_keeps_value_while_exponent_is_typed() {
    let (mut app, mut db) = setup();
    press(&mut app, &mut db, KeyCode::Char('b'));
    type_text(&mut app, &mut db, "1e");
    assert_eq!(app.state.budget, dec!(1));
    assert_eq!(db.load_state().budget, dec!(1));
    press(&mut app, &mut db, KeyCode::Char('3'));
    assert_eq!(app.state.budget, dec!(1000));
}

#[test]
fn test_clearing_budget_field_stores_zero() {
    let (mut app, mut db) = setup();
    press(&mut app, &mut db, KeyCode::Char('b'));
    type_text(&mut app, &mut db, "5");
    press(&mut app, &mut db, KeyCode::Backspace);
    assert_eq!(app.state.budget, dec!(0));
    assert!(app.budget_input.is_empty());
}

#[test]
fn test_numeric_fields_reject_letters() {
    let (mut app, mut db) = setup();
    press(&mut app, &mut db, KeyCode::Char('b'));
    type_text(&mut app, &mut db, "1x2");
    assert_eq!(app.budget_input, "12");

    press(&mut app, &mut db, KeyCode::Tab);
    assert_eq!(app.focus, Focus::ItemName);
    type_text(&mut app, &mut db, "Milk 2");
    assert_eq!(app.item_name_input, "Milk 2");
}

#[test]
fn test_form_enter_moves_to_price_then_adds() {
    let (mut app, mut db) = setup();
    press(&mut app, &mut db, KeyCode::Char('a'));
    type_text(&mut app, &mut db, "Bread");
    press(&mut app, &mut db, KeyCode::Enter);
    assert_eq!(app.focus, Focus::ItemPrice);
    assert!(app.state.items.is_empty());

    type_text(&mut app, &mut db, "4.50");
    press(&mut app, &mut db, KeyCode::Enter);

    assert_eq!(app.state.items.len(), 1);
    assert_eq!(app.state.items[0].name, "Bread");
    assert_eq!(app.state.items[0].price, dec!(4.50));
    assert_eq!(app.focus, Focus::ItemName);
    assert!(app.item_name_input.is_empty());
    assert!(app.item_price_input.is_empty());
    assert_eq!(db.load_state().items.len(), 1);
}

#[test]
fn test_form_with_blank_name_adds_nothing() {
    let (mut app, mut db) = setup();
    add_via_form(&mut app, &mut db, "   ", "3");
    assert!(app.state.items.is_empty());
    assert_eq!(app.item_price_input, "3");
}

#[test]
fn test_delete_asks_then_removes() {
    let (mut app, mut db) = setup();
    add_via_form(&mut app, &mut db, "Bread", "4.50");
    add_via_form(&mut app, &mut db, "Milk", "3.25");
    press(&mut app, &mut db, KeyCode::Esc);

    press(&mut app, &mut db, KeyCode::Char('g'));
    press(&mut app, &mut db, KeyCode::Char('D'));
    assert_eq!(app.input_mode, InputMode::Confirm);
    assert_eq!(app.confirm_message, "Delete 'Bread'?");

    press(&mut app, &mut db, KeyCode::Char('y'));
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.state.items.len(), 1);
    assert_eq!(app.state.items[0].name, "Milk");
    assert_eq!(db.load_state().items.len(), 1);
}

#[test]
fn test_delete_cancelled_keeps_item() {
    let (mut app, mut db) = setup();
    add_via_form(&mut app, &mut db, "Bread", "4.50");
    press(&mut app, &mut db, KeyCode::Esc);

    press(&mut app, &mut db, KeyCode::Delete);
    press(&mut app, &mut db, KeyCode::Char('n'));
    assert_eq!(app.state.items.len(), 1);
    assert_eq!(app.status_message, "Cancelled");
    assert!(app.pending_action.is_none());
}

#[test]
fn test_tab_cycles_focus() {
    let (mut app, mut db) = setup();
    assert_eq!(app.focus, Focus::Budget);
    press(&mut app, &mut db, KeyCode::Tab);
    press(&mut app, &mut db, KeyCode::Tab);
    press(&mut app, &mut db, KeyCode::Tab);
    assert_eq!(app.focus, Focus::ItemList);
    press(&mut app, &mut db, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Budget);
    press(&mut app, &mut db, KeyCode::BackTab);
    assert_eq!(app.focus, Focus::ItemList);
}

#[test]
fn test_command_mode_runs_command() {
    let (mut app, mut db) = setup();
    press(&mut app, &mut db, KeyCode::Char(':'));
    assert_eq!(app.input_mode, InputMode::Command);
    type_text(&mut app, &mut db, "add Eggs 2.99");
    press(&mut app, &mut db, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.state.items[0].name, "Eggs");
}

#[test]
fn test_help_closes_on_any_key() {
    let (mut app, mut db) = setup();
    press(&mut app, &mut db, KeyCode::Char('?'));
    assert!(app.show_help);
    press(&mut app, &mut db, KeyCode::Char('b'));
    assert!(!app.show_help);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_ctrl_q_quits_from_any_mode() {
    let (mut app, mut db) = setup();
    press(&mut app, &mut db, KeyCode::Char('a'));
    ctrl(&mut app, &mut db, 'q');
    assert!(!app.running);

    let (mut app, mut db) = setup();
    ctrl(&mut app, &mut db, 'c');
    assert!(!app.running);
}
