#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::parse::parse_amount;
use super::*;

fn setup() -> (BudgetState, Database) {
    (BudgetState::default(), Database::open_in_memory().unwrap())
}

// ── Parsing ───────────────────────────────────────────────────

#[test]
fn test_parse_amount() {
    assert_eq!(parse_amount("3.50"), Some(dec!(3.50)));
    assert_eq!(parse_amount("  12 "), Some(dec!(12)));
    assert_eq!(parse_amount("-3"), Some(dec!(-3)));
    assert_eq!(parse_amount("1e3"), Some(dec!(1000)));
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("   "), None);
    assert_eq!(parse_amount("abc"), None);
}

#[test]
fn test_parse_budget_coerces_garbage_to_zero() {
    assert_eq!(parse_budget("250"), dec!(250));
    assert_eq!(parse_budget(""), Decimal::ZERO);
    assert_eq!(parse_budget("lots"), Decimal::ZERO);
    assert_eq!(parse_budget("-"), Decimal::ZERO);
}

#[test]
fn test_parse_budget_uses_numeric_prefix() {
    assert_eq!(parse_budget("1e"), dec!(1));
    assert_eq!(parse_budget("1e3"), dec!(1000));
    assert_eq!(parse_budget("12abc"), dec!(12));
    assert_eq!(parse_budget("  7.5.1"), dec!(7.5));
}

#[test]
fn test_parse_price_rejects_negative() {
    assert_eq!(parse_price("0"), Some(Decimal::ZERO));
    assert_eq!(parse_price("4.5"), Some(dec!(4.5)));
    assert_eq!(parse_price("-0.01"), None);
    assert_eq!(parse_price("x"), None);
}

#[test]
fn test_numeric_chars() {
    for c in "0123456789.-+eE".chars() {
        assert!(is_numeric_char(c), "{c} should be accepted");
    }
    for c in "a$, _".chars() {
        assert!(!is_numeric_char(c), "{c} should be rejected");
    }
}

// ── setBudget ─────────────────────────────────────────────────

#[test]
fn test_set_budget_persists() {
    let (mut state, db) = setup();
    let stored = set_budget(&mut state, &db, "150.25").unwrap();
    assert_eq!(stored, dec!(150.25));
    assert_eq!(db.load_state().budget, dec!(150.25));
}

#[test]
fn test_set_budget_non_numeric_is_zero() {
    let (mut state, db) = setup();
    set_budget(&mut state, &db, "100").unwrap();
    set_budget(&mut state, &db, "abc").unwrap();
    assert_eq!(state.budget, Decimal::ZERO);
    assert_eq!(db.load_state().budget, Decimal::ZERO);
}

#[test]
fn test_set_budget_negative_floored() {
    let (mut state, db) = setup();
    assert_eq!(set_budget(&mut state, &db, "-40").unwrap(), Decimal::ZERO);
}

// ── addItem ───────────────────────────────────────────────────

#[test]
fn test_add_item_blank_fields_are_noops() {
    let (mut state, db) = setup();
    assert!(add_item(&mut state, &db, "", "5").unwrap().is_none());
    assert!(add_item(&mut state, &db, "   ", "5").unwrap().is_none());
    assert!(add_item(&mut state, &db, "Milk", "").unwrap().is_none());
    assert!(add_item(&mut state, &db, "Milk", "  ").unwrap().is_none());
    assert!(state.items.is_empty());
    assert!(db.try_load_state().unwrap().is_none());
}

#[test]
fn test_add_item_bad_price_is_noop() {
    let (mut state, db) = setup();
    assert!(add_item(&mut state, &db, "Milk", "-3").unwrap().is_none());
    assert!(add_item(&mut state, &db, "Milk", "three").unwrap().is_none());
    assert!(state.items.is_empty());
}

#[test]
fn test_add_item_appends_one() {
    let (mut state, db) = setup();
    let added = add_item(&mut state, &db, "  Milk ", "3.50").unwrap().unwrap();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0], added);
    assert_eq!(added.name, "Milk");
    assert_eq!(added.price, dec!(3.50));
    assert_eq!(db.load_state().items, state.items);
}

#[test]
fn test_add_item_that_would_overflow_total_is_noop() {
    let (mut state, db) = setup();
    set_budget(&mut state, &db, "100").unwrap();
    let huge = "50000000000000000000000000000";
    assert!(add_item(&mut state, &db, "Car", huge).unwrap().is_some());
    assert!(add_item(&mut state, &db, "Boat", huge).unwrap().is_none());
    assert_eq!(state.items.len(), 1);

    let reloaded = db.load_state();
    assert_eq!(reloaded.items.len(), 1);
    let summary = Summary::of(&reloaded);
    assert!(summary.is_over_budget);
    assert_eq!(summary.progress_label, 999);
    assert_eq!(summary.progress_ratio, 1.0);
}

#[test]
fn test_add_free_item() {
    let (mut state, db) = setup();
    assert!(add_item(&mut state, &db, "Sample", "0").unwrap().is_some());
    assert_eq!(state.total_spent(), Decimal::ZERO);
}

// ── deleteItem ────────────────────────────────────────────────

#[test]
fn test_delete_item() {
    let (mut state, db) = setup();
    let bread = add_item(&mut state, &db, "Bread", "4.50").unwrap().unwrap();
    let milk = add_item(&mut state, &db, "Milk", "3.25").unwrap().unwrap();

    let removed = delete_item(&mut state, &db, &bread.id).unwrap().unwrap();
    assert_eq!(removed.id, bread.id);
    assert_eq!(state.items, vec![milk]);
    assert_eq!(db.load_state().items, state.items);
}

#[test]
fn test_delete_unknown_id_leaves_items() {
    let (mut state, db) = setup();
    add_item(&mut state, &db, "Bread", "4.50").unwrap();
    let before = state.items.clone();
    assert!(delete_item(&mut state, &db, "missing").unwrap().is_none());
    assert_eq!(state.items, before);
}

#[test]
fn test_add_delete_sequence_keeps_order_and_unique_ids() {
    let (mut state, db) = setup();
    let mut expected: Vec<String> = Vec::new();
    for i in 0..20 {
        let it = add_item(&mut state, &db, &format!("item {i}"), &format!("{i}.10"))
            .unwrap()
            .unwrap();
        expected.push(it.id);
        if i % 3 == 2 {
            let victim = expected.remove(expected.len() / 2);
            delete_item(&mut state, &db, &victim).unwrap();
        }
    }
    let ids: Vec<String> = state.items.iter().map(|i| i.id.clone()).collect();
    assert_eq!(ids, expected);

    let unique: std::collections::HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());

    let sum: Decimal = state.items.iter().map(|i| i.price).sum();
    let summary = Summary::of(&state);
    assert_eq!(summary.total_spent, sum);
    assert_eq!(summary.remaining, state.budget - sum);
}

// ── Summary ───────────────────────────────────────────────────

#[test]
fn test_summary_empty() {
    let summary = Summary::of(&BudgetState::default());
    assert_eq!(summary.total_spent, Decimal::ZERO);
    assert_eq!(summary.remaining, Decimal::ZERO);
    assert!(!summary.is_over_budget);
    assert_eq!(summary.progress_label, 0);
    assert_eq!(summary.progress_ratio, 0.0);
    assert_eq!(summary.item_count_label(), "0 items");
    assert!(summary.over_budget_by().is_none());
}

#[test]
fn test_summary_groceries_scenario() {
    let (mut state, db) = setup();
    set_budget(&mut state, &db, "100").unwrap();
    add_item(&mut state, &db, "Bread", "4.50").unwrap();
    add_item(&mut state, &db, "Milk", "3.25").unwrap();

    let summary = Summary::of(&state);
    assert_eq!(summary.total_spent, dec!(7.75));
    assert_eq!(summary.remaining, dec!(92.25));
    assert!(!summary.is_over_budget);
    assert_eq!(summary.progress_label, 8);
    assert!((summary.progress_ratio - 0.0775).abs() < 1e-9);
    assert_eq!(summary.item_count_label(), "2 items");
}

#[test]
fn test_summary_over_budget_scenario() {
    let (mut state, db) = setup();
    set_budget(&mut state, &db, "10").unwrap();
    add_item(&mut state, &db, "Gift", "15.00").unwrap();

    let summary = Summary::of(&state);
    assert_eq!(summary.total_spent, dec!(15.00));
    assert_eq!(summary.remaining, dec!(-5.00));
    assert!(summary.is_over_budget);
    assert_eq!(summary.over_budget_by(), Some(dec!(5.00)));
    assert_eq!(summary.progress_label, 150);
    assert_eq!(summary.progress_ratio, 1.0);
    assert_eq!(summary.item_count_label(), "1 item");
}

#[test]
fn test_summary_zero_budget_shows_zero_progress() {
    let (mut state, db) = setup();
    add_item(&mut state, &db, "Coffee", "4").unwrap();
    let summary = Summary::of(&state);
    assert_eq!(summary.progress_label, 0);
    assert_eq!(summary.progress_ratio, 0.0);
    assert!(summary.is_over_budget);
    assert_eq!(summary.remaining, dec!(-4));
}

#[test]
fn test_summary_progress_label_capped() {
    let (mut state, db) = setup();
    set_budget(&mut state, &db, "1").unwrap();
    add_item(&mut state, &db, "Car", "25000").unwrap();
    let summary = Summary::of(&state);
    assert_eq!(summary.progress_label, 999);
    assert_eq!(summary.progress_ratio, 1.0);
}

#[test]
fn test_summary_progress_rounds_half_up() {
    let (mut state, db) = setup();
    set_budget(&mut state, &db, "200").unwrap();
    add_item(&mut state, &db, "Thing", "1").unwrap();
    // 0.5% rounds to 1
    assert_eq!(Summary::of(&state).progress_label, 1);
}

#[test]
fn test_summary_exactly_on_budget() {
    let (mut state, db) = setup();
    set_budget(&mut state, &db, "20").unwrap();
    add_item(&mut state, &db, "Shoes", "20").unwrap();
    let summary = Summary::of(&state);
    assert_eq!(summary.remaining, Decimal::ZERO);
    assert!(!summary.is_over_budget);
    assert_eq!(summary.progress_label, 100);
}
