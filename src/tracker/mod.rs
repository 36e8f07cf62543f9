//! The three operations the form exposes. Each one mutates the in-memory
//! state first and then rewrites the storage slot, so a failed write still
//! leaves the session state correct.

mod parse;
mod summary;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::db::Database;
use crate::models::{BudgetState, ExpenseItem};

pub(crate) use parse::is_numeric_char;
use parse::{parse_budget, parse_price};
pub(crate) use summary::Summary;

/// Set the budget from raw field text. Unparseable text counts as zero.
/// Returns the amount actually stored.
pub(crate) fn set_budget(state: &mut BudgetState, db: &Database, raw: &str) -> Result<Decimal> {
    state.set_budget(parse_budget(raw));
    tracing::debug!(budget = %state.budget, "budget set");
    db.save_state(state)?;
    Ok(state.budget)
}

/// Add an item from raw form fields. Blank fields, unparseable prices and
/// negative prices are silently ignored (`Ok(None)`).
pub(crate) fn add_item(
    state: &mut BudgetState,
    db: &Database,
    name: &str,
    raw_price: &str,
) -> Result<Option<ExpenseItem>> {
    if name.trim().is_empty() || raw_price.trim().is_empty() {
        return Ok(None);
    }
    let Some(price) = parse_price(raw_price) else {
        return Ok(None);
    };

    let item = ExpenseItem::new(name, price);
    if !state.push_item(item.clone()) {
        return Ok(None);
    }
    tracing::debug!(id = %item.id, name = %item.name, price = %item.price, "item added");
    db.save_state(state)?;
    Ok(Some(item))
}

/// Remove the item with `id`. Unknown ids are not an error.
pub(crate) fn delete_item(
    state: &mut BudgetState,
    db: &Database,
    id: &str,
) -> Result<Option<ExpenseItem>> {
    let Some(removed) = state.remove_item(id) else {
        return Ok(None);
    };
    tracing::debug!(id = %removed.id, name = %removed.name, "item deleted");
    db.save_state(state)?;
    Ok(Some(removed))
}

#[cfg(test)]
mod tests;
