use rust_decimal::Decimal;

use super::ExpenseItem;

/// Everything the tracker remembers between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BudgetState {
    pub(crate) budget: Decimal,
    pub(crate) items: Vec<ExpenseItem>,
}

impl BudgetState {
    /// Replace the budget. Negative amounts are floored at zero.
    pub(crate) fn set_budget(&mut self, amount: Decimal) {
        self.budget = amount.max(Decimal::ZERO);
    }

    /// Append an item. Returns `false` (and leaves the list alone) when the
    /// item is invalid, its id is already taken, or its price would push the
    /// total past what a `Decimal` can hold.
    pub(crate) fn push_item(&mut self, item: ExpenseItem) -> bool {
        if !item.is_valid() || self.find_item(&item.id).is_some() {
            return false;
        }
        if self
            .checked_total()
            .and_then(|total| total.checked_add(item.price))
            .is_none()
        {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the item with `id`, returning it if it was present.
    pub(crate) fn remove_item(&mut self, id: &str) -> Option<ExpenseItem> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(pos))
    }

    pub(crate) fn find_item(&self, id: &str) -> Option<&ExpenseItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Find the single item whose id starts with `prefix`. Ambiguous or
    /// empty prefixes match nothing.
    pub(crate) fn find_by_id_prefix(&self, prefix: &str) -> Option<&ExpenseItem> {
        if prefix.is_empty() {
            return None;
        }
        if let Some(exact) = self.find_item(prefix) {
            return Some(exact);
        }
        let mut matches = self.items.iter().filter(|i| i.id.starts_with(prefix));
        let first = matches.next()?;
        match matches.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    /// Sum of all prices. `push_item` keeps this from overflowing; a list
    /// built some other way saturates at `Decimal::MAX`.
    pub(crate) fn total_spent(&self) -> Decimal {
        self.checked_total().unwrap_or(Decimal::MAX)
    }

    fn checked_total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, i| acc.checked_add(i.price))
    }
}
