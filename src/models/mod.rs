mod budget_state;
mod expense_item;

pub(crate) use budget_state::BudgetState;
pub(crate) use expense_item::ExpenseItem;
