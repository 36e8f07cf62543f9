use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::BudgetState;

/// Upper bound of the numeric usage label.
pub(crate) const PROGRESS_LABEL_CAP: i64 = 999;

/// Values derived from a `BudgetState`. Never stored; rebuild it whenever the
/// state may have changed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Summary {
    pub(crate) budget: Decimal,
    pub(crate) total_spent: Decimal,
    pub(crate) remaining: Decimal,
    pub(crate) is_over_budget: bool,
    pub(crate) item_count: usize,
    /// Rounded percentage of the budget used, capped at `PROGRESS_LABEL_CAP`.
    pub(crate) progress_label: i64,
    /// Fill of the usage gauge in `0.0..=1.0`.
    pub(crate) progress_ratio: f64,
}

impl Summary {
    pub(crate) fn of(state: &BudgetState) -> Self {
        let total_spent = state.total_spent();
        let remaining = state.budget - total_spent;
        let (progress_label, progress_ratio) = progress(state.budget, total_spent);

        Self {
            budget: state.budget,
            total_spent,
            remaining,
            is_over_budget: remaining < Decimal::ZERO,
            item_count: state.items.len(),
            progress_label,
            progress_ratio,
        }
    }

    /// How far spending exceeds the budget, if it does.
    pub(crate) fn over_budget_by(&self) -> Option<Decimal> {
        self.is_over_budget.then(|| self.remaining.abs())
    }

    /// "1 item", "3 items".
    pub(crate) fn item_count_label(&self) -> String {
        let n = self.item_count;
        format!("{n} item{}", if n == 1 { "" } else { "s" })
    }
}

fn progress(budget: Decimal, spent: Decimal) -> (i64, f64) {
    if budget <= Decimal::ZERO {
        return (0, 0.0);
    }
    let Some(ratio) = spent.checked_div(budget) else {
        return (PROGRESS_LABEL_CAP, 1.0);
    };
    let label = ratio
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|pct| {
            pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
                .unwrap_or(PROGRESS_LABEL_CAP)
                .min(PROGRESS_LABEL_CAP)
        })
        .unwrap_or(PROGRESS_LABEL_CAP);
    let fill = ratio.to_f64().unwrap_or(1.0).clamp(0.0, 1.0);
    (label, fill)
}
