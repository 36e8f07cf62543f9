use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Database;
use crate::models::{BudgetState, ExpenseItem};

/// Storage slot holding the whole tracker state as one JSON record.
pub(crate) const STATE_KEY: &str = "budget_state";

#[derive(Debug, thiserror::Error)]
pub(crate) enum LoadError {
    #[error("failed to read saved data: {0}")]
    Read(#[from] rusqlite::Error),
    #[error("saved data is not a valid budget record: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Shape of the record as read back. Both fields tolerate being absent or
/// `null`; unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct StoredRecord {
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    budget: Option<Decimal>,
    #[serde(default)]
    items: Option<Vec<ExpenseItem>>,
}

#[derive(Serialize)]
struct RecordRef<'a> {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    budget: Decimal,
    items: &'a [ExpenseItem],
}

impl StoredRecord {
    fn into_state(self) -> BudgetState {
        let mut state = BudgetState::default();

        let budget = self.budget.unwrap_or_default();
        if budget < Decimal::ZERO {
            tracing::warn!(%budget, "saved budget is negative, using 0");
        }
        state.set_budget(budget);

        for item in self.items.unwrap_or_default() {
            let id = item.id.clone();
            if !state.push_item(item) {
                tracing::warn!(id = %id, "discarding invalid, duplicate or overflowing saved item");
            }
        }
        state
    }
}

/// Serialize `state` into the persisted record format.
pub(crate) fn encode_state(state: &BudgetState) -> serde_json::Result<String> {
    serde_json::to_string(&RecordRef {
        budget: state.budget,
        items: &state.items,
    })
}

/// Parse a persisted record. Individual items that break the item rules are
/// dropped rather than failing the whole record.
pub(crate) fn decode_state(raw: &str) -> Result<BudgetState, serde_json::Error> {
    let record: StoredRecord = serde_json::from_str(raw)?;
    Ok(record.into_state())
}

impl Database {
    /// Read the saved state. `Ok(None)` means nothing has been saved yet.
    pub(crate) fn try_load_state(&self) -> Result<Option<BudgetState>, LoadError> {
        let Some(raw) = self.get_item(STATE_KEY)? else {
            return Ok(None);
        };
        Ok(Some(decode_state(&raw)?))
    }

    /// Read the saved state, falling back to an empty tracker when there is
    /// none or it cannot be read.
    pub(crate) fn load_state(&self) -> BudgetState {
        match self.try_load_state() {
            Ok(Some(state)) => {
                tracing::info!(
                    budget = %state.budget,
                    items = state.items.len(),
                    "loaded saved data"
                );
                state
            }
            Ok(None) => {
                tracing::info!("no saved data, starting fresh");
                BudgetState::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "error loading saved data, starting fresh");
                BudgetState::default()
            }
        }
    }

    /// Overwrite the storage slot with `state`.
    pub(crate) fn save_state(&self, state: &BudgetState) -> Result<()> {
        let raw = encode_state(state)?;
        self.set_item(STATE_KEY, &raw)?;
        tracing::debug!(bytes = raw.len(), items = state.items.len(), "state saved");
        Ok(())
    }
}
