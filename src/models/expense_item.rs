use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ExpenseItem {
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub(crate) price: Decimal,
}

impl ExpenseItem {
    /// Build an item with a freshly generated id. `name` is stored trimmed.
    pub(crate) fn new(name: &str, price: Decimal) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            price,
        }
    }

    /// Items loaded from storage must satisfy the same rules as items
    /// created through the form.
    pub(crate) fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.name.trim().is_empty() && self.price >= Decimal::ZERO
    }
}

impl std::fmt::Display for ExpenseItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
