use anyhow::Result;

use crate::db::Database;
use crate::models::{BudgetState, ExpenseItem};
use crate::tracker::{self, Summary};
use crate::ui::util::{format_amount, ListCursor};

/// Which part of the form receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Budget,
    ItemName,
    ItemPrice,
    ItemList,
}

impl Focus {
    pub(crate) fn all() -> &'static [Focus] {
        &[Self::Budget, Self::ItemName, Self::ItemPrice, Self::ItemList]
    }

    pub(crate) fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub(crate) fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }

    /// Text fields can be edited; the item list cannot.
    pub(crate) fn is_field(self) -> bool {
        !matches!(self, Self::ItemList)
    }

    pub(crate) fn is_numeric(self) -> bool {
        matches!(self, Self::Budget | Self::ItemPrice)
    }
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Budget => write!(f, "Budget"),
            Self::ItemName => write!(f, "Item Name"),
            Self::ItemPrice => write!(f, "Price"),
            Self::ItemList => write!(f, "Items"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteItem { id: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) focus: Focus,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) state: BudgetState,

    // Form fields
    pub(crate) budget_input: String,
    pub(crate) item_name_input: String,
    pub(crate) item_price_input: String,

    pub(crate) items_cursor: ListCursor,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(state: BudgetState) -> Self {
        // An empty field stands for a zero budget.
        let budget_input = if state.budget.is_zero() {
            String::new()
        } else {
            state.budget.normalize().to_string()
        };

        Self {
            running: true,
            input_mode: InputMode::Normal,
            focus: Focus::Budget,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            state,

            budget_input,
            item_name_input: String::new(),
            item_price_input: String::new(),

            items_cursor: ListCursor::default(),

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 5,
        }
    }

    pub(crate) fn summary(&self) -> Summary {
        Summary::of(&self.state)
    }

    pub(crate) fn selected_item(&self) -> Option<&ExpenseItem> {
        self.state.items.get(self.items_cursor.index)
    }

    pub(crate) fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Budget => Some(&mut self.budget_input),
            Focus::ItemName => Some(&mut self.item_name_input),
            Focus::ItemPrice => Some(&mut self.item_price_input),
            Focus::ItemList => None,
        }
    }

    /// Push the budget field's current text into the state.
    pub(crate) fn apply_budget_input(&mut self, db: &Database) {
        let result = tracker::set_budget(&mut self.state, db, &self.budget_input);
        self.check_saved(result);
    }

    /// Set the budget from an amount typed elsewhere (command bar) and mirror
    /// it in the budget field.
    pub(crate) fn set_budget_text(&mut self, raw: &str, db: &Database) {
        self.budget_input = raw.trim().to_string();
        self.apply_budget_input(db);
        let stored = self.state.budget;
        if stored.is_zero() {
            self.budget_input.clear();
        }
        self.set_status(format!("Budget set to {}", format_amount(stored)));
    }

    /// Submit the item form. Returns `true` when an item was added; invalid
    /// input is ignored without a message.
    pub(crate) fn submit_item_form(&mut self, db: &Database) -> bool {
        let name = self.item_name_input.clone();
        let price = self.item_price_input.clone();
        self.add_item(&name, &price, db)
    }

    /// Add an item from raw text. On success the form is cleared and the new
    /// item selected.
    pub(crate) fn add_item(&mut self, name: &str, raw_price: &str, db: &Database) -> bool {
        let before = self.state.items.len();
        let result = tracker::add_item(&mut self.state, db, name, raw_price);
        let saved = self.check_saved(result);
        if self.state.items.len() == before {
            return false;
        }

        self.clear_form();
        self.items_cursor.bottom(self.state.items.len(), self.visible_rows);
        if let Some(Some(item)) = saved {
            self.set_status(format!("Added: {} ({})", item.name, format_amount(item.price)));
        }
        true
    }

    pub(crate) fn delete_item(&mut self, id: &str, db: &Database) {
        let result = tracker::delete_item(&mut self.state, db, id);
        if let Some(Some(removed)) = self.check_saved(result) {
            self.set_status(format!("Deleted: {removed}"));
        }
        self.clamp_selection();
    }

    /// Ask for confirmation before deleting the selected item.
    pub(crate) fn request_delete_selected(&mut self) {
        let Some(item) = self.selected_item() else {
            self.set_status("No item selected");
            return;
        };
        let (id, name) = (item.id.clone(), item.name.clone());
        self.confirm_message = format!("Delete '{name}'?");
        self.pending_action = Some(PendingAction::DeleteItem { id });
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn clear_form(&mut self) {
        self.item_name_input.clear();
        self.item_price_input.clear();
    }

    pub(crate) fn clamp_selection(&mut self) {
        self.items_cursor.clamp(self.state.items.len(), self.visible_rows);
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    /// A failed save leaves the in-memory state as the source of truth for
    /// the rest of the session; the user is told, nothing else changes.
    fn check_saved<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::error!(error = %format!("{e:#}"), "failed to save state");
                self.set_status(format!("Could not save: {e:#}"));
                None
            }
        }
    }
}
