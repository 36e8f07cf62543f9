use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Focus, InputMode};
use crate::db::Database;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Database) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit BudgetForm", cmd_quit, r);
    register_command!("quit", "Quit BudgetForm", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("budget", "Set budget (e.g. :budget 250)", cmd_budget, r);
    register_command!("b", "Set budget (e.g. :b 250)", cmd_budget, r);
    register_command!("add", "Add item (e.g. :add Milk 3.50)", cmd_add, r);
    register_command!("a", "Add item (e.g. :a Milk 3.50)", cmd_add, r);
    register_command!(
        "delete",
        "Delete selected item, or by id (e.g. :delete 3f2a)",
        cmd_delete,
        r
    );
    register_command!("rm", "Delete selected item, or by id", cmd_delete, r);
    register_command!("clear", "Clear the item form", cmd_clear, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, db)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Split `:add` arguments into name and price. The price is the last word so
/// names may contain spaces.
pub(crate) fn split_name_price(args: &str) -> Option<(&str, &str)> {
    let (name, price) = args.trim().rsplit_once(char::is_whitespace)?;
    Some((name.trim(), price.trim()))
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :budget <amount>");
        return Ok(());
    }
    app.set_budget_text(args, db);
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let Some((name, price)) = split_name_price(args) else {
        app.set_status("Usage: :add <name> <price>");
        return Ok(());
    };
    app.add_item(name, price, db);
    Ok(())
}

fn cmd_delete(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    if args.is_empty() {
        app.focus = Focus::ItemList;
        app.request_delete_selected();
        return Ok(());
    }
    match app.state.find_by_id_prefix(args).map(|i| i.id.clone()) {
        Some(id) => app.delete_item(&id, db),
        None => app.set_status(format!("No single item matches id '{args}'")),
    }
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.clear_form();
    app.focus = Focus::ItemName;
    app.input_mode = InputMode::Normal;
    app.set_status("Form cleared");
    Ok(())
}
