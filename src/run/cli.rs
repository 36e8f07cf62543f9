use anyhow::Result;
use std::io::{self, Write};

use crate::db::Database;
use crate::tracker::{self, Summary};
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], db: &mut Database) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(args, db, &mut out)
}

pub(crate) fn run(args: &[String], db: &mut Database, out: &mut dyn Write) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(db, out),
        "list" | "ls" => cli_list(db, out),
        "budget" => cli_budget(&args[2..], db, out),
        "add" => cli_add(&args[2..], db, out),
        "rm" | "delete" => cli_rm(&args[2..], db, out),
        "--help" | "-h" | "help" => print_usage(out),
        "--version" | "-V" | "version" => {
            writeln!(out, "budgetform {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        other => {
            print_usage(out)?;
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "BudgetForm - local-only budget and shopping list tracker")?;
    writeln!(out)?;
    writeln!(out, "Usage: budgetform [--data-dir <path>] [command]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  (none)                        Launch interactive TUI")?;
    writeln!(out, "  summary                       Print budget, spending and usage")?;
    writeln!(out, "  list                          List items with their ids")?;
    writeln!(out, "  budget <amount>               Set the total budget")?;
    writeln!(out, "  add <name...> <price>         Add an item")?;
    writeln!(out, "  rm <id>                       Delete an item (id or unique id prefix)")?;
    writeln!(out, "  --help, -h                    Show this help")?;
    writeln!(out, "  --version, -V                 Show version")?;
    Ok(())
}

fn cli_summary(db: &Database, out: &mut dyn Write) -> Result<()> {
    let state = db.load_state();
    let summary = Summary::of(&state);

    writeln!(out, "BudgetForm")?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(out, "  Budget:       {}", format_amount(summary.budget))?;
    writeln!(
        out,
        "  Total Spent:  {} ({})",
        format_amount(summary.total_spent),
        summary.item_count_label()
    )?;
    match summary.over_budget_by() {
        Some(over) => writeln!(out, "  Over Budget:  {}", format_amount(over))?,
        None => writeln!(out, "  Remaining:    {}", format_amount(summary.remaining))?,
    }
    writeln!(out, "  Usage:        {}%", summary.progress_label)?;
    Ok(())
}

fn cli_list(db: &Database, out: &mut dyn Write) -> Result<()> {
    let state = db.load_state();
    if state.items.is_empty() {
        writeln!(out, "No items")?;
        return Ok(());
    }

    writeln!(out, "{:<10} {:<28} {:>12}", "ID", "Name", "Price")?;
    writeln!(out, "{}", "─".repeat(52))?;
    for item in &state.items {
        let short_id: String = item.id.chars().take(8).collect();
        writeln!(
            out,
            "{:<10} {:<28} {:>12}",
            short_id,
            crate::ui::util::truncate(&item.name, 28),
            format_amount(item.price),
        )?;
    }
    Ok(())
}

fn cli_budget(args: &[String], db: &mut Database, out: &mut dyn Write) -> Result<()> {
    let Some(raw) = args.first() else {
        anyhow::bail!("Usage: budgetform budget <amount>");
    };
    let mut state = db.load_state();
    let stored = tracker::set_budget(&mut state, db, raw)?;
    writeln!(out, "Budget set to {}", format_amount(stored))?;
    Ok(())
}

fn cli_add(args: &[String], db: &mut Database, out: &mut dyn Write) -> Result<()> {
    let Some((price, name_parts)) = args.split_last() else {
        anyhow::bail!("Usage: budgetform add <name...> <price>");
    };
    let name = name_parts.join(" ");
    let mut state = db.load_state();
    match tracker::add_item(&mut state, db, &name, price)? {
        Some(item) => writeln!(
            out,
            "Added {} ({}) [{}]",
            item.name,
            format_amount(item.price),
            item.id
        )?,
        None => writeln!(out, "Nothing added")?,
    }
    Ok(())
}

fn cli_rm(args: &[String], db: &mut Database, out: &mut dyn Write) -> Result<()> {
    let Some(prefix) = args.first() else {
        anyhow::bail!("Usage: budgetform rm <id>");
    };
    let mut state = db.load_state();
    let Some(id) = state.find_by_id_prefix(prefix).map(|i| i.id.clone()) else {
        writeln!(out, "No single item matches id '{prefix}'")?;
        return Ok(());
    };
    if let Some(removed) = tracker::delete_item(&mut state, db, &id)? {
        writeln!(out, "Deleted {removed}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use rust_decimal_macros::dec;

    fn run_args(db: &mut Database, args: &[&str]) -> String {
        let mut argv = vec!["budgetform".to_string()];
        argv.extend(args.iter().map(|s| s.to_string()));
        let mut out = Vec::new();
        run(&argv, db, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_budget_and_add_then_summary() {
        let mut db = Database::open_in_memory().unwrap();
        run_args(&mut db, &["budget", "100"]);
        run_args(&mut db, &["add", "Bread", "4.50"]);
        run_args(&mut db, &["add", "Oat", "milk", "3.25"]);

        let state = db.load_state();
        assert_eq!(state.budget, dec!(100));
        assert_eq!(state.items[1].name, "Oat milk");

        let text = run_args(&mut db, &["summary"]);
        assert!(text.contains("Total Spent:  $7.75 (2 items)"));
        assert!(text.contains("Remaining:    $92.25"));
        assert!(text.contains("Usage:        8%"));
    }

    #[test]
    fn test_summary_over_budget() {
        let mut db = Database::open_in_memory().unwrap();
        run_args(&mut db, &["budget", "10"]);
        run_args(&mut db, &["add", "Gift", "15.00"]);
        let text = run_args(&mut db, &["summary"]);
        assert!(text.contains("Over Budget:  $5.00"));
        assert!(text.contains("Usage:        150%"));
    }

    #[test]
    fn test_add_invalid_price_adds_nothing() {
        let mut db = Database::open_in_memory().unwrap();
        let text = run_args(&mut db, &["add", "Milk", "-3"]);
        assert_eq!(text.trim(), "Nothing added");
        assert!(db.load_state().items.is_empty());
    }

    #[test]
    fn test_list_and_rm_by_prefix() {
        let mut db = Database::open_in_memory().unwrap();
        run_args(&mut db, &["add", "Bread", "4.50"]);
        let id = db.load_state().items[0].id.clone();

        let listing = run_args(&mut db, &["list"]);
        assert!(listing.contains(&id[..8]));
        assert!(listing.contains("Bread"));

        let text = run_args(&mut db, &["rm", &id[..8]]);
        assert_eq!(text.trim(), "Deleted Bread");
        assert!(db.load_state().items.is_empty());
        assert_eq!(run_args(&mut db, &["list"]).trim(), "No items");
    }

    #[test]
    fn test_rm_unknown_id() {
        let mut db = Database::open_in_memory().unwrap();
        let text = run_args(&mut db, &["rm", "nope"]);
        assert!(text.contains("No single item matches"));
    }

    #[test]
    fn test_unknown_command_errors() {
        let mut db = Database::open_in_memory().unwrap();
        let argv = vec!["budgetform".to_string(), "frobnicate".to_string()];
        let mut out = Vec::new();
        assert!(run(&argv, &mut db, &mut out).is_err());
    }

    #[test]
    fn test_missing_arguments_error() {
        let mut db = Database::open_in_memory().unwrap();
        for cmd in ["budget", "add", "rm"] {
            let argv = vec!["budgetform".to_string(), cmd.to_string()];
            let mut out = Vec::new();
            assert!(run(&argv, &mut db, &mut out).is_err(), "{cmd} without args");
        }
    }
}
