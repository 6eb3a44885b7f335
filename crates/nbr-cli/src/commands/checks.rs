//! `nbr checks` — print the standard checklist.

use anyhow::{Context, Result};
use nbr_engine::CheckRegistry;

pub fn run(json: bool) -> Result<()> {
    let registry = nbr_engine::standard_registry().context("build standard checklist")?;
    if json {
        print_json(&registry)
    } else {
        print_table(&registry);
        Ok(())
    }
}

fn print_table(registry: &CheckRegistry) {
    for def in registry.iter() {
        let historic = def.historic_fields().join("+");
        let modern = def.modern_fields().join("+");
        println!(
            "{:<6} {:<14} {:<28} {:<28} {}",
            def.id,
            def.kind(),
            dashed_if_empty(&historic),
            dashed_if_empty(&modern),
            def.title,
        );
    }
    println!("checks={}", registry.len());
}

fn print_json(registry: &CheckRegistry) -> Result<()> {
    let defs: Vec<_> = registry.iter().collect();
    let out = serde_json::to_string_pretty(&defs).context("serialise checklist")?;
    println!("{out}");
    Ok(())
}

fn dashed_if_empty(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
