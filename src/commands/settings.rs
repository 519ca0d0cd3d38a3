// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::settings::SettingsStore;
use crate::utils::{maybe_print_json, parse_currency, parse_decimal, pretty_table};

pub fn handle(settings: &SettingsStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(settings, sub)?,
        Some(("set", sub)) => set(settings, sub)?,
        _ => print_table(settings)?,
    }
    Ok(())
}

fn show(settings: &SettingsStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let cfg = settings.load();
    if maybe_print_json(json_flag, jsonl_flag, &cfg)? {
        return Ok(());
    }
    print_table(settings)
}

fn print_table(settings: &SettingsStore) -> Result<()> {
    let cfg = settings.load();
    let data = vec![
        vec!["Monthly income".to_string(), cfg.monthly_income.to_string()],
        vec!["Monthly budget".to_string(), cfg.monthly_budget.to_string()],
        vec![
            "Default currency".to_string(),
            cfg.default_currency.to_string(),
        ],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], data));
    Ok(())
}

/// Reads the current record, overlays the provided flags, then saves the
/// whole record back. The save broadcasts to any in-process subscriber.
fn set(settings: &SettingsStore, sub: &clap::ArgMatches) -> Result<()> {
    let mut cfg = settings.load();
    if let Some(v) = sub.get_one::<String>("monthly-income") {
        cfg.monthly_income = parse_decimal(v)?;
    }
    if let Some(v) = sub.get_one::<String>("monthly-budget") {
        cfg.monthly_budget = parse_decimal(v)?;
    }
    if let Some(v) = sub.get_one::<String>("default-currency") {
        cfg.default_currency = parse_currency(v)?;
    }
    settings.save(&cfg);
    println!(
        "Settings saved: income {}, budget {}, default currency {}",
        cfg.monthly_income, cfg.monthly_budget, cfg.default_currency
    );
    Ok(())
}
