// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;

use crate::api::ExpenseBackend;
use crate::models::Expense;
use crate::store::ExpenseStore;

/// Column order matches the spreadsheet the web client downloads.
const HEADERS: [&str; 9] = [
    "Date",
    "Title",
    "Category",
    "Amount",
    "Currency",
    "Converted Amount (INR)",
    "Payment Mode",
    "Notes",
    "Created At",
];

pub fn default_filename(prefix: &str, ext: &str) -> String {
    format!("{}_{}.{}", prefix, Utc::now().date_naive(), ext)
}

pub fn export_csv(expenses: &[Expense], out: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(HEADERS)?;
    for e in expenses {
        wtr.write_record([
            e.date.to_string(),
            e.title.clone(),
            e.category.clone(),
            e.amount.to_string(),
            e.currency.as_str().to_string(),
            e.converted_amount
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            e.payment_mode.clone().unwrap_or_else(|| "-".to_string()),
            e.notes.clone().unwrap_or_else(|| "-".to_string()),
            e.created_at.to_rfc3339(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_json(expenses: &[Expense], out: &Path) -> Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(expenses)?)?;
    Ok(())
}

pub fn handle<B: ExpenseBackend>(store: &ExpenseStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let prefix = sub.get_one::<String>("prefix").unwrap();
    let out = match sub.get_one::<String>("out") {
        Some(o) => o.clone(),
        None => default_filename(prefix, &fmt),
    };

    store.ensure_loaded()?;
    let expenses = store.expenses();

    match fmt.as_str() {
        "csv" => export_csv(&expenses, Path::new(&out))?,
        "json" => export_json(&expenses, Path::new(&out))?,
        _ => anyhow::bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} expenses to {}", expenses.len(), out);
    Ok(())
}
