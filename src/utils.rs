// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::models::Currency;

/// Fixed category vocabulary with the glyph each entry carries. Custom
/// categories are allowed anywhere a category is accepted; they get the
/// fallback glyph.
pub static CATEGORIES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("Food & Drinks", "🍕"),
        ("Shopping", "🛍️"),
        ("Housing", "🏠"),
        ("Transportation", "🚗"),
        ("Vehicle", "🚙"),
        ("Life & Entertainment", "🎬"),
        ("Communication & Internet", "📱"),
        ("Investments", "📈"),
        ("Financial Expenses", "💳"),
        ("Others", "📦"),
    ]
});

pub fn icon_for_category(category: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, icon)| *icon)
        .unwrap_or("📦")
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// A month argument becomes the first day of that month, which is all the
/// aggregation functions need as a reference date.
pub fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_currency(s: &str) -> Result<Currency> {
    s.parse::<Currency>()
        .with_context(|| format!("Invalid currency '{}'", s))
}

pub fn fmt_money(d: &Decimal, ccy: Currency) -> String {
    format!("{}{}", ccy.symbol(), d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
