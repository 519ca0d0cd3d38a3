// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::api::ExpenseBackend;
use crate::models::Currency;
use crate::report::{
    budget_status, category_breakdown, daily_totals, total_for_month, CategoryTotal, DailyTotal,
};
use crate::settings::SettingsStore;
use crate::store::ExpenseStore;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};
use rust_decimal::Decimal;

#[derive(Serialize)]
struct MonthlyReport {
    month: String,
    total: Decimal,
    budget: Decimal,
    remaining: Decimal,
    exceeded: bool,
    income: Decimal,
    categories: Vec<CategoryTotal>,
    daily: Vec<DailyTotal>,
}

pub fn handle<B: ExpenseBackend>(
    store: &ExpenseStore<B>,
    settings: &SettingsStore,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let reference = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => Utc::now().date_naive(),
    };

    store.ensure_loaded()?;
    let all = store.expenses();
    let cfg = settings.load();

    let total = total_for_month(&all, reference);
    let status = budget_status(total, cfg.monthly_budget);
    let categories = category_breakdown(&all, reference);
    let daily = daily_totals(&all, reference);

    let report = MonthlyReport {
        month: format!("{}-{:02}", reference.year(), reference.month()),
        total,
        budget: cfg.monthly_budget,
        remaining: status.remaining,
        exceeded: status.exceeded,
        income: cfg.monthly_income,
        categories,
        daily,
    };

    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }

    println!("Month:     {}", report.month);
    println!("Spent:     {}", fmt_money(&report.total, Currency::INR));
    println!("Budget:    {}", fmt_money(&report.budget, Currency::INR));
    println!("Income:    {}", fmt_money(&report.income, Currency::INR));
    if report.exceeded {
        println!(
            "Budget exceeded by {}",
            fmt_money(&-report.remaining, Currency::INR)
        );
    } else {
        println!(
            "Remaining: {}",
            fmt_money(&report.remaining, Currency::INR)
        );
    }

    let data: Vec<Vec<String>> = report
        .categories
        .iter()
        .map(|c| {
            vec![
                c.icon.clone(),
                c.category.clone(),
                format!("{:.2}", c.total),
            ]
        })
        .collect();
    if !data.is_empty() {
        println!("{}", pretty_table(&["", "Category", "Spent"], data));
    }

    // JSON carries the full zero-filled series; the table skips quiet days.
    let days: Vec<Vec<String>> = report
        .daily
        .iter()
        .filter(|d| !d.total.is_zero())
        .map(|d| vec![d.date.to_string(), format!("{:.2}", d.total)])
        .collect();
    if !days.is_empty() {
        println!("{}", pretty_table(&["Day", "Spent"], days));
    }
    Ok(())
}
