// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ExpenseBackend;
use crate::report::expenses_in_month;
use crate::store::ExpenseStore;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};

pub fn handle<B: ExpenseBackend>(store: &ExpenseStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    store.ensure_loaded()?;
    let all = store.expenses();

    let shown: Vec<_> = match sub.get_one::<String>("month") {
        Some(month) => {
            let reference = parse_month(month)?;
            expenses_in_month(&all, reference)
                .into_iter()
                .cloned()
                .collect()
        }
        None => all,
    };

    if maybe_print_json(json_flag, jsonl_flag, &shown)? {
        return Ok(());
    }

    let mut data = Vec::new();
    for e in &shown {
        data.push(vec![
            e.id.clone(),
            e.date.to_string(),
            format!("{} {}", e.icon, e.title),
            e.category.clone(),
            fmt_money(&e.amount, e.currency),
            fmt_money(&e.inr_value(), crate::models::Currency::INR),
            e.payment_mode.clone().unwrap_or_default(),
        ]);
    }
    println!(
        "{}",
        pretty_table(
            &["ID", "Date", "Title", "Category", "Amount", "INR Value", "Payment"],
            data
        )
    );
    Ok(())
}
