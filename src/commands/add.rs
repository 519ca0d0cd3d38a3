// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;

use crate::api::ExpenseBackend;
use crate::models::ExpenseDraft;
use crate::settings::SettingsStore;
use crate::store::ExpenseStore;
use crate::utils::{fmt_money, icon_for_category, parse_currency, parse_date, parse_decimal};

/// Builds a validated draft from the shared add/edit flag set. The icon is
/// derived from the category here, at entry time, and stored verbatim.
pub(crate) fn draft_from_matches(
    settings: &SettingsStore,
    sub: &clap::ArgMatches,
) -> Result<ExpenseDraft> {
    let today = Utc::now().date_naive();
    let currency = match sub.get_one::<String>("currency") {
        Some(c) => parse_currency(c)?,
        None => settings.load().default_currency,
    };
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let draft = ExpenseDraft {
        title: sub.get_one::<String>("title").unwrap().to_string(),
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
        currency,
        converted_amount: sub
            .get_one::<String>("converted")
            .map(|s| parse_decimal(s))
            .transpose()?,
        payment_mode: sub.get_one::<String>("payment-mode").map(|s| s.to_string()),
        icon: icon_for_category(&category).to_string(),
        category,
        notes: sub.get_one::<String>("notes").map(|s| s.to_string()),
        date: match sub.get_one::<String>("date") {
            Some(d) => parse_date(d)?,
            None => today,
        },
    };
    draft.validate(today)?;
    Ok(draft)
}

pub fn handle<B: ExpenseBackend>(
    store: &ExpenseStore<B>,
    settings: &SettingsStore,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let draft = draft_from_matches(settings, sub)?;
    let expense = store.add(&draft)?;
    println!(
        "Added {} {} ({}) on {} [id {}]",
        expense.icon,
        expense.title,
        fmt_money(&expense.amount, expense.currency),
        expense.date,
        expense.id
    );
    Ok(())
}
