// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ExpenseBackend;
use crate::commands::add::draft_from_matches;
use crate::settings::SettingsStore;
use crate::store::ExpenseStore;

pub fn handle<B: ExpenseBackend>(
    store: &ExpenseStore<B>,
    settings: &SettingsStore,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let draft = draft_from_matches(settings, sub)?;
    let expense = store.edit(id, &draft)?;
    println!("Updated expense {} ({})", expense.id, expense.title);
    Ok(())
}
