// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ExpenseBackend;
use crate::store::{ExpenseStore, StoreError};

pub fn handle<B: ExpenseBackend>(store: &ExpenseStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    match store.remove(id) {
        Ok(()) => {
            println!("Deleted expense {}", id);
            Ok(())
        }
        Err(err @ StoreError::Reloaded(_)) => {
            eprintln!("Delete failed; the local view was refreshed from the server.");
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
