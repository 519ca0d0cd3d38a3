// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use kharcha::{api, cli, commands, settings, store};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let client = api::ApiClient::from_env()?;
    let store = store::ExpenseStore::new(client);
    let settings = settings::SettingsStore::open()?;

    match matches.subcommand() {
        Some(("add", sub)) => commands::add::handle(&store, &settings, sub)?,
        Some(("list", sub)) => commands::list::handle(&store, sub)?,
        Some(("edit", sub)) => commands::edit::handle(&store, &settings, sub)?,
        Some(("delete", sub)) => commands::delete::handle(&store, sub)?,
        Some(("report", sub)) => commands::report::handle(&store, &settings, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&settings, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
