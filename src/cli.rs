// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print pretty JSON instead of a table")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print one JSON object per line")
            .action(ArgAction::SetTrue),
    )
}

fn draft_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("title")
            .long("title")
            .required(true)
            .help("What the money went to"),
    )
    .arg(
        Arg::new("amount")
            .long("amount")
            .required(true)
            .help("Amount in the expense's currency, e.g. 499.50"),
    )
    .arg(
        Arg::new("currency")
            .long("currency")
            .help("INR, USD or EUR (defaults to the configured default currency)"),
    )
    .arg(
        Arg::new("converted")
            .long("converted")
            .help("User-entered INR equivalent; only for non-INR expenses"),
    )
    .arg(
        Arg::new("payment-mode")
            .long("payment-mode")
            .help("Free text, e.g. UPI, Credit Card, Cash"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .help("One of the standard categories or any custom label")
            .default_value("Others"),
    )
    .arg(Arg::new("notes").long("notes"))
    .arg(
        Arg::new("date")
            .long("date")
            .help("Effective date YYYY-MM-DD, not after today (defaults to today)"),
    )
}

pub fn build_cli() -> Command {
    Command::new("kharcha")
        .about("Personal expense tracking against a remote backend: record, report, budget, export")
        .version(crate_version!())
        .subcommand(draft_args(Command::new("add").about("Record a new expense")))
        .subcommand(json_flags(
            Command::new("list")
                .about("Show the expense collection, newest first")
                .arg(
                    Arg::new("month")
                        .long("month")
                        .help("Only expenses in YYYY-MM"),
                ),
        ))
        .subcommand(
            draft_args(
                Command::new("edit")
                    .about("Replace an expense record in full")
                    .arg(Arg::new("id").long("id").required(true)),
            ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an expense")
                .arg(Arg::new("id").long("id").required(true)),
        )
        .subcommand(json_flags(
            Command::new("report")
                .about("Monthly total, budget status and category breakdown")
                .arg(
                    Arg::new("month")
                        .long("month")
                        .help("Month to report on, YYYY-MM (defaults to the current month)"),
                ),
        ))
        .subcommand(
            Command::new("settings")
                .about("Show or change monthly income, budget and default currency")
                .subcommand(json_flags(Command::new("show")))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("monthly-income").long("monthly-income"))
                        .arg(Arg::new("monthly-budget").long("monthly-budget"))
                        .arg(Arg::new("default-currency").long("default-currency")),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write the full collection to a spreadsheet file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv or json"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Output path (defaults to <prefix>_<date> in the working dir)"),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .default_value("expenses")
                        .help("Prefix for the generated file name"),
                ),
        )
}
