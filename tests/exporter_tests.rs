// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use tempfile::tempdir;

use kharcha::commands::exporter::{default_filename, export_csv, export_json};
use kharcha::models::{Currency, Expense};

fn sample() -> Vec<Expense> {
    vec![
        Expense {
            id: "1".to_string(),
            title: "Flight".to_string(),
            amount: Decimal::from(120),
            currency: Currency::USD,
            converted_amount: Some(Decimal::from(10_000)),
            payment_mode: Some("Credit Card".to_string()),
            category: "Transportation".to_string(),
            icon: "🚗".to_string(),
            notes: Some("Delhi trip".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 10, 30, 0).unwrap(),
        },
        Expense {
            id: "2".to_string(),
            title: "Chai".to_string(),
            amount: Decimal::from(20),
            currency: Currency::INR,
            converted_amount: None,
            payment_mode: None,
            category: "Food & Drinks".to_string(),
            icon: "🍕".to_string(),
            notes: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 6, 8, 0, 0).unwrap(),
        },
    ]
}

#[test]
fn csv_export_writes_the_spreadsheet_columns() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("export.csv");
    export_csv(&sample(), &out).unwrap();

    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec![
            "Date",
            "Title",
            "Category",
            "Amount",
            "Currency",
            "Converted Amount (INR)",
            "Payment Mode",
            "Notes",
            "Created At",
        ]
    );

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "2024-03-05");
    assert_eq!(&rows[0][3], "120");
    assert_eq!(&rows[0][4], "USD");
    assert_eq!(&rows[0][5], "10000");
    // Missing optionals render as "-".
    assert_eq!(&rows[1][5], "-");
    assert_eq!(&rows[1][6], "-");
    assert_eq!(&rows[1][7], "-");
}

#[test]
fn json_export_round_trips_the_collection() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("export.json");
    let expenses = sample();
    export_json(&expenses, &out).unwrap();

    let raw = std::fs::read_to_string(&out).unwrap();
    let parsed: Vec<Expense> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, expenses);

    // Wire casing on disk, same as the backend's.
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value[0].get("convertedAmount").is_some());
    assert!(value[1].get("convertedAmount").is_none());
}

#[test]
fn default_filename_is_prefix_then_isodate() {
    let name = default_filename("expenses", "csv");
    let today = Utc::now().date_naive().to_string();
    assert_eq!(name, format!("expenses_{today}.csv"));
}
