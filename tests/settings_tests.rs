// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tempfile::tempdir;

use kharcha::models::Currency;
use kharcha::settings::{Settings, SettingsStore};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let store = SettingsStore::at_path(dir.path().join("settings.json"));
    let cfg = store.load();
    assert_eq!(cfg.monthly_income, Decimal::from(50_000));
    assert_eq!(cfg.monthly_budget, Decimal::from(15_000));
    assert_eq!(cfg.default_currency, Currency::INR);
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{not json at all").unwrap();
    let store = SettingsStore::at_path(path);
    assert_eq!(store.load(), Settings::default());
}

#[test]
fn save_overwrites_wholesale_and_a_second_reader_sees_it() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let store = SettingsStore::at_path(path.clone());

    let cfg = Settings {
        monthly_income: Decimal::from(80_000),
        monthly_budget: Decimal::from(20_000),
        default_currency: Currency::EUR,
    };
    store.save(&cfg);
    assert_eq!(store.load(), cfg);

    // A second view over the same blob reads the new values.
    let other = SettingsStore::at_path(path);
    assert_eq!(other.load(), cfg);
}

#[test]
fn each_save_broadcasts_exactly_once() {
    let dir = tempdir().unwrap();
    let store = SettingsStore::at_path(dir.path().join("settings.json"));
    let rx = store.subscribe();

    let mut cfg = Settings::default();
    cfg.monthly_budget = Decimal::from(18_000);
    store.save(&cfg);

    assert_eq!(rx.recv().unwrap(), cfg);
    assert!(rx.try_recv().is_err());

    cfg.monthly_budget = Decimal::from(19_000);
    store.save(&cfg);
    assert_eq!(rx.recv().unwrap().monthly_budget, Decimal::from(19_000));
    assert!(rx.try_recv().is_err());
}

#[test]
fn unwritable_path_is_swallowed_and_does_not_broadcast() {
    let store = SettingsStore::at_path("/nonexistent-dir/deep/settings.json".into());
    let rx = store.subscribe();
    store.save(&Settings::default());
    assert!(rx.try_recv().is_err());
}

#[test]
fn settings_serialize_camel_case() {
    let v = serde_json::to_value(Settings::default()).unwrap();
    assert!(v.get("monthlyIncome").is_some());
    assert!(v.get("monthlyBudget").is_some());
    assert_eq!(v["defaultCurrency"], "INR");
}
