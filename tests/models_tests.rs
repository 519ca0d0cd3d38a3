// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;

use kharcha::models::{Currency, DraftError, Expense, ExpenseDraft};
use kharcha::utils::icon_for_category;

fn draft() -> ExpenseDraft {
    ExpenseDraft {
        title: "Groceries".to_string(),
        amount: Decimal::from(800),
        currency: Currency::INR,
        converted_amount: None,
        payment_mode: Some("UPI".to_string()),
        category: "Food & Drinks".to_string(),
        icon: "🍕".to_string(),
        notes: None,
        date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
    }
}

#[test]
fn expense_parses_the_backend_wire_shape() {
    let payload = json!({
        "id": "abc123",
        "title": "Flight",
        "amount": "120.50",
        "currency": "USD",
        "convertedAmount": "10000",
        "paymentMode": "Credit Card",
        "category": "Transportation",
        "icon": "🚗",
        "notes": "Delhi trip",
        "date": "2024-03-05",
        "createdAt": "2024-03-05T10:30:00Z"
    });
    let e: Expense = serde_json::from_value(payload).unwrap();
    assert_eq!(e.id, "abc123");
    assert_eq!(e.currency, Currency::USD);
    assert_eq!(e.converted_amount, Some(Decimal::new(10_000, 0)));
    assert_eq!(e.inr_value(), Decimal::from(10_000));
    assert_eq!(e.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
}

#[test]
fn optional_fields_may_be_absent_on_the_wire() {
    let payload = json!({
        "id": "abc124",
        "title": "Chai",
        "amount": "20",
        "currency": "INR",
        "category": "Food & Drinks",
        "date": "2024-03-06",
        "createdAt": "2024-03-06T08:00:00Z"
    });
    let e: Expense = serde_json::from_value(payload).unwrap();
    assert_eq!(e.converted_amount, None);
    assert_eq!(e.payment_mode, None);
    assert_eq!(e.notes, None);
    assert_eq!(e.icon, "");
    assert_eq!(e.inr_value(), Decimal::from(20));
}

#[test]
fn draft_serializes_camel_case_without_identity_fields() {
    let v = serde_json::to_value(draft()).unwrap();
    assert_eq!(v["paymentMode"], "UPI");
    assert_eq!(v["currency"], "INR");
    assert!(v.get("id").is_none());
    assert!(v.get("createdAt").is_none());
    assert!(v.get("convertedAmount").is_none());
}

#[test]
fn currency_parses_case_insensitively() {
    assert_eq!("inr".parse::<Currency>().unwrap(), Currency::INR);
    assert_eq!("USD".parse::<Currency>().unwrap(), Currency::USD);
    assert_eq!("Eur".parse::<Currency>().unwrap(), Currency::EUR);
    assert!(matches!(
        "GBP".parse::<Currency>(),
        Err(DraftError::UnknownCurrency(_))
    ));
}

#[test]
fn validation_rejects_bad_drafts() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

    let mut d = draft();
    d.title = "   ".to_string();
    assert_eq!(d.validate(today), Err(DraftError::EmptyTitle));

    let mut d = draft();
    d.amount = Decimal::ZERO;
    assert_eq!(d.validate(today), Err(DraftError::NonPositiveAmount));

    let mut d = draft();
    d.date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
    assert_eq!(d.validate(today), Err(DraftError::FutureDate(d.date)));

    let mut d = draft();
    d.converted_amount = Some(Decimal::from(800));
    assert_eq!(d.validate(today), Err(DraftError::ConvertedAmountForInr));

    assert_eq!(draft().validate(today), Ok(()));
}

#[test]
fn non_inr_draft_with_conversion_is_valid() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let mut d = draft();
    d.currency = Currency::USD;
    d.converted_amount = Some(Decimal::from(66_000));
    assert_eq!(d.validate(today), Ok(()));
}

#[test]
fn icons_come_from_the_category_vocabulary() {
    assert_eq!(icon_for_category("Food & Drinks"), "🍕");
    assert_eq!(icon_for_category("Investments"), "📈");
    // Custom categories fall back to the Others glyph.
    assert_eq!(icon_for_category("Pet Care"), "📦");
}
