// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currencies accepted by the tracker. Non-INR expenses carry a
/// user-entered INR equivalent in `converted_amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
            Currency::USD => "$",
            Currency::EUR => "€",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Currency {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INR" => Ok(Currency::INR),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            other => Err(DraftError::UnknownCurrency(other.to_string())),
        }
    }
}

/// One recorded expense, as materialized by the backend.
/// `id` and `created_at` are assigned once and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_amount: Option<Decimal>,
    #[serde(default)]
    pub payment_mode: Option<String>,
    pub category: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// The INR value used for the monthly total: the user-entered
    /// conversion when there is one, the raw amount otherwise.
    pub fn inr_value(&self) -> Decimal {
        self.converted_amount.unwrap_or(self.amount)
    }
}

/// Everything the user supplies for a create or a full-record replace.
/// The backend assigns `id`; `created_at` is stamped by the client at
/// creation and is not part of an update body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: Decimal,
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_amount: Option<Decimal>,
    #[serde(default)]
    pub payment_mode: Option<String>,
    pub category: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("date {0} is in the future")]
    FutureDate(NaiveDate),
    #[error("converted amount only applies to non-INR expenses")]
    ConvertedAmountForInr,
    #[error("unknown currency '{0}' (expected INR, USD or EUR)")]
    UnknownCurrency(String),
}

impl ExpenseDraft {
    /// Form-level checks; `today` is the latest date an expense may carry.
    pub fn validate(&self, today: NaiveDate) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.amount <= Decimal::ZERO {
            return Err(DraftError::NonPositiveAmount);
        }
        if self.date > today {
            return Err(DraftError::FutureDate(self.date));
        }
        if self.currency == Currency::INR && self.converted_amount.is_some() {
            return Err(DraftError::ConvertedAmountForInr);
        }
        Ok(())
    }
}
