// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::models::{Expense, ExpenseDraft};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3001";
pub const BASE_URL_ENV: &str = "KHARCHA_API_URL";

const UA: &str = concat!("kharcha/", env!("CARGO_PKG_VERSION"));

/// The only failure taxonomy the backend surfaces: transport problems and
/// non-success statuses alike are "the network did not give us the record".
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

/// Seam between the store and the wire. The store is generic over this so
/// tests can drive it without a server.
pub trait ExpenseBackend {
    /// Fetch the entire collection. No pagination, no partial results.
    fn list_all(&self) -> Result<Vec<Expense>, ApiError>;

    /// Create from a draft; `created_at` is stamped client-side just before
    /// transmission. Returns the backend's materialized copy, id assigned.
    fn create(&self, draft: &ExpenseDraft) -> Result<Expense, ApiError>;

    /// Full-record replace. The id travels in the path, never in the body,
    /// and `created_at` is not part of an update.
    fn update(&self, id: &str, draft: &ExpenseDraft) -> Result<Expense, ApiError>;

    fn remove(&self, id: &str) -> Result<(), ApiError>;
}

/// Stateless client for the `/expenses` REST resource.
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBody<'a> {
    #[serde(flatten)]
    draft: &'a ExpenseDraft,
    created_at: DateTime<Utc>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent(UA)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Base URL comes from `KHARCHA_API_URL` when set, else the default
    /// local backend address.
    pub fn from_env() -> Result<Self, ApiError> {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn check(resp: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                url: resp.url().to_string(),
            })
        }
    }
}

impl ExpenseBackend for ApiClient {
    fn list_all(&self) -> Result<Vec<Expense>, ApiError> {
        let resp = self.http.get(self.url("/expenses")).send()?;
        Ok(Self::check(resp)?.json()?)
    }

    fn create(&self, draft: &ExpenseDraft) -> Result<Expense, ApiError> {
        let body = CreateBody {
            draft,
            created_at: Utc::now(),
        };
        let resp = self.http.post(self.url("/expenses")).json(&body).send()?;
        Ok(Self::check(resp)?.json()?)
    }

    fn update(&self, id: &str, draft: &ExpenseDraft) -> Result<Expense, ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/expenses/{id}")))
            .json(draft)
            .send()?;
        Ok(Self::check(resp)?.json()?)
    }

    fn remove(&self, id: &str) -> Result<(), ApiError> {
        let resp = self.http.delete(self.url(&format!("/expenses/{id}"))).send()?;
        Self::check(resp)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn draft() -> ExpenseDraft {
        ExpenseDraft {
            title: "Coffee".into(),
            amount: Decimal::from(180),
            currency: Currency::INR,
            converted_amount: None,
            payment_mode: Some("UPI".into()),
            category: "Food & Drinks".into(),
            icon: "🍕".into(),
            notes: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        }
    }

    #[test]
    fn create_body_carries_created_at_but_no_id() {
        let d = draft();
        let body = CreateBody {
            draft: &d,
            created_at: Utc::now(),
        };
        let v = serde_json::to_value(&body).unwrap();
        assert!(v.get("createdAt").is_some());
        assert!(v.get("id").is_none());
        assert_eq!(v["title"], "Coffee");
        assert_eq!(v["paymentMode"], "UPI");
    }

    #[test]
    fn update_body_has_no_created_at() {
        let v = serde_json::to_value(draft()).unwrap();
        assert!(v.get("createdAt").is_none());
        assert!(v.get("id").is_none());
        assert_eq!(v["currency"], "INR");
    }

    #[test]
    fn base_url_trailing_slash_is_tolerated() {
        let c = ApiClient::new("http://localhost:3001/").unwrap();
        assert_eq!(c.url("/expenses"), "http://localhost:3001/expenses");
    }
}
