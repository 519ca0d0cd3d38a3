// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Expense;

/// One category's share of a month, for the breakdown table and chart
/// feeds. The icon is whichever glyph the first expense in the group
/// carried.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub exceeded: bool,
    pub remaining: Decimal,
}

/// One day's spend, for the daily line chart feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Decimal,
}

/// Expenses whose date falls in the same calendar month and year as
/// `reference`. Plain calendar-date comparison, no timezone handling.
pub fn expenses_in_month(all: &[Expense], reference: NaiveDate) -> Vec<&Expense> {
    all.iter()
        .filter(|e| e.date.year() == reference.year() && e.date.month() == reference.month())
        .collect()
}

/// Month's spend in INR terms: the user-entered conversion where present,
/// the raw amount otherwise.
pub fn total_for_month(all: &[Expense], reference: NaiveDate) -> Decimal {
    expenses_in_month(all, reference)
        .iter()
        .map(|e| e.inr_value())
        .sum()
}

/// Per-category totals for the month, largest first; ties keep
/// first-encountered order and empty groups are dropped.
///
/// Sums the raw `amount`, while `total_for_month` sums INR values. The web
/// UI this tracker mirrors does the same in its chart, and product has not
/// decided which of the two is right, so both behaviors are kept.
pub fn category_breakdown(all: &[Expense], reference: NaiveDate) -> Vec<CategoryTotal> {
    let mut groups: Vec<CategoryTotal> = Vec::new();
    for e in expenses_in_month(all, reference) {
        match groups.iter_mut().find(|g| g.category == e.category) {
            Some(g) => g.total += e.amount,
            None => groups.push(CategoryTotal {
                category: e.category.clone(),
                total: e.amount,
                icon: e.icon.clone(),
            }),
        }
    }
    groups.retain(|g| !g.total.is_zero());
    groups.sort_by(|a, b| b.total.cmp(&a.total));
    groups
}

/// Spend per day for every day of the reference month, zero-filled so the
/// series always covers the whole month. Sums the raw `amount`, like the
/// category breakdown.
pub fn daily_totals(all: &[Expense], reference: NaiveDate) -> Vec<DailyTotal> {
    let month = expenses_in_month(all, reference);
    let Some(first) = reference.with_day(1) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    let mut day = first;
    while day.month() == reference.month() {
        let total = month
            .iter()
            .filter(|e| e.date == day)
            .map(|e| e.amount)
            .sum();
        out.push(DailyTotal { date: day, total });
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    out
}

/// `remaining` goes negative once the budget is blown; callers decide how
/// to display that.
pub fn budget_status(monthly_total: Decimal, monthly_budget: Decimal) -> BudgetStatus {
    BudgetStatus {
        exceeded: monthly_total > monthly_budget,
        remaining: monthly_budget - monthly_total,
    }
}
