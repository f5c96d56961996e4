// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Transaction;
use crate::utils::parse_flex_date;

/// Optional, independent predicates over the transaction list. Date bounds
/// are inclusive; text matches are case-insensitive substrings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    #[serde(rename = "data_inicio")]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "data_fim")]
    pub date_to: Option<NaiveDate>,
    #[serde(rename = "tag")]
    pub category: Option<String>,
    #[serde(rename = "banco")]
    pub bank: Option<String>,
    #[serde(rename = "busca")]
    pub description: Option<String>,
}

impl Filter {
    fn matches(&self, tx: &Transaction) -> bool {
        if self.date_from.is_some() || self.date_to.is_some() {
            // A date that parses with no accepted format cannot satisfy a
            // range bound, so any active bound excludes it.
            let Some(date) = parse_flex_date(&tx.date) else {
                return false;
            };
            if self.date_from.is_some_and(|from| date < from) {
                return false;
            }
            if self.date_to.is_some_and(|to| date > to) {
                return false;
            }
        }
        contains_ci(&self.category, &tx.category)
            && contains_ci(&self.bank, &tx.bank)
            && contains_ci(&self.description, &tx.description)
    }
}

fn contains_ci(needle: &Option<String>, hay: &str) -> bool {
    match needle.as_deref().map(str::trim) {
        Some(n) if !n.is_empty() => hay.to_lowercase().contains(&n.to_lowercase()),
        _ => true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Newest first; unparseable dates sort after everything parseable.
    Date,
    /// Largest first.
    Amount,
    /// Lowercase ascending.
    Description,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "data" | "date" => Some(Self::Date),
            "valor" | "amount" => Some(Self::Amount),
            "descricao" | "description" => Some(Self::Description),
            _ => None,
        }
    }
}

/// Filtered, sorted snapshot of the transaction list. The underlying store
/// is never touched; callers get clones addressed by stable id.
pub fn filter_sorted(
    transactions: &[Transaction],
    filter: &Filter,
    sort: Option<SortKey>,
) -> Vec<Transaction> {
    let mut out: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();
    match sort {
        Some(SortKey::Date) => {
            out.sort_by_key(|t| std::cmp::Reverse(parse_flex_date(&t.date).unwrap_or(NaiveDate::MIN)));
        }
        Some(SortKey::Amount) => {
            out.sort_by(|a, b| b.amount.cmp(&a.amount));
        }
        Some(SortKey::Description) => {
            out.sort_by_key(|t| t.description.to_lowercase());
        }
        None => {}
    }
    out
}
