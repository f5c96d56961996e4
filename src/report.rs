// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Account, Transaction};

/// Grouped sum per category. Blank categories land under "Outros", matching
/// the legacy dashboard. The per-group totals always partition the slice's
/// grand total.
pub fn totals_by_category(transactions: &[Transaction]) -> BTreeMap<String, Decimal> {
    group_totals(transactions, |t| {
        let tag = t.category.trim();
        if tag.is_empty() { "Outros" } else { tag }.to_string()
    })
}

/// Grouped sum per bank/account name.
pub fn totals_by_bank(transactions: &[Transaction]) -> BTreeMap<String, Decimal> {
    group_totals(transactions, |t| t.bank.trim().to_string())
}

fn group_totals<F>(transactions: &[Transaction], key: F) -> BTreeMap<String, Decimal>
where
    F: Fn(&Transaction) -> String,
{
    let mut map = BTreeMap::new();
    for tx in transactions {
        *map.entry(key(tx)).or_insert(Decimal::ZERO) += tx.amount;
    }
    map
}

pub fn total_balance(accounts: &[Account]) -> Decimal {
    accounts.iter().map(|a| a.balance).sum()
}
