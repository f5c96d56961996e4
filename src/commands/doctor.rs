// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use crate::utils::{parse_flex_date, pretty_table};
use anyhow::Result;

pub fn handle(store: &Store) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Transactions whose bank matches no account (orphans after account
    //    removal, or typos).
    for tx in store.transactions() {
        if !tx.bank.trim().is_empty() && store.account(&tx.bank).is_none() {
            rows.push(vec![
                "orphaned_bank".into(),
                format!("#{} '{}' -> {}", tx.id, tx.description, tx.bank),
            ]);
        }
    }

    // 2) Dates matching no accepted format; these fall out of range filters.
    for tx in store.transactions() {
        if parse_flex_date(&tx.date).is_none() {
            rows.push(vec![
                "unparseable_date".into(),
                format!("#{} '{}'", tx.id, tx.date),
            ]);
        }
    }

    // 3) Card billing days out of range (possible in hand-edited documents).
    for card in store.cards() {
        for day in [card.closing_day, card.due_day] {
            if !(1..=31).contains(&day) {
                rows.push(vec![
                    "bad_cycle_day".into(),
                    format!("card '{}' day {}", card.name, day),
                ]);
            }
        }
    }

    // 4) Stored balance drifting from the fold over linked transactions.
    for acct in store.accounts() {
        if let Some(expected) = store.ledger_balance(&acct.name) {
            if expected != acct.balance {
                rows.push(vec![
                    "balance_drift".into(),
                    format!(
                        "'{}' stored {:.2}, ledger says {:.2}",
                        acct.name, acct.balance, expected
                    ),
                ]);
            }
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
