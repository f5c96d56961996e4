// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::report;
use crate::settings::Settings;
use crate::store::{self, Store};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("by-category", sub)) => {
            grouped(sub, "Category", report::totals_by_category(store.transactions()))?
        }
        Some(("by-bank", sub)) => {
            grouped(sub, "Bank", report::totals_by_bank(store.transactions()))?
        }
        Some(("balances", sub)) => balances(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn grouped(sub: &clap::ArgMatches, label: &str, totals: BTreeMap<String, Decimal>) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let rows = totals
            .iter()
            .map(|(k, v)| vec![k.clone(), format!("{:.2}", v)])
            .collect();
        println!("{}", pretty_table(&[label, "Total"], rows));
    }
    Ok(())
}

fn balances(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let accounts = store.accounts();
    if !maybe_print_json(json_flag, jsonl_flag, &accounts)? {
        let symbol = Settings::load(&store::settings_path()?)
            .map(|s| s.currency_symbol)
            .unwrap_or_else(|_| "R$".to_string());
        let mut rows: Vec<Vec<String>> = accounts
            .iter()
            .map(|a| vec![a.name.clone(), a.kind.clone(), fmt_money(&a.balance, &symbol)])
            .collect();
        rows.push(vec![
            "TOTAL".to_string(),
            String::new(),
            fmt_money(&report::total_balance(accounts), &symbol),
        ]);
        println!("{}", pretty_table(&["Account", "Type", "Balance"], rows));
    }
    Ok(())
}
