// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Status, Transaction};
use crate::query::{self, Filter, SortKey};
use crate::settings::Settings;
use crate::store::{self, Store, TransactionInput};
use crate::utils::{maybe_print_json, parse_date_arg, parse_decimal, pretty_table};
use anyhow::{Context, Result};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let input = input_from_args(sub)?;
            let bank = input.bank.clone();
            let id = store.add_transaction(input)?;
            match store.account(&bank) {
                Some(acct) => println!(
                    "Recorded transaction #{} ('{}' balance now {:.2})",
                    id, acct.name, acct.balance
                ),
                None => println!("Recorded transaction #{} (no linked account)", id),
            }
        }
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => {
            let id = *sub.get_one::<u64>("id").unwrap();
            store.edit_transaction(id, input_from_args(sub)?)?;
            println!("Updated transaction #{}", id);
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<u64>("id").unwrap();
            store.remove_transaction(id)?;
            println!("Removed transaction #{}", id);
        }
        _ => {}
    }
    Ok(())
}

fn input_from_args(sub: &clap::ArgMatches) -> Result<TransactionInput> {
    let status_arg = sub.get_one::<String>("status").unwrap();
    let status = Status::parse(status_arg)
        .with_context(|| format!("Unknown status '{}', expected Pendente|Pago|Cancelado", status_arg))?;
    Ok(TransactionInput {
        description: sub.get_one::<String>("description").unwrap().clone(),
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
        date: sub.get_one::<String>("date").unwrap().clone(),
        category: sub.get_one::<String>("category").unwrap().clone(),
        bank: sub.get_one::<String>("bank").unwrap().clone(),
        status,
        receipt: sub.get_one::<String>("receipt").cloned(),
    })
}

/// Filter and sort from CLI flags; anything the user left unset falls back
/// to the defaults in `Settings`.
pub fn filter_from_args(
    sub: &clap::ArgMatches,
    defaults: &Settings,
) -> Result<(Filter, Option<SortKey>)> {
    let mut filter = defaults.default_filter.clone();
    if let Some(s) = sub.get_one::<String>("from") {
        filter.date_from = Some(parse_date_arg(s)?);
    }
    if let Some(s) = sub.get_one::<String>("to") {
        filter.date_to = Some(parse_date_arg(s)?);
    }
    if let Some(s) = sub.get_one::<String>("category") {
        filter.category = Some(s.clone());
    }
    if let Some(s) = sub.get_one::<String>("bank") {
        filter.bank = Some(s.clone());
    }
    if let Some(s) = sub.get_one::<String>("search") {
        filter.description = Some(s.clone());
    }
    let sort = match sub.get_one::<String>("sort") {
        Some(s) => Some(
            SortKey::parse(s).with_context(|| format!("Unknown sort key '{}'", s))?,
        ),
        None => defaults.default_sort,
    };
    Ok((filter, sort))
}

pub fn query_rows(
    store: &Store,
    sub: &clap::ArgMatches,
    defaults: &Settings,
) -> Result<Vec<Transaction>> {
    let (filter, sort) = filter_from_args(sub, defaults)?;
    Ok(query::filter_sorted(store.transactions(), &filter, sort))
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let defaults = Settings::load_or_warn(&store::settings_path()?);
    let data = query_rows(store, sub, &defaults)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.clone(),
                    t.description.clone(),
                    format!("{:.2}", t.amount),
                    t.category.clone(),
                    t.bank.clone(),
                    t.status.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Amount", "Category", "Bank", "Status"],
                rows,
            )
        );
    }
    Ok(())
}
