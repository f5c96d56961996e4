// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::accounts::resolve_color;
use crate::store::{CardInput, Store, StoreError};
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().clone();
            let input = CardInput {
                name,
                bank: sub.get_one::<String>("bank").unwrap().clone(),
                limit: parse_decimal(sub.get_one::<String>("limit").unwrap())?,
                closing_day: *sub.get_one::<u8>("closing").unwrap(),
                due_day: *sub.get_one::<u8>("due").unwrap(),
                color: resolve_color(sub.get_one::<String>("color").unwrap()),
                invoice_total: Decimal::ZERO,
            };
            let id = store.add_card(input.clone())?;
            println!("Added card '{}' (#{}, limit {})", input.name, id, input.limit);
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let cards = store.cards();
            if !maybe_print_json(json_flag, jsonl_flag, &cards)? {
                let rows = cards
                    .iter()
                    .map(|c| {
                        vec![
                            c.id.to_string(),
                            c.name.clone(),
                            c.bank.clone(),
                            format!("{:.2}", c.limit),
                            format!("{:.2}", c.invoice_total),
                            c.closing_day.to_string(),
                            c.due_day.to_string(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(
                        &["Id", "Name", "Bank", "Limit", "Invoice", "Closes", "Due"],
                        rows,
                    )
                );
            }
        }
        Some(("edit", sub)) => {
            let original = sub.get_one::<String>("original").unwrap();
            let id = store
                .card(original)
                .map(|c| c.id)
                .ok_or_else(|| StoreError::CardNotFound(original.clone()))?;
            let input = CardInput {
                name: sub.get_one::<String>("name").unwrap().clone(),
                bank: sub.get_one::<String>("bank").unwrap().clone(),
                limit: parse_decimal(sub.get_one::<String>("limit").unwrap())?,
                closing_day: *sub.get_one::<u8>("closing").unwrap(),
                due_day: *sub.get_one::<u8>("due").unwrap(),
                color: resolve_color(sub.get_one::<String>("color").unwrap()),
                invoice_total: parse_decimal(sub.get_one::<String>("invoice").unwrap())?,
            };
            store.update_card(id, input)?;
            println!("Updated card #{}", id);
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            store.remove_card(name)?;
            println!("Removed card '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
