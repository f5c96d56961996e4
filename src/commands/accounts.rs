// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{color_hex, ACCOUNT_TYPES};
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::{bail, Result};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let balance = parse_decimal(sub.get_one::<String>("balance").unwrap())?;
            let description = sub.get_one::<String>("description").unwrap();
            let kind = check_account_type(sub.get_one::<String>("type").unwrap())?;
            let color = resolve_color(sub.get_one::<String>("color").unwrap());
            store.add_account(name, balance, description, kind, &color)?;
            println!("Added account '{}' ({}, balance {})", name, kind, balance);
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let accounts = store.accounts();
            if !maybe_print_json(json_flag, jsonl_flag, &accounts)? {
                let rows = accounts
                    .iter()
                    .map(|a| {
                        vec![
                            a.name.clone(),
                            a.kind.clone(),
                            format!("{:.2}", a.balance),
                            format!("{:.2}", a.initial_balance),
                            a.created_on.clone(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Name", "Type", "Balance", "Initial", "Created"], rows)
                );
            }
        }
        Some(("edit", sub)) => {
            let original = sub.get_one::<String>("original").unwrap();
            let name = sub.get_one::<String>("name").unwrap();
            let balance = parse_decimal(sub.get_one::<String>("balance").unwrap())?;
            let description = sub.get_one::<String>("description").unwrap();
            let kind = check_account_type(sub.get_one::<String>("type").unwrap())?;
            let color = resolve_color(sub.get_one::<String>("color").unwrap());
            store.update_account(original, name, balance, description, kind, &color)?;
            println!("Updated account '{}'", name);
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            store.remove_account(name)?;
            println!("Removed account '{}' (its transactions were kept)", name);
        }
        _ => {}
    }
    Ok(())
}

/// Accepts either a named color label or a raw hex value.
pub fn resolve_color(s: &str) -> String {
    color_hex(s).unwrap_or(s).to_string()
}

/// The fixed-list constraint lives at the CLI boundary; the store itself
/// accepts any string so hand-edited documents still load.
fn check_account_type(kind: &str) -> Result<&str> {
    if !ACCOUNT_TYPES.contains(&kind) {
        bail!("Unknown account type '{}' (use {})", kind, ACCOUNT_TYPES.join("|"));
    }
    Ok(kind)
}
