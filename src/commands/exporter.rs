// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::query_rows;
use crate::settings::Settings;
use crate::store::{self, Store};
use anyhow::{bail, Result};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    // Same defaults as `tx list`, so saved filters shape both views alike.
    let defaults = Settings::load_or_warn(&store::settings_path()?);
    let data = query_rows(store, sub, &defaults)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["descricao", "valor", "data", "tag", "banco", "situacao"])?;
            for t in &data {
                wtr.write_record([
                    t.description.clone(),
                    t.amount.to_string(),
                    t.date.clone(),
                    t.category.clone(),
                    t.bank.clone(),
                    t.status.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&data)?)?;
        }
        _ => {
            bail!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported {} transactions to {}", data.len(), out);
    Ok(())
}
