// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::query::SortKey;
use crate::settings::{Settings, CURRENCIES, DATE_FORMATS, THEMES};
use crate::store::settings_path;
use crate::utils::{maybe_print_json, parse_date_arg, pretty_table};
use anyhow::{bail, Result};
use chrono::NaiveDate;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let path = settings_path()?;
    match m.subcommand() {
        Some(("show", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let settings = Settings::load(&path)?;
            if !maybe_print_json(json_flag, jsonl_flag, &settings)? {
                let filter = &settings.default_filter;
                let rows = vec![
                    vec!["tema".into(), settings.theme.clone()],
                    vec!["moeda".into(), settings.currency_symbol.clone()],
                    vec!["formato_data".into(), settings.date_format.clone()],
                    vec!["sidebar".into(), settings.sidebar_visible.to_string()],
                    vec![
                        "sort".into(),
                        settings
                            .default_sort
                            .map(|s| format!("{:?}", s))
                            .unwrap_or_default(),
                    ],
                    vec!["filtro_data_inicio".into(), show_date(filter.date_from)],
                    vec!["filtro_data_fim".into(), show_date(filter.date_to)],
                    vec![
                        "filtro_tag".into(),
                        filter.category.clone().unwrap_or_default(),
                    ],
                    vec!["filtro_banco".into(), filter.bank.clone().unwrap_or_default()],
                    vec![
                        "filtro_busca".into(),
                        filter.description.clone().unwrap_or_default(),
                    ],
                ];
                println!("{}", pretty_table(&["Key", "Value"], rows));
            }
        }
        Some(("set", sub)) => {
            let key = sub.get_one::<String>("key").unwrap();
            let value = sub.get_one::<String>("value").unwrap();
            let mut settings = Settings::load(&path)?;
            apply(&mut settings, key, value)?;
            settings.save(&path)?;
            println!("Set {} = {}", key, value);
        }
        _ => {}
    }
    Ok(())
}

fn show_date(d: Option<NaiveDate>) -> String {
    d.map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_default()
}

/// Mutates one settings key from its CLI string form. An empty value clears
/// the optional keys (default filters and sort).
pub fn apply(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    match key {
        "tema" => {
            if !THEMES.contains(&value) {
                bail!("Unknown theme '{}' (use {})", value, THEMES.join("|"));
            }
            settings.theme = value.to_string();
        }
        "moeda" => {
            if !CURRENCIES.contains(&value) {
                bail!("Unknown currency '{}' (use {})", value, CURRENCIES.join("|"));
            }
            settings.currency_symbol = value.to_string();
        }
        "formato_data" => {
            if !DATE_FORMATS.contains(&value) {
                bail!(
                    "Unknown date format '{}' (use {})",
                    value,
                    DATE_FORMATS.join("|")
                );
            }
            settings.date_format = value.to_string();
        }
        "sidebar" => {
            settings.sidebar_visible = match value.to_lowercase().as_str() {
                "true" | "sim" | "1" => true,
                "false" | "nao" | "não" | "0" => false,
                _ => bail!("Expected true|false for sidebar, got '{}'", value),
            };
        }
        "sort" => {
            settings.default_sort = if value.trim().is_empty() {
                None
            } else {
                match SortKey::parse(value) {
                    Some(k) => Some(k),
                    None => bail!("Unknown sort key '{}'", value),
                }
            };
        }
        "filtro_data_inicio" => {
            settings.default_filter.date_from = parse_optional_date(value)?;
        }
        "filtro_data_fim" => {
            settings.default_filter.date_to = parse_optional_date(value)?;
        }
        "filtro_tag" => settings.default_filter.category = non_empty(value),
        "filtro_banco" => settings.default_filter.bank = non_empty(value),
        "filtro_busca" => settings.default_filter.description = non_empty(value),
        _ => bail!("Unknown settings key '{}'", key),
    }
    Ok(())
}

fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(parse_date_arg(value)?))
}

fn non_empty(value: &str) -> Option<String> {
    let v = value.trim();
    if v.is_empty() { None } else { Some(v.to_string()) }
}
