// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::query::{Filter, SortKey};
use crate::store::StoreError;

pub const THEMES: &[&str] = &["Claro", "Escuro", "Sistema"];
pub const CURRENCIES: &[&str] = &["R$", "US$", "€", "£"];
pub const DATE_FORMATS: &[&str] = &["DD/MM/AAAA", "MM/DD/AAAA", "AAAA-MM-DD"];

/// UI preferences, persisted in their own small document next to the data
/// file. Every field is individually defaulted so documents written before a
/// field existed still read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(rename = "tema")]
    pub theme: String,
    #[serde(rename = "moeda")]
    pub currency_symbol: String,
    #[serde(rename = "formato_data")]
    pub date_format: String,
    #[serde(rename = "sidebar_visivel")]
    pub sidebar_visible: bool,
    #[serde(rename = "filtros_padrao")]
    pub default_filter: Filter,
    #[serde(rename = "ordenacao_padrao")]
    pub default_sort: Option<SortKey>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "Claro".to_string(),
            currency_symbol: "R$".to_string(),
            date_format: "DD/MM/AAAA".to_string(),
            sidebar_visible: true,
            default_filter: Filter::default(),
            default_sort: None,
        }
    }
}

impl Settings {
    /// Same contract as the store: absent file is defaults, unreadable file
    /// is an error.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Unreadable {
            path: path.to_path_buf(),
            source,
        })
    }

    /// For read paths where broken preferences should not block the command:
    /// warn and fall back to defaults. Listing and export share this so the
    /// saved default filters apply to both.
    pub fn load_or_warn(path: &Path) -> Self {
        match Self::load(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("warning: ignoring settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };
        let json = serde_json::to_string_pretty(self).map_err(StoreError::Serialize)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, path).map_err(io_err)?;
        Ok(())
    }
}
