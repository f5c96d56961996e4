// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Context;
use chrono::Local;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{Account, CreditCard, Document, Status, Transaction};
use crate::utils::parse_flex_date;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Contaclip", "contaclip"));

pub fn data_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("dados.json"))
}

pub fn settings_path() -> anyhow::Result<PathBuf> {
    Ok(data_path()?.with_file_name("config.json"))
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but does not parse. Distinct from "absent" so callers
    /// can warn instead of silently starting over on a corrupt document.
    #[error("data file {path} is unreadable: {source}")]
    Unreadable {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("i/o failure on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("account '{0}' already exists")]
    DuplicateAccount(String),
    #[error("account '{0}' not found")]
    AccountNotFound(String),
    #[error("card '{0}' already exists")]
    DuplicateCard(String),
    #[error("card '{0}' not found")]
    CardNotFound(String),
    #[error("no transaction with id {0}")]
    TransactionNotFound(u64),
    #[error("invalid date '{0}', accepted formats: dd/mm/yyyy, yyyy-mm-dd, dd-mm-yyyy")]
    InvalidDate(String),
    #[error("day {0} outside 1..=31")]
    InvalidDay(u8),
    #[error("could not serialize document: {0}")]
    Serialize(serde_json::Error),
}

/// Field set for creating or editing a transaction. The store assigns the id.
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub description: String,
    pub amount: Decimal,
    pub date: String,
    pub category: String,
    pub bank: String,
    pub status: Status,
    pub receipt: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CardInput {
    pub name: String,
    pub bank: String,
    pub limit: Decimal,
    pub closing_day: u8,
    pub due_day: u8,
    pub color: String,
    pub invoice_total: Decimal,
}

/// Sole owner of the document: everything in memory, the whole document
/// rewritten (atomically) after every mutation.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    doc: Document,
}

impl Store {
    /// Missing file means first run and yields an empty document; a file
    /// that is present but unparseable is an error, never "no data".
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let doc = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            let mut doc: Document =
                serde_json::from_str(&raw).map_err(|source| StoreError::Unreadable {
                    path: path.clone(),
                    source,
                })?;
            assign_missing_ids(&mut doc);
            doc
        } else {
            Document::default()
        };
        Ok(Self { path, doc })
    }

    pub fn open_default() -> anyhow::Result<Self> {
        let path = data_path()?;
        Ok(Self::open(path)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        let json = serde_json::to_string_pretty(&self.doc).map_err(StoreError::Serialize)?;
        // Write-then-rename so a crash mid-write never truncates the document.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }

    // ---- accounts ----

    pub fn accounts(&self) -> &[Account] {
        &self.doc.accounts
    }

    /// Lookup is forgiving about the caller's padding: stored names are
    /// always trimmed, so trim the key too.
    pub fn account(&self, name: &str) -> Option<&Account> {
        let name = name.trim();
        self.doc
            .accounts
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    pub fn add_account(
        &mut self,
        name: &str,
        initial_balance: Decimal,
        description: &str,
        kind: &str,
        color: &str,
    ) -> Result<(), StoreError> {
        let name = name.trim();
        if self.account(name).is_some() {
            return Err(StoreError::DuplicateAccount(name.to_string()));
        }
        self.doc.accounts.push(Account {
            name: name.to_string(),
            balance: initial_balance,
            initial_balance,
            description: description.trim().to_string(),
            kind: kind.trim().to_string(),
            color: color.trim().to_string(),
            created_on: Local::now().format("%d/%m/%Y").to_string(),
        });
        self.persist()
    }

    /// Replaces every user-editable field; initial balance and creation date
    /// survive the edit.
    pub fn update_account(
        &mut self,
        original: &str,
        name: &str,
        balance: Decimal,
        description: &str,
        kind: &str,
        color: &str,
    ) -> Result<(), StoreError> {
        let name = name.trim();
        let clash = self
            .doc
            .accounts
            .iter()
            .any(|a| a.name.eq_ignore_ascii_case(name) && !a.name.eq_ignore_ascii_case(original));
        if clash {
            return Err(StoreError::DuplicateAccount(name.to_string()));
        }
        let acct = self
            .doc
            .accounts
            .iter_mut()
            .find(|a| a.name.eq_ignore_ascii_case(original))
            .ok_or_else(|| StoreError::AccountNotFound(original.to_string()))?;
        acct.name = name.to_string();
        acct.balance = balance;
        acct.description = description.trim().to_string();
        acct.kind = kind.trim().to_string();
        acct.color = color.trim().to_string();
        self.persist()
    }

    /// Removal never cascades: transactions referencing the account stay and
    /// become orphans, exactly as the legacy data allowed.
    pub fn remove_account(&mut self, name: &str) -> Result<(), StoreError> {
        let before = self.doc.accounts.len();
        self.doc
            .accounts
            .retain(|a| !a.name.eq_ignore_ascii_case(name));
        if self.doc.accounts.len() == before {
            return Err(StoreError::AccountNotFound(name.to_string()));
        }
        self.persist()
    }

    /// The account's balance as a pure fold over its linked transactions:
    /// initial balance minus everything posted against it. `doctor` compares
    /// this against the stored balance to spot drift.
    pub fn ledger_balance(&self, name: &str) -> Option<Decimal> {
        let acct = self.account(name)?;
        let posted: Decimal = self
            .doc
            .transactions
            .iter()
            .filter(|t| t.bank.eq_ignore_ascii_case(&acct.name))
            .map(|t| t.amount)
            .sum();
        Some(acct.initial_balance - posted)
    }

    // ---- postings ----
    //
    // A posting is the single place an account balance reacts to a
    // transaction. A bank name matching no account posts nowhere.

    fn apply_posting(&mut self, bank: &str, amount: Decimal) {
        if let Some(acct) = self
            .doc
            .accounts
            .iter_mut()
            .find(|a| a.name.eq_ignore_ascii_case(bank))
        {
            acct.balance -= amount;
        }
    }

    fn reverse_posting(&mut self, bank: &str, amount: Decimal) {
        self.apply_posting(bank, -amount);
    }

    // ---- transactions ----

    pub fn transactions(&self) -> &[Transaction] {
        &self.doc.transactions
    }

    pub fn transaction(&self, id: u64) -> Option<&Transaction> {
        self.doc.transactions.iter().find(|t| t.id == id)
    }

    fn next_transaction_id(&self) -> u64 {
        self.doc.transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    pub fn add_transaction(&mut self, input: TransactionInput) -> Result<u64, StoreError> {
        if parse_flex_date(&input.date).is_none() {
            return Err(StoreError::InvalidDate(input.date));
        }
        let id = self.next_transaction_id();
        let bank = input.bank.trim().to_string();
        self.apply_posting(&bank, input.amount);
        self.doc.transactions.push(Transaction {
            id,
            description: input.description.trim().to_string(),
            amount: input.amount,
            date: input.date,
            category: input.category.trim().to_string(),
            bank,
            status: input.status,
            receipt: input.receipt,
        });
        self.persist()?;
        Ok(id)
    }

    /// Reverses the old posting, applies the new one, then swaps the fields.
    /// The id is stable across edits.
    pub fn edit_transaction(&mut self, id: u64, input: TransactionInput) -> Result<(), StoreError> {
        if parse_flex_date(&input.date).is_none() {
            return Err(StoreError::InvalidDate(input.date));
        }
        let pos = self
            .doc
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TransactionNotFound(id))?;
        let (old_bank, old_amount) = {
            let old = &self.doc.transactions[pos];
            (old.bank.clone(), old.amount)
        };
        let bank = input.bank.trim().to_string();
        self.reverse_posting(&old_bank, old_amount);
        self.apply_posting(&bank, input.amount);
        self.doc.transactions[pos] = Transaction {
            id,
            description: input.description.trim().to_string(),
            amount: input.amount,
            date: input.date,
            category: input.category.trim().to_string(),
            bank,
            status: input.status,
            receipt: input.receipt,
        };
        self.persist()
    }

    pub fn remove_transaction(&mut self, id: u64) -> Result<(), StoreError> {
        let pos = self
            .doc
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TransactionNotFound(id))?;
        let removed = self.doc.transactions.remove(pos);
        self.reverse_posting(&removed.bank, removed.amount);
        self.persist()
    }

    // ---- credit cards ----

    pub fn cards(&self) -> &[CreditCard] {
        &self.doc.cards
    }

    pub fn card(&self, name: &str) -> Option<&CreditCard> {
        let name = name.trim();
        self.doc
            .cards
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    fn next_card_id(&self) -> u64 {
        self.doc.cards.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }

    pub fn add_card(&mut self, input: CardInput) -> Result<u64, StoreError> {
        check_cycle_days(&input)?;
        let name = input.name.trim();
        if self.card(name).is_some() {
            return Err(StoreError::DuplicateCard(name.to_string()));
        }
        let id = self.next_card_id();
        self.doc.cards.push(CreditCard {
            id,
            name: name.to_string(),
            bank: input.bank.trim().to_string(),
            limit: input.limit,
            closing_day: input.closing_day,
            due_day: input.due_day,
            color: input.color.trim().to_string(),
            invoice_total: input.invoice_total,
        });
        self.persist()?;
        Ok(id)
    }

    pub fn update_card(&mut self, id: u64, input: CardInput) -> Result<(), StoreError> {
        check_cycle_days(&input)?;
        let name = input.name.trim();
        let clash = self
            .doc
            .cards
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name) && c.id != id);
        if clash {
            return Err(StoreError::DuplicateCard(name.to_string()));
        }
        let card = self
            .doc
            .cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::CardNotFound(id.to_string()))?;
        card.name = name.to_string();
        card.bank = input.bank.trim().to_string();
        card.limit = input.limit;
        card.closing_day = input.closing_day;
        card.due_day = input.due_day;
        card.color = input.color.trim().to_string();
        card.invoice_total = input.invoice_total;
        self.persist()
    }

    pub fn remove_card(&mut self, name: &str) -> Result<(), StoreError> {
        let before = self.doc.cards.len();
        self.doc.cards.retain(|c| !c.name.eq_ignore_ascii_case(name));
        if self.doc.cards.len() == before {
            return Err(StoreError::CardNotFound(name.to_string()));
        }
        self.persist()
    }
}

fn check_cycle_days(input: &CardInput) -> Result<(), StoreError> {
    for day in [input.closing_day, input.due_day] {
        if !(1..=31).contains(&day) {
            return Err(StoreError::InvalidDay(day));
        }
    }
    Ok(())
}

/// Legacy documents carry no ids; hand them out past the largest id already
/// present so existing ids never move.
fn assign_missing_ids(doc: &mut Document) {
    let mut next = doc
        .transactions
        .iter()
        .map(|t| t.id)
        .max()
        .unwrap_or(0)
        + 1;
    for tx in doc.transactions.iter_mut().filter(|t| t.id == 0) {
        tx.id = next;
        next += 1;
    }
    let mut next = doc.cards.iter().map(|c| c.id).max().unwrap_or(0) + 1;
    for card in doc.cards.iter_mut().filter(|c| c.id == 0) {
        card.id = next;
        next += 1;
    }
}
