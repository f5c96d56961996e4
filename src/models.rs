// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account types offered by the CLI. The store itself accepts any string so
/// documents written by older builds keep loading.
pub const ACCOUNT_TYPES: &[&str] = &[
    "Conta Corrente",
    "Conta Poupança",
    "Carteira",
    "Investimentos",
    "Outros",
];

/// Named display colors, as (label, hex) pairs.
pub const COLORS: &[(&str, &str)] = &[
    ("Azul", "#2196F3"),
    ("Vermelho", "#E53935"),
    ("Verde", "#43A047"),
    ("Roxo", "#8E24AA"),
    ("Laranja", "#FB8C00"),
    ("Cinza", "#757575"),
];

pub fn color_hex(label: &str) -> Option<&'static str> {
    COLORS
        .iter()
        .find(|(l, _)| l.eq_ignore_ascii_case(label))
        .map(|(_, hex)| *hex)
}

/// The whole on-disk document. Field names keep the Portuguese keys of the
/// legacy data files; missing collections default to empty so older files
/// load without migration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "contas", default)]
    pub accounts: Vec<Account>,
    #[serde(rename = "despesas", default)]
    pub transactions: Vec<Transaction>,
    #[serde(rename = "cartoes", default)]
    pub cards: Vec<CreditCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "saldo")]
    pub balance: Decimal,
    #[serde(rename = "saldo_inicial", default)]
    pub initial_balance: Decimal,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "tipo", default)]
    pub kind: String,
    #[serde(rename = "cor", default)]
    pub color: String,
    #[serde(rename = "data_criacao", default)]
    pub created_on: String,
}

/// Settlement status of a transaction. Older documents lack the field and
/// default to `Pendente`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pendente,
    Pago,
    Cancelado,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendente => "Pendente",
            Self::Pago => "Pago",
            Self::Cancelado => "Cancelado",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pendente" => Some(Self::Pendente),
            "pago" => Some(Self::Pago),
            "cancelado" => Some(Self::Cancelado),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ledger entry. Identity is the generated `id`, never the position
/// in the collection. The date stays a string in the document; parsing
/// happens at the query layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: u64,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub amount: Decimal,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "tag", default)]
    pub category: String,
    #[serde(rename = "banco", default)]
    pub bank: String,
    #[serde(rename = "situacao", default)]
    pub status: Status,
    #[serde(rename = "comprovante", default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCard {
    #[serde(default)]
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "banco", default)]
    pub bank: String,
    #[serde(rename = "limite")]
    pub limit: Decimal,
    #[serde(rename = "dia_fechamento")]
    pub closing_day: u8,
    #[serde(rename = "dia_vencimento")]
    pub due_day: u8,
    #[serde(rename = "cor", default)]
    pub color: String,
    #[serde(rename = "fatura_atual", default)]
    pub invoice_total: Decimal,
}
