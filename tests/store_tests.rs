// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use contaclip::models::Status;
use contaclip::store::{CardInput, Store, StoreError, TransactionInput};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tempfile::tempdir;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(description: &str, amount: &str, date: &str, category: &str, bank: &str) -> TransactionInput {
    TransactionInput {
        description: description.to_string(),
        amount: dec(amount),
        date: date.to_string(),
        category: category.to_string(),
        bank: bank.to_string(),
        status: Status::Pendente,
        receipt: None,
    }
}

fn store_at(dir: &tempfile::TempDir) -> (Store, PathBuf) {
    let path = dir.path().join("dados.json");
    (Store::open(&path).unwrap(), path)
}

#[test]
fn account_names_unique_ignoring_case() {
    let dir = tempdir().unwrap();
    let (mut store, _) = store_at(&dir);

    store
        .add_account("Nubank", dec("100.0"), "main", "Conta Corrente", "#2196F3")
        .unwrap();
    let err = store
        .add_account("nubank", dec("50"), "", "Carteira", "#757575")
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateAccount(_)));

    assert_eq!(store.accounts().len(), 1);
    assert_eq!(store.accounts()[0].name, "Nubank");
    assert_eq!(store.accounts()[0].balance, dec("100.0"));
}

#[test]
fn removing_account_never_touches_transactions() {
    let dir = tempdir().unwrap();
    let (mut store, _) = store_at(&dir);

    store
        .add_account("Itau", dec("500"), "", "Conta Corrente", "#2196F3")
        .unwrap();
    store.add_transaction(tx("mercado", "80", "10/03/2024", "Alimentação", "Itau")).unwrap();
    store.add_transaction(tx("farmacia", "25", "11/03/2024", "Saúde", "Itau")).unwrap();

    store.remove_account("itau").unwrap();
    assert!(store.account("Itau").is_none());
    // Orphaning, not cascading: both entries survive.
    assert_eq!(store.transactions().len(), 2);

    let err = store.remove_account("Itau").unwrap_err();
    assert!(matches!(err, StoreError::AccountNotFound(_)));
}

#[test]
fn postings_track_add_edit_remove() {
    let dir = tempdir().unwrap();
    let (mut store, _) = store_at(&dir);

    store
        .add_account("Nubank", dec("100"), "", "Conta Corrente", "#2196F3")
        .unwrap();
    store
        .add_account("Caixa", dec("100"), "", "Conta Poupança", "#43A047")
        .unwrap();

    let id = store
        .add_transaction(tx("jantar", "40", "01/04/2024", "Alimentação", "Nubank"))
        .unwrap();
    assert_eq!(store.account("Nubank").unwrap().balance, dec("60"));

    // Moving the expense to another bank reverses the old posting first.
    store
        .edit_transaction(id, tx("jantar", "10", "01/04/2024", "Alimentação", "Caixa"))
        .unwrap();
    assert_eq!(store.account("Nubank").unwrap().balance, dec("100"));
    assert_eq!(store.account("Caixa").unwrap().balance, dec("90"));

    store.remove_transaction(id).unwrap();
    assert_eq!(store.account("Caixa").unwrap().balance, dec("100"));
    assert!(store.transactions().is_empty());
}

#[test]
fn ledger_balance_is_fold_over_linked_transactions() {
    let dir = tempdir().unwrap();
    let (mut store, _) = store_at(&dir);

    store
        .add_account("Nubank", dec("100"), "", "Conta Corrente", "#2196F3")
        .unwrap();
    store.add_transaction(tx("a", "30", "01/04/2024", "", "Nubank")).unwrap();
    store.add_transaction(tx("b", "-5", "02/04/2024", "", "nubank")).unwrap();
    store.add_transaction(tx("orphan", "99", "03/04/2024", "", "Inter")).unwrap();

    assert_eq!(store.ledger_balance("Nubank"), Some(dec("75")));
    // Postings and the fold agree as long as nobody hand-edits a balance.
    assert_eq!(store.account("Nubank").unwrap().balance, dec("75"));
    assert_eq!(store.ledger_balance("Inter"), None);
}

#[test]
fn edit_round_trips_and_keeps_id() {
    let dir = tempdir().unwrap();
    let (mut store, _) = store_at(&dir);

    let id = store
        .add_transaction(tx("luz", "120", "05/05/2024", "Casa", "Caixa"))
        .unwrap();
    let mut edited = tx("energia", "130.50", "2024-05-06", "Moradia", "Caixa");
    edited.status = Status::Pago;
    edited.receipt = Some("docs/conta-luz.pdf".to_string());
    store.edit_transaction(id, edited).unwrap();

    let got = store.transaction(id).unwrap();
    assert_eq!(got.description, "energia");
    assert_eq!(got.amount, dec("130.50"));
    assert_eq!(got.date, "2024-05-06");
    assert_eq!(got.category, "Moradia");
    assert_eq!(got.status, Status::Pago);
    assert_eq!(got.receipt.as_deref(), Some("docs/conta-luz.pdf"));
}

#[test]
fn unknown_id_fails_without_mutating() {
    let dir = tempdir().unwrap();
    let (mut store, _) = store_at(&dir);

    for i in 0..4 {
        store
            .add_transaction(tx(&format!("t{}", i), "1", "01/01/2024", "", ""))
            .unwrap();
    }
    let err = store.remove_transaction(99).unwrap_err();
    assert!(matches!(err, StoreError::TransactionNotFound(99)));
    assert_eq!(store.transactions().len(), 4);

    let err = store.edit_transaction(99, tx("x", "1", "01/01/2024", "", "")).unwrap_err();
    assert!(matches!(err, StoreError::TransactionNotFound(99)));
}

#[test]
fn rejects_dates_outside_accepted_formats() {
    let dir = tempdir().unwrap();
    let (mut store, _) = store_at(&dir);

    let err = store
        .add_transaction(tx("aluguel", "900", "May 1st 2024", "Casa", ""))
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidDate(_)));
    assert!(store.transactions().is_empty());
}

#[test]
fn document_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dados.json");
    {
        let mut store = Store::open(&path).unwrap();
        store
            .add_account("Nubank", dec("10"), "", "Carteira", "#2196F3")
            .unwrap();
        store.add_transaction(tx("café", "4.50", "02/02/2024", "Alimentação", "Nubank")).unwrap();
    }
    // No stray temp file after the atomic rename.
    assert!(!path.with_extension("json.tmp").exists());

    let store = Store::open(&path).unwrap();
    assert_eq!(store.accounts().len(), 1);
    assert_eq!(store.transactions().len(), 1);
    assert_eq!(store.transactions()[0].description, "café");
    assert_eq!(store.account("Nubank").unwrap().balance, dec("5.50"));
}

#[test]
fn absent_file_is_first_run_but_corrupt_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dados.json");

    let store = Store::open(&path).unwrap();
    assert!(store.accounts().is_empty());
    assert!(store.transactions().is_empty());

    std::fs::write(&path, "{ not json").unwrap();
    let err = Store::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Unreadable { .. }));
}

#[test]
fn legacy_document_loads_with_defaults_and_fresh_ids() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dados.json");
    std::fs::write(
        &path,
        r#"{
            "contas": [
                {"nome": "Nubank", "saldo": "100"}
            ],
            "despesas": [
                {"descricao": "padaria", "valor": "12", "data": "03/03/2023"},
                {"descricao": "uber", "valor": "20", "data": "04/03/2023", "tag": "Transporte"}
            ]
        }"#,
    )
    .unwrap();

    let store = Store::open(&path).unwrap();
    let acct = store.account("Nubank").unwrap();
    assert_eq!(acct.initial_balance, Decimal::ZERO);
    assert_eq!(acct.kind, "");

    let txs = store.transactions();
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[0].id, 1);
    assert_eq!(txs[1].id, 2);
    assert_eq!(txs[0].status, Status::Pendente);
    assert_eq!(txs[0].bank, "");
    assert!(store.cards().is_empty());
}

#[test]
fn card_ids_and_uniqueness() {
    let dir = tempdir().unwrap();
    let (mut store, _) = store_at(&dir);

    let input = CardInput {
        name: "Platinum".to_string(),
        bank: "Itau".to_string(),
        limit: dec("5000"),
        closing_day: 28,
        due_day: 5,
        color: "#8E24AA".to_string(),
        invoice_total: Decimal::ZERO,
    };
    let first = store.add_card(input.clone()).unwrap();
    assert_eq!(first, 1);

    let err = store
        .add_card(CardInput {
            name: "platinum".to_string(),
            ..input.clone()
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateCard(_)));

    let second = store
        .add_card(CardInput {
            name: "Gold".to_string(),
            ..input.clone()
        })
        .unwrap();
    assert_eq!(second, 2);

    store
        .update_card(
            first,
            CardInput {
                invoice_total: dec("321.90"),
                ..input.clone()
            },
        )
        .unwrap();
    assert_eq!(store.card("Platinum").unwrap().invoice_total, dec("321.90"));

    store.remove_card("gold").unwrap();
    assert_eq!(store.cards().len(), 1);
    // Ids never shrink back.
    assert_eq!(store.add_card(CardInput { name: "Black".to_string(), ..input }).unwrap(), 2);
}

#[test]
fn card_cycle_days_validated() {
    let dir = tempdir().unwrap();
    let (mut store, _) = store_at(&dir);

    let err = store
        .add_card(CardInput {
            name: "Broken".to_string(),
            bank: String::new(),
            limit: dec("100"),
            closing_day: 0,
            due_day: 32,
            color: String::new(),
            invoice_total: Decimal::ZERO,
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidDay(0)));
    assert!(store.cards().is_empty());
}

#[test]
fn rename_collision_rejected_but_self_rename_ok() {
    let dir = tempdir().unwrap();
    let (mut store, _) = store_at(&dir);

    store
        .add_account("Nubank", dec("10"), "", "Carteira", "")
        .unwrap();
    store
        .add_account("Inter", dec("20"), "", "Carteira", "")
        .unwrap();

    let err = store
        .update_account("Inter", "NUBANK", dec("20"), "", "Carteira", "")
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateAccount(_)));

    // Changing only the casing of the same account is allowed.
    store
        .update_account("Nubank", "NuBank", dec("15"), "roxinho", "Carteira", "")
        .unwrap();
    let acct = store.account("nubank").unwrap();
    assert_eq!(acct.name, "NuBank");
    assert_eq!(acct.balance, dec("15"));
    assert_eq!(acct.description, "roxinho");
}

#[test]
fn lookups_ignore_padding_around_names() {
    let dir = tempdir().unwrap();
    let (mut store, _) = store_at(&dir);

    store
        .add_account("Nubank", dec("100"), "", "Conta Corrente", "")
        .unwrap();
    store
        .add_card(CardInput {
            name: "Gold".to_string(),
            bank: String::new(),
            limit: dec("1000"),
            closing_day: 5,
            due_day: 12,
            color: String::new(),
            invoice_total: Decimal::ZERO,
        })
        .unwrap();

    // Flags arrive with whatever padding the shell left on them.
    assert!(store.account(" nubank ").is_some());
    assert!(store.account("NUBANK").is_some());
    assert!(store.card("  gold").is_some());
    assert!(store.account("nu").is_none());
}
