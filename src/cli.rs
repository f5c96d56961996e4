// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("from").long("from").help("Inclusive start date"))
        .arg(Arg::new("to").long("to").help("Inclusive end date"))
        .arg(
            Arg::new("category")
                .long("category")
                .help("Category substring (case-insensitive)"),
        )
        .arg(
            Arg::new("bank")
                .long("bank")
                .help("Bank/account substring (case-insensitive)"),
        )
        .arg(
            Arg::new("search")
                .long("search")
                .help("Description substring (case-insensitive)"),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .help("Sort key: data|valor|descricao"),
        )
}

fn account_field_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("description")
            .long("description")
            .default_value(""),
    )
    .arg(
        Arg::new("type")
            .long("type")
            .default_value("Conta Corrente")
            .help("Account type (e.g. Conta Corrente, Carteira)"),
    )
    .arg(
        Arg::new("color")
            .long("color")
            .default_value("Azul")
            .help("Display color label or hex"),
    )
}

fn tx_field_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("description").long("description").required(true))
        .arg(Arg::new("amount").long("amount").required(true))
        .arg(
            Arg::new("date")
                .long("date")
                .required(true)
                .help("dd/mm/yyyy, yyyy-mm-dd or dd-mm-yyyy"),
        )
        .arg(Arg::new("category").long("category").default_value(""))
        .arg(
            Arg::new("bank")
                .long("bank")
                .default_value("")
                .help("Linked account name; its balance absorbs the amount"),
        )
        .arg(
            Arg::new("status")
                .long("status")
                .default_value("Pendente")
                .help("Pendente|Pago|Cancelado"),
        )
        .arg(Arg::new("receipt").long("receipt").help("Attached document path"))
}

fn card_field_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("bank").long("bank").default_value(""))
        .arg(Arg::new("limit").long("limit").required(true))
        .arg(
            Arg::new("closing")
                .long("closing")
                .required(true)
                .value_parser(clap::value_parser!(u8))
                .help("Invoice closing day (1-31)"),
        )
        .arg(
            Arg::new("due")
                .long("due")
                .required(true)
                .value_parser(clap::value_parser!(u8))
                .help("Invoice due day (1-31)"),
        )
        .arg(Arg::new("color").long("color").default_value("Azul"))
}

pub fn build_cli() -> Command {
    Command::new("contaclip")
        .version(crate_version!())
        .about("Personal expense, account, and credit-card tracking over a JSON ledger")
        .subcommand(Command::new("init").about("Create the data file location and report it"))
        .subcommand(
            Command::new("account")
                .about("Manage bank accounts")
                .subcommand(account_field_args(
                    Command::new("add")
                        .about("Add an account")
                        .arg(Arg::new("name").required(true))
                        .arg(
                            Arg::new("balance")
                                .long("balance")
                                .default_value("0")
                                .help("Initial balance"),
                        ),
                ))
                .subcommand(json_flags(Command::new("list").about("List accounts")))
                .subcommand(account_field_args(
                    Command::new("edit")
                        .about("Replace an account's fields")
                        .arg(Arg::new("original").required(true).help("Current name"))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("balance").long("balance").required(true)),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove an account (linked transactions are kept)")
                        .arg(Arg::new("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(tx_field_args(Command::new("add").about("Record a transaction")))
                .subcommand(json_flags(filter_args(
                    Command::new("list").about("List transactions, filtered and sorted"),
                )))
                .subcommand(tx_field_args(
                    Command::new("edit")
                        .about("Replace a transaction's fields by id")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(clap::value_parser!(u64)),
                        ),
                ))
                .subcommand(
                    Command::new("rm").about("Remove a transaction by id").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(clap::value_parser!(u64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("card")
                .about("Manage credit cards")
                .subcommand(card_field_args(
                    Command::new("add")
                        .about("Add a credit card")
                        .arg(Arg::new("name").required(true)),
                ))
                .subcommand(json_flags(Command::new("list").about("List credit cards")))
                .subcommand(card_field_args(
                    Command::new("edit")
                        .about("Replace a card's fields")
                        .arg(Arg::new("original").required(true).help("Current name"))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("invoice")
                                .long("invoice")
                                .default_value("0")
                                .help("Current invoice total"),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a credit card")
                        .arg(Arg::new("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Summaries over the ledger")
                .subcommand(json_flags(
                    Command::new("by-category").about("Total amount per category"),
                ))
                .subcommand(json_flags(
                    Command::new("by-bank").about("Total amount per bank"),
                ))
                .subcommand(json_flags(
                    Command::new("balances").about("Account balances and their total"),
                )),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                filter_args(
                    Command::new("transactions")
                        .about("Export transactions, honoring the list filters and saved defaults")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
            ),
        )
        .subcommand(
            Command::new("settings")
                .about("UI preferences document")
                .subcommand(json_flags(Command::new("show").about("Show settings")))
                .subcommand(
                    Command::new("set")
                        .about("Set one settings key")
                        .arg(
                            Arg::new("key").required(true).help(
                                "tema|moeda|formato_data|sidebar|sort|filtro_data_inicio|filtro_data_fim|filtro_tag|filtro_banco|filtro_busca",
                            ),
                        )
                        .arg(
                            Arg::new("value")
                                .required(true)
                                .help("New value; empty clears filter/sort keys"),
                        ),
                ),
        )
        .subcommand(Command::new("doctor").about("Check the document for inconsistencies"))
}
