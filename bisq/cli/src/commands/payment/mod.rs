// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
use clap::{Args, Subcommand};

use crate::commands::payment::account::{
    CreatePaymentAccount, CreatePaymentAccountArgs, ListPaymentAccounts, ListPaymentAccountsArgs,
};
use crate::commands::payment::method::{
    ListPaymentMethods, ListPaymentMethodsArgs, PaymentAccountForm, PaymentAccountFormArgs,
};
use crate::{CommandLineHandler, GlobalArguments};

mod account;
mod method;

#[derive(Debug, Args)]
#[command(name = "payment", about = "payment account related commands")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct PaymentCommandsArgs {
    #[command(subcommand)]
    command: Commands,
}

impl PaymentCommandsArgs {
    pub async fn handle(&self, global: &GlobalArguments) -> anyhow::Result<()> {
        match &self.command {
            Commands::Accounts(args) => ListPaymentAccounts::handle(global, args).await,
            Commands::Methods(args) => ListPaymentMethods::handle(global, args).await,
            Commands::Form(args) => PaymentAccountForm::handle(global, args).await,
            Commands::Create(args) => CreatePaymentAccount::handle(global, args).await,
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Accounts(ListPaymentAccountsArgs),
    Methods(ListPaymentMethodsArgs),
    Form(PaymentAccountFormArgs),
    Create(CreatePaymentAccountArgs),
}
