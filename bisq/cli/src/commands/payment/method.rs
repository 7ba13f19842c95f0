// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Payment method and account form cli handlers

use std::fmt::Debug;
use std::path::PathBuf;

use async_trait::async_trait;
use clap::Args;

use crate::commands::print_reply;
use crate::{CommandLineHandler, GlobalArguments};

pub(crate) struct ListPaymentMethods;

#[async_trait]
impl CommandLineHandler for ListPaymentMethods {
    type Arguments = ListPaymentMethodsArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("list payment methods with args: {:?}", arguments);

        let client = global.connect().await?;
        let methods = client.get_payment_methods().await?;
        if arguments.ids_only {
            for m in methods {
                println!("{}", m.id);
            }
        } else {
            print_reply(&methods);
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "List the payment methods supported by the daemon")]
pub(crate) struct ListPaymentMethodsArgs {
    #[arg(long, help = "Print the method ids only")]
    pub ids_only: bool,
}

/// Fetches the blank form to fill in for `payment create`.
pub(crate) struct PaymentAccountForm;

#[async_trait]
impl CommandLineHandler for PaymentAccountForm {
    type Arguments = PaymentAccountFormArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get payment account form with args: {:?}", arguments);

        let client = global.connect().await?;
        let form = client
            .get_payment_account_form(&arguments.payment_method_id)
            .await?;
        let json = serde_json::to_string_pretty(&form)?;

        match &arguments.output {
            Some(path) => {
                std::fs::write(path, json)?;
                log::info!("wrote {} form to {}", arguments.payment_method_id, path.display());
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Print the account form of a payment method as json")]
pub(crate) struct PaymentAccountFormArgs {
    #[arg(help = "The payment method id, e.g. SEPA")]
    pub payment_method_id: String,
    #[arg(long, short, help = "Write the form to this file instead of stdout")]
    pub output: Option<PathBuf>,
}
