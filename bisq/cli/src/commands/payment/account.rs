// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Payment account cli handlers

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use async_trait::async_trait;
use clap::Args;
use serde_json::Value;

use crate::commands::print_reply;
use crate::{CommandLineHandler, GlobalArguments};

pub(crate) struct ListPaymentAccounts;

#[async_trait]
impl CommandLineHandler for ListPaymentAccounts {
    type Arguments = ListPaymentAccountsArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("list payment accounts with args: {:?}", arguments);

        let client = global.connect().await?;
        let accounts = client.get_payment_accounts().await?;
        print_reply(&accounts);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "List your payment accounts")]
pub(crate) struct ListPaymentAccountsArgs {}

pub(crate) struct CreatePaymentAccount;

#[async_trait]
impl CommandLineHandler for CreatePaymentAccount {
    type Arguments = CreatePaymentAccountArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("create payment account with args: {:?}", arguments);

        let form = read_form(&arguments.form)?;
        let client = global.connect().await?;
        let account = client.create_payment_account(&form).await?;
        log::info!("created payment account {}", account.id);
        print_reply(&account);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Create a payment account from a filled in form")]
pub(crate) struct CreatePaymentAccountArgs {
    #[arg(long, short, help = "Path of the filled in account form, see `payment form`")]
    pub form: PathBuf,
}

/// Reads the form and checks it is a json object before it is sent to the daemon.
fn read_form(path: &Path) -> anyhow::Result<String> {
    let form = std::fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&form)? {
        Value::Object(_) => Ok(form),
        _ => Err(anyhow!("{} is not a json object", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use indoc::indoc;
    use tempfile::NamedTempFile;

    use super::read_form;

    fn form_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_form_object() {
        let contents = indoc! {r#"
            {
              "paymentMethodId": "F2F",
              "accountName": "cash in town",
              "city": "Berlin",
              "contact": "bisq@example.org",
              "country": "DE",
              "extraInfo": ""
            }
        "#};
        let file = form_file(contents);
        assert_eq!(read_form(file.path()).unwrap(), contents);
    }

    #[test]
    fn rejects_non_object_form() {
        let file = form_file("[\"F2F\"]");
        assert!(read_form(file.path()).is_err());

        let file = form_file("{\"paymentMethodId\": ");
        assert!(read_form(file.path()).is_err());
    }
}
