// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Wallet encryption cli handlers. Passwords never show up in the logs.

use std::fmt::{self, Debug};

use async_trait::async_trait;
use clap::Args;

use crate::{CommandLineHandler, GlobalArguments};

pub(crate) struct SetWalletPassword;

#[async_trait]
impl CommandLineHandler for SetWalletPassword {
    type Arguments = SetWalletPasswordArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("set wallet password");

        let client = global.connect().await?;
        client
            .set_wallet_password(
                arguments.wallet_password.as_deref().unwrap_or_default(),
                &arguments.new_wallet_password,
            )
            .await?;
        log::info!("wallet password set");
        Ok(())
    }
}

#[derive(Args)]
#[command(about = "Encrypt the wallet or change its password")]
pub(crate) struct SetWalletPasswordArgs {
    #[arg(long, help = "The current password, if the wallet is encrypted")]
    pub wallet_password: Option<String>,
    #[arg(long, help = "The new password")]
    pub new_wallet_password: String,
}

impl Debug for SetWalletPasswordArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SetWalletPasswordArgs { .. }")
    }
}

pub(crate) struct RemoveWalletPassword;

#[async_trait]
impl CommandLineHandler for RemoveWalletPassword {
    type Arguments = RemoveWalletPasswordArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("remove wallet password");

        let client = global.connect().await?;
        client
            .remove_wallet_password(&arguments.wallet_password)
            .await?;
        log::info!("wallet password removed");
        Ok(())
    }
}

#[derive(Args)]
#[command(about = "Decrypt the wallet and remove its password")]
pub(crate) struct RemoveWalletPasswordArgs {
    #[arg(long, help = "The current password")]
    pub wallet_password: String,
}

impl Debug for RemoveWalletPasswordArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RemoveWalletPasswordArgs { .. }")
    }
}

pub(crate) struct LockWallet;

#[async_trait]
impl CommandLineHandler for LockWallet {
    type Arguments = LockWalletArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("lock wallet with args: {:?}", arguments);

        let client = global.connect().await?;
        client.lock_wallet().await?;
        log::info!("wallet locked");
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Lock an unlocked encrypted wallet")]
pub(crate) struct LockWalletArgs {}

pub(crate) struct UnlockWallet;

#[async_trait]
impl CommandLineHandler for UnlockWallet {
    type Arguments = UnlockWalletArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("unlock wallet for {}s", arguments.seconds);

        let client = global.connect().await?;
        client
            .unlock_wallet(&arguments.wallet_password, arguments.seconds)
            .await?;
        log::info!("wallet unlocked for {}s", arguments.seconds);
        Ok(())
    }
}

#[derive(Args)]
#[command(about = "Unlock an encrypted wallet for a while")]
pub(crate) struct UnlockWalletArgs {
    #[arg(long, help = "The wallet password")]
    pub wallet_password: String,
    #[arg(long, help = "Seconds until the wallet locks again")]
    pub seconds: u64,
}

impl Debug for UnlockWalletArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnlockWalletArgs")
            .field("seconds", &self.seconds)
            .finish_non_exhaustive()
    }
}
