// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Daemon version and method help cli handlers.

use std::fmt::Debug;

use async_trait::async_trait;
use clap::Args;

use crate::{CommandLineHandler, GlobalArguments};

/// Prints the version of the daemon.
pub(crate) struct Version;

#[async_trait]
impl CommandLineHandler for Version {
    type Arguments = VersionArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get version with args: {:?}", arguments);

        let client = global.connect().await?;
        let version = client.get_version().await?;
        println!("{version}");
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Print the version of the daemon")]
pub(crate) struct VersionArgs {}

pub(crate) struct MethodHelp;

#[async_trait]
impl CommandLineHandler for MethodHelp {
    type Arguments = MethodHelpArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get method help with args: {:?}", arguments);

        let client = global.connect().await?;
        let help = client.get_method_help(&arguments.method).await?;
        println!("{help}");
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Print the daemon's help text of an api method")]
pub(crate) struct MethodHelpArgs {
    #[arg(help = "The api method, e.g. getversion or createoffer")]
    pub method: String,
}
