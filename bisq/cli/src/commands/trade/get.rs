// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Get trade cli handler

use std::fmt::Debug;

use async_trait::async_trait;
use clap::Args;

use crate::commands::print_reply;
use crate::{CommandLineHandler, GlobalArguments};

pub(crate) struct GetTrade;

#[async_trait]
impl CommandLineHandler for GetTrade {
    type Arguments = GetTradeArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get trade with args: {:?}", arguments);

        let client = global.connect().await?;
        let trade = client.get_trade(&arguments.trade_id).await?;
        print_reply(&trade);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Print a trade")]
pub(crate) struct GetTradeArgs {
    #[arg(help = "The trade id, same as the id of the taken offer")]
    pub trade_id: String,
}
