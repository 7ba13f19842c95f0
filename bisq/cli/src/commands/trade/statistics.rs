// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Trade statistics cli handler

use std::fmt::Debug;

use async_trait::async_trait;
use clap::Args;

use crate::commands::print_reply;
use crate::{CommandLineHandler, GlobalArguments};

pub(crate) struct TradeStatistics;

#[async_trait]
impl CommandLineHandler for TradeStatistics {
    type Arguments = TradeStatisticsArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get trade statistics with args: {:?}", arguments);

        let client = global.connect().await?;
        let mut stats = client.get_trade_statistics().await?;
        log::info!("daemon knows {} trades", stats.len());

        if let Some(currency) = &arguments.currency {
            stats.retain(|s| s.currency.eq_ignore_ascii_case(currency));
        }
        stats.sort_by_key(|s| std::cmp::Reverse(s.date));
        if let Some(limit) = arguments.limit {
            stats.truncate(limit);
        }
        print_reply(&stats);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Print the statistics of past trades, newest first")]
pub(crate) struct TradeStatisticsArgs {
    #[arg(long, short, help = "Only trades in this currency")]
    pub currency: Option<String>,
    #[arg(long, short, help = "Print at most this many trades")]
    pub limit: Option<usize>,
}
