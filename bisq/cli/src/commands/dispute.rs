// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Dispute agent cli handlers.

use std::fmt::Debug;

use async_trait::async_trait;
use bisq_sdk::DisputeAgentType;
use clap::{Args, Subcommand};

use crate::{CommandLineHandler, GlobalArguments};

#[derive(Debug, Args)]
#[command(name = "dispute-agent", about = "dispute agent related commands")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct DisputeAgentCommandsArgs {
    #[command(subcommand)]
    command: Commands,
}

impl DisputeAgentCommandsArgs {
    pub async fn handle(&self, global: &GlobalArguments) -> anyhow::Result<()> {
        match &self.command {
            Commands::Register(args) => RegisterDisputeAgent::handle(global, args).await,
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Register(RegisterDisputeAgentArgs),
}

pub(crate) struct RegisterDisputeAgent;

#[async_trait]
impl CommandLineHandler for RegisterDisputeAgent {
    type Arguments = RegisterDisputeAgentArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("register dispute agent of type: {}", arguments.agent_type);

        let client = global.connect().await?;
        client
            .register_dispute_agent(arguments.agent_type, &arguments.registration_key)
            .await?;
        log::info!("registered as {}", arguments.agent_type);
        Ok(())
    }
}

#[derive(Args)]
#[command(about = "Register this node as a dispute agent (regtest only)")]
pub(crate) struct RegisterDisputeAgentArgs {
    #[arg(
        long,
        short = 't',
        help = "Agent type: mediator, refundagent or arbitrator"
    )]
    pub agent_type: DisputeAgentType,
    #[arg(long, short = 'k', help = "The dispute agent registration key")]
    pub registration_key: String,
}

impl Debug for RegisterDisputeAgentArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterDisputeAgentArgs")
            .field("agent_type", &self.agent_type)
            .finish_non_exhaustive()
    }
}
