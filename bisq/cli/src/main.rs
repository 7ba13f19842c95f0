// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT

#[tokio::main]
async fn main() {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );
    bisq_cli::cli().await;
}
