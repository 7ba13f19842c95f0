// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Smoke tests against a running daemon.
//!
//! Run with `BISQ_API_HOST=localhost:9998 BISQ_API_PASSWORD=xyz cargo test -- --ignored`.

use std::env;

use bisq_provider::sdk::OfferDirection;
use bisq_provider::{parse_rpc_url, Client, ClientConfig};

const BISQ_API_HOST: &str = "BISQ_API_HOST";
const BISQ_API_PASSWORD: &str = "BISQ_API_PASSWORD";

async fn connected_client() -> Client {
    let host = env::var(BISQ_API_HOST).expect("BISQ_API_HOST not set");
    let password = env::var(BISQ_API_PASSWORD).expect("BISQ_API_PASSWORD not set");

    let config = ClientConfig::new(parse_rpc_url(&host).unwrap(), password)
        .with_timeout(30)
        .unwrap();
    let mut client = Client::new(config);
    client.connect().await.unwrap();
    client
}

#[tokio::test]
#[ignore]
async fn get_version() {
    let mut client = connected_client().await;
    let version = client.get_version().await.unwrap();
    assert!(!version.is_empty());
    client.close().unwrap();
}

#[tokio::test]
#[ignore]
async fn payment_accounts_and_methods() {
    let client = connected_client().await;

    client.get_payment_accounts().await.unwrap();
    let methods = client.get_payment_methods().await.unwrap();
    assert!(!methods.is_empty());

    let form = client.get_payment_account_form(&methods[0].id).await.unwrap();
    assert_eq!(form["paymentMethodId"], methods[0].id.as_str());
}

#[tokio::test]
#[ignore]
async fn market_price_and_statistics() {
    let client = connected_client().await;

    let price = client.get_market_price("EUR").await.unwrap();
    assert!(price > 0.0);
    client.get_trade_statistics().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn offer_book() {
    let client = connected_client().await;
    for offer in client.get_offers(OfferDirection::Buy, "EUR").await.unwrap() {
        assert_eq!(offer.direction, "BUY");
    }
}

#[tokio::test]
#[ignore]
async fn wallet_state() {
    let client = connected_client().await;

    let balances = client.get_balances("").await.unwrap();
    assert!(balances.btc.is_some());

    let address = client.get_unused_bsq_address().await.unwrap();
    assert!(!address.is_empty());

    client.get_tx_fee_rate().await.unwrap();
    client.get_funding_addresses().await.unwrap();
}
