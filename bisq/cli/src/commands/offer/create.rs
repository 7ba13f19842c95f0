// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Create offer cli handler

use std::fmt::Debug;

use async_trait::async_trait;
use bisq_sdk::offer::CreateOfferRequest;
use bisq_sdk::OfferDirection;
use clap::Args;

use crate::commands::print_reply;
use crate::{CommandLineHandler, GlobalArguments};

pub(crate) struct CreateOffer;

#[async_trait]
impl CommandLineHandler for CreateOffer {
    type Arguments = CreateOfferArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("create offer with args: {:?}", arguments);

        let client = global.connect().await?;
        let offer = client.create_offer(arguments.to_request()).await?;
        log::info!("created offer {}", offer.id);
        print_reply(&offer);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Create an offer at a fixed or market based price")]
pub(crate) struct CreateOfferArgs {
    #[arg(long, short, help = "Offer direction, buy or sell")]
    pub direction: OfferDirection,
    #[arg(long, short, help = "Counter currency code, e.g. EUR")]
    pub currency_code: String,
    #[arg(long, help = "Amount in satoshis")]
    pub amount: u64,
    #[arg(long, help = "Minimum amount in satoshis, defaults to the amount")]
    pub min_amount: Option<u64>,
    #[arg(
        long,
        required_unless_present = "market_price_margin",
        conflicts_with = "market_price_margin",
        help = "Fixed price in the counter currency"
    )]
    pub price: Option<String>,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Market price margin in percent"
    )]
    pub market_price_margin: Option<f64>,
    #[arg(long, default_value_t = 15.0, help = "Buyer security deposit in percent")]
    pub security_deposit: f64,
    #[arg(
        long,
        requires = "market_price_margin",
        help = "Price in the counter currency's smallest unit at which the offer is deactivated"
    )]
    pub trigger_price: Option<u64>,
    #[arg(long, short, help = "The payment account used by the offer")]
    pub payment_account_id: String,
    #[arg(
        long,
        default_value = "BTC",
        help = "Currency of the maker fee, BTC or BSQ"
    )]
    pub maker_fee_currency_code: String,
}

impl CreateOfferArgs {
    fn to_request(&self) -> CreateOfferRequest {
        CreateOfferRequest {
            currency_code: self.currency_code.clone(),
            direction: self.direction.to_string(),
            price: self.price.clone().unwrap_or_default(),
            use_market_based_price: self.market_price_margin.is_some(),
            market_price_margin: self.market_price_margin.unwrap_or_default(),
            amount: self.amount,
            min_amount: self.min_amount.unwrap_or(self.amount),
            buyer_security_deposit: self.security_deposit,
            trigger_price: self.trigger_price.unwrap_or_default(),
            payment_account_id: self.payment_account_id.clone(),
            maker_fee_currency_code: self.maker_fee_currency_code.clone(),
        }
    }
}
