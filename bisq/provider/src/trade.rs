// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Trade protocol, market price and trade statistics calls.

use bisq_sdk::methods::{price, trade_statistics, trades};
use bisq_sdk::price::{
    GetTradeStatisticsReply, GetTradeStatisticsRequest, MarketPriceReply, MarketPriceRequest,
};
use bisq_sdk::trade::{
    ConfirmPaymentReceivedReply, ConfirmPaymentReceivedRequest, ConfirmPaymentStartedReply,
    ConfirmPaymentStartedRequest, GetTradeReply, GetTradeRequest, KeepFundsReply,
    KeepFundsRequest, TakeOfferReply, TakeOfferRequest, WithdrawFundsReply, WithdrawFundsRequest,
};
use bisq_sdk::{TradeInfo, TradeStatistics3};

use crate::error::ClientError;
use crate::transport::{CallOptions, Connector};
use crate::Client;

/// Receive limit for the trade statistics reply, which easily exceeds the 4 MiB default.
pub const TRADE_STATISTICS_MAX_MESSAGE_SIZE: usize = 52_428_800;

impl<C: Connector> Client<C> {
    /// Returns the market price of bitcoin in `currency_code`.
    pub async fn get_market_price(&self, currency_code: &str) -> Result<f64, ClientError> {
        let request = MarketPriceRequest {
            currency_code: currency_code.to_string(),
        };
        let r = self
            .call::<_, MarketPriceReply>(price::GET_MARKET_PRICE, request)
            .await?;
        log::debug!("received get_market_price response: {r:?}");
        Ok(r.price)
    }

    /// Returns the statistics of all past trades known to the daemon.
    pub async fn get_trade_statistics(&self) -> Result<Vec<TradeStatistics3>, ClientError> {
        let options = CallOptions::new(self.timeout())
            .with_max_decoding_message_size(TRADE_STATISTICS_MAX_MESSAGE_SIZE);
        let r = self
            .call_with::<_, GetTradeStatisticsReply>(
                trade_statistics::GET_TRADE_STATISTICS,
                GetTradeStatisticsRequest {},
                options,
            )
            .await?;
        log::debug!(
            "received get_trade_statistics response: {} entries",
            r.trade_statistics.len()
        );
        Ok(r.trade_statistics)
    }

    pub async fn get_trade(&self, trade_id: &str) -> Result<TradeInfo, ClientError> {
        let request = GetTradeRequest {
            trade_id: trade_id.to_string(),
        };
        let r = self
            .call::<_, GetTradeReply>(trades::GET_TRADE, request)
            .await?;
        log::debug!("received get_trade response: {r:?}");
        r.trade.ok_or(ClientError::MissingField("trade"))
    }

    /// Takes the offer `offer_id`, paying with `payment_account_id` and the taker fee in
    /// `taker_fee_currency_code` (BTC or BSQ).
    pub async fn take_offer(
        &self,
        offer_id: &str,
        payment_account_id: &str,
        taker_fee_currency_code: &str,
    ) -> Result<TradeInfo, ClientError> {
        let request = TakeOfferRequest {
            offer_id: offer_id.to_string(),
            payment_account_id: payment_account_id.to_string(),
            taker_fee_currency_code: taker_fee_currency_code.to_string(),
        };
        let r = self
            .call::<_, TakeOfferReply>(trades::TAKE_OFFER, request)
            .await?;
        log::debug!("received take_offer response: {r:?}");

        match (r.trade, r.failure_reason) {
            (Some(trade), _) => Ok(trade),
            (None, Some(reason)) => Err(ClientError::OfferNotTaken(
                reason.availability_result(),
                reason.description,
            )),
            (None, None) => Err(ClientError::MissingField("trade")),
        }
    }

    /// Tells the peer that the fiat or altcoin payment was sent.
    pub async fn confirm_payment_started(&self, trade_id: &str) -> Result<(), ClientError> {
        let request = ConfirmPaymentStartedRequest {
            trade_id: trade_id.to_string(),
        };
        self.call::<_, ConfirmPaymentStartedReply>(trades::CONFIRM_PAYMENT_STARTED, request)
            .await?;
        Ok(())
    }

    /// Tells the peer that the payment arrived.
    pub async fn confirm_payment_received(&self, trade_id: &str) -> Result<(), ClientError> {
        let request = ConfirmPaymentReceivedRequest {
            trade_id: trade_id.to_string(),
        };
        self.call::<_, ConfirmPaymentReceivedReply>(trades::CONFIRM_PAYMENT_RECEIVED, request)
            .await?;
        Ok(())
    }

    /// Keeps the trade proceeds in the daemon's wallet and closes the trade.
    pub async fn keep_funds(&self, trade_id: &str) -> Result<(), ClientError> {
        let request = KeepFundsRequest {
            trade_id: trade_id.to_string(),
        };
        self.call::<_, KeepFundsReply>(trades::KEEP_FUNDS, request)
            .await?;
        Ok(())
    }

    /// Sends the trade proceeds to an external bitcoin address and closes the trade.
    pub async fn withdraw_funds(
        &self,
        trade_id: &str,
        address: &str,
        memo: &str,
    ) -> Result<(), ClientError> {
        let request = WithdrawFundsRequest {
            trade_id: trade_id.to_string(),
            address: address.to_string(),
            memo: memo.to_string(),
        };
        self.call::<_, WithdrawFundsReply>(trades::WITHDRAW_FUNDS, request)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bisq_sdk::methods::{price, trade_statistics, trades};
    use bisq_sdk::price::{GetTradeStatisticsReply, MarketPriceReply, MarketPriceRequest};
    use bisq_sdk::trade::{
        AvailabilityResultWithDescription, ConfirmPaymentReceivedRequest,
        ConfirmPaymentStartedRequest, GetTradeReply, KeepFundsRequest, TakeOfferReply,
        TakeOfferRequest, WithdrawFundsRequest,
    };
    use bisq_sdk::{AvailabilityResult, TradeInfo, TradeStatistics3};
    use tonic::Code;

    use super::TRADE_STATISTICS_MAX_MESSAGE_SIZE;
    use crate::error::ClientError;
    use crate::testing::{connected_client, idle_client};

    fn trade(id: &str) -> TradeInfo {
        TradeInfo {
            trade_id: id.to_string(),
            short_id: id.chars().take(8).collect(),
            role: "BTC buyer as taker".to_string(),
            state: "SELLER_PUBLISHED_DEPOSIT_TX".to_string(),
            phase: "DEPOSIT_PUBLISHED".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn market_price() {
        let (client, connector) = connected_client().await;
        connector.reply(price::GET_MARKET_PRICE, MarketPriceReply { price: 31_250.75 });

        assert_eq!(client.get_market_price("USD").await.unwrap(), 31_250.75);

        let request: MarketPriceRequest = connector.last_request(price::GET_MARKET_PRICE);
        assert_eq!(request.currency_code, "USD");
    }

    #[tokio::test]
    async fn trade_statistics_raise_receive_limit() {
        let (client, connector) = connected_client().await;
        connector.reply(
            trade_statistics::GET_TRADE_STATISTICS,
            GetTradeStatisticsReply {
                trade_statistics: vec![TradeStatistics3 {
                    currency: "EUR".to_string(),
                    price: 290_000_000,
                    amount: 2_000_000,
                    payment_method: "SEPA".to_string(),
                    ..Default::default()
                }],
            },
        );

        let stats = client.get_trade_statistics().await.unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].payment_method, "SEPA");

        let calls = connector.calls();
        assert_eq!(
            calls[0].options.max_decoding_message_size,
            Some(TRADE_STATISTICS_MAX_MESSAGE_SIZE)
        );
        assert_eq!(calls[0].options.timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn get_trade() {
        let (client, connector) = connected_client().await;
        connector.reply(
            trades::GET_TRADE,
            GetTradeReply {
                trade: Some(trade("83e8b2e2-51b6-4f39-a748-3ebd29c22aea")),
            },
        );

        let r = client
            .get_trade("83e8b2e2-51b6-4f39-a748-3ebd29c22aea")
            .await
            .unwrap();
        assert_eq!(r.short_id, "83e8b2e2");
    }

    #[tokio::test]
    async fn take_offer_returns_trade() {
        let (client, connector) = connected_client().await;
        connector.reply(
            trades::TAKE_OFFER,
            TakeOfferReply {
                trade: Some(trade("t1")),
                failure_reason: None,
            },
        );

        let r = client.take_offer("o1", "acct", "BSQ").await.unwrap();
        assert_eq!(r.trade_id, "t1");

        let request: TakeOfferRequest = connector.last_request(trades::TAKE_OFFER);
        assert_eq!(request.offer_id, "o1");
        assert_eq!(request.payment_account_id, "acct");
        assert_eq!(request.taker_fee_currency_code, "BSQ");
    }

    #[tokio::test]
    async fn take_offer_reports_failure_reason() {
        let (client, connector) = connected_client().await;
        connector.reply(
            trades::TAKE_OFFER,
            TakeOfferReply {
                trade: None,
                failure_reason: Some(AvailabilityResultWithDescription {
                    availability_result: AvailabilityResult::OfferTaken as i32,
                    description: "offer has already been taken".to_string(),
                }),
            },
        );

        match client.take_offer("o1", "acct", "BTC").await {
            Err(ClientError::OfferNotTaken(result, description)) => {
                assert_eq!(result, AvailabilityResult::OfferTaken);
                assert_eq!(description, "offer has already been taken");
            }
            r => panic!("unexpected result: {r:?}"),
        }
    }

    #[tokio::test]
    async fn take_offer_without_trade_or_reason() {
        let (client, _connector) = connected_client().await;
        let r = client.take_offer("o1", "acct", "BTC").await;
        assert!(matches!(r, Err(ClientError::MissingField("trade"))));
    }

    #[tokio::test]
    async fn payment_confirmations_send_trade_id() {
        let (client, connector) = connected_client().await;

        client.confirm_payment_started("t1").await.unwrap();
        client.confirm_payment_received("t2").await.unwrap();
        client.keep_funds("t3").await.unwrap();

        let started: ConfirmPaymentStartedRequest =
            connector.last_request(trades::CONFIRM_PAYMENT_STARTED);
        let received: ConfirmPaymentReceivedRequest =
            connector.last_request(trades::CONFIRM_PAYMENT_RECEIVED);
        let kept: KeepFundsRequest = connector.last_request(trades::KEEP_FUNDS);
        assert_eq!(started.trade_id, "t1");
        assert_eq!(received.trade_id, "t2");
        assert_eq!(kept.trade_id, "t3");

        let paths: Vec<_> = connector.calls().iter().map(|c| c.path).collect();
        assert_eq!(
            paths,
            vec![
                trades::CONFIRM_PAYMENT_STARTED,
                trades::CONFIRM_PAYMENT_RECEIVED,
                trades::KEEP_FUNDS
            ]
        );
    }

    #[tokio::test]
    async fn withdraw_funds() {
        let (client, connector) = connected_client().await;
        connector.fail(
            trades::WITHDRAW_FUNDS,
            Code::FailedPrecondition,
            "trade is already closed",
        );

        let r = client
            .withdraw_funds("t1", "bcrt1qxyz", "to cold storage")
            .await;
        assert_eq!(r.unwrap_err().code(), Some(Code::FailedPrecondition));

        let request: WithdrawFundsRequest = connector.last_request(trades::WITHDRAW_FUNDS);
        assert_eq!(request.trade_id, "t1");
        assert_eq!(request.address, "bcrt1qxyz");
        assert_eq!(request.memo, "to cold storage");
    }

    #[tokio::test]
    async fn trades_require_connection() {
        let client = idle_client();
        assert!(matches!(
            client.get_market_price("EUR").await,
            Err(ClientError::NotConnected)
        ));
        assert!(matches!(
            client.get_trade_statistics().await,
            Err(ClientError::NotConnected)
        ));
        assert!(matches!(
            client.keep_funds("t1").await,
            Err(ClientError::NotConnected)
        ));
    }
}
