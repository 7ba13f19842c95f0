// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Offer book calls.

use bisq_sdk::methods::offers;
use bisq_sdk::offer::{
    CancelOfferReply, CancelOfferRequest, CreateOfferReply, CreateOfferRequest, GetMyOfferReply,
    GetMyOfferRequest, GetMyOffersReply, GetMyOffersRequest, GetOfferReply, GetOfferRequest,
    GetOffersReply, GetOffersRequest,
};
use bisq_sdk::{OfferDirection, OfferInfo};

use crate::error::ClientError;
use crate::transport::Connector;
use crate::Client;

impl<C: Connector> Client<C> {
    /// Returns the offer with the given id.
    pub async fn get_offer(&self, id: &str) -> Result<OfferInfo, ClientError> {
        let request = GetOfferRequest { id: id.to_string() };
        let r = self
            .call::<_, GetOfferReply>(offers::GET_OFFER, request)
            .await?;
        log::debug!("received get_offer response: {r:?}");
        r.offer.ok_or(ClientError::MissingField("offer"))
    }

    /// Returns one of our own offers.
    pub async fn get_my_offer(&self, id: &str) -> Result<OfferInfo, ClientError> {
        let request = GetMyOfferRequest { id: id.to_string() };
        let r = self
            .call::<_, GetMyOfferReply>(offers::GET_MY_OFFER, request)
            .await?;
        log::debug!("received get_my_offer response: {r:?}");
        r.offer.ok_or(ClientError::MissingField("offer"))
    }

    /// Returns the available offers in `direction` for `currency_code`.
    pub async fn get_offers(
        &self,
        direction: OfferDirection,
        currency_code: &str,
    ) -> Result<Vec<OfferInfo>, ClientError> {
        let request = GetOffersRequest {
            direction: direction.to_string(),
            currency_code: currency_code.to_string(),
        };
        let r = self
            .call::<_, GetOffersReply>(offers::GET_OFFERS, request)
            .await?;
        log::debug!("received get_offers response: {} offers", r.offers.len());
        Ok(r.offers)
    }

    pub async fn get_my_offers(
        &self,
        direction: OfferDirection,
        currency_code: &str,
    ) -> Result<Vec<OfferInfo>, ClientError> {
        let request = GetMyOffersRequest {
            direction: direction.to_string(),
            currency_code: currency_code.to_string(),
        };
        let r = self
            .call::<_, GetMyOffersReply>(offers::GET_MY_OFFERS, request)
            .await?;
        log::debug!("received get_my_offers response: {} offers", r.offers.len());
        Ok(r.offers)
    }

    pub async fn create_offer(&self, request: CreateOfferRequest) -> Result<OfferInfo, ClientError> {
        let r = self
            .call::<_, CreateOfferReply>(offers::CREATE_OFFER, request)
            .await?;
        log::debug!("received create_offer response: {r:?}");
        r.offer.ok_or(ClientError::MissingField("offer"))
    }

    /// Removes one of our offers from the offer book.
    pub async fn cancel_offer(&self, id: &str) -> Result<(), ClientError> {
        let request = CancelOfferRequest { id: id.to_string() };
        self.call::<_, CancelOfferReply>(offers::CANCEL_OFFER, request)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bisq_sdk::methods::offers;
    use bisq_sdk::offer::{
        CancelOfferRequest, CreateOfferReply, CreateOfferRequest, GetOfferReply, GetOfferRequest,
        GetOffersReply, GetOffersRequest,
    };
    use bisq_sdk::{OfferDirection, OfferInfo};
    use tonic::Code;

    use crate::error::ClientError;
    use crate::testing::{connected_client, idle_client};

    fn offer(id: &str) -> OfferInfo {
        OfferInfo {
            id: id.to_string(),
            direction: "BUY".to_string(),
            price: 350_000_000,
            amount: 1_000_000,
            min_amount: 500_000,
            base_currency_code: "BTC".to_string(),
            counter_currency_code: "EUR".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn get_offer() {
        let (client, connector) = connected_client().await;
        connector.reply(
            offers::GET_OFFER,
            GetOfferReply {
                offer: Some(offer("MLPXRVP-b0fb")),
            },
        );

        let r = client.get_offer("MLPXRVP-b0fb").await.unwrap();
        assert_eq!(r, offer("MLPXRVP-b0fb"));

        let request: GetOfferRequest = connector.last_request(offers::GET_OFFER);
        assert_eq!(request.id, "MLPXRVP-b0fb");
    }

    #[tokio::test]
    async fn missing_offer_in_reply() {
        let (client, _connector) = connected_client().await;

        let r = client.get_my_offer("unknown").await;
        assert!(matches!(r, Err(ClientError::MissingField("offer"))));
    }

    #[tokio::test]
    async fn get_offers_sends_direction_and_currency() {
        let (client, connector) = connected_client().await;
        connector.reply(
            offers::GET_OFFERS,
            GetOffersReply {
                offers: vec![offer("a"), offer("b")],
            },
        );

        let r = client.get_offers(OfferDirection::Sell, "eur").await.unwrap();
        assert_eq!(r.len(), 2);

        let request: GetOffersRequest = connector.last_request(offers::GET_OFFERS);
        assert_eq!(request.direction, "SELL");
        assert_eq!(request.currency_code, "eur");
    }

    #[tokio::test]
    async fn get_my_offers_empty_book() {
        let (client, _connector) = connected_client().await;
        let r = client.get_my_offers(OfferDirection::Buy, "USD").await.unwrap();
        assert!(r.is_empty());
    }

    #[tokio::test]
    async fn create_offer_forwards_request() {
        let (client, connector) = connected_client().await;
        connector.reply(
            offers::CREATE_OFFER,
            CreateOfferReply {
                offer: Some(offer("new")),
            },
        );

        let request = CreateOfferRequest {
            currency_code: "EUR".to_string(),
            direction: OfferDirection::Buy.to_string(),
            use_market_based_price: true,
            market_price_margin: 1.5,
            amount: 1_000_000,
            min_amount: 500_000,
            buyer_security_deposit: 15.0,
            payment_account_id: "f3c1ec8b-9761-458d-b13d-9039c6892413".to_string(),
            maker_fee_currency_code: "BSQ".to_string(),
            ..Default::default()
        };
        let r = client.create_offer(request.clone()).await.unwrap();
        assert_eq!(r.id, "new");

        let sent: CreateOfferRequest = connector.last_request(offers::CREATE_OFFER);
        assert_eq!(sent, request);
    }

    #[tokio::test]
    async fn cancel_offer_propagates_status() {
        let (client, connector) = connected_client().await;
        connector.fail(
            offers::CANCEL_OFFER,
            Code::NotFound,
            "offer with id 'x' not found",
        );

        let r = client.cancel_offer("x").await;
        assert_eq!(r.unwrap_err().code(), Some(Code::NotFound));

        let request: CancelOfferRequest = connector.last_request(offers::CANCEL_OFFER);
        assert_eq!(request.id, "x");
    }

    #[tokio::test]
    async fn offers_require_connection() {
        let client = idle_client();
        assert!(matches!(
            client.get_offers(OfferDirection::Buy, "EUR").await,
            Err(ClientError::NotConnected)
        ));
        assert!(matches!(
            client.cancel_offer("x").await,
            Err(ClientError::NotConnected)
        ));
        assert!(matches!(
            client.create_offer(CreateOfferRequest::default()).await,
            Err(ClientError::NotConnected)
        ));
    }
}
