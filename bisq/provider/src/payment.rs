// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Payment account calls.

use bisq_sdk::methods::payment_accounts;
use bisq_sdk::payment::{
    CreatePaymentAccountReply, CreatePaymentAccountRequest, GetPaymentAccountFormReply,
    GetPaymentAccountFormRequest, GetPaymentAccountsReply, GetPaymentAccountsRequest,
    GetPaymentMethodsReply, GetPaymentMethodsRequest,
};
use bisq_sdk::{PaymentAccount, PaymentMethod};
use serde_json::{Map, Value};

use crate::error::ClientError;
use crate::transport::Connector;
use crate::Client;

/// A payment account form: field names mapped to their (template) values.
pub type PaymentAccountForm = Map<String, Value>;

impl<C: Connector> Client<C> {
    /// Creates a payment account from a filled in form, see
    /// [`Client::get_payment_account_form`].
    pub async fn create_payment_account(&self, form: &str) -> Result<PaymentAccount, ClientError> {
        let request = CreatePaymentAccountRequest {
            payment_account_form: form.to_string(),
        };
        let r = self
            .call::<_, CreatePaymentAccountReply>(
                payment_accounts::CREATE_PAYMENT_ACCOUNT,
                request,
            )
            .await?;
        log::debug!("received create_payment_account response: {r:?}");
        r.payment_account
            .ok_or(ClientError::MissingField("payment_account"))
    }

    pub async fn get_payment_accounts(&self) -> Result<Vec<PaymentAccount>, ClientError> {
        let r = self
            .call::<_, GetPaymentAccountsReply>(
                payment_accounts::GET_PAYMENT_ACCOUNTS,
                GetPaymentAccountsRequest {},
            )
            .await?;
        log::debug!("received get_payment_accounts response: {r:?}");
        Ok(r.payment_accounts)
    }

    /// Returns all payment methods the daemon supports.
    pub async fn get_payment_methods(&self) -> Result<Vec<PaymentMethod>, ClientError> {
        let r = self
            .call::<_, GetPaymentMethodsReply>(
                payment_accounts::GET_PAYMENT_METHODS,
                GetPaymentMethodsRequest {},
            )
            .await?;
        log::debug!("received get_payment_methods response: {r:?}");
        Ok(r.payment_methods)
    }

    /// Returns the blank account form for `payment_method_id`, decoded from the daemon's JSON.
    pub async fn get_payment_account_form(
        &self,
        payment_method_id: &str,
    ) -> Result<PaymentAccountForm, ClientError> {
        let request = GetPaymentAccountFormRequest {
            payment_method_id: payment_method_id.to_string(),
        };
        let r = self
            .call::<_, GetPaymentAccountFormReply>(
                payment_accounts::GET_PAYMENT_ACCOUNT_FORM,
                request,
            )
            .await?;
        log::debug!("received get_payment_account_form response: {r:?}");

        let form = serde_json::from_str(&r.payment_account_form_json)?;
        Ok(form)
    }
}
