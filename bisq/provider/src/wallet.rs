// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! BTC and BSQ wallet calls.

use bisq_sdk::methods::wallets;
use bisq_sdk::wallet::*;

use crate::error::ClientError;
use crate::transport::Connector;
use crate::Client;

impl<C: Connector> Client<C> {
    /// Returns the wallet balances. An empty `currency_code` returns both BSQ and BTC.
    pub async fn get_balances(&self, currency_code: &str) -> Result<BalancesInfo, ClientError> {
        let request = GetBalancesRequest {
            currency_code: currency_code.to_string(),
        };
        let r = self
            .call::<_, GetBalancesReply>(wallets::GET_BALANCES, request)
            .await?;
        log::debug!("received get_balances response: {r:?}");
        r.balances.ok_or(ClientError::MissingField("balances"))
    }

    pub async fn get_address_balance(
        &self,
        address: &str,
    ) -> Result<AddressBalanceInfo, ClientError> {
        let request = GetAddressBalanceRequest {
            address: address.to_string(),
        };
        let r = self
            .call::<_, GetAddressBalanceReply>(wallets::GET_ADDRESS_BALANCE, request)
            .await?;
        log::debug!("received get_address_balance response: {r:?}");
        r.address_balance_info
            .ok_or(ClientError::MissingField("address_balance_info"))
    }

    pub async fn get_unused_bsq_address(&self) -> Result<String, ClientError> {
        let r = self
            .call::<_, GetUnusedBsqAddressReply>(
                wallets::GET_UNUSED_BSQ_ADDRESS,
                GetUnusedBsqAddressRequest {},
            )
            .await?;
        log::debug!("received get_unused_bsq_address response: {r:?}");
        Ok(r.address)
    }

    /// Sends `amount` BSQ to `address`. An empty `tx_fee_rate` uses the daemon's fee rate.
    pub async fn send_bsq(
        &self,
        address: &str,
        amount: &str,
        tx_fee_rate: &str,
    ) -> Result<TxInfo, ClientError> {
        let request = SendBsqRequest {
            address: address.to_string(),
            amount: amount.to_string(),
            tx_fee_rate: tx_fee_rate.to_string(),
        };
        let r = self
            .call::<_, SendBsqReply>(wallets::SEND_BSQ, request)
            .await?;
        log::debug!("received send_bsq response: {r:?}");
        r.tx_info.ok_or(ClientError::MissingField("tx_info"))
    }

    /// Sends `amount` BTC to `address`, attaching `memo` to the transaction.
    pub async fn send_btc(
        &self,
        address: &str,
        amount: &str,
        tx_fee_rate: &str,
        memo: &str,
    ) -> Result<TxInfo, ClientError> {
        let request = SendBtcRequest {
            address: address.to_string(),
            amount: amount.to_string(),
            tx_fee_rate: tx_fee_rate.to_string(),
            memo: memo.to_string(),
        };
        let r = self
            .call::<_, SendBtcReply>(wallets::SEND_BTC, request)
            .await?;
        log::debug!("received send_btc response: {r:?}");
        r.tx_info.ok_or(ClientError::MissingField("tx_info"))
    }

    pub async fn get_tx_fee_rate(&self) -> Result<TxFeeRateInfo, ClientError> {
        let r = self
            .call::<_, GetTxFeeRateReply>(wallets::GET_TX_FEE_RATE, GetTxFeeRateRequest {})
            .await?;
        log::debug!("received get_tx_fee_rate response: {r:?}");
        r.tx_fee_rate_info
            .ok_or(ClientError::MissingField("tx_fee_rate_info"))
    }

    /// Sets a custom fee rate in sats/byte.
    pub async fn set_tx_fee_rate_preference(
        &self,
        tx_fee_rate_preference: u64,
    ) -> Result<TxFeeRateInfo, ClientError> {
        let request = SetTxFeeRatePreferenceRequest {
            tx_fee_rate_preference,
        };
        let r = self
            .call::<_, SetTxFeeRatePreferenceReply>(wallets::SET_TX_FEE_RATE_PREFERENCE, request)
            .await?;
        log::debug!("received set_tx_fee_rate_preference response: {r:?}");
        r.tx_fee_rate_info
            .ok_or(ClientError::MissingField("tx_fee_rate_info"))
    }

    /// Reverts to the fee service rate.
    pub async fn unset_tx_fee_rate_preference(&self) -> Result<TxFeeRateInfo, ClientError> {
        let r = self
            .call::<_, UnsetTxFeeRatePreferenceReply>(
                wallets::UNSET_TX_FEE_RATE_PREFERENCE,
                UnsetTxFeeRatePreferenceRequest {},
            )
            .await?;
        log::debug!("received unset_tx_fee_rate_preference response: {r:?}");
        r.tx_fee_rate_info
            .ok_or(ClientError::MissingField("tx_fee_rate_info"))
    }

    pub async fn get_transaction(&self, tx_id: &str) -> Result<TxInfo, ClientError> {
        let request = GetTransactionRequest {
            tx_id: tx_id.to_string(),
        };
        let r = self
            .call::<_, GetTransactionReply>(wallets::GET_TRANSACTION, request)
            .await?;
        log::debug!("received get_transaction response: {r:?}");
        r.tx_info.ok_or(ClientError::MissingField("tx_info"))
    }

    pub async fn get_funding_addresses(&self) -> Result<Vec<AddressBalanceInfo>, ClientError> {
        let r = self
            .call::<_, GetFundingAddressesReply>(
                wallets::GET_FUNDING_ADDRESSES,
                GetFundingAddressesRequest {},
            )
            .await?;
        log::debug!(
            "received get_funding_addresses response: {} addresses",
            r.address_balance_info.len()
        );
        Ok(r.address_balance_info)
    }

    /// Encrypts the wallet with `new_password`, or changes it when `password` is the current one.
    pub async fn set_wallet_password(
        &self,
        password: &str,
        new_password: &str,
    ) -> Result<(), ClientError> {
        let request = SetWalletPasswordRequest {
            password: password.to_string(),
            new_password: new_password.to_string(),
        };
        self.call::<_, SetWalletPasswordReply>(wallets::SET_WALLET_PASSWORD, request)
            .await?;
        Ok(())
    }

    pub async fn remove_wallet_password(&self, password: &str) -> Result<(), ClientError> {
        let request = RemoveWalletPasswordRequest {
            password: password.to_string(),
        };
        self.call::<_, RemoveWalletPasswordReply>(wallets::REMOVE_WALLET_PASSWORD, request)
            .await?;
        Ok(())
    }

    pub async fn lock_wallet(&self) -> Result<(), ClientError> {
        self.call::<_, LockWalletReply>(wallets::LOCK_WALLET, LockWalletRequest {})
            .await?;
        Ok(())
    }

    /// Unlocks the wallet for `timeout_secs` seconds.
    pub async fn unlock_wallet(&self, password: &str, timeout_secs: u64) -> Result<(), ClientError> {
        let request = UnlockWalletRequest {
            password: password.to_string(),
            timeout: timeout_secs,
        };
        self.call::<_, UnlockWalletReply>(wallets::UNLOCK_WALLET, request)
            .await?;
        Ok(())
    }
}
