// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::currency::{Coin, DecCoin};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SIMULATED_GAS_MULTIPLIER: f32 = 1.3;

/// Explicit fee attached to a transaction, expressed in base denomination coins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TxFee {
    pub amount: Vec<Coin>,
    pub gas_limit: u64,
}

impl TxFee {
    pub fn new(amount: Coin, gas_limit: u64) -> Self {
        TxFee {
            amount: vec![amount],
            gas_limit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Fee {
    Manual(TxFee),
    /// Let the signing client derive the fee from a gas simulation,
    /// scaled by the provided multiplier.
    Auto(Option<f32>),
}

impl From<TxFee> for Fee {
    fn from(fee: TxFee) -> Self {
        Fee::Manual(fee)
    }
}

impl From<f32> for Fee {
    fn from(multiplier: f32) -> Self {
        Fee::Auto(Some(multiplier))
    }
}

impl Default for Fee {
    fn default() -> Self {
        Fee::Auto(Some(DEFAULT_SIMULATED_GAS_MULTIPLIER))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeDetails {
    // expected to be used by the wallet in order to display detailed fee information to the user
    pub amount: Option<DecCoin>,
    pub fee: Fee,
}

impl FeeDetails {
    pub fn new(amount: Option<DecCoin>, fee: Fee) -> Self {
        FeeDetails { amount, fee }
    }
}
