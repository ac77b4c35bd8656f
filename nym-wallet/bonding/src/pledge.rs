// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::BondingError;
use nym_bonding_types::currency::DecCoin;
use nym_bonding_types::fees::Fee;
use serde::{Deserialize, Serialize};

/// The pledge change handed to fee simulation: the bond as it currently exists
/// on chain next to the amount it should be changed to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PledgeUpdate {
    pub current_pledge: DecCoin,
    pub new_pledge: DecCoin,
}

impl PledgeUpdate {
    /// Builds the update, rejecting payloads the contract would reject anyway:
    /// a denomination change or a no-op amount.
    pub fn new(current_pledge: DecCoin, new_pledge: DecCoin) -> Result<Self, BondingError> {
        if current_pledge.denom != new_pledge.denom {
            return Err(BondingError::PledgeUpdateInvalidCurrency {
                current: current_pledge.denom,
                new: new_pledge.denom,
            });
        }
        if current_pledge.amount == new_pledge.amount {
            return Err(BondingError::PledgeUpdateNoOp);
        }

        Ok(PledgeUpdate {
            current_pledge,
            new_pledge,
        })
    }
}

/// Everything the submission call needs once a fee quote exists.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UpdateBondArgs {
    pub current_pledge: DecCoin,
    pub new_pledge: DecCoin,
    pub fee: Option<Fee>,
}

impl UpdateBondArgs {
    pub fn new(pledge_update: PledgeUpdate, fee: Option<Fee>) -> Self {
        UpdateBondArgs {
            current_pledge: pledge_update.current_pledge,
            new_pledge: pledge_update.new_pledge,
            fee,
        }
    }
}
