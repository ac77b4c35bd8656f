// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::funding::FundingSource;
use cosmwasm_std::Decimal;
use nym_bonding_types::currency::DecCoin;
use serde::{Deserialize, Serialize};

pub type IdentityKey = String;

/// Stake saturation expressed as a ratio, e.g. 0.95 for a node at 95% of the cap.
pub type StakeSaturation = Decimal;

/// The bonded node whose pledge is being changed. Read-only input to the flow,
/// supplied by the wallet once the bond details have been fetched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BondedMixnode {
    pub identity_key: IdentityKey,

    /// Currently pledged stake, in the display denomination.
    pub bond: DecCoin,

    /// Address of the vesting account that placed this bond, if locked tokens were used.
    pub proxy: Option<String>,

    pub stake_saturation: Option<StakeSaturation>,
    pub uncapped_stake_saturation: Option<StakeSaturation>,
}

impl BondedMixnode {
    pub fn funding_source(&self) -> FundingSource {
        if self.proxy.is_some() {
            FundingSource::Proxied
        } else {
            FundingSource::Direct
        }
    }
}
