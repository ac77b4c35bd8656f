// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::client::BondingQueryClient;
use crate::error::BondingError;
use crate::pledge::PledgeUpdate;
use nym_bonding_types::fees::FeeDetails;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Account category a transaction debits.
#[derive(
    Display, EnumString, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TokenPool {
    Balance,
    Locked,
}

/// Which funds backed the node's pledge. The source fixes both the simulation
/// entry point and the submission path, so the two can never be mixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FundingSource {
    /// Pledge placed from the operator's liquid balance.
    Direct,
    /// Pledge placed through the vesting contract with locked tokens.
    Proxied,
}

impl FundingSource {
    pub fn token_pool(self) -> TokenPool {
        match self {
            FundingSource::Direct => TokenPool::Balance,
            FundingSource::Proxied => TokenPool::Locked,
        }
    }

    /// Runs the fee simulation on the entry point matching this funding source.
    pub async fn simulate_update_bond<C>(
        self,
        client: &C,
        pledge_update: PledgeUpdate,
    ) -> Result<FeeDetails, BondingError>
    where
        C: BondingQueryClient + Sync + ?Sized,
    {
        match self {
            FundingSource::Direct => client.simulate_update_bond(pledge_update).await,
            FundingSource::Proxied => client.simulate_vesting_update_bond(pledge_update).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funding_source_fixes_the_token_pool() {
        assert_eq!(TokenPool::Balance, FundingSource::Direct.token_pool());
        assert_eq!(TokenPool::Locked, FundingSource::Proxied.token_pool());
    }

    #[test]
    fn token_pool_string_representation() {
        assert_eq!("balance", TokenPool::Balance.to_string());
        assert_eq!("locked", TokenPool::Locked.to_string());
        assert_eq!(TokenPool::Locked, "locked".parse().unwrap());

        assert_eq!(
            "\"locked\"",
            serde_json::to_string(&TokenPool::Locked).unwrap()
        );
    }
}
