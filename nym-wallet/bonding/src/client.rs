// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::BondingError;
use crate::pledge::PledgeUpdate;
use crate::validation;
use async_trait::async_trait;
use nym_bonding_types::fees::FeeDetails;

/// Chain-side operations the bond update flow consumes. All of them are
/// dry runs: the actual state-changing submission happens through
/// [BondUpdateEvents](crate::events::BondUpdateEvents) instead.
#[async_trait]
pub trait BondingQueryClient {
    /// Simulates a pledge change performed with liquid tokens.
    async fn simulate_update_bond(
        &self,
        pledge_update: PledgeUpdate,
    ) -> Result<FeeDetails, BondingError>;

    /// Simulates a pledge change performed through the vesting contract.
    async fn simulate_vesting_update_bond(
        &self,
        pledge_update: PledgeUpdate,
    ) -> Result<FeeDetails, BondingError>;

    /// Checks a raw amount string against the minimum bond. Backends with
    /// stricter range or precision rules can override this with a round trip.
    async fn validate_amount(&self, amount: &str, minimum: &str) -> Result<bool, BondingError> {
        Ok(validation::validate_amount(amount, minimum))
    }
}
