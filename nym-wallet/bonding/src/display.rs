// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

//! Values the wallet presents in each phase of the flow. Nothing here renders;
//! these are the pure projections of the flow state.

use crate::funding::FundingSource;
use crate::mixnode::{BondedMixnode, StakeSaturation};
use cosmwasm_std::Decimal;
use nym_bonding_types::currency::DecCoin;
use nym_bonding_types::fees::FeeDetails;

/// Pre-rendered balance strings supplied by the wallet. Which one is shown
/// depends on the node's funding source.
#[derive(Debug, Clone, Default)]
pub struct WalletBalances {
    pub balance: Option<String>,
    pub locked_balance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaturationDisplay {
    /// Percentage value, e.g. "95.5" for a node at 95.5% of the stake cap.
    pub percent: String,

    /// Set when the value comes from the uncapped saturation, i.e. the node is
    /// over the cap and the wallet should use a warning treatment.
    pub warning: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountEntryView {
    pub balance_label: &'static str,
    pub account_balance: Option<String>,
    pub current_bond: String,
    pub saturation: Option<SaturationDisplay>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    pub new_bond: String,
    pub current_bond: String,
    pub fee: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BondUpdateView {
    AmountEntry(AmountEntryView),
    Confirmation(ConfirmationView),
}

/// Converts a saturation ratio into the percentage value shown next to a node,
/// e.g. 0.955 into "95.5". Exact decimal arithmetic, no floats involved.
pub fn to_percent_string(ratio: StakeSaturation) -> String {
    (ratio * Decimal::from_ratio(100u128, 1u128)).to_string()
}

pub(crate) fn amount_entry_view(
    node: &BondedMixnode,
    balances: &WalletBalances,
) -> AmountEntryView {
    let locked = node.funding_source() == FundingSource::Proxied;
    AmountEntryView {
        balance_label: if locked {
            "Locked account balance"
        } else {
            "Account balance"
        },
        account_balance: if locked {
            balances.locked_balance.clone()
        } else {
            balances.balance.clone()
        },
        current_bond: node.bond.to_string(),
        saturation: node_saturation(node),
    }
}

pub(crate) fn confirmation_view(
    node: &BondedMixnode,
    candidate: &DecCoin,
    fee: &FeeDetails,
) -> ConfirmationView {
    ConfirmationView {
        new_bond: candidate.to_string(),
        current_bond: node.bond.to_string(),
        fee: fee.amount.as_ref().map(ToString::to_string),
    }
}

// over-saturated nodes report an uncapped value; that one takes precedence
fn node_saturation(node: &BondedMixnode) -> Option<SaturationDisplay> {
    match node.uncapped_stake_saturation {
        Some(uncapped) if !uncapped.is_zero() => Some(SaturationDisplay {
            percent: to_percent_string(uncapped),
            warning: true,
        }),
        _ => node.stake_saturation.map(|saturation| SaturationDisplay {
            percent: to_percent_string(saturation),
            warning: false,
        }),
    }
}
