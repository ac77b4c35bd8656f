// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::client::BondingQueryClient;
use crate::display::{self, BondUpdateView, WalletBalances};
use crate::error::BondingError;
use crate::events::BondUpdateEvents;
use crate::funding::{FundingSource, TokenPool};
use crate::mixnode::BondedMixnode;
use crate::pledge::{PledgeUpdate, UpdateBondArgs};
use cosmwasm_std::Decimal;
use nym_bonding_types::currency::DecCoin;
use nym_bonding_types::fees::FeeDetails;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq)]
pub enum BondUpdateState {
    /// The operator is typing a new bond amount.
    Entering {
        candidate: Option<DecCoin>,
        valid: bool,
    },

    /// Fee simulation for the entered amount is in flight.
    Simulating { candidate: DecCoin },

    /// A fee quote arrived and the operator is looking at it.
    Confirming { candidate: DecCoin, fee: FeeDetails },

    Closed,
}

impl BondUpdateState {
    fn initial() -> Self {
        BondUpdateState::Entering {
            candidate: None,
            valid: false,
        }
    }
}

/// Drives a single bond amount change for one bonded node, from amount entry
/// through fee simulation to the final submission dispatch. One instance per
/// opened modal; a new modal means a new flow.
pub struct BondUpdateFlow<C, E> {
    node: BondedMixnode,
    minimum_bond: DecCoin,
    state: BondUpdateState,
    client: C,
    events: E,
    shutdown: CancellationToken,
}

impl<C, E> BondUpdateFlow<C, E> {
    pub fn new(node: BondedMixnode, client: C, events: E) -> Self {
        let minimum_bond = DecCoin {
            denom: node.bond.denom.clone(),
            amount: Decimal::one(),
        };

        BondUpdateFlow {
            node,
            minimum_bond,
            state: BondUpdateState::initial(),
            client,
            events,
            shutdown: CancellationToken::new(),
        }
    }

    #[must_use]
    pub fn with_minimum_bond(mut self, minimum_bond: DecCoin) -> Self {
        self.minimum_bond = minimum_bond;
        self
    }

    pub fn node(&self) -> &BondedMixnode {
        &self.node
    }

    pub fn state(&self) -> &BondUpdateState {
        &self.state
    }

    pub fn funding_source(&self) -> FundingSource {
        self.node.funding_source()
    }

    pub fn token_pool(&self) -> TokenPool {
        self.funding_source().token_pool()
    }

    /// Clone of the token bound to this flow instance. Cancelling it abandons
    /// any in-flight call and moves the flow to [BondUpdateState::Closed].
    pub fn cancellation_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub fn can_request_fee(&self) -> bool {
        matches!(
            self.state,
            BondUpdateState::Entering {
                candidate: Some(_),
                valid: true
            }
        )
    }

    /// What the wallet should present right now, if anything.
    pub fn view(&self, balances: &WalletBalances) -> Option<BondUpdateView> {
        match &self.state {
            BondUpdateState::Entering { .. } | BondUpdateState::Simulating { .. } => Some(
                BondUpdateView::AmountEntry(display::amount_entry_view(&self.node, balances)),
            ),
            BondUpdateState::Confirming { candidate, fee } => Some(BondUpdateView::Confirmation(
                display::confirmation_view(&self.node, candidate, fee),
            )),
            BondUpdateState::Closed => None,
        }
    }

    /// Drops the fee quote and returns to amount entry, keeping the candidate.
    pub fn back(&mut self) {
        let BondUpdateState::Confirming { candidate, .. } = &self.state else {
            log::warn!("ignoring back outside of the confirmation phase");
            return;
        };

        let candidate = candidate.clone();
        self.state = BondUpdateState::Entering {
            candidate: Some(candidate),
            valid: true,
        };
    }
}

impl<C, E> BondUpdateFlow<C, E>
where
    C: BondingQueryClient + Sync,
    E: BondUpdateEvents + Sync,
{
    /// Replaces the candidate amount with the latest input and recomputes its
    /// validity. Zero, malformed and unchanged amounts are rejected locally;
    /// everything else goes through the minimum-amount validator.
    pub async fn enter_amount(&mut self, raw_amount: &str) -> Result<(), BondingError> {
        if self.shutdown.is_cancelled() {
            self.close();
            return Ok(());
        }
        let BondUpdateState::Entering { .. } = self.state else {
            log::warn!("ignoring bond amount input outside of the entry phase");
            return Ok(());
        };

        let raw_amount = raw_amount.trim();
        let Ok(amount) = raw_amount.parse::<Decimal>() else {
            self.state = BondUpdateState::Entering {
                candidate: None,
                valid: false,
            };
            return Ok(());
        };
        let candidate = DecCoin {
            denom: self.node.bond.denom.clone(),
            amount,
        };

        if amount.is_zero() || amount == self.node.bond.amount {
            self.state = BondUpdateState::Entering {
                candidate: Some(candidate),
                valid: false,
            };
            return Ok(());
        }

        let minimum = self.minimum_bond.amount.to_string();
        let shutdown = self.shutdown.clone();
        let validation = self.client.validate_amount(raw_amount, &minimum);
        let outcome = tokio::select! {
            biased;
            _ = shutdown.cancelled() => None,
            valid = validation => Some(valid),
        };

        let Some(valid) = outcome else {
            self.dispose();
            return Ok(());
        };
        match valid {
            Ok(valid) => {
                self.state = BondUpdateState::Entering {
                    candidate: Some(candidate),
                    valid,
                };
                Ok(())
            }
            Err(err) => {
                self.state = BondUpdateState::Entering {
                    candidate: Some(candidate),
                    valid: false,
                };
                Err(err)
            }
        }
    }

    /// Simulates the fee for the entered amount on the path matching the
    /// node's funding source. Does nothing unless a valid candidate exists.
    pub async fn request_fee(&mut self) -> Result<(), BondingError> {
        if self.shutdown.is_cancelled() {
            self.close();
            return Ok(());
        }
        let BondUpdateState::Entering {
            candidate: Some(candidate),
            valid: true,
        } = self.state.clone()
        else {
            log::warn!("attempted to simulate a bond update without a valid amount");
            return Ok(());
        };

        let pledge_update = PledgeUpdate::new(self.node.bond.clone(), candidate.clone())?;
        let source = self.funding_source();
        log::info!(
            ">>> Simulate update bond: identity_key = {}, current_pledge = {}, new_pledge = {}, pool = {}",
            self.node.identity_key,
            pledge_update.current_pledge,
            pledge_update.new_pledge,
            source.token_pool(),
        );
        self.state = BondUpdateState::Simulating {
            candidate: candidate.clone(),
        };

        let shutdown = self.shutdown.clone();
        let simulation = source.simulate_update_bond(&self.client, pledge_update);
        let outcome = tokio::select! {
            biased;
            _ = shutdown.cancelled() => None,
            res = simulation => Some(res),
        };

        let Some(result) = outcome else {
            log::warn!("flow closed while awaiting the fee simulation");
            self.dispose();
            return Ok(());
        };
        match result {
            Ok(fee) => {
                log::info!("<<< simulated fee = {:?}", fee.amount);
                log::trace!("<<< {fee:?}");
                self.state = BondUpdateState::Confirming { candidate, fee };
            }
            Err(err) => {
                log::warn!("<<< fee simulation failed: {err}");
                self.events.on_error(err.to_string());
                // keep the candidate so the operator can adjust it and retry
                self.state = BondUpdateState::Entering {
                    candidate: Some(candidate),
                    valid: true,
                };
            }
        }
        Ok(())
    }

    /// Dispatches the bond update with the quoted fee and ends the flow. The
    /// submission outcome is the owner's to report; there is no retry here.
    pub async fn confirm(&mut self) -> Result<(), BondingError> {
        if self.shutdown.is_cancelled() {
            self.close();
            return Ok(());
        }
        let BondUpdateState::Confirming { candidate, fee } = self.state.clone() else {
            log::warn!("attempted to confirm a bond update without a fee quote");
            return Ok(());
        };

        let pledge_update = PledgeUpdate::new(self.node.bond.clone(), candidate)?;
        let token_pool = self.token_pool();
        let args = UpdateBondArgs::new(pledge_update, Some(fee.fee));
        log::info!(
            ">>> Update bond: identity_key = {}, current_pledge = {}, new_pledge = {}, fee = {:?}, pool = {}",
            self.node.identity_key,
            args.current_pledge,
            args.new_pledge,
            args.fee,
            token_pool,
        );

        self.events.on_update_bond(args, token_pool).await;
        log::info!("<<< update bond dispatched");

        self.state = BondUpdateState::Closed;
        self.shutdown.cancel();
        Ok(())
    }

    /// Cancels the flow. Allowed in every state; only the first call (or a
    /// cancelled token) has any effect.
    pub fn close(&mut self) {
        if matches!(self.state, BondUpdateState::Closed) {
            return;
        }
        self.dispose();
    }

    fn dispose(&mut self) {
        self.shutdown.cancel();
        self.state = BondUpdateState::Closed;
        self.events.on_close();
    }
}
