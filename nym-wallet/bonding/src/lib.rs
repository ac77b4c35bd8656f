// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

//! Client-side orchestration of bond amount changes for an already-registered
//! mixnode: amount validation, fee simulation on the path matching the node's
//! funding source, and dispatch of the final transaction once a quote exists.

pub mod client;
pub mod display;
pub mod error;
pub mod events;
pub mod flow;
pub mod funding;
pub mod mixnode;
pub mod pledge;
pub mod validation;

pub use client::BondingQueryClient;
pub use error::BondingError;
pub use events::BondUpdateEvents;
pub use flow::{BondUpdateFlow, BondUpdateState};
pub use funding::{FundingSource, TokenPool};
pub use mixnode::BondedMixnode;
pub use pledge::{PledgeUpdate, UpdateBondArgs};
