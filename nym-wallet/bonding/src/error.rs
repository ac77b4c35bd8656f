// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use nym_bonding_types::error::TypesError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BondingError {
    #[error("{source}")]
    TypesError {
        #[from]
        source: TypesError,
    },

    #[error("{source}")]
    ErrorReport {
        #[from]
        source: eyre::Report,
    },

    #[error("invalid pledge update request, the new bond amount is the same as the current one")]
    PledgeUpdateNoOp,

    #[error(
        "invalid pledge update request, the new bond is a different currency from the current one ({current} != {new})"
    )]
    PledgeUpdateInvalidCurrency { current: String, new: String },
}
