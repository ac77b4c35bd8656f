// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TypesError {
    #[error("the decimal coin can't be converted to a base coin without losing precision")]
    LossyCoinConversion,

    #[error("scaling by 10^{0} is outside of the supported range")]
    UnsupportedExponent(u32),
}
