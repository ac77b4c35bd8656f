// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use cosmwasm_std::Decimal;

/// Checks whether `amount` is a well-formed, positive decimal no smaller than
/// `minimum`. Comparison happens on arbitrary-precision decimals; malformed
/// input is reported as invalid rather than as an error.
pub fn validate_amount(amount: &str, minimum: &str) -> bool {
    let Ok(amount) = amount.trim().parse::<Decimal>() else {
        return false;
    };
    let Ok(minimum) = minimum.trim().parse::<Decimal>() else {
        return false;
    };

    !amount.is_zero() && amount >= minimum
}
