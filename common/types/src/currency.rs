// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::TypesError;
use cosmwasm_std::{Decimal, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

pub type Denom = String;

/// A coin expressed in the base (indivisible) denomination of its chain,
/// such as `unym`. This is the representation transaction engines consume.
#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq, JsonSchema)]
pub struct Coin {
    pub amount: u128,
    pub denom: Denom,
}

impl Coin {
    pub fn new<S: Into<String>>(amount: u128, denom: S) -> Self {
        Coin {
            amount,
            denom: denom.into(),
        }
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

// semi-replicates cosmos-sdk's DecCoin to handle tokens with decimal amounts,
// i.e. amounts expressed in the display denomination ("1.5 nym" rather than "1500000unym")
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, JsonSchema)]
pub struct DecCoin {
    pub denom: Denom,
    // `Decimal` serializes through its string representation, so amounts never
    // pass through binary floating point on any boundary
    pub amount: Decimal,
}

impl DecCoin {
    pub fn new_base<S: Into<String>>(amount: impl Into<Uint128>, denom: S) -> Self {
        DecCoin {
            denom: denom.into(),
            amount: Decimal::from_atomics(amount, 0).unwrap_or(Decimal::MAX),
        }
    }

    pub fn zero<S: Into<String>>(denom: S) -> Self {
        DecCoin {
            denom: denom.into(),
            amount: Decimal::zero(),
        }
    }

    /// Creates a display coin out of an amount expressed in the base denomination,
    /// e.g. `new_scaled_down(10000u32, "nym", 6)` is "0.01 nym".
    pub fn new_scaled_down<S: Into<String>>(
        base_amount: impl Into<Uint128>,
        denom: S,
        exponent: u32,
    ) -> Result<Self, TypesError> {
        Ok(DecCoin {
            denom: denom.into(),
            amount: Decimal::from_atomics(base_amount, exponent)
                .map_err(|_| TypesError::UnsupportedExponent(exponent))?,
        })
    }
}

impl Display for DecCoin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.denom)
    }
}

impl From<Coin> for DecCoin {
    fn from(coin: Coin) -> Self {
        DecCoin::new_base(coin.amount, coin.denom)
    }
}

// this conversion assumes same denomination
impl TryFrom<DecCoin> for Coin {
    type Error = TypesError;

    fn try_from(value: DecCoin) -> Result<Self, Self::Error> {
        Ok(Coin {
            amount: try_convert_decimal_to_u128(value.amount)?,
            denom: value.denom,
        })
    }
}

pub fn try_convert_decimal_to_u128(dec: Decimal) -> Result<u128, TypesError> {
    // we cannot convert if we'd lose decimal places
    if dec.floor() != dec {
        return Err(TypesError::LossyCoinConversion);
    }
    Ok(dec.to_uint_floor().u128())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coin_to_dec_coin() {
        let coin = Coin::new(123, "unym");
        let dec = DecCoin::from(coin.clone());
        assert_eq!(coin.denom, dec.denom);
        assert_eq!(dec.amount, Decimal::from_atomics(coin.amount, 0).unwrap());
    }

    #[test]
    fn dec_coin_to_coin() {
        let dec = DecCoin {
            denom: "unym".to_string(),
            amount: "123".parse().unwrap(),
        };
        let coin = Coin::try_from(dec.clone()).unwrap();
        assert_eq!(dec.denom, coin.denom);
        assert_eq!(coin.amount, 123u128);
    }

    #[test]
    fn lossy_conversion_is_rejected() {
        let dec = DecCoin {
            denom: "unym".to_string(),
            amount: "123.45".parse().unwrap(),
        };
        assert_eq!(
            Coin::try_from(dec).unwrap_err(),
            TypesError::LossyCoinConversion
        );
    }

    #[test]
    fn scaling_down_to_display() {
        let values = vec![
            (1u128, "0.000001"),
            (10000u128, "0.01"),
            (1000000u128, "1"),
            (1234567u128, "1.234567"),
            (123456700u128, "123.4567"),
        ];

        for (base, expected) in values {
            let display = DecCoin::new_scaled_down(base, "nym", 6).unwrap();
            assert_eq!("nym", display.denom);
            assert_eq!(expected, display.amount.to_string());
        }
    }

    #[test]
    fn amounts_serialize_as_strings() {
        let dec = DecCoin {
            denom: "nym".to_string(),
            amount: "0.01".parse().unwrap(),
        };
        let json = serde_json::to_string(&dec).unwrap();
        assert_eq!(r#"{"denom":"nym","amount":"0.01"}"#, json);

        let back: DecCoin = serde_json::from_str(&json).unwrap();
        assert_eq!(dec, back);
    }
}
