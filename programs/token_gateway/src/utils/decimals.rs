use anchor_lang::prelude::*;

use crate::errors::GatewayError;

/// Rescale `amount` between two fixed-point precisions.
///
/// Scaling down divides with floor semantics; the truncated remainder is an
/// accepted precision loss and is never minted back anywhere. Scaling up
/// that would overflow u128 is an error, not a wrap.
pub fn convert_amount(amount: u128, from_decimals: u8, to_decimals: u8) -> Result<u128> {
    if from_decimals == to_decimals {
        return Ok(amount);
    }
    if to_decimals > from_decimals {
        let factor = pow10(to_decimals - from_decimals)?;
        amount
            .checked_mul(factor)
            .ok_or_else(|| error!(GatewayError::AmountOverflow))
    } else {
        let factor = pow10(from_decimals - to_decimals)?;
        Ok(amount / factor)
    }
}

fn pow10(exp: u8) -> Result<u128> {
    10u128
        .checked_pow(exp as u32)
        .ok_or_else(|| error!(GatewayError::AmountOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_decimals_is_identity() {
        for d in [0u8, 6, 9, 18] {
            assert_eq!(convert_amount(12_345, d, d).unwrap(), 12_345);
        }
    }

    #[test]
    fn scaling_up_multiplies() {
        assert_eq!(convert_amount(7, 6, 18).unwrap(), 7_000_000_000_000);
    }

    #[test]
    fn scaling_down_floors() {
        assert_eq!(convert_amount(1_999_999, 6, 0).unwrap(), 1);
    }

    #[test]
    fn round_trip_never_gains() {
        for x in [0u128, 1, 999_999_999_999, 1_000_000_000_000, 1_234_567_890_123_456] {
            let down = convert_amount(x, 18, 6).unwrap();
            let back = convert_amount(down, 6, 18).unwrap();
            assert!(back <= x);
        }
    }

    #[test]
    fn small_amounts_truncate_to_zero() {
        // 1000 raw units of an 18-decimal token are below the 6-decimal
        // resolution and come out as nothing
        assert_eq!(convert_amount(1_000, 18, 6).unwrap(), 0);
    }

    #[test]
    fn overflowing_upscale_is_an_error() {
        let err = convert_amount(u128::MAX / 2, 0, 18).unwrap_err();
        assert_eq!(err, GatewayError::AmountOverflow.into());
    }
}
