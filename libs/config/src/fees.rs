//! Refuel fee schedule
//!
//! Fees are tiered on the refuelled USDC amount (human units, not base
//! units). Paying the fee earns EXEC at a fixed rate.

use rust_decimal::Decimal;

/// EXEC reward per USDC of task fee paid
pub const EXEC_REWARD_PER_USDC: u32 = 1000;

/// Fee in basis points for a refuel of `amount_usdc`
///
/// - up to 10 USDC: 1%
/// - up to 50 USDC: 0.5%
/// - above: 0.2%
pub fn refuel_fee_bps(amount_usdc: Decimal) -> u32 {
    if amount_usdc <= Decimal::TEN {
        100
    } else if amount_usdc <= Decimal::from(50) {
        50
    } else {
        20
    }
}

/// Fee amount in USDC for a refuel of `amount_usdc`
pub fn refuel_fee(amount_usdc: Decimal) -> Decimal {
    amount_usdc * Decimal::from(refuel_fee_bps(amount_usdc)) / Decimal::from(10_000)
}

/// EXEC earned for paying `fee_usdc` in task fees
pub fn exec_reward(fee_usdc: Decimal) -> Decimal {
    fee_usdc * Decimal::from(EXEC_REWARD_PER_USDC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fee_tiers() {
        assert_eq!(refuel_fee_bps(dec!(1)), 100);
        assert_eq!(refuel_fee_bps(dec!(10)), 100);
        assert_eq!(refuel_fee_bps(dec!(10.01)), 50);
        assert_eq!(refuel_fee_bps(dec!(50)), 50);
        assert_eq!(refuel_fee_bps(dec!(50.5)), 20);
        assert_eq!(refuel_fee_bps(dec!(1000)), 20);
    }

    #[test]
    fn test_fee_amounts() {
        assert_eq!(refuel_fee(dec!(10)), dec!(0.1));
        assert_eq!(refuel_fee(dec!(40)), dec!(0.2));
        assert_eq!(refuel_fee(dec!(100)), dec!(0.2));
        assert_eq!(exec_reward(dec!(0.2)), dec!(200));
    }
}
