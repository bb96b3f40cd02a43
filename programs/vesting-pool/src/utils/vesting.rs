//! Linear vesting arithmetic (integer only, floor division).
//! - elapsed = clamp(now - start, 0, period)
//! - vested = floor(allotment * elapsed / period)
//! - capacity = floor(total / allotment)

use crate::constants::SECONDS_PER_DAY;
use crate::error::VestingError;

/// Convert a period given in whole days to seconds.
pub fn period_seconds(period_days: u64) -> Result<u64, VestingError> {
    if period_days == 0 {
        return Err(VestingError::InvalidConfig);
    }
    period_days
        .checked_mul(SECONDS_PER_DAY)
        .ok_or(VestingError::MathOverflow)
}

/// Number of participants a deposit can fund. The remainder is never claimable.
pub fn max_participants(total_deposited: u64, per_user_allotment: u64) -> Result<u64, VestingError> {
    if total_deposited == 0 || per_user_allotment == 0 {
        return Err(VestingError::InvalidConfig);
    }
    Ok(total_deposited / per_user_allotment)
}

/// Seconds of the period that have passed at `now_ts`, saturating at both ends.
pub fn elapsed_seconds(now_ts: i64, start_ts: i64, period_seconds: u64) -> u64 {
    if now_ts <= start_ts {
        return 0;
    }
    now_ts.abs_diff(start_ts).min(period_seconds)
}

/// Cumulative amount unlocked after `elapsed` seconds of a `period`-second schedule.
pub fn vested_amount(allotment: u64, elapsed: u64, period: u64) -> Result<u64, VestingError> {
    mul_div_floor(allotment, elapsed.min(period), period)
}

/// floor(n0 * n1 / d) with a u128 intermediate.
fn mul_div_floor(n0: u64, n1: u64, d: u64) -> Result<u64, VestingError> {
    if d == 0 {
        return Err(VestingError::InvalidConfig);
    }
    let p = (n0 as u128)
        .checked_mul(n1 as u128)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(p / d as u128).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEN_DAYS: u64 = 10 * SECONDS_PER_DAY;

    #[test]
    fn period_in_days_converts_to_seconds() {
        assert_eq!(period_seconds(10).unwrap(), 864_000);
        assert!(matches!(period_seconds(0), Err(VestingError::InvalidConfig)));
        assert!(matches!(
            period_seconds(u64::MAX),
            Err(VestingError::MathOverflow)
        ));
    }

    #[test]
    fn capacity_is_floor_of_deposit_over_allotment() {
        assert_eq!(max_participants(10_000, 1_000).unwrap(), 10);
        assert_eq!(max_participants(10_000, 100).unwrap(), 100);
        assert_eq!(max_participants(1_000_000, 3_000).unwrap(), 333);
        assert_eq!(max_participants(999, 1_000).unwrap(), 0);
        assert!(matches!(
            max_participants(0, 1),
            Err(VestingError::InvalidConfig)
        ));
        assert!(matches!(
            max_participants(1, 0),
            Err(VestingError::InvalidConfig)
        ));
    }

    #[test]
    fn elapsed_clamps_before_start_and_after_end() {
        let start = 1_700_000_000;
        assert_eq!(elapsed_seconds(start - 5, start, TEN_DAYS), 0);
        assert_eq!(elapsed_seconds(start, start, TEN_DAYS), 0);
        assert_eq!(elapsed_seconds(start + 42, start, TEN_DAYS), 42);
        assert_eq!(
            elapsed_seconds(start + 25 * SECONDS_PER_DAY as i64, start, TEN_DAYS),
            TEN_DAYS
        );
    }

    #[test]
    fn half_period_truncates() {
        // One second short of day five still floors below 500.
        assert_eq!(vested_amount(1_000, 5 * SECONDS_PER_DAY - 1, TEN_DAYS).unwrap(), 499);
        assert_eq!(vested_amount(1_000, 5 * SECONDS_PER_DAY, TEN_DAYS).unwrap(), 500);
        assert_eq!(vested_amount(1_000, TEN_DAYS, TEN_DAYS).unwrap(), 1_000);
        assert_eq!(vested_amount(1_000, 0, TEN_DAYS).unwrap(), 0);
    }

    #[test]
    fn large_allotment_does_not_overflow() {
        let v = vested_amount(u64::MAX, TEN_DAYS / 2, TEN_DAYS).unwrap();
        assert_eq!(v, u64::MAX / 2);
        assert_eq!(vested_amount(u64::MAX, TEN_DAYS, TEN_DAYS).unwrap(), u64::MAX);
    }

    proptest! {
        #[test]
        fn vesting_is_monotonic_and_bounded(
            allotment in 1u64..=u64::MAX,
            period_days in 1u64..=3_650u64,
            t1 in 0u64..=4_000 * SECONDS_PER_DAY,
            dt in 0u64..=4_000 * SECONDS_PER_DAY,
        ) {
            let period = period_seconds(period_days).unwrap();
            let v1 = vested_amount(allotment, t1, period).unwrap();
            let v2 = vested_amount(allotment, t1 + dt, period).unwrap();
            prop_assert!(v1 <= v2);
            prop_assert!(v2 <= allotment);
            if t1 >= period {
                prop_assert_eq!(v1, allotment);
            } else {
                prop_assert!(v1 < allotment);
            }
        }
    }
}
