use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Exact integer money amount in whole base units.
///
/// Financial reconciliation depends on every party computing identical
/// figures, so there is no fractional representation and no rounding:
/// all derived values use widening u128 arithmetic with truncating
/// division.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// create from raw base units
    pub fn new(raw: u64) -> Self {
        Amount(raw)
    }

    /// raw base units
    pub fn get(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// widen for derived computations
    pub fn as_u128(&self) -> u128 {
        self.0 as u128
    }

    pub fn as_i128(&self) -> i128 {
        self.0 as i128
    }

    /// addition that surfaces overflow instead of wrapping
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Amount {
    fn from(raw: u64) -> Self {
        Amount(raw)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Amount) {
        self.0 += other.0;
    }
}

/// Basis points: integer units of 1/10_000, so 10_000 = 100%.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Bps(u32);

impl Bps {
    pub const DENOMINATOR: u128 = 10_000;

    pub const ZERO: Bps = Bps(0);
    /// 100%
    pub const FULL: Bps = Bps(10_000);

    pub fn new(raw: u32) -> Self {
        Bps(raw)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// whether this value is a valid ownership share: (0, 10_000]
    pub fn is_valid_share(&self) -> bool {
        self.0 > 0 && self.0 <= 10_000
    }

    /// floor(amount * bps / 10_000), exact in u128
    pub fn of(&self, amount: Amount) -> u128 {
        amount.as_u128() * self.0 as u128 / Self::DENOMINATOR
    }
}

impl fmt::Display for Bps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bps", self.0)
    }
}

impl From<u32> for Bps {
    fn from(raw: u32) -> Self {
        Bps(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bps_truncating_division() {
        let principal = Amount::new(100_000);

        assert_eq!(Bps::new(0).of(principal), 0);
        assert_eq!(Bps::new(1).of(principal), 10);
        assert_eq!(Bps::new(500).of(principal), 5_000);
        assert_eq!(Bps::new(9_999).of(principal), 99_990);
        assert_eq!(Bps::FULL.of(principal), 100_000);
    }

    #[test]
    fn test_bps_truncates_toward_zero() {
        // 99 * 1 / 10_000 = 0.0099 -> 0
        assert_eq!(Bps::new(1).of(Amount::new(99)), 0);
        // 19_999 * 9_999 / 10_000 = 19_997.0001 -> 19_997
        assert_eq!(Bps::new(9_999).of(Amount::new(19_999)), 19_997);
    }

    #[test]
    fn test_bps_widens_before_multiplying() {
        // would overflow u64 without widening
        let principal = Amount::new(u64::MAX);
        let expected = u64::MAX as u128 * 10_000 / 10_000;
        assert_eq!(Bps::FULL.of(principal), expected);
    }

    #[test]
    fn test_share_validity_bounds() {
        assert!(!Bps::ZERO.is_valid_share());
        assert!(Bps::new(1).is_valid_share());
        assert!(Bps::new(9_999).is_valid_share());
        assert!(Bps::FULL.is_valid_share());
        assert!(!Bps::new(10_001).is_valid_share());
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Amount::new(u64::MAX);
        assert_eq!(max.checked_add(Amount::new(1)), None);
        assert_eq!(
            Amount::new(1).checked_add(Amount::new(2)),
            Some(Amount::new(3))
        );
    }
}
