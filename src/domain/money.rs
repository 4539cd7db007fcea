use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A monetary value in integer minor currency units (cents, paise).
///
/// This is the only representation money takes inside the core. Fractional
/// intermediate results (percentages, interest) are computed on `Decimal`
/// and rounded half-up back into minor units immediately; formatting for
/// display is the presentation layer's concern.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Whole-percent share of this amount, rounded half-up.
    ///
    /// Exact integer arithmetic over i128, so no intermediate overflow for
    /// any realistic cart value.
    pub fn percent(&self, percent: u32) -> Self {
        let raw = self.0 as i128 * percent as i128;
        Self(((raw + 50) / 100) as i64)
    }

    /// The same number of minor units as a `Decimal`.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }

    /// Rounds a `Decimal` amount of minor units half-up into `Money`.
    pub fn from_decimal_half_up(value: Decimal) -> Self {
        let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Self(rounded.to_i64().unwrap_or(0))
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
