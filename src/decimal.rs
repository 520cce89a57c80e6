use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

/// decimal places kept for intermediate arithmetic
const INTERNAL_DP: u32 = 8;

/// decimal places of the currency unit
pub const CURRENCY_DP: u32 = 2;

/// round half away from zero, the way receipts and booklets are printed
pub fn round_half_up(d: Decimal, dp: u32) -> Decimal {
    d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Money type backed by a decimal.
///
/// Arithmetic keeps 8 decimal places so shares of a principal can be carried
/// without drift; values handed to callers go through [`Money::round_currency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const ONE: Money = Money(Decimal::ONE);
    /// one cent
    pub const CENT: Money = Money(Decimal::from_parts(1, 0, 0, false, 2));

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(INTERNAL_DP))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?.round_dp(INTERNAL_DP)))
    }

    /// create from integer amount (reais, dollars, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from minor amount (centavos, cents)
    pub fn from_minor(amount: i64) -> Self {
        Money(Decimal::new(amount, CURRENCY_DP))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to whole cents, half away from zero
    pub fn round_currency(&self) -> Self {
        Money(round_half_up(self.0, CURRENCY_DP))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }

    /// calculate percentage (e.g., 2% of R$ 100)
    pub fn percentage(&self, percent: Decimal) -> Self {
        Money::from_decimal(self.0 * percent / Decimal::ONE_HUNDRED)
    }

    /// `percentage` that reports overflow instead of panicking
    pub fn checked_percentage(&self, percent: Decimal) -> Option<Self> {
        let scaled = self.0.checked_mul(percent)?;
        Some(Money::from_decimal(scaled / Decimal::ONE_HUNDRED))
    }

    pub fn checked_add(self, other: Money) -> Option<Self> {
        Some(Money::from_decimal(self.0.checked_add(other.0)?))
    }

    pub fn checked_mul(self, factor: Decimal) -> Option<Self> {
        Some(Money::from_decimal(self.0.checked_mul(factor)?))
    }

    /// true when both amounts agree to within `tolerance`
    pub fn approx_eq(&self, other: Money, tolerance: Money) -> bool {
        (*self - other).abs() <= tolerance
    }

    /// share of `whole` that `part` represents, in percent
    pub fn percent_of(part: Money, whole: Money) -> Option<Decimal> {
        if whole.is_zero() {
            return None;
        }
        part.0.checked_div(whole.0)?.checked_mul(Decimal::ONE_HUNDRED)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = round_half_up(self.0, CURRENCY_DP);
        d.rescale(CURRENCY_DP);
        f.pad(&d.to_string())
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<i32> for Money {
    fn from(i: i32) -> Self {
        Money::from_major(i as i64)
    }
}

impl From<u32> for Money {
    fn from(i: u32) -> Self {
        Money::from_major(i as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money((self.0 + other.0).round_dp(INTERNAL_DP))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = (self.0 + other.0).round_dp(INTERNAL_DP);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money((self.0 - other.0).round_dp(INTERNAL_DP))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 = (self.0 - other.0).round_dp(INTERNAL_DP);
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money((self.0 * other).round_dp(INTERNAL_DP))
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money((self.0 / other).round_dp(INTERNAL_DP))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + *x)
    }
}

/// rate type for monthly interest rates, percentages and ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);
    pub const ONE: Rate = Rate(Decimal::ONE);

    /// create from decimal (e.g., 0.05 for 5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 11.5 for 11.5%)
    pub fn from_percent(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    /// create from whole percentage (e.g., 5 for 5%)
    pub fn from_percentage(p: u32) -> Self {
        Rate(Decimal::from(p) / Decimal::ONE_HUNDRED)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// (1 + r)^periods, `None` on overflow
    pub fn growth_factor(&self, periods: u32) -> Option<Decimal> {
        let base = Decimal::ONE.checked_add(self.0)?;
        let mut factor = Decimal::ONE;
        for _ in 0..periods {
            factor = factor.checked_mul(base)?;
        }
        Some(factor)
    }

    /// annual rate equivalent to this monthly rate: (1 + r)^12 - 1
    pub fn equivalent_annual(&self) -> Rate {
        let factor = self.growth_factor(12).unwrap_or(Decimal::MAX);
        Rate(factor - Decimal::ONE)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_precision() {
        let m = Money::from_str_exact("100.123456789").unwrap();
        assert_eq!(m.as_decimal(), dec!(100.12345679));
        assert_eq!(m.to_string(), "100.12");
    }

    #[test]
    fn test_round_currency_half_away_from_zero() {
        // banker's rounding would give 0.16 here
        assert_eq!(Money::from_decimal(dec!(0.165)).round_currency().as_decimal(), dec!(0.17));
        assert_eq!(Money::from_decimal(dec!(102.165)).round_currency().as_decimal(), dec!(102.17));
        assert_eq!(Money::from_decimal(dec!(-0.125)).round_currency().as_decimal(), dec!(-0.13));
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(Money::from_minor(12_345), Money::from_decimal(dec!(123.45)));
        assert_eq!(Money::from_minor(1), Money::CENT);
    }

    #[test]
    fn test_percentage() {
        let amount = Money::from_major(100);
        assert_eq!(amount.percentage(dec!(2.0)), Money::from_major(2));
    }

    #[test]
    fn test_checked_arithmetic() {
        let amount = Money::from_major(100);
        assert_eq!(amount.checked_percentage(dec!(2)), Some(Money::from_major(2)));
        assert_eq!(amount.checked_mul(dec!(3)), Some(Money::from_major(300)));
        assert_eq!(amount.checked_add(Money::ONE), Some(Money::from_major(101)));

        let huge = Money::from_decimal(Decimal::MAX);
        assert_eq!(huge.checked_percentage(dec!(2)), None);
        assert_eq!(huge.checked_mul(dec!(2)), None);
        assert_eq!(huge.checked_add(huge), None);
        assert_eq!(Money::percent_of(huge, Money::from_decimal(dec!(0.01))), None);
    }

    #[test]
    fn test_display_pads_to_cents() {
        assert_eq!(Money::from_major(300).to_string(), "300.00");
        assert_eq!(Money::from_decimal(dec!(1295.045)).to_string(), "1295.05");
    }

    #[test]
    fn test_rate_from_percent() {
        let rate = Rate::from_percent(dec!(11.5));
        assert_eq!(rate.as_decimal(), dec!(0.115));
        assert_eq!(rate.to_string(), "11.5%");
    }

    #[test]
    fn test_growth_factor() {
        let rate = Rate::from_percentage(5);
        let factor = rate.growth_factor(2).unwrap();
        assert_eq!(factor, dec!(1.1025));
        assert_eq!(Rate::ZERO.growth_factor(12), Some(Decimal::ONE));
    }

    #[test]
    fn test_growth_factor_overflow() {
        let rate = Rate::from_percentage(100);
        assert!(rate.growth_factor(200).is_none());
    }

    #[test]
    fn test_equivalent_annual() {
        let monthly = Rate::from_percentage(1);
        let annual = monthly.equivalent_annual();
        assert_eq!(round_half_up(annual.as_percentage(), 2), dec!(12.68));
    }
}
