use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::calendar::days_between;
use crate::decimal::{round_half_up, Money};
use crate::errors::{CrediarioError, Result};
use crate::types::{EarlyPaymentAdjustment, Installment};

/// days per month used to spread an installment's interest into daily amounts
pub const DAYS_PER_MONTH: Decimal = dec!(30);

/// pro-rata interest rebate for paying `installment` before it falls due
///
/// Each day of anticipation rebates one thirtieth of the installment's
/// interest, up to the whole interest portion. Principal is never discounted.
pub fn early_payment_discount(installment: &Installment, payment_date: NaiveDate) -> Result<EarlyPaymentAdjustment> {
    let days_early = days_between(payment_date, installment.due_date);

    if days_early <= 0 {
        return Ok(EarlyPaymentAdjustment {
            final_amount: installment.expected_total_amount,
            discount_amount: Money::ZERO,
            days_early: 0,
            savings_percent: None,
        });
    }

    let days = u32::try_from(days_early).unwrap_or(u32::MAX);
    let interest = installment.expected_interest_amount;
    let daily_interest = interest / DAYS_PER_MONTH;
    // a product past Decimal::MAX is past the cap as well
    let discount = daily_interest
        .checked_mul(Decimal::from(days))
        .map_or(interest, |rebate| rebate.min(interest));
    let final_amount = installment
        .principal_amount
        .checked_add(interest - discount)
        .ok_or_else(|| CrediarioError::CalculationOverflow {
            context: format!("early payment of installment {}", installment.number),
        })?;

    let savings_percent = Money::percent_of(discount, installment.expected_total_amount)
        .map(|p| round_half_up(p, 1));

    debug!(
        installment = installment.number,
        days_early = days,
        discount = %discount,
        "early payment discount"
    );

    Ok(EarlyPaymentAdjustment {
        final_amount: final_amount.round_currency(),
        discount_amount: discount.round_currency(),
        days_early: days,
        savings_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn installment() -> Installment {
        Installment {
            number: 1,
            due_date: date(2024, 12, 15),
            principal_amount: Money::from_major(100),
            expected_interest_amount: Money::from_major(10),
            expected_total_amount: Money::from_major(110),
            remaining_balance_after_payment: Money::ZERO,
        }
    }

    #[test]
    fn test_ten_days_early() {
        let result = early_payment_discount(&installment(), date(2024, 12, 5)).unwrap();

        assert_eq!(result.days_early, 10);
        assert_eq!(result.discount_amount, Money::from_decimal(dec!(3.33)));
        assert_eq!(result.final_amount, Money::from_decimal(dec!(106.67)));
        assert_eq!(result.savings_percent, Some(dec!(3.0)));
        assert_eq!(result.savings_label().as_deref(), Some("3.0%"));
    }

    #[test]
    fn test_no_discount_on_due_date() {
        let result = early_payment_discount(&installment(), date(2024, 12, 15)).unwrap();

        assert_eq!(result.days_early, 0);
        assert_eq!(result.discount_amount, Money::ZERO);
        assert_eq!(result.final_amount, Money::from_major(110));
        assert_eq!(result.savings_percent, None);
    }

    #[test]
    fn test_no_discount_when_late() {
        let result = early_payment_discount(&installment(), date(2024, 12, 20)).unwrap();
        assert_eq!(result.days_early, 0);
        assert_eq!(result.final_amount, Money::from_major(110));
    }

    #[test]
    fn test_discount_is_capped_at_interest() {
        let result = early_payment_discount(&installment(), date(2024, 10, 1)).unwrap();

        assert_eq!(result.days_early, 75);
        assert_eq!(result.discount_amount, Money::from_major(10));
        assert_eq!(result.final_amount, Money::from_major(100));
    }

    #[test]
    fn test_discount_never_decreases_with_anticipation() {
        let inst = installment();
        let mut previous = Money::ZERO;
        for days in 0..=60 {
            let paid = inst.due_date - chrono::Duration::days(days);
            let result = early_payment_discount(&inst, paid).unwrap();
            assert!(result.discount_amount >= previous);
            assert!(result.discount_amount <= inst.expected_interest_amount);
            previous = result.discount_amount;
        }
    }

    #[test]
    fn test_huge_interest_is_capped_without_overflow() {
        let mut inst = installment();
        inst.principal_amount = Money::ZERO;
        inst.expected_interest_amount = Money::from_decimal(Decimal::MAX);
        inst.expected_total_amount = Money::from_decimal(Decimal::MAX);

        let paid = NaiveDate::MIN;
        let result = early_payment_discount(&inst, paid).unwrap();
        assert_eq!(result.discount_amount, Money::from_decimal(Decimal::MAX).round_currency());
        assert_eq!(result.final_amount, Money::ZERO);
    }

    #[test]
    fn test_overflowing_total_is_reported() {
        let mut inst = installment();
        inst.principal_amount = Money::from_decimal(Decimal::MAX);
        inst.expected_interest_amount = Money::from_decimal(Decimal::MAX);

        let err = early_payment_discount(&inst, date(2024, 12, 14)).unwrap_err();
        assert!(matches!(err, CrediarioError::CalculationOverflow { .. }));
    }

    #[test]
    fn test_interest_free_installment() {
        let mut inst = installment();
        inst.expected_interest_amount = Money::ZERO;
        inst.expected_total_amount = Money::from_major(100);

        let result = early_payment_discount(&inst, date(2024, 12, 1)).unwrap();
        assert_eq!(result.days_early, 14);
        assert_eq!(result.discount_amount, Money::ZERO);
        assert_eq!(result.final_amount, Money::from_major(100));
        assert_eq!(result.savings_percent, Some(dec!(0)));
    }
}
