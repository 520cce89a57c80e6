use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{CrediarioError, Result};
use crate::interest::{check_terms, rounded_result, InterestCalculator};
use crate::types::{InterestMode, InterestResult};

/// linear interest: M = C * (1 + i * n)
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleInterest;

impl InterestCalculator for SimpleInterest {
    fn calculate(&self, principal: Money, monthly_rate: Rate, term_months: u32) -> Result<InterestResult> {
        check_terms(principal, monthly_rate, term_months)?;

        let n = Decimal::from(term_months);
        let growth = monthly_rate
            .as_decimal()
            .checked_mul(n)
            .and_then(|x| x.checked_add(Decimal::ONE))
            .and_then(|x| x.checked_mul(principal.as_decimal()))
            .ok_or_else(|| CrediarioError::CalculationOverflow {
                context: format!("simple interest over {} months", term_months),
            })?;

        let final_amount = Money::from_decimal(growth);
        let installment_amount = final_amount / n;

        Ok(rounded_result(principal, final_amount, installment_amount))
    }

    fn mode(&self) -> InterestMode {
        InterestMode::Simple
    }
}

/// simple-interest totals
pub fn simple_interest(principal: Money, monthly_rate: Rate, term_months: u32) -> Result<InterestResult> {
    SimpleInterest.calculate(principal, monthly_rate, term_months)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_thousand_at_five_percent_for_ten_months() {
        let result = simple_interest(Money::from_major(1_000), Rate::from_percentage(5), 10).unwrap();
        assert_eq!(result.final_amount, Money::from_major(1_500));
        assert_eq!(result.installment_amount, Money::from_major(150));
        assert_eq!(result.total_interest, Money::from_major(500));
    }

    #[test]
    fn test_installment_rounds_to_cents() {
        let result = simple_interest(Money::from_major(500), Rate::from_percentage(8), 6).unwrap();
        assert_eq!(result.final_amount, Money::from_major(740));
        assert_eq!(result.installment_amount, Money::from_decimal(dec!(123.33)));
    }

    #[test]
    fn test_zero_rate_spreads_principal() {
        let result = simple_interest(Money::from_major(900), Rate::ZERO, 3).unwrap();
        assert_eq!(result.final_amount, Money::from_major(900));
        assert_eq!(result.installment_amount, Money::from_major(300));
        assert_eq!(result.total_interest, Money::ZERO);
    }

    #[test]
    fn test_totals_are_consistent() {
        let principal = Money::from_decimal(dec!(1234.56));
        for term in 1..=36 {
            let result = simple_interest(principal, Rate::from_percent(dec!(3.7)), term).unwrap();
            assert_eq!(result.final_amount, principal + result.total_interest);
            let spread = result.installment_amount * Decimal::from(term);
            assert!(spread.approx_eq(result.final_amount, Money::CENT * Decimal::from(term)));
        }
    }

    #[test]
    fn test_zero_term_is_rejected() {
        let err = simple_interest(Money::from_major(100), Rate::from_percentage(5), 0).unwrap_err();
        assert_eq!(err, CrediarioError::InvalidTerm { term_months: 0 });
    }
}
