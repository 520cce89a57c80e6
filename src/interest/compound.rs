use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{CrediarioError, Result};
use crate::interest::{check_terms, rounded_result, InterestCalculator};
use crate::types::{InterestMode, InterestResult};

/// fixed payment (Price table): PMT = PV * i * (1 + i)^n / ((1 + i)^n - 1)
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundInterest;

impl CompoundInterest {
    /// un-rounded fixed installment
    pub(crate) fn installment(principal: Money, monthly_rate: Rate, term_months: u32) -> Result<Money> {
        if monthly_rate.is_zero() {
            return Ok(principal / Decimal::from(term_months));
        }

        let overflow = || CrediarioError::CalculationOverflow {
            context: format!("price factor over {} months at {}", term_months, monthly_rate),
        };

        let r = monthly_rate.as_decimal();
        let factor = monthly_rate.growth_factor(term_months).ok_or_else(overflow)?;
        let numerator = principal
            .as_decimal()
            .checked_mul(factor)
            .and_then(|x| x.checked_mul(r))
            .ok_or_else(overflow)?;
        // a rate below decimal precision leaves factor at exactly one
        let installment = numerator
            .checked_div(factor - Decimal::ONE)
            .ok_or_else(overflow)?;

        Ok(Money::from_decimal(installment))
    }
}

impl InterestCalculator for CompoundInterest {
    fn calculate(&self, principal: Money, monthly_rate: Rate, term_months: u32) -> Result<InterestResult> {
        check_terms(principal, monthly_rate, term_months)?;

        let installment_amount = Self::installment(principal, monthly_rate, term_months)?;
        let final_amount = installment_amount * Decimal::from(term_months);

        Ok(rounded_result(principal, final_amount, installment_amount))
    }

    fn mode(&self) -> InterestMode {
        InterestMode::Compound
    }
}

/// compound-interest (Price table) totals
pub fn compound_interest(principal: Money, monthly_rate: Rate, term_months: u32) -> Result<InterestResult> {
    CompoundInterest.calculate(principal, monthly_rate, term_months)
}
