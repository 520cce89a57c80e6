pub mod compound;
pub mod penalty;
pub mod simple;

use crate::decimal::{Money, Rate};
use crate::errors::{CrediarioError, Result};
use crate::types::{InterestMode, InterestResult};

pub use compound::{compound_interest, CompoundInterest};
pub use penalty::{late_payment_charges, late_payment_for};
pub use simple::{simple_interest, SimpleInterest};

/// trait for plan pricing
pub trait InterestCalculator {
    /// totals for financing `principal` over `term_months` at `monthly_rate`
    fn calculate(&self, principal: Money, monthly_rate: Rate, term_months: u32) -> Result<InterestResult>;

    fn mode(&self) -> InterestMode;
}

impl InterestMode {
    /// calculator for this regime
    pub fn calculator(&self) -> &'static dyn InterestCalculator {
        match self {
            InterestMode::Simple => &SimpleInterest,
            InterestMode::Compound => &CompoundInterest,
        }
    }
}

/// reject inputs that would divide by zero or price a negative plan
pub(crate) fn check_terms(principal: Money, monthly_rate: Rate, term_months: u32) -> Result<()> {
    if !principal.is_positive() {
        return Err(CrediarioError::InvalidPrincipal { amount: principal });
    }
    if monthly_rate.is_negative() {
        return Err(CrediarioError::InvalidInterestRate { rate: monthly_rate });
    }
    if term_months == 0 {
        return Err(CrediarioError::InvalidTerm { term_months });
    }
    Ok(())
}

/// round the three totals the way they are handed out
pub(crate) fn rounded_result(principal: Money, final_amount: Money, installment_amount: Money) -> InterestResult {
    InterestResult {
        final_amount: final_amount.round_currency(),
        installment_amount: installment_amount.round_currency(),
        total_interest: (final_amount - principal).round_currency(),
    }
}
