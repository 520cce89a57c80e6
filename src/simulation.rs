//! Offer table shown before a plan is chosen: one Price-table row per term
//! option, so the customer can compare installment size against total cost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PlanLimits;
use crate::decimal::{round_half_up, Money, Rate};
use crate::errors::{CrediarioError, Result};
use crate::interest::compound::CompoundInterest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRow {
    pub term_months: u32,
    pub installment_amount: Money,
    pub total_financed: Money,
    pub total_interest: Money,
    /// total interest over the principal, in percent with two decimals
    pub interest_percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simulation {
    pub principal: Money,
    pub monthly_rate: Rate,
    pub annual_rate: Rate,
    pub rows: Vec<SimulationRow>,
}

/// price `principal` at `monthly_rate` for every configured term option
///
/// A non-positive principal yields an empty table rather than an error.
pub fn simulate_offers(principal: Money, monthly_rate: Rate, limits: &PlanLimits) -> Result<Simulation> {
    if monthly_rate.is_negative() {
        return Err(CrediarioError::InvalidInterestRate { rate: monthly_rate });
    }

    let mut rows = Vec::with_capacity(limits.term_options.len());
    if principal.is_positive() {
        for &term in &limits.term_options {
            limits.validate_term(term)?;
            rows.push(offer_row(principal, monthly_rate, term)?);
        }
    }

    Ok(Simulation {
        principal,
        monthly_rate,
        annual_rate: monthly_rate.equivalent_annual(),
        rows,
    })
}

fn offer_row(principal: Money, monthly_rate: Rate, term_months: u32) -> Result<SimulationRow> {
    // the table quotes what the customer actually pays: the rounded installment times n
    let installment_amount = CompoundInterest::installment(principal, monthly_rate, term_months)?.round_currency();
    let total_financed = (installment_amount * Decimal::from(term_months)).round_currency();
    let total_interest = (total_financed - principal).round_currency();
    let interest_percent = Money::percent_of(total_interest, principal)
        .map(|p| round_half_up(p, 2))
        .unwrap_or(Decimal::ZERO);

    Ok(SimulationRow {
        term_months,
        installment_amount,
        total_financed,
        total_interest,
        interest_percent,
    })
}
