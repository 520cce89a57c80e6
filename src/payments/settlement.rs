use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::days_between;
use crate::config::LateFeeConfig;
use crate::decimal::{round_half_up, Money};
use crate::errors::{CrediarioError, Result};
use crate::interest::penalty::late_payment_charges;
use crate::types::Installment;

/// quote for paying off every open installment of a plan at once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementQuote {
    pub as_of: NaiveDate,
    /// amount that settles the plan today
    pub amount_due: Money,
    /// sum of the open installments' expected totals
    pub amount_without_discount: Money,
    pub interest_discount: Money,
    pub remaining_installments: u32,
    pub savings_percent: Option<Decimal>,
}

impl SettlementQuote {
    /// quote the open installments on the provider's current date
    pub fn calculate(
        outstanding: &[Installment],
        time_provider: &SafeTimeProvider,
        config: &LateFeeConfig,
    ) -> Result<Self> {
        Self::calculate_as_of(outstanding, time_provider.now().date_naive(), config)
    }

    /// quote the open installments on `as_of`
    ///
    /// Installments not yet due are settled for their principal alone. Those
    /// due on or before `as_of` keep their interest and add late charges.
    pub fn calculate_as_of(outstanding: &[Installment], as_of: NaiveDate, config: &LateFeeConfig) -> Result<Self> {
        let mut amount_due = Money::ZERO;
        let mut without_discount = Money::ZERO;
        let overflow = || CrediarioError::CalculationOverflow {
            context: format!("settlement of {} installments", outstanding.len()),
        };

        for installment in outstanding {
            let due_now = if installment.due_date > as_of {
                installment.principal_amount
            } else {
                let days_late = days_between(installment.due_date, as_of);
                late_payment_charges(installment.expected_total_amount, days_late, config)?.final_amount
            };
            amount_due = amount_due.checked_add(due_now).ok_or_else(overflow)?;
            without_discount = without_discount
                .checked_add(installment.expected_total_amount)
                .ok_or_else(overflow)?;
        }

        let discount = (without_discount - amount_due).max(Money::ZERO);
        let savings_percent = Money::percent_of(discount, without_discount).map(|p| round_half_up(p, 1));

        debug!(
            as_of = %as_of,
            remaining = outstanding.len(),
            amount_due = %amount_due,
            "settlement quote"
        );

        Ok(Self {
            as_of,
            amount_due: amount_due.round_currency(),
            amount_without_discount: without_discount.round_currency(),
            interest_discount: discount.round_currency(),
            remaining_installments: outstanding.len() as u32,
            savings_percent,
        })
    }
}
