use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::add_months;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::types::{Installment, InterestMode};

/// installment plan (carnê) with its aggregate totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub installments: Vec<Installment>,
    pub total_amount: Money,
    pub total_interest: Money,
    pub installment_amount: Money,
}

impl Schedule {
    /// generate a dated plan priced under `mode`
    ///
    /// Principal and interest are spread evenly across the installments. Every
    /// installment but the last takes the principal share rounded to cents; the
    /// last takes whatever balance remains, so the principal amounts always add
    /// up to `principal` and the final balance is exactly zero. The principal is
    /// taken in whole cents.
    pub fn generate(
        principal: Money,
        monthly_rate: Rate,
        term_months: u32,
        first_due_date: NaiveDate,
        mode: InterestMode,
    ) -> Result<Self> {
        let principal = principal.round_currency();
        // last due date must exist before any installment is built
        add_months(first_due_date, term_months.saturating_sub(1))?;

        let totals = mode.calculator().calculate(principal, monthly_rate, term_months)?;

        let n = Decimal::from(term_months);
        let principal_share = principal / n;
        let interest_share = (totals.final_amount - principal) / n;

        let mut installments = Vec::with_capacity(term_months as usize);
        let mut balance = principal;

        for i in 1..=term_months {
            let due_date = add_months(first_due_date, i - 1)?;
            let principal_amount = if i == term_months {
                balance
            } else {
                principal_share.round_currency()
            };
            balance -= principal_amount;

            installments.push(Installment {
                number: i,
                due_date,
                principal_amount,
                expected_interest_amount: interest_share.round_currency(),
                expected_total_amount: totals.installment_amount,
                remaining_balance_after_payment: balance.round_currency(),
            });
        }

        debug!(
            principal = %principal,
            rate = %monthly_rate,
            term_months,
            mode = ?mode,
            total = %totals.final_amount,
            "generated installment schedule"
        );

        Ok(Self {
            installments,
            total_amount: totals.final_amount,
            total_interest: totals.total_interest,
            installment_amount: totals.installment_amount,
        })
    }

    /// get installment by its number
    pub fn get_installment(&self, number: u32) -> Option<&Installment> {
        self.installments.iter().find(|i| i.number == number)
    }

    /// remaining balance after the given installment is paid
    pub fn balance_after_installment(&self, number: u32) -> Option<Money> {
        self.get_installment(number)
            .map(|i| i.remaining_balance_after_payment)
    }

    pub fn total_principal(&self) -> Money {
        self.installments.iter().map(|i| i.principal_amount).sum()
    }

    /// sum of the expected totals of every installment
    pub fn total_expected(&self) -> Money {
        self.installments.iter().map(|i| i.expected_total_amount).sum()
    }

    pub fn len(&self) -> usize {
        self.installments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// generate a dated plan; see [`Schedule::generate`]
pub fn generate_schedule(
    principal: Money,
    monthly_rate: Rate,
    term_months: u32,
    first_due_date: NaiveDate,
    mode: InterestMode,
) -> Result<Schedule> {
    Schedule::generate(principal, monthly_rate, term_months, first_due_date, mode)
}
