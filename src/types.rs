use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// interest regime used to price a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterestMode {
    /// linear interest on the original principal
    Simple,
    /// fixed payment, Price table
    #[default]
    Compound,
}

/// aggregate totals for a financed amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestResult {
    pub final_amount: Money,
    pub installment_amount: Money,
    pub total_interest: Money,
}

/// one dated installment of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// 1-based position in the plan
    pub number: u32,
    pub due_date: NaiveDate,
    pub principal_amount: Money,
    pub expected_interest_amount: Money,
    pub expected_total_amount: Money,
    pub remaining_balance_after_payment: Money,
}

/// installment entered by hand at the point of sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualInstallment {
    #[serde(default)]
    pub number: Option<u32>,
    pub amount: Money,
    pub due_date: NaiveDate,
}

impl ManualInstallment {
    pub fn new(amount: Money, due_date: NaiveDate) -> Self {
        Self {
            number: None,
            amount,
            due_date,
        }
    }

    pub fn numbered(number: u32, amount: Money, due_date: NaiveDate) -> Self {
        Self {
            number: Some(number),
            amount,
            due_date,
        }
    }
}

/// result of paying an installment before its due date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarlyPaymentAdjustment {
    pub final_amount: Money,
    pub discount_amount: Money,
    pub days_early: u32,
    /// discount over the expected total, in percent with one decimal
    pub savings_percent: Option<Decimal>,
}

impl EarlyPaymentAdjustment {
    /// savings formatted for display, e.g. "3.0%"
    pub fn savings_label(&self) -> Option<String> {
        self.savings_percent.map(|p| format!("{:.1}%", p))
    }
}

/// result of paying an installment after its due date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatePaymentAdjustment {
    pub fine_amount: Money,
    pub late_interest_amount: Money,
    pub final_amount: Money,
    pub days_late: u32,
}

impl LatePaymentAdjustment {
    /// adjustment for an installment paid on time
    pub fn none(amount: Money) -> Self {
        Self {
            fine_amount: Money::ZERO,
            late_interest_amount: Money::ZERO,
            final_amount: amount,
            days_late: 0,
        }
    }

    pub fn total_charges(&self) -> Money {
        self.fine_amount + self.late_interest_amount
    }
}
