use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{CrediarioError, Result};

/// outcome of checking a new credit sale against a customer's limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditLimitCheck {
    pub approved: bool,
    pub credit_limit: Money,
    pub outstanding_balance: Money,
    pub available_credit: Money,
    pub requested: Money,
}

/// check whether `requested` fits in the customer's available credit
///
/// A zero limit means the store extends credit without a ceiling.
pub fn check_credit_limit(credit_limit: Money, outstanding_balance: Money, requested: Money) -> CreditLimitCheck {
    let available_credit = credit_limit - outstanding_balance;

    CreditLimitCheck {
        approved: credit_limit.is_zero() || requested <= available_credit,
        credit_limit,
        outstanding_balance,
        available_credit,
        requested,
    }
}

/// parse a monthly rate typed at the counter, e.g. "11,5", "11.5%" or "2"
pub fn parse_rate_input(input: &str) -> Result<Rate> {
    let cleaned = input.trim().trim_end_matches('%').trim().replace(',', ".");
    let percent: Decimal = cleaned.parse().map_err(|_| CrediarioError::InvalidRateInput {
        input: input.to_string(),
    })?;

    if percent.is_sign_negative() && !percent.is_zero() {
        return Err(CrediarioError::InvalidRateInput {
            input: input.to_string(),
        });
    }

    Ok(Rate::from_percent(percent))
}
