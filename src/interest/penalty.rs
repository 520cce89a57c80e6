use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::calendar::days_between;
use crate::config::LateFeeConfig;
use crate::decimal::Money;
use crate::errors::{CrediarioError, Result};
use crate::types::{Installment, LatePaymentAdjustment};

/// fine plus daily late interest on an overdue installment
///
/// Both charges are computed over the installment amount and added to it;
/// neither is capped. A non-positive `days_late` leaves the amount untouched.
/// Charges too large for a `Decimal` give `CalculationOverflow`.
pub fn late_payment_charges(
    installment_amount: Money,
    days_late: i64,
    config: &LateFeeConfig,
) -> Result<LatePaymentAdjustment> {
    if days_late <= 0 {
        return Ok(LatePaymentAdjustment::none(installment_amount));
    }

    let days = u32::try_from(days_late).unwrap_or(u32::MAX);
    let overflow = || CrediarioError::CalculationOverflow {
        context: format!("late charges over {} days", days),
    };

    let fine = installment_amount
        .checked_percentage(config.fine_percent)
        .ok_or_else(overflow)?;
    let late_interest = installment_amount
        .checked_percentage(config.daily_interest_percent)
        .and_then(|daily| daily.checked_mul(Decimal::from(days)))
        .ok_or_else(overflow)?;
    let final_amount = installment_amount
        .checked_add(fine)
        .and_then(|amount| amount.checked_add(late_interest))
        .ok_or_else(overflow)?;

    debug!(
        amount = %installment_amount,
        days_late = days,
        fine = %fine,
        late_interest = %late_interest,
        "late payment charges"
    );

    Ok(LatePaymentAdjustment {
        fine_amount: fine.round_currency(),
        late_interest_amount: late_interest.round_currency(),
        final_amount: final_amount.round_currency(),
        days_late: days,
    })
}

/// late charges for paying `installment` on `payment_date`
pub fn late_payment_for(
    installment: &Installment,
    payment_date: NaiveDate,
    config: &LateFeeConfig,
) -> Result<LatePaymentAdjustment> {
    let days_late = days_between(installment.due_date, payment_date);
    late_payment_charges(installment.expected_total_amount, days_late, config)
}
