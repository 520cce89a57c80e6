use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::decimal::Money;
use crate::errors::{CrediarioError, Result};
use crate::payments::amortization::Schedule;
use crate::types::{Installment, ManualInstallment};

/// accepted difference between the entered installments and the sale total
pub const MANUAL_TOLERANCE: Money = Money::CENT;

/// validate a hand-entered plan against the amount being financed
///
/// Manual plans carry no interest attribution: each entry's amount is both its
/// principal and its expected total.
pub fn process_manual_plan(entries: &[ManualInstallment], expected_total: Money) -> Result<Schedule> {
    if entries.is_empty() {
        warn!("manual plan rejected: no installments");
        return Err(CrediarioError::NoInstallments);
    }

    let sum: Money = entries.iter().map(|e| e.amount).sum();
    if !sum.approx_eq(expected_total, MANUAL_TOLERANCE) {
        warn!(sum = %sum, expected = %expected_total, "manual plan rejected: sum mismatch");
        return Err(CrediarioError::InstallmentSumMismatch {
            sum: sum.round_currency(),
            expected: expected_total.round_currency(),
        });
    }

    let mut paid_so_far = Money::ZERO;
    let installments: Vec<Installment> = entries
        .iter()
        .zip(1u32..)
        .map(|(entry, position)| {
            paid_so_far += entry.amount;
            Installment {
                number: entry.number.filter(|n| *n > 0).unwrap_or(position),
                due_date: entry.due_date,
                principal_amount: entry.amount,
                expected_interest_amount: Money::ZERO,
                expected_total_amount: entry.amount,
                remaining_balance_after_payment: (expected_total - paid_so_far).round_currency(),
            }
        })
        .collect();

    let total_amount = sum.round_currency();
    let installment_amount = (sum / Decimal::from(installments.len() as u64)).round_currency();

    debug!(
        installments = installments.len(),
        total = %total_amount,
        "accepted manual plan"
    );

    Ok(Schedule {
        installments,
        total_amount,
        total_interest: Money::ZERO,
        installment_amount,
    })
}
