use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CrediarioError {
    #[error("no installments provided")]
    NoInstallments,

    #[error("installment sum {sum} does not match total {expected}")]
    InstallmentSumMismatch {
        sum: Money,
        expected: Money,
    },

    #[error("invalid principal: {amount}")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid term: {term_months} months")]
    InvalidTerm {
        term_months: u32,
    },

    #[error("rate {rate} outside allowed range {min} to {max}")]
    RateOutOfRange {
        rate: Rate,
        min: Rate,
        max: Rate,
    },

    #[error("invalid rate input: {input:?}")]
    InvalidRateInput {
        input: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("calculation overflow: {context}")]
    CalculationOverflow {
        context: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

impl From<serde_json::Error> for CrediarioError {
    fn from(e: serde_json::Error) -> Self {
        CrediarioError::InvalidConfiguration {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CrediarioError>;
