//! Installment-credit (crediário) arithmetic: plan pricing under simple and
//! compound interest, dated schedules, manual plans, early-payment discounts,
//! late charges and whole-plan settlement quotes.
//!
//! Every operation is a pure function of its inputs. Dates are supplied by the
//! caller; the one exception, [`SettlementQuote::calculate`], reads "today"
//! from an injected [`SafeTimeProvider`].

pub mod calendar;
pub mod config;
pub mod credit;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod payments;
pub mod simulation;
pub mod types;

// re-export key types
pub use config::{CrediarioConfig, LateFeeConfig, PlanLimits};
pub use credit::{check_credit_limit, parse_rate_input, CreditLimitCheck};
pub use decimal::{Money, Rate};
pub use errors::{CrediarioError, Result};
pub use interest::{
    compound_interest, late_payment_charges, late_payment_for, simple_interest, CompoundInterest,
    InterestCalculator, SimpleInterest,
};
pub use payments::{
    early_payment_discount, generate_schedule, process_manual_plan, Schedule, SettlementQuote,
};
pub use simulation::{simulate_offers, Simulation, SimulationRow};
pub use types::{
    EarlyPaymentAdjustment, Installment, InterestMode, InterestResult, LatePaymentAdjustment,
    ManualInstallment,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
