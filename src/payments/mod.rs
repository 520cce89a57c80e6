pub mod amortization;
pub mod early;
pub mod manual;
pub mod settlement;

pub use amortization::{generate_schedule, Schedule};
pub use early::{early_payment_discount, DAYS_PER_MONTH};
pub use manual::{process_manual_plan, MANUAL_TOLERANCE};
pub use settlement::SettlementQuote;
