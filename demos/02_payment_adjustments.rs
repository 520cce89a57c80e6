/// payment adjustments - early discount, late charges and settlement
use crediario_rs::chrono::{NaiveDate, TimeZone, Utc};
use crediario_rs::{
    early_payment_discount, generate_schedule, late_payment_for, InterestMode, LateFeeConfig,
    Money, Rate, SafeTimeProvider, SettlementQuote, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schedule = generate_schedule(
        Money::from_major(2_000),
        Rate::from_percentage(4),
        6,
        NaiveDate::from_ymd_opt(2024, 3, 31).ok_or("bad date")?,
        InterestMode::Compound,
    )?;
    let config = LateFeeConfig::default();
    let second = &schedule.installments[1];

    let paid_early = NaiveDate::from_ymd_opt(2024, 4, 18).ok_or("bad date")?;
    let early = early_payment_discount(second, paid_early)?;
    println!(
        "paid {} days early: {} (discount {}, saves {})",
        early.days_early,
        early.final_amount,
        early.discount_amount,
        early.savings_label().unwrap_or_default(),
    );

    let paid_late = NaiveDate::from_ymd_opt(2024, 5, 12).ok_or("bad date")?;
    let late = late_payment_for(second, paid_late, &config)?;
    println!(
        "paid {} days late: {} (fine {}, interest {})",
        late.days_late, late.final_amount, late.fine_amount, late.late_interest_amount,
    );

    // settle everything still open on a pinned date
    let time = SafeTimeProvider::new(TimeSource::Test(Utc.with_ymd_and_hms(2024, 6, 5, 9, 0, 0).unwrap()));
    let quote = SettlementQuote::calculate(&schedule.installments[2..], &time, &config)?;
    println!(
        "settle {} installments for {} instead of {}",
        quote.remaining_installments, quote.amount_due, quote.amount_without_discount,
    );

    Ok(())
}
