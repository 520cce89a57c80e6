/// quick start - price a 12 month plan and print its booklet
use crediario_rs::chrono::NaiveDate;
use crediario_rs::{generate_schedule, InterestMode, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let first_due = NaiveDate::from_ymd_opt(2024, 1, 15).ok_or("bad date")?;

    // R$ 1.200,00 at 5% a month, simple interest
    let schedule = generate_schedule(
        Money::from_major(1_200),
        Rate::from_percentage(5),
        12,
        first_due,
        InterestMode::Simple,
    )?;

    for installment in &schedule.installments {
        println!(
            "{:>2}  {}  {:>8}  (principal {}, interest {}, balance {})",
            installment.number,
            installment.due_date,
            installment.expected_total_amount,
            installment.principal_amount,
            installment.expected_interest_amount,
            installment.remaining_balance_after_payment,
        );
    }
    println!("total {} / interest {}", schedule.total_amount, schedule.total_interest);

    Ok(())
}
