/// manual plan - validate installments typed at the counter
use crediario_rs::chrono::NaiveDate;
use crediario_rs::{process_manual_plan, CrediarioError, ManualInstallment, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let due = |m| NaiveDate::from_ymd_opt(2024, m, 10).ok_or("bad date");

    let entries = vec![
        ManualInstallment::new(Money::from_major(150), due(1)?),
        ManualInstallment::new(Money::from_major(100), due(2)?),
        ManualInstallment::new(Money::from_major(50), due(3)?),
    ];

    let schedule = process_manual_plan(&entries, Money::from_major(300))?;
    println!("{}", schedule.to_json_pretty()?);

    // one installment short
    match process_manual_plan(&entries[..2], Money::from_major(300)) {
        Err(CrediarioError::InstallmentSumMismatch { sum, expected }) => {
            println!("rejected: entered {} but the sale is {}", sum, expected);
        }
        other => println!("unexpected: {:?}", other),
    }

    Ok(())
}
