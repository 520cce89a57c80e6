/// offer simulation - compare term options before closing the sale
use crediario_rs::{parse_rate_input, simulate_offers, CrediarioConfig, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CrediarioConfig::from_json_str(r#"{"limits":{"term_options":[3,6,10,12]}}"#)?;

    let rate = parse_rate_input("11,5")?;
    config.limits.validate_rate(rate)?;

    let simulation = simulate_offers(Money::from_major(1_500), rate, &config.limits)?;
    println!("{} a month ({} a year)", simulation.monthly_rate, simulation.annual_rate);
    for row in &simulation.rows {
        println!(
            "{:>2}x {:>8}  total {:>9}  interest {:>8} ({}%)",
            row.term_months, row.installment_amount, row.total_financed, row.total_interest, row.interest_percent,
        );
    }

    Ok(())
}
