//! Example demonstrating the register-rates, build-portfolio, evaluate flow.
//!
//! Run with: cargo run -p money-portfolio --example evaluate

use exchange_bank::Bank;
use money_portfolio::Portfolio;
use money_types::Money;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("debug").init();

    let mut bank = Bank::new();
    bank.add_exchange_rate("EUR", "USD", 1.2);
    bank.add_exchange_rate("USD", "KRW", 1100.0);

    let mut portfolio = Portfolio::new();
    portfolio.add([Money::new(5.0, "USD"), Money::new(10.0, "EUR")]);

    let value = portfolio.evaluate(&bank, "USD")?;
    println!("Portfolio value: {value}");

    // EUR->KRW was never registered, so evaluating in KRW reports the
    // missing pair even though the other entries convert.
    portfolio.add([Money::new(4002.0, "KRW").divide(4.0)?]);
    match portfolio.evaluate(&bank, "KRW") {
        Ok(value) => println!("Portfolio value: {value}"),
        Err(err) => println!("Evaluation failed: {err}"),
    }

    Ok(())
}
