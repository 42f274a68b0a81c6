//! Savings calculator: prints both savings curves as a table
//!
//! Usage: `savings [monthly] [rate_percent] [years]` (defaults 25 5 10)

use asteroids::savings::SavingsPlan;

fn arg_or(args: &[String], index: usize, default: u32) -> Result<u32, String> {
    match args.get(index) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("argument {} must be a non-negative integer, got {raw:?}", index + 1)),
        None => Ok(default),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let defaults = SavingsPlan::default();
    let parsed = (|| {
        Ok::<_, String>(SavingsPlan::new(
            arg_or(&args, 0, defaults.monthly)?,
            arg_or(&args, 1, defaults.rate_percent)?,
            arg_or(&args, 2, defaults.years)?,
        ))
    })();

    let plan = match parsed {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };
    log::info!(
        "Savings calculator: {} per month, {}% yearly, {} years",
        plan.monthly,
        plan.rate_percent,
        plan.years
    );

    println!("{:>5} {:>14} {:>14}", "year", "linear", "compound");
    for (linear, compound) in plan.linear().iter().zip(plan.compound()) {
        println!(
            "{:>5} {:>14.2} {:>14.2}",
            linear.year, linear.total, compound.total
        );
    }
}
