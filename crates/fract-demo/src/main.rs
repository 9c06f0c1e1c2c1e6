//! Demonstration driver: prints formatted arithmetic on a few fractions and
//! deliberately triggers the zero-denominator and divide-by-zero errors.

mod cli;
mod logger;

use clap::Parser;
use fract_rational::{Rational, RationalError};

use crate::cli::CliConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();
    logger::init_logger(config.verbose, config.json);

    tracing::info!("Starting fract demo");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(kind = ?e.kind(), "unexpected error: {e}");
        return Err(e.into());
    }

    tracing::info!("Demo finished");
    Ok(())
}

fn run(config: &CliConfig) -> Result<(), RationalError> {
    println!("=== Demonstration of the Rational type ===");

    println!("\n--- Creation of fractions ---");
    let f1 = Rational::new(1, 2)?;
    let f2 = Rational::new(3, 4)?;
    let f3 = Rational::new(2, 3)?;
    let f4 = Rational::new(-5, -10)?;
    println!("Fraction 1: {f1}");
    println!("Fraction 2: {f2}");
    println!("Fraction 3: {f3}");
    println!("Fraction 4 (reduced): {f4}  stored as {f4:?}");

    println!("\n--- Mathematical operations ---");
    println!("Addition: {f1} + {f2} = {}", f1.checked_add(&f2)?);
    println!("Subtraction: {f1} - {f2} = {}", f1.checked_sub(&f2)?);
    println!("Multiplication: {f1} * {f3} = {}", f1.checked_mul(&f3)?);
    println!("Division: {f2} / {f3} = {}", f2.checked_div(&f3)?);
    println!("Power: ({f3})^3 = {}", f3.checked_pow(3)?);
    println!("Power: ({f3})^-2 = {}", f3.checked_pow(-2)?);

    println!("\n--- Comparisons ---");
    println!("{f1} < {f2} = {}", f1 < f2);
    println!("{f2} > {f3} = {}", f2 > f3);
    println!("{f4} == {f1} = {}", f4 == f1);
    println!("{f4:?} has the same terms as {f1:?} = {}", f4.same_terms(&f1));

    println!("\n--- Fraction properties ---");
    describe(&f1);
    describe(&f4);
    println!("{f1} is adjacent to {f2}: {}", f1.is_adjacent_to(&f2));
    println!("{f1} is adjacent to {f3}: {}", f1.is_adjacent_to(&f3));

    println!("\n--- Mixed number representation ---");
    let f5 = Rational::new(7, 4)?;
    println!("{f5} as mixed number: {}", f5.mixed());
    println!("{} as mixed number: {}", -f5, (-f5).mixed());

    if let Some((n, d)) = config.extra_terms() {
        println!("\n--- Requested fraction ---");
        match Rational::new(n, d) {
            Ok(r) => {
                describe(&r);
                println!("{r} as mixed number: {}", r.mixed());
                println!("{r} as float: {}", r.to_f64());
            }
            Err(e) => report("Error creating fraction", &e),
        }
    }

    println!("\n--- Handling errors ---");
    match Rational::new(1, 0) {
        Err(e @ RationalError::InvalidValue) => report("Error creating fraction", &e),
        other => {
            other?;
        }
    }
    match f1.checked_div(&Rational::new(0, 1)?) {
        Err(e @ RationalError::DivideByZero) => report("Error during division", &e),
        other => {
            other?;
        }
    }

    Ok(())
}

fn describe(r: &Rational) {
    tracing::debug!(numerator = r.numerator(), denominator = r.denominator(), "classifying");
    println!("{r} is zero: {}", r.is_zero());
    println!("{r} is an integer: {}", r.is_integer());
    println!("{r} is proper: {}", r.is_proper());
    println!("{r} is a unit fraction: {}", r.is_unit());
}

fn report(context: &str, e: &RationalError) {
    tracing::warn!(kind = ?e.kind(), "{context}: {e}");
    println!("{context}: {e}");
}
