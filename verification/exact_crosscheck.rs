//! # Exact Cross-Check
//!
//! Recomputes every lookup table in exact rational arithmetic and compares
//! the rounded 64.64 integers with the 60-digit decimal pipeline.
//!
//! A mismatch means the working precision is too low to decide the rounding
//! of the 64th fractional bit for that entry.

use anyhow::Result;
use clap::Parser;
use mint_tables::{indices, Decimal, Formula, GeneratorConfig, Index, HOURS_PER_DAY};
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Pow};

#[derive(Parser)]
#[command(name = "exact_crosscheck")]
#[command(about = "Compare the decimal pipeline against exact rational arithmetic")]
struct Args {
    /// Print every row, not only mismatches
    #[arg(short, long)]
    verbose: bool,
}

fn to_ratio(value: &Decimal) -> BigRational {
    let scale: BigInt = Pow::pow(BigInt::from(10u8), value.exponent().unsigned_abs());
    if value.exponent() >= 0 {
        BigRational::from_integer(value.coefficient() * scale)
    } else {
        BigRational::new(value.coefficient().clone(), scale)
    }
}

fn power(base: &BigRational, k: i32) -> BigRational {
    let magnitude = usize::try_from(k.unsigned_abs()).unwrap_or(usize::MAX);
    let value = num_traits::pow(base.clone(), magnitude);
    if k < 0 {
        value.recip()
    } else {
        value
    }
}

/// Closed forms without any intermediate rounding.
fn exact_term(formula: Formula, n: Index, beta: &BigRational, gamma: &BigRational) -> BigRational {
    let one = BigRational::one();
    let hours = BigRational::from_integer(BigInt::from(HOURS_PER_DAY));
    let k = i32::from(n);
    let rate = || {
        if n == 0 {
            one.clone()
        } else {
            (power(beta, k) - &one) / (power(beta, k + 1) - power(beta, k)) + &one
        }
    };

    match formula {
        Formula::Rate => rate(),
        Formula::DailyRate | Formula::LegacyBetaT => hours * rate(),
        Formula::GammaT if n == 0 => hours,
        Formula::GammaT => {
            let gamma_n = power(gamma, k);
            hours * ((&gamma_n - &one) / (gamma - &one) + gamma_n)
        }
        Formula::LegacyBetaR => power(beta, -k),
        Formula::GammaR => power(gamma, k),
    }
}

/// `round(value * 2^64)`, ties to even.
fn encode(value: &BigRational) -> BigInt {
    let scaled = value * BigRational::from_integer(BigInt::one() << 64u32);
    let floor = scaled.floor();
    let fraction = &scaled - &floor;
    let half = BigRational::new(BigInt::one(), BigInt::from(2u8));
    let floor = floor.to_integer();
    if fraction > half || (fraction == half && floor.is_odd()) {
        floor + 1u8
    } else {
        floor
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = GeneratorConfig::production()?;
    let beta = to_ratio(config.constants.beta());
    let gamma = to_ratio(config.constants.gamma());
    let mut mismatches = 0;

    for formula in Formula::ALL {
        let table = config.generate(formula)?;
        let mut table_ok = true;

        for (n, entry) in indices().zip(table.entries()) {
            let exact = encode(&exact_term(formula, n, &beta, &gamma));
            let decimal = BigInt::from(entry.fixed.to_bits());
            if exact != decimal {
                println!("{:<14} n={n:<3} exact {exact} != decimal {decimal}", formula.name());
                table_ok = false;
                mismatches += 1;
            } else if args.verbose {
                println!("{:<14} n={n:<3} {exact}", formula.name());
            }
        }

        println!("{:<14} {}", formula.name(), if table_ok { "OK" } else { "MISMATCH" });
    }

    if mismatches > 0 {
        anyhow::bail!("{mismatches} entries differ from exact arithmetic");
    }
    println!("\nAll {} tables agree with exact arithmetic", Formula::ALL.len());
    Ok(())
}
