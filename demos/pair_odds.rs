//! Pair odds for a small and a large group, side by side.
//!
//! Small groups get the exact matrix; past the dispatch threshold the engine
//! estimates from trials. The off-diagonal cells are *not* a flat 1/(n-1):
//! the draw order leaks into the odds.

use tombola::{Method, ProbabilityEngine};

fn print_report(report: &tombola::PairingReport) {
    let method = match report.method {
        Method::Exact => "exact enumeration",
        Method::MonteCarlo => "monte carlo",
    };
    println!("{} participants ({method}):", report.labels.len());

    print!("      ");
    for label in &report.labels {
        print!("{label:>7}");
    }
    println!();
    for (row, label) in report.matrix.iter().zip(&report.labels) {
        print!("  {label:>4}");
        for p in row {
            print!("{p:>7.3}");
        }
        println!();
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = ProbabilityEngine::new().with_trials(100_000).with_seed(7);

    // Under the threshold: exact, deterministic.
    print_report(&engine.compute(4)?);

    // Over the threshold: sampled, reproducible here because of the seed.
    print_report(&engine.compute(12)?);

    Ok(())
}
