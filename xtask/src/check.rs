use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::step::{self, OnFailure};

/// Bare-metal target the cells ship on.
const EMBEDDED_TARGET: &str = "thumbv7em-none-eabihf";

const LIBRARY_CRATES: [&str; 2] = ["escher-system", "escher-components"];

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking escher crates...".cyan().bold());
    println!();

    let total_start = Instant::now();

    // The library crates must stay no_std, with and without defmt.
    for krate in LIBRARY_CRATES {
        step::cargo(
            &format!("Checking {krate} ({EMBEDDED_TARGET}, no_std)"),
            &["check", "-p", krate, "--target", EMBEDDED_TARGET],
            OnFailure::Abort,
        )?;
        step::cargo(
            &format!("Checking {krate} with defmt"),
            &["check", "-p", krate, "--target", EMBEDDED_TARGET, "--features", "defmt"],
            OnFailure::Abort,
        )?;
    }

    step::cargo(
        "Checking escher-system with serde and tracing (host)",
        &["check", "-p", "escher-system", "--features", "std,serde,tracing"],
        OnFailure::Abort,
    )?;

    step::cargo(
        "Checking the simulator gallery",
        &[
            "check",
            "-p",
            "escher-components",
            "--features",
            "simulator",
            "--examples",
        ],
        OnFailure::Abort,
    )?;

    step::cargo(
        "Running clippy lints",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        OnFailure::Warn,
    )?;

    if step::cargo("Checking code formatting", &["fmt", "--all", "--check"], OnFailure::Warn)?
        .is_none()
    {
        eprintln!("     Run 'cargo fmt --all' to fix");
    }

    step::finish("All checks", total_start);
    Ok(())
}
