use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::step::{self, OnFailure};

pub fn run(unit_only: bool, integration_only: bool) -> Result<()> {
    println!();
    println!("{}", "🧪 Running tests...".cyan().bold());
    println!();

    let total_start = Instant::now();

    let run_unit = !integration_only;
    let run_integration = !unit_only;

    if run_unit {
        // serde pulls in the config round-trip test of the metrics.
        if let Some(output) = step::cargo(
            "Unit tests",
            &["test", "--lib", "--workspace", "--features", "escher-system/serde"],
            OnFailure::Abort,
        )? {
            println!("    {}", step::test_summary(&output).dimmed());
        }
    }

    if run_integration {
        // Property tests live under each crate's tests/ directory.
        if let Some(output) = step::cargo(
            "Integration and property tests",
            &["test", "--workspace", "--tests", "--exclude", "xtask"],
            OnFailure::Abort,
        )? {
            println!("    {}", step::test_summary(&output).dimmed());
        }
    }

    if let Some(output) = step::cargo(
        "Doc tests",
        &["test", "--doc", "--workspace"],
        OnFailure::Warn,
    )? {
        println!("    {}", step::test_summary(&output).dimmed());
    }

    step::finish("All tests", total_start);
    Ok(())
}
