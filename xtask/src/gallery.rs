use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;

/// Build and open the simulator gallery; returns when the window closes.
pub fn run(log: &str) -> Result<()> {
    println!();
    println!("{}", "🖼  Opening the cell gallery...".cyan().bold());
    println!("   {}", format!("RUST_LOG={log}").dimmed());
    println!();

    let status = Command::new("cargo")
        .args([
            "run",
            "-p",
            "escher-components",
            "--example",
            "cell_gallery",
            "--features",
            "simulator",
        ])
        .env("RUST_LOG", log)
        .status()
        .context("Failed to launch the cell gallery")?;

    if !status.success() {
        anyhow::bail!("Cell gallery exited with {status}");
    }
    Ok(())
}
