use std::env::args;
use std::process::Command;

use anyhow::{anyhow, ensure, Result};

fn main() -> Result<()> {
    match args().nth(1).as_deref() {
        None => default(),
        Some("server") => server(),
        Some(name) => Err(anyhow!("Unknown task {}", name)),
    }
}

fn default() -> Result<()> {
    let status = Command::new("cargo").arg("fmt").status()?;

    ensure!(status.success(), "Rustfmt failed with status {:?}", status);

    let status = Command::new("cargo")
        .args(["clippy", "--all-targets"])
        .status()?;

    ensure!(status.success(), "Clippy failed with status {:?}", status);

    let status = Command::new("cargo").arg("test").status()?;

    ensure!(status.success(), "Tests failed with status {:?}", status);

    Ok(())
}

fn server() -> Result<()> {
    let status = Command::new("cargo")
        .args(["run", "--bin", "server"])
        .envs([
            ("PORT", "3001"),
            ("REQUEST_LIMIT", "32"),
            ("RUST_LOG", "info,phonebook=debug,server=debug,tower_http=debug"),
        ])
        .status()?;

    ensure!(status.success(), "Server failed with status {:?}", status);

    Ok(())
}
