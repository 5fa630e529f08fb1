use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for cubespace")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run fmt, clippy, and tests
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build the entire workspace
    Build,
    /// Print the solved-cube layout via the CLI
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            run("cargo fmt --check", &["fmt", "--all", "--", "--check"])?;
            run(
                "cargo clippy",
                &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
            )?;
            run("cargo test", &["test", "--workspace"])?;
        }
        Commands::Fmt => run("cargo fmt --check", &["fmt", "--all", "--", "--check"])?,
        Commands::Clippy => run(
            "cargo clippy",
            &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        )?,
        Commands::Test => run("cargo test", &["test", "--workspace"])?,
        Commands::Build => run("cargo build", &["build", "--workspace"])?,
        Commands::Demo => run(
            "layout demo",
            &["run", "-p", "cubespace-cli", "--", "layout"],
        )?,
    }

    Ok(())
}

fn run(label: &str, args: &[&str]) -> Result<()> {
    println!("==> Running {label}");
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("{label} failed");
    }
    Ok(())
}
