//! CLI module for the user registration pipeline
//!
//! Provides subcommands for driving the pipeline from the command line:
//! - `register`: validate and persist one user record read as JSON

pub mod register;

use clap::{Parser, Subcommand};

/// User registration - validates, normalizes and persists user records
#[derive(Parser)]
#[command(name = "user-registration")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Register one user record read from a file or stdin
    Register(register::RegisterArgs),
}
