//! CLI output helpers.

use clap::ValueEnum;

/// How list output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,
    /// Machine-readable JSON.
    Json,
}

/// Print a success marker line.
pub fn print_success(message: &str) {
    println!("✓ {message}");
}

/// Print an error marker line to stderr.
pub fn print_error(message: &str) {
    eprintln!("✗ {message}");
}
