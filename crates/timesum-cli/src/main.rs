//! `timesum` CLI — sum time expressions given as arguments, print `HH:MM`.
//!
//! ## Usage
//!
//! ```sh
//! # Time between two clock times
//! timesum 07:45-11:19            # 03:34
//!
//! # Mix clock times and decimal hours
//! timesum 1:00 2.5               # 03:30
//!
//! # Typical timesheet: sum the day's work intervals
//! timesum 09:00-12:15 13:00-17:30
//! ```
//!
//! All the logic lives in `timesum-core`; this binary only maps arguments
//! in, and the result (stdout) or the first failure (stderr, non-zero exit)
//! out.

use anyhow::Result;
use clap::Parser;
use timesum_core::{sum_and_format, Grammar};

#[derive(Parser)]
#[command(
    name = "timesum",
    version,
    about = "Sum time expressions and print the total as HH:MM"
)]
struct Cli {
    /// Time expressions: a range like `07:45-11:19`, a clock time like
    /// `14:30`, or decimal hours like `2.25`
    #[arg(value_name = "EXPRESSION")]
    expressions: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let grammar = Grammar::new();
    let total = sum_and_format(&grammar, &cli.expressions)?;
    println!("{total}");
    Ok(())
}
