use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "peakyears",
    about = "Find the years with the largest living population in a window of years",
    version,
    long_about = None
)]
pub struct Args {
    /// JSON file with an array of {"birthYear", "deathYear"} records; "-" reads stdin
    pub input: Option<PathBuf>,

    /// First year of the window (inclusive)
    #[arg(short, long, default_value_t = 1900, allow_negative_numbers = true)]
    pub start: i32,

    /// Last year of the window (inclusive); defaults to the current year
    #[arg(short, long, allow_negative_numbers = true)]
    pub end: Option<i32>,

    /// Refuse windows wider than this many years
    #[arg(long, default_value_t = 100_000)]
    pub max_span: u32,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// List every submitted record and whether it was counted
    #[arg(long)]
    pub show_records: bool,

    /// Log the per-year delta and population arrays
    #[arg(long)]
    pub dump_deltas: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn end_year(&self) -> i32 {
        self.end.unwrap_or_else(crate::utils::current_year)
    }
}
