use anyhow::Result;
use clap::Parser;
use tracing::error;

use peakyears::report::print_analysis_results;
use peakyears::utils::{setup_logging, validate_args};
use peakyears::{run_analysis, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose, args.dump_deltas);

    validate_args(&args)?;

    match run_analysis(&args) {
        Ok(analysis) => print_analysis_results(&analysis, &args),
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
