use chrono::{Datelike, Local};
use time::macros::format_description;
use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

pub fn setup_logging(verbose: bool, dump_deltas: bool) {
    let default_directive = if dump_deltas {
        "peakyears=debug"
    } else if verbose {
        "info"
    } else {
        "error"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn format_number(num: usize) -> String {
    num.to_string()
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if args.max_span == 0 {
        anyhow::bail!("--max-span must be greater than 0");
    }

    let span = i64::from(args.end_year()) - i64::from(args.start) + 1;
    if span > i64::from(args.max_span) {
        anyhow::bail!(
            "window {}..={} spans {} years, more than --max-span {}",
            args.start,
            args.end_year(),
            span,
            args.max_span
        );
    }

    Ok(())
}
