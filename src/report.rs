use anyhow::{Context, Result};
use std::io::{self, Write};
use std::time::Instant;
use tracing::info;

use crate::diagnostics::{DiagnosticSink, NoopSink, TracingSink};
use crate::person::PersonRecord;
use crate::stats::AnalysisResult;
use crate::utils::format_number;
use crate::{population, records, Args};

#[derive(Debug)]
pub struct Analysis {
    pub start_year: i32,
    pub end_year: i32,
    pub people: Vec<PersonRecord>,
    pub result: AnalysisResult,
}

pub fn run_analysis(args: &Args) -> Result<Analysis> {
    let total_start_time = Instant::now();
    let (start_year, end_year) = (args.start, args.end_year());
    info!(action = "start", component = "analysis", start_year, end_year, "Starting population analysis");

    let people = records::load_people(args.input.as_deref())?;

    let mut sink: Box<dyn DiagnosticSink> = if args.dump_deltas {
        Box::new(TracingSink)
    } else {
        Box::new(NoopSink)
    };
    let result = population::analyze_with_sink(start_year, end_year, &people, sink.as_mut())
        .context("Population analysis failed")?;

    info!(
        action = "complete",
        component = "analysis",
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );

    Ok(Analysis {
        start_year,
        end_year,
        people,
        result,
    })
}

pub fn print_analysis_results(analysis: &Analysis, args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_analysis_results(&mut out, analysis, args)?;
    out.flush()?;
    Ok(())
}

pub fn write_analysis_results<W: Write>(out: &mut W, analysis: &Analysis, args: &Args) -> Result<()> {
    let result = &analysis.result;

    if args.show_records {
        writeln!(out, "Source data:")?;
        for (index, person) in analysis.people.iter().enumerate() {
            let status = if person.is_eligible(analysis.start_year, analysis.end_year) {
                "counted"
            } else {
                "skipped"
            };
            writeln!(out, "    {}: {} ({})", index, serde_json::to_string(person)?, status)?;
        }
    }

    if args.json {
        writeln!(out, "{}", serde_json::to_string(result)?)?;
        return Ok(());
    }

    writeln!(
        out,
        "\n--- Population {} to {} ---",
        analysis.start_year, analysis.end_year
    )?;
    writeln!(out, "Records submitted: {}", format_number(result.samples_submitted))?;
    writeln!(out, "Records counted: {}", format_number(result.samples_recorded))?;
    writeln!(out, "Records skipped: {}", format_number(result.samples_rejected()))?;
    writeln!(out, "Largest population: {}", format_number(result.max_population))?;

    let ranges = result.peak_ranges();
    if ranges.is_empty() {
        writeln!(out, "Peak years: none")?;
    } else {
        let ranges: Vec<String> = ranges
            .iter()
            .map(|run| {
                if run.start() == run.end() {
                    run.start().to_string()
                } else {
                    format!("{}-{}", run.start(), run.end())
                }
            })
            .collect();
        writeln!(out, "Peak years: {}", ranges.join(", "))?;
    }

    Ok(())
}
