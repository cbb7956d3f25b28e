use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::person::PersonRecord;

/// Reads a JSON array of person records from `path`, or from stdin when the
/// path is absent or `-`.
pub fn load_people(path: Option<&Path>) -> Result<Vec<PersonRecord>> {
    let start_time = Instant::now();

    let (source, content) = match path {
        Some(path) if path != Path::new("-") => {
            info!(action = "load", component = "record_file", file_path = ?path, "Loading person records from file");
            if !path.exists() {
                anyhow::bail!("Record file not found: {:?}", path);
            }
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read record file {:?}", path))?;
            (path.display().to_string(), content)
        }
        _ => {
            info!(action = "load", component = "record_stdin", "Reading person records from stdin");
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read records from stdin")?;
            ("<stdin>".to_string(), content)
        }
    };

    let people = parse_people(&content).with_context(|| format!("Invalid records in {}", source))?;

    info!(
        action = "loaded",
        component = "records",
        record_count = people.len(),
        source = %source,
        duration_ms = start_time.elapsed().as_millis(),
        "Loaded person records"
    );
    Ok(people)
}

pub fn parse_people(content: &str) -> Result<Vec<PersonRecord>> {
    let people = serde_json::from_str(content).context("Expected a JSON array of person records")?;
    Ok(people)
}
