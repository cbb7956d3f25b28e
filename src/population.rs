//! Peak population over a closed window of calendar years.
//!
//! Births and deaths are written into a difference array indexed by
//! `year - start_year`; its prefix sum is the population per year. A person
//! counts as alive over `[birth_year, death_year)`, so the death year is the
//! first year they are not counted.

use std::time::Instant;
use tracing::{debug, info};

use crate::diagnostics::{DiagnosticSink, NoopSink};
use crate::error::{AnalysisError, Result};
use crate::person::PersonRecord;
use crate::stats::AnalysisResult;

/// Finds the years in `[start_year, end_year]` with the largest population.
///
/// Records that are incomplete, inverted, or not fully inside the window are
/// skipped. An inverted window yields an empty result. The only error is a
/// window too large to allocate.
pub fn analyze(start_year: i32, end_year: i32, people: &[PersonRecord]) -> Result<AnalysisResult> {
    analyze_with_sink(start_year, end_year, people, &mut NoopSink)
}

/// Same as [`analyze`], handing the delta and population arrays to `sink`
/// before the result is returned.
pub fn analyze_with_sink<S: DiagnosticSink + ?Sized>(
    start_year: i32,
    end_year: i32,
    people: &[PersonRecord],
    sink: &mut S,
) -> Result<AnalysisResult> {
    let start_time = Instant::now();

    if end_year < start_year {
        debug!(
            action = "skip",
            component = "population_window",
            start_year,
            end_year,
            "Window is inverted, nothing to analyze"
        );
        return Ok(AnalysisResult::empty(people.len()));
    }

    let mut deltas = allocate_window(start_year, end_year)?;
    let samples_recorded = record_lifespans(&mut deltas, start_year, end_year, people);
    sink.record_deltas(start_year, &deltas);

    let population = cumulative_population(&deltas);
    sink.record_population(start_year, &population);

    let (max_population, peak_years) = find_peaks(&population, start_year);

    info!(
        action = "complete",
        component = "population_window",
        start_year,
        end_year,
        samples_submitted = people.len(),
        samples_recorded,
        max_population,
        peak_year_count = peak_years.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Population analysis completed"
    );

    Ok(AnalysisResult {
        samples_submitted: people.len(),
        samples_recorded,
        max_population,
        peak_years,
    })
}

/// Prefix sum of a delta array.
pub fn cumulative_population(deltas: &[i64]) -> Vec<i64> {
    deltas
        .iter()
        .scan(0i64, |total, delta| {
            *total += delta;
            Some(*total)
        })
        .collect()
}

fn allocate_window(start_year: i32, end_year: i32) -> Result<Vec<i64>> {
    let span = i64::from(end_year) - i64::from(start_year) + 1;
    let slots = usize::try_from(span).map_err(|_| AnalysisError::SpanOverflow {
        start_year,
        end_year,
    })?;

    let mut deltas = Vec::new();
    deltas
        .try_reserve_exact(slots)
        .map_err(|source| AnalysisError::Allocation {
            start_year,
            end_year,
            slots,
            source,
        })?;
    deltas.resize(slots, 0);
    Ok(deltas)
}

fn record_lifespans(
    deltas: &mut [i64],
    start_year: i32,
    end_year: i32,
    people: &[PersonRecord],
) -> usize {
    let offset = |year: i32| (i64::from(year) - i64::from(start_year)) as usize;

    let mut recorded = 0;
    for person in people {
        if let Some((birth, death)) = person.lifespan_within(start_year, end_year) {
            deltas[offset(birth)] += 1;
            deltas[offset(death)] -= 1;
            recorded += 1;
        }
    }
    recorded
}

/// Scans the running population left to right. A strictly larger total
/// restarts the peak list; an equal one extends it. Years with nobody alive
/// never qualify.
fn find_peaks(population: &[i64], start_year: i32) -> (usize, Vec<i32>) {
    let mut max_found = 0i64;
    let mut peak_years = Vec::new();

    for (index, &total) in population.iter().enumerate() {
        let year = (i64::from(start_year) + index as i64) as i32;
        if total > max_found {
            peak_years.clear();
            peak_years.push(year);
            max_found = total;
        } else if total == max_found && total > 0 {
            peak_years.push(year);
        }
    }

    (max_found as usize, peak_years)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CaptureSink {
        deltas: Vec<i64>,
        population: Vec<i64>,
    }

    impl DiagnosticSink for CaptureSink {
        fn record_deltas(&mut self, _start_year: i32, deltas: &[i64]) {
            self.deltas = deltas.to_vec();
        }

        fn record_population(&mut self, _start_year: i32, population: &[i64]) {
            self.population = population.to_vec();
        }
    }

    #[test]
    fn single_lifespan_excludes_death_year() {
        let result = analyze(1900, 2000, &[PersonRecord::new(1950, 1960)]).unwrap();
        assert_eq!(result.max_population, 1);
        assert_eq!(result.samples_recorded, 1);
        assert_eq!(result.peak_years, (1950..=1959).collect::<Vec<_>>());
    }

    #[test]
    fn inverted_window_is_empty() {
        let people = [PersonRecord::new(1950, 1960), PersonRecord::new(1955, 1958)];
        let result = analyze(2000, 1900, &people).unwrap();
        assert_eq!(result, AnalysisResult::empty(2));
    }

    #[test]
    fn single_year_window() {
        let result = analyze(1950, 1950, &[PersonRecord::new(1950, 1950)]).unwrap();
        assert_eq!(result.samples_recorded, 1);
        assert_eq!(result.max_population, 0);
        assert!(result.peak_years.is_empty());
    }

    #[test]
    fn sink_sees_deltas_then_running_total() {
        let mut sink = CaptureSink::default();
        let people = [PersonRecord::new(2000, 2003), PersonRecord::new(2001, 2002)];
        let result = analyze_with_sink(2000, 2004, &people, &mut sink).unwrap();

        assert_eq!(sink.deltas, vec![1, 1, -1, -1, 0]);
        assert_eq!(sink.population, vec![1, 2, 1, 0, 0]);
        assert_eq!(sink.population, cumulative_population(&sink.deltas));
        assert_eq!(result.max_population, 2);
        assert_eq!(result.peak_years, vec![2001]);
    }

    #[test]
    fn sink_does_not_change_result() {
        let people = [PersonRecord::new(1910, 1930), PersonRecord::new(1920, 1925)];
        let plain = analyze(1900, 2000, &people).unwrap();
        let traced = analyze_with_sink(1900, 2000, &people, &mut CaptureSink::default()).unwrap();
        assert_eq!(plain, traced);
    }

    #[test]
    fn extreme_window_does_not_overflow_span() {
        let result = analyze(i32::MAX, i32::MAX, &[PersonRecord::new(i32::MAX, i32::MAX)]).unwrap();
        assert_eq!(result.samples_recorded, 1);
        assert_eq!(result.max_population, 0);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn unallocatable_window_is_returned_as_error() {
        use std::collections::TryReserveError;
        use std::error::Error;

        let err = analyze(i32::MIN, i32::MAX, &[PersonRecord::new(0, 1)]).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Allocation {
                start_year: i32::MIN,
                end_year: i32::MAX,
                slots: 4_294_967_296,
                ..
            }
        ));
        assert!(err
            .source()
            .is_some_and(|source| source.is::<TryReserveError>()));
        assert!(err.to_string().contains("4294967296 yearly slots"));
    }

    #[test]
    fn cumulative_population_of_empty_is_empty() {
        assert!(cumulative_population(&[]).is_empty());
    }
}
