use serde::Serialize;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub samples_submitted: usize,
    pub samples_recorded: usize,
    pub max_population: usize,
    pub peak_years: Vec<i32>,
}

impl AnalysisResult {
    /// Result for a query that recorded nothing.
    pub fn empty(samples_submitted: usize) -> Self {
        Self {
            samples_submitted,
            ..Self::default()
        }
    }

    pub fn samples_rejected(&self) -> usize {
        self.samples_submitted - self.samples_recorded
    }

    /// Collapses `peak_years` into inclusive runs of consecutive years.
    pub fn peak_ranges(&self) -> Vec<RangeInclusive<i32>> {
        let mut ranges: Vec<RangeInclusive<i32>> = Vec::new();
        for &year in &self.peak_years {
            match ranges.last_mut() {
                Some(run) if *run.end() + 1 == year => *run = *run.start()..=year,
                _ => ranges.push(year..=year),
            }
        }
        ranges
    }
}
