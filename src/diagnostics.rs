use tracing::debug;

/// Receives the intermediate arrays of an analysis for inspection.
///
/// Implementations only observe; the analysis result does not depend on them.
pub trait DiagnosticSink {
    /// Net population change per year, indexed from the window start.
    fn record_deltas(&mut self, _start_year: i32, _deltas: &[i64]) {}

    /// Running population per year, indexed from the window start.
    fn record_population(&mut self, _start_year: i32, _population: &[i64]) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {}

/// Emits both arrays as `debug` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record_deltas(&mut self, start_year: i32, deltas: &[i64]) {
        debug!(
            action = "dump",
            component = "population_deltas",
            start_year,
            slots = deltas.len(),
            deltas = ?deltas,
            "Population deltas by year"
        );
    }

    fn record_population(&mut self, start_year: i32, population: &[i64]) {
        debug!(
            action = "dump",
            component = "population_size",
            start_year,
            slots = population.len(),
            population = ?population,
            "Population size by year"
        );
    }
}
