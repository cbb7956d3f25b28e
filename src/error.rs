use std::collections::TryReserveError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Year span {start_year}..={end_year} does not fit in memory on this platform")]
    SpanOverflow { start_year: i32, end_year: i32 },

    #[error("Failed to allocate {slots} yearly slots for {start_year}..={end_year}: {source}")]
    Allocation {
        start_year: i32,
        end_year: i32,
        slots: usize,
        #[source]
        source: TryReserveError,
    },
}
