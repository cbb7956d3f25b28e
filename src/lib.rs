pub mod args;
pub mod diagnostics;
pub mod error;
pub mod person;
pub mod population;
pub mod records;
pub mod report;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use diagnostics::{DiagnosticSink, NoopSink, TracingSink};
pub use error::AnalysisError;
pub use person::PersonRecord;
pub use population::{analyze, analyze_with_sink};
pub use report::run_analysis;
pub use stats::AnalysisResult;
