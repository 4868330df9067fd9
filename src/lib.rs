//! Benchmarks a catalogue of in-memory integer sorts over size and input-pattern
//! sweeps, verifying every output and recording wall-clock times as CSV tables.

pub mod bencher;
pub mod catalogue;
pub mod checks;
pub mod config;
pub mod data;
pub mod record;
pub mod sorts;
pub mod suite;
pub mod sweep;

pub use bencher::{BenchTimer, Bencher, BenchmarkResult};
pub use catalogue::{Algorithm, Complexity, Family, CATALOGUE};
pub use checks::VerifyError;
pub use data::{DataGenerator, DataPattern};
pub use suite::{BenchmarkSuite, RunOptions, RunSummary};
pub use sweep::SweepSummary;
