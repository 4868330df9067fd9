//! Size and pattern sweeps: which configurations an algorithm is measured on, and
//! the measure-verify-record loop over them.

use crate::{
    bencher::{self, BenchmarkResult},
    catalogue::{Algorithm, Complexity},
    checks::{self, VerifyError},
    data::{DataGenerator, DataPattern},
    record::{ResultTable, TableAppender},
    sorts::StatsSortFn,
};

/// Sizes for O(n log n) and O(n) algorithms.
pub const DEFAULT_SIZES: [usize; 8] = [
    100, 1_000, 5_000, 10_000, 50_000, 100_000, 500_000, 1_000_000,
];

/// Opt-in tier appended for non-quadratic algorithms.
pub const EXTENDED_SIZES: [usize; 5] = [
    2_000_000,
    5_000_000,
    10_000_000,
    50_000_000,
    100_000_000,
];

/// Sizes for O(n^2) algorithms. These never get the extended tier.
pub const QUADRATIC_SIZES: [usize; 6] = [100, 1_000, 5_000, 10_000, 20_000, 100_000];

/// Sizes for the instrumented stats sweep.
pub const STATS_SIZES: [usize; 6] = [100, 1_000, 5_000, 10_000, 20_000, 50_000];

/// The full size schedule of a size sweep, ascending within each tier.
pub fn size_schedule(complexity: Complexity, include_extended: bool) -> Vec<usize> {
    let mut sizes = match complexity {
        Complexity::Quadratic => QUADRATIC_SIZES.to_vec(),
        _ => DEFAULT_SIZES.to_vec(),
    };
    if include_extended && complexity != Complexity::Quadratic {
        sizes.extend_from_slice(&EXTENDED_SIZES);
    }
    sizes
}

/// The single input size a pattern sweep uses.
pub fn pattern_test_size(complexity: Complexity, include_extended: bool) -> usize {
    match (complexity, include_extended) {
        (Complexity::Quadratic, _) => 100_000,
        (Complexity::Linearithmic, false) => 100_000,
        (Complexity::Linearithmic, true) => 5_000_000,
        (Complexity::Linear, false) => 1_000_000,
        (Complexity::Linear, true) => 50_000_000,
    }
}

/// Counts for one or more sweeps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepSummary {
    /// Rows written
    pub measured: usize,
    /// Rows written whose output failed verification
    pub failed: usize,
    /// Configurations skipped because their buffers could not be allocated
    pub skipped: usize,
}

impl SweepSummary {
    pub fn merge(&mut self, other: SweepSummary) {
        self.measured += other.measured;
        self.failed += other.failed;
        self.skipped += other.skipped;
    }
}

/// One verified measurement.
struct Measurement {
    result: BenchmarkResult,
    verdict: Result<(), VerifyError>,
}

/// Either sort form of a catalogue entry.
#[derive(Clone, Copy)]
enum Target<'a> {
    Plain(&'a Algorithm),
    Instrumented(&'a Algorithm, StatsSortFn),
}

impl Target<'_> {
    fn name(&self) -> &'static str {
        match self {
            Target::Plain(a) | Target::Instrumented(a, _) => a.name,
        }
    }
}

/// Allocate an empty buffer able to hold `size` elements without reallocating.
fn allocate(size: usize) -> Option<Vec<i32>> {
    let mut v = Vec::new();
    v.try_reserve_exact(size).ok()?;
    Some(v)
}

/// Runs sweeps against a shared data generator.
pub struct Sweeper<'a> {
    generator: &'a mut DataGenerator,
}

impl<'a> Sweeper<'a> {
    pub fn new(generator: &'a mut DataGenerator) -> Self {
        Self { generator }
    }

    /// Generate, time, and verify one configuration.
    ///
    /// Returns `None` if the input or its reference copy cannot be allocated.
    /// Both buffers are released before returning.
    fn measure(
        &mut self,
        target: Target<'_>,
        pattern: DataPattern,
        size: usize,
    ) -> Option<Measurement> {
        let mut data = allocate(size)?;
        let mut original = allocate(size)?;
        self.generator.fill(&mut data, size, pattern);
        original.extend_from_slice(&data);
        let result = match target {
            Target::Plain(algorithm) => bencher::time_once(algorithm.sort, &mut data),
            Target::Instrumented(_, sort) => bencher::time_once_with_stats(sort, &mut data),
        };
        let verdict = checks::verify(&data, &original);
        Some(Measurement { result, verdict })
    }

    /// Measure one configuration and append its row, whatever the verdict.
    fn measure_and_record(
        &mut self,
        out: &mut TableAppender,
        target: Target<'_>,
        pattern: DataPattern,
        size: usize,
        summary: &mut SweepSummary,
    ) -> anyhow::Result<()> {
        let name = target.name();
        let Some(m) = self.measure(target, pattern, size) else {
            log::warn!(
                "Memory allocation failed for {name} with {size} elements ({pattern}); skipped"
            );
            summary.skipped += 1;
            return Ok(());
        };
        match &m.verdict {
            Ok(()) => match m.result.stats {
                Some(stats) => log::info!(
                    "{name} n={size} ({pattern}): OK ({:.6}s, comparisons={}, swaps={})",
                    m.result.time_sec,
                    stats.comparisons,
                    stats.swaps
                ),
                None => log::info!("{name} n={size} ({pattern}): OK ({:.4}s)", m.result.time_sec),
            },
            Err(e @ VerifyError::Unsorted { .. }) => {
                log::error!("{name} n={size} ({pattern}): FAIL - NOT SORTED: {e}");
                summary.failed += 1;
            }
            Err(e) => {
                log::error!("{name} n={size} ({pattern}): FAIL - WRONG RESULT: {e}");
                summary.failed += 1;
            }
        }
        out.append(name, pattern, size, &m.result)?;
        summary.measured += 1;
        Ok(())
    }

    /// Measure `algorithm` on `pattern` across its size schedule, one row per size.
    ///
    /// Fails only when the table cannot be opened or written.
    pub fn size_sweep(
        &mut self,
        table: &ResultTable,
        algorithm: &Algorithm,
        pattern: DataPattern,
        include_extended: bool,
    ) -> anyhow::Result<SweepSummary> {
        let mut out = table.appender()?;
        let sizes = size_schedule(algorithm.complexity, include_extended);
        log::debug!("{} size schedule ({pattern}): {:?}", algorithm.name, sizes);
        let mut summary = SweepSummary::default();
        for size in sizes {
            let target = Target::Plain(algorithm);
            self.measure_and_record(&mut out, target, pattern, size, &mut summary)?;
        }
        Ok(summary)
    }

    /// Measure `algorithm` on every pattern at its class's representative size.
    pub fn pattern_sweep(
        &mut self,
        table: &ResultTable,
        algorithm: &Algorithm,
        include_extended: bool,
    ) -> anyhow::Result<SweepSummary> {
        let mut out = table.appender()?;
        let size = pattern_test_size(algorithm.complexity, include_extended);
        log::info!("Testing {} with different patterns (size={size})", algorithm.name);
        let mut summary = SweepSummary::default();
        for pattern in DataPattern::ALL {
            let target = Target::Plain(algorithm);
            self.measure_and_record(&mut out, target, pattern, size, &mut summary)?;
        }
        Ok(summary)
    }

    /// Measure the instrumented variant of `algorithm` on every pattern and every
    /// stats size, into a freshly initialized stats table.
    pub fn stats_sweep(
        &mut self,
        table: &ResultTable,
        algorithm: &Algorithm,
    ) -> anyhow::Result<SweepSummary> {
        let Some(stats_sort) = algorithm.stats_sort else {
            anyhow::bail!("{} has no instrumented variant", algorithm.name);
        };
        table.initialize()?;
        let mut out = table.appender()?;
        let mut summary = SweepSummary::default();
        for pattern in DataPattern::ALL {
            for size in STATS_SIZES {
                let target = Target::Instrumented(algorithm, stats_sort);
                self.measure_and_record(&mut out, target, pattern, size, &mut summary)?;
            }
        }
        Ok(summary)
    }
}
