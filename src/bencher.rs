use std::{
    cell::Cell,
    hint::black_box,
    time::{Duration, Instant},
};

use crate::sorts::{SortFn, SortStats, StatsSortFn};

/// Outcome of one timed sort invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkResult {
    pub time_sec: f64,
    pub time_ns: u64,
    /// Only set for instrumented sorts
    pub stats: Option<SortStats>,
}

impl BenchmarkResult {
    fn new(elapsed: Duration, stats: Option<SortStats>) -> Self {
        let time_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        Self {
            time_sec: time_ns as f64 / 1e9,
            time_ns,
            stats,
        }
    }
}

/// Collects the elapsed time of exactly one timed region.
pub struct Bencher {
    elapsed: Cell<Option<Duration>>,
}

/// Guard for the timed region. The clock stops when it is dropped.
pub struct BenchTimer<'a> {
    start_time: Instant,
    bencher: &'a Bencher,
}

impl<'a> Drop for BenchTimer<'a> {
    fn drop(&mut self) {
        let elapsed = self.start_time.elapsed();
        let previous = self.bencher.elapsed.replace(Some(elapsed));
        assert!(previous.is_none(), "More than one benchmark timer detected");
    }
}

impl Default for Bencher {
    fn default() -> Self {
        Self::new()
    }
}

impl Bencher {
    pub fn new() -> Self {
        Self {
            elapsed: Cell::new(None),
        }
    }

    pub fn start_timing(&self) -> BenchTimer<'_> {
        BenchTimer {
            start_time: Instant::now(),
            bencher: self,
        }
    }

    pub fn time<R>(&self, f: impl FnOnce() -> R) -> R {
        let _timer = self.start_timing();
        f()
    }

    /// Take the recorded time, leaving the bencher ready for another region.
    pub fn take_elapsed(&self) -> Option<Duration> {
        self.elapsed.take()
    }
}

/// Time a single invocation of `sort` on `data`. No warm-up, no repetition.
pub fn time_once(sort: SortFn, data: &mut [i32]) -> BenchmarkResult {
    let bencher = Bencher::new();
    bencher.time(|| sort(black_box(&mut *data)));
    BenchmarkResult::new(bencher.take_elapsed().unwrap_or_default(), None)
}

/// Time a single invocation of an instrumented sort. Time and counters come from the
/// same invocation.
pub fn time_once_with_stats(sort: StatsSortFn, data: &mut [i32]) -> BenchmarkResult {
    let bencher = Bencher::new();
    let stats = bencher.time(|| sort(black_box(&mut *data)));
    BenchmarkResult::new(bencher.take_elapsed().unwrap_or_default(), Some(stats))
}
