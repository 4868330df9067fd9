//! The fixed set of algorithms a full run benchmarks.

use std::fmt;

use crate::sorts::{self, SortFn, StatsSortFn};

/// Theoretical growth class of an algorithm. Drives which size schedule and
/// which pattern-sweep size it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complexity {
    /// O(n^2)
    Quadratic,
    /// O(n log n)
    Linearithmic,
    /// O(n) / O(n + k)
    Linear,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Complexity::Quadratic => "O(n^2)",
            Complexity::Linearithmic => "O(n log n)",
            Complexity::Linear => "O(n)",
        })
    }
}

/// Display group an entry is reported and charted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Basic,
    Efficient,
    Special,
}

impl Family {
    const fn of(complexity: Complexity) -> Self {
        match complexity {
            Complexity::Quadratic => Family::Basic,
            Complexity::Linearithmic => Family::Efficient,
            Complexity::Linear => Family::Special,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Family::Basic => "O(n^2)",
            Family::Efficient => "O(n log n)",
            Family::Special => "Special",
        })
    }
}

/// One catalogue entry.
#[derive(Clone, Copy)]
pub struct Algorithm {
    /// Name written to result tables. Must not contain a comma.
    pub name: &'static str,
    pub complexity: Complexity,
    /// Defaults to the family of `complexity`
    pub family: Family,
    pub sort: SortFn,
    /// Instrumented variant reporting comparisons and swaps
    pub stats_sort: Option<StatsSortFn>,
    /// Also sweep sizes on already-sorted input, for algorithms with an early exit
    pub best_case_sweep: bool,
}

impl Algorithm {
    pub const fn new(name: &'static str, complexity: Complexity, sort: SortFn) -> Self {
        Self {
            name,
            complexity,
            family: Family::of(complexity),
            sort,
            stats_sort: None,
            best_case_sweep: false,
        }
    }

    pub const fn with_stats(mut self, stats_sort: StatsSortFn) -> Self {
        self.stats_sort = Some(stats_sort);
        self
    }

    pub const fn with_best_case_sweep(mut self) -> Self {
        self.best_case_sweep = true;
        self
    }

    pub const fn in_family(mut self, family: Family) -> Self {
        self.family = family;
        self
    }
}

impl fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm")
            .field("name", &self.name)
            .field("complexity", &self.complexity)
            .field("family", &self.family)
            .field("instrumented", &self.stats_sort.is_some())
            .field("best_case_sweep", &self.best_case_sweep)
            .finish()
    }
}

/// All benchmarked algorithms, grouped by family in run order.
pub static CATALOGUE: [Algorithm; 10] = [
    Algorithm::new("SelectionSort", Complexity::Quadratic, sorts::selection_sort),
    Algorithm::new("BubbleSort", Complexity::Quadratic, sorts::bubble_sort)
        .with_stats(sorts::bubble_sort_stats)
        .with_best_case_sweep(),
    Algorithm::new("InsertionSort", Complexity::Quadratic, sorts::insertion_sort)
        .with_best_case_sweep(),
    Algorithm::new("MergeSort", Complexity::Linearithmic, sorts::merge_sort),
    Algorithm::new("QuickSort", Complexity::Linearithmic, sorts::quick_sort),
    Algorithm::new("HeapSort", Complexity::Linearithmic, sorts::heap_sort),
    Algorithm::new("ShellSort", Complexity::Linearithmic, sorts::shell_sort)
        .in_family(Family::Special),
    Algorithm::new("CountingSort", Complexity::Linear, sorts::counting_sort),
    Algorithm::new("RadixSort", Complexity::Linear, sorts::radix_sort),
    Algorithm::new("BucketSort", Complexity::Linear, sorts::bucket_sort),
];

/// Case-insensitive lookup by name.
pub fn find<'c>(catalogue: &'c [Algorithm], name: &str) -> Option<&'c Algorithm> {
    catalogue
        .iter()
        .find(|a| a.name.eq_ignore_ascii_case(name.trim()))
}

/// The first entry with an instrumented variant.
pub fn instrumented(catalogue: &[Algorithm]) -> Option<&Algorithm> {
    catalogue.iter().find(|a| a.stats_sort.is_some())
}
