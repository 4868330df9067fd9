//! The sorting algorithms under test.
//!
//! Every algorithm sorts a `&mut [i32]` ascending, in place. Algorithms that need
//! scratch memory reserve it fallibly and give up (leaving the slice valid but
//! possibly unsorted) when the reservation fails.

mod basic;
mod efficient;
mod special;

pub use basic::{bubble_sort, bubble_sort_stats, insertion_sort, selection_sort};
pub use efficient::{heap_sort, merge_sort, quick_sort};
pub use special::{bucket_sort, counting_sort, radix_sort, shell_sort};

/// Operation counters collected by an instrumented sort during one invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
}

/// Plain sort entry point.
pub type SortFn = fn(&mut [i32]);

/// Instrumented sort entry point.
pub type StatsSortFn = fn(&mut [i32]) -> SortStats;

/// A zeroed scratch buffer of `len` elements, or `None` if the allocator refuses.
fn scratch<T: Clone + Default>(len: usize) -> Option<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).ok()?;
    buf.resize(len, T::default());
    Some(buf)
}
