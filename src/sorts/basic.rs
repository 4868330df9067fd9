use super::SortStats;

pub fn selection_sort(v: &mut [i32]) {
    let n = v.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if v[j] < v[min] {
                min = j;
            }
        }
        if min != i {
            v.swap(i, min);
        }
    }
}

/// Bubble sort with early exit after a pass without exchanges.
pub fn bubble_sort(v: &mut [i32]) {
    let n = v.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Same as [`bubble_sort`], counting one comparison per adjacent-pair test and one
/// swap per exchange.
pub fn bubble_sort_stats(v: &mut [i32]) -> SortStats {
    let mut stats = SortStats::default();
    let n = v.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            stats.comparisons += 1;
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    stats
}

pub fn insertion_sort(v: &mut [i32]) {
    for i in 1..v.len() {
        let key = v[i];
        let mut j = i;
        while j > 0 && v[j - 1] > key {
            v[j] = v[j - 1];
            j -= 1;
        }
        v[j] = key;
    }
}
