use super::scratch;

/// Top-down merge sort over a single scratch buffer.
pub fn merge_sort(v: &mut [i32]) {
    if v.len() <= 1 {
        return;
    }
    let Some(mut buf) = scratch::<i32>(v.len()) else {
        return;
    };
    merge_sort_rec(v, &mut buf);
}

/// `buf` always has the same length as `v`.
fn merge_sort_rec(v: &mut [i32], buf: &mut [i32]) {
    let n = v.len();
    if n <= 1 {
        return;
    }
    let mid = n / 2;
    merge_sort_rec(&mut v[..mid], &mut buf[..mid]);
    merge_sort_rec(&mut v[mid..], &mut buf[mid..]);
    // Already in order
    if v[mid - 1] <= v[mid] {
        return;
    }
    buf.copy_from_slice(v);
    let (left, right) = buf.split_at(mid);
    let (mut i, mut j) = (0, 0);
    for slot in v.iter_mut() {
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

/// Quicksort with a median-of-three pivot and Hoare partitioning.
///
/// Recurses into the smaller partition and loops on the larger one, so the stack
/// depth stays logarithmic even on adversarial inputs.
pub fn quick_sort(mut v: &mut [i32]) {
    while v.len() > 1 {
        let split = partition(v);
        let (left, right) = std::mem::take(&mut v).split_at_mut(split + 1);
        if left.len() < right.len() {
            quick_sort(left);
            v = right;
        } else {
            quick_sort(right);
            v = left;
        }
    }
}

/// Returns `j` such that `v[..=j] <= pivot <= v[j + 1..]`, with `j < v.len() - 1`.
fn partition(v: &mut [i32]) -> usize {
    let n = v.len();
    let mid = (n - 1) / 2;
    if v[mid] < v[0] {
        v.swap(mid, 0);
    }
    if v[n - 1] < v[0] {
        v.swap(n - 1, 0);
    }
    if v[n - 1] < v[mid] {
        v.swap(n - 1, mid);
    }
    let pivot = v[mid];
    let mut i = 0;
    let mut j = n - 1;
    loop {
        while v[i] < pivot {
            i += 1;
        }
        while v[j] > pivot {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        v.swap(i, j);
        i += 1;
        j -= 1;
    }
}

pub fn heap_sort(v: &mut [i32]) {
    let n = v.len();
    for root in (0..n / 2).rev() {
        sift_down(v, root, n);
    }
    for end in (1..n).rev() {
        v.swap(0, end);
        sift_down(v, 0, end);
    }
}

fn sift_down(v: &mut [i32], mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && v[child] < v[child + 1] {
            child += 1;
        }
        if v[root] >= v[child] {
            return;
        }
        v.swap(root, child);
        root = child;
    }
}
