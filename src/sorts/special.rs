use super::{efficient::quick_sort, scratch};

/// Shell sort over Knuth's `3h + 1` gap sequence.
pub fn shell_sort(v: &mut [i32]) {
    let n = v.len();
    let mut gap = 1;
    while gap < n / 3 {
        gap = 3 * gap + 1;
    }
    while gap >= 1 {
        for i in gap..n {
            let key = v[i];
            let mut j = i;
            while j >= gap && v[j - gap] > key {
                v[j] = v[j - gap];
                j -= gap;
            }
            v[j] = key;
        }
        gap /= 3;
    }
}

fn min_max(v: &[i32]) -> (i32, i32) {
    v.iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), &x| (lo.min(x), hi.max(x)))
}

/// Counting sort over the `min..=max` value range of the input.
///
/// Gives up when the counter table for that range cannot be allocated.
pub fn counting_sort(v: &mut [i32]) {
    if v.len() <= 1 {
        return;
    }
    let (min, max) = min_max(v);
    let Ok(range) = usize::try_from(i64::from(max) - i64::from(min) + 1) else {
        return;
    };
    let Some(mut counts) = scratch::<usize>(range) else {
        return;
    };
    for &x in v.iter() {
        counts[(i64::from(x) - i64::from(min)) as usize] += 1;
    }
    let mut pos = 0;
    for (offset, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let value = (i64::from(min) + offset as i64) as i32;
        v[pos..pos + count].fill(value);
        pos += count;
    }
}

/// LSD radix sort, one byte per pass. The sign bit is flipped so negative values
/// order before positive ones.
pub fn radix_sort(v: &mut [i32]) {
    if v.len() <= 1 {
        return;
    }
    let Some(mut buf) = scratch::<i32>(v.len()) else {
        return;
    };
    let key = |x: i32| (x as u32) ^ 0x8000_0000;
    for shift in (0..32).step_by(8) {
        let digit = |x: i32| ((key(x) >> shift) & 0xff) as usize;
        let mut offsets = [0usize; 256];
        for &x in v.iter() {
            offsets[digit(x)] += 1;
        }
        // Every element shares this digit
        if offsets.iter().any(|&c| c == v.len()) {
            continue;
        }
        let mut total = 0;
        for slot in offsets.iter_mut() {
            let count = *slot;
            *slot = total;
            total += count;
        }
        for &x in v.iter() {
            let d = digit(x);
            buf[offsets[d]] = x;
            offsets[d] += 1;
        }
        v.copy_from_slice(&buf);
    }
}

const MAX_BUCKETS: usize = 1024;

/// Bucket sort: scatter into up to 1024 equal-width value buckets, sort each bucket,
/// then concatenate.
pub fn bucket_sort(v: &mut [i32]) {
    if v.len() <= 1 {
        return;
    }
    let (min, max) = min_max(v);
    if min == max {
        return;
    }
    let bucket_count = v.len().min(MAX_BUCKETS);
    let mut buckets: Vec<Vec<i32>> = Vec::new();
    if buckets.try_reserve_exact(bucket_count).is_err() {
        return;
    }
    buckets.resize_with(bucket_count, Vec::new);
    let width = (f64::from(max) - f64::from(min) + 1.0) / bucket_count as f64;
    for &x in v.iter() {
        let index = ((f64::from(x) - f64::from(min)) / width) as usize;
        let bucket = &mut buckets[index.min(bucket_count - 1)];
        if bucket.try_reserve(1).is_err() {
            return;
        }
        bucket.push(x);
    }
    let mut pos = 0;
    for bucket in buckets.iter_mut() {
        quick_sort(bucket);
        v[pos..pos + bucket.len()].copy_from_slice(bucket);
        pos += bucket.len();
    }
}
