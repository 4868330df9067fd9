use std::time::Duration;

use sortbench::{bencher, sorts, Bencher};

#[test]
fn timer_records_on_drop() {
    let bencher = Bencher::new();
    {
        let _timer = bencher.start_timing();
        std::thread::sleep(Duration::from_millis(5));
    }
    let elapsed = bencher.take_elapsed().unwrap();
    assert!(elapsed >= Duration::from_millis(5));
    assert!(bencher.take_elapsed().is_none());
}

#[test]
#[should_panic(expected = "More than one benchmark timer detected")]
fn second_timer_panics() {
    let bencher = Bencher::new();
    bencher.time(|| ());
    bencher.time(|| ());
}

#[test]
fn time_once_sorts_in_place() {
    let mut data = vec![3, 1, 2];
    let result = bencher::time_once(sorts::insertion_sort, &mut data);
    assert_eq!(data, [1, 2, 3]);
    assert!(result.stats.is_none());
    assert!(result.time_sec >= 0.0);
    assert_eq!(result.time_sec, result.time_ns as f64 / 1e9);
}

#[test]
fn stats_come_from_the_timed_invocation() {
    let mut data = vec![2, 1];
    let result = bencher::time_once_with_stats(sorts::bubble_sort_stats, &mut data);
    assert_eq!(data, [1, 2]);
    let stats = result.stats.unwrap();
    assert_eq!(stats.comparisons, 1);
    assert_eq!(stats.swaps, 1);
}
