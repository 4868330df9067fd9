use sortbench::{
    checks,
    data::{DataGenerator, DataPattern},
    sorts, Complexity, Family, CATALOGUE,
};


const SIZES: [usize; 8] = [0, 1, 2, 3, 10, 100, 1_000, 10_000];

#[test]
fn every_algorithm_sorts_every_pattern() -> anyhow::Result<()> {
    let mut generator = DataGenerator::new(helper::SEED);
    for algorithm in &CATALOGUE {
        for pattern in DataPattern::ALL {
            for size in SIZES {
                let original = generator.generate(size, pattern);
                let mut data = original.clone();
                (algorithm.sort)(&mut data);
                if let Err(e) = checks::verify(&data, &original) {
                    anyhow::bail!("{} on {} x {}: {}", algorithm.name, pattern, size, e);
                }
            }
        }
    }
    Ok(())
}

#[test]
fn negatives_and_duplicates() -> anyhow::Result<()> {
    let original = vec![5, -3, 0, -3, 7, 7, 7, -100, 2, 0, 1, -1, 5];
    for algorithm in &CATALOGUE {
        let mut data = original.clone();
        (algorithm.sort)(&mut data);
        assert_eq!(
            checks::verify(&data, &original),
            Ok(()),
            "{}",
            algorithm.name
        );
    }
    Ok(())
}

#[test]
fn extreme_values() {
    // Counting sort's table would cover the whole i32 range
    let original = vec![i32::MAX, 0, i32::MIN, -1, 1, i32::MIN, i32::MAX - 1];
    for algorithm in CATALOGUE.iter().filter(|a| a.name != "CountingSort") {
        let mut data = original.clone();
        (algorithm.sort)(&mut data);
        assert_eq!(
            checks::verify(&data, &original),
            Ok(()),
            "{}",
            algorithm.name
        );
    }
}

#[test]
fn sorting_twice_is_a_noop() {
    let mut generator = DataGenerator::new(helper::SEED);
    let original = generator.generate(2_000, DataPattern::Random);
    for algorithm in &CATALOGUE {
        let mut once = original.clone();
        (algorithm.sort)(&mut once);
        let mut twice = once.clone();
        (algorithm.sort)(&mut twice);
        assert_eq!(once, twice, "{}", algorithm.name);
    }
}

#[test]
fn bubble_stats_on_sorted_input() {
    let mut data = (0..1_000).collect::<Vec<i32>>();
    let stats = sorts::bubble_sort_stats(&mut data);
    assert_eq!(stats.comparisons, 999);
    assert_eq!(stats.swaps, 0);
}

#[test]
fn bubble_stats_on_reversed_input() {
    let n = 500u64;
    let mut data = (0..n as i32).rev().collect::<Vec<_>>();
    let stats = sorts::bubble_sort_stats(&mut data);
    assert!(checks::is_sorted(&data));
    assert_eq!(stats.swaps, n * (n - 1) / 2);
    assert_eq!(stats.comparisons, n * (n - 1) / 2);
}

#[test]
fn bubble_stats_bounds() {
    let mut generator = DataGenerator::new(helper::SEED);
    for pattern in DataPattern::ALL {
        let original = generator.generate(1_000, pattern);
        let mut data = original.clone();
        let stats = sorts::bubble_sort_stats(&mut data);
        let mut plain = original.clone();
        sorts::bubble_sort(&mut plain);
        assert_eq!(data, plain);
        assert!(stats.swaps <= stats.comparisons);
        assert!(stats.comparisons <= 1_000 * 999 / 2);
        assert!(stats.comparisons >= 999);
    }
}

#[test]
fn stats_of_empty_and_single() {
    assert_eq!(sorts::bubble_sort_stats(&mut []), sorts::SortStats::default());
    assert_eq!(sorts::bubble_sort_stats(&mut [42]), sorts::SortStats::default());
}

#[test]
fn catalogue_layout() {
    let names = CATALOGUE.iter().map(|a| a.name).collect::<Vec<_>>();
    assert_eq!(
        names,
        [
            "SelectionSort",
            "BubbleSort",
            "InsertionSort",
            "MergeSort",
            "QuickSort",
            "HeapSort",
            "ShellSort",
            "CountingSort",
            "RadixSort",
            "BucketSort",
        ]
    );
    assert!(CATALOGUE.iter().all(|a| !a.name.contains(',')));
    let best_case = CATALOGUE
        .iter()
        .filter(|a| a.best_case_sweep)
        .map(|a| a.name)
        .collect::<Vec<_>>();
    assert_eq!(best_case, ["BubbleSort", "InsertionSort"]);
    let instrumented = sortbench::catalogue::instrumented(&CATALOGUE).map(|a| a.name);
    assert_eq!(instrumented, Some("BubbleSort"));
}

#[test]
fn shell_sort_is_grouped_with_special_sorts() {
    let family = |family| {
        CATALOGUE
            .iter()
            .filter(|a| a.family == family)
            .map(|a| a.name)
            .collect::<Vec<_>>()
    };
    assert_eq!(
        family(Family::Basic),
        ["SelectionSort", "BubbleSort", "InsertionSort"]
    );
    assert_eq!(
        family(Family::Efficient),
        ["MergeSort", "QuickSort", "HeapSort"]
    );
    assert_eq!(
        family(Family::Special),
        ["ShellSort", "CountingSort", "RadixSort", "BucketSort"]
    );
    let shell = sortbench::catalogue::find(&CATALOGUE, "ShellSort").map(|a| a.complexity);
    assert_eq!(shell, Some(Complexity::Linearithmic));
    assert_eq!(Family::Special.to_string(), "Special");
}

#[test]
fn find_ignores_case() {
    let found = sortbench::catalogue::find(&CATALOGUE, "quicksort").map(|a| a.name);
    assert_eq!(found, Some("QuickSort"));
    let found = sortbench::catalogue::find(&CATALOGUE, " RADIXSORT ").map(|a| a.name);
    assert_eq!(found, Some("RadixSort"));
    assert!(sortbench::catalogue::find(&CATALOGUE, "BogoSort").is_none());
}
