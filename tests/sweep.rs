use sortbench::{
    catalogue::{Algorithm, Complexity},
    data::DataPattern,
    record::{ResultTable, TableKind},
    sweep::{Sweeper, QUADRATIC_SIZES, STATS_SIZES},
    DataGenerator,
};


#[test]
fn quadratic_pattern_sweep() -> anyhow::Result<()> {
    for include_extended in [false, true] {
        let dir = helper::results_dir()?;
        let table = ResultTable::new(dir.path(), TableKind::Pattern);
        table.initialize()?;
        let mut generator = DataGenerator::new(helper::SEED);
        let algorithm = helper::fast("FastQuadratic", Complexity::Quadratic);
        let summary =
            Sweeper::new(&mut generator).pattern_sweep(&table, &algorithm, include_extended)?;
        assert_eq!(summary.measured, 4);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.skipped, 0);
        let rows = table.read_rows()?;
        let patterns = rows.iter().map(|r| r.pattern.as_str()).collect::<Vec<_>>();
        assert_eq!(
            patterns,
            ["Random", "Sorted", "ReverseSorted", "NearlySorted"]
        );
        assert!(rows.iter().all(|r| r.size == 100_000));
        assert!(rows.iter().all(|r| r.algorithm == "FastQuadratic"));
        assert!(rows.iter().all(|r| r.time >= 0.0));
    }
    Ok(())
}

#[test]
fn linear_pattern_sweep_without_large_inputs() -> anyhow::Result<()> {
    let dir = helper::results_dir()?;
    let table = ResultTable::new(dir.path(), TableKind::Pattern);
    let mut generator = DataGenerator::new(helper::SEED);
    let algorithm = helper::fast("FastLinear", Complexity::Linear);
    Sweeper::new(&mut generator).pattern_sweep(&table, &algorithm, false)?;
    let rows = table.read_rows()?;
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.size == 1_000_000));
    Ok(())
}

#[test]
fn quadratic_size_sweep_follows_schedule() -> anyhow::Result<()> {
    let dir = helper::results_dir()?;
    let table = ResultTable::new(dir.path(), TableKind::Size);
    table.initialize()?;
    let mut generator = DataGenerator::new(helper::SEED);
    let algorithm = helper::fast("FastQuadratic", Complexity::Quadratic);
    let summary =
        Sweeper::new(&mut generator).size_sweep(&table, &algorithm, DataPattern::Random, true)?;
    assert_eq!(summary.measured, QUADRATIC_SIZES.len());
    let sizes = table.read_rows()?.iter().map(|r| r.size).collect::<Vec<_>>();
    assert_eq!(sizes, QUADRATIC_SIZES);
    Ok(())
}

#[test]
fn failed_verification_is_still_recorded() -> anyhow::Result<()> {
    let dir = helper::results_dir()?;
    let table = ResultTable::new(dir.path(), TableKind::Size);
    table.initialize()?;
    let mut generator = DataGenerator::new(helper::SEED);
    let unsorted = Algorithm::new("Noop", Complexity::Quadratic, helper::noop_sort);
    let lossy = Algorithm::new("Lossy", Complexity::Quadratic, helper::lossy_sort);
    let mut sweeper = Sweeper::new(&mut generator);
    let summary = sweeper.size_sweep(&table, &unsorted, DataPattern::Random, false)?;
    assert_eq!(summary.measured, QUADRATIC_SIZES.len());
    assert_eq!(summary.failed, QUADRATIC_SIZES.len());
    // Already-sorted input passes through a no-op sort
    let summary = sweeper.size_sweep(&table, &unsorted, DataPattern::Sorted, false)?;
    assert_eq!(summary.failed, 0);
    let summary = sweeper.size_sweep(&table, &lossy, DataPattern::Sorted, false)?;
    assert_eq!(summary.failed, QUADRATIC_SIZES.len());
    assert_eq!(table.read_rows()?.len(), 3 * QUADRATIC_SIZES.len());
    Ok(())
}

#[test]
fn unwritable_table_aborts_the_sweep() -> anyhow::Result<()> {
    let dir = helper::results_dir()?;
    let table = ResultTable::new(dir.path().join("missing"), TableKind::Size);
    let mut generator = DataGenerator::new(helper::SEED);
    let algorithm = helper::fast("FastLinear", Complexity::Linear);
    let result =
        Sweeper::new(&mut generator).size_sweep(&table, &algorithm, DataPattern::Random, false);
    assert!(result.is_err());
    Ok(())
}

#[test]
fn stats_sweep_is_pattern_major() -> anyhow::Result<()> {
    let dir = helper::results_dir()?;
    let table = ResultTable::new(dir.path(), TableKind::Stats);
    let mut generator = DataGenerator::new(helper::SEED);
    let algorithm =
        helper::fast("Counted", Complexity::Quadratic).with_stats(helper::counted_sort);
    let summary = Sweeper::new(&mut generator).stats_sweep(&table, &algorithm)?;
    assert_eq!(summary.measured, 4 * STATS_SIZES.len());
    assert_eq!(
        helper::header(dir.path(), TableKind::Stats)?,
        "Algorithm,Pattern,Size,Time,Comparisons,Swaps"
    );
    let rows = table.read_rows()?;
    assert_eq!(rows.len(), 4 * STATS_SIZES.len());
    for (i, pattern) in DataPattern::ALL.iter().enumerate() {
        let chunk = &rows[i * STATS_SIZES.len()..(i + 1) * STATS_SIZES.len()];
        assert!(chunk.iter().all(|r| r.pattern == pattern.name()));
        let sizes = chunk.iter().map(|r| r.size).collect::<Vec<_>>();
        assert_eq!(sizes, STATS_SIZES);
        assert!(chunk
            .iter()
            .all(|r| r.comparisons == Some(r.size as u64) && r.swaps == Some(0)));
    }
    Ok(())
}

#[test]
fn stats_sweep_needs_an_instrumented_sort() -> anyhow::Result<()> {
    let dir = helper::results_dir()?;
    let table = ResultTable::new(dir.path(), TableKind::Stats);
    let mut generator = DataGenerator::new(helper::SEED);
    let algorithm = helper::fast("Plain", Complexity::Quadratic);
    assert!(Sweeper::new(&mut generator)
        .stats_sweep(&table, &algorithm)
        .is_err());
    assert!(!table.path().exists());
    Ok(())
}
