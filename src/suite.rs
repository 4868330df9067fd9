//! Full benchmark runs over the catalogue.

use std::path::PathBuf;

use crate::{
    catalogue::{self, Algorithm, CATALOGUE},
    data::{DataGenerator, DataPattern},
    record::{ResultTable, TableKind},
    sweep::{self, SweepSummary, Sweeper},
};

/// What a run measures and where results go.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Append the extended size tier for non-quadratic algorithms
    pub include_large_inputs: bool,
    pub results_dir: PathBuf,
    /// Fixed generator seed. A wall-clock seed is used when unset.
    pub seed: Option<u64>,
    /// Restrict the run to these algorithms. Empty means all.
    pub algorithms: Vec<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            include_large_inputs: true,
            results_dir: PathBuf::from("results"),
            seed: None,
            algorithms: vec![],
        }
    }
}

/// Totals for a full run.
#[derive(Debug, Default, Clone)]
pub struct RunSummary {
    pub totals: SweepSummary,
    /// `(algorithm, reason)` for every sweep that could not write its table
    pub aborted_sweeps: Vec<(String, String)>,
    /// Algorithms with at least one failed verification
    pub failing_algorithms: Vec<String>,
}

pub struct BenchmarkSuite<'a> {
    catalogue: &'a [Algorithm],
    options: RunOptions,
    generator: DataGenerator,
}

impl BenchmarkSuite<'static> {
    pub fn new(options: RunOptions) -> Self {
        Self::with_catalogue(&CATALOGUE, options)
    }
}

impl<'a> BenchmarkSuite<'a> {
    pub fn with_catalogue(catalogue: &'a [Algorithm], options: RunOptions) -> Self {
        let generator = match options.seed {
            Some(seed) => DataGenerator::new(seed),
            None => DataGenerator::from_clock(),
        };
        log::debug!("Data generator seed: {}", generator.seed());
        Self {
            catalogue,
            options,
            generator,
        }
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    pub fn size_table(&self) -> ResultTable {
        ResultTable::new(&self.options.results_dir, TableKind::Size)
    }

    pub fn pattern_table(&self) -> ResultTable {
        ResultTable::new(&self.options.results_dir, TableKind::Pattern)
    }

    pub fn stats_table(&self) -> ResultTable {
        ResultTable::new(&self.options.results_dir, TableKind::Stats)
    }

    /// The catalogue entries selected by the algorithm filter, in catalogue order.
    pub fn selected(&self) -> anyhow::Result<Vec<&'a Algorithm>> {
        if self.options.algorithms.is_empty() {
            return Ok(self.catalogue.iter().collect());
        }
        let mut selected = vec![];
        for name in &self.options.algorithms {
            let Some(algorithm) = catalogue::find(self.catalogue, name) else {
                anyhow::bail!("Unknown algorithm `{}`", name);
            };
            selected.push(algorithm);
        }
        // Keep catalogue order, drop repeats
        Ok(self
            .catalogue
            .iter()
            .filter(|a| selected.iter().any(|s| std::ptr::eq(*s, *a)))
            .collect())
    }

    /// Initialize both result tables, then size-sweep and pattern-sweep every selected
    /// algorithm in catalogue order.
    ///
    /// Only a failure to initialize the tables is returned as an error. Sweeps that
    /// cannot write are logged and recorded in the summary; the run carries on.
    pub fn run_all(&mut self) -> anyhow::Result<RunSummary> {
        let algorithms = self.selected()?;
        let size_table = self.size_table();
        let pattern_table = self.pattern_table();
        size_table.initialize()?;
        pattern_table.initialize()?;

        let include_large = self.options.include_large_inputs;
        log::info!("Starting comprehensive benchmark");
        log::info!(
            "Baseline sizes: up to {} elements",
            sweep::DEFAULT_SIZES[sweep::DEFAULT_SIZES.len() - 1]
        );
        if include_large {
            log::info!(
                "Extended sizes enabled: up to {} elements",
                sweep::EXTENDED_SIZES[sweep::EXTENDED_SIZES.len() - 1]
            );
        } else {
            log::info!("Extended sizes disabled (efficient algorithms limited to baseline)");
        }

        let mut summary = RunSummary::default();
        let mut group = None;
        let total = algorithms.len();
        for (i, algorithm) in algorithms.into_iter().enumerate() {
            if group != Some(algorithm.family) {
                group = Some(algorithm.family);
                log::info!("=== Testing {} algorithms ===", algorithm.family);
            }
            log::info!("[{}/{}] {}", i + 1, total, algorithm.name);
            let mut algo_summary = SweepSummary::default();
            let mut sweeper = Sweeper::new(&mut self.generator);
            let mut results = vec![sweeper.size_sweep(
                &size_table,
                algorithm,
                DataPattern::Random,
                include_large,
            )];
            if algorithm.best_case_sweep {
                log::info!("{}: best-case (sorted input) sweep", algorithm.name);
                results.push(sweeper.size_sweep(
                    &size_table,
                    algorithm,
                    DataPattern::Sorted,
                    include_large,
                ));
            }
            results.push(sweeper.pattern_sweep(&pattern_table, algorithm, include_large));
            for result in results {
                match result {
                    Ok(s) => algo_summary.merge(s),
                    Err(e) => {
                        log::error!("{}: sweep aborted: {:#}", algorithm.name, e);
                        summary
                            .aborted_sweeps
                            .push((algorithm.name.to_owned(), format!("{:#}", e)));
                    }
                }
            }
            if algo_summary.failed > 0 {
                summary.failing_algorithms.push(algorithm.name.to_owned());
            }
            summary.totals.merge(algo_summary);
        }
        log::info!("=== All benchmarks completed ===");
        Ok(summary)
    }

    /// Measure the catalogue's instrumented algorithm into the stats table.
    pub fn run_stats(&mut self) -> anyhow::Result<SweepSummary> {
        let Some(algorithm) = catalogue::instrumented(self.catalogue) else {
            anyhow::bail!("No instrumented algorithm in the catalogue");
        };
        log::info!("=== {} statistics benchmark ===", algorithm.name);
        let table = self.stats_table();
        let summary = Sweeper::new(&mut self.generator).stats_sweep(&table, algorithm)?;
        log::info!("Results saved to {}", table.path().display());
        Ok(summary)
    }
}
