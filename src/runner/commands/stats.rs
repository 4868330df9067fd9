use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use sortbench::{BenchmarkSuite, RunOptions};

use crate::print_md;

/// Count comparisons and swaps of the instrumented algorithm
#[derive(Parser)]
pub struct StatsArgs {
    /// Directory for the stats table
    #[arg(long, default_value = "results")]
    pub results_dir: PathBuf,
    /// Data generator seed
    #[arg(long)]
    pub seed: Option<u64>,
}

impl StatsArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let mut suite = BenchmarkSuite::new(RunOptions {
            results_dir: self.results_dir.clone(),
            seed: self.seed,
            ..Default::default()
        });
        println!("{}\n", "Running Statistics Benchmark...".blue());
        let summary = suite.run_stats()?;
        println!("\n{}\n", "✔ Benchmarking Finished.".green());
        print_md!("* measured: `{}`", summary.measured);
        print_md!("* failed verification: `{}`", summary.failed);
        print_md!("* skipped (out of memory): `{}`\n", summary.skipped);
        print_md!("Results at:\n");
        print_md!("* `{}`\n", suite.stats_table().path().display());
        Ok(())
    }
}
