use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use clap::Parser;
use colored::Colorize;
use sortbench::{
    config::{BenchConfig, Profile},
    sweep, BenchmarkSuite, RunSummary,
};

use crate::{meta::RunInfo, print_md};

use super::plot;

/// Run the full benchmark: size and pattern sweeps over every algorithm
#[derive(Parser)]
pub struct RunArgs {
    /// Benchmarking profile
    #[arg(long, default_value = "default")]
    pub profile: String,
    /// Path to the config file. Default to `./sortbench.toml` if it exists
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Limit efficient algorithms to the baseline sizes
    #[arg(long, conflicts_with = "include_large_sizes")]
    pub no_large_sizes: bool,
    /// Append the extended sizes for efficient algorithms
    #[arg(long)]
    pub include_large_sizes: bool,
    /// Directory for result tables and charts
    #[arg(long)]
    pub results_dir: Option<PathBuf>,
    /// Data generator seed
    #[arg(long)]
    pub seed: Option<u64>,
    /// Comma-separated list of algorithms to run
    #[arg(long, value_delimiter = ',')]
    pub algorithms: Option<Vec<String>>,
    /// Do not plot the results
    #[arg(long)]
    pub no_plot: bool,
}

impl RunArgs {
    fn generate_runid(&self) -> (String, DateTime<Local>) {
        let t = Local::now();
        let time = t.format("%Y-%m-%d-%a-%H%M%S").to_string();
        (format!("{}-{}", self.profile, time), t)
    }

    /// Command line flags take precedence over the profile
    fn apply_overrides(&self, mut profile: Profile) -> Profile {
        if self.no_large_sizes {
            profile.include_large_inputs = false;
        }
        if self.include_large_sizes {
            profile.include_large_inputs = true;
        }
        if let Some(dir) = &self.results_dir {
            profile.results_dir = dir.clone();
        }
        if let Some(seed) = self.seed {
            profile.seed = Some(seed);
        }
        if let Some(algorithms) = &self.algorithms {
            profile.algorithms = algorithms.clone();
        }
        if self.no_plot {
            profile.plot = false;
        }
        profile
    }

    fn update_metadata_on_finish(
        &self,
        results_dir: &Path,
        mut meta: RunInfo,
    ) -> anyhow::Result<()> {
        assert!(meta.finish_timestamp_utc.is_none());
        meta.finish_timestamp_utc = Some(Local::now().timestamp());
        meta.dump(results_dir)
    }

    fn print_before_run(&self, run: &RunInfo, algorithms: usize) {
        let profile = &run.profile;
        print_md!("# {}\n\n", run.runid);
        print_md!("* results: `{}`", profile.results_dir.display());
        print_md!("* algorithms: `{}`", algorithms);
        print_md!("* seed: `{}`", run.seed);
        if profile.include_large_inputs {
            print_md!(
                "* sizes: up to `{}` elements",
                sweep::EXTENDED_SIZES[sweep::EXTENDED_SIZES.len() - 1]
            );
        } else {
            print_md!(
                "* sizes: up to `{}` elements",
                sweep::DEFAULT_SIZES[sweep::DEFAULT_SIZES.len() - 1]
            );
        }
        print_md!("* host: `{}`", run.platform.host);
        print_md!("* cpu: `{}`", run.platform.cpu_model);
        println!();
        println!("{}\n", "Running Benchmarks...".blue());
    }

    fn print_after_run(&self, suite: &BenchmarkSuite, summary: &RunSummary) {
        println!("\n{}\n", "✔ Benchmarking Finished.".green());
        print_md!("* measured: `{}`", summary.totals.measured);
        print_md!("* failed verification: `{}`", summary.totals.failed);
        print_md!("* skipped (out of memory): `{}`\n", summary.totals.skipped);
        if !summary.failing_algorithms.is_empty() {
            println!(
                "{} {}",
                "✘ Incorrect output:".red().bold(),
                summary.failing_algorithms.join(", ").red()
            );
        }
        for (algorithm, reason) in &summary.aborted_sweeps {
            println!(
                "{} {}: {}",
                "✘ Sweep aborted:".red().bold(),
                algorithm,
                reason.red()
            );
        }
        print_md!("Raw benchmark results at:\n");
        print_md!("* `{}`", suite.size_table().path().display());
        print_md!("* `{}`\n\n", suite.pattern_table().path().display());
        print_md!("Please run `sortbench report` to view results.\n");
    }

    pub fn run(&self) -> anyhow::Result<()> {
        // Load benchmark profile
        let config = BenchConfig::load(self.config.as_deref())?;
        let profile = self.apply_overrides(config.profile(&self.profile)?.clone());
        let mut suite = BenchmarkSuite::new(profile.run_options());
        // Reject unknown algorithm names before anything is written
        let algorithms = suite.selected()?.len();
        // Dump metadata
        let (runid, start_time) = self.generate_runid();
        let run_info = RunInfo::new(&self.profile, &profile, suite.seed(), runid, start_time);
        self.print_before_run(&run_info, algorithms);
        run_info.dump(&profile.results_dir)?;
        // Run benchmarks
        let summary = suite.run_all()?;
        self.update_metadata_on_finish(&profile.results_dir, run_info)?;
        self.print_after_run(&suite, &summary);
        if profile.plot {
            if let Err(e) = plot::plot_results(&profile.results_dir) {
                log::warn!("Skipped plotting: {:#}", e);
            }
        }
        Ok(())
    }
}
