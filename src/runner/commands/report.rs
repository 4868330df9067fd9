use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::Parser;
use polars::prelude::*;
use sortbench::record::{self, ResultTable, TableKind};

use crate::{meta::RunInfo, utils::md::MarkdownPrinter};

/// Print the recorded result tables
#[derive(Parser)]
pub struct ReportArgs {
    /// Directory holding the result tables
    #[arg(long, default_value = "results")]
    pub results_dir: PathBuf,
}

fn format_timestamp(t: i64) -> String {
    match DateTime::<Utc>::from_timestamp(t, 0) {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "N/A".to_owned(),
    }
}

impl ReportArgs {
    fn add_run_info(&self, printer: &mut MarkdownPrinter, run: &RunInfo) {
        printer.add(format!("* Run ID: `{}`\n", run.runid));
        printer.add(format!(
            "* Start Time (UTC): `{}`\n",
            format_timestamp(run.start_timestamp_utc)
        ));
        match run.finish_timestamp_utc {
            Some(t) => printer.add(format!("* Finish Time (UTC): `{}`\n", format_timestamp(t))),
            None => printer.add("* Finish Time (UTC): `N/A`\n"),
        }
        printer.add(format!("* Seed: `{}`\n", run.seed));
        printer.add(format!("* OS: `{}`\n", run.platform.os));
        printer.add(format!("* CPU: `{}`\n", run.platform.cpu_model));
        printer.add(format!("* Memory: `{} GB`\n", run.platform.memory_size >> 30));
        printer.add(format!("* Rustc: `{}`\n", run.platform.rustc));
    }

    fn load_table(&self, dir: &Path, kind: TableKind) -> anyhow::Result<Option<DataFrame>> {
        let table = ResultTable::new(dir, kind);
        if !table.path().exists() {
            return Ok(None);
        }
        Ok(Some(table.load()?))
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let dir = &self.results_dir;
        let size_df = self.load_table(dir, TableKind::Size)?;
        let pattern_df = self.load_table(dir, TableKind::Pattern)?;
        let stats_df = self.load_table(dir, TableKind::Stats)?;
        if size_df.is_none() && pattern_df.is_none() && stats_df.is_none() {
            anyhow::bail!("Benchmark results not found in {}", dir.display());
        }
        let mut printer = MarkdownPrinter::new();
        printer.add("# Sorting Benchmark Results\n\n");
        match RunInfo::load(dir) {
            Ok(run) => self.add_run_info(&mut printer, &run),
            Err(e) => log::debug!("No run info: {:#}", e),
        }
        if let Some(df) = size_df {
            printer.add("\n## Time By Input Size\n\n");
            printer.add_dataframe(&df.lazy().rename(["Time"], ["Time (s)"]).collect()?);
        }
        if let Some(df) = pattern_df {
            printer.add("\n## Time By Input Pattern\n\n");
            printer.add_dataframe(&record::pivot_by_pattern(&df)?);
        }
        if let Some(df) = stats_df {
            printer.add("\n## Operation Counts\n\n");
            printer.add_dataframe(&df.lazy().rename(["Time"], ["Time (s)"]).collect()?);
        }
        printer.dump();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_are_shown_in_utc() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
        assert_eq!(format_timestamp(1_700_000_000), "2023-11-14 22:13:20");
        assert_eq!(format_timestamp(i64::MAX), "N/A");
    }
}
