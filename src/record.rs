//! Result tables: comma-separated files with a header row, appended one row per
//! measurement.

use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
use polars::prelude::*;

use crate::{bencher::BenchmarkResult, data::DataPattern};

pub const SIZE_TABLE: &str = "size_benchmark.csv";
pub const PATTERN_TABLE: &str = "pattern_benchmark.csv";
pub const STATS_TABLE: &str = "stats_benchmark.csv";

const TIMING_HEADER: &str = "Algorithm,Pattern,Size,Time";
const STATS_HEADER: &str = "Algorithm,Pattern,Size,Time,Comparisons,Swaps";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// One row per (algorithm, size)
    Size,
    /// One row per (algorithm, pattern)
    Pattern,
    /// Timing plus operation counters
    Stats,
}

impl TableKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            TableKind::Size => SIZE_TABLE,
            TableKind::Pattern => PATTERN_TABLE,
            TableKind::Stats => STATS_TABLE,
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            TableKind::Size | TableKind::Pattern => TIMING_HEADER,
            TableKind::Stats => STATS_HEADER,
        }
    }

    pub fn columns(&self) -> Vec<&'static str> {
        self.header().split(',').collect()
    }
}

/// One of the result files of a run.
#[derive(Debug, Clone)]
pub struct ResultTable {
    path: PathBuf,
    kind: TableKind,
}

impl ResultTable {
    pub fn new(results_dir: impl AsRef<Path>, kind: TableKind) -> Self {
        Self {
            path: results_dir.as_ref().join(kind.file_name()),
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// Truncate the table and write its header. Creates the results dir if needed.
    pub fn initialize(&self) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Could not create {}", dir.display()))?;
        }
        std::fs::write(&self.path, format!("{}\n", self.kind.header()))
            .with_context(|| format!("Could not initialize {}", self.path.display()))?;
        Ok(())
    }

    /// Open the table for appending. A table that does not exist yet gets its header
    /// first, so the header is always the first line.
    pub fn appender(&self) -> anyhow::Result<TableAppender> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .with_context(|| format!("Could not open {} for writing", self.path.display()))?;
        if file.metadata()?.len() == 0 {
            writeln!(file, "{}", self.kind.header())?;
        }
        Ok(TableAppender {
            file,
            kind: self.kind,
        })
    }

    /// Load the table with typed columns. Rows whose numeric fields do not parse are
    /// dropped.
    pub fn load(&self) -> anyhow::Result<DataFrame> {
        let raw = CsvReader::from_path(self.path.clone())
            .with_context(|| format!("Could not open {}", self.path.display()))?
            .has_header(true)
            .finish()
            .with_context(|| format!("Could not parse {}", self.path.display()))?;
        let columns = raw.get_column_names();
        anyhow::ensure!(
            columns == self.kind.columns(),
            "{}: expected columns {:?}, found {:?}",
            self.path.display(),
            self.kind.columns(),
            columns
        );
        let mut casts = vec![
            col("Size").cast(DataType::UInt64),
            col("Time").cast(DataType::Float64),
        ];
        if self.kind == TableKind::Stats {
            casts.push(col("Comparisons").cast(DataType::UInt64));
            casts.push(col("Swaps").cast(DataType::UInt64));
        }
        let total = raw.height();
        let df = raw.lazy().with_columns(casts).drop_nulls(None).collect()?;
        if df.height() < total {
            log::warn!(
                "{}: skipped {} malformed rows",
                self.path.display(),
                total - df.height()
            );
        }
        Ok(df)
    }

    /// Every data row of the table, in file order.
    pub fn read_rows(&self) -> anyhow::Result<Vec<RecordedRow>> {
        let df = self.load()?;
        let algorithm = df.column("Algorithm")?.str()?;
        let pattern = df.column("Pattern")?.str()?;
        let size = df.column("Size")?.u64()?;
        let time = df.column("Time")?.f64()?;
        let counters = match self.kind {
            TableKind::Stats => Some((
                df.column("Comparisons")?.u64()?,
                df.column("Swaps")?.u64()?,
            )),
            TableKind::Size | TableKind::Pattern => None,
        };
        let mut rows = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let (Some(a), Some(p), Some(n), Some(t)) =
                (algorithm.get(i), pattern.get(i), size.get(i), time.get(i))
            else {
                continue;
            };
            rows.push(RecordedRow {
                algorithm: a.to_owned(),
                pattern: p.to_owned(),
                size: n as usize,
                time: t,
                comparisons: counters.and_then(|(c, _)| c.get(i)),
                swaps: counters.and_then(|(_, s)| s.get(i)),
            });
        }
        Ok(rows)
    }
}

/// Pivot a loaded pattern table to one row per (algorithm, size) with a time column
/// per pattern, in first-seen order. A repeated measurement keeps its last time.
pub fn pivot_by_pattern(df: &DataFrame) -> anyhow::Result<DataFrame> {
    let times = DataPattern::ALL
        .iter()
        .map(|p| {
            col("Time")
                .filter(col("Pattern").eq(lit(p.name())))
                .last()
                .alias(p.name())
        })
        .collect::<Vec<_>>();
    Ok(df
        .clone()
        .lazy()
        .group_by_stable([col("Algorithm"), col("Size")])
        .agg(times)
        .collect()?)
}

/// Append handle for one sweep.
pub struct TableAppender {
    file: File,
    kind: TableKind,
}

impl TableAppender {
    pub fn append(
        &mut self,
        algorithm: &str,
        pattern: DataPattern,
        size: usize,
        result: &BenchmarkResult,
    ) -> anyhow::Result<()> {
        anyhow::ensure!(
            !algorithm.contains(','),
            "Algorithm name `{}` contains the field delimiter",
            algorithm
        );
        match self.kind {
            TableKind::Size | TableKind::Pattern => writeln!(
                self.file,
                "{},{},{},{:.6}",
                algorithm, pattern, size, result.time_sec
            )?,
            TableKind::Stats => {
                let stats = result.stats.unwrap_or_default();
                writeln!(
                    self.file,
                    "{},{},{},{:.9},{},{}",
                    algorithm, pattern, size, result.time_sec, stats.comparisons, stats.swaps
                )?
            }
        }
        Ok(())
    }
}

/// A row read back from a result table.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRow {
    pub algorithm: String,
    pub pattern: String,
    pub size: usize,
    pub time: f64,
    pub comparisons: Option<u64>,
    pub swaps: Option<u64>,
}
