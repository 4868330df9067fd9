use std::{
    fmt::{self, Write as _},
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use clap::Parser;
use colored::Colorize;
use polars::prelude::*;
use sortbench::{
    data::DataPattern,
    record::{self, ResultTable, TableKind},
};

use crate::print_md;

/// Regenerate charts from recorded result tables. Requires gnuplot.
#[derive(Parser)]
pub struct PlotArgs {
    /// Directory holding the result tables
    #[arg(long, default_value = "results")]
    pub results_dir: PathBuf,
}

impl PlotArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        plot_results(&self.results_dir)
    }
}

/// Growth curve drawn next to a size chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trend {
    None,
    Linear,
    Linearithmic,
    Quadratic,
}

impl Trend {
    /// gnuplot definition of `f(x)` passing through `(size, time)`, and its title.
    fn function(&self, size: f64, time: f64) -> Option<(String, &'static str)> {
        if size <= 0.0 || time <= 0.0 {
            return None;
        }
        match self {
            Trend::None => None,
            Trend::Linear => Some((
                format!("f(x) = {:.15e} * x", time / size),
                "O(n) reference",
            )),
            Trend::Linearithmic => {
                let log_term = size.ln();
                if log_term <= 0.0 {
                    return None;
                }
                Some((
                    format!("f(x) = {:.15e} * x * log(x)", time / (size * log_term)),
                    "O(n log n) reference",
                ))
            }
            Trend::Quadratic => Some((
                format!("f(x) = {:.15e} * x * x", time / (size * size)),
                "O(n^2) reference",
            )),
        }
    }
}

/// One size-vs-time chart over a group of algorithms
struct SizeChart {
    output: &'static str,
    title: &'static str,
    algorithms: &'static [&'static str],
    pattern: DataPattern,
    log_scale: bool,
    trend: Trend,
}

const BASIC: &[&str] = &["SelectionSort", "BubbleSort", "InsertionSort"];
const EFFICIENT: &[&str] = &["MergeSort", "QuickSort", "HeapSort"];
const SPECIAL: &[&str] = &["ShellSort", "CountingSort", "RadixSort", "BucketSort"];
const BEST_CASE: &[&str] = &["BubbleSort", "InsertionSort"];

const SIZE_CHARTS: [SizeChart; 7] = [
    SizeChart {
        output: "1_basic_sorts_log.png",
        title: "O(n²) Sorting Algorithms Performance (log scale)",
        algorithms: BASIC,
        pattern: DataPattern::Random,
        log_scale: true,
        trend: Trend::Quadratic,
    },
    SizeChart {
        output: "1_basic_sorts_linear.png",
        title: "O(n²) Sorting Algorithms Performance (linear scale)",
        algorithms: BASIC,
        pattern: DataPattern::Random,
        log_scale: false,
        trend: Trend::Quadratic,
    },
    SizeChart {
        output: "2_efficient_sorts_log.png",
        title: "O(n log n) Sorting Algorithms Performance (log scale)",
        algorithms: EFFICIENT,
        pattern: DataPattern::Random,
        log_scale: true,
        trend: Trend::Linearithmic,
    },
    SizeChart {
        output: "2_efficient_sorts_linear.png",
        title: "O(n log n) Sorting Algorithms Performance (linear scale)",
        algorithms: EFFICIENT,
        pattern: DataPattern::Random,
        log_scale: false,
        trend: Trend::Linearithmic,
    },
    SizeChart {
        output: "3_special_sorts_log.png",
        title: "Special Sorting Algorithms Performance (log scale)",
        algorithms: SPECIAL,
        pattern: DataPattern::Random,
        log_scale: true,
        trend: Trend::None,
    },
    SizeChart {
        output: "3_special_sorts_linear.png",
        title: "Special Sorting Algorithms Performance (linear scale)",
        algorithms: SPECIAL,
        pattern: DataPattern::Random,
        log_scale: false,
        trend: Trend::None,
    },
    SizeChart {
        output: "1_basic_sorts_best_linear.png",
        title: "Near O(n) Best-Case Performance (sorted input)",
        algorithms: BEST_CASE,
        pattern: DataPattern::Sorted,
        log_scale: false,
        trend: Trend::Linear,
    },
];

const PATTERN_CHART: &str = "pattern_comparison.png";

/// Hidden data files handed to gnuplot. Removed on drop.
struct StagedFiles(Vec<PathBuf>);

impl Drop for StagedFiles {
    fn drop(&mut self) {
        for path in &self.0 {
            let _ = fs::remove_file(path);
        }
    }
}

fn gnuplot_exists() -> bool {
    let status = Command::new("gnuplot")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    if let Ok(status) = status {
        status.success()
    } else {
        false
    }
}

/// Pipe `script` into gnuplot and wait for it to exit.
fn gnuplot(script: &str) -> anyhow::Result<()> {
    let mut child = Command::new("gnuplot")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()?;
    let Some(mut stdin) = child.stdin.take() else {
        anyhow::bail!("Could not open gnuplot's stdin");
    };
    stdin.write_all(script.as_bytes())?;
    drop(stdin);
    let output = child.wait_with_output()?;
    if !output.status.success() {
        anyhow::bail!(
            "gnuplot failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}

impl SizeChart {
    /// (size, time) points of one algorithm on this chart's pattern
    fn series(&self, df: &DataFrame, algorithm: &str) -> anyhow::Result<Vec<(u64, f64)>> {
        let points = df
            .clone()
            .lazy()
            .filter(
                col("Algorithm")
                    .eq(lit(algorithm))
                    .and(col("Pattern").eq(lit(self.pattern.name()))),
            )
            .select([col("Size"), col("Time")])
            .collect()?;
        let sizes = points.column("Size")?.u64()?;
        let times = points.column("Time")?.f64()?;
        Ok(sizes
            .into_iter()
            .zip(times)
            .filter_map(|(size, time)| Some((size?, time?)))
            .collect())
    }

    fn script(
        &self,
        output: &Path,
        staged: &[(&str, PathBuf)],
        reference: Option<(f64, f64)>,
    ) -> Result<String, fmt::Error> {
        let mut s = String::new();
        writeln!(s, "set terminal png size 1600,1000 font 'Arial,12'")?;
        writeln!(s, "set output '{}'", output.display())?;
        writeln!(s, "set title '{}' font 'Arial,16'", self.title)?;
        if self.log_scale {
            writeln!(s, "set xlabel 'Input Size (log scale)' font 'Arial,14'")?;
            writeln!(
                s,
                "set ylabel 'Execution Time (seconds, log scale)' font 'Arial,14'"
            )?;
            writeln!(s, "set logscale xy")?;
        } else {
            writeln!(s, "set xlabel 'Input Size' font 'Arial,14'")?;
            writeln!(s, "set ylabel 'Execution Time (seconds)' font 'Arial,14'")?;
            writeln!(s, "unset logscale")?;
        }
        writeln!(s, "set grid")?;
        writeln!(s, "set key outside right top")?;
        writeln!(s, "set datafile separator ','")?;
        let trend = reference.and_then(|(size, time)| self.trend.function(size, time));
        if let Some((f, _)) = &trend {
            writeln!(s, "{}", f)?;
        }
        let mut plots = staged
            .iter()
            .map(|(name, path)| {
                format!(
                    "'{}' using 1:2 with linespoints title '{}'",
                    path.display(),
                    name
                )
            })
            .collect::<Vec<_>>();
        if let Some((_, title)) = trend {
            plots.push(format!("f(x) with lines title '{}' lw 2 dt 3", title));
        }
        writeln!(s, "plot {}", plots.join(", \\\n     "))?;
        Ok(s)
    }

    fn plot(&self, results_dir: &Path, df: &DataFrame) -> anyhow::Result<()> {
        let mut staged = StagedFiles(vec![]);
        let mut series = vec![];
        let mut reference = None;
        for (i, algorithm) in self.algorithms.iter().enumerate() {
            let points = self.series(df, algorithm)?;
            if points.is_empty() {
                log::debug!("{}: no {} data for {}", self.output, self.pattern, algorithm);
                continue;
            }
            if i == 0 {
                reference = points
                    .iter()
                    .min_by_key(|(size, _)| *size)
                    .map(|&(size, time)| (size as f64, time));
            }
            let path = results_dir.join(format!(".temp_{}_size.dat", algorithm));
            staged.0.push(path.clone());
            let mut data = String::new();
            for (size, time) in points {
                writeln!(data, "{},{}", size, time)?;
            }
            fs::write(&path, data)?;
            series.push((*algorithm, path));
        }
        if series.is_empty() {
            log::warn!("{}: nothing to plot", self.output);
            return Ok(());
        }
        let output = results_dir.join(self.output);
        gnuplot(&self.script(&output, &series, reference)?)?;
        log::info!("Created {}", output.display());
        Ok(())
    }
}

/// One line per algorithm: its name, then its time on each pattern in
/// `DataPattern::ALL` order. Missing times are left empty.
fn histogram_data(df: &DataFrame) -> anyhow::Result<String> {
    let pivot = record::pivot_by_pattern(df)?;
    let names = pivot.column("Algorithm")?.str()?;
    let times = DataPattern::ALL
        .iter()
        .map(|p| pivot.column(p.name())?.f64().cloned())
        .collect::<PolarsResult<Vec<_>>>()?;
    let mut data = String::new();
    for i in 0..pivot.height() {
        let Some(name) = names.get(i) else {
            continue;
        };
        data += name;
        for t in &times {
            match t.get(i) {
                Some(t) => write!(data, ",{:.6}", t)?,
                None => data += ",",
            }
        }
        data += "\n";
    }
    Ok(data)
}

fn histogram_script(output: &Path, data: &Path) -> Result<String, fmt::Error> {
    let mut s = String::new();
    writeln!(s, "set terminal png size 1800,1200 font 'Arial,11'")?;
    writeln!(s, "set output '{}'", output.display())?;
    writeln!(
        s,
        "set title 'Algorithm Performance by Data Pattern' font 'Arial,16'"
    )?;
    writeln!(s, "set xlabel 'Algorithm' font 'Arial,13'")?;
    writeln!(s, "set ylabel 'Execution Time (seconds)' font 'Arial,13'")?;
    writeln!(s, "set style data histogram")?;
    writeln!(s, "set style histogram clustered gap 1")?;
    writeln!(s, "set style fill solid border -1")?;
    writeln!(s, "set boxwidth 0.9")?;
    writeln!(s, "set xtics rotate by -45 font 'Arial,10'")?;
    writeln!(s, "set grid ytics")?;
    writeln!(s, "set key outside right top")?;
    writeln!(s, "set datafile separator ','")?;
    writeln!(
        s,
        "plot '{}' using 2:xtic(1) title 'Random', \\\n     '' using 3:xtic(1) title 'Sorted', \\\n     '' using 4:xtic(1) title 'Reverse Sorted', \\\n     '' using 5:xtic(1) title 'Nearly Sorted'",
        data.display()
    )?;
    Ok(s)
}

fn plot_patterns(results_dir: &Path, df: &DataFrame) -> anyhow::Result<()> {
    let data = histogram_data(df)?;
    if data.is_empty() {
        log::warn!("{}: nothing to plot", PATTERN_CHART);
        return Ok(());
    }
    let path = results_dir.join(".temp_pattern_histogram.dat");
    let _staged = StagedFiles(vec![path.clone()]);
    fs::write(&path, data)?;
    let output = results_dir.join(PATTERN_CHART);
    gnuplot(&histogram_script(&output, &path)?)?;
    log::info!("Created {}", output.display());
    Ok(())
}

/// Render every chart from the tables in `results_dir`.
pub fn plot_results(results_dir: &Path) -> anyhow::Result<()> {
    if !gnuplot_exists() {
        anyhow::bail!("gnuplot is not installed. Please install it to generate charts");
    }
    println!("\n{}\n", "Generating visualization graphs...".blue());
    let size_df = ResultTable::new(results_dir, TableKind::Size).load()?;
    for chart in &SIZE_CHARTS {
        chart.plot(results_dir, &size_df)?;
    }
    let pattern_df = ResultTable::new(results_dir, TableKind::Pattern).load()?;
    plot_patterns(results_dir, &pattern_df)?;
    println!("\n{}\n", "✔ Graph generation completed.".green());
    print_md!("Charts at `{}`:\n", results_dir.display());
    for chart in &SIZE_CHARTS {
        print_md!("* `{}`", chart.output);
    }
    print_md!("* `{}`\n", PATTERN_CHART);
    Ok(())
}

#[cfg(test)]
mod tests {
    use sortbench::{Family, CATALOGUE};

    use super::*;

    fn table(rows: &[(&str, &str, u64, f64)]) -> DataFrame {
        df!(
            "Algorithm" => rows.iter().map(|r| r.0).collect::<Vec<_>>(),
            "Pattern" => rows.iter().map(|r| r.1).collect::<Vec<_>>(),
            "Size" => rows.iter().map(|r| r.2).collect::<Vec<_>>(),
            "Time" => rows.iter().map(|r| r.3).collect::<Vec<_>>(),
        )
        .unwrap()
    }

    #[test]
    fn trend_passes_through_reference_point() {
        let (f, title) = Trend::Quadratic.function(100.0, 0.01).unwrap();
        assert_eq!(title, "O(n^2) reference");
        let factor: f64 = f
            .trim_start_matches("f(x) = ")
            .trim_end_matches(" * x * x")
            .parse()
            .unwrap();
        assert!((factor * 100.0 * 100.0 - 0.01).abs() < 1e-12);
        assert!(Trend::Linear.function(0.0, 1.0).is_none());
        assert!(Trend::Linearithmic.function(1.0, 1.0).is_none());
        assert!(Trend::None.function(100.0, 1.0).is_none());
    }

    #[test]
    fn chart_groups_follow_catalogue_families() {
        for (group, family) in [
            (BASIC, Family::Basic),
            (EFFICIENT, Family::Efficient),
            (SPECIAL, Family::Special),
        ] {
            let names = CATALOGUE
                .iter()
                .filter(|a| a.family == family)
                .map(|a| a.name)
                .collect::<Vec<_>>();
            assert_eq!(group, names.as_slice());
        }
    }

    #[test]
    fn size_chart_filters_by_pattern() -> anyhow::Result<()> {
        let df = table(&[
            ("BubbleSort", "Random", 100, 0.5),
            ("BubbleSort", "Sorted", 100, 0.1),
            ("InsertionSort", "Sorted", 1000, 0.2),
        ]);
        let chart = &SIZE_CHARTS[6];
        assert_eq!(chart.series(&df, "BubbleSort")?, [(100, 0.1)]);
        assert_eq!(chart.series(&df, "InsertionSort")?, [(1000, 0.2)]);
        assert!(chart.series(&df, "SelectionSort")?.is_empty());
        Ok(())
    }

    #[test]
    fn script_omits_missing_trend() -> anyhow::Result<()> {
        let chart = &SIZE_CHARTS[4];
        let staged = [("ShellSort", PathBuf::from("r/.temp_ShellSort_size.dat"))];
        let s = chart.script(Path::new("r/out.png"), &staged, Some((100.0, 0.1)))?;
        assert!(s.contains("set logscale xy"));
        assert!(!s.contains("f(x)"));
        let chart = &SIZE_CHARTS[0];
        let s = chart.script(Path::new("r/out.png"), &staged, Some((100.0, 0.1)))?;
        assert!(s.contains("f(x) with lines title 'O(n^2) reference'"));
        Ok(())
    }

    #[test]
    fn histogram_keeps_first_seen_order() -> anyhow::Result<()> {
        let df = table(&[
            ("QuickSort", "Sorted", 10, 2.0),
            ("MergeSort", "Random", 10, 1.0),
            ("QuickSort", "Random", 10, 3.0),
        ]);
        assert_eq!(
            histogram_data(&df)?,
            "QuickSort,3.000000,2.000000,,\nMergeSort,1.000000,,,\n"
        );
        Ok(())
    }
}
