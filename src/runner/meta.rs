//! Run metadata.
//!
//! Each `sortbench run` gets a unique run id. The profile it ran with, the data
//! seed and the platform it ran on are dumped to `<results-dir>/run.toml` before
//! the benchmarks start. The finish time is filled in once they complete.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use sortbench::config::Profile;

use crate::utils;

pub const RUN_INFO_FILE: &str = "run.toml";

/// The benchmark run metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct RunInfo {
    /// Benchmark run id
    pub runid: String,
    /// Benchmark start time
    #[serde(rename = "start-time-utc")]
    pub start_timestamp_utc: i64,
    /// Benchmark finish time
    #[serde(rename = "finish-time-utc", default, skip_serializing_if = "Option::is_none")]
    pub finish_timestamp_utc: Option<i64>,
    /// Seed of the data generator
    pub seed: u64,
    /// Name of the enabled profile
    #[serde(rename = "profile-name")]
    pub profile_name: String,
    /// The enabled profile, after command line overrides
    pub profile: Profile,
    /// Current platform information
    pub platform: PlatformInfo,
}

impl RunInfo {
    pub fn new(
        profile_name: &str,
        profile: &Profile,
        seed: u64,
        runid: String,
        start_time: DateTime<Local>,
    ) -> Self {
        Self {
            runid,
            start_timestamp_utc: start_time.timestamp(),
            finish_timestamp_utc: None,
            seed,
            profile_name: profile_name.to_owned(),
            profile: profile.clone(),
            platform: utils::sys::get_current_platform_info(),
        }
    }

    pub fn path(results_dir: &Path) -> PathBuf {
        results_dir.join(RUN_INFO_FILE)
    }

    pub fn load(results_dir: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(Self::path(results_dir))?;
        Ok(toml::from_str(&content)?)
    }

    pub fn dump(&self, results_dir: &Path) -> anyhow::Result<()> {
        std::fs::create_dir_all(results_dir)?;
        std::fs::write(Self::path(results_dir), toml::to_string(self)?)?;
        Ok(())
    }
}

/// The hardware specs and OS info of the benchmarking machine
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlatformInfo {
    /// Host name
    pub host: String,
    /// Operating system name and version
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// Kernel version
    #[serde(rename = "kernel-version")]
    pub kernel: String,
    /// CPU model
    #[serde(rename = "cpu-model")]
    pub cpu_model: String,
    /// CPU frequency
    #[serde(rename = "cpu-frequency")]
    pub cpu_frequency: Vec<usize>,
    /// Total memory size in bytes
    #[serde(rename = "memory-size")]
    pub memory_size: usize,
    /// Total swap size in bytes
    #[serde(rename = "swap-size")]
    pub swap_size: usize,
    /// The rustc version
    pub rustc: String,
    /// (*Linux only*) Distinct scaling governors across CPU cores
    #[cfg(target_os = "linux")]
    #[serde(rename = "scaling-governor", default)]
    pub scaling_governor: Vec<String>,
}
