//! Benchmark profiles.
//!
//! Profiles live in an optional `sortbench.toml` in the working directory. If the
//! file is missing, a config with a single `default` profile is used.
//!
//! ```toml
//! [profiles.default]
//! include-large-inputs = true # Optional. Default to true
//! results-dir = "results"     # Optional. Default to "results"
//! seed = 42                   # Optional. Default to a wall-clock seed
//! algorithms = ["QuickSort"]  # Optional. Default to the whole catalogue
//! plot = true                 # Optional. Default to true
//!
//! [profiles.quick]
//! include-large-inputs = false
//! plot = false
//! ```
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::suite::RunOptions;

pub const CONFIG_FILE: &str = "sortbench.toml";

/// Named benchmark profiles.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BenchConfig {
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl BenchConfig {
    /// Load `path`, or `./sortbench.toml` when no path is given.
    ///
    /// An explicit path must exist. The implicit file may be absent.
    pub fn load(path: Option<&Path>) -> anyhow::Result<BenchConfig> {
        let path = match path {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                path.to_owned()
            }
            None => {
                let path = PathBuf::from(CONFIG_FILE);
                if !path.is_file() {
                    log::debug!("No {} found, using the default profile", CONFIG_FILE);
                    return Ok(Self::from_profiles(HashMap::new()));
                }
                path
            }
        };
        let s = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&s).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> anyhow::Result<BenchConfig> {
        let config = toml::from_str::<BenchConfig>(s)?;
        Ok(Self::from_profiles(config.profiles))
    }

    fn from_profiles(mut profiles: HashMap<String, Profile>) -> Self {
        if profiles.is_empty() {
            profiles.insert("default".to_owned(), Default::default());
        }
        Self { profiles }
    }

    pub fn profile(&self, name: &str) -> anyhow::Result<&Profile> {
        let Some(profile) = self.profiles.get(name) else {
            let mut names = self.profiles.keys().cloned().collect::<Vec<_>>();
            names.sort();
            anyhow::bail!(
                "Profile `{}` not found. Available profiles: {}",
                name,
                names.join(", ")
            );
        };
        Ok(profile)
    }
}

fn default_true() -> bool {
    true
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

/// A benchmark profile.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Append the extended size tier for non-quadratic algorithms. Default is true
    #[serde(default = "default_true", rename = "include-large-inputs")]
    pub include_large_inputs: bool,
    /// Where result tables go. Default is `results`
    #[serde(default = "default_results_dir", rename = "results-dir")]
    pub results_dir: PathBuf,
    /// Fixed data generator seed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Algorithms to run. Empty means the whole catalogue
    #[serde(default)]
    pub algorithms: Vec<String>,
    /// Plot the results after a run. Default is true
    #[serde(default = "default_true")]
    pub plot: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            include_large_inputs: true,
            results_dir: default_results_dir(),
            seed: None,
            algorithms: vec![],
            plot: true,
        }
    }
}

impl Profile {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            include_large_inputs: self.include_large_inputs,
            results_dir: self.results_dir.clone(),
            seed: self.seed,
            algorithms: self.algorithms.clone(),
        }
    }
}
