use std::path::PathBuf;

use sortbench::config::{BenchConfig, Profile};


#[test]
fn empty_config_gets_a_default_profile() -> anyhow::Result<()> {
    let config = BenchConfig::from_toml_str("")?;
    assert_eq!(config.profiles.len(), 1);
    assert_eq!(config.profile("default")?, &Profile::default());
    Ok(())
}

#[test]
fn profile_defaults() -> anyhow::Result<()> {
    let config = BenchConfig::from_toml_str("[profiles.default]\n")?;
    let profile = config.profile("default")?;
    assert!(profile.include_large_inputs);
    assert!(profile.plot);
    assert_eq!(profile.results_dir, PathBuf::from("results"));
    assert_eq!(profile.seed, None);
    assert!(profile.algorithms.is_empty());
    Ok(())
}

#[test]
fn full_profile() -> anyhow::Result<()> {
    let config = BenchConfig::from_toml_str(
        r#"
        [profiles.quick]
        include-large-inputs = false
        results-dir = "out"
        seed = 42
        algorithms = ["QuickSort", "MergeSort"]
        plot = false
        "#,
    )?;
    assert!(!config.profiles.contains_key("default"));
    let options = config.profile("quick")?.run_options();
    assert!(!options.include_large_inputs);
    assert_eq!(options.results_dir, PathBuf::from("out"));
    assert_eq!(options.seed, Some(42));
    assert_eq!(options.algorithms, ["QuickSort", "MergeSort"]);
    assert!(!config.profile("quick")?.plot);
    Ok(())
}

#[test]
fn unknown_profile() -> anyhow::Result<()> {
    let config = BenchConfig::from_toml_str("")?;
    let err = config.profile("nightly").unwrap_err();
    assert!(err.to_string().contains("nightly"));
    Ok(())
}

#[test]
fn malformed_config() {
    assert!(BenchConfig::from_toml_str("[profiles.default]\nseed = \"abc\"\n").is_err());
}

#[test]
fn load_explicit_path() -> anyhow::Result<()> {
    let dir = helper::results_dir()?;
    let path = dir.path().join("bench.toml");
    std::fs::write(&path, "[profiles.ci]\nplot = false\n")?;
    let config = BenchConfig::load(Some(&path))?;
    assert!(!config.profile("ci")?.plot);
    assert!(BenchConfig::load(Some(&dir.path().join("missing.toml"))).is_err());
    Ok(())
}

#[test]
fn profile_round_trips_through_toml() -> anyhow::Result<()> {
    let profile = Profile {
        seed: Some(7),
        algorithms: vec!["HeapSort".to_owned()],
        ..Default::default()
    };
    let s = toml::to_string(&profile)?;
    assert!(s.contains("include-large-inputs = true"));
    assert_eq!(toml::from_str::<Profile>(&s)?, profile);
    Ok(())
}
