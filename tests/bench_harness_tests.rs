//! End-to-end tests for the comparison harness and its configuration.

use fixmap::bench::{self, generate_unique_keys, run_suite, BenchReport};
use fixmap::config::{BenchConfig, Config, HasherKind};
use tempfile::tempdir;

fn tiny_config() -> BenchConfig {
    BenchConfig {
        dataset_size: 400,
        seed: Some(2024),
        capacity: 389,
        num_buckets: 389,
        low_num_buckets: 7,
        load_steps: vec![50, 200, 388],
        low_bucket_steps: vec![100, 388],
        hasher: HasherKind::Ahash,
        verify_lookups: true,
    }
}

#[test]
fn test_report_from_saved_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("bench.json");
    tiny_config().save_to_file(&config_path).unwrap();

    let config = BenchConfig::load_from_file(&config_path).unwrap();
    let keys = generate_unique_keys(config.dataset_size, config.seed);
    assert_eq!(keys, generate_unique_keys(config.dataset_size, config.seed));

    let report = run_suite(&config, &keys).unwrap();
    let report_path = dir.path().join("report.json");
    report
        .write_json(std::fs::File::create(&report_path).unwrap())
        .unwrap();

    let parsed = BenchReport::from_json(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(parsed.categories.len(), 4);
    assert_eq!(parsed.categories[1].bench_category, bench::LOOKUP_CATEGORY);

    let counts: Vec<usize> = parsed.categories[0]
        .results
        .iter()
        .map(|r| r.data_count)
        .collect();
    assert_eq!(counts, vec![50, 200, 388]);

    let last = parsed.categories[0].results.last().unwrap();
    assert!((last.open_addressing_load_factor - 388.0 * 100.0 / 389.0).abs() < 1e-9);
    assert!(last.open_addressing_longest_probe >= 1);

    let low = &parsed.categories[3].results[1];
    assert!((low.bucket_addressing_load_factor - 388.0 * 100.0 / 7.0).abs() < 1e-9);
    assert!(low.bucket_addressing_longest_chain >= 388 / 7);
}

#[test]
fn test_report_json_field_names() {
    let config = tiny_config();
    let keys = generate_unique_keys(config.dataset_size, config.seed);
    let json = run_suite(&config, &keys).unwrap().to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let first = &value[0]["results"][0];
    for field in [
        "data_count",
        "bucket_addressing_load_factor",
        "open_addressing_load_factor",
        "bucket_addressing_time",
        "open_addressing_time",
    ] {
        assert!(first.get(field).is_some(), "missing {}", field);
    }
}

#[test]
fn test_full_capacity_step_rejected() {
    let mut config = tiny_config();
    config.load_steps.push(390);
    config.dataset_size = 400;
    let keys = generate_unique_keys(config.dataset_size, config.seed);
    let err = run_suite(&config, &keys).unwrap_err();
    assert_eq!(err.category(), "config");
}
