use assert_cmd::Command;
use std::f64::consts::PI;
use std::path::PathBuf;

fn eegrisk() -> Command {
    Command::cargo_bin("eegrisk").unwrap()
}

/// Write a timestamp + sample CSV holding a sine tone; returns the file path.
fn sine_csv(dir: &std::path::Path, name: &str, freq_hz: f64, n: usize) -> PathBuf {
    let mut content = String::from("timestamp,eeg\n");
    for i in 0..n {
        let t = i as f64 / 256.0;
        content.push_str(&format!(
            "2024-05-01T00:00:{:02},{:.6}\n",
            i % 60,
            (2.0 * PI * freq_hz * t).sin()
        ));
    }
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// ANALYZE — SUCCESS PATH
// =============================================================================

#[test]
fn test_analyze_alpha_recording() {
    let tmp = tempfile::tempdir().unwrap();
    let data = sine_csv(tmp.path(), "alpha.csv", 10.0, 512);

    let output = eegrisk()
        .arg("analyze")
        .arg("--file")
        .arg(data.to_str().unwrap())
        .arg("--quiet")
        .assert()
        .success()
        .code(0);

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(parsed.get("status").unwrap(), "success");

    let bands = parsed
        .pointer("/metrics/bands_relative_power")
        .unwrap()
        .as_object()
        .unwrap();
    let keys: Vec<&String> = bands.keys().collect();
    assert_eq!(keys, vec!["Delta", "Theta", "Alpha", "Beta", "Gamma"]);
    assert!(bands.get("Alpha").unwrap().as_f64().unwrap() > 0.95);
    assert!(bands.get("Gamma").unwrap().as_f64().unwrap() < 0.01);

    assert!(parsed.get("risk_score").unwrap().as_f64().unwrap() < 10.0);

    let chart = parsed.get("chart_data").unwrap().as_array().unwrap();
    assert_eq!(chart.len(), 256); // 512 samples -> stride 2
}

#[test]
fn test_analyze_gamma_recording_scores_high() {
    let tmp = tempfile::tempdir().unwrap();
    let data = sine_csv(tmp.path(), "gamma.csv", 40.0, 512);

    let output = eegrisk()
        .arg("analyze")
        .arg("--file")
        .arg(data.to_str().unwrap())
        .arg("--quiet")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    // Nearly all power in Gamma and nearly none in Alpha: ratio far above the
    // logistic midpoint
    assert!(parsed.get("risk_score").unwrap().as_f64().unwrap() > 90.0);
}

#[test]
fn test_analyze_compact_output_is_single_line() {
    let tmp = tempfile::tempdir().unwrap();
    let data = sine_csv(tmp.path(), "alpha.csv", 10.0, 256);

    let output = eegrisk()
        .arg("analyze")
        .arg("--file")
        .arg(data.to_str().unwrap())
        .arg("--compact")
        .arg("--quiet")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json_part = stdout.trim();
    assert!(!json_part.contains('\n'));
    let _: serde_json::Value = serde_json::from_str(json_part).unwrap();
}

#[test]
fn test_analyze_output_to_file() {
    let tmp = tempfile::tempdir().unwrap();
    let data = sine_csv(tmp.path(), "alpha.csv", 10.0, 256);
    let out_path = tmp.path().join("result.json");

    eegrisk()
        .arg("analyze")
        .arg("--file")
        .arg(data.to_str().unwrap())
        .arg("-o")
        .arg(out_path.to_str().unwrap())
        .arg("--quiet")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed.get("status").unwrap(), "success");
}

#[test]
fn test_analyze_json_roundtrip() {
    let tmp = tempfile::tempdir().unwrap();
    let data = sine_csv(tmp.path(), "alpha.csv", 10.0, 256);

    let output = eegrisk()
        .arg("analyze")
        .arg("--file")
        .arg(data.to_str().unwrap())
        .arg("--quiet")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    // Deserialize into the engine result type to verify schema compatibility
    let result: eegrisk_rs::AnalysisResult = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result.status, "success");
    assert!(!result.chart_data.is_empty());
    let sum: f64 = result
        .metrics
        .bands_relative_power
        .entries()
        .iter()
        .map(|(_, v)| v)
        .sum();
    assert!((sum - 1.0).abs() < 1e-6);
}

#[test]
fn test_analyze_is_deterministic() {
    let tmp = tempfile::tempdir().unwrap();
    let data = sine_csv(tmp.path(), "alpha.csv", 10.0, 512);

    let run = || {
        let output = eegrisk()
            .arg("analyze")
            .arg("--file")
            .arg(data.to_str().unwrap())
            .arg("--quiet")
            .assert()
            .success();
        output.get_output().stdout.clone()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_analyze_named_channel() {
    let tmp = tempfile::tempdir().unwrap();
    let mut content = String::from("fp1,cz\n");
    for i in 0..512 {
        let t = i as f64 / 256.0;
        content.push_str(&format!(
            "{:.6},{:.6}\n",
            (2.0 * PI * 10.0 * t).sin(),
            (2.0 * PI * 40.0 * t).sin()
        ));
    }
    let data = tmp.path().join("two_channel.csv");
    std::fs::write(&data, content).unwrap();

    let output = eegrisk()
        .arg("analyze")
        .arg("--file")
        .arg(data.to_str().unwrap())
        .arg("--channel")
        .arg("cz")
        .arg("--quiet")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let gamma = parsed
        .pointer("/metrics/bands_relative_power/Gamma")
        .unwrap()
        .as_f64()
        .unwrap();
    assert!(gamma > 0.9);
}

// =============================================================================
// ANALYZE — PIPELINE FAILURES
// =============================================================================

#[test]
fn test_analyze_constant_signal_reports_zero_power() {
    let tmp = tempfile::tempdir().unwrap();
    let data = tmp.path().join("flat.csv");
    let mut content = String::from("eeg\n");
    for _ in 0..128 {
        content.push_str("2.5\n");
    }
    std::fs::write(&data, content).unwrap();

    let output = eegrisk()
        .arg("analyze")
        .arg("--file")
        .arg(data.to_str().unwrap())
        .arg("--quiet")
        .assert()
        .failure()
        .code(1);

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.get("status").unwrap(), "error");
    assert!(parsed
        .get("message")
        .unwrap()
        .as_str()
        .unwrap()
        .contains("Zero total power"));
}

#[test]
fn test_analyze_text_only_table() {
    let tmp = tempfile::tempdir().unwrap();
    let data = tmp.path().join("labels.csv");
    std::fs::write(&data, "id,state\na,rest\nb,task\n").unwrap();

    let output = eegrisk()
        .arg("analyze")
        .arg("--file")
        .arg(data.to_str().unwrap())
        .arg("--quiet")
        .assert()
        .failure()
        .code(1);

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.get("status").unwrap(), "error");
    assert!(parsed
        .get("message")
        .unwrap()
        .as_str()
        .unwrap()
        .contains("No numeric data"));
}

// =============================================================================
// BATCH
// =============================================================================

#[test]
fn test_batch_jsonl_output() {
    let tmp = tempfile::tempdir().unwrap();
    let a = sine_csv(tmp.path(), "a.csv", 10.0, 256);
    let b = sine_csv(tmp.path(), "b.csv", 40.0, 256);

    let output = eegrisk()
        .arg("batch")
        .arg("--files")
        .arg(a.to_str().unwrap())
        .arg(b.to_str().unwrap())
        .arg("--quiet")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.trim().lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(parsed.get("status").unwrap(), "success");
    }
}

#[test]
fn test_batch_glob_and_output_dir() {
    let tmp = tempfile::tempdir().unwrap();
    sine_csv(tmp.path(), "a.csv", 10.0, 256);
    sine_csv(tmp.path(), "b.csv", 20.0, 256);
    let out_dir = tmp.path().join("results");

    eegrisk()
        .arg("batch")
        .arg("--glob")
        .arg(format!("{}/*.csv", tmp.path().to_str().unwrap()))
        .arg("--output-dir")
        .arg(out_dir.to_str().unwrap())
        .arg("--quiet")
        .assert()
        .success();

    for stem in ["a", "b"] {
        let path = out_dir.join(format!("{}_analysis.json", stem));
        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.get("status").unwrap(), "success");
    }
}

#[test]
fn test_batch_dry_run_lists_files() {
    let tmp = tempfile::tempdir().unwrap();
    let a = sine_csv(tmp.path(), "a.csv", 10.0, 64);

    let output = eegrisk()
        .arg("batch")
        .arg("--files")
        .arg(a.to_str().unwrap())
        .arg("--dry-run")
        .arg("--quiet")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("a.csv"));
}

#[test]
fn test_batch_partial_failure_exit_code() {
    let tmp = tempfile::tempdir().unwrap();
    let good = sine_csv(tmp.path(), "good.csv", 10.0, 256);
    let bad = tmp.path().join("bad.csv");
    std::fs::write(&bad, "id,state\na,rest\nb,task\n").unwrap();

    eegrisk()
        .arg("batch")
        .arg("--files")
        .arg(good.to_str().unwrap())
        .arg(bad.to_str().unwrap())
        .arg("--continue-on-error")
        .arg("--quiet")
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_batch_no_inputs() {
    eegrisk()
        .arg("batch")
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::prelude::predicate::str::contains(
            "must be specified",
        ));
}
