//! Cross-process determinism: the `session_fixture` binary prints the same
//! digests regardless of working directory, locale, or unrelated
//! environment variables.

use std::path::Path;
use std::process::Command;

use lock_tests::rooms::fixture_path;

const BIN: &str = env!("CARGO_BIN_EXE_session_fixture");

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(fixture: &str, work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let config = fixture_path(fixture);
    let mut command = Command::new(BIN);
    command.arg(&config).current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {BIN} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "session_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn assert_stable(fixture: &str) -> String {
    let root = workspace_root();
    let baseline = run_variant(fixture, &root, &[]);

    assert!(
        baseline.contains("config_digest=sha256:"),
        "{fixture}: baseline output missing config_digest"
    );
    assert!(
        baseline.contains("report_digest=sha256:"),
        "{fixture}: baseline output missing report_digest"
    );

    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    let variant_cwd = run_variant(fixture, alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "{fixture}: output differs when cwd changes from {root} to {alt_cwd}"
    );

    let variant_locale = run_variant(fixture, &root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(
        baseline, variant_locale,
        "{fixture}: output differs when LC_ALL=C LANG=C"
    );

    let variant_noise = run_variant(
        fixture,
        &root,
        &[
            ("SWEEPER_NOISE", "should_not_matter"),
            ("RUST_LOG", "trace"),
            ("RUST_BACKTRACE", "1"),
        ],
    );
    assert_eq!(
        baseline, variant_noise,
        "{fixture}: output differs with spurious env vars"
    );

    baseline
}

#[test]
fn crossproc_ring_ucs() {
    let out = assert_stable("ring_stepturn_ucs.json");
    assert!(out.contains("stop_reason=all_clean"));
    assert!(out.contains("steps=10"));
    assert!(out.contains("path_cost=19.000"));
    assert!(out.contains("final_agent=(4, 3)"));
}

#[test]
fn crossproc_office_astar() {
    let out = assert_stable("office_astar.json");
    assert!(out.contains("stop_reason=all_clean"));
    assert!(out.contains("cleaned=3"));
    assert!(out.contains("remaining_dirt=0"));
}

#[test]
fn crossproc_seeded_reflex() {
    let out = assert_stable("reflex_seeded.json");
    assert!(out.contains("plan.0.digest=sha256:"));
}

#[test]
fn missing_argument_exits_with_usage() {
    let output = Command::new(BIN).output().expect("spawn session_fixture");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
