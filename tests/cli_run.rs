//! E2E tests for the one-shot `rewatch build` and `rewatch test` commands

mod common;

use common::{shell_toolchain, TestEnv};

#[test]
fn missing_toolchain_fails_with_spawn_error() {
    let env = TestEnv::new().with_config("[toolchain]\nprogram = \"rewatch-no-such-toolchain\"\n");

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("Build Failed"), "{}", result.stdout);
    assert!(
        result.stdout.contains("failed to run 'rewatch-no-such-toolchain'"),
        "{}",
        result.stdout
    );
}

#[test]
fn missing_root_is_an_error() {
    let env = TestEnv::new();
    let missing = env.root().join("nope");

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_rewatch"))
        .arg("--root")
        .arg(&missing)
        .arg("build")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Project root not found"), "{}", stderr);
}

#[test]
fn invalid_config_is_an_error() {
    let env = TestEnv::new().with_config("[watch\nextension = \"go\"\n");

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("Failed to load config"),
        "{}",
        result.stderr
    );
}

#[cfg(unix)]
mod unix {
    use super::*;

    #[test]
    fn build_failure_forwards_status_and_stderr() {
        let env = TestEnv::new().with_config(&shell_toolchain(
            r#"echo "error: foo" >&2; exit 3"#,
            "true",
        ));

        let result = env.run(&["build"]);

        assert_eq!(result.exit_code, 3);
        let lines: Vec<&str> = result.stdout.lines().collect();
        assert_eq!(lines.len(), 2, "{}", result.stdout);
        assert!(lines[0].ends_with("] Build Failed"));
        assert!(lines[1].ends_with("] error: foo"));
    }

    #[test]
    fn build_success_prints_one_banner() {
        let env = TestEnv::new().with_config(&shell_toolchain("echo compiled", "true"));

        let result = env.run(&["build"]);

        assert!(result.success);
        let lines: Vec<&str> = result.stdout.lines().collect();
        assert_eq!(lines.len(), 1, "{}", result.stdout);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] Build Successful"));
    }

    #[test]
    fn verbose_test_passes_flag_and_shows_output() {
        let env = TestEnv::new().with_config(&shell_toolchain(
            "true",
            r#"echo PASS; echo "ran as $0""#,
        ));

        let quiet = env.run(&["test"]);
        assert!(quiet.success);
        assert!(quiet.stdout.contains("Test Successful"));
        assert!(!quiet.stdout.contains("PASS"), "{}", quiet.stdout);

        let verbose = env.run(&["test", "-v"]);
        assert!(verbose.success);
        assert!(verbose.stdout.contains("Test Successful"));
        assert!(verbose.stdout.contains("] PASS"), "{}", verbose.stdout);
        assert!(verbose.stdout.contains("] ran as verbose"), "{}", verbose.stdout);
    }

    #[test]
    fn test_failure_shows_stdout() {
        let env = TestEnv::new().with_config(&shell_toolchain(
            "true",
            r#"echo "--- FAIL: TestX"; echo noise >&2; exit 1"#,
        ));

        let result = env.run(&["test"]);

        assert_eq!(result.exit_code, 1);
        assert!(result.stdout.contains("Test Failed"));
        assert!(result.stdout.contains("] --- FAIL: TestX"));
        assert!(!result.stdout.contains("noise"));
    }

    #[test]
    fn stderr_is_failure_fails_clean_exit_build() {
        let config = format!(
            "{}\n[build]\nstderr_is_failure = true\n",
            shell_toolchain(r#"echo "warning: deprecated" >&2"#, "true")
        );
        let env = TestEnv::new().with_config(&config);

        let result = env.run(&["build"]);

        assert_eq!(result.exit_code, 1);
        assert!(result.stdout.contains("Build Failed"));
        assert!(result.stdout.contains("] warning: deprecated"));
    }

    #[test]
    fn build_runs_in_project_root() {
        let env = TestEnv::new().with_config(&shell_toolchain("ls", "true"));
        env.write("marker.go", "package main\n");

        let result = env.run(&["--json", "build"]);

        assert!(result.success, "{}", result.stderr);
        let json: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
        let stdout: Vec<&str> = json["result"]["stdout"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(stdout.contains(&"marker.go"), "{:?}", stdout);
    }

    #[test]
    fn json_build_emits_action_complete() {
        let env = TestEnv::new().with_config(&shell_toolchain(
            r#"echo "error: foo" >&2; exit 2"#,
            "true",
        ));

        let result = env.run(&["--json", "build"]);

        assert_eq!(result.exit_code, 2);
        let json: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
        assert_eq!(json["event"], "action_complete");
        assert_eq!(json["command"], "build");
        assert_eq!(json["passed"], false);
        assert_eq!(json["result"]["exit_status"], 2);
        assert_eq!(json["result"]["stderr"][0], "error: foo");
    }

    #[test]
    fn json_output_still_warns_about_unknown_keys_on_stderr() {
        let config = format!(
            "{}\n[output]\ncolour = \"never\"\n",
            shell_toolchain("true", "true")
        );
        let env = TestEnv::new().with_config(&config);

        let result = env.run(&["--json", "build"]);

        assert!(result.success);
        let json: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
        assert_eq!(json["event"], "action_complete");
        assert!(
            result.stderr.contains("Unknown config key 'colour'"),
            "{}",
            result.stderr
        );
        assert!(result.stderr.contains("Did you mean 'color'?"));
    }

    #[test]
    fn unknown_config_key_warns_but_runs() {
        let config = format!(
            "{}\n[watch]\nextention = \"rs\"\n",
            shell_toolchain("true", "true")
        );
        let env = TestEnv::new().with_config(&config);

        let result = env.run(&["build"]);

        assert!(result.success);
        assert!(
            result.stderr.contains("Unknown config key 'extention'"),
            "{}",
            result.stderr
        );
        assert!(result.stderr.contains("Did you mean 'extension'?"));
    }
}
