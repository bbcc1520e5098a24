//! Tests for configuration loading and precedence.
#![allow(clippy::unwrap_used)]

use ezbio::config::Config;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();

    let config = Config::load_from_path(dir.path());

    assert!(config.ezbio.interpreter.is_none());
    assert!(config.ezbio.script.is_none());
    assert!(config.ezbio.normalize.is_none());
    assert!(config.config_file_path.is_none());
}

#[test]
fn file_values_are_loaded() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".ezbio.toml"),
        "[ezbio]\ninterpreter = \"sh\"\nscript = \"scripts/lookup.sh\"\nnormalize = true\n",
    )
    .unwrap();

    let config = Config::load_from_path(dir.path());

    assert_eq!(config.ezbio.interpreter.as_deref(), Some("sh"));
    assert_eq!(
        config.ezbio.script,
        Some(PathBuf::from("scripts/lookup.sh"))
    );
    assert_eq!(config.ezbio.normalize, Some(true));
    assert!(config.config_file_path.is_some());
}

#[test]
fn empty_section_is_valid() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".ezbio.toml"), "[ezbio]\n").unwrap();

    let config = Config::load_from_path(dir.path());

    assert!(config.ezbio.interpreter.is_none());
    assert!(config.config_file_path.is_some());
}

#[test]
fn config_is_found_by_walking_up() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".ezbio.toml"),
        "[ezbio]\ninterpreter = \"sh\"\n",
    )
    .unwrap();
    let nested = dir.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let config = Config::load_from_path(&nested);

    assert_eq!(config.ezbio.interpreter.as_deref(), Some("sh"));
}

#[test]
fn file_start_point_uses_its_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".ezbio.toml"),
        "[ezbio]\ninterpreter = \"sh\"\n",
    )
    .unwrap();
    let file = dir.path().join("something.txt");
    fs::write(&file, "x").unwrap();

    let config = Config::load_from_path(&file);

    assert_eq!(config.ezbio.interpreter.as_deref(), Some("sh"));
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".ezbio.toml"), "this is { not toml").unwrap();

    let config = Config::load_from_path(dir.path());

    assert!(config.ezbio.interpreter.is_none());
    assert!(config.config_file_path.is_none());
}

#[cfg(unix)]
mod end_to_end {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use std::fs;
    use tempfile::tempdir;

    fn ezbio() -> Command {
        Command::cargo_bin("ezbio-bin").unwrap()
    }

    #[test]
    fn config_file_supplies_interpreter_and_script() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(".ezbio.toml"),
            "[ezbio]\ninterpreter = \"sh\"\nscript = \"lookup.sh\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("lookup.sh"),
            "#!/bin/sh\nprintf '%s' '{}'\n",
        )
        .unwrap();

        ezbio()
            .current_dir(dir.path())
            .arg("alice")
            .assert()
            .success()
            .stdout("{}\n");
    }

    #[test]
    fn cli_flags_override_the_config_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(".ezbio.toml"),
            "[ezbio]\ninterpreter = \"sh\"\nscript = \"lookup.sh\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("lookup.sh"),
            "#!/bin/sh\nprintf '%s' '{}'\n",
        )
        .unwrap();
        // The override points at a script whose output fails the gate,
        // proving the flag value (not the config value) was used
        fs::write(
            dir.path().join("other.sh"),
            "#!/bin/sh\nprintf '%s' 'not json'\n",
        )
        .unwrap();

        ezbio()
            .current_dir(dir.path())
            .args(["alice", "--script", "other.sh"])
            .assert()
            .failure()
            .stdout(predicate::str::starts_with(
                r#"{"error": "Failed to unmarshal data: "#,
            ));
    }
}
