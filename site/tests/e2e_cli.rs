//! End-to-end CLI tests for digitech

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn digitech() -> Command {
    cargo_bin_cmd!("digitech")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        digitech()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("export-content"));
    }

    #[test]
    fn shows_version() {
        digitech()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_a_subcommand() {
        digitech().assert().failure();
    }
}

mod render {
    use super::*;

    #[test]
    fn writes_the_page() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("site").join("index.html");

        digitech()
            .current_dir(temp.path())
            .args(["render", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).expect("page written");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"faq\""));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn wasm_module_flag_adds_loader() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("index.html");

        digitech()
            .current_dir(temp.path())
            .args(["render", "--wasm-module", "/pkg/digitech_wasm.js", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).expect("page written");
        assert!(html.contains("/pkg/digitech_wasm.js"));
    }

    #[test]
    fn picks_up_config_in_working_directory() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("digitech.toml"),
            "title = \"Custom Title\"\nscroll_threshold_px = 300.0\n",
        )
        .expect("write config");

        digitech()
            .current_dir(temp.path())
            .arg("render")
            .assert()
            .success();

        let html = std::fs::read_to_string(temp.path().join("index.html")).expect("page");
        assert!(html.contains("<title>Custom Title</title>"));
        assert!(html.contains("data-scroll-threshold=\"300\""));
    }

    #[test]
    fn explicit_missing_config_fails() {
        let temp = TempDir::new().expect("temp dir");

        digitech()
            .current_dir(temp.path())
            .args(["render", "--config", "nope.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("[digitech] Error:"))
            .stderr(predicate::str::contains("nope.toml"));
    }

    #[test]
    fn invalid_content_fails() {
        let temp = TempDir::new().expect("temp dir");
        let content = temp.path().join("content.json");
        std::fs::write(&content, "{ not json").expect("write content");

        digitech()
            .current_dir(temp.path())
            .args(["render", "--content"])
            .arg(&content)
            .assert()
            .failure()
            .stderr(predicate::str::contains("loading content"));
        assert!(!temp.path().join("index.html").exists());
    }
}

mod content {
    use super::*;

    #[test]
    fn check_prints_section_map() {
        digitech()
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("#what"))
            .stdout(predicate::str::contains("#faq"))
            .stdout(predicate::str::contains("ok: 6 navigation entries"));
    }

    #[test]
    fn exported_content_round_trips_through_render() {
        let temp = TempDir::new().expect("temp dir");
        let export = digitech()
            .arg("export-content")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json: serde_json::Value = serde_json::from_slice(&export).expect("valid JSON");
        assert_eq!(json["sections"].as_array().map(Vec::len), Some(6));

        let content = temp.path().join("content.json");
        std::fs::write(&content, &export).expect("write export");

        digitech()
            .current_dir(temp.path())
            .args(["check", "--content"])
            .arg(&content)
            .assert()
            .success();
    }
}
