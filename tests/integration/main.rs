//! Integration tests for pkgsnap

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use pkgsnap::exec::{CommandRunner, SystemRunner};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn pkgsnap() -> Command {
        cargo_bin_cmd!("pkgsnap")
    }

    #[test]
    fn help_displays() {
        pkgsnap()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Installed package snapshots"));
    }

    #[test]
    fn version_displays() {
        pkgsnap()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("pkgsnap"));
    }

    #[test]
    fn export_help_shows_reinstall_samples() {
        pkgsnap()
            .args(["export", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Reinstall command samples"));
    }

    #[test]
    fn export_rejects_unknown_manager() {
        pkgsnap()
            .args(["export", "--manager", "apt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }

    #[test]
    fn export_without_tools_produces_nothing() {
        // Only meaningful on hosts without the probed managers; on a
        // Windows machine with winget installed there is nothing to assert
        let runner = SystemRunner::new();
        if ["winget", "scoop", "choco"]
            .iter()
            .any(|tool| runner.can_locate(tool))
        {
            return;
        }

        let temp = TempDir::new().unwrap();
        pkgsnap()
            .args(["export", "-o"])
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("No output files were produced"));

        assert!(!temp.path().join("winget_apps.csv").exists());
        assert!(!temp.path().join("scoop_apps.csv").exists());
    }

    #[test]
    fn status_runs() {
        pkgsnap()
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("winget"));
    }

    #[test]
    fn cache_path_names_the_file() {
        let temp = TempDir::new().unwrap();
        pkgsnap()
            .args(["cache", "path", "-o"])
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("name_cache.json"));
    }

    #[test]
    fn cache_show_empty() {
        let temp = TempDir::new().unwrap();
        pkgsnap()
            .args(["cache", "show", "-o"])
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("empty"));
    }

    #[test]
    fn cache_show_reads_hand_edited_file() {
        let temp = TempDir::new().unwrap();
        let entry = r#"{
            "Microsoft.VisualStudioCode": {
                "package_id": "Microsoft.VisualStudioCode",
                "cached_at": "2026-08-01T12:00:00Z",
                "display_name": "Visual Studio Code"
            }
        }"#;
        std::fs::write(temp.path().join("name_cache.json"), entry).unwrap();

        pkgsnap()
            .args(["cache", "show", "-o"])
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Visual Studio Code"));
    }

    #[test]
    fn cache_clear_without_file() {
        let temp = TempDir::new().unwrap();
        pkgsnap()
            .args(["cache", "clear", "--yes", "-o"])
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("No cache file to clear"));
    }

    #[test]
    fn cache_clear_removes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("name_cache.json");
        std::fs::write(&path, "{}").unwrap();

        pkgsnap()
            .args(["cache", "clear", "--yes", "-o"])
            .arg(temp.path())
            .assert()
            .success();

        assert!(!path.exists());
    }

    #[test]
    fn config_path() {
        pkgsnap()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        pkgsnap()
            .args(["config", "show", "--config"])
            .arg(temp.path().join("missing.toml"))
            .assert()
            .success()
            .stdout(predicate::str::contains("[managers]"));
    }

    #[test]
    fn config_init_then_show() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        pkgsnap()
            .args(["config", "init", "--config"])
            .arg(&path)
            .assert()
            .success();

        pkgsnap()
            .args(["config", "show", "--config"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("[output]"));
    }
}
