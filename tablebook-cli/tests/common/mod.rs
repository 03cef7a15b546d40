//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the tablebook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is not created; tablebook creates it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("tablebook-data");
        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("tablebook").expect("Failed to find tablebook binary");
        for var in [
            "TABLEBOOK_DATA_DIR",
            "TABLEBOOK_LOG_MODE",
            "TABLEBOOK_MIN_GUESTS",
            "TABLEBOOK_MAX_GUESTS",
            "TABLEBOOK_PREVIEW_CHAIRS_PER_TABLE",
            "TABLEBOOK_MAXIMUM_LOCK_WAIT_SECONDS",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Add tables with the given chair counts, returning their ids.
    pub fn add_tables(&self, sizes: &[u32]) -> Vec<u32> {
        sizes
            .iter()
            .map(|n| {
                let output = self
                    .command()
                    .args(["table", "add", "--chairs", &n.to_string()])
                    .output()
                    .expect("Failed to run table add");
                assert!(output.status.success(), "table add failed: {output:?}");
                String::from_utf8_lossy(&output.stdout)
                    .trim()
                    .parse()
                    .expect("table add should print the new id")
            })
            .collect()
    }

    /// Book a party and return `(reservation_id, table_ids)`.
    ///
    /// # Panics
    /// Panics if the booking fails.
    pub fn book(&self, date: &str, guests: u32) -> (String, Vec<u32>) {
        let output = self
            .command()
            .args([
                "book",
                "--date",
                date,
                "--time",
                "19:00",
                "--guests",
                &guests.to_string(),
                "--name",
                "Ada Lovelace",
                "--phone",
                "555-0100",
            ])
            .output()
            .expect("Failed to run book");
        assert!(
            output.status.success(),
            "book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let mut lines = stdout.lines();
        let id = lines.next().expect("reservation id line").to_string();
        let tables = lines
            .next()
            .unwrap_or_default()
            .split_whitespace()
            .map(|t| t.parse().expect("table id"))
            .collect();
        (id, tables)
    }
}
