//! Test environment builder for isolated srm testing.
//!
//! Provides `TestEnv` - an isolated config directory and HOME, plus helpers
//! to run the srm binary against them.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running the srm binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[allow(dead_code)]
impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// The binary is run with `SRM_CONFIG_DIR` pointing at `config_dir` and with
/// HOME and `XDG_CONFIG_HOME` redirected, so the developer's own menu is
/// never picked up.
pub struct TestEnv {
    pub config_dir: TempDir,
    pub home_dir: TempDir,
    srm_bin: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to the config directory
    pub fn config_path(&self, relative: &str) -> PathBuf {
        self.config_dir.path().join(relative)
    }

    /// Run srm with the given arguments
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run srm with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.srm_bin);
        cmd.args(args)
            .current_dir(self.home_dir.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("SRM_CONFIG_DIR", self.config_dir.path())
            .env_remove("SRM_VERBOSITY");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute srm");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Overwrite (or create) a file in the config directory
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.config_path(name);
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    pub fn srm_bin(&self) -> &Path {
        &self.srm_bin
    }
}

/// Builder for creating test environments
#[derive(Default)]
pub struct TestEnvBuilder {
    configs: Vec<(String, String)>,
}

#[allow(dead_code)]
impl TestEnvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `srm_config.yaml`
    pub fn with_yaml(self, content: &str) -> Self {
        self.with_config_file("srm_config.yaml", content)
    }

    /// Add `srm_config.json`
    pub fn with_json(self, content: &str) -> Self {
        self.with_config_file("srm_config.json", content)
    }

    /// Add `srm_config.toml`
    pub fn with_toml(self, content: &str) -> Self {
        self.with_config_file("srm_config.toml", content)
    }

    /// Add an arbitrary file to the config directory
    pub fn with_config_file(mut self, name: &str, content: &str) -> Self {
        self.configs.push((name.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let config_dir = TempDir::new().expect("Failed to create config temp dir");
        let home_dir = TempDir::new().expect("Failed to create home temp dir");

        for (name, content) in &self.configs {
            let path = config_dir.path().join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create config directory");
            }
            std::fs::write(&path, content).expect("Failed to write config");
        }

        TestEnv {
            config_dir,
            home_dir,
            srm_bin: PathBuf::from(env!("CARGO_BIN_EXE_srm")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_writes_config_files() {
        let env = TestEnv::builder().with_yaml("groups: []").build();
        assert!(env.config_path("srm_config.yaml").exists());
    }

    #[test]
    fn test_empty_builder_has_no_config() {
        let env = TestEnv::builder().build();
        assert!(!env.config_path("srm_config.yaml").exists());
    }
}
