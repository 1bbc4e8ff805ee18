//! Isolated environment for running the phone-signin binary.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Non-empty stdout lines parsed as JSON
    pub fn ndjson(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {l:?}: {e}\n{}", self.stdout))
            })
            .collect()
    }
}

/// Temp HOME with its own config dir. Color and unicode are forced off.
pub struct TestEnv {
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_phone-signin")),
        }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home_dir.path().join(".config")
    }

    /// Write `~/.config/phone-signin/config.toml`
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.config_dir().join("phone-signin");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Write a file under the temp HOME
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.home_dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_stdin(args, "")
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> TestResult {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        {
            let mut pipe = child.stdin.take().unwrap();
            let _ = pipe.write_all(stdin.as_bytes());
        }

        let output = child.wait_with_output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.home_dir.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.config_dir())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env("LANG", "C")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .env_remove("PHONE_SIGNIN_COLOR")
            .env_remove("PHONE_SIGNIN_UNICODE")
            .env_remove("PHONE_SIGNIN_VERBOSITY");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
