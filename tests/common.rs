#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use tempfile::TempDir;

pub fn hyb() -> Command {
    cargo_bin_cmd!("hybridops")
}

/// Isolated home directory plus database for one test.
pub struct TestEnv {
    pub home: TempDir,
    pub db: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("temp home");
        let db = home.path().join("hybridops_test.sqlite");
        Self {
            db: db.to_string_lossy().to_string(),
            home,
        }
    }

    /// Command bound to the temp home and database.
    pub fn cmd(&self) -> Command {
        let mut cmd = hyb();
        cmd.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .env_remove("RUST_LOG")
            .args(["--db", &self.db]);
        cmd
    }

    /// Absolute path of a file inside the temp home.
    pub fn path(&self, name: &str) -> String {
        self.home.path().join(name).to_string_lossy().to_string()
    }

    /// `init` without touching the config file; installs the bundled program.
    pub fn init(&self) -> &Self {
        self.cmd().args(["--test", "init"]).assert().success();
        self
    }

    pub fn run(&self, args: &[&str]) {
        self.cmd().args(args).assert().success();
    }
}

/// Initialized env with week 1 Monday started and its first bench set logged.
pub fn env_with_bench_set() -> TestEnv {
    let env = TestEnv::new();
    env.init();
    env.run(&["start", "1_Mon"]);
    env.run(&["set", "1_Mon", "3", "1", "--weight", "60"]);
    env.run(&["check", "1_Mon", "3", "1"]);
    env
}
