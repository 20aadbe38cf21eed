use crate::errors::{AppError, AppResult};
use crate::models::{Difficulty, Goal, ProgramSelection};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

macro_rules! bundled {
    ($name:literal) => {
        ($name, include_str!(concat!("../../programs/", $name)))
    };
}

/// One program per goal and difficulty, shipped with the binary and written
/// by `init`.
const BUNDLED_PROGRAMS: &[(&str, &str)] = &[
    bundled!("hybridAthlete_beginner.yaml"),
    bundled!("hybridAthlete_intermediate.yaml"),
    bundled!("hybridAthlete_advanced.yaml"),
    bundled!("tacticalAthlete_beginner.yaml"),
    bundled!("tacticalAthlete_intermediate.yaml"),
    bundled!("tacticalAthlete_advanced.yaml"),
    bundled!("forceTestPrep_beginner.yaml"),
    bundled!("forceTestPrep_intermediate.yaml"),
    bundled!("forceTestPrep_advanced.yaml"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_programs_dir")]
    pub programs_dir: String,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// `--program` override, never written back.
    #[serde(skip)]
    pub program_override: Option<String>,
}

fn default_programs_dir() -> String {
    Config::config_dir()
        .join("programs")
        .to_string_lossy()
        .to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            programs_dir: default_programs_dir(),
            goal: Goal::default(),
            difficulty: Difficulty::default(),
            log_level: default_log_level(),
            program_override: None,
        }
    }
}

/// `~/...` paths in the config file are relative to the home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

impl Config {
    /// Platform configuration directory.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hybridops")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".hybridops")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hybridops.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("hybridops.sqlite")
    }

    /// Load the configuration file, or defaults when there is none yet.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn programs_path(&self) -> PathBuf {
        expand_tilde(&self.programs_dir)
    }

    pub fn selection(&self) -> ProgramSelection {
        ProgramSelection::new(self.goal, self.difficulty)
    }

    /// YAML file describing the selected program.
    pub fn program_file(&self) -> PathBuf {
        match &self.program_override {
            Some(path) => expand_tilde(path),
            None => self
                .programs_path()
                .join(self.selection().program_file_name()),
        }
    }

    /// Create the config file, the database file and the bundled programs.
    ///
    /// With `is_test` the config file is left untouched so that a `--db`
    /// override never leaks into the user's settings.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if !is_test {
            self.save()?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        let db_path = self.database_path();
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }
        println!("✅ Database:    {}", db_path.display());

        let written = self.install_bundled_programs()?;
        println!(
            "✅ Programs:    {} ({} new)",
            self.programs_path().display(),
            written
        );
        Ok(())
    }

    /// Write bundled program files that are not present yet. Existing files
    /// are user-owned and never replaced.
    pub fn install_bundled_programs(&self) -> AppResult<usize> {
        let dir = self.programs_path();
        fs::create_dir_all(&dir)?;

        let mut written = 0;
        for (name, content) in BUNDLED_PROGRAMS {
            let target = dir.join(name);
            if !target.exists() {
                fs::write(&target, content)?;
                written += 1;
            }
        }
        Ok(written)
    }

    /// Reject configurations that cannot work before touching any file.
    pub fn validate(&self) -> AppResult<()> {
        if self.database.trim().is_empty() {
            return Err(AppError::Config("'database' must not be empty".into()));
        }
        if self.programs_dir.trim().is_empty() {
            return Err(AppError::Config("'programs_dir' must not be empty".into()));
        }
        if self.log_level.trim().parse::<log::LevelFilter>().is_err() {
            return Err(AppError::Config(format!(
                "unknown log_level '{}' (use off, error, warn, info, debug or trace)",
                self.log_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let cfg = Config::from_yaml("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.goal, Goal::HybridAthlete);
        assert_eq!(cfg.difficulty, Difficulty::Beginner);
        assert_eq!(cfg.log_level, "warn");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_selection_from_config() {
        let cfg = Config::from_yaml(
            "database: db.sqlite\nprograms_dir: /opt/programs\ngoal: forceTestPrep\ndifficulty: advanced\n",
        )
        .unwrap();
        assert_eq!(cfg.selection().storage_key(), "log_forceTestPrep_advanced");
        assert_eq!(
            cfg.program_file(),
            PathBuf::from("/opt/programs/forceTestPrep_advanced.yaml")
        );
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let mut cfg = Config::default();
        cfg.log_level = "loud".into();
        assert!(matches!(cfg.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_every_selection_is_bundled() {
        for goal in [Goal::HybridAthlete, Goal::TacticalAthlete, Goal::ForceTestPrep] {
            for difficulty in [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced] {
                let file = ProgramSelection::new(goal, difficulty).program_file_name();
                assert!(
                    BUNDLED_PROGRAMS.iter().any(|(name, _)| *name == file),
                    "{file} is not bundled"
                );
            }
        }
    }

    #[test]
    fn test_bundled_program_parses() {
        for (_, content) in BUNDLED_PROGRAMS {
            let program = crate::models::ProgramDefinition::from_yaml_str(content).unwrap();
            assert!(program.get_day(0, "Start").is_some());
        }
    }
}
