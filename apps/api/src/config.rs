use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
/// Every variable is optional and falls back to a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Default target for saving and loading the analyzed-candidate pool.
    pub results_file: PathBuf,
    /// Directory individual text reports are written to.
    pub reports_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            results_file: PathBuf::from(env_or("RESULTS_FILE", "resume_data.json")),
            reports_dir: PathBuf::from(env_or("REPORTS_DIR", "reports")),
        })
    }

    /// Resolves a caller-supplied results file name, falling back to `results_file`.
    ///
    /// Names are bare file names placed next to `results_file`; anything that
    /// could point elsewhere (separators, `..`, absolute prefixes) is rejected.
    /// A `.json` extension is appended when missing.
    pub fn results_path(&self, file_name: Option<&str>) -> Result<PathBuf, AppError> {
        let Some(name) = file_name.map(str::trim).filter(|name| !name.is_empty()) else {
            return Ok(self.results_file.clone());
        };

        let mut components = Path::new(name).components();
        let is_bare = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !is_bare || name.contains(['/', '\\']) {
            return Err(AppError::Validation(format!(
                "Invalid results file name '{name}': must be a plain file name"
            )));
        }

        let file_name = if name.ends_with(".json") {
            name.to_string()
        } else {
            format!("{name}.json")
        };
        let dir = self.results_file.parent().unwrap_or(Path::new(""));
        Ok(dir.join(file_name))
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            results_file: PathBuf::from("data/resume_data.json"),
            reports_dir: PathBuf::from("reports"),
        }
    }

    #[test]
    fn test_results_path_defaults_to_configured_file() {
        assert_eq!(config().results_path(None).unwrap(), PathBuf::from("data/resume_data.json"));
        assert_eq!(
            config().results_path(Some("  ")).unwrap(),
            PathBuf::from("data/resume_data.json")
        );
    }

    #[test]
    fn test_results_path_appends_json_extension() {
        assert_eq!(
            config().results_path(Some("all_results")).unwrap(),
            PathBuf::from("data/all_results.json")
        );
        assert_eq!(
            config().results_path(Some("batch.json")).unwrap(),
            PathBuf::from("data/batch.json")
        );
    }

    #[test]
    fn test_results_path_stays_next_to_results_file() {
        for name in ["/tmp/x", "../x", "..", ".", "nested/x", "nested\\x", "./x"] {
            assert!(
                matches!(config().results_path(Some(name)), Err(AppError::Validation(_))),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_results_path_relative_to_bare_results_file() {
        let config = Config {
            results_file: PathBuf::from("resume_data.json"),
            ..config()
        };
        assert_eq!(config.results_path(Some("batch")).unwrap(), PathBuf::from("batch.json"));
    }
}
