use crate::persistence::{PersistenceError, PersistenceResult};
use crate::scheduler::DEFAULT_SCHEDULE_TITLE;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

pub const CATALOG_ENV: &str = "WOLF_SCHEDULER_CATALOG";
pub const TITLE_ENV: &str = "WOLF_SCHEDULER_TITLE";
pub const STORE_ENV: &str = "WOLF_SCHEDULER_STORE";
pub const LOG_ENV: &str = "RUST_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Course record file the catalog is read from.
    pub catalog_path: PathBuf,
    pub schedule_title: String,
    /// JSON file holding the saved schedule, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("course_records.txt"),
            schedule_title: DEFAULT_SCHEDULE_TITLE.to_string(),
            store_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl SchedulerConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> PersistenceResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => PersistenceError::NotFound(path.display().to_string()),
            _ => PersistenceError::Io(err),
        })?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Applies `WOLF_SCHEDULER_*` and `RUST_LOG` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(CATALOG_ENV).filter(|v| !v.trim().is_empty()) {
            self.catalog_path = PathBuf::from(path);
        }
        if let Some(title) = lookup(TITLE_ENV) {
            self.schedule_title = title;
        }
        if let Some(path) = lookup(STORE_ENV).filter(|v| !v.trim().is_empty()) {
            self.store_path = Some(PathBuf::from(path));
        }
        if let Some(level) = lookup(LOG_ENV).filter(|v| !v.trim().is_empty()) {
            self.log_level = level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn overrides_replace_only_present_keys() {
        let env: HashMap<&str, &str> = [
            (CATALOG_ENV, "catalog.txt"),
            (LOG_ENV, "debug"),
            (STORE_ENV, "  "),
        ]
        .into_iter()
        .collect();
        let config = SchedulerConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.catalog_path, PathBuf::from("catalog.txt"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.schedule_title, "My Schedule");
        assert_eq!(config.store_path, None);
    }

    #[test]
    fn missing_json_fields_fall_back_to_defaults() {
        let config: SchedulerConfig =
            serde_json::from_str(r#"{"schedule_title": "Fall"}"#).unwrap();
        assert_eq!(config.schedule_title, "Fall");
        assert_eq!(config.catalog_path, PathBuf::from("course_records.txt"));
        assert_eq!(config.log_level, "info");
    }
}
