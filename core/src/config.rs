use crate::{buffer::PROJECTILE_WINDOW, types::Cycle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TraceConfig {
    /// Directory for structured session artifacts (`{name}.json`).
    pub json_dir:          PathBuf,
    /// Directory for text session artifacts (`{name}.txt`).
    pub txt_dir:           PathBuf,
    /// Directory for drop-capture artifacts. Saves here overwrite.
    pub drops_dir:         PathBuf,
    /// Width of the projectile start-cycle window, in client cycles.
    pub projectile_window: Cycle,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            json_dir:          PathBuf::from("json_dumps"),
            txt_dir:           PathBuf::from("txt_dumps"),
            drops_dir:         PathBuf::from("json_dumps"),
            projectile_window: PROJECTILE_WINDOW,
        }
    }
}

impl TraceConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: TraceConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rebase every output directory under `root`.
    pub fn rooted_at(mut self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        self.json_dir = root.join(&self.json_dir);
        self.txt_dir = root.join(&self.txt_dir);
        self.drops_dir = root.join(&self.drops_dir);
        self
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.projectile_window <= 0 {
            anyhow::bail!("projectile_window must be positive, got {}", self.projectile_window);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("trace.json");
        std::fs::write(&path, r#"{ "txt_dir": "logs" }"#).expect("write config");

        let config = TraceConfig::load(&path).expect("load");
        assert_eq!(config.txt_dir, PathBuf::from("logs"));
        assert_eq!(config.json_dir, PathBuf::from("json_dumps"));
        assert_eq!(config.projectile_window, PROJECTILE_WINDOW);
    }

    #[test]
    fn non_positive_window_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("trace.json");
        std::fs::write(&path, r#"{ "projectile_window": 0 }"#).expect("write config");
        assert!(TraceConfig::load(&path).is_err());
    }

    #[test]
    fn rooted_at_prefixes_all_dirs() {
        let config = TraceConfig::default().rooted_at("/tmp/run");
        assert_eq!(config.json_dir, PathBuf::from("/tmp/run/json_dumps"));
        assert_eq!(config.txt_dir, PathBuf::from("/tmp/run/txt_dumps"));
        assert_eq!(config.drops_dir, PathBuf::from("/tmp/run/json_dumps"));
    }
}
