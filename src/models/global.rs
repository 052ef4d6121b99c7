/// App-level configuration (`config.json` in the app data dir)

use serde::{Deserialize, Serialize};

/// Settings shared by every workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Known workspace paths, most recently used first
    pub projects: Vec<String>,

    /// Pause between queue jobs, in seconds
    pub break_seconds: u64,

    /// Number of queue jobs allowed in flight at once
    pub rate_limit: usize,

    /// Optional HTTP proxy for upstream requests
    pub proxy: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            projects: Vec::new(),
            break_seconds: 3,
            rate_limit: 5,
            proxy: None,
        }
    }
}

impl GlobalConfig {
    /// Apply a partial update from the frontend
    pub fn merge_patch(&mut self, patch: GlobalConfigPatch) {
        if let Some(rate_limit) = patch.rate_limit {
            self.rate_limit = rate_limit;
        }
        if let Some(break_seconds) = patch.break_seconds {
            self.break_seconds = break_seconds;
        }
        if let Some(proxy) = patch.proxy {
            self.proxy = Some(proxy);
        }
    }

    /// Record `source_path` as the most recently used workspace
    pub fn touch_project(&mut self, source_path: &str) {
        if let Some(index) = self.projects.iter().position(|p| p == source_path) {
            self.projects.remove(index);
        }
        self.projects.insert(0, source_path.to_string());
    }
}

/// Partial update for the global settings form
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GlobalConfigPatch {
    pub rate_limit: Option<usize>,
    pub break_seconds: Option<u64>,
    pub proxy: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GlobalConfig::default();
        assert_eq!(config.break_seconds, 3);
        assert_eq!(config.rate_limit, 5);
        assert!(config.proxy.is_none());
        assert!(config.projects.is_empty());
    }

    #[test]
    fn test_touch_project_inserts_at_front() {
        let mut config = GlobalConfig::default();
        config.touch_project("/work/a");
        config.touch_project("/work/b");

        assert_eq!(config.projects, vec!["/work/b", "/work/a"]);
    }

    #[test]
    fn test_touch_project_moves_existing_to_front() {
        let mut config = GlobalConfig::default();
        config.touch_project("/work/a");
        config.touch_project("/work/b");
        config.touch_project("/work/a");

        assert_eq!(config.projects, vec!["/work/a", "/work/b"]);
        assert_eq!(config.projects.len(), 2, "no duplicates");
    }

    #[test]
    fn test_merge_patch_keeps_unset_fields() {
        let mut config = GlobalConfig::default();
        config.merge_patch(GlobalConfigPatch {
            rate_limit: Some(2),
            ..Default::default()
        });

        assert_eq!(config.rate_limit, 2);
        assert_eq!(config.break_seconds, 3);
    }
}
