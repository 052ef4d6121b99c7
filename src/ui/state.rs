/// Application state management for Tauri
///
/// One process-wide set of store cells registered as managed state:
/// created at startup, dropped at shutdown. Commands mutate the cells and
/// the frontend mirrors them.

use crate::models::{Notification, ProjectConfig};
use crate::ui::store::StoreCell;

/// Global application state shared across Tauri commands
#[derive(Clone, Default)]
pub struct AppState {
    /// Whether the batch progress modal is visible
    pub processing_modal_open: StoreCell<bool>,

    /// Total work items of the running batch
    pub processing_total: StoreCell<usize>,

    /// Whether a batch task is currently running
    pub running_task: StoreCell<bool>,

    /// Workspace path of the active project
    pub source_path: StoreCell<String>,

    /// Active project configuration (None until a project is loaded)
    pub project_config: StoreCell<Option<ProjectConfig>>,

    /// Generated-code preview content
    pub preview: StoreCell<String>,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a config-load outcome to the store
    ///
    /// Success replaces the config cell with exactly the loaded payload and
    /// records the workspace path; failure leaves both cells untouched.
    /// The returned notification carries the outcome either way.
    pub fn settle_config_load(
        &self,
        source_path: &str,
        outcome: crate::error::Result<ProjectConfig>,
    ) -> (Notification, Option<ProjectConfig>) {
        match outcome {
            Ok(config) => {
                self.source_path.set(source_path.to_string());
                self.project_config.set(Some(config.clone()));
                (
                    Notification::success(format!("Loaded project config from {source_path}")),
                    Some(config),
                )
            }
            Err(err) => (Notification::error(err.to_string()), None),
        }
    }

    /// Mark a batch of `total` items as started
    pub fn begin_batch(&self, total: usize) {
        self.processing_modal_open.set(true);
        self.processing_total.set(total);
        self.running_task.set(true);
    }

    /// Mark the running batch as finished
    pub fn finish_batch(&self) {
        self.running_task.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForgeError;
    use crate::models::NotificationLevel;

    #[test]
    fn test_app_state_defaults() {
        let state = AppState::new();
        assert!(!state.processing_modal_open.get());
        assert_eq!(state.processing_total.get(), 0);
        assert!(!state.running_task.get());
        assert_eq!(state.source_path.get(), "");
        assert!(state.project_config.get().is_none());
        assert_eq!(state.preview.get(), "");
    }

    #[test]
    fn test_settle_config_load_success_replaces_config() {
        let state = AppState::new();
        let config = ProjectConfig {
            base_url: "https://yapi.example.com/".to_string(),
            ..Default::default()
        };

        let (notice, payload) = state.settle_config_load("/work/demo", Ok(config.clone()));

        assert_eq!(notice.level, NotificationLevel::Success);
        assert_eq!(state.source_path.get(), "/work/demo");
        assert_eq!(
            state.project_config.get().unwrap().base_url,
            config.base_url
        );
        assert_eq!(payload.unwrap().base_url, config.base_url);
    }

    #[test]
    fn test_settle_config_load_failure_keeps_config() {
        let state = AppState::new();
        let previous = ProjectConfig {
            base_url: "https://old.example.com/".to_string(),
            ..Default::default()
        };
        state.project_config.set(Some(previous.clone()));
        state.source_path.set("/work/old".to_string());

        let (notice, payload) = state.settle_config_load(
            "/work/new",
            Err(ForgeError::ConfigNotInitialized {
                path: "/work/new".to_string(),
            }),
        );

        assert_eq!(notice.level, NotificationLevel::Error);
        assert!(payload.is_none());
        assert_eq!(
            state.project_config.get().unwrap().base_url,
            previous.base_url,
            "failed load must not touch the stored config"
        );
        assert_eq!(state.source_path.get(), "/work/old");
    }

    #[test]
    fn test_begin_batch_opens_modal_with_total() {
        let state = AppState::new();
        state.begin_batch(12);

        assert!(state.processing_modal_open.get());
        assert_eq!(state.processing_total.get(), 12);
        assert!(state.running_task.get());

        state.finish_batch();
        assert!(!state.running_task.get());
    }
}
