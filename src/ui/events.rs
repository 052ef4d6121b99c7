/// Event relay to the frontend
///
/// Commands and the batch queue report outcomes here; the frontend listens
/// on a small set of named channels and mirrors them into toasts and the
/// progress modal.

use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter};
use tracing::error;

use crate::models::{Notification, ResolvedInterface};

/// Toast notices (success/error themed, auto-dismissed by the frontend)
pub const NOTIFICATION_EVENT: &str = "notification";
/// Per-item progress of the batch queue
pub const QUEUE_LOG_EVENT: &str = "queue_log";
/// A workspace became the active project
pub const LOAD_PROJECT_EVENT: &str = "load_project";
/// Activating a workspace failed
pub const LOAD_PROJECT_ERROR_EVENT: &str = "load_project_error";

/// One batch queue progress entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueLog {
    pub msg: String,
    pub is_success: bool,
    /// How many items the batch has finished so far
    pub processed: usize,
    /// Present on success: the fetched interface and its generated TS
    pub resolved_interface: Option<ResolvedInterface>,
}

impl QueueLog {
    pub fn success(msg: impl Into<String>, processed: usize, resolved: ResolvedInterface) -> Self {
        Self {
            msg: msg.into(),
            is_success: true,
            processed,
            resolved_interface: Some(resolved),
        }
    }

    pub fn failure(msg: impl Into<String>, processed: usize) -> Self {
        Self {
            msg: msg.into(),
            is_success: false,
            processed,
            resolved_interface: None,
        }
    }
}

/// Emit a toast notification
///
/// Emission failures are logged, never propagated: a lost toast must not
/// fail the operation it reports on.
pub fn notify(app_handle: &AppHandle, notification: &Notification) {
    if let Err(e) = app_handle.emit(NOTIFICATION_EVENT, notification) {
        error!("Failed to emit notification: {e}");
    }
}

/// Emit one queue progress entry
pub fn emit_queue_log(app_handle: &AppHandle, log: &QueueLog) {
    if let Err(e) = app_handle.emit(QUEUE_LOG_EVENT, log) {
        error!("Failed to emit queue log: {e}");
    }
}

/// Announce the active workspace to the frontend
pub fn emit_project_loaded(app_handle: &AppHandle, source_path: &str) {
    if let Err(e) = app_handle.emit(LOAD_PROJECT_EVENT, source_path) {
        error!("Failed to emit project load: {e}");
    }
}

pub fn emit_project_load_error(app_handle: &AppHandle, message: &str) {
    if let Err(e) = app_handle.emit(LOAD_PROJECT_ERROR_EVENT, message) {
        error!("Failed to emit project load error: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InterfaceDetail;

    fn resolved() -> ResolvedInterface {
        ResolvedInterface {
            interface: InterfaceDetail {
                _id: 901,
                path: "/api/user/login".to_string(),
                project_id: 77,
                title: "login".to_string(),
                catid: 5,
                method: "GET".to_string(),
                req_body_other: None,
                req_query: None,
                req_params: None,
                req_body_form: None,
                req_body_type: None,
                res_body: None,
            },
            ts_string: "export interface loginResponse {\n}\n".to_string(),
        }
    }

    #[test]
    fn test_queue_log_success_carries_resolved_interface() {
        let log = QueueLog::success("done", 3, resolved());
        assert!(log.is_success);
        assert_eq!(log.processed, 3);
        assert!(log.resolved_interface.is_some());
    }

    #[test]
    fn test_queue_log_failure_has_no_payload() {
        let log = QueueLog::failure("boom", 4);
        assert!(!log.is_success);
        assert!(log.resolved_interface.is_none());
    }

    #[test]
    fn test_queue_log_serializes_wire_shape() {
        let json = serde_json::to_value(QueueLog::failure("boom", 1)).unwrap();
        assert_eq!(json["is_success"], false);
        assert_eq!(json["msg"], "boom");
        assert!(json["resolved_interface"].is_null());
    }
}
