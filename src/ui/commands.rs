/// Tauri command functions
///
/// The IPC bridge between the frontend and the backend services. Every
/// command returns `Result<CommandResponse, String>`: the uniform success
/// envelope, or the stringified error the frontend shows verbatim. Each
/// operation has its own typed command; there is no untyped passthrough.

use std::path::Path;

use tauri::{AppHandle, State};
use tracing::{error, info};

use crate::artifacts::{request, tree, writer};
use crate::codegen;
use crate::config::{global, project};
use crate::error::ForgeError;
use crate::models::{
    CommandResponse, GlobalConfigPatch, Notification, ProjectConfigPatch, RequestFile,
    ResolvedInterface,
};
use crate::queue::{QueueJob, TaskQueue};
use crate::ui::events;
use crate::ui::state::AppState;
use crate::upstream;
use crate::util::join_slash_path;

/// Result type for Tauri commands (serializable error strings)
type CommandResult<T> = Result<T, String>;

/// The single failure path: log, toast, stringify
fn fail(app_handle: &AppHandle, err: ForgeError) -> String {
    let message = err.to_string();
    error!("{message}");
    events::notify(app_handle, &Notification::error(message.clone()));
    message
}

/// HTTP client honoring the configured proxy
fn client_for(app_handle: &AppHandle) -> crate::error::Result<reqwest::Client> {
    let global_config = global::read(app_handle)?;
    upstream::build_client(global_config.proxy.as_deref())
}

// ========================================
// Global config
// ========================================

#[tauri::command]
pub fn load_global_config(app_handle: AppHandle) -> CommandResult<CommandResponse> {
    match global::read(&app_handle) {
        Ok(config) => Ok(CommandResponse::with_data("Loaded global config", config)),
        Err(e) => Err(fail(&app_handle, e)),
    }
}

#[tauri::command]
pub fn update_global_config(
    app_handle: AppHandle,
    patch: GlobalConfigPatch,
) -> CommandResult<CommandResponse> {
    let result = global::read(&app_handle).and_then(|mut config| {
        config.merge_patch(patch);
        global::write(&app_handle, &config)
    });

    match result {
        Ok(()) => Ok(CommandResponse::message("Global config updated")),
        Err(e) => Err(fail(&app_handle, e)),
    }
}

// ========================================
// Workspace registration
// ========================================

#[tauri::command]
pub fn add_project(app_handle: AppHandle, source_path: String) -> CommandResult<CommandResponse> {
    match global::touch_project(&app_handle, &source_path) {
        Ok(()) => {
            info!("Registered workspace {source_path}");
            events::emit_project_loaded(&app_handle, &source_path);
            Ok(CommandResponse::message("Workspace registered"))
        }
        Err(e) => {
            let message = fail(&app_handle, e);
            events::emit_project_load_error(&app_handle, &message);
            Err(message)
        }
    }
}

#[tauri::command]
pub fn load_latest_project(app_handle: AppHandle) -> CommandResult<CommandResponse> {
    match global::latest_project(&app_handle) {
        Ok(source_path) => {
            events::emit_project_loaded(&app_handle, &source_path);
            Ok(CommandResponse::with_data(
                "Loaded most recent workspace",
                source_path,
            ))
        }
        Err(e) => {
            let message = fail(&app_handle, e);
            events::emit_project_load_error(&app_handle, &message);
            Err(message)
        }
    }
}

// ========================================
// Project config
// ========================================

#[tauri::command]
pub fn load_project_config(
    app_handle: AppHandle,
    state: State<'_, AppState>,
    source_path: String,
) -> CommandResult<CommandResponse> {
    let outcome = match project::read(&source_path) {
        Ok(config) if config.base_url.is_empty() => Err(ForgeError::ConfigNotInitialized {
            path: source_path.clone(),
        }),
        Ok(config) => Ok(config),
        Err(e) => {
            // First visit: drop a default config in place so the settings
            // form has something to edit, then report the failed load.
            if let Err(init_err) = project::init(&source_path) {
                error!("Failed to initialize project config: {init_err}");
            }
            Err(e)
        }
    };

    let (notice, payload) = state.settle_config_load(&source_path, outcome);
    events::notify(&app_handle, &notice);

    match payload {
        Some(config) => Ok(CommandResponse::with_data(notice.message, config)),
        None => Err(notice.message),
    }
}

#[tauri::command]
pub fn update_project_config(
    app_handle: AppHandle,
    state: State<'_, AppState>,
    source_path: String,
    patch: ProjectConfigPatch,
) -> CommandResult<CommandResponse> {
    let result = project::read(&source_path).and_then(|mut config| {
        config.merge_patch(patch);
        project::write(&source_path, &config)?;
        Ok(config)
    });

    match result {
        Ok(config) => {
            state.project_config.set(Some(config));
            Ok(CommandResponse::message("Project config updated"))
        }
        Err(e) => Err(fail(&app_handle, e)),
    }
}

#[tauri::command]
pub fn import_project_config(
    app_handle: AppHandle,
    source_path: String,
    other_path: String,
) -> CommandResult<CommandResponse> {
    match project::import_config(&source_path, &other_path) {
        Ok(()) => {
            events::notify(&app_handle, &Notification::success("Config imported"));
            Ok(CommandResponse::message("Config imported"))
        }
        Err(e) => Err(fail(&app_handle, e)),
    }
}

// ========================================
// Upstream browsing
// ========================================

#[tauri::command]
pub async fn fetch_project_info(
    app_handle: AppHandle,
    source_path: String,
    token: String,
) -> CommandResult<CommandResponse> {
    let result = async {
        let client = client_for(&app_handle)?;
        let config = project::read(&source_path)?;
        let info = upstream::fetch_project_base_info(&client, &config.base_url, &token).await?;
        project::merge_project(&source_path, &info, &token)?;
        Ok(info)
    }
    .await;

    match result {
        Ok(info) => {
            info!("Fetched project '{}'", info.name);
            Ok(CommandResponse::with_data(
                format!("Fetched project '{}'", info.name),
                info,
            ))
        }
        Err(e) => Err(fail(&app_handle, e)),
    }
}

#[tauri::command]
pub async fn fetch_category_menu(
    app_handle: AppHandle,
    source_path: String,
    token: String,
    project_id: u32,
) -> CommandResult<CommandResponse> {
    let result = async {
        let client = client_for(&app_handle)?;
        let config = project::read(&source_path)?;
        let menu = upstream::fetch_category_menu(&client, &config.base_url, &token, project_id)
            .await?;
        for item in &menu {
            project::merge_category(&source_path, &project_id.to_string(), item)?;
        }
        Ok(menu)
    }
    .await;

    match result {
        Ok(menu) => Ok(CommandResponse::with_data(
            "Fetched category menu",
            menu,
        )),
        Err(e) => Err(fail(&app_handle, e)),
    }
}

#[tauri::command]
pub async fn fetch_category_interfaces(
    app_handle: AppHandle,
    source_path: String,
    token: String,
    cat_id: u32,
) -> CommandResult<CommandResponse> {
    let result = async {
        let client = client_for(&app_handle)?;
        let config = project::read(&source_path)?;
        let list =
            upstream::fetch_category_interfaces(&client, &config.base_url, &token, cat_id).await?;
        for summary in &list.list {
            project::merge_interface(&source_path, &cat_id.to_string(), summary)?;
        }
        Ok(list)
    }
    .await;

    match result {
        Ok(list) => Ok(CommandResponse::with_data(
            format!("Fetched {} interfaces of category {cat_id}", list.list.len()),
            list,
        )),
        Err(e) => Err(fail(&app_handle, e)),
    }
}

// ========================================
// Batch queue
// ========================================

#[tauri::command]
pub async fn add_interface_task(
    queue: State<'_, TaskQueue>,
    job: QueueJob,
) -> CommandResult<CommandResponse> {
    queue.enqueue(job).await;
    Ok(CommandResponse::message("Task queued"))
}

#[tauri::command]
pub async fn start_task(
    app_handle: AppHandle,
    state: State<'_, AppState>,
    queue: State<'_, TaskQueue>,
) -> CommandResult<CommandResponse> {
    if queue.is_running() {
        return Err(fail(&app_handle, ForgeError::BatchRunning));
    }

    let pending = queue.pending().await;
    state.begin_batch(pending);

    let queue = queue.inner().clone();
    let state = state.inner().clone();
    let app = app_handle.clone();
    tauri::async_runtime::spawn(async move {
        if let Err(e) = queue.run(app.clone()).await {
            fail(&app, e);
        }
        state.finish_batch();
    });

    Ok(CommandResponse::with_data("Batch task started", pending))
}

#[tauri::command]
pub async fn cancel_task(
    state: State<'_, AppState>,
    queue: State<'_, TaskQueue>,
) -> CommandResult<CommandResponse> {
    queue.cancel();
    state.finish_batch();
    Ok(CommandResponse::message("Batch task cancelled"))
}

// ========================================
// Preview and artifacts
// ========================================

#[tauri::command]
pub async fn preview_interface(
    app_handle: AppHandle,
    state: State<'_, AppState>,
    source_path: String,
    token: String,
    interface_id: u32,
) -> CommandResult<CommandResponse> {
    let result = async {
        let client = client_for(&app_handle)?;
        let config = project::read(&source_path)?;
        let detail =
            upstream::fetch_interface_detail(&client, &config.base_url, &token, interface_id)
                .await?;
        let ts_string = codegen::generate_interface_types(&detail)?;
        Ok(ResolvedInterface {
            interface: detail,
            ts_string,
        })
    }
    .await;

    match result {
        Ok(resolved) => {
            state.preview.set(resolved.ts_string.clone());
            Ok(CommandResponse::with_data(
                format!("Generated preview for '{}'", resolved.interface.title),
                resolved,
            ))
        }
        Err(e) => Err(fail(&app_handle, e)),
    }
}

#[tauri::command]
pub async fn write_types(
    app_handle: AppHandle,
    queue: State<'_, TaskQueue>,
    source_path: String,
) -> CommandResult<CommandResponse> {
    // Results are drained only once the write can actually proceed
    let config = match project::read(&source_path) {
        Ok(config) => config,
        Err(e) => return Err(fail(&app_handle, e)),
    };

    let results = queue.take_results().await;
    if results.is_empty() {
        return Err(fail(
            &app_handle,
            ForgeError::Internal("no generated interfaces to write".to_string()),
        ));
    }

    match writer::write_types(&source_path, &config, &results) {
        Ok(written) => {
            let message = format!("Wrote {written} type files");
            events::notify(&app_handle, &Notification::success(message.clone()));
            Ok(CommandResponse::with_data(message, written))
        }
        Err(e) => {
            queue.restore_results(results).await;
            Err(fail(&app_handle, e))
        }
    }
}

#[tauri::command]
pub fn load_types_tree(
    app_handle: AppHandle,
    source_path: String,
    search: Option<String>,
) -> CommandResult<CommandResponse> {
    let result = project::read(&source_path).and_then(|config| {
        let root = join_slash_path(Path::new(&source_path), &config.types_path);
        let mut types_tree = tree::scan_tree(&root)?;
        if let Some(key) = search.filter(|key| !key.is_empty()) {
            tree::filter_tree(&mut types_tree, &key);
        }
        Ok(types_tree)
    });

    match result {
        Ok(types_tree) => Ok(CommandResponse::with_data("Loaded types tree", types_tree)),
        Err(e) => Err(fail(&app_handle, e)),
    }
}

#[tauri::command]
pub fn load_request_files(
    app_handle: AppHandle,
    source_path: String,
) -> CommandResult<CommandResponse> {
    let result = project::read(&source_path).and_then(|config| {
        let dir = join_slash_path(Path::new(&source_path), &config.request_path);
        request::list_request_files(&dir)
    });

    match result {
        Ok(files) => Ok(CommandResponse::with_data("Loaded request files", files)),
        Err(e) => Err(fail(&app_handle, e)),
    }
}

#[tauri::command]
pub fn write_request_files(
    app_handle: AppHandle,
    files: Vec<RequestFile>,
) -> CommandResult<CommandResponse> {
    match request::write_checked(&files) {
        Ok(written) => {
            let message = format!("Wrote {written} request files");
            events::notify(&app_handle, &Notification::success(message.clone()));
            Ok(CommandResponse::with_data(message, written))
        }
        Err(e) => Err(fail(&app_handle, e)),
    }
}
