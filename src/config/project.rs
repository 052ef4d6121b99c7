/// Workspace config stored as `yapi.json` at the workspace root
///
/// Besides plain read/write this module keeps the stored selection tree in
/// sync with what the user has fetched: every fetched project, category and
/// interface is merged in exactly once, keyed by its id.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ForgeError, Result};
use crate::models::{
    Category, CategoryMenuItem, Interface, InterfaceSummary, Project, ProjectBaseInfo,
    ProjectConfig,
};

/// File name of the per-workspace config
pub const PROJECT_CONFIG_NAME: &str = "yapi.json";

/// Path of the config file inside a workspace
pub fn config_file(source_path: &str) -> PathBuf {
    PathBuf::from(source_path).join(PROJECT_CONFIG_NAME)
}

/// Create an empty config when the workspace has none yet
pub fn init(source_path: &str) -> Result<()> {
    let path = config_file(source_path);
    if path.exists() {
        return Ok(());
    }
    debug!("Creating default project config at {}", path.display());
    write(source_path, &ProjectConfig::default())
}

pub fn read(source_path: &str) -> Result<ProjectConfig> {
    read_file(&config_file(source_path))
}

/// Read a config from an explicit file path (used by config import)
pub fn read_file(path: &Path) -> Result<ProjectConfig> {
    let contents = fs::read_to_string(path).map_err(|source| ForgeError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn write(source_path: &str, config: &ProjectConfig) -> Result<()> {
    let path = config_file(source_path);
    let contents = serde_json::to_string(config)?;
    fs::write(&path, contents).map_err(|source| ForgeError::ConfigWrite {
        path: path.display().to_string(),
        source,
    })
}

/// Merge fetched project base info into the stored project list
pub fn merge_project(source_path: &str, info: &ProjectBaseInfo, token: &str) -> Result<()> {
    let mut config = read(source_path)?;
    let project_id = info._id.to_string();

    if !config
        .project_list
        .iter()
        .any(|project| project.project_id == project_id)
    {
        config.project_list.push(Project {
            token: token.to_string(),
            project_id,
            project_name: Some(info.name.clone()),
            categories: Vec::new(),
        });
    }

    write(source_path, &config)
}

/// Merge a fetched category into the matching project
pub fn merge_category(source_path: &str, project_id: &str, item: &CategoryMenuItem) -> Result<()> {
    let mut config = read(source_path)?;

    if let Some(project) = config
        .project_list
        .iter_mut()
        .find(|project| project.project_id == project_id)
    {
        let id = item._id.to_string();
        if !project.categories.iter().any(|category| category.id == id) {
            project.categories.push(Category {
                id,
                name: item.name.clone(),
                interfaces: Vec::new(),
            });
        }
    }

    write(source_path, &config)
}

/// Merge a fetched interface into the matching category
pub fn merge_interface(source_path: &str, cat_id: &str, summary: &InterfaceSummary) -> Result<()> {
    let mut config = read(source_path)?;

    'outer: for project in &mut config.project_list {
        for category in &mut project.categories {
            if category.id == cat_id {
                let id = summary._id.to_string();
                if !category
                    .interfaces
                    .iter()
                    .any(|interface| interface.id == id)
                {
                    category.interfaces.push(Interface {
                        id,
                        name: Some(summary.title.clone()),
                        path: Some(summary.path.clone()),
                        lock: Some(false),
                    });
                }
                break 'outer;
            }
        }
    }

    write(source_path, &config)
}

/// Import another workspace's config, merging its selection tree in
///
/// Projects, categories and interfaces already present (by id) are kept;
/// everything new is appended.
pub fn import_config(source_path: &str, other_path: &str) -> Result<()> {
    let mut config = read(source_path)?;
    let other = read_file(Path::new(other_path))?;

    for other_project in other.project_list {
        let Some(project) = config
            .project_list
            .iter_mut()
            .find(|p| p.project_id == other_project.project_id)
        else {
            config.project_list.push(other_project);
            continue;
        };

        for other_category in other_project.categories {
            let Some(category) = project
                .categories
                .iter_mut()
                .find(|c| c.id == other_category.id)
            else {
                project.categories.push(other_category);
                continue;
            };

            for other_interface in other_category.interfaces {
                if !category
                    .interfaces
                    .iter()
                    .any(|i| i.id == other_interface.id)
                {
                    category.interfaces.push(other_interface);
                }
            }
        }
    }

    write(source_path, &config)
}
