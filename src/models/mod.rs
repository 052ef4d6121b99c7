/// Data contracts shared between commands, services and the frontend
///
/// Shapes mirror the JSON the frontend and the YApi server exchange, so
/// field names stay in their wire form (`_id`, `catid`, ...).

pub mod global;
pub mod notification;
pub mod project;
pub mod response;
pub mod tree;
pub mod upstream;

// Re-export commonly used types
pub use global::{GlobalConfig, GlobalConfigPatch};
pub use notification::{Notification, NotificationLevel};
pub use project::{Category, Interface, Project, ProjectConfig, ProjectConfigPatch};
pub use response::CommandResponse;
pub use tree::{FileTree, RequestFile};
pub use upstream::{
    CategoryInterfaceList, CategoryMenuItem, InterfaceDetail, InterfaceSummary, ProjectBaseInfo,
    ResolvedInterface, Upstream,
};
