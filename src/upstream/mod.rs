/// YApi server access
///
/// A thin typed layer over reqwest: one client honoring the global proxy
/// setting, plus one function per upstream endpoint. Every response arrives
/// in the `Upstream<T>` envelope; a non-zero errcode is surfaced as an
/// error carrying the upstream errmsg.

pub mod api;
pub mod client;

pub use api::{
    fetch_category_interfaces, fetch_category_menu, fetch_interface_detail,
    fetch_project_base_info,
};
pub use client::build_client;
