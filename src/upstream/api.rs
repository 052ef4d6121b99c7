/// Typed wrappers for the YApi HTTP endpoints

use reqwest::Client;

use crate::error::Result;
use crate::models::{
    CategoryInterfaceList, CategoryMenuItem, InterfaceDetail, ProjectBaseInfo,
};

use super::client::get_data;

const PROJECT_BASE_INFO_API: &str = "api/project/get";
const CATEGORY_MENU_API: &str = "api/interface/getCatMenu";
const CATEGORY_INTERFACES_API: &str = "api/interface/list_cat";
const INTERFACE_DETAIL_API: &str = "api/interface/get";

/// Page size for category interface listings; effectively "everything"
const CATEGORY_PAGE_LIMIT: u32 = 1000;

/// Append a trailing slash when the configured base URL lacks one
pub fn normalize_base_url(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    }
}

/// `api/project/get` - basic info of the project a token belongs to
pub async fn fetch_project_base_info(
    client: &Client,
    base_url: &str,
    token: &str,
) -> Result<ProjectBaseInfo> {
    let url = format!(
        "{}{}?token={}",
        normalize_base_url(base_url),
        PROJECT_BASE_INFO_API,
        token
    );
    get_data(client, &url).await
}

/// `api/interface/getCatMenu` - category menu of a project
pub async fn fetch_category_menu(
    client: &Client,
    base_url: &str,
    token: &str,
    project_id: u32,
) -> Result<Vec<CategoryMenuItem>> {
    let url = format!(
        "{}{}?project_id={}&token={}",
        normalize_base_url(base_url),
        CATEGORY_MENU_API,
        project_id,
        token
    );
    get_data(client, &url).await
}

/// `api/interface/list_cat` - interfaces of one category
pub async fn fetch_category_interfaces(
    client: &Client,
    base_url: &str,
    token: &str,
    cat_id: u32,
) -> Result<CategoryInterfaceList> {
    let url = format!(
        "{}{}?token={}&catid={}&limit={}",
        normalize_base_url(base_url),
        CATEGORY_INTERFACES_API,
        token,
        cat_id,
        CATEGORY_PAGE_LIMIT
    );
    get_data(client, &url).await
}

/// `api/interface/get` - full definition of one interface
pub async fn fetch_interface_detail(
    client: &Client,
    base_url: &str,
    token: &str,
    interface_id: u32,
) -> Result<InterfaceDetail> {
    let url = format!(
        "{}{}?token={}&id={}",
        normalize_base_url(base_url),
        INTERFACE_DETAIL_API,
        token,
        interface_id
    );
    get_data(client, &url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_appends_slash() {
        assert_eq!(
            normalize_base_url("https://yapi.example.com"),
            "https://yapi.example.com/"
        );
    }

    #[test]
    fn test_normalize_base_url_keeps_existing_slash() {
        assert_eq!(
            normalize_base_url("https://yapi.example.com/"),
            "https://yapi.example.com/"
        );
    }
}
