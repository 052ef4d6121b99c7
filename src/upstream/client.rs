/// HTTP client construction and envelope handling

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ForgeError, Result};
use crate::models::Upstream;

/// Build a client, routed through the configured proxy when one is set
pub fn build_client(proxy: Option<&str>) -> Result<Client> {
    let proxy = match proxy {
        Some(addr) if !addr.is_empty() => Some(
            reqwest::Proxy::all(addr).map_err(|_| ForgeError::InvalidProxy(addr.to_string()))?,
        ),
        _ => None,
    };

    let builder = match proxy {
        Some(proxy) => Client::builder().proxy(proxy),
        None => Client::builder(),
    };

    builder
        .build()
        .map_err(|e| ForgeError::Internal(format!("failed to build HTTP client: {e}")))
}

/// GET `url` and unwrap the upstream envelope
pub async fn get_data<T>(client: &Client, url: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    debug!("GET {}", url);

    let envelope: Upstream<T> = client
        .get(url)
        .send()
        .await
        .map_err(|source| ForgeError::UpstreamRequest {
            url: url.to_string(),
            source,
        })?
        .json()
        .await
        .map_err(|source| ForgeError::UpstreamRequest {
            url: url.to_string(),
            source,
        })?;

    unwrap_envelope(envelope)
}

/// Reject non-zero errcodes, require a data payload otherwise
pub fn unwrap_envelope<T>(envelope: Upstream<T>) -> Result<T> {
    if envelope.errcode != 0 {
        return Err(ForgeError::UpstreamRejected {
            errcode: envelope.errcode,
            errmsg: envelope.errmsg,
        });
    }
    envelope
        .data
        .ok_or_else(|| ForgeError::Internal("upstream reply carried no data".to_string()))
}
