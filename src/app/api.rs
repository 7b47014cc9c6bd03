//! JSON helpers over the station configuration REST API.
//!
//! URLs come from [`crate::endpoints::Endpoints`]; this module only moves
//! bodies. The admin session lives in a cookie, so the shared client keeps
//! cookies on native builds and sends credentials on web builds.

use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status for rejected requests
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The API answers 401 when the admin session is missing or expired
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

fn client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        #[cfg(not(target_arch = "wasm32"))]
        let builder = Client::builder().cookie_store(true);
        #[cfg(target_arch = "wasm32")]
        let builder = Client::builder();

        builder.build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client: {}. Using default.", e);
            Client::default()
        })
    })
}

async fn send(
    request: RequestBuilder,
    method: &str,
    url: &str,
) -> Result<reqwest::Response, ApiError> {
    debug!(method, url, "API request");

    #[cfg(target_arch = "wasm32")]
    let request = request.fetch_credentials_include();

    let response = request.send().await.map_err(|source| {
        warn!(method, url, error = %source, "API request failed");
        ApiError::Transport {
            url: url.to_string(),
            source,
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(method, url, status = status.as_u16(), "API request rejected");
        return Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response)
}

async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    url: &str,
) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

/// GET `url` and decode the JSON body
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = send(client().get(url), "GET", url).await?;
    decode(response, url).await
}

/// POST a JSON body and decode the JSON response
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = send(client().post(url).json(body), "POST", url).await?;
    decode(response, url).await
}

/// POST a JSON body to an endpoint that answers `204 No Content`
pub async fn post_json_no_response<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    send(client().post(url).json(body), "POST", url).await?;
    Ok(())
}

/// PUT a JSON body and decode the JSON response
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = send(client().put(url).json(body), "PUT", url).await?;
    decode(response, url).await
}

pub async fn delete(url: &str) -> Result<(), ApiError> {
    send(client().delete(url), "DELETE", url).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error() {
        let err = ApiError::Status {
            url: "/api/v1/radios".to_string(),
            status: 401,
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "/api/v1/radios returned HTTP 401");

        let err = ApiError::Status {
            url: "/api/v1/radios".to_string(),
            status: 400,
        };
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_unauthorized());
    }
}
