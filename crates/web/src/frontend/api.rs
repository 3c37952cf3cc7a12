//! HTTP client for the catalog API.

use gloo_net::http::Request;
use thiserror::Error;

use shoplane_catalog::Product;

use crate::config::AppConfig;

/// Image substituted when a product image fails to load.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300?text=Product";

/// Errors crossing the catalog API boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("parse error: {0}")]
    Parse(String),
}

/// Fetch the full product listing.
pub async fn fetch_products(config: &AppConfig) -> Result<Vec<Product>, ApiError> {
    let resp = Request::get(&config.products_url())
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Api {
            status: resp.status(),
            body,
        });
    }

    resp.json::<Vec<Product>>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}
