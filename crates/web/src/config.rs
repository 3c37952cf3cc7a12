//! Client configuration for the catalog API.

/// Base URL used when `SHOPLANE_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Storefront configuration.
///
/// The browser has no process environment, so the API URL override is baked
/// in at compile time via `option_env!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    api_base_url: String,
}

impl AppConfig {
    /// Build the configuration from the compile-time environment.
    pub fn from_env() -> Self {
        Self::new(option_env!("SHOPLANE_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Build a configuration for an explicit base URL. Trailing slashes are
    /// stripped so endpoint paths join cleanly.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let mut api_base_url = api_base_url.into();
        while api_base_url.ends_with('/') {
            api_base_url.pop();
        }

        Self { api_base_url }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Endpoint serving the full product listing.
    pub fn products_url(&self) -> String {
        format!("{}/product/viewallproducts", self.api_base_url)
    }

    /// Endpoint serving one product's image.
    pub fn product_image_url(&self, product_id: i64) -> String {
        format!(
            "{}/product/displayproductimage?id={}",
            self.api_base_url, product_id
        )
    }
}
