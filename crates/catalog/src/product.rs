use serde::{Deserialize, Serialize};

/// A single catalog record (matches the API response shape).
///
/// The record is opaque to the storefront: no validation or transformation
/// happens beyond reordering, so unknown JSON fields are ignored and optional
/// fields default to `None`. Identity and uniqueness are the backend's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub cost: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
