//! `shoplane-web`
//!
//! **Responsibility:** Buyer-facing storefront client (CSR WASM).
//!
//! This crate provides:
//! - The landing page: featured picks plus the full catalog grid
//! - Client configuration for the catalog API endpoints
//! - The login gate that fronts every commerce action
//!
//! The storefront is a **thin shell** over the catalog API: it renders what
//! the backend serves and never writes anything back.

pub mod config;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::AppConfig;
pub use state::{GateAction, RevealPhase};
