//! `shoplane-catalog`
//!
//! **Responsibility:** Catalog records and listing presentation rules.
//!
//! This crate contains the product record served by the catalog API and the
//! showcase logic (shuffle + featured/general split), implemented purely as
//! deterministic domain logic (no IO, no HTTP, no DOM).

pub mod product;
pub mod showcase;

pub use product::Product;
pub use showcase::{FEATURED_LIMIT, Showcase};
