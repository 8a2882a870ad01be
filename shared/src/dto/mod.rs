//! # Marketplace Data
//!
//! Plain data structures rendered by the marketplace screens.
//!
//! ## Module Organization
//!
//! - [`catalog`] - Categories, listings, search/category filtering and the sell-form draft
//! - [`profile`] - Profile summary counters and menu entries
//!
//! ## Serialization Format
//!
//! Types derive `Serialize`/`Deserialize` so a catalog snapshot can be dumped
//! to JSON for debugging:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Enums**: lowercase strings using `#[serde(rename_all = "lowercase")]`
//!
//! ```text
//! {
//!   "id": 1,
//!   "title": "iPhone 15 Pro",
//!   "price": 1200000,
//!   "category": "electronics",
//!   "description": "",
//!   "image": "📱",
//!   "seller": "TechUser",
//!   "location": "서울 강남구",
//!   "likes": 12,
//!   "is_new": true
//! }
//! ```

pub mod catalog;
pub mod profile;

pub use catalog::*;
pub use profile::*;
