//! # Shared Marketplace Types
//!
//! Platform-independent types and helpers used by the `market-web` frontend.
//! Nothing in this crate touches the browser, so everything here is testable
//! on the host.
//!
//! ## Structure
//!
//! - **[`dto`]**: Catalog and profile data
//!   - **[`dto::catalog`]**: Categories, listings, filtering and the sell-form draft
//!   - **[`dto::profile`]**: Profile summary and menu entries
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with the 6/4 convention
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::catalog::{Catalog, CategoryFilter};
//! use shared::utils::truncate_address;
//!
//! let catalog = Catalog::sample();
//! let phones = catalog.filtered("iphone", CategoryFilter::All);
//! assert_eq!(phones.len(), 1);
//!
//! let display = truncate_address("0x1234567890abcdef1234567890abcdef12345678");
//! assert_eq!(display, "0x1234...5678");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
