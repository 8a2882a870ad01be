//! Utilities

pub mod constants;
pub mod dom;
pub mod format;
pub mod url;
