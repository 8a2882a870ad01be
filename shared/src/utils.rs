//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting EVM wallet addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - [`format_address`] with the 6/4 widths used by the header
//!
//! Formatting never changes the stored account, it only produces a display string.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x1234567890abcdef1234567890abcdef12345678";
//! assert_eq!(format_address(address, 6, 4), "0x1234...5678");
//! ```

/// Characters kept at the start of a truncated address (`0x` plus four hex digits).
pub const ADDRESS_PREFIX_LEN: usize = 6;

/// Characters kept at the end of a truncated address.
pub const ADDRESS_SUFFIX_LEN: usize = 4;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address has `prefix_len + suffix_len` characters or fewer, it is returned as-is.
/// Lengths are counted in characters, so a non-ASCII label never splits a code point.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x1234567890abcdef1234567890abcdef12345678";
/// assert_eq!(format_address(addr, 6, 4), "0x1234...5678");
/// assert_eq!(format_address(addr, 4, 4), "0x12...5678");
/// assert_eq!(format_address("0xabc", 6, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();

    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with the default 6-character prefix and 4-character suffix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(
///     truncate_address("0x1234567890abcdef1234567890abcdef12345678"),
///     "0x1234...5678"
/// );
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN)
}
