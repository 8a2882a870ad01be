//! # Formatting Utilities for the Marketplace
//!
//! Price formatting for product cards. For address formatting, use
//! [`shared::utils::format_address`] or [`shared::utils::truncate_address`].

use crate::config::Locale;

/// Format an integer with comma separators (e.g., 1234567 -> "1,234,567")
///
/// # Examples
///
/// ```rust
/// use market_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(100), "100");
/// ```
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();

    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result.chars().rev().collect()
}

/// Format a won price for the given locale
///
/// English puts the currency sign in front (`₩150,000`), Korean appends the
/// unit (`150,000원`).
pub fn format_price(won: u64, locale: Locale) -> String {
    match locale {
        Locale::English => format!("₩{}", format_number(won)),
        Locale::Korean => format!("{}원", format_number(won)),
    }
}
