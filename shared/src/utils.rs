//! # Shared utility functions
//!
//! Display helpers used across the Omnivore frontend.
//!
//! ## Address formatting
//!
//! - [`format_address`] - shorten an address with an ellipsis (first N and last M characters)
//! - [`truncate_address`] - [`format_address`] with the navbar's default lengths
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0xAbCdEf1234567890abcdef1234567890ABCDEF12";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0xAbCd...EF12");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is too short to truncate meaningfully, it is returned as-is.
/// The empty string comes back empty.
///
/// # Arguments
///
/// * `address` - The wallet address to format
/// * `prefix_len` - Number of characters to show at the start
/// * `suffix_len` - Number of characters to show at the end
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0xAbCdEf1234567890abcdef1234567890ABCDEF12";
/// assert_eq!(format_address(addr, 6, 4), "0xAbCd...EF12");
/// assert_eq!(format_address(addr, 2, 2), "0x...12");
/// assert_eq!(format_address("short", 6, 4), "short");
/// assert_eq!(format_address("", 6, 4), "");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Return early if the address is too short to truncate meaningfully.
    // Also guard against individual lengths exceeding the address length to prevent panics.
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    // Safe to slice: hex addresses are ASCII, so byte indexing matches characters.
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with the default 6-character prefix and 4-character suffix.
///
/// This is the shape the navbar shows for a connected account.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0xAbCdEf1234567890abcdef1234567890ABCDEF12";
/// assert_eq!(truncate_address(addr), "0xAbCd...EF12");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0xAbCdEf1234567890abcdef1234567890ABCDEF12";
        assert_eq!(format_address(addr, 6, 4), "0xAbCd...EF12");
        assert_eq!(format_address(addr, 4, 4), "0xAb...EF12");
        assert_eq!(format_address(addr, 2, 2), "0x...12");
    }

    #[test]
    fn test_format_address_short_input() {
        assert_eq!(format_address("short", 6, 4), "short");
        assert_eq!(format_address("0x12", 6, 4), "0x12");
        assert_eq!(format_address("abcdefghij", 6, 4), "abcdefghij");
    }

    #[test]
    fn test_format_address_empty() {
        assert_eq!(format_address("", 6, 4), "");
        assert_eq!(truncate_address(""), "");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0xAbCdEf1234567890abcdef1234567890ABCDEF12";
        assert_eq!(truncate_address(addr), "0xAbCd...EF12");
    }
}
