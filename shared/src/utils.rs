//! # Shared Utility Functions
//!
//! Display helpers used by the console when echoing secrets.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::mask_secret;
//!
//! let token = "eyJhbGciOiJIUzI1NiJ9.payload.signature";
//! assert_eq!(mask_secret(token, 6, 4), "eyJhbG...ture");
//! ```

/// Mask a secret by keeping the first `prefix_len` and last `suffix_len` characters.
///
/// Secrets too short to hide anything are replaced entirely with `***`.
/// Works on characters, so non-ASCII input never panics.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_secret;
///
/// assert_eq!(mask_secret("abcdefghijkl", 3, 3), "abc...jkl");
/// assert_eq!(mask_secret("short", 4, 4), "***");
/// ```
pub fn mask_secret(secret: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = secret.chars().collect();

    if chars.len() <= prefix_len + suffix_len {
        return "***".to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Mask a bearer token with the default 6-character prefix and 4-character suffix.
pub fn mask_token(token: &str) -> String {
    mask_secret(token, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        let token = "eyJhbGciOiJIUzI1NiJ9.payload.signature";
        assert_eq!(mask_secret(token, 6, 4), "eyJhbG...ture");
        assert_eq!(mask_secret(token, 2, 2), "ey...re");
    }

    #[test]
    fn test_mask_secret_short() {
        assert_eq!(mask_secret("short", 4, 4), "***");
        assert_eq!(mask_secret("", 0, 0), "***");
    }

    #[test]
    fn test_mask_secret_multibyte() {
        assert_eq!(mask_secret("店铺令牌密钥数据", 2, 2), "店铺...数据");
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("0123456789abcdef"), "012345...cdef");
    }
}
