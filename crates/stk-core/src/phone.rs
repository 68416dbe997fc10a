//! # Phone Normalization
//!
//! Canonicalizes Kenyan mobile numbers to the `254XXXXXXXXX` format the
//! SwiftWallet gateway expects.

/// Normalize a raw phone string to international `254XXXXXXXXX` format.
///
/// All non-digit characters are stripped first, then exactly three shapes
/// are accepted:
///
/// - 9 digits starting with `7` (e.g. `712345678`) — `254` prepended
/// - 10 digits starting with `07` (e.g. `0712345678`) — leading `0` replaced
/// - 12 digits starting with `254` — passed through unchanged
///
/// Anything else returns `None`. Ambiguous shapes (an 11-digit number
/// starting with `7`, a 9-digit number starting with `1`) are rejected, not
/// guessed at.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 9 && digits.starts_with('7') {
        Some(format!("254{digits}"))
    } else if digits.len() == 10 && digits.starts_with("07") {
        Some(format!("254{}", &digits[1..]))
    } else if digits.len() == 12 && digits.starts_with("254") {
        Some(digits)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_digit_form() {
        assert_eq!(normalize_phone("712345678").as_deref(), Some("254712345678"));
    }

    #[test]
    fn test_ten_digit_form() {
        assert_eq!(normalize_phone("0712345678").as_deref(), Some("254712345678"));
    }

    #[test]
    fn test_international_form_unchanged() {
        assert_eq!(normalize_phone("254712345678").as_deref(), Some("254712345678"));
    }

    #[test]
    fn test_strips_non_digits() {
        assert_eq!(normalize_phone("+254 712-345-678").as_deref(), Some("254712345678"));
        assert_eq!(normalize_phone("0712 345 678").as_deref(), Some("254712345678"));
        assert_eq!(normalize_phone("(07) 1234-5678").as_deref(), Some("254712345678"));
    }

    #[test]
    fn test_rejects_wrong_lengths() {
        assert_eq!(normalize_phone("71234567"), None); // 8 digits
        assert_eq!(normalize_phone("71234567890"), None); // 11 digits starting 7
        assert_eq!(normalize_phone("2547123456789"), None); // 13 digits
        assert_eq!(normalize_phone(""), None);
    }

    #[test]
    fn test_rejects_wrong_prefixes() {
        assert_eq!(normalize_phone("112345678"), None); // 9 digits, not 7xx
        assert_eq!(normalize_phone("0812345678"), None); // 10 digits, not 07x
        assert_eq!(normalize_phone("255712345678"), None); // 12 digits, not 254
    }

    #[test]
    fn test_rejects_non_numeric_garbage() {
        assert_eq!(normalize_phone("not a phone"), None);
        assert_eq!(normalize_phone("+-()"), None);
    }
}
