use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating administrative region codes (kode wilayah)
    /// Either plain digits or the dotted Kemendagri notation, 2/5/8/13 characters
    /// - Valid: "11", "11010", "11010010", "1101001002001", "11.01", "11.01.01", "11.01.01.2001"
    /// - Invalid: "1", "1101", "11.0101", "11-01", "AB", " 11"
    pub static ref REGION_CODE_REGEX: Regex = Regex::new(
        r"^(?:\d{2}|\d{5}|\d{8}|\d{13}|\d{2}\.\d{2}|\d{2}\.\d{2}\.\d{2}|\d{2}\.\d{2}\.\d{2}\.\d{4})$"
    )
    .unwrap();
}

/// Escape `%`, `_` and `\` so user input matches literally inside a LIKE pattern.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_code_regex_valid() {
        assert!(REGION_CODE_REGEX.is_match("11"));
        assert!(REGION_CODE_REGEX.is_match("11010"));
        assert!(REGION_CODE_REGEX.is_match("11010010"));
        assert!(REGION_CODE_REGEX.is_match("1101001002001"));
        assert!(REGION_CODE_REGEX.is_match("11.01"));
        assert!(REGION_CODE_REGEX.is_match("11.01.01"));
        assert!(REGION_CODE_REGEX.is_match("11.01.01.2001"));
    }

    #[test]
    fn test_region_code_regex_invalid() {
        assert!(!REGION_CODE_REGEX.is_match("")); // empty
        assert!(!REGION_CODE_REGEX.is_match("1")); // too short
        assert!(!REGION_CODE_REGEX.is_match("1101")); // 4 digits
        assert!(!REGION_CODE_REGEX.is_match("11.0101")); // misplaced separator
        assert!(!REGION_CODE_REGEX.is_match("11-01")); // wrong separator
        assert!(!REGION_CODE_REGEX.is_match("AB")); // letters
        assert!(!REGION_CODE_REGEX.is_match("11.01.01.20011")); // 14 chars
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("aceh"), "aceh");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
