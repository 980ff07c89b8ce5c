use serde::Serialize;

use crate::shared::validation::REGION_CODE_REGEX;

/// Administrative level of a region, inferred from the length of its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionLevel {
    /// Provinsi (2 characters)
    Province,
    /// Kabupaten/Kota (5 characters)
    Regency,
    /// Kecamatan (8 characters)
    District,
    /// Desa/Kelurahan (13 characters)
    Village,
    Unknown,
}

impl RegionLevel {
    /// Classify a code by its length alone.
    ///
    /// Digit values are never inspected, so two codes of equal length always
    /// land on the same level.
    pub fn from_code(code: &str) -> Self {
        match code.chars().count() {
            2 => RegionLevel::Province,
            5 => RegionLevel::Regency,
            8 => RegionLevel::District,
            13 => RegionLevel::Village,
            _ => RegionLevel::Unknown,
        }
    }

    /// Map the numeric `level` column of the level-3/4 table.
    pub fn from_tag(tag: i16) -> Self {
        match tag {
            1 => RegionLevel::Province,
            2 => RegionLevel::Regency,
            3 => RegionLevel::District,
            4 => RegionLevel::Village,
            _ => RegionLevel::Unknown,
        }
    }

    /// Levels that own a row in a dedicated boundary table.
    pub fn is_leaf(self) -> bool {
        matches!(self, RegionLevel::District | RegionLevel::Village)
    }

    pub fn tag(self) -> Option<i16> {
        match self {
            RegionLevel::Province => Some(1),
            RegionLevel::Regency => Some(2),
            RegionLevel::District => Some(3),
            RegionLevel::Village => Some(4),
            RegionLevel::Unknown => None,
        }
    }

    pub fn code_len(self) -> Option<usize> {
        match self {
            RegionLevel::Province => Some(2),
            RegionLevel::Regency => Some(5),
            RegionLevel::District => Some(8),
            RegionLevel::Village => Some(13),
            RegionLevel::Unknown => None,
        }
    }

    pub fn parent(self) -> Option<Self> {
        match self {
            RegionLevel::Regency => Some(RegionLevel::Province),
            RegionLevel::District => Some(RegionLevel::Regency),
            RegionLevel::Village => Some(RegionLevel::District),
            RegionLevel::Province | RegionLevel::Unknown => None,
        }
    }

    pub fn child(self) -> Option<Self> {
        match self {
            RegionLevel::Province => Some(RegionLevel::Regency),
            RegionLevel::Regency => Some(RegionLevel::District),
            RegionLevel::District => Some(RegionLevel::Village),
            RegionLevel::Village | RegionLevel::Unknown => None,
        }
    }

    /// Display label used across the Indonesian datasets
    pub fn label(self) -> &'static str {
        match self {
            RegionLevel::Province => "Provinsi",
            RegionLevel::Regency => "Kabupaten/Kota",
            RegionLevel::District => "Kecamatan",
            RegionLevel::Village => "Desa/Kelurahan",
            RegionLevel::Unknown => "Unknown",
        }
    }
}

/// A well-formed region code (kode wilayah).
///
/// Only codes of a known level survive parsing, so a `RegionCode` can always
/// be routed to a backing table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionCode {
    code: String,
    level: RegionLevel,
}

impl RegionCode {
    pub fn parse(raw: &str) -> Option<Self> {
        let code = raw.trim();
        if !REGION_CODE_REGEX.is_match(code) {
            return None;
        }

        match RegionLevel::from_code(code) {
            RegionLevel::Unknown => None,
            level => Some(Self {
                code: code.to_string(),
                level,
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn level(&self) -> RegionLevel {
        self.level
    }
}

impl std::fmt::Display for RegionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_length() {
        assert_eq!(RegionLevel::from_code("11"), RegionLevel::Province);
        assert_eq!(RegionLevel::from_code("11010"), RegionLevel::Regency);
        assert_eq!(RegionLevel::from_code("11010010"), RegionLevel::District);
        assert_eq!(RegionLevel::from_code("1101001002001"), RegionLevel::Village);
        assert_eq!(RegionLevel::from_code("11.01"), RegionLevel::Regency);
        assert_eq!(RegionLevel::from_code(""), RegionLevel::Unknown);
        assert_eq!(RegionLevel::from_code("1101"), RegionLevel::Unknown);
        assert_eq!(RegionLevel::from_code("11010010200101"), RegionLevel::Unknown);
    }

    #[test]
    fn test_classification_ignores_content() {
        // Same length, different content: same level
        for code in ["11", "99", "ab", "  ", "0."] {
            assert_eq!(RegionLevel::from_code(code), RegionLevel::Province);
        }
        for code in ["11010", "xxxxx", "11.01"] {
            assert_eq!(RegionLevel::from_code(code), RegionLevel::Regency);
        }
    }

    #[test]
    fn test_leaf_levels() {
        assert!(!RegionLevel::Province.is_leaf());
        assert!(!RegionLevel::Regency.is_leaf());
        assert!(RegionLevel::District.is_leaf());
        assert!(RegionLevel::Village.is_leaf());
        assert!(!RegionLevel::Unknown.is_leaf());
    }

    #[test]
    fn test_level_navigation() {
        assert_eq!(RegionLevel::Province.child(), Some(RegionLevel::Regency));
        assert_eq!(RegionLevel::Village.child(), None);
        assert_eq!(RegionLevel::District.parent(), Some(RegionLevel::Regency));
        assert_eq!(RegionLevel::Province.parent(), None);
        assert_eq!(RegionLevel::from_tag(3), RegionLevel::District);
        assert_eq!(RegionLevel::from_tag(4), RegionLevel::Village);
        assert_eq!(RegionLevel::from_tag(9), RegionLevel::Unknown);
        assert_eq!(RegionLevel::Village.tag(), Some(4));
    }

    #[test]
    fn test_labels() {
        assert_eq!(RegionLevel::Province.label(), "Provinsi");
        assert_eq!(RegionLevel::Regency.label(), "Kabupaten/Kota");
        assert_eq!(RegionLevel::District.label(), "Kecamatan");
        assert_eq!(RegionLevel::Village.label(), "Desa/Kelurahan");
    }

    #[test]
    fn test_parse_rejects_malformed_codes() {
        assert!(RegionCode::parse("ab").is_none());
        assert!(RegionCode::parse("1101").is_none());
        assert!(RegionCode::parse("11-01").is_none());
        assert!(RegionCode::parse("").is_none());
    }

    #[test]
    fn test_parse_trims_and_keeps_level() {
        let code = RegionCode::parse(" 11010010 ").unwrap();
        assert_eq!(code.as_str(), "11010010");
        assert_eq!(code.level(), RegionLevel::District);
    }
}
