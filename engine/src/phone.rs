//! Country registry and phone number composition.
//!
//! The backend wants E.164 (`+40712345678`); users type national digits with an
//! optional trunk `0`. [`Country::format_e164`] bridges the two and rejects
//! anything that cannot be a valid number for the selected country, so no
//! gateway call is made for garbage input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("phone number is empty")]
    Empty,
    #[error("a {country} number has {min} to {max} digits")]
    BadLength { country: &'static str, min: u8, max: u8 },
    #[error("national number cannot start with 0")]
    LeadingZero,
}

/// One selectable country: ISO 3166-1 alpha-2 code, display name, E.164
/// calling code, and the length bounds of its national significant number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub iso: &'static str,
    pub name: &'static str,
    pub calling_code: &'static str,
    nsn_min: u8,
    nsn_max: u8,
}

impl Country {
    /// Compose a canonical E.164 number from user input.
    ///
    /// Accepts national digits with any punctuation, an optional single trunk
    /// `0`, and tolerates the `+<calling code>` prefix the input field shows.
    pub fn format_e164(&self, input: &str) -> Result<String, PhoneError> {
        let mut digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

        // Input echoed back with the international prefix: drop it.
        if input.trim_start().starts_with('+') {
            if let Some(rest) = digits.strip_prefix(self.calling_code) {
                digits = rest.to_string();
            }
        }

        // At most one trunk zero.
        let national = digits.strip_prefix('0').unwrap_or(&digits);

        if national.is_empty() {
            return Err(PhoneError::Empty);
        }
        if national.starts_with('0') {
            return Err(PhoneError::LeadingZero);
        }
        let len = national.len() as u8;
        if len < self.nsn_min || len > self.nsn_max {
            return Err(PhoneError::BadLength {
                country: self.name,
                min: self.nsn_min,
                max: self.nsn_max,
            });
        }

        Ok(format!("+{}{}", self.calling_code, national))
    }

    /// Flag emoji from the ISO code via regional-indicator arithmetic.
    pub fn flag(&self) -> String {
        self.iso
            .chars()
            .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32) - ('A' as u32)))
            .collect()
    }
}

/// The default selection for the phone-entry screen.
pub fn default_country() -> &'static Country {
    find("RO").unwrap_or(&COUNTRIES[0])
}

/// Look up a country by its ISO code.
pub fn find(iso: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.iso.eq_ignore_ascii_case(iso))
}

/// Countries matching `query` by name, ISO code, or calling-code substring,
/// case-insensitively. An empty query matches everything.
pub fn search(query: &str) -> Vec<&'static Country> {
    let q = query.trim().to_ascii_lowercase();
    let q = q.trim_start_matches('+');
    COUNTRIES
        .iter()
        .filter(|c| {
            q.is_empty()
                || c.name.to_ascii_lowercase().contains(q)
                || c.iso.to_ascii_lowercase().contains(q)
                || c.calling_code.contains(q)
        })
        .collect()
}

const fn country(
    iso: &'static str,
    name: &'static str,
    calling_code: &'static str,
    nsn_min: u8,
    nsn_max: u8,
) -> Country {
    Country { iso, name, calling_code, nsn_min, nsn_max }
}

/// Selectable countries, alphabetical by name.
pub static COUNTRIES: &[Country] = &[
    country("AR", "Argentina", "54", 10, 10),
    country("AU", "Australia", "61", 9, 9),
    country("AT", "Austria", "43", 10, 11),
    country("BE", "Belgium", "32", 8, 9),
    country("BR", "Brazil", "55", 10, 11),
    country("BG", "Bulgaria", "359", 8, 9),
    country("CA", "Canada", "1", 10, 10),
    country("CN", "China", "86", 11, 11),
    country("HR", "Croatia", "385", 8, 9),
    country("CZ", "Czechia", "420", 9, 9),
    country("DK", "Denmark", "45", 8, 8),
    country("EG", "Egypt", "20", 10, 10),
    country("FI", "Finland", "358", 9, 10),
    country("FR", "France", "33", 9, 9),
    country("DE", "Germany", "49", 10, 11),
    country("GR", "Greece", "30", 10, 10),
    country("HU", "Hungary", "36", 9, 9),
    country("IN", "India", "91", 10, 10),
    country("IE", "Ireland", "353", 9, 9),
    country("IL", "Israel", "972", 9, 9),
    country("IT", "Italy", "39", 9, 10),
    country("JP", "Japan", "81", 10, 10),
    country("MX", "Mexico", "52", 10, 10),
    country("MD", "Moldova", "373", 8, 8),
    country("MA", "Morocco", "212", 9, 9),
    country("NL", "Netherlands", "31", 9, 9),
    country("NZ", "New Zealand", "64", 8, 10),
    country("NO", "Norway", "47", 8, 8),
    country("PL", "Poland", "48", 9, 9),
    country("PT", "Portugal", "351", 9, 9),
    country("RO", "Romania", "40", 9, 9),
    country("RU", "Russia", "7", 10, 10),
    country("SA", "Saudi Arabia", "966", 9, 9),
    country("RS", "Serbia", "381", 8, 9),
    country("SG", "Singapore", "65", 8, 8),
    country("SK", "Slovakia", "421", 9, 9),
    country("SI", "Slovenia", "386", 8, 8),
    country("ZA", "South Africa", "27", 9, 9),
    country("KR", "South Korea", "82", 9, 10),
    country("ES", "Spain", "34", 9, 9),
    country("SE", "Sweden", "46", 9, 9),
    country("CH", "Switzerland", "41", 9, 9),
    country("TR", "Turkey", "90", 10, 10),
    country("UA", "Ukraine", "380", 9, 9),
    country("AE", "United Arab Emirates", "971", 9, 9),
    country("GB", "United Kingdom", "44", 9, 10),
    country("US", "United States", "1", 10, 10),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trunk_zero_stripped_for_romania() {
        let ro = find("RO").unwrap();
        assert_eq!(ro.format_e164("0712345678").unwrap(), "+40712345678");
    }

    #[test]
    fn test_punctuation_ignored() {
        let ro = find("RO").unwrap();
        assert_eq!(ro.format_e164("0712 345-678").unwrap(), "+40712345678");
    }

    #[test]
    fn test_international_prefix_tolerated() {
        let ro = find("RO").unwrap();
        assert_eq!(ro.format_e164("+40712345678").unwrap(), "+40712345678");
    }

    #[test]
    fn test_bad_lengths_rejected() {
        let ro = find("RO").unwrap();
        assert!(matches!(ro.format_e164("071234"), Err(PhoneError::BadLength { .. })));
        assert!(matches!(
            ro.format_e164("07123456789012"),
            Err(PhoneError::BadLength { .. })
        ));
        assert_eq!(ro.format_e164(" - "), Err(PhoneError::Empty));
    }

    #[test]
    fn test_double_trunk_zero_rejected() {
        let ro = find("RO").unwrap();
        assert_eq!(ro.format_e164("00712345678"), Err(PhoneError::LeadingZero));
    }

    #[test]
    fn test_default_country_is_romania() {
        assert_eq!(default_country().iso, "RO");
    }

    #[test]
    fn test_search_by_name_iso_and_calling_code() {
        assert!(search("roman").iter().any(|c| c.iso == "RO"));
        assert!(search("ro").iter().any(|c| c.iso == "RO"));
        assert!(search("+40").iter().any(|c| c.iso == "RO"));
        assert!(search("UNITED").iter().any(|c| c.iso == "GB"));
        assert_eq!(search("").len(), COUNTRIES.len());
        assert!(search("zzzz").is_empty());
    }

    #[test]
    fn test_flag_emoji() {
        assert_eq!(find("RO").unwrap().flag(), "\u{1F1F7}\u{1F1F4}");
    }
}
