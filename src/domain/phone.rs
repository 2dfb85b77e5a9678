//! PhoneNumber value object and region-aware parsing.
//!
//! Numbers are normalized to E.164 (`+` followed by the country dialing
//! prefix and the national number). National-format input is interpreted
//! against a caller-supplied default region; the default is explicit
//! configuration, never process-global state.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// E.164: '+', then 7 to 15 digits with no leading zero.
static E164_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{6,14}$").expect("Failed to compile E.164 regex"));

/// Supported regions: (ISO 3166-1 alpha-2 code, E.164 dialing prefix).
///
/// Shared-prefix plans (NANP) resolve to the first listed region; callers
/// comparing regions for the international flag compare dialing prefixes,
/// so US/CA numbers are never misclassified against each other.
const REGIONS: &[(&str, &str)] = &[
    ("US", "1"),
    ("CA", "1"),
    ("RU", "7"),
    ("ZA", "27"),
    ("NL", "31"),
    ("BE", "32"),
    ("FR", "33"),
    ("ES", "34"),
    ("IT", "39"),
    ("CH", "41"),
    ("AT", "43"),
    ("GB", "44"),
    ("DK", "45"),
    ("SE", "46"),
    ("NO", "47"),
    ("PL", "48"),
    ("DE", "49"),
    ("MX", "52"),
    ("BR", "55"),
    ("AU", "61"),
    ("NZ", "64"),
    ("SG", "65"),
    ("JP", "81"),
    ("KR", "82"),
    ("CN", "86"),
    ("IN", "91"),
    ("PT", "351"),
    ("IE", "353"),
    ("FI", "358"),
    ("UA", "380"),
    ("HK", "852"),
    ("AE", "971"),
    ("IL", "972"),
];

/// A phone region identified by its ISO 3166-1 alpha-2 code.
///
/// Only constructible from the supported-region table, so the dialing
/// prefix is always known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    code: &'static str,
    prefix: &'static str,
}

impl Region {
    /// United States, the fallback default region.
    pub const US: Region = Region {
        code: "US",
        prefix: "1",
    };

    /// Look up a region by its alpha-2 code (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownRegion` if the code is not in the
    /// supported-region table.
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        let upper = code.trim().to_uppercase();
        REGIONS
            .iter()
            .copied()
            .find(|(c, _)| *c == upper)
            .map(|(code, prefix)| Region { code, prefix })
            .ok_or_else(|| ValidationError::UnknownRegion(code.to_string()))
    }

    /// The alpha-2 region code, e.g. "GB".
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The E.164 dialing prefix, e.g. "44".
    pub fn dialing_prefix(&self) -> &'static str {
        self.prefix
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// A parsed, normalized phone number.
///
/// # Example
///
/// ```
/// use rolodex::domain::{PhoneNumber, Region};
///
/// let phone = PhoneNumber::parse("+44 20 7946 0958", Region::US).unwrap();
/// assert_eq!(phone.e164(), "+442079460958");
/// assert_eq!(phone.region().code(), "GB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    e164: String,
    region: Region,
}

impl PhoneNumber {
    /// Parse a raw phone number against a default region.
    ///
    /// Formatting characters (spaces, hyphens, parentheses, periods) are
    /// stripped. Input starting with '+' is matched against the dialing
    /// prefix table; anything else is treated as a national number in
    /// `default_region`, with a single leading trunk '0' dropped.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` when the cleaned number does
    /// not fit the E.164 shape or its prefix matches no known region.
    pub fn parse(raw: &str, default_region: Region) -> Result<Self, ValidationError> {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();

        if cleaned.is_empty() || cleaned[1..].contains('+') {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        let candidate = if let Some(rest) = cleaned.strip_prefix('+') {
            format!("+{}", rest)
        } else {
            let national = cleaned.strip_prefix('0').unwrap_or(&cleaned);
            format!("+{}{}", default_region.dialing_prefix(), national)
        };

        if !E164_REGEX.is_match(&candidate) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        let region = Self::region_for(&candidate[1..])
            .ok_or_else(|| ValidationError::InvalidPhone(raw.to_string()))?;

        Ok(Self {
            e164: candidate,
            region,
        })
    }

    /// Longest dialing-prefix match over the supported-region table.
    ///
    /// Only a strictly longer prefix replaces the current best, so regions
    /// sharing a prefix resolve to the first listed entry.
    fn region_for(digits: &str) -> Option<Region> {
        let mut best: Option<(&'static str, &'static str)> = None;
        for (code, prefix) in REGIONS.iter().copied() {
            if digits.starts_with(prefix)
                && best.map_or(true, |(_, current)| prefix.len() > current.len())
            {
                best = Some((code, prefix));
            }
        }
        best.map(|(code, prefix)| Region { code, prefix })
    }

    /// The canonical E.164 representation, e.g. "+14155552671".
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The region resolved from the dialing prefix.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Whether this number is international relative to `default_region`.
    ///
    /// Compares dialing prefixes rather than region codes so that regions
    /// sharing a numbering plan count as domestic for each other.
    pub fn is_international(&self, default_region: Region) -> bool {
        self.region.dialing_prefix() != default_region.dialing_prefix()
    }
}

// Serde support - serialize as the E.164 string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.e164.serialize(serializer)
    }
}

// Serde support - deserialize from string, E.164 input only
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::parse(&s, Region::US).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.e164)
    }
}
