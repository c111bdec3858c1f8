//! Fetch-size hint value.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// Number of rows a driver retrieves per network round-trip while streaming
/// a result set.
///
/// The value is a hint whose meaning is driver-specific. This type does not
/// bound it; the only constraint is that it cannot be negative, which the
/// unsigned representation already enforces. [`FetchSize::DRIVER_DEFAULT`]
/// (`0`) conventionally tells the driver to use its own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct FetchSize(u32);

impl FetchSize {
    /// Let the driver pick its own fetch size.
    pub const DRIVER_DEFAULT: Self = Self(0);

    #[must_use]
    pub const fn new(rows: u32) -> Self {
        Self(rows)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_driver_default(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for FetchSize {
    fn from(rows: u32) -> Self {
        Self(rows)
    }
}

impl From<FetchSize> for u32 {
    fn from(size: FetchSize) -> Self {
        size.0
    }
}

impl TryFrom<i64> for FetchSize {
    type Error = Error;

    fn try_from(rows: i64) -> Result<Self, Self::Error> {
        if rows < 0 {
            return Err(Error::invalid_fetch_size(
                rows.to_string(),
                "must not be negative",
            ));
        }
        u32::try_from(rows)
            .map(Self)
            .map_err(|_| Error::invalid_fetch_size(rows.to_string(), "exceeds u32::MAX"))
    }
}

impl FromStr for FetchSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let rows: i64 = trimmed
            .parse()
            .map_err(|e| Error::invalid_fetch_size(trimmed, format!("{e}")))?;
        Self::try_from(rows)
    }
}

impl fmt::Display for FetchSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_default() {
        assert_eq!(FetchSize::DRIVER_DEFAULT.get(), 0);
        assert!(FetchSize::DRIVER_DEFAULT.is_driver_default());
        assert_eq!(FetchSize::default(), FetchSize::DRIVER_DEFAULT);
        assert!(!FetchSize::new(1).is_driver_default());
    }

    #[test]
    fn test_from_u32_roundtrip() {
        let size = FetchSize::from(500);
        assert_eq!(u32::from(size), 500);
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!("500".parse::<FetchSize>().unwrap(), FetchSize::new(500));
        assert_eq!(" 0 ".parse::<FetchSize>().unwrap(), FetchSize::DRIVER_DEFAULT);
    }

    #[test]
    fn test_parse_negative() {
        let err = "-1".parse::<FetchSize>().unwrap_err();
        assert!(err.is_invalid_fetch_size());
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_parse_not_a_number() {
        let err = "lots".parse::<FetchSize>().unwrap_err();
        assert!(err.is_invalid_fetch_size());
        assert!(err.to_string().contains("lots"));
    }

    #[test]
    fn test_try_from_i64_overflow() {
        let err = FetchSize::try_from(i64::from(u32::MAX) + 1).unwrap_err();
        assert!(err.is_invalid_fetch_size());
    }

    #[test]
    fn test_display() {
        assert_eq!(FetchSize::new(1000).to_string(), "1000");
    }
}
