//! Fixed catalog of supported cities and their BBC Weather location codes.
//!
//! The catalog is a closed set defined at compile time. Location codes are
//! opaque strings appended to the forecast base URL and must not change, as
//! they identify the exact pages the extractor is written against.

use std::fmt;

use crate::Result;
use crate::error::WeatherError;

/// A city in the fixed forecast catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Cairo,
    Mecca,
    AbuDhabi,
    London,
    NewYork,
    Brasilia,
}

impl City {
    /// Every city in the catalog, in report order
    pub const ALL: [City; 6] = [
        City::Cairo,
        City::Mecca,
        City::AbuDhabi,
        City::London,
        City::NewYork,
        City::Brasilia,
    ];

    /// Canonical identifier accepted by [`City::from_id`]
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            City::Cairo => "cairo",
            City::Mecca => "mecca",
            City::AbuDhabi => "abuDhabi",
            City::London => "london",
            City::NewYork => "newYork",
            City::Brasilia => "brasilia",
        }
    }

    /// BBC Weather location code used to build the forecast page URL
    #[must_use]
    pub fn location_code(self) -> &'static str {
        match self {
            City::Cairo => "360630",
            City::Mecca => "104515",
            City::AbuDhabi => "292968",
            City::London => "2643743",
            City::NewYork => "5128581",
            City::Brasilia => "3469058",
        }
    }

    /// Resolve a city identifier, failing with a lookup error for anything
    /// outside the catalog
    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            "cairo" => Ok(City::Cairo),
            "mecca" => Ok(City::Mecca),
            "abuDhabi" => Ok(City::AbuDhabi),
            "london" => Ok(City::London),
            "newYork" => Ok(City::NewYork),
            "brasilia" => Ok(City::Brasilia),
            other => Err(WeatherError::lookup(other)),
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_roundtrip() {
        for city in City::ALL {
            let resolved = City::from_id(city.id()).unwrap();
            assert_eq!(resolved, city);
        }
    }

    #[test]
    fn test_location_codes_non_empty() {
        for city in City::ALL {
            assert!(!city.location_code().is_empty());
        }
    }

    #[test]
    fn test_unknown_identifier_fails_lookup() {
        let err = City::from_id("atlantis").unwrap_err();
        assert!(matches!(err, WeatherError::Lookup { .. }));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // identifiers are canonical camelCase tokens, nothing else
        assert!(City::from_id("AbuDhabi").is_err());
        assert!(City::from_id("newyork").is_err());
    }
}
