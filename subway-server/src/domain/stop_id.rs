//! Stop identifier type.

use std::fmt;

/// Error returned when parsing an invalid stop id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// A valid GTFS stop identifier.
///
/// MTA stop ids are short ASCII alphanumeric strings: `A46` or `140`
/// for a parent station, `A46N` / `A46S` for its platform children.
/// This type guarantees that any `StopId` value is valid by construction.
///
/// # Examples
///
/// ```
/// use subway_server::domain::StopId;
///
/// let nostrand = StopId::parse("A46").unwrap();
/// assert_eq!(nostrand.as_str(), "A46");
///
/// // Empty ids are rejected
/// assert!(StopId::parse("").is_err());
///
/// // Punctuation is rejected
/// assert!(StopId::parse("A-46").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StopId(String);

/// Longest stop id we accept. MTA ids are at most 4 characters; the
/// margin leaves room for other GTFS feeds without admitting garbage.
const MAX_LEN: usize = 8;

impl StopId {
    /// Parse a stop id from a string.
    ///
    /// The input must be 1 to 8 ASCII alphanumeric characters.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_LEN {
            return Err(InvalidStopId {
                reason: "must be at most 8 characters",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidStopId {
                reason: "must be ASCII letters and digits only",
            });
        }

        Ok(StopId(s.to_string()))
    }

    /// Returns the stop id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid stop ids: 1-8 alphanumeric chars.
    fn valid_stop_id() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z0-9]{1,8}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_stop_id()) {
            let id = StopId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Any valid id can be parsed
        #[test]
        fn valid_always_parses(s in valid_stop_id()) {
            prop_assert!(StopId::parse(&s).is_ok());
        }

        /// Over-long strings are always rejected
        #[test]
        fn too_long_rejected(s in "[A-Za-z0-9]{9,20}") {
            prop_assert!(StopId::parse(&s).is_err());
        }

        /// Strings containing punctuation are rejected
        #[test]
        fn punctuation_rejected(s in "[A-Za-z0-9]{0,3}[-_. ][A-Za-z0-9]{0,3}") {
            prop_assert!(StopId::parse(&s).is_err());
        }
    }
}
