//! Product number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductNumber`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ProductNumberError {
    /// The input string is empty.
    #[error("product number cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("product number must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `A-Z0-9`.
    #[error("product number may only contain uppercase letters and digits (found {found:?})")]
    InvalidCharacter {
        /// First offending character.
        found: char,
    },
}

/// A catalog product number.
///
/// Short uppercase alphanumeric code printed on order sheets, e.g. `FUN001`.
///
/// ## Constraints
///
/// - Length: 1-32 characters
/// - Characters: ASCII uppercase letters and digits only
///
/// ## Examples
///
/// ```
/// use fundraiser_core::ProductNumber;
///
/// assert!(ProductNumber::parse("FUN001").is_ok());
/// assert!(ProductNumber::parse("fun1").is_err()); // lowercase
/// assert!(ProductNumber::parse("FUN-1").is_err()); // punctuation
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProductNumber(String);

impl ProductNumber {
    /// Maximum length of a product number.
    pub const MAX_LENGTH: usize = 32;

    /// Parse a `ProductNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is longer than 32 characters
    /// - Contains anything other than ASCII uppercase letters and digits
    pub fn parse(s: &str) -> Result<Self, ProductNumberError> {
        if s.is_empty() {
            return Err(ProductNumberError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(ProductNumberError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(found) = s
            .chars()
            .find(|c| !(c.is_ascii_uppercase() || c.is_ascii_digit()))
        {
            return Err(ProductNumberError::InvalidCharacter { found });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the product number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductNumber {
    type Err = ProductNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProductNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
