//! Priority and effort ratings attached to each task.
//!
//! Both ratings order by declaration (`Low < Medium < High`) and persist as
//! their rank so that storage ordering matches domain ordering.

use super::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency.
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Returns the storage rank.
    #[must_use]
    pub const fn rank(self) -> i16 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    /// Restores a priority from its storage rank.
    ///
    /// # Errors
    ///
    /// Returns [`ParseEnumError`] when the rank is out of range.
    pub fn from_rank(rank: i16) -> Result<Self, ParseEnumError> {
        match rank {
            0 => Ok(Self::Low),
            1 => Ok(Self::Medium),
            2 => Ok(Self::High),
            other => Err(ParseEnumError::new("priority", other.to_string())),
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            _ => Err(ParseEnumError::new("priority", value)),
        }
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated amount of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effort {
    /// Quick to finish.
    Low,
    /// Moderate amount of work.
    Medium,
    /// Substantial amount of work.
    High,
}

impl Effort {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Returns the storage rank.
    #[must_use]
    pub const fn rank(self) -> i16 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    /// Restores an effort level from its storage rank.
    ///
    /// # Errors
    ///
    /// Returns [`ParseEnumError`] when the rank is out of range.
    pub fn from_rank(rank: i16) -> Result<Self, ParseEnumError> {
        match rank {
            0 => Ok(Self::Low),
            1 => Ok(Self::Medium),
            2 => Ok(Self::High),
            other => Err(ParseEnumError::new("effort", other.to_string())),
        }
    }
}

impl TryFrom<&str> for Effort {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            _ => Err(ParseEnumError::new("effort", value)),
        }
    }
}

impl FromStr for Effort {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a comma-separated list of case-insensitive tokens.
///
/// An absent or blank input yields an empty list. Trailing commas are
/// ignored; any other empty segment is an unrecognized token.
///
/// # Errors
///
/// Returns the first [`ParseEnumError`] raised by an unrecognized or empty
/// token.
pub fn parse_csv<T>(csv: Option<&str>) -> Result<Vec<T>, ParseEnumError>
where
    T: FromStr<Err = ParseEnumError>,
{
    let Some(text) = csv.filter(|text| !text.trim().is_empty()) else {
        return Ok(Vec::new());
    };
    text.trim_end_matches(',')
        .split(',')
        .map(str::parse)
        .collect()
}
