//! Convention and target tags for property-name casing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConventionerError;

/// Naming convention detected from a tree's keys.
///
/// The serialized form uses the wire tags of the original API
/// (`"_"`, `"cC"`, `"PC"`, `"neutral"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Convention {
    /// snake_case: words lowercase, joined by underscore.
    #[serde(rename = "_")]
    Snake,
    /// camelCase: first word lowercase, subsequent words capitalized.
    #[serde(rename = "cC")]
    Camel,
    /// PascalCase: every word capitalized, no separator.
    #[serde(rename = "PC")]
    Pascal,
    /// No recognizable convention (empty mapping, or keys with no
    /// delimiter and no case signal).
    #[serde(rename = "neutral")]
    Neutral,
}

impl Convention {
    /// Get the wire tag for this convention.
    pub fn tag(&self) -> &'static str {
        match self {
            Convention::Snake => "_",
            Convention::Camel => "cC",
            Convention::Pascal => "PC",
            Convention::Neutral => "neutral",
        }
    }

    /// Get a human-readable label for this convention.
    pub fn label(&self) -> &'static str {
        match self {
            Convention::Snake => "snake_case",
            Convention::Camel => "camelCase",
            Convention::Pascal => "PascalCase",
            Convention::Neutral => "neutral",
        }
    }

    /// Returns true if no convention was recognized.
    pub fn is_neutral(&self) -> bool {
        matches!(self, Convention::Neutral)
    }
}

impl Default for Convention {
    fn default() -> Self {
        Convention::Neutral
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Explicitly requested output convention.
///
/// All three conventions are reachable through the typed API. The string-tag
/// surface ([`Target::from_str`]) accepts only the documented external tags:
/// `"_"` for snake_case and `"PC"` for PascalCase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// Force snake_case output.
    #[serde(rename = "_")]
    Snake,
    /// Force camelCase output.
    #[serde(rename = "cC")]
    Camel,
    /// Force PascalCase output.
    #[serde(rename = "PC")]
    Pascal,
}

impl Target {
    /// Get the wire tag for this target.
    pub fn tag(&self) -> &'static str {
        match self {
            Target::Snake => "_",
            Target::Camel => "cC",
            Target::Pascal => "PC",
        }
    }

    /// The convention this target produces.
    pub fn convention(&self) -> Convention {
        match self {
            Target::Snake => Convention::Snake,
            Target::Camel => Convention::Camel,
            Target::Pascal => Convention::Pascal,
        }
    }
}

impl FromStr for Target {
    type Err = ConventionerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "_" => Ok(Target::Snake),
            "PC" => Ok(Target::Pascal),
            other => Err(ConventionerError::UnknownTarget(other.to_string())),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
