//! Domain model shared by both stores

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Checklist used when a stored level no longer parses (e.g. a database edited
/// outside the application). Unreachable through the normal insert paths, which
/// constrain the level to the three known values.
pub const DEFAULT_CHECKLIST: &str = "General Onboarding";

/// Experience level of an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Mid => "Mid",
            Self::Senior => "Senior",
        }
    }

    /// The canned onboarding checklist for this level
    pub fn checklist(&self) -> &'static str {
        match self {
            Self::Junior => "Introduction, Company Tour, Basic Training",
            Self::Mid => "Team Integration, Project Assignment",
            Self::Senior => "Leadership Training, Strategy Meetings",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = Error;

    /// Parses with the same normalization the console applies to user input:
    /// first letter upper-cased, the rest lowered ("junior" and "JUNIOR" both
    /// parse as Junior).
    fn from_str(s: &str) -> Result<Self> {
        match capitalize(s.trim()).as_str() {
            "Junior" => Ok(Self::Junior),
            "Mid" => Ok(Self::Mid),
            "Senior" => Ok(Self::Senior),
            _ => Err(Error::InvalidExperienceLevel(s.to_string())),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checklist for a raw stored level string, falling back to the
/// documented default when the text does not parse.
pub fn checklist_for_raw(level: &str) -> &'static str {
    level
        .parse::<ExperienceLevel>()
        .map(|l| l.checklist())
        .unwrap_or(DEFAULT_CHECKLIST)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// An employee row as stored in the relational store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub experience_level: ExperienceLevel,
}

/// A feedback row as stored in the relational store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: i64,
    pub employee_id: i64,
    pub rating: u8,
    pub comments: String,
}
