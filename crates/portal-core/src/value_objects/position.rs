//! Organizational position held by an officer

use std::fmt;

use serde::{Deserialize, Serialize};

use super::AccessRole;
use crate::entities::division;

/// Position within the organization.
///
/// The known positions drive the access role, the forced division, and the
/// uniqueness rules. Any other title is kept verbatim as [`Position::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    Staff,
    HeadOfDivision,
    WebMaster,
    Director,
    ViceDirectorI,
    ViceDirectorII,
    ViceDirectorIII,
    Advisor,
    Counselor,
    Other(String),
}

impl Position {
    /// Positions that at most one active officer may hold
    pub const SINGLETONS: [Position; 6] = [
        Self::Director,
        Self::ViceDirectorI,
        Self::ViceDirectorII,
        Self::ViceDirectorIII,
        Self::Advisor,
        Self::Counselor,
    ];

    /// Known positions, in the order the personnel form offers them
    pub const KNOWN: [Position; 9] = [
        Self::Staff,
        Self::HeadOfDivision,
        Self::WebMaster,
        Self::Director,
        Self::ViceDirectorI,
        Self::ViceDirectorII,
        Self::ViceDirectorIII,
        Self::Advisor,
        Self::Counselor,
    ];

    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        Self::KNOWN
            .into_iter()
            .find(|known| known.as_str() == label)
            .unwrap_or_else(|| Self::Other(label.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Staff => "Staff",
            Self::HeadOfDivision => "Head of Division",
            Self::WebMaster => "Web Master",
            Self::Director => "Director",
            Self::ViceDirectorI => "Vice Director I",
            Self::ViceDirectorII => "Vice Director II",
            Self::ViceDirectorIII => "Vice Director III",
            Self::Advisor => "Advisor",
            Self::Counselor => "Counselor",
            Self::Other(label) => label,
        }
    }

    /// Organization-wide unique while active
    #[inline]
    pub fn is_singleton(&self) -> bool {
        Self::SINGLETONS.contains(self)
    }

    /// Unique per division while active
    #[inline]
    pub fn is_division_head(&self) -> bool {
        matches!(self, Self::HeadOfDivision)
    }

    pub fn access_role(&self) -> AccessRole {
        match self {
            Self::WebMaster => AccessRole::Admin,
            Self::Director
            | Self::ViceDirectorI
            | Self::ViceDirectorII
            | Self::ViceDirectorIII
            | Self::Advisor
            | Self::Counselor => AccessRole::Core,
            Self::HeadOfDivision => AccessRole::Head,
            Self::Staff | Self::Other(_) => AccessRole::Staff,
        }
    }

    /// Division the position always belongs to, overriding the submitted one
    pub fn forced_division(&self) -> Option<&'static str> {
        match self {
            Self::WebMaster => Some(division::INFORMATION_AND_CREATIVE_MEDIA),
            Self::Advisor | Self::Counselor => Some(division::ADVISORY_BOARD),
            Self::Director | Self::ViceDirectorI | Self::ViceDirectorII | Self::ViceDirectorIII => {
                Some(division::EXECUTIVE_BOARD)
            }
            _ => None,
        }
    }
}

impl From<String> for Position {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.as_str().to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
