//! Access role - the coarse authorization level stored on every officer

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Sections;

/// Authorization level of an officer.
///
/// The role is derived from the officer's position when the officer is created
/// and is always re-read from the store when a request is authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessRole {
    Staff,
    Head,
    Core,
    Admin,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown access role: {0}")]
pub struct UnknownAccessRole(pub String);

impl AccessRole {
    pub const ALL: [AccessRole; 4] = [Self::Staff, Self::Head, Self::Core, Self::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Staff => "STAFF",
            Self::Head => "HEAD",
            Self::Core => "CORE",
            Self::Admin => "ADMIN",
        }
    }

    /// Admin sections this role may open.
    pub fn sections(self) -> Sections {
        match self {
            Self::Staff => Sections::BASE,
            Self::Head | Self::Core | Self::Admin => Sections::BASE | Sections::PERSONNEL_AREA,
        }
    }

    #[inline]
    pub fn can_access(self, section: Sections) -> bool {
        self.sections().contains(section)
    }
}

impl fmt::Display for AccessRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessRole {
    type Err = UnknownAccessRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAccessRole(s.to_string()))
    }
}
