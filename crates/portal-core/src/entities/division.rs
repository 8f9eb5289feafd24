//! Division entity - organizational unit an officer belongs to

use serde::Serialize;

pub const EXECUTIVE_BOARD: &str = "Executive Board";
pub const ADVISORY_BOARD: &str = "Advisory Board";
pub const INFORMATION_AND_CREATIVE_MEDIA: &str = "Information & Creative Media";

/// Operational divisions, in display order
pub const OPERATIONAL: [&str; 6] = [
    "Secretariat",
    INFORMATION_AND_CREATIVE_MEDIA,
    "Business Affairs",
    "Education",
    "Membership & Internal Relations",
    "Public Relations & Partnership",
];

/// A division. Boards hold the leadership and are not counted as operational divisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Division {
    pub id: i64,
    pub name: String,
    pub is_board: bool,
    pub sort_order: i32,
}

impl Division {
    #[inline]
    pub fn is_operational(&self) -> bool {
        !self.is_board
    }
}
