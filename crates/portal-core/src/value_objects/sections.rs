//! Admin sections bitflags
//!
//! Each admin area is a flag; an access role maps to the set it may open.

use bitflags::bitflags;
use serde::{Serialize, Serializer};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Sections: u32 {
        /// Statistics and recent activity
        const DASHBOARD       = 1 << 0;
        /// Create, edit, delete events
        const EVENTS          = 1 << 1;
        /// Create, edit, delete news
        const NEWS            = 1 << 2;
        /// Create, edit, delete gallery items
        const GALLERY         = 1 << 3;
        /// Generic file uploads
        const UPLOADS         = 1 << 4;
        /// Own password change
        const CHANGE_PASSWORD = 1 << 5;
        /// Officer listing, deactivation and removal
        const PERSONNEL       = 1 << 6;
        /// Officer creation
        const ADD_PERSONNEL   = 1 << 7;

        /// Sections every signed-in officer may open
        const BASE = Self::DASHBOARD.bits()
            | Self::EVENTS.bits()
            | Self::NEWS.bits()
            | Self::GALLERY.bits()
            | Self::UPLOADS.bits()
            | Self::CHANGE_PASSWORD.bits();

        /// Personnel management
        const PERSONNEL_AREA = Self::PERSONNEL.bits() | Self::ADD_PERSONNEL.bits();
    }
}

impl Sections {
    /// Names of the individual sections that are set, in flag order
    pub fn names(&self) -> Vec<&'static str> {
        self.iter_names()
            .filter(|(name, _)| !matches!(*name, "BASE" | "PERSONNEL_AREA"))
            .map(|(name, _)| name)
            .collect()
    }
}

impl Serialize for Sections {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.names())
    }
}
