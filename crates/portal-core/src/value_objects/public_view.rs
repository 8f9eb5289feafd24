//! Public views that are cached and invalidated on content writes

use std::fmt;

/// A family of public pages whose cached renderings share an invalidation trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicView {
    Events,
    News,
    Gallery,
    Officers,
    Landing,
}

impl PublicView {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::News => "news",
            Self::Gallery => "gallery",
            Self::Officers => "officers",
            Self::Landing => "landing",
        }
    }
}

impl fmt::Display for PublicView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
