//! Authentication utilities

mod password;
mod session;

pub use password::{hash_password, verify_credential, verify_password, LegacyMatch};
pub use session::{IssuedSession, SessionClaims, SessionTokenService};
