//! sea-orm entities for the auth service database.

pub mod refresh_tokens;
pub mod users;
