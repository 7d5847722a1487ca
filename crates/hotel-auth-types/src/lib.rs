//! Auth types shared across hotel services.
//!
//! Provides JWT claim layout and verification, plus the bearer-token `Identity` extractor.

pub mod identity;
pub mod token;
