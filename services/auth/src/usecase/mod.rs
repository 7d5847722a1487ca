pub mod account;
pub mod session;
pub mod token;
