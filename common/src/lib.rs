pub mod config;
pub mod errors;
pub mod util;

/// Row id of a stored client record.
pub type ClientId = i64;
