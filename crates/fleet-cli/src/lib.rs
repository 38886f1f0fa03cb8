//! Library components of the fleet operations CLI.

pub mod logging;
pub mod summary;
pub mod types;
