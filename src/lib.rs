//! Roster library exports for the binary and integration tests

pub mod console;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::config::Frontend;
