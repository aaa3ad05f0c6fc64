//! Courses service library
//!
//! Holds the courses module and the bootstrap shared by the `courses-app`
//! binary and the CLI.

pub mod bootstrap;
pub mod modules;

/// Re-export commonly used types
pub use modules::*;
