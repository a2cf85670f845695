//! Course catalog application library
//!
//! Hosts the application modules mounted by the catalog HTTP server.

pub mod modules;

/// Re-export commonly used types
pub use modules::*;
