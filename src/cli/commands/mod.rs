//! Command implementations.

/// Archive fetch command handler.
pub mod fetch;
