//! # pgnfetch - chess.com monthly archive fetcher
//!
//! `pgnfetch` downloads one month of a player's games, in PGN, from the
//! chess.com published-data API and reports the outcome.
//!
//! ## Quick Start
//!
//! ```bash
//! # Fetch January 2024 for a player and print the status
//! pgnfetch magnuscarlsen 2024 01
//!
//! # Also print the PGN itself
//! pgnfetch --body magnuscarlsen 2024 01 > games.pgn
//! ```
//!
//! ## Exit codes
//!
//! - `0` the archive was fetched with a 2xx status
//! - `2` missing or malformed arguments
//! - sysexits codes (`66`, `68`, `69`, `70`, `74`, `75`) for fetch failures

/// Archive identifiers, URL construction and the HTTP client.
pub mod archive;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// Terminal UI components (spinner, colors).
pub mod ui;
