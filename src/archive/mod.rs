//! Monthly game archives on the chess.com public API.

mod client;
mod error;

pub use client::{ArchiveClient, ArchiveResponse};
pub use error::{ArgumentError, FetchError};

use std::fmt;
use std::str::FromStr;

/// Base of the chess.com published-data API.
pub const DEFAULT_API_BASE: &str = "https://api.chess.com/pub";

/// A chess.com username, kept exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player(String);

impl FromStr for Player {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ArgumentError::EmptyPlayer);
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ArgumentError::InvalidPlayer(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Four-digit year of an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Year(String);

impl FromStr for Year {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(ArgumentError::InvalidYear(s.to_string()))
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Two-digit month of an archive (`01` to `12`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Month(String);

impl FromStr for Month {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let in_range = s.len() == 2
            && s.bytes().all(|b| b.is_ascii_digit())
            && matches!(s.parse::<u8>(), Ok(1..=12));

        if in_range {
            Ok(Self(s.to_string()))
        } else {
            Err(ArgumentError::InvalidMonth(s.to_string()))
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One player's games for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRequest {
    pub player: Player,
    pub year: Year,
    pub month: Month,
}

impl ArchiveRequest {
    pub const fn new(player: Player, year: Year, month: Month) -> Self {
        Self {
            player,
            year,
            month,
        }
    }

    /// PGN download URL for this archive under the given API base.
    ///
    /// Arguments are substituted literally; a trailing `/` on the base is ignored.
    pub fn pgn_url(&self, api_base: &str) -> String {
        format!(
            "{}/player/{}/games/{}/{}/pgn",
            api_base.trim_end_matches('/'),
            self.player,
            self.year,
            self.month
        )
    }
}
