use clap::Parser;

use crate::archive::{DEFAULT_API_BASE, Month, Player, Year};

#[derive(Parser, Debug)]
#[command(name = "pgnfetch")]
#[command(about = "Fetch a chess.com player's monthly PGN game archive")]
#[command(version)]
pub struct Args {
    /// chess.com username (letters, digits, '_' and '-')
    pub player: Player,

    /// Four-digit year, e.g. 2024
    pub year: Year,

    /// Two-digit month, 01 to 12
    pub month: Month,

    /// Anything after the month is accepted and ignored
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true)]
    pub ignored: Vec<String>,

    /// Print the PGN body after the status line
    #[arg(long)]
    pub body: bool,

    /// Suppress the spinner and hints on stderr
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Base URL of the published-data API
    #[arg(long, env = "PGNFETCH_API_BASE", default_value = DEFAULT_API_BASE, hide = true)]
    pub api_base: String,
}
