//! Command-line interface for userdeck.
//!
//! Everything has a sensible default; running the binary with no flags
//! fetches 80 users from the public random-data-api endpoint.

use clap::Parser;

use crate::api::{DEFAULT_BATCH_SIZE, DEFAULT_ENDPOINT};
use crate::styles::ThemeType;

#[derive(Debug, Parser)]
#[command(
    name = "userdeck",
    version,
    about = "Browse random mock user profiles in your terminal"
)]
pub struct Cli {
    /// Number of users to request per fetch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE, value_parser = clap::value_parser!(u64).range(1..=500))]
    pub size: u64,

    /// Override the user API endpoint (query `size=<n>` is appended)
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Color theme: dark, light, or nocolor
    #[arg(long, default_value = "dark")]
    pub theme: String,
}

impl Cli {
    /// Parse the `--theme` flag; unknown values fall back to dark.
    pub fn theme_type(&self) -> ThemeType {
        self.theme.parse().unwrap_or_default()
    }
}
