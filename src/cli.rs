//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use reqwest::Url;

use crate::remote::DEFAULT_ENDPOINT;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeName {
    Mocha,
    Dark,
}

#[derive(Parser, Debug)]
#[command(name = "user-search", version)]
#[command(about = "Load a remote user list once and filter it as you type")]
pub struct Cli {
    /// URL returning `{"results": [...]}` user entries
    #[arg(long, env = "USER_SEARCH_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: Url,

    /// Colour palette
    #[arg(long, value_enum, default_value_t = ThemeName::Mocha)]
    pub theme: ThemeName,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long, env = "USER_SEARCH_LOG")]
    pub log_file: Option<PathBuf>,
}
