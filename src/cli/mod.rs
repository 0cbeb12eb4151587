//! CLI module for the user directory API

pub mod serve;

use clap::{Parser, Subcommand};

/// User directory API - lookup-or-create user resolution over HTTP
#[derive(Parser)]
#[command(name = "user-directory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
