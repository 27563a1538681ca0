//! CLI command definitions and dispatch for the `nyay` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod auth;
pub mod catalog;
pub mod chat;
pub mod document;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with the NyayGuru legal assistant.
#[derive(Parser)]
#[command(name = "nyay", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export traces via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat {
        /// Legal category to start in (name or slug, e.g. "criminal-law").
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Response language (e.g. "Hindi").
        #[arg(long, short = 'l')]
        language: Option<String>,
    },

    /// Log in with email and password, or a Google ID token.
    Login {
        /// Account email (prompted if omitted).
        #[arg(long)]
        email: Option<String>,

        /// Log in with a Google ID token instead of a password.
        #[arg(long, conflicts_with = "email")]
        google_token: Option<String>,
    },

    /// Register a new account.
    Register,

    /// Log out and forget the saved token.
    Logout,

    /// Show the logged-in user's profile.
    Whoami,

    /// List available legal categories and languages.
    Categories,

    /// Upload a document for analysis.
    Upload {
        /// Path to the document (PDF, DOCX, or plain text).
        file: PathBuf,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
