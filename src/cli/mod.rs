//! CLI module - Command-line interface for Adminarr
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

pub use commands::{
    cmd_delete_admin, cmd_events, cmd_list_admins, cmd_login, cmd_logout, cmd_logs, cmd_register,
    cmd_update_identity,
};

/// Adminarr - Administrator Account Manager
/// Local credential store with hashed passwords and per-account action logs
#[derive(Parser)]
#[command(name = "adminarr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new administrator account
    #[command(alias = "reg")]
    Register {
        /// Username for the new account
        username: String,

        /// Password; prompted on stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Authenticate and record the login
    Login {
        /// Username to authenticate
        username: String,

        /// Password; prompted on stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Append a logout entry to the account's action log
    Logout {
        /// Username logging out
        username: String,
    },

    /// Rename an account and replace its password
    Update {
        /// Current username
        old_username: String,

        /// New username
        new_username: String,

        /// New password; prompted on stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Delete an administrator account
    #[command(alias = "rm")]
    Delete {
        /// Username to delete
        username: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// List administrator accounts
    #[command(alias = "ls")]
    List {
        /// Include stored password digests (requires security.allow_hash_listing)
        #[arg(long)]
        with_hashes: bool,
    },

    /// Show legacy action logs, optionally for one account
    Logs {
        /// Username to filter by
        username: Option<String>,
    },

    /// Show structured audit events
    Events {
        /// Username to filter by
        username: Option<String>,

        /// Maximum number of events when listing all accounts
        #[arg(long, default_value_t = 20)]
        limit: u64,
    },

    /// Create default config file
    Init,
}
