//! Command-line argument definitions.
//!
//! The `#[derive(Parser)]` structs below are turned into a parser by `clap`.
//! `--base` can also come from the `DOTSTORE_BASE` environment variable; the
//! command-line flag wins when both are present.

use clap::{Parser, Subcommand};

use dotstore_core::Scope;

/// Default application directory name (`~/.dotstore`, `./.dotstore`).
pub const DEFAULT_BASE: &str = "dotstore";

/// Inspect and edit a dotstore key/value configuration directory.
#[derive(Debug, Parser)]
#[command(
    name = "dotstore",
    about = "Read and write per-key configuration files under ~/.<base> and ./.<base>",
    version
)]
pub struct Cli {
    /// Application directory name; entries live under `.<base>`.
    #[arg(long, global = true, default_value = DEFAULT_BASE, env = "DOTSTORE_BASE")]
    pub base: String,

    /// Print results as JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the keys of a namespace, sorted.
    List {
        namespace: String,
        /// Read the local (working directory) scope instead of the global one.
        #[arg(long)]
        local: bool,
    },

    /// Print a value, preferring the local scope over the global one.
    Get {
        namespace: String,
        key: String,
        /// Skip the local scope entirely.
        #[arg(long)]
        global_only: bool,
    },

    /// Store a value (global scope unless `--local`).
    Set {
        namespace: String,
        key: String,
        value: String,
        #[arg(long)]
        local: bool,
    },

    /// Delete a value, preferring the local scope over the global one.
    Delete {
        namespace: String,
        key: String,
        /// Skip the local scope entirely.
        #[arg(long)]
        global_only: bool,
    },

    /// Print the file path backing a key.
    Path {
        namespace: String,
        key: String,
        #[arg(long)]
        local: bool,
    },

    /// Print every entry of a namespace as a TOML table.
    Export {
        namespace: String,
        #[arg(long)]
        local: bool,
    },
}

/// Maps a `--local` flag to the scope it selects.
pub fn scope_for(local: bool) -> Scope {
    if local {
        Scope::Local
    } else {
        Scope::Global
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
