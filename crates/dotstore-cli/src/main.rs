//! `dotstore`: command-line front end for the scoped key/value store.
//!
//! # Usage
//!
//! ```text
//! dotstore [--base <NAME>] [--json] <COMMAND>
//!
//! Commands:
//!   list   <namespace> [--local]
//!   get    <namespace> <key> [--global-only]
//!   set    <namespace> <key> <value> [--local]
//!   delete <namespace> <key> [--global-only]
//!   path   <namespace> <key> [--local]
//!   export <namespace> [--local]
//! ```
//!
//! | Variable        | Default    | Description                      |
//! |-----------------|------------|----------------------------------|
//! | `DOTSTORE_BASE` | `dotstore` | Directory name under `~` and `.` |
//! | `RUST_LOG`      | `warn`     | Log filter (logs go to stderr)   |

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use dotstore_cli::cli::Cli;
use dotstore_cli::commands::execute;
use dotstore_core::ScopedStore;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for scripts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!("base={} command={:?}", cli.base, cli.command);

    let store = ScopedStore::new(cli.base.as_str());
    let output = execute(&store, &cli.command)?;
    let text = output.render(cli.json)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
