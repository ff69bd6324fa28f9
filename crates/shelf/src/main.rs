//! # Shelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only sets up logging, invokes `cli::run()` and handles process
//! termination.
//!
//! ## Workspace Structure
//!
//! - `crates/shelfapp/`: UI-agnostic library (model, storage, commands, API)
//! - `crates/shelf/`: this interactive client
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. The level is taken from
//! `RUST_LOG` and defaults to `warn`, so a normal session only shows problems
//! such as an unreadable catalog file. `RUST_LOG=shelfapp=debug` traces every
//! load and save.
//!
//! ## Testing Approach
//!
//! - **Library (`crates/shelfapp`)**: unit tests per command over the
//!   in-memory backend, plus file-backed integration tests.
//! - **Session (`src/cli/session.rs`)**: scripted stdin against an in-memory
//!   catalog, asserting on the captured output.
//! - **Binary (`tests/`)**: `assert_cmd` runs the real executable with piped
//!   input and a temporary data file.

mod cli;

use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
