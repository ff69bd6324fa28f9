//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Session Shape
//!
//! `shelf [DATA_FILE]` opens the catalog and shows a numbered menu:
//!
//! 1. Add a book
//! 2. Remove a book
//! 3. Search for books
//! 4. Show all books
//! 5. Change book status
//! 6. Exit
//!
//! After every completed action the user picks `1` to continue or `2` to quit.
//! Closing stdin (Ctrl-D, or the end of a piped script) ends the session the
//! same way.
//!
//! ## Input Validation
//!
//! Every answer is read through [`prompt::Prompter::ask`]. Invalid answers
//! print `Error` and a hint, then the same question is asked again; nothing
//! invalid ever reaches the API.
//!
//! ## Module Layout
//!
//! - `setup.rs`: clap argument definitions
//! - `commands.rs`: startup wiring (config, store, terminal)
//! - `session.rs`: menu loop and per-action handlers
//! - `prompt.rs`: validating line reader
//! - `menu.rs`: menu entries
//! - `render.rs`: styled output

mod commands;
mod menu;
mod prompt;
mod render;
mod session;
mod setup;

pub use commands::run;
