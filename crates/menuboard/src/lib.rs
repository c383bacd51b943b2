//! # menuboard
//!
//! A personal command menu. Pages of commands live in a JSON registry file
//! (see `menuboard-registry`) and are shown as side-by-side column tables
//! (see `menuboard-render`).
//!
//! The binary offers subcommands to list and edit pages and commands, and a
//! `run` subcommand that starts an interactive menu:
//!
//! ```text
//! $ menuboard add-page "Main Menu"
//! $ menuboard add-command --page "Main Menu" --name Status \
//!       --description "Show status" --trigger status --function show_status
//! $ menuboard --border run
//! ```
//!
//! Everything here is also usable as a library. [`cli::execute`] runs a
//! parsed command line against any [`CommandStore`](menuboard_registry::CommandStore)
//! and any [`MenuIo`], which is how the tests drive it.

pub mod cli;
pub mod io;
pub mod logging;
pub mod menu;
pub mod settings;
pub mod views;

pub use cli::{execute, Cli, Commands};
pub use io::{MenuIo, ScriptedIo, TermIo};
pub use menu::Menu;
pub use settings::Settings;
