//! # Menuboard Registry - Pages and Commands
//!
//! The data side of the `menuboard` command-menu tool: named pages holding
//! commands, each reachable by a trigger string, persisted as JSON.
//!
//! ```rust
//! use menuboard_registry::{Command, CommandStore, MemoryStore, Page, Registry};
//!
//! let mut registry = Registry::new();
//! registry.add_page(Page::new("Main Menu"))?;
//! registry.add_command(
//!     "Main Menu",
//!     Command::new("Disk Usage", "Show disk usage", "disk", "display_disk_usage"),
//! )?;
//!
//! let store = MemoryStore::default();
//! store.save(&registry)?;
//!
//! let (page, command) = store.find_by_trigger("disk")?.unwrap();
//! assert_eq!(page, "Main Menu");
//! assert_eq!(command.function, "display_disk_usage");
//! # Ok::<(), menuboard_registry::RegistryError>(())
//! ```
//!
//! ## File Format
//!
//! ```json
//! {
//!     "pages": [
//!         {
//!             "name": "Main Menu",
//!             "commands": [
//!                 {
//!                     "display_name": "Disk Usage",
//!                     "description": "Show disk usage",
//!                     "trigger_command": "disk",
//!                     "function": "display_disk_usage",
//!                     "args": {},
//!                     "next_page": null,
//!                     "execution_on_initialize": false,
//!                     "importance": "medium",
//!                     "run_on_closure": false,
//!                     "scheduling": "none"
//!                 }
//!             ]
//!         }
//!     ]
//! }
//! ```
//!
//! Only `display_name`, `description`, `trigger_command` and `function` are
//! required per command.

mod error;
mod model;
mod store;

pub use error::{RegistryError, Result};
pub use model::{Command, Page, Registry};
pub use store::{CommandStore, JsonFileStore, MemoryStore};
