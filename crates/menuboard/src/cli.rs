//! Command-line interface.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use menuboard_registry::{Command, CommandStore, Page, RegistryError};
use serde_json::{Map, Value};

use crate::io::MenuIo;
use crate::menu::Menu;
use crate::settings::Settings;
use crate::views;

/// Page the menu starts on when `run` is given no `--page`.
pub const DEFAULT_PAGE: &str = "Main Menu";

#[derive(Debug, Parser)]
#[command(name = "menuboard")]
#[command(version)]
#[command(about = "A personal command menu with side-by-side column output")]
pub struct Cli {
    /// Registry file
    #[arg(short, long, global = true, default_value = "menuboard.json")]
    pub config: PathBuf,

    /// Report layout diagnostics and enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub display: DisplayArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options that override the registry's stored layout.
#[derive(Debug, Clone, Args)]
pub struct DisplayArgs {
    /// Total output width in columns
    #[arg(short, long, global = true)]
    pub width: Option<usize>,

    /// Use the current terminal width
    #[arg(long, global = true)]
    pub fit_terminal: bool,

    /// Glyph between columns
    #[arg(long, global = true)]
    pub partition: Option<char>,

    /// Glyph for border lines
    #[arg(long, global = true)]
    pub line: Option<char>,

    /// Draw border lines around tables (`--border=false` turns a stored border off)
    #[arg(
        short,
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub border: Option<bool>,

    /// Break lines at word boundaries (false cuts at the exact width)
    #[arg(long, global = true, default_value_t = true, action = ArgAction::Set)]
    pub smart_wrap: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all pages
    Pages,
    /// Show the commands on a page
    Show {
        /// Page name
        page: String,
    },
    /// Create an empty page
    AddPage {
        /// Page name
        name: String,
    },
    /// Delete a page and its commands
    RemovePage {
        /// Page name
        name: String,
    },
    /// Add a command to an existing page
    AddCommand(AddCommandArgs),
    /// Delete a command from a page
    RemoveCommand {
        /// Page name
        page: String,
        /// Display name of the command
        name: String,
    },
    /// Start the interactive menu
    Run {
        /// Page to start on
        #[arg(short, long, default_value = DEFAULT_PAGE)]
        page: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct AddCommandArgs {
    /// Page to add the command to
    #[arg(long)]
    pub page: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// What the command does
    #[arg(long)]
    pub description: String,

    /// What the user types to run it
    #[arg(long)]
    pub trigger: String,

    /// Function the command runs
    #[arg(long)]
    pub function: String,

    /// Function argument as KEY=VALUE; VALUE is parsed as JSON when possible
    #[arg(long = "arg", value_name = "KEY=VALUE")]
    pub args: Vec<String>,

    /// Page to switch to after running
    #[arg(long)]
    pub next_page: Option<String>,

    #[arg(long, default_value = "medium")]
    pub importance: String,

    #[arg(long, default_value = "none")]
    pub scheduling: String,

    /// Run when the menu starts on this page
    #[arg(long)]
    pub on_init: bool,

    /// Run when the menu closes on this page
    #[arg(long)]
    pub on_close: bool,
}

impl AddCommandArgs {
    /// Build the command these options describe.
    pub fn to_command(&self) -> Result<Command> {
        let mut command = Command::new(
            &self.name,
            &self.description,
            &self.trigger,
            &self.function,
        )
        .args(parse_args(&self.args)?)
        .importance(&self.importance)
        .scheduling(&self.scheduling)
        .on_initialize(self.on_init)
        .on_closure(self.on_close);
        if let Some(next) = &self.next_page {
            command = command.next_page(next);
        }
        Ok(command)
    }
}

fn parse_args(pairs: &[String]) -> Result<Map<String, Value>> {
    let mut args = Map::new();
    for pair in pairs {
        let Some((key, raw)) = pair.split_once('=') else {
            bail!("argument '{}' is not of the form KEY=VALUE", pair);
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("argument '{}' has an empty key", pair);
        }
        let value =
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        args.insert(key.to_string(), value);
    }
    Ok(args)
}

/// Run a parsed command line against `store`, writing output to `io`.
pub fn execute<S, IO>(cli: &Cli, store: &S, io: &mut IO) -> Result<()>
where
    S: CommandStore,
    IO: MenuIo,
{
    let mut registry = store.load().context("failed to load registry")?;
    let settings = Settings::resolve(&cli.display, cli.verbose, registry.layout.as_ref())?;

    match &cli.command {
        Commands::Pages => {
            io.write_lines(&views::page_list(&registry, &settings)?)?;
        }
        Commands::Show { page } => {
            let page = registry
                .find_page(page)
                .ok_or_else(|| RegistryError::PageNotFound(page.clone()))?;
            io.write_lines(&views::page_view(page, &settings)?)?;
        }
        Commands::AddPage { name } => {
            registry.add_page(Page::new(name))?;
            store.save(&registry)?;
            io.write_line(&format!("Page '{}' has been added.", name))?;
        }
        Commands::RemovePage { name } => {
            if !registry.remove_page(name) {
                return Err(RegistryError::PageNotFound(name.clone()).into());
            }
            store.save(&registry)?;
            io.write_line(&format!("Page '{}' has been removed.", name))?;
        }
        Commands::AddCommand(args) => {
            let command = args.to_command()?;
            registry.add_command(&args.page, command)?;
            store.save(&registry)?;
            io.write_line(&format!(
                "Command '{}' added to page '{}'.",
                args.name, args.page
            ))?;
        }
        Commands::RemoveCommand { page, name } => {
            if !registry.remove_command(page, name)? {
                bail!("command '{}' not found on page '{}'", name, page);
            }
            store.save(&registry)?;
            io.write_line(&format!(
                "Command '{}' removed from page '{}'.",
                name, page
            ))?;
        }
        Commands::Run { page } => {
            Menu::new(&registry, &settings, io, page)?.run()?;
        }
    }
    Ok(())
}
