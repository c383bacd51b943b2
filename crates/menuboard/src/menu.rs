//! The interactive menu loop.

use anyhow::Result;
use menuboard_registry::{Command, Page, Registry, RegistryError};
use serde_json::Value;

use crate::io::MenuIo;
use crate::settings::Settings;
use crate::views;

/// Prompt shown before each command.
pub const PROMPT: &str = "Enter a command to execute (or 'exit' to quit): ";

/// Interactive navigation over the pages of a registry.
///
/// Each turn renders the current page, reads one line and either runs the
/// command with that trigger, goes back a page, or exits. End of input exits
/// the same way `exit` does.
pub struct Menu<'a, IO> {
    registry: &'a Registry,
    settings: &'a Settings,
    io: &'a mut IO,
    current: &'a Page,
    history: Vec<&'a Page>,
}

impl<'a, IO: MenuIo> Menu<'a, IO> {
    /// Create a menu starting on `start_page`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::PageNotFound`] if the page does not exist.
    pub fn new(
        registry: &'a Registry,
        settings: &'a Settings,
        io: &'a mut IO,
        start_page: &str,
    ) -> Result<Self, RegistryError> {
        let current = registry
            .find_page(start_page)
            .ok_or_else(|| RegistryError::PageNotFound(start_page.to_string()))?;
        Ok(Menu {
            registry,
            settings,
            io,
            current,
            history: Vec::new(),
        })
    }

    /// Name of the page currently shown.
    pub fn current_page(&self) -> &str {
        &self.current.name
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.io.write_line("Welcome to menuboard!")?;
        let start = self.current;
        for command in start.commands.iter().filter(|c| c.execution_on_initialize) {
            self.report(command)?;
        }

        loop {
            self.io.write_line("")?;
            let view = views::page_view(self.current, self.settings)?;
            self.io.write_lines(&view)?;

            let Some(line) = self.io.read_line(PROMPT)? else {
                break;
            };
            let input = line.trim().to_lowercase();
            match input.as_str() {
                "" => continue,
                "exit" => break,
                "back" => self.back()?,
                trigger => self.dispatch(trigger)?,
            }
        }

        let last = self.current;
        for command in last.commands.iter().filter(|c| c.run_on_closure) {
            self.report(command)?;
        }
        self.io.write_line("Exiting the application.")?;
        Ok(())
    }

    /// Run the command whose trigger is `input`, or failing that, the command
    /// at the 1-based position `input` names.
    fn dispatch(&mut self, input: &str) -> Result<()> {
        let page = self.current;
        let command = match page.find_by_trigger(input) {
            Some(command) => command,
            None => match input.parse::<usize>() {
                Ok(number) => {
                    match number.checked_sub(1).and_then(|i| page.commands.get(i)) {
                        Some(command) => command,
                        None => {
                            self.io.write_line("Invalid selection. Please try again.")?;
                            return Ok(());
                        }
                    }
                }
                Err(_) => {
                    self.io
                        .write_line(&format!("Command '{}' not found.", input))?;
                    return Ok(());
                }
            },
        };

        self.report(command)?;
        if let Some(next) = &command.next_page {
            match self.registry.find_page(next) {
                Some(target) => {
                    log::debug!("navigating from '{}' to '{}'", page.name, target.name);
                    self.history.push(page);
                    self.current = target;
                }
                None => {
                    log::warn!(
                        "command '{}' points to missing page '{}'",
                        command.display_name,
                        next
                    );
                    self.io.write_line(&format!("Page '{}' not found.", next))?;
                }
            }
        }
        Ok(())
    }

    fn back(&mut self) -> Result<()> {
        match self.history.pop() {
            Some(previous) => self.current = previous,
            None => self.io.write_line("Already on the first page.")?,
        }
        Ok(())
    }

    fn report(&mut self, command: &Command) -> Result<()> {
        self.io
            .write_line(&format!("Executing command: {}", command.display_name))?;
        self.io
            .write_line(&format!("Function to execute: {}", command.function))?;
        if !command.args.is_empty() {
            let args = Value::Object(command.args.clone());
            self.io.write_line(&format!("Arguments: {}", args))?;
        }
        Ok(())
    }
}
