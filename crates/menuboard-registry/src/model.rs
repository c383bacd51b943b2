//! Pages, commands and the registry that holds them.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{RegistryError, Result};

fn default_importance() -> String {
    "medium".to_string()
}

fn default_scheduling() -> String {
    "none".to_string()
}

// `"args": null` in hand-edited files means no arguments.
fn args_or_empty<'de, D>(deserializer: D) -> std::result::Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A menu entry the user can trigger by typing its trigger string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Name shown in menus.
    pub display_name: String,
    /// What the command does.
    pub description: String,
    /// String the user types to run the command.
    pub trigger_command: String,
    /// Name of the function the command runs.
    pub function: String,
    /// Arguments passed to the function.
    #[serde(default, deserialize_with = "args_or_empty")]
    pub args: Map<String, Value>,
    /// Page to switch to after running.
    #[serde(default)]
    pub next_page: Option<String>,
    /// Run automatically when the menu starts on this command's page.
    #[serde(default)]
    pub execution_on_initialize: bool,
    /// Free-form importance label ("low", "medium", "high", ...).
    #[serde(default = "default_importance")]
    pub importance: String,
    /// Run when the menu is closed on this command's page.
    #[serde(default)]
    pub run_on_closure: bool,
    /// Free-form schedule label ("none", "daily", ...).
    #[serde(default = "default_scheduling")]
    pub scheduling: String,
}

impl Command {
    /// Create a command with default options.
    pub fn new(
        display_name: impl Into<String>,
        description: impl Into<String>,
        trigger_command: impl Into<String>,
        function: impl Into<String>,
    ) -> Self {
        Command {
            display_name: display_name.into(),
            description: description.into(),
            trigger_command: trigger_command.into(),
            function: function.into(),
            args: Map::new(),
            next_page: None,
            execution_on_initialize: false,
            importance: default_importance(),
            run_on_closure: false,
            scheduling: default_scheduling(),
        }
    }

    /// Set the function arguments.
    pub fn args(mut self, args: Map<String, Value>) -> Self {
        self.args = args;
        self
    }

    /// Set the page to switch to after running.
    pub fn next_page(mut self, page: impl Into<String>) -> Self {
        self.next_page = Some(page.into());
        self
    }

    /// Set the importance label.
    pub fn importance(mut self, importance: impl Into<String>) -> Self {
        self.importance = importance.into();
        self
    }

    /// Set the schedule label.
    pub fn scheduling(mut self, scheduling: impl Into<String>) -> Self {
        self.scheduling = scheduling.into();
        self
    }

    /// Run when the menu starts.
    pub fn on_initialize(mut self, enable: bool) -> Self {
        self.execution_on_initialize = enable;
        self
    }

    /// Run when the menu closes.
    pub fn on_closure(mut self, enable: bool) -> Self {
        self.run_on_closure = enable;
        self
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (Trigger: {})",
            self.display_name, self.description, self.trigger_command
        )
    }
}

/// A named menu page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub name: String,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Page {
    /// Create an empty page.
    pub fn new(name: impl Into<String>) -> Self {
        Page {
            name: name.into(),
            commands: Vec::new(),
        }
    }

    /// Add a command to the page.
    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// Append a command.
    pub fn add_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Remove every command with the given display name.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove_command(&mut self, display_name: &str) -> bool {
        let before = self.commands.len();
        self.commands.retain(|c| c.display_name != display_name);
        self.commands.len() != before
    }

    /// First command on this page with the given trigger.
    pub fn find_by_trigger(&self, trigger: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.trigger_command == trigger)
    }
}

/// All pages of a menu configuration.
///
/// The optional `layout` object is kept as raw JSON so that display settings
/// survive a load/save round trip without this crate knowing their shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Value>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether there are no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page names in order.
    pub fn page_names(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.name.as_str())
    }

    /// Add a page.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicatePage`] if a page with that name exists.
    pub fn add_page(&mut self, page: Page) -> Result<()> {
        if self.find_page(&page.name).is_some() {
            return Err(RegistryError::DuplicatePage(page.name));
        }
        self.pages.push(page);
        Ok(())
    }

    /// Remove the page with the given name. Returns `true` if it existed.
    pub fn remove_page(&mut self, name: &str) -> bool {
        let before = self.pages.len();
        self.pages.retain(|p| p.name != name);
        self.pages.len() != before
    }

    /// Find a page by name.
    pub fn find_page(&self, name: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.name == name)
    }

    /// Find a page by name for editing.
    pub fn find_page_mut(&mut self, name: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.name == name)
    }

    /// Add a command to an existing page.
    ///
    /// # Errors
    ///
    /// [`RegistryError::PageNotFound`] if the page does not exist.
    pub fn add_command(&mut self, page_name: &str, command: Command) -> Result<()> {
        self.find_page_mut(page_name)
            .ok_or_else(|| RegistryError::PageNotFound(page_name.to_string()))?
            .add_command(command);
        Ok(())
    }

    /// Remove a command from a page by display name.
    ///
    /// Returns `Ok(false)` if the page exists but had no such command.
    pub fn remove_command(&mut self, page_name: &str, display_name: &str) -> Result<bool> {
        let page = self
            .find_page_mut(page_name)
            .ok_or_else(|| RegistryError::PageNotFound(page_name.to_string()))?;
        Ok(page.remove_command(display_name))
    }

    /// First command, across all pages in order, with the given trigger.
    pub fn find_by_trigger(&self, trigger: &str) -> Option<(&Page, &Command)> {
        self.pages
            .iter()
            .find_map(|page| page.find_by_trigger(trigger).map(|c| (page, c)))
    }

    /// Look up a trigger on one page only.
    pub fn find_on_page(&self, page_name: &str, trigger: &str) -> Option<&Command> {
        self.find_page(page_name)?.find_by_trigger(trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather() -> Command {
        Command::new(
            "Fetch Weather",
            "Fetches weather data for a specified city.",
            "weather",
            "fetch_weather",
        )
    }

    fn sample() -> Registry {
        let mut registry = Registry::new();
        registry
            .add_page(Page::new("Main Menu").with_command(weather()))
            .unwrap();
        registry
            .add_page(
                Page::new("Disk Options")
                    .with_command(Command::new("Usage", "Show usage", "usage", "disk_usage"))
                    .with_command(Command::new("Other", "Shadowed", "weather", "other")),
            )
            .unwrap();
        registry
    }

    #[test]
    fn command_defaults() {
        let cmd = weather();
        assert_eq!(cmd.importance, "medium");
        assert_eq!(cmd.scheduling, "none");
        assert!(cmd.args.is_empty());
        assert!(cmd.next_page.is_none());
        assert!(!cmd.execution_on_initialize);
        assert!(!cmd.run_on_closure);
    }

    #[test]
    fn command_display() {
        assert_eq!(
            weather().to_string(),
            "Fetch Weather: Fetches weather data for a specified city. (Trigger: weather)"
        );
    }

    #[test]
    fn deserialize_minimal_command() {
        let cmd: Command = serde_json::from_str(
            r#"{"display_name": "A", "description": "B", "trigger_command": "c", "function": "d"}"#,
        )
        .unwrap();
        assert_eq!(cmd, Command::new("A", "B", "c", "d"));
    }

    #[test]
    fn deserialize_null_args() {
        let cmd: Command = serde_json::from_str(
            r#"{"display_name": "A", "description": "B", "trigger_command": "c",
                "function": "d", "args": null}"#,
        )
        .unwrap();
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn deserialize_requires_trigger() {
        let result: std::result::Result<Command, _> =
            serde_json::from_str(r#"{"display_name": "A", "description": "B", "function": "d"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn add_page_rejects_duplicates() {
        let mut registry = sample();
        let err = registry.add_page(Page::new("Main Menu")).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicatePage(name) if name == "Main Menu"));
    }

    #[test]
    fn remove_page_reports_presence() {
        let mut registry = sample();
        assert!(registry.remove_page("Disk Options"));
        assert!(!registry.remove_page("Disk Options"));
        assert_eq!(registry.page_names().collect::<Vec<_>>(), vec!["Main Menu"]);
    }

    #[test]
    fn add_command_to_missing_page() {
        let mut registry = sample();
        let err = registry.add_command("Nowhere", weather()).unwrap_err();
        assert!(matches!(err, RegistryError::PageNotFound(_)));
    }

    #[test]
    fn remove_command_by_display_name() {
        let mut registry = sample();
        assert!(registry.remove_command("Main Menu", "Fetch Weather").unwrap());
        assert!(!registry.remove_command("Main Menu", "Fetch Weather").unwrap());
        assert!(registry.find_page("Main Menu").unwrap().commands.is_empty());
    }

    #[test]
    fn find_by_trigger_returns_first_match() {
        let registry = sample();
        let (page, cmd) = registry.find_by_trigger("weather").unwrap();
        assert_eq!(page.name, "Main Menu");
        assert_eq!(cmd.function, "fetch_weather");
        assert!(registry.find_by_trigger("missing").is_none());
    }

    #[test]
    fn find_on_page_is_scoped() {
        let registry = sample();
        assert_eq!(
            registry.find_on_page("Disk Options", "weather").unwrap().function,
            "other"
        );
        assert!(registry.find_on_page("Main Menu", "usage").is_none());
        assert!(registry.find_on_page("Nowhere", "usage").is_none());
    }
}
