//! Tables shown by the menu and the listing subcommands.

use std::iter;

use menuboard_registry::{Page, Registry};
use menuboard_render::layout::{char_width, wrap_entry};
use menuboard_render::{LayoutError, TableLayout, WrapMode};

use crate::settings::Settings;

const INDEX_HEADER: &str = "#";
const TRIGGER_HEADER: &str = "Trigger";
const PAGE_HEADERS: [&str; 4] = [INDEX_HEADER, TRIGGER_HEADER, "Name", "Description"];
const INDEX_WIDTH: usize = 4;

/// Add one record, one cell per channel, keeping the cells on the same rows.
///
/// Shorter cells are padded with blank lines up to the tallest cell.
fn add_record(
    layout: &mut TableLayout,
    cells: &[&str],
    mode: WrapMode,
) -> Result<(), LayoutError> {
    let heights: Vec<usize> = cells
        .iter()
        .zip(layout.widths())
        .map(|(cell, &width)| wrap_entry(cell, width, mode).len())
        .collect();
    let tallest = heights.iter().copied().max().unwrap_or(1);

    for (index, (cell, height)) in cells.iter().zip(heights).enumerate() {
        let mut entry = cell.to_string();
        entry.extend(iter::repeat_n('\n', tallest - height));
        layout.add_item(index, entry)?;
    }
    Ok(())
}

/// Number / trigger / name / description table for one page.
///
/// Commands are numbered from 1 so they can be picked by position.
pub fn page_table(page: &Page, settings: &Settings) -> Result<Vec<String>, LayoutError> {
    let index_width = char_width(&page.commands.len().to_string()).max(char_width(INDEX_HEADER));
    let trigger_width = page
        .commands
        .iter()
        .map(|c| char_width(&c.trigger_command))
        .chain(iter::once(char_width(TRIGGER_HEADER)))
        .max()
        .unwrap_or(0)
        .min(settings.layout.total_width / 4);

    let config = settings
        .layout
        .clone()
        .headers(PAGE_HEADERS)
        .channel_widths([Some(index_width), Some(trigger_width), None, None]);
    let mut layout = TableLayout::new(PAGE_HEADERS.len(), config)?;
    for (index, command) in page.commands.iter().enumerate() {
        add_record(
            &mut layout,
            &[
                &(index + 1).to_string(),
                &command.trigger_command,
                &command.display_name,
                &command.description,
            ],
            settings.wrap,
        )?;
    }
    Ok(layout.render(settings.wrap))
}

/// Page title followed by its table, or a note when the page is empty.
pub fn page_view(page: &Page, settings: &Settings) -> Result<Vec<String>, LayoutError> {
    let mut lines = vec![format!("--- {} ---", page.name)];
    if page.commands.is_empty() {
        lines.push("No commands available.".to_string());
    } else {
        lines.extend(page_table(page, settings)?);
    }
    Ok(lines)
}

/// Numbered list of page names.
pub fn page_list(registry: &Registry, settings: &Settings) -> Result<Vec<String>, LayoutError> {
    if registry.is_empty() {
        return Ok(vec!["No pages available.".to_string()]);
    }

    let config = settings
        .layout
        .clone()
        .headers(["#", "Page"])
        .channel_widths([Some(INDEX_WIDTH), None]);
    let mut layout = TableLayout::new(2, config)?;
    for (index, name) in registry.page_names().enumerate() {
        add_record(&mut layout, &[&(index + 1).to_string(), name], settings.wrap)?;
    }
    Ok(layout.render(settings.wrap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use menuboard_registry::Command;
    use menuboard_render::LayoutConfig;

    fn settings(width: usize) -> Settings {
        Settings {
            layout: LayoutConfig::new().total_width(width),
            wrap: WrapMode::Smart,
        }
    }

    fn tools_page() -> Page {
        Page::new("Tools")
            .with_command(Command::new(
                "Disk",
                "Shows disk usage for every mounted volume.",
                "du",
                "disk_usage",
            ))
            .with_command(Command::new("Uptime", "Shows uptime.", "up", "uptime"))
    }

    #[test]
    fn records_stay_aligned_across_channels() {
        let mut layout = TableLayout::new(2, LayoutConfig::new().total_width(21)).unwrap();
        add_record(&mut layout, &["a", "one two three four"], WrapMode::Smart).unwrap();
        add_record(&mut layout, &["b", "five"], WrapMode::Smart).unwrap();

        let lines = layout.render(WrapMode::Smart);
        assert_eq!(
            lines,
            vec![
                "a          | one two   ",
                "           | three four",
                "b          | five      ",
            ]
        );
    }

    #[test]
    fn page_table_sizes_trigger_column() {
        let lines = page_table(&tools_page(), &settings(60)).unwrap();
        // Triggers are shorter than the header, so the header sets the width.
        assert!(lines[0].starts_with("# | Trigger |"));
        assert!(lines[1].starts_with("1 | du      | Disk"));
        assert!(lines.iter().any(|l| l.starts_with("2 | up      | Uptime")));
        let widths: Vec<usize> = lines.iter().map(|l| char_width(l)).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn trigger_column_is_capped() {
        let page = Page::new("Long").with_command(Command::new(
            "Name",
            "Desc",
            "a-very-long-trigger-string",
            "f",
        ));
        let lines = page_table(&page, &settings(40)).unwrap();
        assert!(lines[1].starts_with("1 | a-very-lon | "));
    }

    #[test]
    fn empty_page_view() {
        let lines = page_view(&Page::new("Empty"), &settings(40)).unwrap();
        assert_eq!(lines, vec!["--- Empty ---", "No commands available."]);
    }

    #[test]
    fn page_list_numbers_pages() {
        let mut registry = Registry::new();
        registry.add_page(Page::new("Main Menu")).unwrap();
        registry.add_page(tools_page()).unwrap();

        let lines = page_list(&registry, &settings(30)).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1    | Main Menu"));
        assert!(lines[2].starts_with("2    | Tools"));
    }

    #[test]
    fn page_list_when_empty() {
        let lines = page_list(&Registry::new(), &settings(30)).unwrap();
        assert_eq!(lines, vec!["No pages available."]);
    }
}
