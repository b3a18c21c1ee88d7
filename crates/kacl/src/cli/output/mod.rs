//! Console output for changelog reports

use console::{style, Style};
use keepachangelog::{ChangeType, Entry};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message to stderr
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("{} {}", style("!").yellow().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", style("→").blue(), message);
}

/// Create a styled header
pub fn header(text: &str) -> String {
    style(text).bold().to_string()
}

/// Print a titled block of validation problems; prints nothing when empty
pub fn problems(title: &str, marker: &str, tint: &Style, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{}", tint.clone().bold().apply_to(title));
    for item in items {
        println!("  {} {}", tint.apply_to(marker), item);
    }
    println!();
}

/// Style for version labels
pub fn version_style() -> Style {
    Style::new().green().bold()
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}

/// Colour of a change category in summaries
pub fn change_type_style(change_type: ChangeType) -> Style {
    match change_type {
        ChangeType::Added => Style::new().green(),
        ChangeType::Changed => Style::new().blue(),
        ChangeType::Deprecated => Style::new().yellow(),
        ChangeType::Removed => Style::new().red(),
        ChangeType::Fixed => Style::new().cyan(),
        ChangeType::Security => Style::new().magenta().bold(),
    }
}

/// Entry version with its release date, e.g. `1.2.0 (2024-01-15)`
pub fn entry_label(entry: &Entry) -> String {
    let version = version_style().apply_to(&entry.version);
    match entry.date {
        Some(date) => format!("{} ({})", version, date.format("%Y-%m-%d")),
        None => version.to_string(),
    }
}

/// Item count per change group, in document order, e.g. `Added 2, Fixed 1`
pub fn change_summary(entry: &Entry) -> String {
    entry
        .changes
        .iter()
        .map(|change| {
            format!(
                "{} {}",
                change_type_style(change.change_type).apply_to(change.change_type),
                change.items.len()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepachangelog::Changelog;

    fn plain(text: &str) -> String {
        console::strip_ansi_codes(text).into_owned()
    }

    #[test]
    fn test_entry_label() {
        let changelog =
            Changelog::parse("## [Unreleased]\n## [1.2.0] - 2024-01-15\n").unwrap();

        assert_eq!(plain(&entry_label(&changelog.entries[0])), "Unreleased");
        assert_eq!(
            plain(&entry_label(&changelog.entries[1])),
            "1.2.0 (2024-01-15)"
        );
    }

    #[test]
    fn test_change_summary_keeps_groups_apart() {
        let changelog = Changelog::parse(
            "## [1.0.0]\n### Added\n- a\n- b\n### Fixed\n### Added\n- c\n",
        )
        .unwrap();

        assert_eq!(
            plain(&change_summary(&changelog.entries[0])),
            "Added 2, Fixed 0, Added 1"
        );
    }

    #[test]
    fn test_change_summary_empty_entry() {
        let changelog = Changelog::parse("## [Unreleased]\n").unwrap();
        assert_eq!(change_summary(&changelog.entries[0]), "");
    }
}
