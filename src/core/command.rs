//! Command parser for the : command system

use crate::app::Tab;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation commands
    Tab(Tab),

    // Trigger the active tab's action button
    Action,

    // Overlay commands
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let cmd = input.split_whitespace().next().unwrap_or("");
    let lowered = cmd.to_lowercase();

    if let Some(tab) = Tab::from_id(&lowered) {
        return Command::Tab(tab);
    }

    match lowered.as_str() {
        // Tab aliases
        "cam" | "surveillance" => Command::Tab(Tab::Camera),
        "maint" => Command::Tab(Tab::Maintenance),
        "ventes" => Command::Tab(Tab::Vente),

        "action" | "go" => Command::Action,
        "aide" | "help" => Command::Help,
        "quitter" | "quit" | "q" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}
