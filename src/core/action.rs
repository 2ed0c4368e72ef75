//! Actions that input handling returns to communicate with the event loop
#![allow(dead_code)]

use crate::app::Tab;

/// Actions returned by key handling and commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Make the given tab active
    SelectTab(Tab),

    /// Move to the next (true) or previous (false) tab in registry order
    CycleTab(bool),

    /// Trigger the active tab's primary action
    Dispatch,

    /// Copy text to the system clipboard
    Copy(String),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Open the help overlay
    OpenHelp,

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
