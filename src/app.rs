use std::time::{Duration, Instant};

use crate::core::{Action, Command, NotifyLevel};

/// Main tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Vente,
    Maintenance,
    Camera,
}

impl Tab {
    /// Fixed, ordered tab set; order determines render order
    pub const ALL: [Tab; 3] = [Tab::Vente, Tab::Maintenance, Tab::Camera];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Vente => "vente",
            Tab::Maintenance => "maintenance",
            Tab::Camera => "camera",
        }
    }

    /// Look up a tab by its short id. Returns None for ids outside the set.
    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.iter().copied().find(|tab| tab.id() == id)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Vente => "Vente",
            Tab::Maintenance => "Maintenance",
            Tab::Camera => "Caméra de surveillance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tab::Vente => "Créer une nouvelle vente, rechercher produits/clients et finaliser.",
            Tab::Maintenance => "Accéder aux tâches de maintenance, tickets et historique.",
            Tab::Camera => "Afficher le flux de la caméra de surveillance (configurable).",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            Tab::Vente => "Nouvelle vente",
            Tab::Maintenance => "Ouvrir maintenance",
            Tab::Camera => "Voir la caméra",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Vente => '1',
            Tab::Maintenance => '2',
            Tab::Camera => '3',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

/// Modal notice standing in for a blocking dialog. While one is open,
/// input other than dismissal is ignored.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
}

#[derive(Debug)]
pub struct App {
    /// Currently active tab; always a member of Tab::ALL
    pub active_tab: Tab,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub notice: Option<Notice>,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
    /// Header title, overridable from config
    pub title: String,
    /// Footer line, overridable from config
    pub footer: String,
    /// Configured camera stream endpoint, if any
    pub camera_endpoint: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::ALL[0],
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            notice: None,
            status: None,
            help_open: false,
            should_quit: false,
            title: "Mon Application".to_string(),
            footer: "© 2025 — Votre société".to_string(),
            camera_endpoint: None,
        }
    }

    /// Make the given tab active. Selecting the already-active tab leaves
    /// the state unchanged.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        let index = Tab::ALL
            .iter()
            .position(|tab| *tab == self.active_tab)
            .unwrap_or(0);
        let next = if forward {
            (index + 1) % Tab::ALL.len()
        } else {
            (index + Tab::ALL.len() - 1) % Tab::ALL.len()
        };
        self.active_tab = Tab::ALL[next];
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > Duration::from_secs(3) {
                self.status = None;
            }
        }
    }

    pub fn open_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice { text: text.into() });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    /// Apply the command bar input and leave command mode.
    pub fn apply_command(&mut self) -> Action {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return Action::None;
        }
        let cmd = crate::core::parse_command(&input);
        self.command.last = Some(input);
        self.exit_command();
        self.execute_command(&cmd)
    }

    /// Map a parsed command to an action
    pub fn execute_command(&self, cmd: &Command) -> Action {
        match cmd {
            Command::Tab(tab) => Action::SelectTab(*tab),
            Command::Action => Action::Dispatch,
            Command::Help => Action::OpenHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(input) => Action::Notify(
                format!("Commande inconnue: {}", input),
                NotifyLevel::Warn,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_is_first_in_registry() {
        let app = App::new();
        assert_eq!(app.active_tab, Tab::ALL[0]);
        assert_eq!(app.active_tab, Tab::Vente);
    }

    #[test]
    fn test_select_tab_round_trip() {
        let mut app = App::new();
        for tab in Tab::ALL {
            app.select_tab(tab);
            assert_eq!(app.active_tab, tab);
        }
    }

    #[test]
    fn test_select_tab_is_idempotent() {
        let mut app = App::new();
        app.select_tab(Tab::Camera);
        app.select_tab(Tab::Camera);
        assert_eq!(app.active_tab, Tab::Camera);
    }

    #[test]
    fn test_cycle_tab_wraps_in_registry_order() {
        let mut app = App::new();
        app.cycle_tab(true);
        assert_eq!(app.active_tab, Tab::Maintenance);
        app.cycle_tab(true);
        assert_eq!(app.active_tab, Tab::Camera);
        app.cycle_tab(true);
        assert_eq!(app.active_tab, Tab::Vente);
        app.cycle_tab(false);
        assert_eq!(app.active_tab, Tab::Camera);
    }

    #[test]
    fn test_from_id_round_trips_and_rejects_unknown() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Tab::from_id("onglet"), None);
        assert_eq!(Tab::from_id(""), None);
    }

    #[test]
    fn test_derived_panel_texts_have_no_cross_tab_bleed() {
        assert_eq!(Tab::Vente.title(), "Vente");
        assert_eq!(
            Tab::Vente.description(),
            "Créer une nouvelle vente, rechercher produits/clients et finaliser."
        );
        assert_eq!(Tab::Vente.action_label(), "Nouvelle vente");

        assert_eq!(Tab::Maintenance.title(), "Maintenance");
        assert_eq!(
            Tab::Maintenance.description(),
            "Accéder aux tâches de maintenance, tickets et historique."
        );
        assert_eq!(Tab::Maintenance.action_label(), "Ouvrir maintenance");

        assert_eq!(Tab::Camera.title(), "Caméra de surveillance");
        assert_eq!(
            Tab::Camera.description(),
            "Afficher le flux de la caméra de surveillance (configurable)."
        );
        assert_eq!(Tab::Camera.action_label(), "Voir la caméra");
    }

    #[test]
    fn test_start_on_vente_then_switch_to_camera() {
        let mut app = App::new();
        assert_eq!(app.active_tab.title(), "Vente");
        assert_eq!(
            app.active_tab.description(),
            "Créer une nouvelle vente, rechercher produits/clients et finaliser."
        );
        assert_eq!(app.active_tab.action_label(), "Nouvelle vente");

        app.select_tab(Tab::Camera);
        assert_eq!(app.active_tab.title(), "Caméra de surveillance");
        assert_eq!(
            app.active_tab.description(),
            "Afficher le flux de la caméra de surveillance (configurable)."
        );
        assert_eq!(app.active_tab.action_label(), "Voir la caméra");
    }

    #[test]
    fn test_execute_command_maps_to_actions() {
        let app = App::new();
        assert_eq!(
            app.execute_command(&Command::Tab(Tab::Camera)),
            Action::SelectTab(Tab::Camera)
        );
        assert_eq!(app.execute_command(&Command::Action), Action::Dispatch);
        assert_eq!(app.execute_command(&Command::Help), Action::OpenHelp);
        assert_eq!(app.execute_command(&Command::Quit), Action::Quit);
        match app.execute_command(&Command::Unknown("xyz".to_string())) {
            Action::Notify(text, NotifyLevel::Warn) => assert!(text.contains("xyz")),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_apply_command_selects_tab_and_leaves_command_mode() {
        let mut app = App::new();
        app.enter_command();
        app.command.input.push_str("camera");
        let action = app.apply_command();
        assert_eq!(action, Action::SelectTab(Tab::Camera));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.command.last.as_deref(), Some("camera"));
        assert!(app.command.input.is_empty());
    }

    #[test]
    fn test_empty_command_is_a_noop() {
        let mut app = App::new();
        app.enter_command();
        app.command.input.push_str("   ");
        assert_eq!(app.apply_command(), Action::None);
        assert!(app.command.last.is_none());
    }

    #[test]
    fn test_notice_open_and_dismiss() {
        let mut app = App::new();
        assert!(app.notice.is_none());
        app.open_notice("Action Vente: ouvrir l'écran de saisie d'une nouvelle vente.");
        assert!(app.notice.is_some());
        app.dismiss_notice();
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_set_status_levels() {
        let mut app = App::new();
        app.set_status("ok", StatusLevel::Info);
        let (text, level) = app.status_text().expect("status should be set");
        assert_eq!(text, "ok");
        assert_eq!(level, StatusLevel::Info);
    }
}
