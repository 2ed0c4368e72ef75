mod app;
mod config;
mod core;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::{App, InputMode, StatusLevel, Tab};
use crate::core::{dispatch, Action, Effect, NotifyLevel};

#[derive(Debug, Parser)]
#[command(
    name = "comptoir",
    version,
    about = "Comptoir: vente, maintenance et caméra de surveillance dans un terminal"
)]
struct Args {
    /// Camera stream endpoint (e.g. http://192.168.1.20:8080)
    #[arg(long)]
    camera_url: Option<String>,

    /// Config file path (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = match args.config.as_deref() {
        Some(path) => config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => config::load(),
    };

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    if let Some(title) = config.title.clone().filter(|value| !value.trim().is_empty()) {
        app.title = title;
    }
    if let Some(footer) = config
        .footer
        .clone()
        .filter(|value| !value.trim().is_empty())
    {
        app.footer = footer;
    }
    // CLI argument takes precedence over the config file
    app.camera_endpoint = args
        .camera_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .or_else(|| config.camera_url());

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut app, key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // A notice is modal: nothing else happens until it is dismissed
    if app.notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_notice();
        }
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => {
            let action = handle_normal_mode(app, key);
            apply_action(app, action);
        }
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Char(':') | KeyCode::Char('/') => {
            app.enter_command();
            Action::None
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Action::CycleTab(true),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Action::CycleTab(false),
        KeyCode::Enter => Action::Dispatch,
        KeyCode::Char('y') => match (app.active_tab, app.camera_endpoint.clone()) {
            (Tab::Camera, Some(url)) => Action::Copy(url),
            (Tab::Camera, None) => Action::Notify(
                "Aucun flux de caméra à copier".to_string(),
                NotifyLevel::Warn,
            ),
            _ => Action::Notify(
                "La copie est disponible sur l'onglet caméra".to_string(),
                NotifyLevel::Warn,
            ),
        },
        KeyCode::Char(ch) => match Tab::ALL.iter().find(|tab| tab.shortcut() == ch) {
            Some(tab) => Action::SelectTab(*tab),
            None => Action::None,
        },
        _ => Action::None,
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => {
            let action = app.apply_command();
            apply_action(app, action);
        }
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

/// Apply an action produced by key handling or the command bar. Dispatch
/// resolves to an Effect here; the event loop owns fulfilment.
fn apply_action(app: &mut App, action: Action) {
    match action {
        Action::None => {}
        Action::SelectTab(tab) => app.select_tab(tab),
        Action::CycleTab(forward) => app.cycle_tab(forward),
        Action::Dispatch => {
            let effect = dispatch(app.active_tab);
            fulfill_effect(app, effect);
        }
        Action::Copy(text) => copy_to_clipboard(app, text),
        Action::Notify(text, level) => {
            let level = match level {
                NotifyLevel::Info => StatusLevel::Info,
                NotifyLevel::Warn => StatusLevel::Warn,
                NotifyLevel::Error => StatusLevel::Error,
            };
            app.set_status(text, level);
        }
        Action::OpenHelp => app.help_open = true,
        Action::Quit => app.should_quit = true,
    }
}

/// Placeholder fulfilment: each effect opens a modal notice until the real
/// sales, maintenance and camera collaborators are wired in.
fn fulfill_effect(app: &mut App, effect: Effect) {
    match effect {
        Effect::OpenSalesForm => {
            app.open_notice("Action Vente: ouvrir l'écran de saisie d'une nouvelle vente.");
        }
        Effect::OpenMaintenanceDashboard => {
            app.open_notice("Action Maintenance: ouvrir le tableau de bord de maintenance.");
        }
        Effect::OpenCameraStream => match app.camera_endpoint.clone() {
            Some(url) => app.open_notice(format!(
                "Action Caméra: flux configuré sur {url} (ouverture non intégrée)."
            )),
            None => app.open_notice(
                "Action Caméra: pas de caméra configurée. Remplacez par votre flux.",
            ),
        },
    }
}

fn copy_to_clipboard(app: &mut App, text: String) {
    use arboard::Clipboard;

    match Clipboard::new() {
        Ok(mut clipboard) => {
            if clipboard.set_text(&text).is_ok() {
                app.set_status(format!("Copié: {}", text), StatusLevel::Info);
            } else {
                app.set_status(
                    "Échec de la copie dans le presse-papiers",
                    StatusLevel::Error,
                );
            }
        }
        Err(_) => {
            app.set_status("Presse-papiers indisponible", StatusLevel::Error);
        }
    }
}
