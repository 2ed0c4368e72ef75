//! Tab bar and active-tab panel rendering

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs as RataTabs, Wrap};
use ratatui::Frame;

use crate::app::{App, Tab};

/// Draw the header: application title and the tab strip
pub fn draw_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            Line::from(vec![
                Span::styled(
                    format!("{}:", tab.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(tab.title()),
            ])
        })
        .collect();

    let selected = Tab::ALL
        .iter()
        .position(|tab| *tab == app.active_tab)
        .unwrap_or(0);

    let tabs = RataTabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(app.title.as_str()),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" │ ");

    f.render_widget(tabs, area);
}

/// Draw the active tab's content panel: description and action button
pub fn draw_panel(f: &mut Frame, area: Rect, app: &App) {
    let tab = app.active_tab;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(tab.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let description =
        Paragraph::new(Line::from(Span::raw(tab.description()))).wrap(Wrap { trim: true });
    f.render_widget(description, chunks[1]);

    let action = Line::from(vec![
        Span::styled(
            format!("[ {} ]", tab.action_label()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "Entrée pour déclencher",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(action), chunks[2]);

    if tab == Tab::Camera {
        draw_camera_endpoint(f, chunks[3], app);
    }
}

fn draw_camera_endpoint(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.camera_endpoint.as_deref() {
        Some(url) => Line::from(vec![
            Span::styled("Flux: ", Style::default().fg(Color::DarkGray)),
            Span::styled(url, Style::default().fg(Color::Cyan)),
            Span::styled("  (y pour copier)", Style::default().fg(Color::DarkGray)),
        ]),
        None => Line::from(Span::styled(
            "Aucun flux configuré (section [camera] de config.toml ou --camera-url)",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}
