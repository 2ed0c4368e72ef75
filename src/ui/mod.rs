use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod tabs;

use crate::app::{App, InputMode, StatusLevel};

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.size();
    let areas = layout::areas(size);

    tabs::draw_tab_bar(f, areas.header, app);
    tabs::draw_panel(f, areas.panel, app);
    draw_footer(f, areas.footer, app);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size);
    }
    if let Some(notice) = app.notice.as_ref() {
        draw_notice_popup(f, areas.size, &notice.text);
    }
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(Line::from(Span::styled(
        app.footer.as_str(),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let flux = app.camera_endpoint.as_deref().unwrap_or("--");
    let line = Line::from(vec![
        Span::styled("Onglet ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.active_tab.id())),
        Span::styled("Flux ", Style::default().fg(Color::DarkGray)),
        Span::raw(flux.to_string()),
    ]);

    let paragraph = Paragraph::new(line)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => Line::from(vec![
            Span::styled(": ", Style::default().fg(Color::Yellow)),
            Span::raw(&app.command.input),
            Span::styled(
                "  commandes: vente maintenance camera action aide quitter",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(Span::styled(text.to_string(), Style::default().fg(color)))
            } else if let Some(last) = app.command.last.as_deref() {
                Line::from(Span::styled(
                    format!(": {last}"),
                    Style::default().fg(Color::DarkGray),
                ))
            } else {
                Line::from(Span::styled(
                    "1/2/3 onglets  Entrée action  : commande  ? aide  q quitter",
                    Style::default().fg(Color::DarkGray),
                ))
            }
        }
    };

    f.render_widget(Paragraph::new(content), area);
}

fn draw_notice_popup(f: &mut Frame, area: Rect, text: &str) {
    let popup_area = centered_rect(64, 28, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(""),
        Line::from(text),
        Line::from(""),
        Line::from(Span::styled(
            "Entrée ou Échap pour fermer",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title("Notification")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(56, 56, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  1 / 2 / 3  Choisir un onglet"),
        Line::from("  Tab, l / h Onglet suivant / précédent"),
        Line::from("  ← / →      Onglet précédent / suivant"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  Entrée     Déclencher l'action de l'onglet"),
        Line::from("  y          Copier l'URL de la caméra (onglet caméra)"),
        Line::from("  :          Ligne de commande"),
        Line::from("  ?          Ouvrir/fermer cette aide"),
        Line::from("  q          Quitter"),
        Line::from(""),
        Line::from("Commandes:"),
        Line::from("  : vente | maintenance | camera"),
        Line::from("  : action | aide | quitter"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Aide").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
