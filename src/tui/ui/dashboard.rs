//! Dashboard view: Main overview screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::styles::ClinicTheme;

/// Dashboard state for rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardState {
    pub model_loaded: bool,
    pub screenings_run: usize,
}

/// Render the main dashboard view.
pub fn render_dashboard(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_main_content(f, chunks[1], state);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicTheme::text()),
        Span::styled("Adenoscan", ClinicTheme::title()),
        Span::styled(" │ ", ClinicTheme::text_muted()),
        Span::styled("Adenovirus Detection Tool", ClinicTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_main_content(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Status and actions
            Constraint::Percentage(55), // About
        ])
        .split(area);

    render_status_panels(f, chunks[0], state);
    render_about(f, chunks[1]);
}

fn render_status_panels(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // System status
            Constraint::Min(0),    // Quick actions
        ])
        .margin(1)
        .split(area);

    let status_items = vec![
        format_status_item("Model Loaded", state.model_loaded),
        Line::from(vec![
            Span::styled("  Screenings this session: ", ClinicTheme::text_secondary()),
            Span::styled(state.screenings_run.to_string(), ClinicTheme::text()),
        ]),
    ];

    let status_block = Block::default()
        .title(Span::styled(" System Status ", ClinicTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(ClinicTheme::border());

    let status_list = Paragraph::new(status_items).block(status_block);
    f.render_widget(status_list, chunks[0]);

    let actions = vec![
        Line::from(vec![
            Span::styled("[N] ", ClinicTheme::key_hint()),
            Span::styled("New Screening", ClinicTheme::key_desc()),
        ]),
        Line::from(vec![
            Span::styled("[Q] ", ClinicTheme::key_hint()),
            Span::styled("Quit", ClinicTheme::key_desc()),
        ]),
    ];

    let actions_block = Block::default()
        .title(Span::styled(" Quick Actions ", ClinicTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(ClinicTheme::border());

    let actions_list = Paragraph::new(actions).block(actions_block);
    f.render_widget(actions_list, chunks[1]);
}

fn format_status_item(label: &str, ok: bool) -> Line<'static> {
    let (icon, style) = if ok {
        ("OK", ClinicTheme::success())
    } else {
        ("FAIL", ClinicTheme::danger())
    };

    Line::from(vec![
        Span::styled(format!("  {icon} "), style),
        Span::styled(label.to_string(), ClinicTheme::text()),
    ])
}

fn render_about(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" About ", ClinicTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(ClinicTheme::border());

    let lines = vec![
        Line::from(Span::styled(
            "Predicts the likelihood of Adenovirus infection from patient",
            ClinicTheme::text(),
        )),
        Line::from(Span::styled(
            "symptoms, to support early detection and preventive care,",
            ClinicTheme::text(),
        )),
        Line::from(Span::styled(
            "especially in areas with limited healthcare access.",
            ClinicTheme::text(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Classifier: ", ClinicTheme::text_secondary()),
            Span::styled("Decision Tree", ClinicTheme::text()),
        ]),
        Line::from(vec![
            Span::styled("Dataset:    ", ClinicTheme::text_secondary()),
            Span::styled("Patient health parameters (5,434 records)", ClinicTheme::text()),
        ]),
        Line::from(vec![
            Span::styled("Target:     ", ClinicTheme::text_secondary()),
            Span::styled("Adenoviruses (Yes/No)", ClinicTheme::text()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Always consult a qualified healthcare professional for",
            ClinicTheme::text_muted(),
        )),
        Line::from(Span::styled(
            "diagnosis and treatment.",
            ClinicTheme::text_muted(),
        )),
    ];

    let p = Paragraph::new(lines).block(block);
    f.render_widget(p, area);
}
