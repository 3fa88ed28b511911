//! Symptom entry form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{SymptomAnswer, SymptomReport, FEATURE_COUNT};
use crate::tui::styles::ClinicTheme;

/// Display labels in feature order.
const FIELD_LABELS: [&str; FEATURE_COUNT] = [
    "Breathing Problem",
    "Pink Eye",
    "Pneumonia",
    "Fever",
    "Acute Gastroenteritis",
    "Dry Cough",
    "Sore Throat",
    "Bladder Infection",
];

/// Form field definition
#[derive(Debug, Clone)]
pub struct SymptomField {
    pub label: &'static str,
    pub answer: SymptomAnswer,
}

/// Symptom form state
pub struct SymptomFormState {
    pub fields: [SymptomField; FEATURE_COUNT],
    pub selected_field: usize,
}

impl Default for SymptomFormState {
    fn default() -> Self {
        Self {
            fields: FIELD_LABELS.map(|label| SymptomField {
                label,
                answer: SymptomAnswer::No,
            }),
            selected_field: 0,
        }
    }
}

impl SymptomFormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Flip the selected answer
    pub fn toggle_answer(&mut self) {
        let field = &mut self.fields[self.selected_field];
        field.answer = field.answer.toggled();
    }

    /// Set the selected answer directly
    pub fn set_answer(&mut self, answer: SymptomAnswer) {
        self.fields[self.selected_field].answer = answer;
    }

    /// Collect the answers into a report, preserving field order.
    #[must_use]
    pub fn to_report(&self) -> SymptomReport {
        let mut answers = [SymptomAnswer::No; FEATURE_COUNT];
        for (slot, field) in answers.iter_mut().zip(self.fields.iter()) {
            *slot = field.answer;
        }
        SymptomReport::from_answers(answers)
    }
}

/// Render the symptom entry form
pub fn render_symptom_form(f: &mut Frame, area: Rect, state: &SymptomFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_form_header(f, chunks[0]);
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2]);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicTheme::text()),
        Span::styled("Patient Symptoms", ClinicTheme::title()),
        Span::styled(" │ Select Yes or No for each", ClinicTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &SymptomFormState) {
    // Create a two-column layout
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (state.fields.len() + 1) / 2;

    render_field_column(f, columns[0], &state.fields[..mid], 0, state.selected_field);
    render_field_column(
        f,
        columns[1],
        &state.fields[mid..],
        mid,
        state.selected_field,
    );
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[SymptomField],
    offset: usize,
    selected: usize,
) {
    let field_height = 3;
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(field_height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == selected;
        let border_style = if is_selected {
            ClinicTheme::border_focused()
        } else {
            ClinicTheme::border()
        };

        let title_style = if is_selected {
            ClinicTheme::focused()
        } else {
            ClinicTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let (no_style, yes_style) = match field.answer {
            SymptomAnswer::No => (ClinicTheme::selected(), ClinicTheme::text_muted()),
            SymptomAnswer::Yes => (ClinicTheme::text_muted(), ClinicTheme::selected()),
        };

        let content = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(" No ", no_style),
            Span::raw("  "),
            Span::styled(" Yes ", yes_style),
        ]))
        .block(block);

        f.render_widget(content, chunks[i]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect) {
    let content = Line::from(vec![
        Span::styled("[↑↓] ", ClinicTheme::key_hint()),
        Span::styled("Navigate ", ClinicTheme::key_desc()),
        Span::styled("[←→/Space] ", ClinicTheme::key_hint()),
        Span::styled("Toggle ", ClinicTheme::key_desc()),
        Span::styled("[Enter] ", ClinicTheme::key_hint()),
        Span::styled("Predict ", ClinicTheme::key_desc()),
        Span::styled("[Esc] ", ClinicTheme::key_hint()),
        Span::styled("Cancel", ClinicTheme::key_desc()),
    ]);

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut state = SymptomFormState::default();
        state.prev_field();
        assert_eq!(state.selected_field, FEATURE_COUNT - 1);
        state.next_field();
        assert_eq!(state.selected_field, 0);
    }

    #[test]
    fn test_toggle_and_report_order() {
        let mut state = SymptomFormState::default();

        // Fever is the fourth field on the form, as in the feature order.
        state.selected_field = 3;
        assert_eq!(state.fields[3].label, "Fever");
        state.toggle_answer();

        let report = state.to_report();
        assert_eq!(report.fever, SymptomAnswer::Yes);
        assert_eq!(report.encode().as_slice(), &[0, 0, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_set_answer_is_idempotent() {
        let mut state = SymptomFormState::default();
        state.set_answer(SymptomAnswer::Yes);
        state.set_answer(SymptomAnswer::Yes);
        assert_eq!(state.fields[0].answer, SymptomAnswer::Yes);
    }
}
