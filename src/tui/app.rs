//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation
//! - Input event handling
//! - Service integration
//!
//! The screening itself runs synchronously inside the event handler: one
//! encode -> predict -> map cycle per explicit submit, with no background
//! work between cycles.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::tree::DecisionTreeModel;
use crate::application::ScreeningService;
use crate::domain::SymptomAnswer;

use super::ui::{
    dashboard::{render_dashboard, DashboardState},
    form::{render_symptom_form, SymptomFormState},
    render_disclaimer,
    result::{render_result, ResultState},
};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    SymptomForm,
    Result,
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// Screening service around the loaded model
    service: ScreeningService<DecisionTreeModel>,

    /// Dashboard state
    dashboard_state: DashboardState,

    /// Symptom form state
    form_state: SymptomFormState,

    /// Result screen state
    result_state: ResultState,
}

impl App {
    /// Create a new application instance, loading the model artifact.
    ///
    /// The artifact path comes from `ADENOSCAN_MODEL_PATH` (default
    /// `models`). A missing or invalid artifact is fatal: the process must
    /// not reach the UI without a classifier.
    ///
    /// # Errors
    /// Returns error if the model cannot be loaded.
    pub fn new() -> Result<Self> {
        let model_path =
            std::env::var("ADENOSCAN_MODEL_PATH").unwrap_or_else(|_| "models".to_string());
        let model_dir = std::path::Path::new(&model_path);

        if !model_dir.exists() {
            return Err(anyhow!(
                "Model path not found at {:?}. Set ADENOSCAN_MODEL_PATH to a directory containing adenovirus_tree.json.",
                model_dir
            ));
        }

        let model = DecisionTreeModel::load(model_dir)
            .map_err(|e| anyhow!("Failed to load model from {:?}: {}", model_dir, e))?;

        let service = ScreeningService::new(Arc::new(model));
        Ok(Self::with_service(service))
    }

    /// Create the application around a pre-built screening service.
    ///
    /// Lets `main.rs` or tests construct the classifier externally
    /// (Composition Root pattern).
    #[must_use]
    pub fn with_service(service: ScreeningService<DecisionTreeModel>) -> Self {
        Self {
            screen: Screen::Dashboard,
            should_quit: false,
            service,
            dashboard_state: DashboardState {
                model_loaded: true,
                screenings_run: 0,
            },
            form_state: SymptomFormState::default(),
            result_state: ResultState::default(),
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(area);

                let content_area = chunks[0];
                let disclaimer_area = chunks[1];

                match self.screen {
                    Screen::Dashboard => render_dashboard(f, content_area, &self.dashboard_state),
                    Screen::SymptomForm => render_symptom_form(f, content_area, &self.form_state),
                    Screen::Result => render_result(f, content_area, &self.result_state),
                }

                render_disclaimer(f, disclaimer_area);
            })?;

            // Handle input (short poll to stay responsive)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Dashboard => self.handle_dashboard_key(key),
            Screen::SymptomForm => self.handle_form_key(key),
            Screen::Result => self.handle_result_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.form_state = SymptomFormState::default();
                self.screen = Screen::SymptomForm;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.screen = Screen::Dashboard;
            }
            KeyCode::Up => {
                self.form_state.prev_field();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form_state.next_field();
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                self.form_state.toggle_answer();
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.form_state.set_answer(SymptomAnswer::Yes);
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.form_state.set_answer(SymptomAnswer::No);
            }
            KeyCode::Enter => {
                self.submit_form();
            }
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyCode) {
        match &self.result_state {
            ResultState::Error { .. } => match key {
                KeyCode::Enter => {
                    self.form_state = SymptomFormState::default();
                    self.screen = Screen::SymptomForm;
                }
                KeyCode::Esc => {
                    self.screen = Screen::Dashboard;
                }
                _ => {}
            },
            _ => match key {
                KeyCode::Char('n') | KeyCode::Char('N') => {
                    self.form_state = SymptomFormState::default();
                    self.screen = Screen::SymptomForm;
                }
                KeyCode::Enter | KeyCode::Esc => {
                    self.screen = Screen::Dashboard;
                }
                _ => {}
            },
        }
    }

    /// Run one screening on the current form answers.
    ///
    /// Answers live only for this interaction: the form is reset as soon as
    /// the report has been handed to the service.
    fn submit_form(&mut self) {
        let report = self.form_state.to_report();

        self.result_state = match self.service.run_screening(&report) {
            Ok(screening) => {
                self.dashboard_state.screenings_run += 1;
                ResultState::Complete { screening }
            }
            Err(e) => {
                tracing::error!("Screening failed: {e}");
                ResultState::Error {
                    message: e.to_string(),
                }
            }
        };

        self.form_state = SymptomFormState::default();
        self.screen = Screen::Result;
    }
}
