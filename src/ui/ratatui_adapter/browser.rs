//! Ratatui-based catalog browser
//!
//! Runs the terminal event loop: fetch completions arrive over a channel
//! from the background workers, key presses come from crossterm, and both
//! are turned into controller calls on this thread.

use super::events::{EventResult, poll_and_handle};
use super::state::{Mode, ViewState};
use super::theme::Theme;
use super::widgets::{
    CARD_HEIGHT, CategoryBar, DetailsModal, HelpBar, HelpOverlay, ProductGrid, SearchBar,
    StatusBar,
};
use crate::catalog::{CatalogSource, FetchEvent, spawn_fetches};
use crate::controller::Controller;
use crate::filter::FilterState;
use crate::render::Placeholder;
use crate::ui::error::{Result, UiError};
use crate::ui::output::MessageLevel;
use crate::ui::traits::Presenter;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use std::io::{self, Stdout};
use std::sync::{Arc, mpsc};
use std::time::Duration;

/// How long to wait for a key before checking the fetch channel again
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Minimum height of the grid area: one card row plus borders
const CARD_ROWS_MIN: u16 = CARD_HEIGHT + 2;

/// Interactive catalog browser
pub struct CatalogBrowser {
    theme: Theme,
    prompt: String,
}

impl CatalogBrowser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            prompt: "❯".to_string(),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Open an image URI with the system handler
    fn open_image(uri: &str) -> Result<()> {
        open::that_detached(uri).map_err(|source| UiError::OpenError {
            uri: uri.to_string(),
            source,
        })
    }

    /// Report the outcome of an open-image request in the status bar
    ///
    /// Launch failures are shown as warnings.
    fn report_open<P: Presenter>(presenter: &mut P, uri: &str, result: Result<()>) {
        match result {
            Ok(()) => presenter.notify(MessageLevel::Info, &format!("Opened {uri}")),
            Err(e) => {
                tracing::warn!(error = %e, "could not open image");
                presenter.notify(MessageLevel::Warning, &e.to_string());
            }
        }
    }

    /// Right-hand status summary: visible count and active category
    fn summary(state: &ViewState) -> Option<String> {
        match state.grid.placeholder() {
            Some(Placeholder::Loading) => Some("loading…".to_string()),
            Some(Placeholder::FetchFailed) => None,
            Some(Placeholder::NoMatches) | None => {
                let shown = state.grid.cards().len();
                let active = state
                    .categories
                    .as_ref()
                    .and_then(|controls| controls.iter().find(|c| c.active));
                Some(match active {
                    Some(control) => format!("{shown} shown · {}", control.label),
                    None => format!("{shown} shown"),
                })
            }
        }
    }

    fn render(&self, frame: &mut Frame, state: &mut ViewState) {
        let theme = &self.theme;
        let category_height = if state.categories.is_some() { 3 } else { 0 };

        let layout = Layout::vertical([
            Constraint::Length(3),               // Search bar
            Constraint::Length(category_height), // Category controls
            Constraint::Min(CARD_ROWS_MIN),      // Product grid
            Constraint::Length(3),               // Status bar
            Constraint::Length(1),               // Help bar
        ])
        .split(frame.area());

        let (columns, rows) = ProductGrid::viewport(layout[2]);
        state.set_viewport(columns, rows);

        let search_bar = SearchBar::new(&state.query, state.query_cursor, &self.prompt, theme)
            .focused(state.mode == Mode::Normal);
        frame.render_widget(search_bar, layout[0]);

        if let Some(controls) = &state.categories {
            frame.render_widget(CategoryBar::new(controls, theme), layout[1]);
        }

        frame.render_widget(ProductGrid::new(state, theme), layout[2]);

        let messages = state.active_messages();
        let summary = Self::summary(state);
        let status_bar = StatusBar::new(&messages, theme).with_summary(summary.as_deref());
        frame.render_widget(status_bar, layout[3]);

        frame.render_widget(HelpBar::new(&state.hints, theme), layout[4]);

        Self::render_overlays(frame, state, theme);
    }

    fn render_overlays(frame: &mut Frame, state: &ViewState, theme: &Theme) {
        match state.mode {
            Mode::Help => frame.render_widget(HelpOverlay::new(theme), frame.area()),
            Mode::Details => {
                if let Some(detail) = &state.detail {
                    frame.render_widget(DetailsModal::new(detail, theme), frame.area());
                }
            }
            Mode::Normal => {}
        }
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        source: Arc<dyn CatalogSource>,
        filter: FilterState,
    ) -> Result<()> {
        let (tx, rx) = mpsc::channel::<FetchEvent>();
        spawn_fetches(source, &tx);
        drop(tx);

        let view = ViewState::new(filter.query(), HelpBar::default_hints());
        let mut controller = Controller::with_filter(view, filter);

        loop {
            for event in rx.try_iter() {
                controller.handle_fetch(event);
            }

            terminal.draw(|frame| self.render(frame, controller.presenter_mut()))?;

            match poll_and_handle(controller.presenter_mut(), POLL_INTERVAL)? {
                EventResult::Quit => break,
                EventResult::QueryChanged => {
                    let query = controller.presenter().query.clone();
                    controller.on_query_changed(query);
                }
                EventResult::SelectCategory(category) => controller.on_category_selected(category),
                EventResult::Activate(id) => controller.on_card_activated(id),
                EventResult::DismissDetail => controller.on_detail_dismissed(),
                EventResult::AddToCart(id) => controller.on_add_to_cart(id),
                EventResult::OpenImage(uri) => {
                    let result = Self::open_image(&uri);
                    Self::report_open(controller.presenter_mut(), &uri, result);
                }
                EventResult::Continue | EventResult::Ignored => {}
            }

            controller.presenter_mut().cleanup_messages();
        }

        Ok(())
    }

    /// Run the browser until the user quits
    ///
    /// Both catalog retrievals start immediately; the grid shows a loading
    /// placeholder until the products arrive.
    ///
    /// # Errors
    ///
    /// Returns `UiError::TerminalError` if the terminal cannot be set up,
    /// drawn to, or polled.
    pub fn run(&self, source: Arc<dyn CatalogSource>, filter: FilterState) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, source, filter);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            tracing::error!(error = %e, "terminal cleanup failed");
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new()
    }
}
