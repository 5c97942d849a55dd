//! Event handling for the ratatui TUI
//!
//! Maps keyboard events to view-state edits and to the actions the
//! controller has to perform.

use super::state::{Mode, ViewState};
use crate::catalog::ProductId;
use crate::filter::CategoryFilter;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the browser
    Quit,
    /// Query text changed, needs re-filtering
    QueryChanged,
    /// A category control was chosen
    SelectCategory(CategoryFilter),
    /// A card was activated
    Activate(ProductId),
    /// The detail overlay should close
    DismissDetail,
    /// "Add to cart" on a product
    AddToCart(ProductId),
    /// Open an image URI with the system handler
    OpenImage(String),
    /// No action taken
    Ignored,
}

/// Handle events in normal mode
fn handle_normal_mode(state: &mut ViewState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Quit,

        // Card actions
        (KeyCode::Enter, _) => state
            .current_id()
            .map_or(EventResult::Ignored, EventResult::Activate),
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => state
            .current_id()
            .map_or(EventResult::Ignored, EventResult::AddToCart),
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => state
            .current_card()
            .map_or(EventResult::Ignored, |card| {
                EventResult::OpenImage(card.image.uri.clone())
            }),

        // Grid navigation
        (KeyCode::Up, _) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::Left, KeyModifiers::CONTROL) => {
            state.cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, KeyModifiers::CONTROL) => {
            state.cursor_right();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Category cycling
        (KeyCode::Tab, _) => state
            .adjacent_category(true)
            .map_or(EventResult::Ignored, EventResult::SelectCategory),
        (KeyCode::BackTab, _) => state
            .adjacent_category(false)
            .map_or(EventResult::Ignored, EventResult::SelectCategory),

        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => {
            if state.query_cursor == 0 {
                EventResult::Ignored
            } else {
                state.query_backspace();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Delete, _) => {
            if state.query_cursor >= state.query.len() {
                EventResult::Ignored
            } else {
                state.query_delete();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            if state.query.is_empty() {
                EventResult::Ignored
            } else {
                state.query_clear();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            if state.query_cursor == 0 {
                EventResult::Ignored
            } else {
                state.query_delete_word();
                EventResult::QueryChanged
            }
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events while the detail overlay is open
fn handle_details_mode(state: &ViewState, key: KeyEvent) -> EventResult {
    let Some(detail) = &state.detail else {
        return EventResult::DismissDetail;
    };
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Quit,
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => EventResult::AddToCart(detail.id),
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => {
            EventResult::OpenImage(detail.image.uri.clone())
        }
        (KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q'), _) => EventResult::DismissDetail,
        _ => EventResult::Ignored,
    }
}

/// Any key closes help
const fn handle_help_mode(state: &mut ViewState) -> EventResult {
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Route a key press according to the current mode
pub fn handle_key(state: &mut ViewState, key: KeyEvent) -> EventResult {
    match state.mode {
        Mode::Normal => handle_normal_mode(state, key),
        Mode::Details => handle_details_mode(state, key),
        Mode::Help => handle_help_mode(state),
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut ViewState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::render::{render_categories, render_detail, render_grid};
    use crate::ui::traits::Presenter;

    fn make_state() -> ViewState {
        let products = vec![
            Product::new(1, "Red Shirt", "clothing", 19.999),
            Product::new(2, "Blue Mug", "home", 9.5).with_image("https://example.com/mug.png"),
        ];
        let refs: Vec<&Product> = products.iter().collect();
        let mut state = ViewState::new("", Vec::new());
        state.render_grid(render_grid(&refs));
        state.set_viewport(2, 2);
        state
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_query_input() {
        let mut state = make_state();

        assert_eq!(handle_key(&mut state, press(KeyCode::Char('m'))), EventResult::QueryChanged);
        assert_eq!(handle_key(&mut state, press(KeyCode::Char('u'))), EventResult::QueryChanged);
        assert_eq!(state.query, "mu");

        assert_eq!(handle_key(&mut state, press(KeyCode::Backspace)), EventResult::QueryChanged);
        assert_eq!(state.query, "m");

        assert_eq!(handle_key(&mut state, ctrl('u')), EventResult::QueryChanged);
        assert_eq!(handle_key(&mut state, press(KeyCode::Backspace)), EventResult::Ignored);
    }

    #[test]
    fn test_navigation_and_activation() {
        let mut state = make_state();
        let step = KeyEvent::new(KeyCode::Right, KeyModifiers::CONTROL);

        assert_eq!(handle_key(&mut state, step), EventResult::Continue);
        assert_eq!(state.cursor, 1);
        assert_eq!(handle_key(&mut state, press(KeyCode::Enter)), EventResult::Activate(2));
        assert_eq!(handle_key(&mut state, ctrl('a')), EventResult::AddToCart(2));
        assert_eq!(
            handle_key(&mut state, ctrl('o')),
            EventResult::OpenImage("https://example.com/mug.png".to_string())
        );
    }

    #[test]
    fn test_enter_on_empty_grid() {
        let mut state = ViewState::new("", Vec::new());
        assert_eq!(handle_key(&mut state, press(KeyCode::Enter)), EventResult::Ignored);
    }

    #[test]
    fn test_tab_cycles_categories() {
        let mut state = make_state();
        assert_eq!(handle_key(&mut state, press(KeyCode::Tab)), EventResult::Ignored);

        let labels = vec!["clothing".to_string(), "home".to_string()];
        state.render_categories(render_categories(&labels, &CategoryFilter::from("home")));
        assert_eq!(
            handle_key(&mut state, press(KeyCode::Tab)),
            EventResult::SelectCategory(CategoryFilter::All)
        );
        assert_eq!(
            handle_key(&mut state, press(KeyCode::BackTab)),
            EventResult::SelectCategory(CategoryFilter::from("clothing"))
        );
    }

    #[test]
    fn test_details_mode_keys() {
        let mut state = make_state();
        let product = Product::new(1, "Red Shirt", "clothing", 19.999);
        state.show_detail(render_detail(&product));

        assert_eq!(handle_key(&mut state, press(KeyCode::Char('x'))), EventResult::Ignored);
        assert_eq!(handle_key(&mut state, ctrl('a')), EventResult::AddToCart(1));
        assert_eq!(handle_key(&mut state, press(KeyCode::Char('q'))), EventResult::DismissDetail);
        assert_eq!(handle_key(&mut state, press(KeyCode::Esc)), EventResult::DismissDetail);
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut state = make_state();
        assert_eq!(handle_key(&mut state, press(KeyCode::F(1))), EventResult::Continue);
        assert_eq!(state.mode, Mode::Help);
        assert_eq!(handle_key(&mut state, press(KeyCode::Char('z'))), EventResult::Continue);
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_escape_quits() {
        let mut state = make_state();
        assert_eq!(handle_key(&mut state, press(KeyCode::Esc)), EventResult::Quit);
    }
}
