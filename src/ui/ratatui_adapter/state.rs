//! View state for the ratatui TUI
//!
//! Holds whatever the controller last presented (grid, category controls,
//! detail overlay, status messages) plus purely visual state: the query
//! being typed, the card cursor and scroll position, and the UI mode.

use super::widgets::KeyHint;
use crate::catalog::ProductId;
use crate::filter::CategoryFilter;
use crate::render::{CategoryControl, GridView, ProductCard, ProductDetail};
use crate::ui::output::MessageLevel;
use crate::ui::traits::Presenter;
use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browsing the grid and typing the query
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
    /// Product detail overlay is visible
    Details,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Terminal-side state of the catalog browser
#[derive(Debug)]
pub struct ViewState {
    /// Latest grid content from the controller
    pub grid: GridView,
    /// Latest category controls; `None` hides the category bar
    pub categories: Option<Vec<CategoryControl>>,
    /// Detail overlay content
    pub detail: Option<ProductDetail>,
    /// Query text as typed
    pub query: String,
    /// Byte offset of the cursor within the query
    pub query_cursor: usize,
    /// Index of the highlighted card
    pub cursor: usize,
    /// First visible grid row
    pub scroll_row: usize,
    /// Cards per row (set during render)
    pub columns: usize,
    /// Rows that fit the grid area (set during render)
    pub visible_rows: usize,
    pub mode: Mode,
    pub messages: Vec<StatusMessage>,
    pub message_ttl: Duration,
    /// Key hints for the bottom bar
    pub hints: Vec<KeyHint>,
}

impl ViewState {
    /// Create view state with the query pre-filled
    #[must_use]
    pub fn new(query: impl Into<String>, hints: Vec<KeyHint>) -> Self {
        let query = query.into();
        Self {
            grid: GridView::default(),
            categories: None,
            detail: None,
            query_cursor: query.len(),
            query,
            cursor: 0,
            scroll_row: 0,
            columns: 1,
            visible_rows: 1,
            mode: Mode::Normal,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(4),
            hints,
        }
    }

    fn card_count(&self) -> usize {
        self.grid.cards().len()
    }

    /// The highlighted card, if the grid shows any
    #[must_use]
    pub fn current_card(&self) -> Option<&ProductCard> {
        self.grid.cards().get(self.cursor)
    }

    #[must_use]
    pub fn current_id(&self) -> Option<ProductId> {
        self.current_card().map(|card| card.id)
    }

    /// Record the grid geometry computed during render
    pub fn set_viewport(&mut self, columns: usize, visible_rows: usize) {
        self.columns = columns.max(1);
        self.visible_rows = visible_rows.max(1);
        self.adjust_scroll();
    }

    /// Move the cursor one row up
    pub fn cursor_up(&mut self) {
        if self.cursor >= self.columns {
            self.cursor -= self.columns;
            self.adjust_scroll();
        }
    }

    /// Move the cursor one row down, landing on the last card of a short row
    pub fn cursor_down(&mut self) {
        let count = self.card_count();
        let row = self.cursor / self.columns;
        let last_row = count.saturating_sub(1) / self.columns;
        if count > 0 && row < last_row {
            self.cursor = (self.cursor + self.columns).min(count - 1);
            self.adjust_scroll();
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor + 1 < self.card_count() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    pub fn page_up(&mut self) {
        self.cursor = self
            .cursor
            .saturating_sub(self.visible_rows * self.columns);
        self.adjust_scroll();
    }

    pub fn page_down(&mut self) {
        let max_cursor = self.card_count().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_rows * self.columns).min(max_cursor);
        self.adjust_scroll();
    }

    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.card_count().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Keep the cursor row inside the visible window
    fn adjust_scroll(&mut self) {
        let row = self.cursor / self.columns;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + self.visible_rows {
            self.scroll_row = row + 1 - self.visible_rows;
        }
    }

    /// Filter of the category control next to the active one, wrapping
    ///
    /// Returns `None` while no controls are shown.
    #[must_use]
    pub fn adjacent_category(&self, forward: bool) -> Option<CategoryFilter> {
        let controls = self.categories.as_ref().filter(|c| !c.is_empty())?;
        let active = controls.iter().position(|c| c.active).unwrap_or(0);
        let next = if forward {
            (active + 1) % controls.len()
        } else {
            (active + controls.len() - 1) % controls.len()
        };
        Some(controls[next].filter.clone())
    }

    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
    }

    pub fn query_backspace(&mut self) {
        if self.query_cursor > 0 {
            let prev_char_boundary = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.query.remove(prev_char_boundary);
            self.query_cursor = prev_char_boundary;
        }
    }

    /// Delete the character under the cursor
    pub fn query_delete(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query.remove(self.query_cursor);
        }
    }

    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    pub fn query_clear(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
    }

    /// Delete the word before the cursor
    pub fn query_delete_word(&mut self) {
        let trimmed = self.query[..self.query_cursor].trim_end();
        if let Some(last_space) = trimmed.rfind(' ') {
            self.query.drain(last_space + 1..self.query_cursor);
            self.query_cursor = last_space + 1;
        } else {
            self.query.drain(..self.query_cursor);
            self.query_cursor = 0;
        }
    }

    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    pub fn cleanup_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired(self.message_ttl));
    }
}

impl Presenter for ViewState {
    fn render_grid(&mut self, view: GridView) {
        self.grid = view;
        let count = self.card_count();
        if self.cursor >= count {
            self.cursor = count.saturating_sub(1);
        }
        self.scroll_row = 0;
        self.adjust_scroll();
    }

    fn render_categories(&mut self, controls: Vec<CategoryControl>) {
        self.categories = Some(controls);
    }

    fn show_detail(&mut self, detail: ProductDetail) {
        self.detail = Some(detail);
        self.mode = Mode::Details;
    }

    fn hide_detail(&mut self) {
        self.detail = None;
        if self.mode == Mode::Details {
            self.mode = Mode::Normal;
        }
    }

    fn notify(&mut self, level: MessageLevel, message: &str) {
        self.add_message(level, message.to_string());
    }
}
