//! Product grid widget: cards laid out in rows, or a single placeholder

use crate::render::{Placeholder, ProductCard};
use crate::ui::ratatui_adapter::state::ViewState;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Width of one card including its border
pub const CARD_WIDTH: u16 = 30;
/// Height of one card including its border
pub const CARD_HEIGHT: u16 = 6;

/// Shorten `text` to `width` characters, marking the cut with an ellipsis
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

pub struct ProductGrid<'a> {
    state: &'a ViewState,
    theme: &'a Theme,
}

impl<'a> ProductGrid<'a> {
    #[must_use]
    pub const fn new(state: &'a ViewState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn block() -> Block<'static> {
        Block::default().borders(Borders::ALL)
    }

    /// Cards per row and number of visible rows for a grid area
    #[must_use]
    pub fn viewport(area: Rect) -> (usize, usize) {
        let inner = Self::block().inner(area);
        let columns = (inner.width / CARD_WIDTH).max(1);
        let rows = (inner.height / CARD_HEIGHT).max(1);
        (usize::from(columns), usize::from(rows))
    }

    fn render_placeholder(&self, placeholder: Placeholder, area: Rect, buf: &mut Buffer) {
        let style = if placeholder.is_error() {
            self.theme.error_style()
        } else {
            self.theme.dimmed_style()
        };
        let rows = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);
        Paragraph::new(Line::styled(placeholder.message(), style))
            .alignment(Alignment::Center)
            .render(rows[1], buf);
    }

    fn render_card(&self, card: &ProductCard, selected: bool, area: Rect, buf: &mut Buffer) {
        let border_style = if selected {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width);
        let title_style = if selected {
            self.theme.selected_style()
        } else {
            self.theme.title_style()
        };

        let mut price_line = vec![Span::styled(card.price.clone(), self.theme.price_style())];
        if card.image.is_placeholder {
            price_line.push(Span::styled("  no image", self.theme.dimmed_style()));
        }

        let lines = vec![
            Line::styled(truncate(&card.title, width), title_style),
            Line::styled(truncate(&card.category, width), self.theme.category_style()),
            Line::from(vec![
                Span::styled(card.stars.to_string(), self.theme.star_style()),
                Span::raw(" "),
                Span::styled(card.rating.clone(), self.theme.dimmed_style()),
            ]),
            Line::from(price_line),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for ProductGrid<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cards = self.state.grid.cards();
        let title = if self.state.grid.placeholder().is_some() {
            " Products ".to_string()
        } else {
            format!(" Products ({}) ", cards.len())
        };
        let block = Self::block()
            .border_style(self.theme.border_style())
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let Some(placeholder) = self.state.grid.placeholder() {
            self.render_placeholder(placeholder, inner, buf);
            return;
        }

        let columns = self.state.columns.max(1);
        let start = self.state.scroll_row * columns;
        let end = (start + self.state.visible_rows * columns).min(cards.len());

        for (offset, card) in cards.iter().enumerate().take(end).skip(start) {
            let slot = offset - start;
            let cell = Rect::new(
                inner.x + (slot % columns) as u16 * CARD_WIDTH,
                inner.y + (slot / columns) as u16 * CARD_HEIGHT,
                CARD_WIDTH,
                CARD_HEIGHT,
            )
            .intersection(inner);
            if cell.is_empty() {
                continue;
            }
            self.render_card(card, offset == self.state.cursor, cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::render::{GridView, render_grid};
    use crate::ui::traits::Presenter;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Blue Mug", 20), "Blue Mug");
        assert_eq!(truncate("Mens Casual Premium Slim Fit", 10), "Mens Casu…");
        assert_eq!(truncate("anything", 0), "…");
    }

    #[test]
    fn test_viewport() {
        assert_eq!(ProductGrid::viewport(Rect::new(0, 0, 62, 14)), (2, 2));
        assert_eq!(ProductGrid::viewport(Rect::new(0, 0, 10, 3)), (1, 1));
    }

    #[test]
    fn test_renders_cards() {
        let products = vec![
            Product::new(1, "Red Shirt", "clothing", 19.999),
            Product::new(2, "Blue Mug", "home", 9.5),
        ];
        let refs: Vec<&Product> = products.iter().collect();
        let mut state = ViewState::new("", Vec::new());
        state.render_grid(render_grid(&refs));
        let area = Rect::new(0, 0, 62, 8);
        let (columns, rows) = ProductGrid::viewport(area);
        state.set_viewport(columns, rows);

        let mut buf = Buffer::empty(area);
        ProductGrid::new(&state, &Theme::default()).render(area, &mut buf);
        let text = buffer_text(&buf);

        assert!(text.contains("Red Shirt"));
        assert!(text.contains("$19.99"));
        assert!(text.contains("$9.50"));
        assert!(text.contains("★★★★☆"));
    }

    #[test]
    fn test_renders_placeholder() {
        let mut state = ViewState::new("", Vec::new());
        state.render_grid(GridView::Placeholder(Placeholder::NoMatches));
        let area = Rect::new(0, 0, 60, 7);

        let mut buf = Buffer::empty(area);
        ProductGrid::new(&state, &Theme::default()).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("No products found matching your criteria."));
    }
}
