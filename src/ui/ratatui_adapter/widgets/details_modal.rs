//! Details modal widget for displaying a single product

use crate::render::ProductDetail;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Details modal widget that displays product information
pub struct DetailsModal<'a> {
    detail: &'a ProductDetail,
    theme: &'a Theme,
}

impl<'a> DetailsModal<'a> {
    #[must_use]
    pub const fn new(detail: &'a ProductDetail, theme: &'a Theme) -> Self {
        Self { detail, theme }
    }

    /// Calculate centered area for the modal
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height.min(90)) / 2),
            Constraint::Percentage(height.min(90)),
            Constraint::Percentage((100 - height.min(90)) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width.min(90)) / 2),
            Constraint::Percentage(width.min(90)),
            Constraint::Percentage((100 - width.min(90)) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn field(&self, label: &'static str, value: Span<'static>) -> Line<'static> {
        Line::from(vec![Span::styled(label, self.theme.dimmed_style()), value])
    }

    fn build_content(&self, width: usize) -> Vec<Line<'static>> {
        let detail = self.detail;
        let rule = "─".repeat(width);

        let mut rating = vec![
            Span::styled(detail.stars.to_string(), self.theme.star_style()),
            Span::raw(" "),
            Span::raw(detail.rating.clone()),
        ];
        if let Some(count) = detail.rating_count {
            rating.push(Span::styled(
                format!(" ({count} reviews)"),
                self.theme.dimmed_style(),
            ));
        }

        let image = if detail.image.is_placeholder {
            Span::styled(
                format!("{} (placeholder)", detail.image.uri),
                self.theme.dimmed_style(),
            )
        } else {
            Span::raw(detail.image.uri.clone())
        };

        let description = if detail.description.is_empty() {
            Line::styled(
                "(no description)",
                self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
            )
        } else {
            Line::raw(detail.description.clone())
        };

        let mut lines = vec![
            Line::styled(detail.title.clone(), self.theme.title_style()),
            Line::styled(rule.clone(), self.theme.border_style()),
            Line::default(),
            self.field(
                "Category: ",
                Span::styled(detail.category.clone(), self.theme.category_style()),
            ),
            self.field(
                "Price:    ",
                Span::styled(detail.price.clone(), self.theme.price_style()),
            ),
            Line::from(
                std::iter::once(Span::styled("Rating:   ", self.theme.dimmed_style()))
                    .chain(rating)
                    .collect::<Vec<_>>(),
            ),
            self.field("Image:    ", image),
            Line::default(),
            description,
            Line::default(),
            Line::styled(rule, self.theme.border_style()),
        ];

        lines.push(Line::from(vec![
            Span::styled("Ctrl+A", self.theme.cursor_style()),
            Span::raw(" add to cart  "),
            Span::styled("Ctrl+O", self.theme.cursor_style()),
            Span::raw(" open image  "),
            Span::styled("ESC", self.theme.cursor_style()),
            Span::raw(" close"),
        ]));

        lines
    }
}

impl Widget for DetailsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(80, 70, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Product Details ")
            .title_alignment(Alignment::Center);

        let width = usize::from(block.inner(popup_area).width);
        let content = self.build_content(width);
        let paragraph = Paragraph::new(content)
            .block(block)
            .wrap(Wrap { trim: false });
        paragraph.render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::render::render_detail;

    #[test]
    fn test_renders_fields() {
        let product = Product::new(1, "Red Shirt", "clothing", 19.999)
            .with_description("Soft cotton")
            .with_rating(3.9, 120);
        let detail = render_detail(&product);
        let area = Rect::new(0, 0, 140, 40);
        let mut buf = Buffer::empty(area);

        DetailsModal::new(&detail, &Theme::default()).render(area, &mut buf);
        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();

        assert!(text.contains("Red Shirt"));
        assert!(text.contains("Soft cotton"));
        assert!(text.contains("$19.99"));
        assert!(text.contains("(120 reviews)"));
        assert!(text.contains("(placeholder)"));
    }
}
