//! Category bar widget: one control per category, "all" first

use crate::render::CategoryControl;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct CategoryBar<'a> {
    controls: &'a [CategoryControl],
    theme: &'a Theme,
}

impl<'a> CategoryBar<'a> {
    #[must_use]
    pub const fn new(controls: &'a [CategoryControl], theme: &'a Theme) -> Self {
        Self { controls, theme }
    }
}

impl Widget for CategoryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Categories (Tab / Shift+Tab) ");

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::with_capacity(self.controls.len() * 2);
        for (i, control) in self.controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if control.active {
                self.theme.selected_style()
            } else {
                self.theme.category_style()
            };
            spans.push(Span::styled(format!(" {} ", control.label), style));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
