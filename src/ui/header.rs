use crate::ui::app::Route;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_BLUE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const BRAND: &str = "MovieQR";
pub const QR_TAB: &str = "QR Generator";

/// Top navigation bar: brand plus the QR tab, highlighted while active.
pub struct Header<'a> {
    route: Option<&'a Route>,
}

impl<'a> Header<'a> {
    pub fn new(route: Option<&'a Route>) -> Self {
        Self { route }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let brand_style = Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD);
        let tab_style = if self.route == Some(&Route::Qr) {
            text_style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD)
        } else {
            text_style
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(BRAND, brand_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!(" {} ", QR_TAB), tab_style),
        ];
        if let Some(Route::Gallery(id)) = self.route {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(format!("Collection #{}", id), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
