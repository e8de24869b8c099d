use crate::ui::app::{Notice, Route};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const QR_HINTS: &str = " r: New QR Code │ o: Open Collection │ q: Quit";
const GALLERY_HINTS: &str =
    " ←↑↓→: Select │ r: Retry │ s: Share │ b: Back │ o: Open Collection │ q: Quit";
const PROMPT_HINTS: &str = " Enter: Open │ Esc: Cancel";

/// Bottom bar: key hints for the current screen, replaced by a notice
/// while one is showing, and the version on the right.
pub struct Footer<'a> {
    route: Option<&'a Route>,
    notice: Option<&'a Notice>,
    prompt_open: bool,
}

impl<'a> Footer<'a> {
    pub fn new(route: Option<&'a Route>, notice: Option<&'a Notice>, prompt_open: bool) -> Self {
        Self {
            route,
            notice,
            prompt_open,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let (text, style) = match self.notice {
            Some(notice) => {
                let color = if notice.is_error { STATUS_ERROR } else { STATUS_OK };
                (format!(" {}", notice.text), Style::default().fg(color))
            }
            None => {
                let hints = if self.prompt_open {
                    PROMPT_HINTS
                } else {
                    match self.route {
                        Some(Route::Gallery(_)) => GALLERY_HINTS,
                        _ => QR_HINTS,
                    }
                };
                (hints.to_string(), dim)
            }
        };
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: hints contain box-drawing characters
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(text.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(text, style),
            Span::styled(" ".repeat(padding), dim),
            Span::styled(version, dim),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
