use crate::ui::app::{App, Route};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};
use crate::ui::{gallery_view, qr_view};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub const PROMPT_TITLE: &str = " Open Collection ";
pub const PROMPT_INVALID: &str = "Collection id must not be empty";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.route()).widget(), header);
    frame.render_widget(Clear, body);
    match app.route() {
        Some(Route::Qr) => qr_view::draw(frame, body, app),
        Some(Route::Gallery(_)) => gallery_view::draw(frame, body, app),
        None => {}
    }
    let footer_widget = Footer::new(app.route(), app.notice(), app.prompt().is_visible());
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some(value) = app.prompt().value() {
        let popup = centered_rect_by_size(area, 50, 5);
        let mut lines = vec![Line::from(vec![
            Span::styled("Collection id: ", Style::default().fg(HEADER_TEXT)),
            Span::raw(value.to_string()),
            Span::raw("▏"),
        ])];
        if app.prompt().is_invalid() {
            lines.push(Line::from(Span::styled(
                PROMPT_INVALID,
                Style::default().fg(STATUS_ERROR),
            )));
        }
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .title(PROMPT_TITLE)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            ),
            popup,
        );
    }
}
