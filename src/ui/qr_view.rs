//! QR landing screen.

use chrono::{DateTime, Local};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::QrCode;
use crate::ui::app::App;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::qr_image::QrWidget;
use crate::ui::resource::ResourceView;
use crate::ui::theme::{
    BRAND_BLUE, BRAND_PURPLE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};

pub const HERO_TITLE: &str = "Movie Discovery";
pub const HERO_TAGLINE: &str =
    "Scan the QR code below to unlock a curated collection of 10 amazing random movies";
pub const CARD_TITLE: &str = "Your Movie QR Code";
pub const CARD_SUBTITLE: &str = "Point your camera at the code below";
pub const LOADING_TEXT: &str = "Generating QR Code...";
pub const GENERATE_LABEL: &str = "Generate New QR Code";
pub const REFRESHING_LABEL: &str = "Refreshing...";
pub const TRY_AGAIN_LABEL: &str = "Try Again";
pub const NO_CODE_TEXT: &str = "No QR code available";

const SCAN_STEPS: [(&str, &str); 3] = [
    ("Open Camera", "Launch your phone's camera app"),
    ("Point & Scan", "Aim at the QR code above"),
    ("Discover Movies", "Tap to open the movie gallery"),
];

/// Widest the QR card gets.
const CARD_MAX_WIDTH: u16 = 72;

/// "Last updated" clock, 12-hour with seconds.
pub fn format_time(at: &DateTime<Local>) -> String {
    at.format("%-I:%M:%S %p").to_string()
}

pub fn refresh_badge(app: &App) -> String {
    format!(
        "Auto-refreshes every {} seconds",
        app.refresh_interval().as_secs()
    )
}

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let [hero, badge, card, steps] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(2),
        Constraint::Min(8),
        Constraint::Length(5),
    ])
    .areas(area);

    let hero_text = vec![
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(HERO_TAGLINE, Style::default().fg(HEADER_TEXT))),
    ];
    frame.render_widget(
        Paragraph::new(hero_text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        hero,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("⟳ {}", refresh_badge(app)),
            Style::default().fg(BRAND_PURPLE),
        ))
        .alignment(Alignment::Center),
        badge,
    );

    draw_card(frame, centered_rect_by_size(card, CARD_MAX_WIDTH, card.height), app);
    draw_steps(frame, steps);
}

fn draw_card(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(Line::from(Span::styled(
            format!(" {} ", CARD_TITLE),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [subtitle, content, action, updated] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(CARD_SUBTITLE, Style::default().fg(MUTED_TEXT)))
            .alignment(Alignment::Center),
        subtitle,
    );

    match app.qr().view() {
        ResourceView::Loading => centered_lines(
            frame,
            content,
            vec![Line::from(format!("{} {}", app.spinner(), LOADING_TEXT))],
        ),
        ResourceView::Failed(message) => centered_lines(
            frame,
            content,
            vec![
                Line::from(Span::styled(message.to_string(), Style::default().fg(STATUS_ERROR))),
                Line::from(""),
                Line::from(format!("[r] {}", TRY_AGAIN_LABEL)),
            ],
        ),
        ResourceView::Empty => centered_lines(frame, content, vec![Line::from(NO_CODE_TEXT)]),
        ResourceView::Ready(code) => draw_code(frame, content, app, code),
    }

    let action_line = if app.qr().is_loading() {
        Line::from(Span::styled(REFRESHING_LABEL, Style::default().fg(MUTED_TEXT)))
    } else {
        Line::from(Span::styled(
            format!("[r] {}", GENERATE_LABEL),
            Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(Paragraph::new(action_line).alignment(Alignment::Center), action);

    if let Some(at) = app.qr().last_updated() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("Last updated: {}", format_time(&at)),
                Style::default().fg(MUTED_TEXT),
            ))
            .alignment(Alignment::Center),
            updated,
        );
    }
}

fn draw_code(frame: &mut Frame<'_>, area: Rect, app: &App, code: &QrCode) {
    match app.qr_image().view() {
        ResourceView::Ready(bitmap) => frame.render_widget(QrWidget::new(bitmap), area),
        ResourceView::Loading => centered_lines(
            frame,
            area,
            vec![
                Line::from(format!("{} Loading image...", app.spinner())),
                Line::from(Span::styled(code.url.clone(), Style::default().fg(MUTED_TEXT))),
            ],
        ),
        // Undecodable image: the link is still scannable by hand
        ResourceView::Failed(_) | ResourceView::Empty => centered_lines(
            frame,
            area,
            vec![
                Line::from("Open this link on your phone:"),
                Line::from(Span::styled(code.url.clone(), Style::default().fg(BRAND_BLUE))),
            ],
        ),
    }
}

fn draw_steps(frame: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(" How to Scan ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);
    for (index, ((title, body), column)) in SCAN_STEPS.iter().zip(columns.iter()).enumerate() {
        let lines = vec![
            Line::from(Span::styled(
                format!("{}  {}", index + 1, title),
                Style::default().fg(BRAND_PURPLE).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*body, Style::default().fg(MUTED_TEXT))),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            *column,
        );
    }
}

fn centered_lines(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'static>>) {
    let height = (lines.len() as u16).min(area.height);
    let rect = centered_rect_by_size(area, area.width, height);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn time_is_twelve_hour_with_seconds() {
        let afternoon = Local.with_ymd_and_hms(2024, 3, 9, 15, 4, 5).unwrap();
        assert_eq!(format_time(&afternoon), "3:04:05 PM");
        let morning = Local.with_ymd_and_hms(2024, 3, 9, 0, 30, 0).unwrap();
        assert_eq!(format_time(&morning), "12:30:00 AM");
    }
}
