//! Movie gallery screen.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::Movie;
use crate::ui::app::App;
use crate::ui::layout::{centered_rect_by_size, gallery_columns, grid_cells, CARD_HEIGHT};
use crate::ui::resource::{ResourceState, ResourceView};
use crate::ui::theme::{
    BRAND_BLUE, BRAND_PURPLE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, RATING_STAR, SKELETON,
    STATUS_ERROR,
};

pub const GALLERY_TITLE: &str = "Movie Gallery";
pub const GALLERY_SUBTITLE: &str = "Discover amazing movies from our curated collection";
pub const EMPTY_TITLE: &str = "No Movies Found";
pub const EMPTY_BODY: &str =
    "We couldn't find any movies in this collection. The collection might be empty or unavailable.";
pub const BACK_LABEL: &str = "Back to QR Generator";
pub const SHARE_LABEL: &str = "Share";
pub const RETRY_LABEL: &str = "Retry";
pub const GENERATE_LABEL: &str = "Generate New QR Code";
/// Shown when a movie has no rating, or a rating of zero.
pub const FALLBACK_RATING: &str = "8.5";
/// Placeholder cards drawn while loading.
pub const SKELETON_CARDS: usize = 8;

/// One movie, formatted for a card.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    /// 1-based position in the collection.
    pub position: usize,
    pub title: String,
    pub rating: String,
    pub details: String,
}

impl MovieCard {
    pub fn new(position: usize, movie: &Movie) -> Self {
        let rating = movie
            .rating
            .filter(|r| *r != 0.0 && !r.is_nan())
            .map(|r| r.to_string())
            .unwrap_or_else(|| FALLBACK_RATING.to_string());
        let details = [
            movie.year.map(|y| y.to_string()),
            movie.duration.clone(),
            movie.genre.clone(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
        Self {
            position,
            title: movie.title.clone(),
            rating,
            details,
        }
    }
}

/// What the grid area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryContent<'a> {
    Skeleton(usize),
    Failed(&'a str),
    Empty,
    Cards(Vec<MovieCard>),
}

pub fn gallery_content(movies: &ResourceState<Vec<Movie>>) -> GalleryContent<'_> {
    match movies.view() {
        ResourceView::Loading => GalleryContent::Skeleton(SKELETON_CARDS),
        ResourceView::Failed(message) => GalleryContent::Failed(message),
        ResourceView::Empty => GalleryContent::Empty,
        ResourceView::Ready(list) => GalleryContent::Cards(
            list.iter()
                .enumerate()
                .map(|(index, movie)| MovieCard::new(index + 1, movie))
                .collect(),
        ),
    }
}

pub fn stats_line(count: usize) -> String {
    let noun = if count == 1 { "movie" } else { "movies" };
    format!("Showing {} {} in this collection", count, noun)
}

/// First grid row to draw so that `selected_row` stays visible.
pub fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    selected_row.saturating_sub(visible_rows.saturating_sub(1))
}

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let [heading, grid, stats] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Min(CARD_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_heading(frame, heading, app);

    let content = gallery_content(app.movies());
    match &content {
        GalleryContent::Skeleton(count) => draw_skeleton(frame, grid, *count),
        GalleryContent::Failed(message) => centered_lines(
            frame,
            grid,
            vec![
                Line::from(Span::styled(message.to_string(), Style::default().fg(STATUS_ERROR))),
                Line::from(""),
                Line::from(format!("[r] {}", RETRY_LABEL)),
            ],
        ),
        GalleryContent::Empty => centered_lines(
            frame,
            grid,
            vec![
                Line::from(Span::styled(
                    EMPTY_TITLE,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(EMPTY_BODY, Style::default().fg(MUTED_TEXT))),
                Line::from(""),
                Line::from(format!("[n] {}", GENERATE_LABEL)),
            ],
        ),
        GalleryContent::Cards(cards) => {
            draw_cards(frame, grid, cards, app.selection());
            frame.render_widget(
                Paragraph::new(Span::styled(
                    stats_line(cards.len()),
                    Style::default().fg(MUTED_TEXT),
                ))
                .alignment(Alignment::Center),
                stats,
            );
        }
    }
}

fn draw_heading(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let collection = app
        .collection()
        .map(|id| format!("Collection #{}", id))
        .unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(
            GALLERY_TITLE,
            Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(GALLERY_SUBTITLE, Style::default().fg(HEADER_TEXT))),
        Line::from(Span::styled(collection, Style::default().fg(BRAND_PURPLE))),
        Line::from(vec![
            Span::styled(format!("[b] {}", BACK_LABEL), Style::default().fg(MUTED_TEXT)),
            Span::raw("   "),
            Span::styled(format!("[s] {}", SHARE_LABEL), Style::default().fg(MUTED_TEXT)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

fn draw_cards(frame: &mut Frame<'_>, area: Rect, cards: &[MovieCard], selection: usize) {
    let columns = gallery_columns(area.width);
    let visible_rows = usize::from(area.height / CARD_HEIGHT).max(1);
    let first_row = first_visible_row(selection / columns, visible_rows);

    let cells = grid_cells(area, columns, visible_rows);
    let start = first_row * columns;
    for (offset, cell) in cells.into_iter().enumerate() {
        let index = start + offset;
        let Some(card) = cards.get(index) else {
            break;
        };
        draw_card(frame, cell, card, index == selection);
    }
}

fn draw_card(frame: &mut Frame<'_>, area: Rect, card: &MovieCard, selected: bool) {
    let border = if selected {
        Style::default().fg(BRAND_PURPLE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };
    let lines = vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("★ ", Style::default().fg(RATING_STAR)),
            Span::raw(card.rating.clone()),
        ]),
        Line::from(Span::styled(card.details.clone(), Style::default().fg(MUTED_TEXT))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(format!(" #{} ", card.position)),
            ),
        area,
    );
}

fn draw_skeleton(frame: &mut Frame<'_>, area: Rect, count: usize) {
    let columns = gallery_columns(area.width);
    let rows = count.div_ceil(columns);
    let style = Style::default().fg(SKELETON);
    for cell in grid_cells(area, columns, rows).into_iter().take(count) {
        let bar = "░".repeat(usize::from(cell.width.saturating_sub(4)));
        let short = "░".repeat(usize::from(cell.width.saturating_sub(4) / 2));
        let lines = vec![
            Line::from(Span::styled(bar.clone(), style)),
            Line::from(Span::styled(short, style)),
            Line::from(Span::styled(bar, style)),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).border_style(style)),
            cell,
        );
    }
}

fn centered_lines(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'static>>) {
    let width = area.width.min(80);
    let height = (lines.len() as u16 + 2).min(area.height);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        centered_rect_by_size(area, width, height),
    );
}
