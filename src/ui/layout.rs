use ratatui::layout::Rect;

/// Narrowest movie card, border included.
pub const CARD_MIN_WIDTH: u16 = 28;
/// Movie card height, border included.
pub const CARD_HEIGHT: u16 = 6;
/// Most columns the gallery grid uses, however wide the terminal.
pub const MAX_GALLERY_COLUMNS: usize = 5;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Rect of `width` x `height` centered in `area`, clamped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Grid columns for a terminal `width` (1 to 5, like a responsive grid).
pub fn gallery_columns(width: u16) -> usize {
    usize::from(width / CARD_MIN_WIDTH).clamp(1, MAX_GALLERY_COLUMNS)
}

/// Splits `area` into `columns` equal cells per row, `CARD_HEIGHT` tall,
/// for `rows` rows. Cells that would not fit are omitted.
pub fn grid_cells(area: Rect, columns: usize, rows: usize) -> Vec<Rect> {
    let columns = columns.max(1) as u16;
    let cell_width = area.width / columns;
    let mut cells = Vec::new();
    for row in 0..rows as u16 {
        let y = area.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.y + area.height {
            break;
        }
        for col in 0..columns {
            cells.push(Rect {
                x: area.x + col * cell_width,
                y,
                width: cell_width,
                height: CARD_HEIGHT,
            });
        }
    }
    cells
}
