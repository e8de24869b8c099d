//! QR image decoding and terminal rendering.
//!
//! The backend serves the QR code as an ordinary raster image. It is
//! reduced to its module grid so that each module maps to half a
//! terminal cell (`▀` with separate foreground and background colors).

use image::GrayAlphaImage;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::api::FetchError;
use crate::ui::resource::Payload;

/// Light border added around the code, in modules.
const QUIET_ZONE: usize = 2;
/// A finder pattern is seven modules wide.
const FINDER_MODULES: f64 = 7.0;

const DARK: Color = Color::Black;
const LIGHT: Color = Color::White;

/// Grid of dark/light modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrBitmap {
    width: usize,
    height: usize,
    dark: Vec<bool>,
}

impl Payload for QrBitmap {}

impl QrBitmap {
    /// Builds a bitmap from row-major module values.
    ///
    /// Returns `None` when `dark.len() != width * height`.
    pub fn from_modules(width: usize, height: usize, dark: Vec<bool>) -> Option<Self> {
        (dark.len() == width * height && width > 0 && height > 0).then_some(Self {
            width,
            height,
            dark,
        })
    }

    /// Decodes PNG/JPEG bytes into a module grid.
    pub fn decode(bytes: &[u8]) -> Result<Self, FetchError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| FetchError::Image(e.to_string()))?
            .to_luma_alpha8();
        Self::from_image(&image)
    }

    pub fn from_image(image: &GrayAlphaImage) -> Result<Self, FetchError> {
        let is_dark = |x: u32, y: u32| {
            let [luma, alpha] = image.get_pixel(x, y).0;
            alpha >= 128 && luma < 128
        };

        let (mut left, mut top) = (u32::MAX, u32::MAX);
        let (mut right, mut bottom) = (0u32, 0u32);
        for y in 0..image.height() {
            for x in 0..image.width() {
                if is_dark(x, y) {
                    left = left.min(x);
                    top = top.min(y);
                    right = right.max(x);
                    bottom = bottom.max(y);
                }
            }
        }
        if left == u32::MAX {
            return Err(FetchError::Image("image has no dark pixels".to_string()));
        }

        // Top-left finder: its first row is a run of seven dark modules.
        let run = (left..=right).take_while(|&x| is_dark(x, top)).count() as f64;
        let module = (run / FINDER_MODULES).max(1.0);

        let span_w = f64::from(right - left + 1);
        let span_h = f64::from(bottom - top + 1);
        let code_w = ((span_w / module).round() as usize).max(1);
        let code_h = ((span_h / module).round() as usize).max(1);

        let width = code_w + QUIET_ZONE * 2;
        let height = code_h + QUIET_ZONE * 2;
        let mut dark = vec![false; width * height];
        for my in 0..code_h {
            for mx in 0..code_w {
                let px = left + (((mx as f64) + 0.5) * module) as u32;
                let py = top + (((my as f64) + 0.5) * module) as u32;
                if is_dark(px.min(right), py.min(bottom)) {
                    dark[(my + QUIET_ZONE) * width + mx + QUIET_ZONE] = true;
                }
            }
        }

        Ok(Self {
            width,
            height,
            dark,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.dark[y * self.width + x]
    }

    /// Terminal footprint `(columns, rows)` when drawn unscaled.
    pub fn cell_size(&self) -> (u16, u16) {
        (
            self.width.min(u16::MAX as usize) as u16,
            self.height.div_ceil(2).min(u16::MAX as usize) as u16,
        )
    }
}

/// Draws a `QrBitmap` centered in its area, shrinking it if it does not fit.
pub struct QrWidget<'a> {
    bitmap: &'a QrBitmap,
}

impl<'a> QrWidget<'a> {
    pub fn new(bitmap: &'a QrBitmap) -> Self {
        Self { bitmap }
    }
}

impl Widget for QrWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let bitmap = self.bitmap;
        let scale = (bitmap.width as f64 / f64::from(area.width))
            .max(bitmap.height as f64 / (f64::from(area.height) * 2.0))
            .max(1.0);
        let out_w = ((bitmap.width as f64 / scale).floor() as u16).max(1);
        let out_h = ((bitmap.height as f64 / scale).floor() as usize).max(1);
        let rows = out_h.div_ceil(2) as u16;

        let x0 = area.x + area.width.saturating_sub(out_w) / 2;
        let y0 = area.y + area.height.saturating_sub(rows) / 2;
        let sample = |x: u16, y: usize| {
            if y >= out_h {
                return LIGHT;
            }
            let sx = (f64::from(x) * scale) as usize;
            let sy = (y as f64 * scale) as usize;
            if bitmap.is_dark(sx, sy) {
                DARK
            } else {
                LIGHT
            }
        };

        for row in 0..rows {
            for col in 0..out_w {
                let top = sample(col, usize::from(row) * 2);
                let bottom = sample(col, usize::from(row) * 2 + 1);
                if let Some(cell) = buf.cell_mut(Position::new(x0 + col, y0 + row)) {
                    cell.set_char('▀').set_fg(top).set_bg(bottom);
                }
            }
        }
    }
}
