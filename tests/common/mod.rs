//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use image::{GrayImage, ImageFormat, Luma};
use movieqr::api::{CollectionId, Movie};
use movieqr::ui::app::{App, AppSettings, UiCommand};
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// App wired to a command channel the test can inspect.
pub fn test_app() -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(64);
    (App::new(test_settings(), tx), rx)
}

pub fn test_settings() -> AppSettings {
    AppSettings {
        refresh_interval: Duration::from_secs(10),
        share_base_url: "http://localhost:3000".to_string(),
    }
}

/// Everything sent so far, without waiting.
pub fn drain(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

pub fn collection(id: &str) -> CollectionId {
    CollectionId::parse(id).expect("valid collection id")
}

pub fn movie(title: &str) -> Movie {
    Movie {
        title: title.to_string(),
        image_url: format!("https://img.example/{}.jpg", title),
        rating: None,
        year: None,
        duration: None,
        genre: None,
    }
}

/// Write `contents` to a config.toml in a fresh temp dir.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, contents).expect("Failed to write config");
    (temp_dir, config_path)
}

/// PNG of a 21x21 module grid with the three finder patterns, 4 px per
/// module and an 8 px white margin.
pub fn qr_png() -> Vec<u8> {
    const MODULES: u32 = 21;
    const SCALE: u32 = 4;
    const MARGIN: u32 = 8;

    let finder_origins = [(0, 0), (MODULES - 7, 0), (0, MODULES - 7)];
    let is_dark = |mx: u32, my: u32| {
        finder_origins.iter().any(|&(ox, oy)| {
            if mx < ox || my < oy || mx >= ox + 7 || my >= oy + 7 {
                return false;
            }
            let (x, y) = (mx - ox, my - oy);
            let ring = x == 0 || y == 0 || x == 6 || y == 6;
            let core = (2..=4).contains(&x) && (2..=4).contains(&y);
            ring || core
        })
    };

    let side = MODULES * SCALE + MARGIN * 2;
    let image = GrayImage::from_fn(side, side, |px, py| {
        let inside = (MARGIN..side - MARGIN).contains(&px) && (MARGIN..side - MARGIN).contains(&py);
        if inside && is_dark((px - MARGIN) / SCALE, (py - MARGIN) / SCALE) {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    });

    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    bytes
}
