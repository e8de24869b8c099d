//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::api::CollectionId;
use crate::config::Config;
use crate::ui::Route;

#[derive(Debug, Parser)]
#[command(name = "movieqr", version, about = "Scan a QR code, discover movies")]
pub struct Cli {
    /// Path to the config file (default: ~/.config/movieqr/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the backend base URL (also: MOVIEQR_API_URL)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Open the gallery for this collection instead of the QR screen
    #[arg(long, value_name = "ID")]
    pub collection: Option<String>,

    /// Seconds between automatic QR refreshes
    #[arg(long, value_name = "SECONDS")]
    pub refresh_interval: Option<u64>,

    /// Write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Path of the config file to load.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Applies command-line overrides on top of file and env settings.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.trim().to_string();
        }
        if let Some(seconds) = self.refresh_interval {
            config.qr.refresh_interval_seconds = seconds;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }

    /// Route to open on startup.
    pub fn initial_route(&self) -> anyhow::Result<Route> {
        match &self.collection {
            Some(raw) => {
                let id = CollectionId::parse(raw)
                    .ok_or_else(|| anyhow::anyhow!("Collection id must not be empty"))?;
                Ok(Route::Gallery(id))
            }
            None => Ok(Route::Qr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_win_over_config() {
        let cli = Cli::parse_from([
            "movieqr",
            "--api-url",
            "http://10.0.0.2:9000",
            "--refresh-interval",
            "3",
        ]);
        let mut config = Config::default();
        cli.apply_to(&mut config);
        assert_eq!(config.api.base_url, "http://10.0.0.2:9000");
        assert_eq!(config.qr.refresh_interval_seconds, 3);
    }

    #[test]
    fn collection_flag_opens_gallery() {
        let cli = Cli::parse_from(["movieqr", "--collection", "42"]);
        let route = cli.initial_route().unwrap();
        assert_eq!(route, Route::Gallery(CollectionId::parse("42").unwrap()));
    }

    #[test]
    fn blank_collection_is_rejected() {
        let cli = Cli::parse_from(["movieqr", "--collection", "  "]);
        assert!(cli.initial_route().is_err());
    }

    #[test]
    fn defaults_to_qr_route() {
        let cli = Cli::parse_from(["movieqr"]);
        assert_eq!(cli.initial_route().unwrap(), Route::Qr);
    }
}
