//! Configuration file support.
//!
//! Loads an optional `site.toml`. Every key is optional; omitted keys keep
//! the shipped defaults.

use crate::content::SiteContent;
use crate::error::{CoreError, CoreResult};
use crate::gesture::SWIPE_THRESHOLD_PX;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_FILE: &str = "site.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix prepended to every asset filename (`assets/` by default).
    pub assets_base: String,
    /// Horizontal travel in px a drag must exceed to switch screenshots.
    pub swipe_threshold_px: f64,
    pub content: SiteContent,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_base: "assets/".into(),
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            content: SiteContent::default(),
        }
    }
}

impl SiteConfig {
    /// Load config from `path`. A missing file yields the defaults; a file that
    /// exists but does not parse or validate is an error.
    pub fn load_from_path(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse config text that was embedded at build time.
    pub fn from_toml_str(raw: &str) -> CoreResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|source| CoreError::ConfigParse {
            path: PathBuf::from("<embedded>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !(self.swipe_threshold_px.is_finite() && self.swipe_threshold_px > 0.0) {
            return Err(CoreError::InvalidContent(format!(
                "swipe_threshold_px must be a positive number, got {}",
                self.swipe_threshold_px
            )));
        }
        self.content.validate()
    }

    /// URL the page uses for an asset file.
    pub fn asset_url(&self, file: &str) -> String {
        if self.assets_base.is_empty() || self.assets_base.ends_with('/') {
            format!("{}{}", self.assets_base, file)
        } else {
            format!("{}/{}", self.assets_base, file)
        }
    }

    /// Referenced assets that do not exist under `dir`.
    pub fn missing_assets(&self, dir: &Path) -> Vec<PathBuf> {
        self.content
            .asset_files()
            .into_iter()
            .map(|file| dir.join(file))
            .filter(|path| !path.is_file())
            .inspect(|path| warn!(path = %path.display(), "asset not found"))
            .collect()
    }

    /// Fail on the first referenced asset missing under `dir`.
    pub fn require_assets(&self, dir: &Path) -> CoreResult<()> {
        match self.missing_assets(dir).into_iter().next() {
            Some(path) => Err(CoreError::MissingAsset(path)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CardBody;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config =
            SiteConfig::load_from_path(&temp.path().join(DEFAULT_CONFIG_FILE)).expect("defaults");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            r#"
assets_base = "/static"
swipe_threshold_px = 80.0

[content]
tagline = "Spot leaf curl before it spreads"
screenshots = ["a.png", "b.png"]

[[content.project_cards]]
title = "Stack"
body = {{ list = ["Rust", "Leptos"] }}
"#
        )
        .expect("write config");

        let config = SiteConfig::load_from_path(&path).expect("valid config");
        assert_eq!(config.assets_base, "/static");
        assert_eq!(config.swipe_threshold_px, 80.0);
        assert_eq!(config.content.tagline, "Spot leaf curl before it spreads");
        assert_eq!(config.content.screenshots, vec!["a.png", "b.png"]);
        assert_eq!(
            config.content.project_cards[0].body,
            CardBody::List(vec!["Rust".into(), "Leptos".into()])
        );
        // untouched keys keep defaults
        assert_eq!(config.content.app_name, "Leaf Curl Virus Detection");
        assert_eq!(config.asset_url("a.png"), "/static/a.png");
    }

    #[test]
    fn test_shipped_site_toml_matches_defaults() {
        let config = SiteConfig::from_toml_str(include_str!("../../site.toml"))
            .expect("shipped site.toml");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "assets_base = [").expect("write config");
        let err = SiteConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse { .. }));
    }

    #[test]
    fn test_empty_screenshot_list_is_error() {
        let err = SiteConfig::from_toml_str("[content]\nscreenshots = []\n").unwrap_err();
        assert!(matches!(err, CoreError::EmptyCarousel));
    }

    #[test]
    fn test_non_positive_threshold_is_error() {
        assert!(SiteConfig::from_toml_str("swipe_threshold_px = 0.0").is_err());
        assert!(SiteConfig::from_toml_str("swipe_threshold_px = -3.0").is_err());
    }

    #[test]
    fn test_asset_url_joins_base() {
        let mut config = SiteConfig::default();
        assert_eq!(config.asset_url("logo.png"), "assets/logo.png");
        config.assets_base = String::new();
        assert_eq!(config.asset_url("logo.png"), "logo.png");
    }

    #[test]
    fn test_missing_assets() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::default();
        assert_eq!(config.missing_assets(temp.path()).len(), 7);

        for file in config.content.asset_files() {
            std::fs::write(temp.path().join(file), b"x").expect("write asset");
        }
        assert!(config.missing_assets(temp.path()).is_empty());
        config.require_assets(temp.path()).expect("all assets present");

        std::fs::remove_file(temp.path().join("pic-3.jpg")).expect("remove");
        let err = config.require_assets(temp.path()).unwrap_err();
        assert!(matches!(err, CoreError::MissingAsset(p) if p.ends_with("pic-3.jpg")));
    }
}
