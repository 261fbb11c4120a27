//! Configuration for the Showcase carousel.
//!
//! Carousel behaviour, the item catalog and the player window are read from a
//! single TOML or JSON document. Evaluation order, first hit wins:
//! 1) `$SHOWCASE_CONFIG_PATH` (TOML or JSON file),
//! 2) `$SHOWCASE_CONFIG_JSON` (inline JSON),
//! 3) `showcase.toml`, `showcase.json`, `config/showcase.toml`,
//!    `config/showcase.json` relative to the working directory,
//! 4) built-in defaults.
//!
//! A `.env` file is honoured before any variable is read.

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use showcase_core::settings::CarouselSettings;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Path to a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "SHOWCASE_CONFIG_PATH";
/// Inline JSON config, used when no path is set.
pub const CONFIG_JSON_VAR: &str = "SHOWCASE_CONFIG_JSON";

const DEFAULT_FILE_CANDIDATES: &[&str] = &[
    "showcase.toml",
    "showcase.json",
    "config/showcase.toml",
    "config/showcase.json",
];

/// Source that produced the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Built-in defaults; nothing was found.
    #[default]
    Default,
    /// File named by [`CONFIG_PATH_VAR`].
    EnvPath(PathBuf),
    /// JSON from [`CONFIG_JSON_VAR`].
    EnvInline,
    /// One of the default file candidates.
    File(PathBuf),
}

/// One card in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Card heading; must not be blank.
    pub title: String,
    /// Line under the title.
    #[serde(default)]
    pub caption: String,
    /// Price label, shown at the bottom when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl CatalogItem {
    /// Item without a price.
    pub fn new(title: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            caption: caption.into(),
            price: None,
        }
    }

    /// Attach a price label.
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }
}

fn default_catalog() -> Vec<CatalogItem> {
    [
        ("Trail Runner", "Lightweight grip for wet rock", "$129"),
        ("Summit Pack 30L", "Roll-top, seam-sealed", "$189"),
        ("Alpine Shell", "Three-layer waterproof jacket", "$349"),
        ("Base Layer Crew", "Merino, 180 gsm", "$89"),
        ("Headlamp 400", "USB-C, red night mode", "$59"),
        ("Insulated Bottle", "750 ml, keeps cold 24h", "$39"),
        ("Trekking Poles", "Carbon, folding", "$149"),
        ("Camp Stove", "Canister, 2.6 kW", "$79"),
        ("Down Quilt", "800 fill, -5 C", "$299"),
    ]
    .into_iter()
    .map(|(title, caption, price)| CatalogItem::new(title, caption).with_price(price))
    .collect()
}

/// Initial size of the player window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Logical px; also the viewport width the carousel starts with.
    pub width: f32,
    /// Logical px.
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 560.0,
        }
    }
}

/// Full configuration document. Missing sections take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Carousel behaviour.
    pub carousel: CarouselSettings,
    /// Player window.
    pub window: WindowSettings,
    /// Cards shown by the carousel, in display order. Fixed for the lifetime
    /// of the process.
    pub items: Vec<CatalogItem>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselSettings::default(),
            window: WindowSettings::default(),
            items: default_catalog(),
        }
    }
}

impl ShowcaseConfig {
    /// Load configuration using `.env`, environment variables and the default
    /// file candidates in the working directory.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => log::warn!("Ignoring unreadable .env file: {err}"),
        }

        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// Same as [`Self::load_from_env`] but with an injectable variable lookup
    /// and base directory for the default file candidates.
    pub fn load_with<F>(lookup: F, base_dir: &Path) -> anyhow::Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, source) = Self::resolve(lookup, base_dir)?;
        config
            .validate()
            .with_context(|| format!("invalid showcase config from {source:?}"))?;
        log::info!(
            "Showcase config loaded from {:?}: {} items",
            source,
            config.items.len()
        );
        Ok((config, source))
    }

    fn resolve<F>(lookup: F, base_dir: &Path) -> anyhow::Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str.trim());
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(base_dir) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    /// Read one file. `.json` and `.toml` pick the parser; any other
    /// extension tries both.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read showcase config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents)
                .with_context(|| format!("invalid showcase config {}", path.display())),
            Some("toml") => toml::from_str(&contents)
                .map_err(|err| anyhow!("invalid showcase config {}: {}", path.display(), err)),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Try TOML first, then JSON.
    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse showcase config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    /// Parse an inline JSON document.
    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).map_err(|err| anyhow!("invalid showcase config json: {err}"))
    }

    /// Check carousel settings, window size and item titles. An empty
    /// catalog is allowed but logged.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.carousel.validate()?;
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(anyhow!(
                "window size must be positive, got {}x{}",
                self.window.width,
                self.window.height
            ));
        }
        if let Some(position) = self.items.iter().position(|item| item.title.trim().is_empty()) {
            return Err(anyhow!("item {position} has an empty title"));
        }
        if self.items.is_empty() {
            log::warn!("Showcase catalog is empty; carousel navigation will be disabled");
        }
        Ok(())
    }

    fn find_default_file(base_dir: &Path) -> Option<PathBuf> {
        DEFAULT_FILE_CANDIDATES
            .iter()
            .map(|candidate| base_dir.join(candidate))
            .find(|path| path.exists())
    }
}
