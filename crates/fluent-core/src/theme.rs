//! Theme provider and configuration
//!
//! A [`FluentTheme`] is the top-level bundle a theme scope is rooted at: the
//! active [`ThemeMode`], the alias tokens of the active brand and the shared
//! control token registry. Cloning a theme is cheap; every clone of the
//! same theme shares one registry.
//!
//! # Usage
//!
//! ```rust
//! use fluent_core::theme::{FluentTheme, ThemeConfig, ThemeMode};
//!
//! let config = ThemeConfig::from_json(r#"{ "mode": "dark" }"#).unwrap();
//! let theme = config.into_theme().unwrap();
//! assert_eq!(theme.mode(), ThemeMode::Dark);
//!
//! let light = theme.with_mode(ThemeMode::Light);
//! assert!(std::sync::Arc::ptr_eq(theme.control_tokens(), light.control_tokens()));
//! ```

use crate::alias::AliasTokens;
use crate::color::Color;
use crate::control::ControlType;
use crate::global::{BrandColorTokens, BrandRamp};
use crate::registry::ControlTokens;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// Theme configuration errors
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Color string is not `#RRGGBB` / `#RRGGBBAA`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Theme mode name not recognised
    #[error("Unknown theme mode: {0}")]
    UnknownThemeMode(String),

    /// Control type name not recognised
    #[error("Unknown control type: {0}")]
    UnknownControlType(String),

    /// A registry update paired a control type with another control's token
    #[error("Token mismatch: expected {expected} token, got {found} token")]
    TokenMismatch {
        /// Control type the update was addressed to
        expected: ControlType,
        /// Control type of the supplied token
        found: ControlType,
    },

    /// Brand ramp stop outside 10..=160 in steps of 10
    #[error("Unknown brand shade: {0}")]
    UnknownBrandShade(u16),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

// =============================================================================
// Mode and Style
// =============================================================================

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light appearance
    #[default]
    Light,
    /// Dark appearance
    Dark,
}

impl ThemeMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "Light"),
            ThemeMode::Dark => write!(f, "Dark"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ThemeError::UnknownThemeMode(s.to_string())),
        }
    }
}

/// Color family a control is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FluentStyle {
    /// Neutral greys
    #[default]
    Neutral,
    /// Brand colors
    Brand,
}

// =============================================================================
// Theme
// =============================================================================

/// The active theme: mode, alias tokens and control token registry
#[derive(Debug, Clone)]
pub struct FluentTheme {
    mode: ThemeMode,
    alias_tokens: Arc<AliasTokens>,
    control_tokens: Arc<ControlTokens>,
}

impl Default for FluentTheme {
    fn default() -> Self {
        Self::new(ThemeMode::Light)
    }
}

impl FluentTheme {
    /// Default brand and a fresh registry
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            alias_tokens: Arc::new(AliasTokens::default()),
            control_tokens: Arc::new(ControlTokens::new()),
        }
    }

    /// Same theme with other alias tokens
    pub fn with_alias_tokens(mut self, alias_tokens: AliasTokens) -> Self {
        self.alias_tokens = Arc::new(alias_tokens);
        self
    }

    /// Same theme with another registry
    pub fn with_control_tokens(mut self, control_tokens: Arc<ControlTokens>) -> Self {
        self.control_tokens = control_tokens;
        self
    }

    /// Same tokens in another mode; the registry is shared, not copied
    pub fn with_mode(&self, mode: ThemeMode) -> Self {
        Self {
            mode,
            alias_tokens: Arc::clone(&self.alias_tokens),
            control_tokens: Arc::clone(&self.control_tokens),
        }
    }

    /// Active mode
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Alias tokens of the active brand
    pub fn alias_tokens(&self) -> &AliasTokens {
        &self.alias_tokens
    }

    /// The shared control token registry
    pub fn control_tokens(&self) -> &Arc<ControlTokens> {
        &self.control_tokens
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Theme configuration as stored by the host application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Appearance
    #[serde(default)]
    pub mode: ThemeMode,

    /// Brand ramp overrides keyed by stop (10..=160); missing stops keep
    /// the default ramp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<BTreeMap<u16, String>>,
}

impl ThemeConfig {
    /// Parse a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        tracing::info!("Loaded theme config from {}", path.display());
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Build the brand ramp described by this configuration
    pub fn brand_ramp(&self) -> Result<BrandRamp> {
        let mut ramp = BrandRamp::default();
        if let Some(shades) = &self.brand {
            for (shade, hex) in shades {
                let token = BrandColorTokens::from_shade(*shade)
                    .ok_or(ThemeError::UnknownBrandShade(*shade))?;
                ramp = ramp.with(token, Color::from_hex(hex)?);
            }
        }
        Ok(ramp)
    }

    /// Build a theme with a fresh registry
    pub fn into_theme(self) -> Result<FluentTheme> {
        let alias = AliasTokens::with_brand(self.brand_ramp()?);
        Ok(FluentTheme::new(self.mode).with_alias_tokens(alias))
    }
}
