//! Typography primitives and the semantic type ramp
//!
//! [`FontInfo`] is what control tokens hand to renderers for any text they
//! draw. [`TypographyTokens`] names the semantic styles built on top of the
//! global font size and weight scales.

use crate::global::{self, Dp, FontSizeTokens, FontWeightTokens};
use serde::{Deserialize, Serialize};

// =============================================================================
// Font Primitives
// =============================================================================

/// Font size paired with its line height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSize {
    /// Glyph size in sp
    pub size: f32,
    /// Line height in sp
    pub line_height: f32,
}

impl FontSize {
    /// Create a font size
    pub const fn new(size: f32, line_height: f32) -> Self {
        Self { size, line_height }
    }
}

/// Numeric font weight (400 regular .. 700 bold)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FontWeight(pub u16);

/// Everything needed to lay out a run of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontInfo {
    /// Size and line height
    pub font_size: FontSize,
    /// Weight
    pub weight: FontWeight,
    /// Font family override (None = platform default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl FontInfo {
    /// Create font info with the platform font
    pub fn new(font_size: FontSize, weight: FontWeight) -> Self {
        Self {
            font_size,
            weight,
            font_family: None,
        }
    }

    /// Build from global size and weight tokens
    pub fn from_tokens(size: FontSizeTokens, weight: FontWeightTokens) -> Self {
        Self::new(global::font_size(size), global::font_weight(weight))
    }

    /// Set font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Scale size and line height by a multiplier
    pub fn scale(&self, multiplier: f32) -> Self {
        Self {
            font_size: FontSize::new(
                self.font_size.size * multiplier,
                self.font_size.line_height * multiplier,
            ),
            weight: self.weight,
            font_family: self.font_family.clone(),
        }
    }

    /// Line height as a layout dimension
    pub fn line_height_dp(&self) -> Dp {
        self.font_size.line_height
    }
}

// =============================================================================
// Typography Ramp
// =============================================================================

/// Semantic text styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypographyTokens {
    /// Hero numbers and splash text
    Display,
    /// Screen titles
    LargeTitle,
    /// Primary headings
    Title1,
    /// Secondary headings
    Title2,
    /// Tertiary headings
    Title3,
    /// Emphasised body text
    Body1Strong,
    /// Body text
    Body1,
    /// Emphasised secondary text
    Body2Strong,
    /// Secondary text
    Body2,
    /// Emphasised caption
    Caption1Strong,
    /// Caption
    Caption1,
    /// Smallest caption
    Caption2,
}

/// Resolve a semantic text style
pub fn typography(token: TypographyTokens) -> FontInfo {
    use FontSizeTokens as S;
    use FontWeightTokens as W;

    match token {
        TypographyTokens::Display => FontInfo::from_tokens(S::Size900, W::Bold),
        TypographyTokens::LargeTitle => FontInfo::from_tokens(S::Size800, W::Bold),
        TypographyTokens::Title1 => FontInfo::from_tokens(S::Size700, W::Bold),
        TypographyTokens::Title2 => FontInfo::from_tokens(S::Size500, W::SemiBold),
        TypographyTokens::Title3 => FontInfo::from_tokens(S::Size400, W::SemiBold),
        TypographyTokens::Body1Strong => FontInfo::from_tokens(S::Size300, W::SemiBold),
        TypographyTokens::Body1 => FontInfo::from_tokens(S::Size300, W::Regular),
        TypographyTokens::Body2Strong => FontInfo::from_tokens(S::Size200, W::SemiBold),
        TypographyTokens::Body2 => FontInfo::from_tokens(S::Size200, W::Regular),
        TypographyTokens::Caption1Strong => FontInfo::from_tokens(S::Size100, W::SemiBold),
        TypographyTokens::Caption1 => FontInfo::from_tokens(S::Size100, W::Regular),
        // Below the global ramp
        TypographyTokens::Caption2 => FontInfo::new(
            FontSize::new(10.0, 12.0),
            global::font_weight(W::Regular),
        ),
    }
}
