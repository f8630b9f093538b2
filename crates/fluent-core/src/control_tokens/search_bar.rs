//! Search bar tokens
//!
//! The brand style only tints the bar in light mode; in dark mode it falls
//! back to the neutral surfaces so the bar never glows on a dark page.

use super::circular_progress::CircularProgressIndicatorSize;
use crate::alias::{
    BrandBackgroundColorTokens as BrandBg, NeutralBackgroundColorTokens as NeutralBg,
    NeutralForegroundColorTokens as NeutralFg,
};
use crate::color::{Color, FluentColor};
use crate::control::{ControlInfo, ControlKind, ControlToken, ControlType};
use crate::global::{self, Dp, IconSize, IconSizeTokens, SizeTokens};
use crate::state::PaddingValues;
use crate::theme::{FluentStyle, FluentTheme, ThemeMode};
use crate::typography::{FontInfo, TypographyTokens};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Per-render info for a search bar
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchBarInfo {
    /// Color family
    pub style: FluentStyle,
}

impl SearchBarInfo {
    /// Create info
    pub fn new(style: FluentStyle) -> Self {
        Self { style }
    }
}

/// Brand in light mode, neutral in dark mode
fn brand_light(brand_light: FluentColor, neutral: FluentColor, mode: ThemeMode) -> Color {
    FluentColor::new(
        brand_light.value(ThemeMode::Light),
        neutral.value(ThemeMode::Dark),
    )
    .value(mode)
}

/// Token set of the search bar
pub trait SearchBarTokens: Send + Sync + fmt::Debug {
    /// Fill of the text input
    fn input_background_color(&self, info: &SearchBarInfo, theme: &FluentTheme) -> Color {
        let alias = theme.alias_tokens();
        let neutral = alias.neutral_background(NeutralBg::Background5);
        match info.style {
            FluentStyle::Neutral => neutral.value(theme.mode()),
            FluentStyle::Brand => brand_light(
                alias.brand_background(BrandBg::BrandBackground2),
                neutral,
                theme.mode(),
            ),
        }
    }

    /// Fill behind the whole bar
    fn background_color(&self, info: &SearchBarInfo, theme: &FluentTheme) -> Color {
        let alias = theme.alias_tokens();
        let neutral = alias.neutral_background(NeutralBg::Background3);
        match info.style {
            FluentStyle::Neutral => neutral.value(theme.mode()),
            FluentStyle::Brand => brand_light(
                alias.brand_background(BrandBg::BrandBackground1),
                neutral,
                theme.mode(),
            ),
        }
    }

    /// Query and placeholder text
    fn text_color(&self, info: &SearchBarInfo, theme: &FluentTheme) -> Color {
        let alias = theme.alias_tokens();
        let neutral = alias.neutral_foreground(NeutralFg::Foreground3);
        match info.style {
            FluentStyle::Neutral => neutral.value(theme.mode()),
            FluentStyle::Brand => brand_light(
                alias.neutral_foreground(NeutralFg::ForegroundOnColor),
                neutral,
                theme.mode(),
            ),
        }
    }

    /// Search (leading) icon
    fn left_icon_color(&self, info: &SearchBarInfo, theme: &FluentTheme) -> Color {
        self.text_color(info, theme)
    }

    /// Clear (trailing) icon
    fn right_icon_color(&self, info: &SearchBarInfo, theme: &FluentTheme) -> Color {
        let alias = theme.alias_tokens();
        let neutral = alias.neutral_foreground(NeutralFg::Foreground2);
        match info.style {
            FluentStyle::Neutral => neutral.value(theme.mode()),
            FluentStyle::Brand => brand_light(
                alias.neutral_foreground(NeutralFg::ForegroundOnColor),
                neutral,
                theme.mode(),
            ),
        }
    }

    /// Query font
    fn typography(&self, _info: &SearchBarInfo, theme: &FluentTheme) -> FontInfo {
        theme.alias_tokens().typography(TypographyTokens::Body1)
    }

    /// Search icon box
    fn left_icon_size(&self, _info: &SearchBarInfo, _theme: &FluentTheme) -> IconSize {
        global::icon_size(IconSizeTokens::Small)
    }

    /// Clear icon box
    fn right_icon_size(&self, _info: &SearchBarInfo, _theme: &FluentTheme) -> IconSize {
        global::icon_size(IconSizeTokens::Small)
    }

    /// Spinner shown while a search is loading
    fn circular_progress_indicator_size(
        &self,
        _info: &SearchBarInfo,
        _theme: &FluentTheme,
    ) -> CircularProgressIndicatorSize {
        CircularProgressIndicatorSize::Medium
    }

    /// Padding around the input
    fn padding(&self, _info: &SearchBarInfo, _theme: &FluentTheme) -> PaddingValues {
        PaddingValues::all(global::size(SizeTokens::Size80))
    }

    /// Space after the spinner
    fn progress_indicator_right_padding(
        &self,
        _info: &SearchBarInfo,
        _theme: &FluentTheme,
    ) -> PaddingValues {
        PaddingValues::end(global::size(SizeTokens::Size160))
    }

    /// Input height
    fn height(&self, _info: &SearchBarInfo, _theme: &FluentTheme) -> Dp {
        global::size(SizeTokens::Size400)
    }
}

/// Built-in search bar tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSearchBarTokens;

impl SearchBarTokens for DefaultSearchBarTokens {}

/// Marker for [`ControlType::SearchBar`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchBar;

impl ControlKind for SearchBar {
    const TYPE: ControlType = ControlType::SearchBar;
    type Tokens = dyn SearchBarTokens;
    type Info = SearchBarInfo;

    fn default_tokens() -> Arc<dyn SearchBarTokens> {
        Arc::new(DefaultSearchBarTokens)
    }

    fn wrap_tokens(tokens: Arc<dyn SearchBarTokens>) -> ControlToken {
        ControlToken::SearchBar(tokens)
    }

    fn unwrap_tokens(token: &ControlToken) -> Option<Arc<dyn SearchBarTokens>> {
        match token {
            ControlToken::SearchBar(tokens) => Some(Arc::clone(tokens)),
            _ => None,
        }
    }

    fn wrap_info(info: SearchBarInfo) -> ControlInfo {
        ControlInfo::SearchBar(info)
    }

    fn unwrap_info(info: &ControlInfo) -> Option<&SearchBarInfo> {
        match info {
            ControlInfo::SearchBar(info) => Some(info),
            _ => None,
        }
    }
}
