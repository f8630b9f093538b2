//! Floating action button tokens

use crate::alias::{
    BrandBackgroundColorTokens as BrandBg, NeutralBackgroundColorTokens as NeutralBg,
    NeutralForegroundColorTokens as NeutralFg,
};
use crate::control::{ControlInfo, ControlKind, ControlToken, ControlType};
use crate::global::{
    self, Dp, ElevationTokens, IconSize, IconSizeTokens, SizeTokens, SpacingTokens,
};
use crate::state::{PaddingValues, StateBorderStroke, StateColor, StateElevation};
use crate::theme::FluentTheme;
use crate::typography::{FontInfo, TypographyTokens};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Whether the label is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FabState {
    /// Icon only
    Collapsed,
    /// Icon and label
    #[default]
    Expanded,
}

/// Button size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FabSize {
    /// 48dp tall
    Small,
    /// 56dp tall
    #[default]
    Large,
}

/// Per-render info for a floating action button
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FabInfo {
    /// Expansion state
    pub state: FabState,
    /// Size
    pub size: FabSize,
}

impl FabInfo {
    /// Create info
    pub fn new(state: FabState, size: FabSize) -> Self {
        Self { state, size }
    }
}

/// Token set of the floating action button
///
/// Every method has a default. Implement the trait on your own type and
/// override only the attributes you want to change.
pub trait FabTokens: Send + Sync + fmt::Debug {
    /// Container fill
    fn background_color(&self, _info: &FabInfo, theme: &FluentTheme) -> StateColor {
        let alias = theme.alias_tokens();
        let mode = theme.mode();
        StateColor::new(alias.brand_background(BrandBg::BrandBackground1).value(mode))
            .with_pressed(alias.brand_background(BrandBg::BrandBackground1Pressed).value(mode))
            .with_selected(alias.brand_background(BrandBg::BrandBackground1Selected).value(mode))
            .with_focused(alias.brand_background(BrandBg::BrandBackground1).value(mode))
            .with_hovered(alias.brand_background(BrandBg::BrandBackground1).value(mode))
            .with_disabled(alias.neutral_background(NeutralBg::Background5).value(mode))
    }

    /// Icon tint
    fn icon_color(&self, _info: &FabInfo, theme: &FluentTheme) -> StateColor {
        let alias = theme.alias_tokens();
        let mode = theme.mode();
        StateColor::new(alias.neutral_foreground(NeutralFg::ForegroundOnColor).value(mode))
            .with_disabled(alias.neutral_foreground(NeutralFg::ForegroundDisable1).value(mode))
    }

    /// Label color
    fn text_color(&self, info: &FabInfo, theme: &FluentTheme) -> StateColor {
        self.icon_color(info, theme)
    }

    /// Border stack, innermost first; only drawn while focused
    fn border_stroke(&self, _info: &FabInfo, theme: &FluentTheme) -> StateBorderStroke {
        StateBorderStroke::new(Vec::new()).with_focused(super::focus_ring(theme))
    }

    /// Shadow elevation
    fn elevation(&self, _info: &FabInfo, _theme: &FluentTheme) -> StateElevation {
        StateElevation::new(global::elevation(ElevationTokens::Elevation08))
            .with_pressed(global::elevation(ElevationTokens::Elevation02))
            .with_disabled(global::elevation(ElevationTokens::Elevation00))
    }

    /// Icon box
    fn icon_size(&self, info: &FabInfo, _theme: &FluentTheme) -> IconSize {
        match info.size {
            FabSize::Small => global::icon_size(IconSizeTokens::Small),
            FabSize::Large => global::icon_size(IconSizeTokens::Medium),
        }
    }

    /// Label font
    fn font_info(&self, info: &FabInfo, theme: &FluentTheme) -> FontInfo {
        match info.size {
            FabSize::Small => theme.alias_tokens().typography(TypographyTokens::Body2Strong),
            FabSize::Large => theme.alias_tokens().typography(TypographyTokens::Body1Strong),
        }
    }

    /// Container height
    fn fixed_height(&self, info: &FabInfo, _theme: &FluentTheme) -> Dp {
        match info.size {
            FabSize::Small => global::size(SizeTokens::Size480),
            FabSize::Large => global::size(SizeTokens::Size560),
        }
    }

    /// Minimum container width
    fn min_width(&self, info: &FabInfo, theme: &FluentTheme) -> Dp {
        self.fixed_height(info, theme)
    }

    /// Content padding when only the icon shows
    fn icon_padding(&self, info: &FabInfo, _theme: &FluentTheme) -> PaddingValues {
        match info.size {
            FabSize::Small => PaddingValues::all(global::size(SizeTokens::Size120)),
            FabSize::Large => PaddingValues::all(global::size(SizeTokens::Size160)),
        }
    }

    /// Content padding when the label shows
    fn text_padding(&self, info: &FabInfo, _theme: &FluentTheme) -> PaddingValues {
        match info.size {
            FabSize::Small => PaddingValues::new(
                global::size(SizeTokens::Size120),
                global::size(SizeTokens::Size120),
                global::size(SizeTokens::Size160),
                global::size(SizeTokens::Size120),
            ),
            FabSize::Large => PaddingValues::new(
                global::size(SizeTokens::Size160),
                global::size(SizeTokens::Size160),
                global::size(SizeTokens::Size200),
                global::size(SizeTokens::Size160),
            ),
        }
    }

    /// Gap between icon and label
    fn spacing(&self, info: &FabInfo, _theme: &FluentTheme) -> Dp {
        match info.size {
            FabSize::Small => global::spacing(SpacingTokens::XXSmall),
            FabSize::Large => global::spacing(SpacingTokens::XSmall),
        }
    }
}

/// Built-in floating action button tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFabTokens;

impl FabTokens for DefaultFabTokens {}

/// Marker for [`ControlType::FloatingActionButton`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatingActionButton;

impl ControlKind for FloatingActionButton {
    const TYPE: ControlType = ControlType::FloatingActionButton;
    type Tokens = dyn FabTokens;
    type Info = FabInfo;

    fn default_tokens() -> Arc<dyn FabTokens> {
        Arc::new(DefaultFabTokens)
    }

    fn wrap_tokens(tokens: Arc<dyn FabTokens>) -> ControlToken {
        ControlToken::FloatingActionButton(tokens)
    }

    fn unwrap_tokens(token: &ControlToken) -> Option<Arc<dyn FabTokens>> {
        match token {
            ControlToken::FloatingActionButton(tokens) => Some(Arc::clone(tokens)),
            _ => None,
        }
    }

    fn wrap_info(info: FabInfo) -> ControlInfo {
        ControlInfo::FloatingActionButton(info)
    }

    fn unwrap_info(info: &ControlInfo) -> Option<&FabInfo> {
        match info {
            ControlInfo::FloatingActionButton(info) => Some(info),
            _ => None,
        }
    }
}
