//! Button tokens

use crate::alias::{
    BrandBackgroundColorTokens as BrandBg, BrandForegroundColorTokens as BrandFg,
    BrandStrokeColorTokens as BrandStroke, NeutralBackgroundColorTokens as NeutralBg,
    NeutralForegroundColorTokens as NeutralFg, NeutralStrokeColorTokens as NeutralStroke,
};
use crate::color::Color;
use crate::control::{ControlInfo, ControlKind, ControlToken, ControlType};
use crate::global::{
    self, CornerRadiusTokens, Dp, ElevationTokens, IconSize, IconSizeTokens, SizeTokens,
    SpacingTokens, StrokeWidthTokens,
};
use crate::state::{BorderStroke, PaddingValues, StateBorderStroke, StateColor, StateElevation};
use crate::theme::FluentTheme;
use crate::typography::{FontInfo, TypographyTokens};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Visual emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ButtonStyle {
    /// Filled with the brand color
    #[default]
    Button,
    /// Transparent with a brand outline
    OutlinedButton,
    /// Transparent, text only
    TextButton,
}

/// Button size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ButtonSize {
    /// 28dp tall
    Small,
    /// 40dp tall
    #[default]
    Medium,
    /// 52dp tall
    Large,
}

/// Per-render info for a button
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ButtonInfo {
    /// Emphasis
    pub style: ButtonStyle,
    /// Size
    pub size: ButtonSize,
}

impl ButtonInfo {
    /// Create info
    pub fn new(style: ButtonStyle, size: ButtonSize) -> Self {
        Self { style, size }
    }
}

/// Token set of the button
pub trait ButtonTokens: Send + Sync + fmt::Debug {
    /// Container fill
    fn background_color(&self, info: &ButtonInfo, theme: &FluentTheme) -> StateColor {
        let alias = theme.alias_tokens();
        let mode = theme.mode();
        let brand = |token: BrandBg| alias.brand_background(token).value(mode);
        let neutral = |token: NeutralBg| alias.neutral_background(token).value(mode);
        match info.style {
            ButtonStyle::Button => StateColor::new(brand(BrandBg::BrandBackground1))
                .with_pressed(brand(BrandBg::BrandBackground1Pressed))
                .with_selected(brand(BrandBg::BrandBackground1Selected))
                .with_disabled(neutral(NeutralBg::BackgroundDisabled)),
            ButtonStyle::OutlinedButton | ButtonStyle::TextButton => {
                StateColor::new(Color::TRANSPARENT)
                    .with_pressed(neutral(NeutralBg::Background1Pressed))
                    .with_selected(neutral(NeutralBg::Background1Selected))
            }
        }
    }

    /// Icon tint
    fn icon_color(&self, info: &ButtonInfo, theme: &FluentTheme) -> StateColor {
        let alias = theme.alias_tokens();
        let mode = theme.mode();
        let disabled = alias.neutral_foreground(NeutralFg::ForegroundDisable1).value(mode);
        match info.style {
            ButtonStyle::Button => {
                StateColor::new(alias.neutral_foreground(NeutralFg::ForegroundOnColor).value(mode))
                    .with_disabled(disabled)
            }
            ButtonStyle::OutlinedButton | ButtonStyle::TextButton => {
                let brand = |token: BrandFg| alias.brand_foreground(token).value(mode);
                StateColor::new(brand(BrandFg::BrandForeground1))
                    .with_pressed(brand(BrandFg::BrandForeground1Pressed))
                    .with_disabled(disabled)
            }
        }
    }

    /// Label color
    fn text_color(&self, info: &ButtonInfo, theme: &FluentTheme) -> StateColor {
        self.icon_color(info, theme)
    }

    /// Border stack, innermost first
    fn border_stroke(&self, info: &ButtonInfo, theme: &FluentTheme) -> StateBorderStroke {
        let focus = super::focus_ring(theme);
        match info.style {
            ButtonStyle::Button | ButtonStyle::TextButton => {
                StateBorderStroke::new(Vec::new()).with_focused(focus)
            }
            ButtonStyle::OutlinedButton => {
                let alias = theme.alias_tokens();
                let mode = theme.mode();
                let width = global::stroke_width(StrokeWidthTokens::Width10);
                let outline = |color: Color| vec![BorderStroke::new(width, color)];
                let rest = alias.brand_stroke(BrandStroke::BrandStroke1).value(mode);
                let pressed = alias.brand_stroke(BrandStroke::BrandStroke1Pressed).value(mode);
                let disabled = alias.neutral_stroke(NeutralStroke::StrokeDisabled).value(mode);

                let mut focused = outline(rest);
                focused.extend(focus);
                StateBorderStroke::new(outline(rest))
                    .with_pressed(outline(pressed))
                    .with_focused(focused)
                    .with_disabled(outline(disabled))
            }
        }
    }

    /// Corner radius
    fn border_radius(&self, info: &ButtonInfo, _theme: &FluentTheme) -> Dp {
        match info.size {
            ButtonSize::Small => global::corner_radius(CornerRadiusTokens::Medium),
            ButtonSize::Medium | ButtonSize::Large => {
                global::corner_radius(CornerRadiusTokens::Large)
            }
        }
    }

    /// Label font
    fn font_info(&self, info: &ButtonInfo, theme: &FluentTheme) -> FontInfo {
        let token = match info.size {
            ButtonSize::Small => TypographyTokens::Caption1Strong,
            ButtonSize::Medium => TypographyTokens::Body2Strong,
            ButtonSize::Large => TypographyTokens::Body1Strong,
        };
        theme.alias_tokens().typography(token)
    }

    /// Icon box
    fn icon_size(&self, info: &ButtonInfo, _theme: &FluentTheme) -> IconSize {
        match info.size {
            ButtonSize::Small => global::icon_size(IconSizeTokens::XSmall),
            ButtonSize::Medium | ButtonSize::Large => global::icon_size(IconSizeTokens::Small),
        }
    }

    /// Content padding
    fn padding(&self, info: &ButtonInfo, _theme: &FluentTheme) -> PaddingValues {
        match info.size {
            ButtonSize::Small => PaddingValues::symmetric(
                global::size(SizeTokens::Size80),
                global::size(SizeTokens::Size40),
            ),
            ButtonSize::Medium => PaddingValues::symmetric(
                global::size(SizeTokens::Size120),
                global::size(SizeTokens::Size100),
            ),
            ButtonSize::Large => PaddingValues::symmetric(
                global::size(SizeTokens::Size200),
                global::size(SizeTokens::Size160),
            ),
        }
    }

    /// Gap between icon and label
    fn spacing(&self, info: &ButtonInfo, _theme: &FluentTheme) -> Dp {
        match info.size {
            ButtonSize::Small => global::spacing(SpacingTokens::XXSmall),
            ButtonSize::Medium | ButtonSize::Large => global::spacing(SpacingTokens::XSmall),
        }
    }

    /// Container height
    fn fixed_height(&self, info: &ButtonInfo, _theme: &FluentTheme) -> Dp {
        match info.size {
            ButtonSize::Small => global::size(SizeTokens::Size280),
            ButtonSize::Medium => global::size(SizeTokens::Size400),
            ButtonSize::Large => global::size(SizeTokens::Size520),
        }
    }

    /// Shadow elevation; only filled buttons lift
    fn elevation(&self, info: &ButtonInfo, _theme: &FluentTheme) -> StateElevation {
        let flat = global::elevation(ElevationTokens::Elevation00);
        match info.style {
            ButtonStyle::Button => {
                StateElevation::new(global::elevation(ElevationTokens::Elevation02))
                    .with_pressed(global::elevation(ElevationTokens::Elevation08))
                    .with_disabled(flat)
            }
            ButtonStyle::OutlinedButton | ButtonStyle::TextButton => StateElevation::new(flat),
        }
    }
}

/// Built-in button tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultButtonTokens;

impl ButtonTokens for DefaultButtonTokens {}

/// Marker for [`ControlType::Button`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Button;

impl ControlKind for Button {
    const TYPE: ControlType = ControlType::Button;
    type Tokens = dyn ButtonTokens;
    type Info = ButtonInfo;

    fn default_tokens() -> Arc<dyn ButtonTokens> {
        Arc::new(DefaultButtonTokens)
    }

    fn wrap_tokens(tokens: Arc<dyn ButtonTokens>) -> ControlToken {
        ControlToken::Button(tokens)
    }

    fn unwrap_tokens(token: &ControlToken) -> Option<Arc<dyn ButtonTokens>> {
        match token {
            ControlToken::Button(tokens) => Some(Arc::clone(tokens)),
            _ => None,
        }
    }

    fn wrap_info(info: ButtonInfo) -> ControlInfo {
        ControlInfo::Button(info)
    }

    fn unwrap_info(info: &ControlInfo) -> Option<&ButtonInfo> {
        match info {
            ControlInfo::Button(info) => Some(info),
            _ => None,
        }
    }
}
