//! Avatar tokens
//!
//! Also home of [`AvatarSize`], which the avatar group tokens share.

use crate::alias::{
    BrandBackgroundColorTokens as BrandBg, BrandForegroundColorTokens as BrandFg,
    BrandStrokeColorTokens as BrandStroke, NeutralBackgroundColorTokens as NeutralBg,
    NeutralForegroundColorTokens as NeutralFg,
};
use crate::color::Color;
use crate::control::{ControlInfo, ControlKind, ControlToken, ControlType};
use crate::global::{
    self, CornerRadiusTokens, Dp, FontSizeTokens, FontWeightTokens, IconSize, IconSizeTokens,
    StrokeWidthTokens,
};
use crate::state::BorderStroke;
use crate::theme::FluentTheme;
use crate::typography::{FontInfo, FontSize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Avatar diameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AvatarSize {
    /// 16dp
    Size16,
    /// 20dp
    Size20,
    /// 24dp
    Size24,
    /// 32dp
    #[default]
    Size32,
    /// 40dp
    Size40,
    /// 56dp
    Size56,
    /// 72dp
    Size72,
}

impl AvatarSize {
    /// Every size, smallest first
    pub const ALL: [AvatarSize; 7] = [
        AvatarSize::Size16,
        AvatarSize::Size20,
        AvatarSize::Size24,
        AvatarSize::Size32,
        AvatarSize::Size40,
        AvatarSize::Size56,
        AvatarSize::Size72,
    ];
}

/// What the avatar stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AvatarType {
    /// A person, drawn as a circle
    #[default]
    Person,
    /// A group or channel, drawn as a rounded square
    Group,
    /// A person without a name or picture
    Anonymous,
    /// The "+N" chip closing an avatar group
    Overflow,
}

impl AvatarType {
    /// Every type
    pub const ALL: [AvatarType; 4] = [
        AvatarType::Person,
        AvatarType::Group,
        AvatarType::Anonymous,
        AvatarType::Overflow,
    ];
}

/// Per-render info for an avatar
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvatarInfo {
    /// Diameter
    pub size: AvatarSize,
    /// Kind of avatar
    pub avatar_type: AvatarType,
    /// Whether the activity ring is shown
    pub is_active: bool,
}

impl AvatarInfo {
    /// Create info for an inactive avatar
    pub fn new(size: AvatarSize, avatar_type: AvatarType) -> Self {
        Self {
            size,
            avatar_type,
            is_active: false,
        }
    }

    /// Show or hide the activity ring
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Initials font shared by avatars and avatar groups
pub(crate) fn initials_font(size: AvatarSize) -> FontInfo {
    let regular = global::font_weight(FontWeightTokens::Regular);
    let medium = global::font_weight(FontWeightTokens::Medium);
    match size {
        // Below the global ramp
        AvatarSize::Size16 | AvatarSize::Size20 => FontInfo::new(FontSize::new(9.0, 12.0), regular),
        AvatarSize::Size24 => FontInfo::new(global::font_size(FontSizeTokens::Size100), regular),
        AvatarSize::Size32 => FontInfo::new(global::font_size(FontSizeTokens::Size200), regular),
        AvatarSize::Size40 => FontInfo::new(global::font_size(FontSizeTokens::Size300), regular),
        AvatarSize::Size56 => FontInfo::new(global::font_size(FontSizeTokens::Size500), medium),
        AvatarSize::Size72 => FontInfo::new(global::font_size(FontSizeTokens::Size700), medium),
    }
}

/// Placeholder glyph shared by avatars and avatar groups
pub(crate) fn placeholder_icon(size: AvatarSize) -> IconSize {
    match size {
        AvatarSize::Size16 => global::icon_size(IconSizeTokens::XXSmall),
        AvatarSize::Size20 | AvatarSize::Size24 => global::icon_size(IconSizeTokens::XSmall),
        AvatarSize::Size32 => global::icon_size(IconSizeTokens::Small),
        AvatarSize::Size40 => global::icon_size(IconSizeTokens::Medium),
        AvatarSize::Size56 => global::icon_size(IconSizeTokens::Large),
        AvatarSize::Size72 => global::icon_size(IconSizeTokens::XXXLarge),
    }
}

/// Token set of the avatar
pub trait AvatarTokens: Send + Sync + fmt::Debug {
    /// Diameter
    fn avatar_size(&self, info: &AvatarInfo, _theme: &FluentTheme) -> Dp {
        match info.size {
            AvatarSize::Size16 => 16.0,
            AvatarSize::Size20 => 20.0,
            AvatarSize::Size24 => 24.0,
            AvatarSize::Size32 => 32.0,
            AvatarSize::Size40 => 40.0,
            AvatarSize::Size56 => 56.0,
            AvatarSize::Size72 => 72.0,
        }
    }

    /// Corner radius; circular except for groups
    fn corner_radius(&self, info: &AvatarInfo, _theme: &FluentTheme) -> Dp {
        match (info.avatar_type, info.size) {
            (AvatarType::Group, AvatarSize::Size16 | AvatarSize::Size20 | AvatarSize::Size24) => {
                global::corner_radius(CornerRadiusTokens::Medium)
            }
            (AvatarType::Group, AvatarSize::Size32 | AvatarSize::Size40) => {
                global::corner_radius(CornerRadiusTokens::Large)
            }
            (AvatarType::Group, AvatarSize::Size56 | AvatarSize::Size72) => {
                global::corner_radius(CornerRadiusTokens::XLarge)
            }
            _ => global::corner_radius(CornerRadiusTokens::Circle),
        }
    }

    /// Initials font
    fn font_info(&self, info: &AvatarInfo, _theme: &FluentTheme) -> FontInfo {
        initials_font(info.size)
    }

    /// Placeholder glyph
    fn icon_size(&self, info: &AvatarInfo, _theme: &FluentTheme) -> IconSize {
        placeholder_icon(info.size)
    }

    /// Fill behind initials or glyph
    fn background_color(&self, info: &AvatarInfo, theme: &FluentTheme) -> Color {
        let alias = theme.alias_tokens();
        let color = match info.avatar_type {
            AvatarType::Person | AvatarType::Group => {
                alias.brand_background(BrandBg::BrandBackgroundTint)
            }
            AvatarType::Anonymous => alias.neutral_background(NeutralBg::Background6),
            AvatarType::Overflow => alias.neutral_background(NeutralBg::Background5),
        };
        color.value(theme.mode())
    }

    /// Initials and glyph color
    fn foreground_color(&self, info: &AvatarInfo, theme: &FluentTheme) -> Color {
        let alias = theme.alias_tokens();
        let color = match info.avatar_type {
            AvatarType::Person | AvatarType::Group => {
                alias.brand_foreground(BrandFg::BrandForegroundTint)
            }
            AvatarType::Anonymous | AvatarType::Overflow => {
                alias.neutral_foreground(NeutralFg::Foreground2)
            }
        };
        color.value(theme.mode())
    }

    /// Activity ring, innermost first: a gap in the page color, then the ring
    fn border_stroke(&self, info: &AvatarInfo, theme: &FluentTheme) -> Vec<BorderStroke> {
        if !info.is_active {
            return Vec::new();
        }

        let alias = theme.alias_tokens();
        let mode = theme.mode();
        let (gap, ring) = match info.size {
            AvatarSize::Size16 | AvatarSize::Size20 | AvatarSize::Size24 => {
                (StrokeWidthTokens::Width10, StrokeWidthTokens::Width10)
            }
            AvatarSize::Size32 | AvatarSize::Size40 => {
                (StrokeWidthTokens::Width20, StrokeWidthTokens::Width20)
            }
            AvatarSize::Size56 | AvatarSize::Size72 => {
                (StrokeWidthTokens::Width20, StrokeWidthTokens::Width40)
            }
        };
        vec![
            BorderStroke::new(
                global::stroke_width(gap),
                alias.neutral_background(NeutralBg::Background1).value(mode),
            ),
            BorderStroke::new(
                global::stroke_width(ring),
                alias.brand_stroke(BrandStroke::BrandStroke1).value(mode),
            ),
        ]
    }
}

/// Built-in avatar tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAvatarTokens;

impl AvatarTokens for DefaultAvatarTokens {}

/// Marker for [`ControlType::Avatar`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Avatar;

impl ControlKind for Avatar {
    const TYPE: ControlType = ControlType::Avatar;
    type Tokens = dyn AvatarTokens;
    type Info = AvatarInfo;

    fn default_tokens() -> Arc<dyn AvatarTokens> {
        Arc::new(DefaultAvatarTokens)
    }

    fn wrap_tokens(tokens: Arc<dyn AvatarTokens>) -> ControlToken {
        ControlToken::Avatar(tokens)
    }

    fn unwrap_tokens(token: &ControlToken) -> Option<Arc<dyn AvatarTokens>> {
        match token {
            ControlToken::Avatar(tokens) => Some(Arc::clone(tokens)),
            _ => None,
        }
    }

    fn wrap_info(info: AvatarInfo) -> ControlInfo {
        ControlInfo::Avatar(info)
    }

    fn unwrap_info(info: &ControlInfo) -> Option<&AvatarInfo> {
        match info {
            ControlInfo::Avatar(info) => Some(info),
            _ => None,
        }
    }
}
