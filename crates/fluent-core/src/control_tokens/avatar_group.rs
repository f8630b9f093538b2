//! Avatar group tokens
//!
//! The spacing tables are literal design values. A stack overlaps its
//! avatars, so its spacings are negative and depend on whether the next
//! avatar wears an activity ring; a pile keeps them apart.

use super::avatar::{initials_font, placeholder_icon, AvatarInfo, AvatarSize};
use crate::control::{ControlInfo, ControlKind, ControlToken, ControlType};
use crate::global::{self, Dp, IconSize, SpacingTokens};
use crate::theme::FluentTheme;
use crate::typography::FontInfo;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// How the avatars of a group are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AvatarGroupStyle {
    /// Overlapping row
    #[default]
    Stack,
    /// Separated row
    Pile,
}

/// Per-render info for an avatar group
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvatarGroupInfo {
    /// Diameter of every member
    pub size: AvatarSize,
    /// Layout
    pub style: AvatarGroupStyle,
}

impl AvatarGroupInfo {
    /// Create info
    pub fn new(size: AvatarSize, style: AvatarGroupStyle) -> Self {
        Self { size, style }
    }
}

/// Token set of the avatar group
pub trait AvatarGroupTokens: Send + Sync + fmt::Debug {
    /// Diameter of each member
    fn avatar_size(&self, info: &AvatarGroupInfo, _theme: &FluentTheme) -> Dp {
        match info.size {
            AvatarSize::Size16 => 16.0,
            // Groups never draw 20dp avatars
            AvatarSize::Size20 => 24.0,
            AvatarSize::Size24 => 24.0,
            AvatarSize::Size32 => 32.0,
            AvatarSize::Size40 => 40.0,
            AvatarSize::Size56 => 56.0,
            AvatarSize::Size72 => 72.0,
        }
    }

    /// Initials font of a member
    fn font_info(&self, avatar: &AvatarInfo, _theme: &FluentTheme) -> FontInfo {
        initials_font(avatar.size)
    }

    /// Placeholder glyph of a member
    fn avatar_icon_size(&self, avatar: &AvatarInfo, _theme: &FluentTheme) -> IconSize {
        placeholder_icon(avatar.size)
    }

    /// Gap in front of a member; negative gaps overlap the previous one
    ///
    /// `is_active` tells whether that member carries an activity ring.
    fn spacing(&self, info: &AvatarGroupInfo, is_active: bool, _theme: &FluentTheme) -> Dp {
        match info.style {
            AvatarGroupStyle::Stack => match (info.size, is_active) {
                (AvatarSize::Size16 | AvatarSize::Size20 | AvatarSize::Size24, true) => 0.0,
                (AvatarSize::Size16 | AvatarSize::Size20 | AvatarSize::Size24, false) => -2.0,
                (AvatarSize::Size32, _) => -4.0,
                (AvatarSize::Size40, true) => -4.0,
                (AvatarSize::Size40, false) => -8.0,
                (AvatarSize::Size56, true) => -8.0,
                (AvatarSize::Size56, false) => -12.0,
                (AvatarSize::Size72, true) => -6.0,
                (AvatarSize::Size72, false) => -12.0,
            },
            AvatarGroupStyle::Pile => match info.size {
                AvatarSize::Size16 | AvatarSize::Size20 | AvatarSize::Size24 => {
                    global::spacing(SpacingTokens::XXSmall)
                }
                AvatarSize::Size32
                | AvatarSize::Size40
                | AvatarSize::Size56
                | AvatarSize::Size72 => global::spacing(SpacingTokens::XSmall),
            },
        }
    }

    /// Extra gap added to the spacing of a pile
    fn pile_padding(&self, info: &AvatarGroupInfo, _theme: &FluentTheme) -> Dp {
        match info.size {
            AvatarSize::Size16 => global::spacing(SpacingTokens::XXSmall),
            AvatarSize::Size20 | AvatarSize::Size24 | AvatarSize::Size32 | AvatarSize::Size40 => {
                global::spacing(SpacingTokens::XXXSmall)
            }
            AvatarSize::Size56 => global::spacing(SpacingTokens::XXSmall),
            AvatarSize::Size72 => global::spacing(SpacingTokens::XSmall),
        }
    }
}

/// Built-in avatar group tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAvatarGroupTokens;

impl AvatarGroupTokens for DefaultAvatarGroupTokens {}

/// Marker for [`ControlType::AvatarGroup`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AvatarGroup;

impl ControlKind for AvatarGroup {
    const TYPE: ControlType = ControlType::AvatarGroup;
    type Tokens = dyn AvatarGroupTokens;
    type Info = AvatarGroupInfo;

    fn default_tokens() -> Arc<dyn AvatarGroupTokens> {
        Arc::new(DefaultAvatarGroupTokens)
    }

    fn wrap_tokens(tokens: Arc<dyn AvatarGroupTokens>) -> ControlToken {
        ControlToken::AvatarGroup(tokens)
    }

    fn unwrap_tokens(token: &ControlToken) -> Option<Arc<dyn AvatarGroupTokens>> {
        match token {
            ControlToken::AvatarGroup(tokens) => Some(Arc::clone(tokens)),
            _ => None,
        }
    }

    fn wrap_info(info: AvatarGroupInfo) -> ControlInfo {
        ControlInfo::AvatarGroup(info)
    }

    fn unwrap_info(info: &ControlInfo) -> Option<&AvatarGroupInfo> {
        match info {
            ControlInfo::AvatarGroup(info) => Some(info),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control_tokens::avatar::AvatarType;

    fn stack_spacing(size: AvatarSize, is_active: bool) -> Dp {
        DefaultAvatarGroupTokens.spacing(
            &AvatarGroupInfo::new(size, AvatarGroupStyle::Stack),
            is_active,
            &FluentTheme::default(),
        )
    }

    #[test]
    fn test_default_info() {
        let info = AvatarGroupInfo::default();
        assert_eq!(info.size, AvatarSize::Size32);
        assert_eq!(info.style, AvatarGroupStyle::Stack);
    }

    #[test]
    fn test_size20_draws_24() {
        let tokens = DefaultAvatarGroupTokens;
        let theme = FluentTheme::default();
        let info = AvatarGroupInfo::new(AvatarSize::Size20, AvatarGroupStyle::Pile);
        assert_eq!(tokens.avatar_size(&info, &theme), 24.0);
    }

    #[test]
    fn test_stack_spacing_table() {
        let expected = [
            (AvatarSize::Size16, 0.0, -2.0),
            (AvatarSize::Size20, 0.0, -2.0),
            (AvatarSize::Size24, 0.0, -2.0),
            (AvatarSize::Size32, -4.0, -4.0),
            (AvatarSize::Size40, -4.0, -8.0),
            (AvatarSize::Size56, -8.0, -12.0),
            (AvatarSize::Size72, -6.0, -12.0),
        ];
        for (size, active, inactive) in expected {
            assert_eq!(stack_spacing(size, true), active, "{:?} active", size);
            assert_eq!(stack_spacing(size, false), inactive, "{:?} inactive", size);
        }
    }

    #[test]
    fn test_stack_never_spreads() {
        for size in AvatarSize::ALL {
            assert!(stack_spacing(size, true) <= 0.0);
            assert!(stack_spacing(size, false) <= stack_spacing(size, true));
        }
    }

    #[test]
    fn test_pile_spacing_and_padding_tables() {
        let tokens = DefaultAvatarGroupTokens;
        let theme = FluentTheme::default();
        let expected = [
            (AvatarSize::Size16, 4.0, 4.0),
            (AvatarSize::Size20, 4.0, 2.0),
            (AvatarSize::Size24, 4.0, 2.0),
            (AvatarSize::Size32, 8.0, 2.0),
            (AvatarSize::Size40, 8.0, 2.0),
            (AvatarSize::Size56, 8.0, 4.0),
            (AvatarSize::Size72, 8.0, 8.0),
        ];
        for (size, spacing, padding) in expected {
            let info = AvatarGroupInfo::new(size, AvatarGroupStyle::Pile);
            assert_eq!(tokens.spacing(&info, false, &theme), spacing, "{:?} spacing", size);
            assert_eq!(tokens.spacing(&info, true, &theme), spacing, "{:?} active", size);
            assert_eq!(tokens.pile_padding(&info, &theme), padding, "{:?} padding", size);
        }
    }

    #[test]
    fn test_member_font_and_icon() {
        let tokens = DefaultAvatarGroupTokens;
        let theme = FluentTheme::default();
        let avatar = AvatarInfo::new(AvatarSize::Size56, AvatarType::Person);
        assert_eq!(tokens.font_info(&avatar, &theme).font_size.size, 20.0);
        assert_eq!(tokens.avatar_icon_size(&avatar, &theme).size, 28.0);
    }
}
