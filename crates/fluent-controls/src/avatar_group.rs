//! Avatar group
//!
//! A row of same-sized avatars, either overlapping (stack) or apart
//! (pile). Members past `max_visible` collapse into a trailing "+N" chip.

use crate::avatar::{Avatar, AvatarNode};
use crate::{component_id, ComponentId};
use fluent_core::control_tokens::avatar::AvatarSize;
use fluent_core::control_tokens::avatar_group::{
    AvatarGroup as AvatarGroupControl, AvatarGroupInfo, AvatarGroupStyle, AvatarGroupTokens,
};
use fluent_core::global::Dp;
use fluent_core::scope::ThemeScope;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Avatar group properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvatarGroup {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Members, in display order
    #[serde(default)]
    pub avatars: Vec<Avatar>,
    /// Diameter of every member
    #[serde(default)]
    pub size: AvatarSize,
    /// Layout
    #[serde(default)]
    pub style: AvatarGroupStyle,
    /// Members shown before the overflow chip; all when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,
    /// Token override
    #[serde(skip)]
    pub tokens: Option<Arc<dyn AvatarGroupTokens>>,
}

impl AvatarGroup {
    /// Create a group
    pub fn new(avatars: Vec<Avatar>) -> Self {
        Self {
            avatars,
            ..Self::default()
        }
    }

    /// Set the component ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append a member
    pub fn with_avatar(mut self, avatar: Avatar) -> Self {
        self.avatars.push(avatar);
        self
    }

    /// Set size
    pub fn with_size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    /// Set layout
    pub fn with_style(mut self, style: AvatarGroupStyle) -> Self {
        self.style = style;
        self
    }

    /// Limit the visible members
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = Some(max_visible);
        self
    }

    /// Use these tokens instead of the registry's
    pub fn with_tokens(mut self, tokens: Arc<dyn AvatarGroupTokens>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Lay the group out, or `None` for a group without members
    pub fn render(&self, scope: &ThemeScope<'_>) -> Option<AvatarGroupNode> {
        if self.avatars.is_empty() {
            tracing::debug!("Skipping avatar group without members");
            return None;
        }

        let tokens = self
            .tokens
            .clone()
            .unwrap_or_else(|| scope.control_tokens().tokens::<AvatarGroupControl>());
        let info = AvatarGroupInfo::new(self.size, self.style);

        let node = scope.provide::<AvatarGroupControl, _>(tokens, info, |scope| {
            let tokens = scope.tokens::<AvatarGroupControl>();
            let info = scope.info::<AvatarGroupControl>();
            let theme = scope.theme();

            let visible = self
                .max_visible
                .map_or(self.avatars.len(), |max| max.min(self.avatars.len()));
            let hidden = self.avatars.len() - visible;
            let overflow = (hidden > 0).then(|| Avatar::overflow(hidden));

            let mut members: Vec<PositionedAvatar> = Vec::with_capacity(visible + 1);
            for avatar in self.avatars[..visible].iter().chain(overflow.as_ref()) {
                let node = avatar.render_with(scope, info.size, Some((&*tokens, &info)));
                let offset = match members.last() {
                    None => 0.0,
                    Some(previous) => {
                        let gap = match info.style {
                            AvatarGroupStyle::Stack => tokens.spacing(&info, node.is_active, theme),
                            AvatarGroupStyle::Pile => {
                                tokens.spacing(&info, node.is_active, theme)
                                    + tokens.pile_padding(&info, theme)
                            }
                        };
                        previous.offset + previous.avatar.size + gap
                    }
                };
                members.push(PositionedAvatar { offset, avatar: node });
            }

            let width = members
                .last()
                .map_or(0.0, |last| last.offset + last.avatar.size);
            let height = members
                .iter()
                .map(|member| member.avatar.outer_size())
                .fold(0.0, Dp::max);

            tracing::trace!(
                "Laid out avatar group: {} visible, {} hidden",
                visible,
                hidden
            );
            AvatarGroupNode {
                id: component_id(&self.id),
                style: info.style,
                width,
                height,
                hidden_count: hidden,
                members,
            }
        });
        Some(node)
    }
}

/// A member and its horizontal position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedAvatar {
    /// Distance of the avatar's leading edge from the group's leading edge
    pub offset: Dp,
    /// The avatar
    pub avatar: AvatarNode,
}

/// A laid out avatar group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarGroupNode {
    /// Component ID
    pub id: ComponentId,
    /// Layout
    pub style: AvatarGroupStyle,
    /// Row width
    pub width: Dp,
    /// Row height, including activity rings
    pub height: Dp,
    /// Members folded into the overflow chip
    pub hidden_count: usize,
    /// Members, then the overflow chip if any; later members draw on top
    pub members: Vec<PositionedAvatar>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::AvatarContent;
    use fluent_core::control_tokens::avatar::AvatarType;
    use fluent_core::theme::FluentTheme;

    fn people(count: usize) -> Vec<Avatar> {
        (0..count)
            .map(|index| Avatar::new(format!("Member {}", index)))
            .collect()
    }

    fn offsets(node: &AvatarGroupNode) -> Vec<Dp> {
        node.members.iter().map(|member| member.offset).collect()
    }

    #[test]
    fn test_empty_group_renders_nothing() {
        let scope = ThemeScope::default();
        assert!(AvatarGroup::new(Vec::new()).render(&scope).is_none());
    }

    #[test]
    fn test_stack_overlaps() {
        let scope = ThemeScope::default();
        let node = AvatarGroup::new(people(3)).render(&scope).unwrap();

        assert_eq!(offsets(&node), vec![0.0, 28.0, 56.0]);
        assert_eq!(node.width, 88.0);
        assert_eq!(node.height, 32.0);
        assert_eq!(node.hidden_count, 0);
    }

    #[test]
    fn test_stack_spacing_follows_activity() {
        let scope = ThemeScope::default();
        let node = AvatarGroup::new(vec![
            Avatar::new("Ann"),
            Avatar::new("Bo").active(true),
            Avatar::new("Cy"),
        ])
        .with_size(AvatarSize::Size40)
        .render(&scope)
        .unwrap();

        assert_eq!(offsets(&node), vec![0.0, 36.0, 68.0]);
        assert_eq!(node.height, 48.0);
    }

    #[test]
    fn test_pile_adds_padding() {
        let scope = ThemeScope::default();
        let node = AvatarGroup::new(people(3))
            .with_style(AvatarGroupStyle::Pile)
            .render(&scope)
            .unwrap();
        assert_eq!(offsets(&node), vec![0.0, 42.0, 84.0]);
        assert_eq!(node.width, 116.0);
    }

    #[test]
    fn test_overflow_chip() {
        let scope = ThemeScope::default();
        let node = AvatarGroup::new(people(5))
            .with_max_visible(2)
            .render(&scope)
            .unwrap();

        assert_eq!(node.hidden_count, 3);
        assert_eq!(node.members.len(), 3);
        let chip = &node.members[2].avatar;
        assert_eq!(chip.avatar_type, AvatarType::Overflow);
        assert!(matches!(chip.content, AvatarContent::Initials(ref text) if text.text == "+3"));
    }

    #[test]
    fn test_max_visible_above_len() {
        let scope = ThemeScope::default();
        let node = AvatarGroup::new(people(2))
            .with_max_visible(10)
            .render(&scope)
            .unwrap();
        assert_eq!(node.hidden_count, 0);
        assert_eq!(node.members.len(), 2);
    }

    #[test]
    fn test_group_tokens_size_members() {
        let scope = ThemeScope::default();
        let node = AvatarGroup::new(people(2))
            .with_size(AvatarSize::Size20)
            .render(&scope)
            .unwrap();
        assert!(node.members.iter().all(|member| member.avatar.size == 24.0));
    }

    #[derive(Debug)]
    struct Spread;

    impl AvatarGroupTokens for Spread {
        fn spacing(&self, _info: &AvatarGroupInfo, _is_active: bool, _theme: &FluentTheme) -> Dp {
            10.0
        }
    }

    #[test]
    fn test_token_override() {
        let scope = ThemeScope::default();
        let node = AvatarGroup::new(people(2))
            .with_tokens(Arc::new(Spread))
            .render(&scope)
            .unwrap();
        assert_eq!(offsets(&node), vec![0.0, 42.0]);
    }
}
