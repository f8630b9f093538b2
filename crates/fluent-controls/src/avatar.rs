//! Avatar
//!
//! A circle (or rounded square for groups) showing a picture, the initials
//! of a name, or a placeholder glyph, optionally wrapped in an activity
//! ring. Avatars always render: a missing name falls back to the anonymous
//! glyph.

use crate::{component_id, ComponentId, IconNode, TextNode};
use fluent_core::color::Color;
use fluent_core::control_tokens::avatar::{
    Avatar as AvatarControl, AvatarInfo, AvatarSize, AvatarType, AvatarTokens,
};
use fluent_core::control_tokens::avatar_group::{AvatarGroupInfo, AvatarGroupTokens};
use fluent_core::global::Dp;
use fluent_core::scope::ThemeScope;
use fluent_core::state::{border_inset, stack_borders, BorderLayer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Glyph for a person without a picture or name
pub const PERSON_ICON: &str = "ic_person";

/// Glyph for a group without a picture or name
pub const GROUP_ICON: &str = "ic_people";

/// Initials of a display name
///
/// The first letters of the first and last words, upper-cased. A single
/// word gives one letter; a blank name gives `None`.
pub fn initials(name: &str) -> Option<String> {
    let mut words = name.split_whitespace();
    let first = words.next()?.chars().next()?;
    let mut initials: String = first.to_uppercase().collect();
    if let Some(last) = words.last().and_then(|word| word.chars().next()) {
        initials.extend(last.to_uppercase());
    }
    Some(initials)
}

/// Avatar properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Avatar {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Display name; initials are taken from it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Picture URI, shown instead of initials
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Diameter
    #[serde(default)]
    pub size: AvatarSize,
    /// Kind of avatar
    #[serde(default)]
    pub avatar_type: AvatarType,
    /// Whether the activity ring is shown
    #[serde(default)]
    pub is_active: bool,
    /// Token override
    #[serde(skip)]
    pub tokens: Option<Arc<dyn AvatarTokens>>,
}

impl Avatar {
    /// Create a person avatar
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Create an anonymous avatar
    pub fn anonymous() -> Self {
        Self {
            avatar_type: AvatarType::Anonymous,
            ..Self::default()
        }
    }

    /// Create the "+N" chip closing a truncated group
    pub fn overflow(hidden: usize) -> Self {
        Self {
            name: Some(format!("+{}", hidden)),
            avatar_type: AvatarType::Overflow,
            ..Self::default()
        }
    }

    /// Set the component ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set picture
    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image = Some(uri.into());
        self
    }

    /// Set size
    pub fn with_size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    /// Set kind
    pub fn with_type(mut self, avatar_type: AvatarType) -> Self {
        self.avatar_type = avatar_type;
        self
    }

    /// Show or hide the activity ring
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Use these tokens instead of the registry's
    pub fn with_tokens(mut self, tokens: Arc<dyn AvatarTokens>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Kind actually drawn: a person with nothing to show is anonymous
    fn effective_type(&self) -> AvatarType {
        let has_name = self.name.as_deref().and_then(initials).is_some();
        match self.avatar_type {
            AvatarType::Person if self.image.is_none() && !has_name => AvatarType::Anonymous,
            other => other,
        }
    }

    /// Resolve the avatar
    pub fn render(&self, scope: &ThemeScope<'_>) -> AvatarNode {
        self.render_with(scope, self.size, None)
    }

    /// Resolve the avatar at `size`, with group tokens sizing it when given
    pub(crate) fn render_with(
        &self,
        scope: &ThemeScope<'_>,
        size: AvatarSize,
        group: Option<(&dyn AvatarGroupTokens, &AvatarGroupInfo)>,
    ) -> AvatarNode {
        let tokens = self
            .tokens
            .clone()
            .unwrap_or_else(|| scope.control_tokens().tokens::<AvatarControl>());
        let info = AvatarInfo::new(size, self.effective_type()).with_active(self.is_active);

        scope.provide::<AvatarControl, _>(tokens, info, |scope| {
            let tokens = scope.tokens::<AvatarControl>();
            let info = scope.info::<AvatarControl>();
            let theme = scope.theme();

            let (diameter, font, icon_size) = match group {
                Some((group_tokens, group_info)) => (
                    group_tokens.avatar_size(group_info, theme),
                    group_tokens.font_info(&info, theme),
                    group_tokens.avatar_icon_size(&info, theme),
                ),
                None => (
                    tokens.avatar_size(&info, theme),
                    tokens.font_info(&info, theme),
                    tokens.icon_size(&info, theme),
                ),
            };
            let foreground = tokens.foreground_color(&info, theme);
            let glyph = |name: &str| {
                AvatarContent::Icon(IconNode {
                    name: name.to_string(),
                    size: icon_size,
                    color: foreground,
                })
            };

            let content = match (info.avatar_type, &self.image) {
                (AvatarType::Overflow, _) => AvatarContent::Initials(TextNode {
                    text: self.name.clone().unwrap_or_default(),
                    font,
                    color: foreground,
                }),
                (AvatarType::Anonymous, _) => glyph(PERSON_ICON),
                (_, Some(uri)) => AvatarContent::Image { uri: uri.clone() },
                (avatar_type, None) => match self.name.as_deref().and_then(initials) {
                    Some(text) => AvatarContent::Initials(TextNode {
                        text,
                        font,
                        color: foreground,
                    }),
                    None if avatar_type == AvatarType::Group => glyph(GROUP_ICON),
                    None => glyph(PERSON_ICON),
                },
            };

            AvatarNode {
                id: component_id(&self.id),
                size: diameter,
                corner_radius: tokens.corner_radius(&info, theme).min(diameter / 2.0),
                background: tokens.background_color(&info, theme),
                borders: stack_borders(&tokens.border_stroke(&info, theme)),
                content,
                content_description: self.name.clone().unwrap_or_default(),
                avatar_type: info.avatar_type,
                is_active: info.is_active,
            }
        })
    }
}

/// What fills the avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AvatarContent {
    /// A picture
    Image {
        /// Picture URI
        uri: String,
    },
    /// Initials, or the "+N" of an overflow chip
    Initials(TextNode),
    /// Placeholder glyph
    Icon(IconNode),
}

/// A resolved avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarNode {
    /// Component ID
    pub id: ComponentId,
    /// Diameter
    pub size: Dp,
    /// Corner radius, at most half the diameter
    pub corner_radius: Dp,
    /// Fill behind the content
    pub background: Color,
    /// Activity ring layers, innermost first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub borders: Vec<BorderLayer>,
    /// Content
    pub content: AvatarContent,
    /// Accessibility description
    pub content_description: String,
    /// Kind drawn
    pub avatar_type: AvatarType,
    /// Whether the activity ring is shown
    pub is_active: bool,
}

impl AvatarNode {
    /// Outer extent including the activity ring
    pub fn outer_size(&self) -> Dp {
        self.size + 2.0 * border_inset(&self.borders)
    }
}
