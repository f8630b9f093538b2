//! Push button

use crate::{component_id, has_text, ComponentId, EventHandler, IconNode, TextNode};
use fluent_core::color::Color;
use fluent_core::control_tokens::button::{
    Button as ButtonControl, ButtonInfo, ButtonSize, ButtonStyle, ButtonTokens,
};
use fluent_core::global::Dp;
use fluent_core::scope::ThemeScope;
use fluent_core::state::{stack_borders, BorderLayer, InteractionState, PaddingValues};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Button properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Button {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Leading icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Fill style
    #[serde(default)]
    pub style: ButtonStyle,
    /// Size
    #[serde(default)]
    pub size: ButtonSize,
    /// Toggled on
    #[serde(default)]
    pub selected: bool,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// On click event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<EventHandler>,
    /// Token override
    #[serde(skip)]
    pub tokens: Option<Arc<dyn ButtonTokens>>,
}

impl Button {
    /// Create a new button with a label
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Create an icon-only button
    pub fn icon_only(icon: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            ..Self::default()
        }
    }

    /// Set the component ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set style
    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Set size
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set selected state
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set on click handler
    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// Use these tokens instead of the registry's
    pub fn with_tokens(mut self, tokens: Arc<dyn ButtonTokens>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Resolve the button, or `None` without an icon or a label
    pub fn render(
        &self,
        scope: &ThemeScope<'_>,
        interaction: InteractionState,
    ) -> Option<ButtonNode> {
        let has_label = has_text(self.text.as_deref());
        if self.icon.is_none() && !has_label {
            tracing::debug!("Skipping button without icon or text");
            return None;
        }

        let tokens = self
            .tokens
            .clone()
            .unwrap_or_else(|| scope.control_tokens().tokens::<ButtonControl>());
        let info = ButtonInfo::new(self.style, self.size);

        let node = scope.provide::<ButtonControl, _>(tokens, info, |scope| {
            let tokens = scope.tokens::<ButtonControl>();
            let info = scope.info::<ButtonControl>();
            let theme = scope.theme();
            let (enabled, selected) = (!self.disabled, self.selected);

            let icon = self.icon.as_ref().map(|name| IconNode {
                name: name.clone(),
                size: tokens.icon_size(&info, theme),
                color: *tokens
                    .icon_color(&info, theme)
                    .by_state(enabled, selected, interaction),
            });
            let label = self.text.as_ref().filter(|_| has_label).map(|text| TextNode {
                text: text.clone(),
                font: tokens.font_info(&info, theme),
                color: *tokens
                    .text_color(&info, theme)
                    .by_state(enabled, selected, interaction),
            });
            // The gap only exists between two pieces of content
            let spacing = if icon.is_some() && label.is_some() {
                tokens.spacing(&info, theme)
            } else {
                0.0
            };

            ButtonNode {
                id: component_id(&self.id),
                height: tokens.fixed_height(&info, theme),
                corner_radius: tokens.border_radius(&info, theme),
                padding: tokens.padding(&info, theme),
                spacing,
                background: *tokens
                    .background_color(&info, theme)
                    .by_state(enabled, selected, interaction),
                elevation: *tokens
                    .elevation(&info, theme)
                    .by_state(enabled, selected, interaction),
                borders: stack_borders(
                    tokens
                        .border_stroke(&info, theme)
                        .by_state(enabled, selected, interaction),
                ),
                icon,
                label,
                selected,
                enabled,
                on_click: self.on_click.clone(),
            }
        });
        Some(node)
    }
}

/// A resolved button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonNode {
    /// Component ID
    pub id: ComponentId,
    /// Container height
    pub height: Dp,
    /// Corner radius
    pub corner_radius: Dp,
    /// Content padding
    pub padding: PaddingValues,
    /// Gap between icon and label
    pub spacing: Dp,
    /// Container fill
    pub background: Color,
    /// Shadow elevation
    pub elevation: Dp,
    /// Border layers, innermost first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub borders: Vec<BorderLayer>,
    /// Leading icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconNode>,
    /// Label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<TextNode>,
    /// Toggled on
    pub selected: bool,
    /// Whether clicks are accepted
    pub enabled: bool,
    /// On click event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<EventHandler>,
}
