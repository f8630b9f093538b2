//! Floating action button
//!
//! A round brand-colored button with an icon, a label, or both. The label
//! only shows while the button is expanded.

use crate::{component_id, has_text, ComponentId, EventHandler, IconNode, TextNode};
use fluent_core::color::Color;
use fluent_core::control_tokens::fab::{
    FabInfo, FabSize, FabState, FabTokens, FloatingActionButton,
};
use fluent_core::global::Dp;
use fluent_core::scope::ThemeScope;
use fluent_core::state::{stack_borders, BorderLayer, InteractionState, PaddingValues};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Floating action button properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fab {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Label, also used as the content description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Expansion state
    #[serde(default)]
    pub state: FabState,
    /// Size
    #[serde(default)]
    pub size: FabSize,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// On click event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<EventHandler>,
    /// Token override; the registry's tokens are used when absent
    #[serde(skip)]
    pub tokens: Option<Arc<dyn FabTokens>>,
}

impl Fab {
    /// Create an empty, expanded, large button
    pub fn new() -> Self {
        Self::default()
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

    /// Set label
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set expansion state
    pub fn with_state(mut self, state: FabState) -> Self {
        self.state = state;
        self
    }

    /// Set size
    pub fn with_size(mut self, size: FabSize) -> Self {
        self.size = size;
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
    pub fn with_tokens(mut self, tokens: Arc<dyn FabTokens>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Resolve the button for one frame
    ///
    /// Returns `None` when there is neither an icon nor a non-empty label.
    pub fn render(&self, scope: &ThemeScope<'_>, interaction: InteractionState) -> Option<FabNode> {
        if self.icon.is_none() && !has_text(self.text.as_deref()) {
            tracing::debug!("Skipping floating action button without icon or text");
            return None;
        }

        let tokens = self
            .tokens
            .clone()
            .unwrap_or_else(|| scope.control_tokens().tokens::<FloatingActionButton>());
        let info = FabInfo::new(self.state, self.size);

        let node = scope.provide::<FloatingActionButton, _>(tokens, info, |scope| {
            let tokens = scope.tokens::<FloatingActionButton>();
            let info = scope.info::<FloatingActionButton>();
            let theme = scope.theme();
            let enabled = !self.disabled;

            let expanded = has_text(self.text.as_deref()) && info.state == FabState::Expanded;
            let padding = if expanded {
                tokens.text_padding(&info, theme)
            } else {
                tokens.icon_padding(&info, theme)
            };
            let spacing = if expanded {
                tokens.spacing(&info, theme)
            } else {
                0.0
            };

            let icon = self.icon.as_ref().map(|name| IconNode {
                name: name.clone(),
                size: tokens.icon_size(&info, theme),
                color: *tokens
                    .icon_color(&info, theme)
                    .by_state(enabled, false, interaction),
            });
            let label = self.text.as_ref().filter(|_| expanded).map(|text| TextNode {
                text: text.clone(),
                font: tokens.font_info(&info, theme),
                color: *tokens
                    .text_color(&info, theme)
                    .by_state(enabled, false, interaction),
            });

            let height = tokens.fixed_height(&info, theme);
            FabNode {
                id: component_id(&self.id),
                height,
                min_width: tokens.min_width(&info, theme),
                corner_radius: height / 2.0,
                padding,
                spacing,
                background: *tokens
                    .background_color(&info, theme)
                    .by_state(enabled, false, interaction),
                elevation: *tokens.elevation(&info, theme).by_state(enabled, false, interaction),
                borders: stack_borders(
                    tokens
                        .border_stroke(&info, theme)
                        .by_state(enabled, false, interaction),
                ),
                icon,
                label,
                content_description: self.text.clone().unwrap_or_default(),
                enabled,
                on_click: self.on_click.clone(),
            }
        });
        Some(node)
    }
}

/// A resolved floating action button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabNode {
    /// Component ID
    pub id: ComponentId,
    /// Container height
    pub height: Dp,
    /// Minimum container width
    pub min_width: Dp,
    /// Corner radius; the container is a pill
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
    /// Icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconNode>,
    /// Label, present only while expanded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<TextNode>,
    /// Accessibility description
    pub content_description: String,
    /// Whether clicks are accepted
    pub enabled: bool,
    /// On click event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<EventHandler>,
}
