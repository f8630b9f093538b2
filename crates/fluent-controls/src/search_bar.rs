//! Search bar

use crate::{component_id, ComponentId, EventHandler, IconNode, TextNode};
use fluent_core::color::Color;
use fluent_core::control_tokens::search_bar::{
    SearchBar as SearchBarControl, SearchBarInfo, SearchBarTokens,
};
use fluent_core::global::Dp;
use fluent_core::scope::ThemeScope;
use fluent_core::state::PaddingValues;
use fluent_core::theme::FluentStyle;
use fluent_progress::circular::{CircularProgressIndicator, CircularProgressNode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Leading glyph
pub const SEARCH_ICON: &str = "ic_search";

/// Trailing glyph that clears the query
pub const CLEAR_ICON: &str = "ic_dismiss";

/// Search bar properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchBar {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Current query
    #[serde(default)]
    pub query: String,
    /// Hint shown while the query is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Color family; the scope's style when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<FluentStyle>,
    /// Whether a search is running
    #[serde(default)]
    pub loading: bool,
    /// Spinner angle for the current frame, in degrees
    #[serde(default)]
    pub spinner_rotation: f32,
    /// Query change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_query_change: Option<EventHandler>,
    /// Clear button handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_clear: Option<EventHandler>,
    /// Token override
    #[serde(skip)]
    pub tokens: Option<Arc<dyn SearchBarTokens>>,
}

impl SearchBar {
    /// Create an empty search bar
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the component ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set color family
    pub fn with_style(mut self, style: FluentStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Show or hide the loading spinner
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the spinner angle
    pub fn with_spinner_rotation(mut self, degrees: f32) -> Self {
        self.spinner_rotation = degrees;
        self
    }

    /// Set query change handler
    pub fn on_query_change(mut self, handler: impl Into<String>) -> Self {
        self.on_query_change = Some(handler.into());
        self
    }

    /// Set clear handler
    pub fn on_clear(mut self, handler: impl Into<String>) -> Self {
        self.on_clear = Some(handler.into());
        self
    }

    /// Use these tokens instead of the registry's
    pub fn with_tokens(mut self, tokens: Arc<dyn SearchBarTokens>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Resolve the bar
    pub fn render(&self, scope: &ThemeScope<'_>) -> SearchBarNode {
        let tokens = self
            .tokens
            .clone()
            .unwrap_or_else(|| scope.control_tokens().tokens::<SearchBarControl>());
        let info = SearchBarInfo::new(self.style.unwrap_or_else(|| scope.style()));

        scope.provide::<SearchBarControl, _>(tokens, info, |scope| {
            let tokens = scope.tokens::<SearchBarControl>();
            let info = scope.info::<SearchBarControl>();
            let theme = scope.theme();

            let is_placeholder = self.query.is_empty();
            let text = if is_placeholder {
                self.placeholder.clone().unwrap_or_default()
            } else {
                self.query.clone()
            };

            let progress = self.loading.then(|| {
                CircularProgressIndicator::indeterminate()
                    .with_size(tokens.circular_progress_indicator_size(&info, theme))
                    .with_rotation(self.spinner_rotation)
                    .render(scope)
            });
            let right_icon = (!self.query.is_empty()).then(|| IconNode {
                name: CLEAR_ICON.to_string(),
                size: tokens.right_icon_size(&info, theme),
                color: tokens.right_icon_color(&info, theme),
            });

            SearchBarNode {
                id: component_id(&self.id),
                style: info.style,
                height: tokens.height(&info, theme),
                padding: tokens.padding(&info, theme),
                background: tokens.background_color(&info, theme),
                input_background: tokens.input_background_color(&info, theme),
                left_icon: IconNode {
                    name: SEARCH_ICON.to_string(),
                    size: tokens.left_icon_size(&info, theme),
                    color: tokens.left_icon_color(&info, theme),
                },
                text: TextNode {
                    text,
                    font: tokens.typography(&info, theme),
                    color: tokens.text_color(&info, theme),
                },
                is_placeholder,
                progress_padding: progress
                    .as_ref()
                    .map(|_| tokens.progress_indicator_right_padding(&info, theme)),
                progress,
                right_icon,
                on_query_change: self.on_query_change.clone(),
                on_clear: self.on_clear.clone(),
            }
        })
    }
}

/// A resolved search bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchBarNode {
    /// Component ID
    pub id: ComponentId,
    /// Color family in effect
    pub style: FluentStyle,
    /// Input height
    pub height: Dp,
    /// Padding around the input
    pub padding: PaddingValues,
    /// Fill behind the whole bar
    pub background: Color,
    /// Fill of the text input
    pub input_background: Color,
    /// Search glyph
    pub left_icon: IconNode,
    /// Query, or the placeholder while the query is empty
    pub text: TextNode,
    /// Whether `text` is the placeholder
    pub is_placeholder: bool,
    /// Spinner, while loading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<CircularProgressNode>,
    /// Space around the spinner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_padding: Option<PaddingValues>,
    /// Clear glyph, while there is a query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_icon: Option<IconNode>,
    /// Query change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_query_change: Option<EventHandler>,
    /// Clear handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_clear: Option<EventHandler>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_core::theme::{FluentTheme, ThemeMode};

    #[test]
    fn test_empty_bar_shows_placeholder() {
        let scope = ThemeScope::default();
        let node = SearchBar::new().with_placeholder("Search").render(&scope);

        assert!(node.is_placeholder);
        assert_eq!(node.text.text, "Search");
        assert!(node.right_icon.is_none());
        assert!(node.progress.is_none());
        assert_eq!(node.height, 40.0);
        assert_eq!(node.padding, PaddingValues::all(8.0));
        assert_eq!(node.left_icon.size.size, 20.0);
    }

    #[test]
    fn test_neutral_light_colors() {
        let scope = ThemeScope::default();
        let node = SearchBar::new().with_query("rust").render(&scope);

        assert_eq!(node.style, FluentStyle::Neutral);
        assert_eq!(node.input_background.to_hex(), "#F0F0F0");
        assert_eq!(node.text.color.to_hex(), "#808080");
        assert_eq!(node.left_icon.color, node.text.color);
        assert_eq!(node.right_icon.unwrap().color.to_hex(), "#616161");
    }

    #[test]
    fn test_clear_icon_only_with_query() {
        let scope = ThemeScope::default();
        let node = SearchBar::new()
            .with_query("fluent")
            .on_clear("clear")
            .render(&scope);
        assert!(!node.is_placeholder);
        assert_eq!(node.right_icon.map(|icon| icon.name), Some(CLEAR_ICON.to_string()));
        assert_eq!(node.on_clear.as_deref(), Some("clear"));
    }

    #[test]
    fn test_brand_only_tints_light_mode() {
        let scope = ThemeScope::default();
        let bar = SearchBar::new().with_style(FluentStyle::Brand);

        let light = bar.render(&scope);
        assert_eq!(light.background.to_hex(), "#0F6CBD");
        assert_eq!(light.text.color, Color::WHITE);

        let dark_scope = scope.with_theme_mode(ThemeMode::Dark);
        let dark = bar.render(&dark_scope);
        let neutral_dark = SearchBar::new().render(&dark_scope);
        assert_eq!(dark.background, neutral_dark.background);
        assert_eq!(dark.input_background, neutral_dark.input_background);
    }

    #[test]
    fn test_style_from_scope() {
        let scope = ThemeScope::default();
        let brand_scope = scope.with_style(FluentStyle::Brand);
        let node = SearchBar::new().render(&brand_scope);
        assert_eq!(node.style, FluentStyle::Brand);

        let pinned = SearchBar::new()
            .with_style(FluentStyle::Neutral)
            .render(&brand_scope);
        assert_eq!(pinned.style, FluentStyle::Neutral);
    }

    #[test]
    fn test_loading_spinner() {
        let scope = ThemeScope::default();
        let node = SearchBar::new()
            .with_query("tokens")
            .loading(true)
            .with_spinner_rotation(30.0)
            .render(&scope);

        let spinner = node.progress.unwrap();
        assert_eq!(spinner.diameter, 32.0);
        assert_eq!(spinner.start_angle, 30.0);
        assert_eq!(spinner.progress, None);
        assert_eq!(node.progress_padding, Some(PaddingValues::end(16.0)));
    }

    #[derive(Debug)]
    struct Tall;

    impl SearchBarTokens for Tall {
        fn height(&self, _info: &SearchBarInfo, _theme: &FluentTheme) -> Dp {
            52.0
        }
    }

    #[test]
    fn test_token_override() {
        let scope = ThemeScope::default();
        let node = SearchBar::new().with_tokens(Arc::new(Tall)).render(&scope);
        assert_eq!(node.height, 52.0);
        assert_eq!(node.padding, PaddingValues::all(8.0));
    }
}
