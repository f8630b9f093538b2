//! Theme scopes
//!
//! A [`ThemeScope`] is the ambient context a render pass threads through
//! its calls. Each scope optionally shadows one piece of its parent's
//! context: the theme (mode, alias tokens, registry), the fluent style, or
//! the token set and info of the control being composed. Nested scopes
//! borrow their parent, so a binding can never outlive the subtree that
//! established it; dropping the child is the "pop".
//!
//! # Usage
//!
//! ```rust
//! use fluent_core::control_tokens::fab::{FabInfo, FabSize, FabState, FloatingActionButton};
//! use fluent_core::scope::ThemeScope;
//! use fluent_core::theme::{FluentTheme, ThemeMode};
//!
//! let root = ThemeScope::root(FluentTheme::new(ThemeMode::Dark));
//! let tokens = root.control_tokens().tokens::<FloatingActionButton>();
//! let info = FabInfo::new(FabState::Collapsed, FabSize::Small);
//!
//! let height = root.provide::<FloatingActionButton, _>(tokens, info, |scope| {
//!     let tokens = scope.tokens::<FloatingActionButton>();
//!     tokens.fixed_height(&scope.info::<FloatingActionButton>(), scope.theme())
//! });
//! assert_eq!(height, 48.0);
//! ```

use crate::control::{ControlInfo, ControlKind, ControlToken};
use crate::registry::ControlTokens;
use crate::theme::{FluentStyle, FluentTheme, ThemeMode};
use std::sync::Arc;

/// One level of ambient theme context
#[derive(Debug)]
pub struct ThemeScope<'a> {
    parent: Option<&'a ThemeScope<'a>>,
    theme: FluentTheme,
    style: Option<FluentStyle>,
    control: Option<(ControlToken, ControlInfo)>,
}

impl ThemeScope<'static> {
    /// Outermost scope for a render pass
    pub fn root(theme: FluentTheme) -> Self {
        Self {
            parent: None,
            theme,
            style: None,
            control: None,
        }
    }
}

impl Default for ThemeScope<'static> {
    fn default() -> Self {
        Self::root(FluentTheme::default())
    }
}

impl<'a> ThemeScope<'a> {
    fn child(&self, theme: FluentTheme) -> ThemeScope<'_> {
        ThemeScope {
            parent: Some(self),
            theme,
            style: None,
            control: None,
        }
    }

    /// Nested scope with another theme
    pub fn with_theme(&self, theme: FluentTheme) -> ThemeScope<'_> {
        self.child(theme)
    }

    /// Nested scope in another mode, sharing this scope's tokens
    pub fn with_theme_mode(&self, mode: ThemeMode) -> ThemeScope<'_> {
        self.child(self.theme.with_mode(mode))
    }

    /// Nested scope resolving controls from another registry
    pub fn with_control_tokens(&self, control_tokens: Arc<ControlTokens>) -> ThemeScope<'_> {
        self.child(self.theme.clone().with_control_tokens(control_tokens))
    }

    /// Nested scope with another fluent style
    pub fn with_style(&self, style: FluentStyle) -> ThemeScope<'_> {
        let mut scope = self.child(self.theme.clone());
        scope.style = Some(style);
        scope
    }

    /// Nested scope binding the token set and info of control `K`
    ///
    /// The two are established together and read back together by
    /// [`ThemeScope::tokens`] and [`ThemeScope::info`].
    pub fn with_control<K: ControlKind>(
        &self,
        tokens: Arc<K::Tokens>,
        info: K::Info,
    ) -> ThemeScope<'_> {
        let mut scope = self.child(self.theme.clone());
        scope.control = Some((K::wrap_tokens(tokens), K::wrap_info(info)));
        scope
    }

    /// Run `f` inside a scope binding control `K`
    pub fn provide<K, R>(
        &self,
        tokens: Arc<K::Tokens>,
        info: K::Info,
        f: impl FnOnce(&ThemeScope<'_>) -> R,
    ) -> R
    where
        K: ControlKind,
    {
        let scope = self.with_control::<K>(tokens, info);
        f(&scope)
    }

    /// Theme in effect
    pub fn theme(&self) -> &FluentTheme {
        &self.theme
    }

    /// Mode in effect
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    /// Registry in effect
    pub fn control_tokens(&self) -> &Arc<ControlTokens> {
        self.theme.control_tokens()
    }

    /// Fluent style in effect, neutral outside any style scope
    pub fn style(&self) -> FluentStyle {
        self.ancestors()
            .find_map(|scope| scope.style)
            .unwrap_or_default()
    }

    /// Token set bound for control `K` by the nearest enclosing scope
    ///
    /// Outside any scope binding `K` this is the built-in token set.
    pub fn tokens<K: ControlKind>(&self) -> Arc<K::Tokens> {
        self.ancestors()
            .find_map(|scope| scope.control.as_ref().and_then(|(token, _)| K::unwrap_tokens(token)))
            .unwrap_or_else(|| {
                tracing::trace!("No {} tokens in scope, using defaults", K::TYPE);
                K::default_tokens()
            })
    }

    /// Info bound for control `K` by the nearest enclosing scope
    ///
    /// Outside any scope binding `K` this is `K::Info::default()`.
    pub fn info<K: ControlKind>(&self) -> K::Info {
        self.ancestors()
            .find_map(|scope| scope.control.as_ref().and_then(|(_, info)| K::unwrap_info(info)))
            .cloned()
            .unwrap_or_else(|| {
                tracing::trace!("No {} info in scope, using defaults", K::TYPE);
                K::Info::default()
            })
    }

    /// Number of enclosing scopes (the root has depth 0)
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// This scope followed by its ancestors up to the root
    fn ancestors(&self) -> impl Iterator<Item = &ThemeScope<'a>> {
        std::iter::successors(Some(self), |scope| scope.parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::control_tokens::fab::{FabInfo, FabSize, FabState, FabTokens, FloatingActionButton};
    use crate::control_tokens::search_bar::{SearchBar, SearchBarInfo};
    use crate::state::StateColor;

    #[derive(Debug)]
    struct GreenFab;

    impl FabTokens for GreenFab {
        fn background_color(&self, _info: &FabInfo, _theme: &FluentTheme) -> StateColor {
            StateColor::new(Color::rgb(0, 0xFF, 0))
        }
    }

    #[test]
    fn test_defaults_outside_scope() {
        let root = ThemeScope::default();
        let info = root.info::<FloatingActionButton>();
        assert_eq!(info, FabInfo::default());

        let tokens = root.tokens::<FloatingActionButton>();
        assert_eq!(tokens.fixed_height(&info, root.theme()), 56.0);
        assert_eq!(root.style(), FluentStyle::Neutral);
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn test_control_binding_visible_to_descendants() {
        let root = ThemeScope::default();
        let info = FabInfo::new(FabState::Collapsed, FabSize::Small);
        let fab = root.with_control::<FloatingActionButton>(Arc::new(GreenFab), info.clone());
        let nested = fab.with_style(FluentStyle::Brand);
        let deeper = nested.with_theme_mode(ThemeMode::Dark);

        assert_eq!(deeper.depth(), 3);
        assert_eq!(deeper.info::<FloatingActionButton>(), info);
        let color = deeper
            .tokens::<FloatingActionButton>()
            .background_color(&info, deeper.theme());
        assert_eq!(color.rest, Color::rgb(0, 0xFF, 0));
    }

    #[test]
    fn test_binding_does_not_leak_to_parent() {
        let root = ThemeScope::default();
        {
            let _fab = root.with_control::<FloatingActionButton>(
                Arc::new(GreenFab),
                FabInfo::new(FabState::Collapsed, FabSize::Small),
            );
        }
        assert_eq!(root.info::<FloatingActionButton>(), FabInfo::default());
    }

    #[test]
    fn test_nested_binding_shadows_outer() {
        let root = ThemeScope::default();
        let outer = root.with_control::<FloatingActionButton>(
            Arc::new(GreenFab),
            FabInfo::new(FabState::Collapsed, FabSize::Small),
        );
        let inner_info = FabInfo::new(FabState::Expanded, FabSize::Small);
        let inner = outer.with_control::<FloatingActionButton>(
            FloatingActionButton::default_tokens(),
            inner_info.clone(),
        );

        assert_eq!(inner.info::<FloatingActionButton>(), inner_info);
        let color = inner
            .tokens::<FloatingActionButton>()
            .background_color(&inner_info, inner.theme());
        assert_ne!(color.rest, Color::rgb(0, 0xFF, 0));
        // The outer binding is untouched
        assert_eq!(
            outer.info::<FloatingActionButton>(),
            FabInfo::new(FabState::Collapsed, FabSize::Small)
        );
    }

    #[test]
    fn test_other_controls_unaffected() {
        let root = ThemeScope::default();
        let fab = root.with_control::<FloatingActionButton>(Arc::new(GreenFab), FabInfo::default());
        let search = fab.with_control::<SearchBar>(
            SearchBar::default_tokens(),
            SearchBarInfo::new(FluentStyle::Brand),
        );

        // Both bindings are visible from the innermost scope
        assert_eq!(search.info::<SearchBar>().style, FluentStyle::Brand);
        let color = search
            .tokens::<FloatingActionButton>()
            .background_color(&FabInfo::default(), search.theme());
        assert_eq!(color.rest, Color::rgb(0, 0xFF, 0));
    }

    #[test]
    fn test_theme_mode_scope() {
        let root = ThemeScope::default();
        let dark = root.with_theme_mode(ThemeMode::Dark);
        assert_eq!(root.theme_mode(), ThemeMode::Light);
        assert_eq!(dark.theme_mode(), ThemeMode::Dark);
        assert!(Arc::ptr_eq(root.control_tokens(), dark.control_tokens()));
    }

    #[test]
    fn test_control_tokens_scope() {
        let root = ThemeScope::default();
        let registry = Arc::new(ControlTokens::new());
        let scoped = root.with_control_tokens(Arc::clone(&registry));
        assert!(Arc::ptr_eq(scoped.control_tokens(), &registry));
        assert!(!Arc::ptr_eq(root.control_tokens(), &registry));
    }

    #[test]
    fn test_style_inherited() {
        let root = ThemeScope::default();
        let brand = root.with_style(FluentStyle::Brand);
        let nested = brand.with_theme_mode(ThemeMode::Dark);
        assert_eq!(nested.style(), FluentStyle::Brand);
        let neutral = nested.with_style(FluentStyle::Neutral);
        assert_eq!(neutral.style(), FluentStyle::Neutral);
    }

    #[test]
    fn test_provide_returns_closure_value() {
        let root = ThemeScope::default();
        let depth = root.provide::<FloatingActionButton, _>(
            Arc::new(GreenFab),
            FabInfo::default(),
            |scope| scope.depth(),
        );
        assert_eq!(depth, 1);
    }
}
