//! Control token registry
//!
//! [`ControlTokens`] maps every [`ControlType`] to the token set currently in
//! effect. The map is populated eagerly for every control type when the
//! registry is built, so a lookup can never miss. Updates mutate the map in
//! place behind a lock: everybody holding the same `Arc<ControlTokens>`
//! observes them without re-acquiring the registry.

use crate::control::{ControlKind, ControlToken, ControlType};
use crate::theme::{Result, ThemeError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Registry of the active token set for each control type
pub struct ControlTokens {
    tokens: RwLock<HashMap<ControlType, ControlToken>>,
}

impl ControlTokens {
    /// Registry holding the built-in token set for every control type
    pub fn new() -> Self {
        let tokens = ControlType::ALL
            .into_iter()
            .map(|control_type| (control_type, ControlToken::default_for(control_type)))
            .collect();
        tracing::debug!("Created control token registry with {} entries", ControlType::ALL.len());
        Self { tokens: RwLock::new(tokens) }
    }

    /// Token set currently registered for `control_type`
    ///
    /// Repeated calls return the same instance until the entry is updated.
    pub fn get(&self, control_type: ControlType) -> ControlToken {
        // Every type is inserted by `new` and never removed.
        self.tokens
            .read()
            .get(&control_type)
            .cloned()
            .unwrap_or_else(|| ControlToken::default_for(control_type))
    }

    /// Typed token set for the control `K`
    pub fn tokens<K: ControlKind>(&self) -> Arc<K::Tokens> {
        K::unwrap_tokens(&self.get(K::TYPE)).unwrap_or_else(K::default_tokens)
    }

    /// Replace the token set for `control_type`
    ///
    /// Returns the same registry so calls can be chained. Fails without
    /// touching the map when `token` belongs to another control type.
    pub fn update(&self, control_type: ControlType, token: ControlToken) -> Result<&Self> {
        let found = token.control_type();
        if found != control_type {
            return Err(ThemeError::TokenMismatch {
                expected: control_type,
                found,
            });
        }

        self.tokens.write().insert(control_type, token);
        tracing::debug!("Updated tokens for {}", control_type);
        Ok(self)
    }

    /// Replace the token set for the control `K`
    pub fn update_tokens<K: ControlKind>(&self, tokens: Arc<K::Tokens>) -> &Self {
        self.tokens.write().insert(K::TYPE, K::wrap_tokens(tokens));
        tracing::debug!("Updated tokens for {}", K::TYPE);
        self
    }

    /// Number of registered control types
    pub fn len(&self) -> usize {
        self.tokens.read().len()
    }

    /// Whether no control type is registered
    pub fn is_empty(&self) -> bool {
        self.tokens.read().is_empty()
    }
}

impl Default for ControlTokens {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ControlTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = self.tokens.read();
        let mut types: Vec<_> = tokens.keys().copied().collect();
        types.sort();
        f.debug_struct("ControlTokens").field("types", &types).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::control_tokens::fab::{FabInfo, FabTokens, FloatingActionButton};
    use crate::control_tokens::search_bar::SearchBar;
    use crate::state::StateColor;
    use crate::theme::FluentTheme;
    use std::thread;

    #[derive(Debug)]
    struct RedFab;

    impl FabTokens for RedFab {
        fn background_color(&self, _info: &FabInfo, _theme: &FluentTheme) -> StateColor {
            StateColor::new(Color::rgb(0xFF, 0, 0))
        }
    }

    #[test]
    fn test_every_type_registered() {
        let registry = ControlTokens::new();
        assert_eq!(registry.len(), ControlType::ALL.len());
        assert!(!registry.is_empty());
        for control_type in ControlType::ALL {
            assert_eq!(registry.get(control_type).control_type(), control_type);
        }
    }

    #[test]
    fn test_get_returns_same_instance() {
        let registry = ControlTokens::new();
        for control_type in ControlType::ALL {
            let first = registry.get(control_type);
            let second = registry.get(control_type);
            assert!(first.ptr_eq(&second), "{} changed between lookups", control_type);
        }
    }

    #[test]
    fn test_update_replaces_only_target() {
        let registry = ControlTokens::new();
        let before: Vec<_> = ControlType::ALL.iter().map(|t| registry.get(*t)).collect();

        let red: Arc<dyn FabTokens> = Arc::new(RedFab);
        let token = ControlToken::FloatingActionButton(Arc::clone(&red));
        registry
            .update(ControlType::FloatingActionButton, token.clone())
            .unwrap();

        assert!(registry.get(ControlType::FloatingActionButton).ptr_eq(&token));
        for (control_type, old) in ControlType::ALL.iter().zip(before) {
            if *control_type != ControlType::FloatingActionButton {
                assert!(registry.get(*control_type).ptr_eq(&old));
            }
        }
    }

    #[test]
    fn test_update_returns_same_registry() {
        let registry = ControlTokens::new();
        let returned = registry
            .update(
                ControlType::Button,
                ControlToken::default_for(ControlType::Button),
            )
            .unwrap();
        assert!(std::ptr::eq(returned, &registry));
    }

    #[test]
    fn test_update_rejects_mismatch() {
        let registry = ControlTokens::new();
        let before = registry.get(ControlType::SearchBar);
        let result = registry.update(
            ControlType::SearchBar,
            ControlToken::default_for(ControlType::Avatar),
        );
        assert!(matches!(
            result,
            Err(ThemeError::TokenMismatch {
                expected: ControlType::SearchBar,
                found: ControlType::Avatar
            })
        ));
        assert!(registry.get(ControlType::SearchBar).ptr_eq(&before));
    }

    #[test]
    fn test_typed_access() {
        let registry = ControlTokens::new();
        let theme = FluentTheme::default();
        registry.update_tokens::<FloatingActionButton>(Arc::new(RedFab));

        let fab = registry.tokens::<FloatingActionButton>();
        let color = fab.background_color(&FabInfo::default(), &theme);
        assert_eq!(color.rest, Color::rgb(0xFF, 0, 0));

        let search = registry.tokens::<SearchBar>();
        assert_eq!(search.height(&Default::default(), &theme), 40.0);
    }

    #[test]
    fn test_shared_holders_observe_update() {
        let registry = Arc::new(ControlTokens::new());
        let holder = Arc::clone(&registry);
        let token = ControlToken::FloatingActionButton(Arc::new(RedFab));

        registry
            .update(ControlType::FloatingActionButton, token.clone())
            .unwrap();
        assert!(holder.get(ControlType::FloatingActionButton).ptr_eq(&token));
    }

    #[test]
    fn test_concurrent_reads() {
        let registry = Arc::new(ControlTokens::new());
        let expected = registry.get(ControlType::Avatar);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.get(ControlType::Avatar))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().ptr_eq(&expected));
        }
    }
}
