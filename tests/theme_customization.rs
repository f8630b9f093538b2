//! Theme Customization Integration Tests
//!
//! Switching modes, loading brand configurations from disk and customizing
//! individual controls, as an application would at startup.

use fluent_controls::avatar::Avatar;
use fluent_controls::avatar_group::AvatarGroup;
use fluent_controls::fab::Fab;
use fluent_controls::search_bar::SearchBar;
use fluent_core::control_tokens::search_bar::{
    SearchBar as SearchBarControl, SearchBarInfo, SearchBarTokens,
};
use fluent_core::global::Dp;
use fluent_core::state::InteractionState;
use fluent_core::{FluentStyle, FluentTheme, ThemeConfig, ThemeMode, ThemeScope};
use std::sync::Arc;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Switching the mode changes light/dark colors but keeps the registry
#[test]
fn test_mode_switch_keeps_registry() {
    init_tracing();
    let light_theme = FluentTheme::new(ThemeMode::Light);
    let dark_theme = light_theme.with_mode(light_theme.mode().toggled());
    assert!(Arc::ptr_eq(light_theme.control_tokens(), dark_theme.control_tokens()));

    let fab = Fab::new().with_icon("ic_add");
    let light = fab
        .render(&ThemeScope::root(light_theme), InteractionState::IDLE)
        .unwrap();
    let dark = fab
        .render(&ThemeScope::root(dark_theme), InteractionState::IDLE)
        .unwrap();

    assert_eq!(light.background.to_hex(), "#0F6CBD");
    assert_eq!(dark.background.to_hex(), "#479EF5");
    assert_eq!(light.height, dark.height);
}

#[test]
fn test_nested_dark_scope_reverts() {
    let scope = ThemeScope::default();
    let fab = Fab::new().with_icon("ic_add");

    let before = fab.render(&scope, InteractionState::IDLE).unwrap();
    {
        let dark = scope.with_theme_mode(ThemeMode::Dark);
        let inside = fab.render(&dark, InteractionState::IDLE).unwrap();
        assert_ne!(before.background, inside.background);
    }
    let after = fab.render(&scope, InteractionState::IDLE).unwrap();
    assert_eq!(before.background, after.background);
}

#[test]
fn test_brand_config_from_disk() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.json");
    std::fs::write(
        &path,
        r##"{ "mode": "light", "brand": { "80": "#8764B8", "100": "#A083C9" } }"##,
    )
    .unwrap();

    let theme = ThemeConfig::load(&path).unwrap().into_theme().unwrap();
    let scope = ThemeScope::root(theme);

    let fab = Fab::new().with_text("Create").render(&scope, InteractionState::IDLE).unwrap();
    assert_eq!(fab.background.to_hex(), "#8764B8");

    let search = SearchBar::new().with_style(FluentStyle::Brand).render(&scope);
    assert_eq!(search.background.to_hex(), "#8764B8");
}

#[derive(Debug)]
struct CompactSearch;

impl SearchBarTokens for CompactSearch {
    fn height(&self, _info: &SearchBarInfo, _theme: &FluentTheme) -> Dp {
        32.0
    }
}

/// Registry updates are seen by every holder of the shared registry,
/// including scopes created before the update
#[test]
fn test_registry_update_visible_to_existing_scopes() {
    let scope = ThemeScope::default();
    let dark = scope.with_theme_mode(ThemeMode::Dark);
    assert_eq!(SearchBar::new().render(&dark).height, 40.0);

    scope
        .control_tokens()
        .update_tokens::<SearchBarControl>(Arc::new(CompactSearch));

    assert_eq!(SearchBar::new().render(&scope).height, 32.0);
    assert_eq!(SearchBar::new().render(&dark).height, 32.0);
}

#[test]
fn test_props_round_trip_through_json() {
    let group = AvatarGroup::new(vec![Avatar::new("Ann Lee"), Avatar::new("Bo").active(true)])
        .with_max_visible(1);
    let json = serde_json::to_string(&group).unwrap();
    let restored: AvatarGroup = serde_json::from_str(&json).unwrap();

    let scope = ThemeScope::default();
    let node = restored.render(&scope).unwrap();
    assert_eq!(node.hidden_count, 1);
    assert_eq!(node.members.len(), 2);
}
