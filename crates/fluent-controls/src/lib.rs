//! Tokenized Fluent controls
//!
//! Each control is a props struct with a builder, and a `render` method
//! that resolves the control's tokens in a [`ThemeScope`] and returns a
//! serializable node for the host toolkit to draw. Controls whose minimum
//! content is missing render nothing.
//!
//! # Available Controls
//!
//! - [`fab::Fab`] - floating action button
//! - [`button::Button`] - push button
//! - [`avatar::Avatar`] - person or group avatar
//! - [`avatar_group::AvatarGroup`] - row of avatars with overflow
//! - [`search_bar::SearchBar`] - search input with loading spinner
//!
//! # Example
//!
//! ```rust
//! use fluent_controls::fab::Fab;
//! use fluent_core::scope::ThemeScope;
//! use fluent_core::state::InteractionState;
//!
//! let scope = ThemeScope::default();
//!
//! let fab = Fab::new().with_icon("ic_add").with_text("New").on_click("compose");
//! let node = fab.render(&scope, InteractionState::IDLE).unwrap();
//! assert_eq!(node.height, 56.0);
//!
//! // Nothing to show, nothing rendered
//! assert!(Fab::new().render(&scope, InteractionState::IDLE).is_none());
//! ```
//!
//! [`ThemeScope`]: fluent_core::scope::ThemeScope

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod avatar;
pub mod avatar_group;
pub mod button;
pub mod fab;
pub mod search_bar;

use fluent_core::color::Color;
use fluent_core::global::IconSize;
use fluent_core::typography::FontInfo;
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Component identifier
pub type ComponentId = String;

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

/// Fresh identifier for a rendered node
pub(crate) fn new_component_id() -> ComponentId {
    uuid::Uuid::new_v4().to_string()
}

/// Id from the props, or a fresh one
pub(crate) fn component_id(id: &Option<ComponentId>) -> ComponentId {
    id.clone().unwrap_or_else(new_component_id)
}

/// A glyph to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconNode {
    /// Icon name
    pub name: String,
    /// Box and glyph variant
    pub size: IconSize,
    /// Tint
    pub color: Color,
}

/// A single line of text to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    /// Content
    pub text: String,
    /// Font
    pub font: FontInfo,
    /// Color
    pub color: Color,
}

/// Whether `text` holds something to show
pub(crate) fn has_text(text: Option<&str>) -> bool {
    text.is_some_and(|text| !text.is_empty())
}
