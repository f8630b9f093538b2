//! Design tokens and theme resolution for Fluent controls
//!
//! Visual properties of every control are resolved at render time from a
//! layered token system:
//!
//! - [`global`] - process-wide constant scales (sizes, spacing, fonts, ramps)
//! - [`alias`] - semantic light/dark colors and the type ramp, per brand
//! - [`control_tokens`] - one overridable token trait per control
//! - [`registry`] - the active token set for each control type
//! - [`scope`] - nested theme scopes carrying tokens and info to renderers
//!
//! # Modules
//!
//! - [`color`] - colors and light/dark pairs
//! - [`typography`] - font descriptors
//! - [`state`] - state-dependent values, border stacks and padding
//! - [`control`] - control identities, token handles and info
//! - [`theme`] - theme provider, configuration and errors
//!
//! # Example
//!
//! ```rust
//! use fluent_core::control_tokens::fab::{FabInfo, FloatingActionButton};
//! use fluent_core::state::InteractionState;
//! use fluent_core::theme::{FluentTheme, ThemeMode};
//!
//! let theme = FluentTheme::new(ThemeMode::Light);
//! let fab = theme.control_tokens().tokens::<FloatingActionButton>();
//!
//! let background = fab.background_color(&FabInfo::default(), &theme);
//! let color = background.by_state(true, false, InteractionState::IDLE);
//! assert_eq!(color.to_hex(), "#0F6CBD");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alias;
pub mod color;
pub mod control;
pub mod control_tokens;
pub mod global;
pub mod registry;
pub mod scope;
pub mod state;
pub mod theme;
pub mod typography;

// Re-export commonly used types
pub use color::{Color, FluentColor};
pub use control::{ControlInfo, ControlKind, ControlToken, ControlType};
pub use registry::ControlTokens;
pub use scope::ThemeScope;
pub use state::{
    border_inset, stack_borders, BorderLayer, BorderStroke, InteractionState, PaddingValues,
    StateBorderStroke, StateColor, StateElevation, StateValue,
};
pub use theme::{FluentStyle, FluentTheme, Result, ThemeConfig, ThemeError, ThemeMode};
pub use typography::{FontInfo, FontSize, FontWeight};
