//! Per-control token sets
//!
//! Each submodule defines, for one control:
//! - the info type carrying the control's variant discriminants
//! - the token trait, where every method has a default resolution
//! - the `Default*Tokens` unit struct using those defaults
//! - the marker implementing [`crate::control::ControlKind`]
//!
//! # Usage
//!
//! ```rust
//! use fluent_core::control_tokens::search_bar::{SearchBar, SearchBarInfo, SearchBarTokens};
//! use fluent_core::theme::{FluentStyle, FluentTheme};
//!
//! let theme = FluentTheme::default();
//! let tokens = theme.control_tokens().tokens::<SearchBar>();
//! let info = SearchBarInfo::new(FluentStyle::Brand);
//! assert_eq!(tokens.height(&info, &theme), 40.0);
//! ```

pub mod avatar;
pub mod avatar_group;
pub mod button;
pub mod circular_progress;
pub mod fab;
pub mod linear_progress;
pub mod search_bar;

use crate::alias::NeutralStrokeColorTokens;
use crate::global::{self, StrokeWidthTokens};
use crate::state::BorderStroke;
use crate::theme::FluentTheme;

/// Keyboard focus indicator: a 2dp inner stroke and a 1dp outer stroke
pub(crate) fn focus_ring(theme: &FluentTheme) -> Vec<BorderStroke> {
    let alias = theme.alias_tokens();
    let mode = theme.mode();
    vec![
        BorderStroke::new(
            global::stroke_width(StrokeWidthTokens::Width20),
            alias.neutral_stroke(NeutralStrokeColorTokens::StrokeFocus1).value(mode),
        ),
        BorderStroke::new(
            global::stroke_width(StrokeWidthTokens::Width10),
            alias.neutral_stroke(NeutralStrokeColorTokens::StrokeFocus2).value(mode),
        ),
    ]
}
