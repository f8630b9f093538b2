//! Control identities, token handles and per-render info
//!
//! [`ControlType`] is the closed set of tokenized controls. For each of them
//! there is one token trait (see [`crate::control_tokens`]), one info type
//! and one zero-sized marker implementing [`ControlKind`], which ties the
//! three together so registries and scopes can hand out typed values.

use crate::control_tokens::{
    avatar::{AvatarInfo, AvatarTokens, DefaultAvatarTokens},
    avatar_group::{AvatarGroupInfo, AvatarGroupTokens, DefaultAvatarGroupTokens},
    button::{ButtonInfo, ButtonTokens, DefaultButtonTokens},
    circular_progress::{
        CircularProgressIndicatorInfo, CircularProgressIndicatorTokens,
        DefaultCircularProgressIndicatorTokens,
    },
    fab::{DefaultFabTokens, FabInfo, FabTokens},
    linear_progress::{
        DefaultLinearProgressIndicatorTokens, LinearProgressIndicatorInfo,
        LinearProgressIndicatorTokens,
    },
    search_bar::{DefaultSearchBarTokens, SearchBarInfo, SearchBarTokens},
};
use crate::theme::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// =============================================================================
// Control Type
// =============================================================================

/// Every control with a token set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ControlType {
    /// Single avatar
    Avatar,
    /// Row or pile of avatars
    AvatarGroup,
    /// Push button
    Button,
    /// Spinner
    CircularProgressIndicator,
    /// Floating action button
    FloatingActionButton,
    /// Progress bar
    LinearProgressIndicator,
    /// Search input
    SearchBar,
}

impl ControlType {
    /// All control types in declaration order
    pub const ALL: [ControlType; 7] = [
        ControlType::Avatar,
        ControlType::AvatarGroup,
        ControlType::Button,
        ControlType::CircularProgressIndicator,
        ControlType::FloatingActionButton,
        ControlType::LinearProgressIndicator,
        ControlType::SearchBar,
    ];

    /// Name used in configuration and logs
    pub fn name(&self) -> &'static str {
        match self {
            ControlType::Avatar => "Avatar",
            ControlType::AvatarGroup => "AvatarGroup",
            ControlType::Button => "Button",
            ControlType::CircularProgressIndicator => "CircularProgressIndicator",
            ControlType::FloatingActionButton => "FloatingActionButton",
            ControlType::LinearProgressIndicator => "LinearProgressIndicator",
            ControlType::SearchBar => "SearchBar",
        }
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ControlType {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ThemeError::UnknownControlType(s.to_string()))
    }
}

// =============================================================================
// Control Token
// =============================================================================

/// A control's token set, tagged with its control type
///
/// Cloning only bumps a reference count; two clones of the same handle are
/// [`ControlToken::ptr_eq`].
#[derive(Debug, Clone)]
pub enum ControlToken {
    /// Avatar tokens
    Avatar(Arc<dyn AvatarTokens>),
    /// Avatar group tokens
    AvatarGroup(Arc<dyn AvatarGroupTokens>),
    /// Button tokens
    Button(Arc<dyn ButtonTokens>),
    /// Circular progress indicator tokens
    CircularProgressIndicator(Arc<dyn CircularProgressIndicatorTokens>),
    /// Floating action button tokens
    FloatingActionButton(Arc<dyn FabTokens>),
    /// Linear progress indicator tokens
    LinearProgressIndicator(Arc<dyn LinearProgressIndicatorTokens>),
    /// Search bar tokens
    SearchBar(Arc<dyn SearchBarTokens>),
}

impl ControlToken {
    /// The built-in token set for `control_type`
    pub fn default_for(control_type: ControlType) -> Self {
        match control_type {
            ControlType::Avatar => ControlToken::Avatar(Arc::new(DefaultAvatarTokens)),
            ControlType::AvatarGroup => {
                ControlToken::AvatarGroup(Arc::new(DefaultAvatarGroupTokens))
            }
            ControlType::Button => ControlToken::Button(Arc::new(DefaultButtonTokens)),
            ControlType::CircularProgressIndicator => ControlToken::CircularProgressIndicator(
                Arc::new(DefaultCircularProgressIndicatorTokens),
            ),
            ControlType::FloatingActionButton => {
                ControlToken::FloatingActionButton(Arc::new(DefaultFabTokens))
            }
            ControlType::LinearProgressIndicator => ControlToken::LinearProgressIndicator(
                Arc::new(DefaultLinearProgressIndicatorTokens),
            ),
            ControlType::SearchBar => ControlToken::SearchBar(Arc::new(DefaultSearchBarTokens)),
        }
    }

    /// Control type this token set belongs to
    pub fn control_type(&self) -> ControlType {
        match self {
            ControlToken::Avatar(_) => ControlType::Avatar,
            ControlToken::AvatarGroup(_) => ControlType::AvatarGroup,
            ControlToken::Button(_) => ControlType::Button,
            ControlToken::CircularProgressIndicator(_) => ControlType::CircularProgressIndicator,
            ControlToken::FloatingActionButton(_) => ControlType::FloatingActionButton,
            ControlToken::LinearProgressIndicator(_) => ControlType::LinearProgressIndicator,
            ControlToken::SearchBar(_) => ControlType::SearchBar,
        }
    }

    /// Whether both handles point at the same token instance
    pub fn ptr_eq(&self, other: &ControlToken) -> bool {
        match (self, other) {
            (ControlToken::Avatar(a), ControlToken::Avatar(b)) => Arc::ptr_eq(a, b),
            (ControlToken::AvatarGroup(a), ControlToken::AvatarGroup(b)) => Arc::ptr_eq(a, b),
            (ControlToken::Button(a), ControlToken::Button(b)) => Arc::ptr_eq(a, b),
            (
                ControlToken::CircularProgressIndicator(a),
                ControlToken::CircularProgressIndicator(b),
            ) => Arc::ptr_eq(a, b),
            (ControlToken::FloatingActionButton(a), ControlToken::FloatingActionButton(b)) => {
                Arc::ptr_eq(a, b)
            }
            (
                ControlToken::LinearProgressIndicator(a),
                ControlToken::LinearProgressIndicator(b),
            ) => Arc::ptr_eq(a, b),
            (ControlToken::SearchBar(a), ControlToken::SearchBar(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// =============================================================================
// Control Info
// =============================================================================

/// Per-render variant/state snapshot of one control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlInfo {
    /// Avatar info
    Avatar(AvatarInfo),
    /// Avatar group info
    AvatarGroup(AvatarGroupInfo),
    /// Button info
    Button(ButtonInfo),
    /// Circular progress indicator info
    CircularProgressIndicator(CircularProgressIndicatorInfo),
    /// Floating action button info
    FloatingActionButton(FabInfo),
    /// Linear progress indicator info
    LinearProgressIndicator(LinearProgressIndicatorInfo),
    /// Search bar info
    SearchBar(SearchBarInfo),
}

impl ControlInfo {
    /// Control type this info belongs to
    pub fn control_type(&self) -> ControlType {
        match self {
            ControlInfo::Avatar(_) => ControlType::Avatar,
            ControlInfo::AvatarGroup(_) => ControlType::AvatarGroup,
            ControlInfo::Button(_) => ControlType::Button,
            ControlInfo::CircularProgressIndicator(_) => ControlType::CircularProgressIndicator,
            ControlInfo::FloatingActionButton(_) => ControlType::FloatingActionButton,
            ControlInfo::LinearProgressIndicator(_) => ControlType::LinearProgressIndicator,
            ControlInfo::SearchBar(_) => ControlType::SearchBar,
        }
    }
}

// =============================================================================
// Control Kind
// =============================================================================

/// Type-level link between a control type, its token trait and its info
///
/// Implemented by one marker struct per control (for example
/// [`crate::control_tokens::fab::FloatingActionButton`]).
pub trait ControlKind: 'static {
    /// The control type
    const TYPE: ControlType;

    /// Token trait object for the control
    type Tokens: ?Sized + Send + Sync + fmt::Debug;

    /// Info for the control
    type Info: Clone + Default + fmt::Debug;

    /// Built-in token set
    fn default_tokens() -> Arc<Self::Tokens>;

    /// Tag a typed token set
    fn wrap_tokens(tokens: Arc<Self::Tokens>) -> ControlToken;

    /// Typed token set if `token` belongs to this control
    fn unwrap_tokens(token: &ControlToken) -> Option<Arc<Self::Tokens>>;

    /// Tag a typed info
    fn wrap_info(info: Self::Info) -> ControlInfo;

    /// Typed info if `info` belongs to this control
    fn unwrap_info(info: &ControlInfo) -> Option<&Self::Info>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_type_display_and_parse() {
        for control_type in ControlType::ALL {
            let parsed: ControlType = control_type.to_string().parse().unwrap();
            assert_eq!(parsed, control_type);
        }
        assert_eq!("searchbar".parse::<ControlType>().unwrap(), ControlType::SearchBar);
        assert!(matches!(
            "Shimmer".parse::<ControlType>(),
            Err(ThemeError::UnknownControlType(_))
        ));
    }

    #[test]
    fn test_default_token_matches_type() {
        for control_type in ControlType::ALL {
            assert_eq!(ControlToken::default_for(control_type).control_type(), control_type);
        }
    }

    #[test]
    fn test_ptr_eq() {
        let a = ControlToken::default_for(ControlType::Button);
        let b = a.clone();
        let c = ControlToken::default_for(ControlType::Button);
        let d = ControlToken::default_for(ControlType::Avatar);
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
        assert!(!a.ptr_eq(&d));
    }

    #[test]
    fn test_control_info_type() {
        let info = ControlInfo::FloatingActionButton(FabInfo::default());
        assert_eq!(info.control_type(), ControlType::FloatingActionButton);
        let info = ControlInfo::SearchBar(SearchBarInfo::default());
        assert_eq!(info.control_type(), ControlType::SearchBar);
    }
}
