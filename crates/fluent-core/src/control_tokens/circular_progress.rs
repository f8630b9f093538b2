//! Circular progress indicator tokens

use crate::alias::{BrandStrokeColorTokens, NeutralStrokeColorTokens};
use crate::color::Color;
use crate::control::{ControlInfo, ControlKind, ControlToken, ControlType};
use crate::global::{self, Dp, StrokeWidthTokens};
use crate::theme::{FluentStyle, FluentTheme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Spinner diameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CircularProgressIndicatorSize {
    /// 12dp
    XXSmall,
    /// 16dp
    #[default]
    XSmall,
    /// 24dp
    Small,
    /// 32dp
    Medium,
    /// 36dp
    Large,
}

impl CircularProgressIndicatorSize {
    /// Every size, smallest first
    pub const ALL: [CircularProgressIndicatorSize; 5] = [
        CircularProgressIndicatorSize::XXSmall,
        CircularProgressIndicatorSize::XSmall,
        CircularProgressIndicatorSize::Small,
        CircularProgressIndicatorSize::Medium,
        CircularProgressIndicatorSize::Large,
    ];
}

/// Per-render info for a circular progress indicator
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CircularProgressIndicatorInfo {
    /// Diameter
    pub size: CircularProgressIndicatorSize,
    /// Color family
    pub style: FluentStyle,
}

impl CircularProgressIndicatorInfo {
    /// Create info
    pub fn new(size: CircularProgressIndicatorSize, style: FluentStyle) -> Self {
        Self { size, style }
    }
}

/// Token set of the circular progress indicator
pub trait CircularProgressIndicatorTokens: Send + Sync + fmt::Debug {
    /// Outer diameter
    fn size(&self, info: &CircularProgressIndicatorInfo, _theme: &FluentTheme) -> Dp {
        match info.size {
            CircularProgressIndicatorSize::XXSmall => 12.0,
            CircularProgressIndicatorSize::XSmall => 16.0,
            CircularProgressIndicatorSize::Small => 24.0,
            CircularProgressIndicatorSize::Medium => 32.0,
            CircularProgressIndicatorSize::Large => 36.0,
        }
    }

    /// Arc thickness
    fn stroke_width(&self, info: &CircularProgressIndicatorInfo, _theme: &FluentTheme) -> Dp {
        match info.size {
            CircularProgressIndicatorSize::XXSmall | CircularProgressIndicatorSize::XSmall => {
                global::stroke_width(StrokeWidthTokens::Width10)
            }
            CircularProgressIndicatorSize::Small => {
                global::stroke_width(StrokeWidthTokens::Width20)
            }
            CircularProgressIndicatorSize::Medium => 3.0,
            CircularProgressIndicatorSize::Large => {
                global::stroke_width(StrokeWidthTokens::Width40)
            }
        }
    }

    /// Arc color
    fn color(&self, info: &CircularProgressIndicatorInfo, theme: &FluentTheme) -> Color {
        let alias = theme.alias_tokens();
        match info.style {
            FluentStyle::Neutral => alias
                .neutral_stroke(NeutralStrokeColorTokens::StrokeAccessible)
                .value(theme.mode()),
            FluentStyle::Brand => alias
                .brand_stroke(BrandStrokeColorTokens::BrandStroke1)
                .value(theme.mode()),
        }
    }
}

/// Built-in circular progress indicator tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCircularProgressIndicatorTokens;

impl CircularProgressIndicatorTokens for DefaultCircularProgressIndicatorTokens {}

/// Marker for [`ControlType::CircularProgressIndicator`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularProgressIndicator;

impl ControlKind for CircularProgressIndicator {
    const TYPE: ControlType = ControlType::CircularProgressIndicator;
    type Tokens = dyn CircularProgressIndicatorTokens;
    type Info = CircularProgressIndicatorInfo;

    fn default_tokens() -> Arc<dyn CircularProgressIndicatorTokens> {
        Arc::new(DefaultCircularProgressIndicatorTokens)
    }

    fn wrap_tokens(tokens: Arc<dyn CircularProgressIndicatorTokens>) -> ControlToken {
        ControlToken::CircularProgressIndicator(tokens)
    }

    fn unwrap_tokens(token: &ControlToken) -> Option<Arc<dyn CircularProgressIndicatorTokens>> {
        match token {
            ControlToken::CircularProgressIndicator(tokens) => Some(Arc::clone(tokens)),
            _ => None,
        }
    }

    fn wrap_info(info: CircularProgressIndicatorInfo) -> ControlInfo {
        ControlInfo::CircularProgressIndicator(info)
    }

    fn unwrap_info(info: &ControlInfo) -> Option<&CircularProgressIndicatorInfo> {
        match info {
            ControlInfo::CircularProgressIndicator(info) => Some(info),
            _ => None,
        }
    }
}
