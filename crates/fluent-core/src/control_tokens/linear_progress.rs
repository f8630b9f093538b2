//! Linear progress indicator tokens

use crate::alias::{BrandStrokeColorTokens, NeutralStrokeColorTokens};
use crate::color::Color;
use crate::control::{ControlInfo, ControlKind, ControlToken, ControlType};
use crate::global::{self, Dp, SizeTokens};
use crate::theme::FluentTheme;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Bar thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LinearProgressIndicatorHeight {
    /// 2dp
    #[default]
    XXXSmall,
    /// 4dp
    XXSmall,
}

/// Per-render info for a linear progress indicator
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinearProgressIndicatorInfo {
    /// Bar thickness
    pub height: LinearProgressIndicatorHeight,
}

impl LinearProgressIndicatorInfo {
    /// Create info
    pub fn new(height: LinearProgressIndicatorHeight) -> Self {
        Self { height }
    }
}

/// Token set of the linear progress indicator
pub trait LinearProgressIndicatorTokens: Send + Sync + fmt::Debug {
    /// Bar thickness
    fn stroke_width(&self, info: &LinearProgressIndicatorInfo, _theme: &FluentTheme) -> Dp {
        match info.height {
            LinearProgressIndicatorHeight::XXXSmall => global::size(SizeTokens::Size20),
            LinearProgressIndicatorHeight::XXSmall => global::size(SizeTokens::Size40),
        }
    }

    /// Track color
    fn background_color(&self, _info: &LinearProgressIndicatorInfo, theme: &FluentTheme) -> Color {
        theme
            .alias_tokens()
            .neutral_stroke(NeutralStrokeColorTokens::Stroke1)
            .value(theme.mode())
    }

    /// Indicator color
    fn color(&self, _info: &LinearProgressIndicatorInfo, theme: &FluentTheme) -> Color {
        theme
            .alias_tokens()
            .brand_stroke(BrandStrokeColorTokens::BrandStroke1)
            .value(theme.mode())
    }
}

/// Built-in linear progress indicator tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLinearProgressIndicatorTokens;

impl LinearProgressIndicatorTokens for DefaultLinearProgressIndicatorTokens {}

/// Marker for [`ControlType::LinearProgressIndicator`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearProgressIndicator;

impl ControlKind for LinearProgressIndicator {
    const TYPE: ControlType = ControlType::LinearProgressIndicator;
    type Tokens = dyn LinearProgressIndicatorTokens;
    type Info = LinearProgressIndicatorInfo;

    fn default_tokens() -> Arc<dyn LinearProgressIndicatorTokens> {
        Arc::new(DefaultLinearProgressIndicatorTokens)
    }

    fn wrap_tokens(tokens: Arc<dyn LinearProgressIndicatorTokens>) -> ControlToken {
        ControlToken::LinearProgressIndicator(tokens)
    }

    fn unwrap_tokens(token: &ControlToken) -> Option<Arc<dyn LinearProgressIndicatorTokens>> {
        match token {
            ControlToken::LinearProgressIndicator(tokens) => Some(Arc::clone(tokens)),
            _ => None,
        }
    }

    fn wrap_info(info: LinearProgressIndicatorInfo) -> ControlInfo {
        ControlInfo::LinearProgressIndicator(info)
    }

    fn unwrap_info(info: &ControlInfo) -> Option<&LinearProgressIndicatorInfo> {
        match info {
            ControlInfo::LinearProgressIndicator(info) => Some(info),
            _ => None,
        }
    }
}
