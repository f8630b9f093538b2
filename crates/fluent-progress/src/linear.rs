//! Linear progress indicator
//!
//! The bar is a track line across the full width with an indicator line on
//! top. A determinate bar fills from the start edge up to the clamped
//! progress; an indeterminate bar draws a gradient segment between an
//! animated head and tail, fading from the track color to the indicator
//! color and back.

use crate::{clamp_progress, LayoutDirection, Paint, Point};
use fluent_core::control_tokens::linear_progress::{
    LinearProgressIndicator as LinearProgressControl, LinearProgressIndicatorHeight,
    LinearProgressIndicatorInfo, LinearProgressIndicatorTokens,
};
use fluent_core::global::Dp;
use fluent_core::scope::ThemeScope;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// Timing
// =============================================================================

/// Animation timings for hosts that animate the bar
pub mod timing {
    /// Tween from the previous to the new determinate progress
    pub const DETERMINATE_TWEEN_MS: u32 = 1000;
    /// Head (or tail) travel time across the bar
    pub const INDETERMINATE_TRAVEL_MS: u32 = 875;
    /// Pause appended to every indeterminate cycle
    pub const INDETERMINATE_PAUSE_MS: u32 = 500;
    /// Full indeterminate cycle
    pub const INDETERMINATE_CYCLE_MS: u32 = INDETERMINATE_TRAVEL_MS + INDETERMINATE_PAUSE_MS;
    /// Delay of the tail behind the head
    pub const TAIL_DELAY_MS: u32 = INDETERMINATE_TRAVEL_MS / 2;
}

// =============================================================================
// Props
// =============================================================================

/// What the bar reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LinearProgressMode {
    /// Known progress in `0.0..=1.0`; out of range values are clamped
    Determinate {
        /// Fraction done
        progress: f32,
    },
    /// Unknown progress; `head` and `tail` are the animated fractions of
    /// the current frame
    Indeterminate {
        /// Position of the leading end
        head: f32,
        /// Position of the trailing end
        tail: f32,
    },
}

/// Linear progress indicator properties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearProgressIndicator {
    /// Determinate or indeterminate
    pub mode: LinearProgressMode,
    /// Bar thickness
    #[serde(default)]
    pub height: LinearProgressIndicatorHeight,
    /// Token override; the registry's tokens are used when absent
    #[serde(skip)]
    pub tokens: Option<Arc<dyn LinearProgressIndicatorTokens>>,
}

impl LinearProgressIndicator {
    /// Bar showing `progress`
    pub fn determinate(progress: f32) -> Self {
        Self {
            mode: LinearProgressMode::Determinate { progress },
            height: LinearProgressIndicatorHeight::default(),
            tokens: None,
        }
    }

    /// Bar without known progress, at the start of its animation
    pub fn indeterminate() -> Self {
        Self {
            mode: LinearProgressMode::Indeterminate { head: 0.0, tail: 0.0 },
            height: LinearProgressIndicatorHeight::default(),
            tokens: None,
        }
    }

    /// Set the animated head and tail fractions of an indeterminate bar
    pub fn with_frame(mut self, head: f32, tail: f32) -> Self {
        self.mode = LinearProgressMode::Indeterminate { head, tail };
        self
    }

    /// Set bar thickness
    pub fn with_height(mut self, height: LinearProgressIndicatorHeight) -> Self {
        self.height = height;
        self
    }

    /// Use these tokens instead of the registry's
    pub fn with_tokens(mut self, tokens: Arc<dyn LinearProgressIndicatorTokens>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Lay the bar out across `width` dp
    pub fn render(
        &self,
        scope: &ThemeScope<'_>,
        width: Dp,
        direction: LayoutDirection,
    ) -> LinearProgressNode {
        let tokens = self
            .tokens
            .clone()
            .unwrap_or_else(|| scope.control_tokens().tokens::<LinearProgressControl>());
        let info = LinearProgressIndicatorInfo::new(self.height);

        scope.provide::<LinearProgressControl, _>(tokens, info, |scope| {
            let tokens = scope.tokens::<LinearProgressControl>();
            let info = scope.info::<LinearProgressControl>();
            let theme = scope.theme();

            let stroke_width = tokens.stroke_width(&info, theme);
            let background = tokens.background_color(&info, theme);
            let color = tokens.color(&info, theme);

            let width = width.max(0.0);
            let y = stroke_width / 2.0;
            let ltr = direction.is_ltr();
            let bar_start = if ltr { 0.0 } else { width };
            let bar_end = if ltr { width } else { 0.0 };
            // Offset of a fraction of the bar, measured from the start edge
            let at = |fraction: f32| {
                let distance = fraction * width;
                if ltr {
                    distance
                } else {
                    width - distance
                }
            };

            let track = Line {
                start: Point::new(bar_start, y),
                end: Point::new(bar_end, y),
                stroke_width,
                paint: Paint::solid(background),
            };

            let (indicator, progress) = match self.mode {
                LinearProgressMode::Determinate { progress } => {
                    let progress = clamp_progress(progress);
                    let indicator = Line {
                        start: Point::new(bar_start, y),
                        end: Point::new(at(progress), y),
                        stroke_width,
                        paint: Paint::solid(color),
                    };
                    (indicator, Some(progress))
                }
                LinearProgressMode::Indeterminate { head, tail } => {
                    let start = Point::new(at(clamp_progress(head)), y);
                    let end = Point::new(at(clamp_progress(tail)), y);
                    let indicator = Line {
                        start,
                        end,
                        stroke_width,
                        paint: Paint::LinearGradient {
                            stops: vec![(0.0, background), (0.5, color), (1.0, background)],
                            start,
                            end,
                        },
                    };
                    (indicator, None)
                }
            };

            tracing::trace!("Rendered linear progress indicator, progress {:?}", progress);
            LinearProgressNode {
                width,
                height: stroke_width,
                direction,
                progress,
                track,
                indicator,
            }
        })
    }
}

// =============================================================================
// Render Output
// =============================================================================

/// A straight stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// First end
    pub start: Point,
    /// Second end
    pub end: Point,
    /// Stroke thickness
    pub stroke_width: Dp,
    /// Stroke fill
    pub paint: Paint,
}

impl Line {
    /// Horizontal extent of the line
    pub fn length(&self) -> Dp {
        (self.end.x - self.start.x).abs()
    }
}

/// A laid out linear progress indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearProgressNode {
    /// Bar width
    pub width: Dp,
    /// Bar height, equal to the stroke width
    pub height: Dp,
    /// Layout direction the bar was laid out in
    pub direction: LayoutDirection,
    /// Clamped progress; `None` for indeterminate bars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f32>,
    /// Full-width background line
    pub track: Line,
    /// Progress line drawn over the track
    pub indicator: Line,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_core::color::Color;
    use fluent_core::theme::FluentTheme;

    #[derive(Debug)]
    struct RedBar;

    impl LinearProgressIndicatorTokens for RedBar {
        fn color(&self, _info: &LinearProgressIndicatorInfo, _theme: &FluentTheme) -> Color {
            Color::rgb(0xFF, 0, 0)
        }
    }

    #[test]
    fn test_timing_constants() {
        assert_eq!(timing::DETERMINATE_TWEEN_MS, 1000);
        assert_eq!(timing::INDETERMINATE_CYCLE_MS, 1375);
        assert_eq!(timing::TAIL_DELAY_MS, 437);
    }

    #[test]
    fn test_determinate_ltr() {
        let scope = ThemeScope::default();
        let node =
            LinearProgressIndicator::determinate(0.5).render(&scope, 100.0, LayoutDirection::Ltr);

        assert_eq!(node.height, 2.0);
        assert_eq!(node.track.start, Point::new(0.0, 1.0));
        assert_eq!(node.track.end, Point::new(100.0, 1.0));
        assert_eq!(node.indicator.start.x, 0.0);
        assert_eq!(node.indicator.end.x, 50.0);
        assert_eq!(node.progress, Some(0.5));
    }

    #[test]
    fn test_determinate_rtl_mirrors() {
        let scope = ThemeScope::default();
        let node = LinearProgressIndicator::determinate(0.25)
            .with_height(LinearProgressIndicatorHeight::XXSmall)
            .render(&scope, 200.0, LayoutDirection::Rtl);

        assert_eq!(node.height, 4.0);
        assert_eq!(node.track.start.x, 200.0);
        assert_eq!(node.track.end.x, 0.0);
        assert_eq!(node.indicator.start.x, 200.0);
        assert_eq!(node.indicator.end.x, 150.0);
        assert_eq!(node.indicator.length(), 50.0);
    }

    #[test]
    fn test_progress_is_clamped() {
        let scope = ThemeScope::default();
        let under =
            LinearProgressIndicator::determinate(-0.5).render(&scope, 100.0, LayoutDirection::Ltr);
        assert_eq!(under.progress, Some(0.0));
        assert_eq!(under.indicator.length(), 0.0);

        let over =
            LinearProgressIndicator::determinate(1.7).render(&scope, 100.0, LayoutDirection::Ltr);
        assert_eq!(over.progress, Some(1.0));
        assert_eq!(over.indicator.end.x, 100.0);
    }

    #[test]
    fn test_indeterminate_gradient() {
        let scope = ThemeScope::default();
        let node = LinearProgressIndicator::indeterminate()
            .with_frame(0.75, 0.25)
            .render(&scope, 100.0, LayoutDirection::Ltr);

        assert_eq!(node.progress, None);
        assert_eq!(node.indicator.start.x, 75.0);
        assert_eq!(node.indicator.end.x, 25.0);
        match &node.indicator.paint {
            Paint::LinearGradient { stops, start, end } => {
                assert_eq!(stops.len(), 3);
                assert_eq!(stops[0].1, stops[2].1);
                assert_ne!(stops[0].1, stops[1].1);
                assert_eq!(*start, node.indicator.start);
                assert_eq!(*end, node.indicator.end);
            }
            other => panic!("expected gradient, got {:?}", other),
        }

        let rtl = LinearProgressIndicator::indeterminate()
            .with_frame(0.75, 1.5)
            .render(&scope, 100.0, LayoutDirection::Rtl);
        assert_eq!(rtl.indicator.start.x, 25.0);
        assert_eq!(rtl.indicator.end.x, 0.0);
    }

    #[test]
    fn test_token_override() {
        let scope = ThemeScope::default();
        let node = LinearProgressIndicator::determinate(0.5)
            .with_tokens(Arc::new(RedBar))
            .render(&scope, 10.0, LayoutDirection::Ltr);
        assert_eq!(node.indicator.paint, Paint::solid(Color::rgb(0xFF, 0, 0)));
        // Unchanged attributes come from the defaults
        assert_eq!(node.height, 2.0);
    }

    #[test]
    fn test_registry_tokens_used() {
        let scope = ThemeScope::default();
        scope
            .control_tokens()
            .update_tokens::<LinearProgressControl>(Arc::new(RedBar));
        let node =
            LinearProgressIndicator::determinate(0.5).render(&scope, 10.0, LayoutDirection::Ltr);
        assert_eq!(node.indicator.paint, Paint::solid(Color::rgb(0xFF, 0, 0)));
    }

    #[test]
    fn test_serializes_without_tokens() {
        let props = LinearProgressIndicator::determinate(0.5).with_tokens(Arc::new(RedBar));
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["mode"]["kind"], "determinate");
        assert!(json.get("tokens").is_none());
    }
}
