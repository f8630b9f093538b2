//! Circular progress indicator

use crate::clamp_progress;
use fluent_core::color::Color;
use fluent_core::control_tokens::circular_progress::{
    CircularProgressIndicator as CircularProgressControl, CircularProgressIndicatorInfo,
    CircularProgressIndicatorSize, CircularProgressIndicatorTokens,
};
use fluent_core::global::Dp;
use fluent_core::scope::ThemeScope;
use fluent_core::theme::FluentStyle;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Arc length of an indeterminate spinner, in degrees
pub const INDETERMINATE_SWEEP: f32 = 90.0;

/// Angle of 12 o'clock, where determinate arcs start
pub const TOP_ANGLE: f32 = -90.0;

/// Circular progress indicator properties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircularProgressIndicator {
    /// Fraction done; `None` spins indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f32>,
    /// Start angle of an indeterminate arc for the current frame, in degrees
    #[serde(default)]
    pub rotation: f32,
    /// Diameter
    #[serde(default)]
    pub size: CircularProgressIndicatorSize,
    /// Color family
    #[serde(default)]
    pub style: FluentStyle,
    /// Token override; the registry's tokens are used when absent
    #[serde(skip)]
    pub tokens: Option<Arc<dyn CircularProgressIndicatorTokens>>,
}

impl CircularProgressIndicator {
    /// Spinner showing `progress`
    pub fn determinate(progress: f32) -> Self {
        Self {
            progress: Some(progress),
            ..Self::indeterminate()
        }
    }

    /// Spinner without known progress
    pub fn indeterminate() -> Self {
        Self {
            progress: None,
            rotation: 0.0,
            size: CircularProgressIndicatorSize::default(),
            style: FluentStyle::default(),
            tokens: None,
        }
    }

    /// Set the animated start angle of an indeterminate arc
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Set diameter
    pub fn with_size(mut self, size: CircularProgressIndicatorSize) -> Self {
        self.size = size;
        self
    }

    /// Set color family
    pub fn with_style(mut self, style: FluentStyle) -> Self {
        self.style = style;
        self
    }

    /// Use these tokens instead of the registry's
    pub fn with_tokens(mut self, tokens: Arc<dyn CircularProgressIndicatorTokens>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Resolve the spinner in `scope`
    pub fn render(&self, scope: &ThemeScope<'_>) -> CircularProgressNode {
        let tokens = self
            .tokens
            .clone()
            .unwrap_or_else(|| scope.control_tokens().tokens::<CircularProgressControl>());
        let info = CircularProgressIndicatorInfo::new(self.size, self.style);

        scope.provide::<CircularProgressControl, _>(tokens, info, |scope| {
            let tokens = scope.tokens::<CircularProgressControl>();
            let info = scope.info::<CircularProgressControl>();
            let theme = scope.theme();

            let progress = self.progress.map(clamp_progress);
            let (start_angle, sweep_angle) = match progress {
                Some(progress) => (TOP_ANGLE, 360.0 * progress),
                None => (start_angle(self.rotation), INDETERMINATE_SWEEP),
            };

            CircularProgressNode {
                diameter: tokens.size(&info, theme),
                stroke_width: tokens.stroke_width(&info, theme),
                color: tokens.color(&info, theme),
                start_angle,
                sweep_angle,
                progress,
            }
        })
    }
}

/// A resolved spinner: one arc inside a square of `diameter`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularProgressNode {
    /// Outer diameter
    pub diameter: Dp,
    /// Arc thickness
    pub stroke_width: Dp,
    /// Arc color
    pub color: Color,
    /// Where the arc starts, in degrees clockwise from 3 o'clock
    pub start_angle: f32,
    /// Arc length in degrees
    pub sweep_angle: f32,
    /// Clamped progress; `None` for indeterminate spinners
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f32>,
}

impl CircularProgressNode {
    /// Radius of the arc's center line
    pub fn arc_radius(&self) -> Dp {
        (self.diameter - self.stroke_width) / 2.0
    }
}

/// Wrap an animated rotation into `[0, 360)`; non-finite input starts at 0
fn start_angle(rotation: f32) -> f32 {
    if rotation.is_finite() {
        rotation.rem_euclid(360.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_core::theme::{FluentTheme, ThemeMode};

    #[test]
    fn test_determinate_sweep() {
        let scope = ThemeScope::default();
        let node = CircularProgressIndicator::determinate(0.25).render(&scope);
        assert_eq!(node.start_angle, TOP_ANGLE);
        assert_eq!(node.sweep_angle, 90.0);
        assert_eq!(node.progress, Some(0.25));
    }

    #[test]
    fn test_progress_is_clamped() {
        let scope = ThemeScope::default();
        let under = CircularProgressIndicator::determinate(-0.5).render(&scope);
        assert_eq!(under.sweep_angle, 0.0);
        assert_eq!(under.progress, Some(0.0));

        let over = CircularProgressIndicator::determinate(1.7).render(&scope);
        assert_eq!(over.sweep_angle, 360.0);
        assert_eq!(over.progress, Some(1.0));
    }

    #[test]
    fn test_indeterminate_arc() {
        let scope = ThemeScope::default();
        let node = CircularProgressIndicator::indeterminate()
            .with_rotation(450.0)
            .render(&scope);
        assert_eq!(node.sweep_angle, INDETERMINATE_SWEEP);
        assert_eq!(node.start_angle, 90.0);
        assert_eq!(node.progress, None);
    }

    #[test]
    fn test_non_finite_rotation_starts_at_zero() {
        let scope = ThemeScope::default();
        for rotation in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            let node = CircularProgressIndicator::indeterminate()
                .with_rotation(rotation)
                .render(&scope);
            assert_eq!(node.start_angle, 0.0);
        }
        let node = CircularProgressIndicator::indeterminate()
            .with_rotation(-90.0)
            .render(&scope);
        assert_eq!(node.start_angle, 270.0);
    }

    #[test]
    fn test_size_from_tokens() {
        let scope = ThemeScope::default();
        let node = CircularProgressIndicator::indeterminate()
            .with_size(CircularProgressIndicatorSize::Medium)
            .render(&scope);
        assert_eq!(node.diameter, 32.0);
        assert_eq!(node.stroke_width, 3.0);
        assert_eq!(node.arc_radius(), 14.5);
    }

    #[test]
    fn test_style_and_mode() {
        let scope = ThemeScope::default();
        let dark = scope.with_theme_mode(ThemeMode::Dark);
        let brand = CircularProgressIndicator::indeterminate().with_style(FluentStyle::Brand);

        let light_node = brand.render(&scope);
        let dark_node = brand.render(&dark);
        assert_eq!(light_node.color.to_hex(), "#0F6CBD");
        assert_ne!(light_node.color, dark_node.color);
    }

    #[derive(Debug)]
    struct Huge;

    impl CircularProgressIndicatorTokens for Huge {
        fn size(&self, _info: &CircularProgressIndicatorInfo, _theme: &FluentTheme) -> Dp {
            96.0
        }
    }

    #[test]
    fn test_token_override() {
        let scope = ThemeScope::default();
        let node = CircularProgressIndicator::indeterminate()
            .with_tokens(Arc::new(Huge))
            .render(&scope);
        assert_eq!(node.diameter, 96.0);
        assert_eq!(node.stroke_width, 1.0);
    }
}
