//! Progress indicator renderers
//!
//! Renderers resolve their token set through a [`ThemeScope`] and describe
//! what to draw as plain, serializable nodes. Animations are not run here:
//! the host animates the inputs (progress, head/tail fractions, rotation)
//! and renders again.
//!
//! # Modules
//!
//! - [`linear`] - determinate and indeterminate progress bars
//! - [`circular`] - determinate and indeterminate spinners
//!
//! # Example
//!
//! ```rust
//! use fluent_core::scope::ThemeScope;
//! use fluent_progress::linear::LinearProgressIndicator;
//! use fluent_progress::LayoutDirection;
//!
//! let scope = ThemeScope::default();
//! let node =
//!     LinearProgressIndicator::determinate(0.25).render(&scope, 200.0, LayoutDirection::Ltr);
//! assert_eq!(node.indicator.end.x, 50.0);
//! ```
//!
//! [`ThemeScope`]: fluent_core::scope::ThemeScope

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod circular;
pub mod linear;

use fluent_core::color::Color;
use fluent_core::global::Dp;
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Reading direction of the surrounding layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    /// Left to right
    #[default]
    Ltr,
    /// Right to left
    Rtl,
}

impl LayoutDirection {
    /// Check if this is left to right
    pub fn is_ltr(self) -> bool {
        self == LayoutDirection::Ltr
    }
}

/// A point in the indicator's own coordinate space, in dp
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the left edge
    pub x: Dp,
    /// Vertical offset from the top edge
    pub y: Dp,
}

impl Point {
    /// Create a point
    pub const fn new(x: Dp, y: Dp) -> Self {
        Self { x, y }
    }
}

/// How a stroke is filled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Paint {
    /// One color
    Solid {
        /// Fill color
        color: Color,
    },
    /// Gradient along the line from `start` to `end`
    LinearGradient {
        /// `(offset in 0..=1, color)` stops, in order
        stops: Vec<(f32, Color)>,
        /// Gradient origin
        start: Point,
        /// Gradient end
        end: Point,
    },
}

impl Paint {
    /// Solid paint
    pub fn solid(color: Color) -> Self {
        Paint::Solid { color }
    }
}

/// Clamp a progress value into `0.0..=1.0`
///
/// NaN counts as no progress.
pub fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}
