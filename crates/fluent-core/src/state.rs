//! State-dependent token values
//!
//! Control tokens often resolve to a set of values, one per interaction
//! state. [`StateValue`] stores that set and picks the right entry for the
//! current `(enabled, selected, interaction)` triple. Only `rest` is
//! mandatory; any missing entry falls back towards `rest`, which keeps
//! resolution total.

use crate::color::Color;
use crate::global::Dp;
use serde::{Deserialize, Serialize};

// =============================================================================
// Interaction State
// =============================================================================

/// Pointer and focus state of a control for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct InteractionState {
    /// A press is in progress
    pub pressed: bool,
    /// The control holds keyboard focus
    pub focused: bool,
    /// A pointer hovers the control
    pub hovered: bool,
}

impl InteractionState {
    /// No interaction
    pub const IDLE: InteractionState = InteractionState {
        pressed: false,
        focused: false,
        hovered: false,
    };

    /// Only pressed
    pub const fn pressed() -> Self {
        Self { pressed: true, focused: false, hovered: false }
    }

    /// Only focused
    pub const fn focused() -> Self {
        Self { pressed: false, focused: true, hovered: false }
    }

    /// Only hovered
    pub const fn hovered() -> Self {
        Self { pressed: false, focused: false, hovered: true }
    }

    /// Every combination of the three flags
    pub fn all() -> impl Iterator<Item = InteractionState> {
        (0u8..8).map(|bits| InteractionState {
            pressed: bits & 1 != 0,
            focused: bits & 2 != 0,
            hovered: bits & 4 != 0,
        })
    }
}

// =============================================================================
// State Value
// =============================================================================

/// A value that varies with enabled / selected / interaction state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateValue<T> {
    /// Idle value, also the final fallback
    pub rest: T,
    /// Unselected and pressed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed: Option<T>,
    /// Selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<T>,
    /// Unselected and focused
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused: Option<T>,
    /// Unselected and hovered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hovered: Option<T>,
    /// Selected and pressed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_pressed: Option<T>,
    /// Selected and focused
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_focused: Option<T>,
    /// Selected and hovered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_hovered: Option<T>,
    /// Disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<T>,
    /// Selected and disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_disabled: Option<T>,
}

/// Per-state colors
pub type StateColor = StateValue<Color>;

/// Per-state border stacks (innermost stroke first)
pub type StateBorderStroke = StateValue<Vec<BorderStroke>>;

/// Per-state shadow elevation
pub type StateElevation = StateValue<Dp>;

impl<T> StateValue<T> {
    /// Value that never changes with state
    pub fn new(rest: T) -> Self {
        Self {
            rest,
            pressed: None,
            selected: None,
            focused: None,
            hovered: None,
            selected_pressed: None,
            selected_focused: None,
            selected_hovered: None,
            disabled: None,
            selected_disabled: None,
        }
    }

    /// Set the pressed value
    pub fn with_pressed(mut self, value: T) -> Self {
        self.pressed = Some(value);
        self
    }

    /// Set the selected value
    pub fn with_selected(mut self, value: T) -> Self {
        self.selected = Some(value);
        self
    }

    /// Set the focused value
    pub fn with_focused(mut self, value: T) -> Self {
        self.focused = Some(value);
        self
    }

    /// Set the hovered value
    pub fn with_hovered(mut self, value: T) -> Self {
        self.hovered = Some(value);
        self
    }

    /// Set the selected-and-pressed value
    pub fn with_selected_pressed(mut self, value: T) -> Self {
        self.selected_pressed = Some(value);
        self
    }

    /// Set the selected-and-focused value
    pub fn with_selected_focused(mut self, value: T) -> Self {
        self.selected_focused = Some(value);
        self
    }

    /// Set the selected-and-hovered value
    pub fn with_selected_hovered(mut self, value: T) -> Self {
        self.selected_hovered = Some(value);
        self
    }

    /// Set the disabled value
    pub fn with_disabled(mut self, value: T) -> Self {
        self.disabled = Some(value);
        self
    }

    /// Set the selected-and-disabled value
    pub fn with_selected_disabled(mut self, value: T) -> Self {
        self.selected_disabled = Some(value);
        self
    }

    /// Pick the value for the given state
    ///
    /// Disabled wins over selection, selection over interaction, and within
    /// interaction pressed > focused > hovered.
    pub fn by_state(&self, enabled: bool, selected: bool, interaction: InteractionState) -> &T {
        let picked = if !enabled {
            if selected {
                self.selected_disabled.as_ref().or(self.disabled.as_ref())
            } else {
                self.disabled.as_ref()
            }
        } else if selected {
            let specific = if interaction.pressed {
                self.selected_pressed.as_ref()
            } else if interaction.focused {
                self.selected_focused.as_ref()
            } else if interaction.hovered {
                self.selected_hovered.as_ref()
            } else {
                None
            };
            specific.or(self.selected.as_ref())
        } else if interaction.pressed {
            self.pressed.as_ref()
        } else if interaction.focused {
            self.focused.as_ref()
        } else if interaction.hovered {
            self.hovered.as_ref()
        } else {
            None
        };

        picked.unwrap_or(&self.rest)
    }
}

// =============================================================================
// Borders
// =============================================================================

/// One border stroke as declared by a token
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderStroke {
    /// Stroke width
    pub width: Dp,
    /// Stroke color
    pub color: Color,
}

impl BorderStroke {
    /// Create a stroke
    pub const fn new(width: Dp, color: Color) -> Self {
        Self { width, color }
    }
}

/// A border ready to draw: stroke `index` of a stack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderLayer {
    /// Width of this stroke alone
    pub stroke_width: Dp,
    /// Width the border is drawn at: the running sum up to and including this stroke
    pub width: Dp,
    /// Stroke color
    pub color: Color,
}

/// Lay a border stack out as nested borders
///
/// Each layer is drawn with the cumulative width of all strokes so far, so
/// later strokes sit outside earlier ones instead of overlapping them.
pub fn stack_borders(strokes: &[BorderStroke]) -> Vec<BorderLayer> {
    let mut width = 0.0;
    strokes
        .iter()
        .map(|stroke| {
            width += stroke.width;
            BorderLayer {
                stroke_width: stroke.width,
                width,
                color: stroke.color,
            }
        })
        .collect()
}

/// Total inset taken by a laid out border stack
pub fn border_inset(layers: &[BorderLayer]) -> Dp {
    layers.last().map(|layer| layer.width).unwrap_or(0.0)
}

// =============================================================================
// Padding
// =============================================================================

/// Padding on each edge, in layout direction terms
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PaddingValues {
    /// Leading edge
    pub start: Dp,
    /// Top edge
    pub top: Dp,
    /// Trailing edge
    pub end: Dp,
    /// Bottom edge
    pub bottom: Dp,
}

impl PaddingValues {
    /// Individual padding per edge
    pub const fn new(start: Dp, top: Dp, end: Dp, bottom: Dp) -> Self {
        Self { start, top, end, bottom }
    }

    /// Same padding on every edge
    pub const fn all(value: Dp) -> Self {
        Self::new(value, value, value, value)
    }

    /// Horizontal and vertical padding
    pub const fn symmetric(horizontal: Dp, vertical: Dp) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Padding on the trailing edge only
    pub const fn end(value: Dp) -> Self {
        Self::new(0.0, 0.0, value, 0.0)
    }

    /// Sum of leading and trailing padding
    pub fn horizontal(&self) -> Dp {
        self.start + self.end
    }

    /// Sum of top and bottom padding
    pub fn vertical(&self) -> Dp {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StateValue<u32> {
        StateValue::new(0)
            .with_pressed(1)
            .with_selected(2)
            .with_focused(3)
            .with_hovered(4)
            .with_selected_pressed(5)
            .with_disabled(6)
    }

    #[test]
    fn test_rest() {
        assert_eq!(*sample().by_state(true, false, InteractionState::IDLE), 0);
    }

    #[test]
    fn test_interaction_priority() {
        let value = sample();
        let all = InteractionState { pressed: true, focused: true, hovered: true };
        assert_eq!(*value.by_state(true, false, all), 1);
        let focus_hover = InteractionState { pressed: false, focused: true, hovered: true };
        assert_eq!(*value.by_state(true, false, focus_hover), 3);
        assert_eq!(*value.by_state(true, false, InteractionState::hovered()), 4);
    }

    #[test]
    fn test_selected_fallbacks() {
        let value = sample();
        assert_eq!(*value.by_state(true, true, InteractionState::pressed()), 5);
        // No selected_focused entry: falls back to selected
        assert_eq!(*value.by_state(true, true, InteractionState::focused()), 2);
        assert_eq!(*value.by_state(true, true, InteractionState::IDLE), 2);
    }

    #[test]
    fn test_disabled_wins() {
        let value = sample();
        for interaction in InteractionState::all() {
            assert_eq!(*value.by_state(false, false, interaction), 6);
            // No selected_disabled entry: falls back to disabled
            assert_eq!(*value.by_state(false, true, interaction), 6);
        }
    }

    #[test]
    fn test_rest_only_is_total() {
        let value = StateValue::new("rest");
        for interaction in InteractionState::all() {
            for enabled in [true, false] {
                for selected in [true, false] {
                    assert_eq!(*value.by_state(enabled, selected, interaction), "rest");
                }
            }
        }
    }

    #[test]
    fn test_interaction_all_is_complete() {
        let all: Vec<_> = InteractionState::all().collect();
        assert_eq!(all.len(), 8);
        assert!(all.contains(&InteractionState::IDLE));
        assert!(all.contains(&InteractionState { pressed: true, focused: true, hovered: true }));
    }

    #[test]
    fn test_stack_borders_accumulates() {
        let strokes = [
            BorderStroke::new(1.0, Color::WHITE),
            BorderStroke::new(2.0, Color::BLACK),
            BorderStroke::new(0.5, Color::WHITE),
        ];
        let layers = stack_borders(&strokes);

        assert_eq!(layers.len(), 3);
        assert_eq!(layers[0].width, 1.0);
        assert_eq!(layers[1].width, 3.0);
        assert_eq!(layers[2].width, 3.5);
        assert_eq!(layers[1].stroke_width, 2.0);
        assert_eq!(layers[1].color, Color::BLACK);
        assert_eq!(border_inset(&layers), 3.5);
    }

    #[test]
    fn test_stack_borders_empty() {
        let layers = stack_borders(&[]);
        assert!(layers.is_empty());
        assert_eq!(border_inset(&layers), 0.0);
    }

    #[test]
    fn test_padding_helpers() {
        let p = PaddingValues::symmetric(16.0, 8.0);
        assert_eq!(p.horizontal(), 32.0);
        assert_eq!(p.vertical(), 16.0);
        assert_eq!(PaddingValues::all(4.0).start, 4.0);
        assert_eq!(PaddingValues::end(16.0), PaddingValues::new(0.0, 0.0, 16.0, 0.0));
    }

    #[test]
    fn test_state_value_serialization() {
        let value: StateColor = StateValue::new(Color::WHITE).with_pressed(Color::BLACK);
        let json = serde_json::to_string(&value).unwrap();
        assert!(json.contains("\"pressed\""));
        assert!(!json.contains("\"hovered\""));
        let back: StateColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
