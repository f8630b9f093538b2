//! Alias (semantic) tokens
//!
//! Alias tokens give global ramp entries a meaning ("background of the
//! page", "primary text") and carry both light and dark variants. Brand
//! colors are derived from a [`BrandRamp`], so re-branding an app is a
//! matter of swapping the ramp.

use crate::color::FluentColor;
use crate::global::{neutral_color, BrandColorTokens, BrandRamp, NeutralColorTokens};
use crate::typography::{self, FontInfo, TypographyTokens};
use serde::{Deserialize, Serialize};

// =============================================================================
// Token Enumerations
// =============================================================================

/// Neutral surface colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeutralBackgroundColorTokens {
    /// Page background
    Background1,
    /// Page background, pressed
    Background1Pressed,
    /// Page background, selected
    Background1Selected,
    /// Raised surface
    Background2,
    /// Raised surface, pressed
    Background2Pressed,
    /// Raised surface, selected
    Background2Selected,
    /// Cards and sheets
    Background3,
    /// Subtle fill
    Background4,
    /// Input fill
    Background5,
    /// Input fill, pressed
    Background5Pressed,
    /// Input fill, selected
    Background5Selected,
    /// Strong neutral fill
    Background6,
    /// Inverted surface
    BackgroundInverted,
    /// Disabled fill
    BackgroundDisabled,
}

/// Neutral text and icon colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeutralForegroundColorTokens {
    /// Primary text
    Foreground1,
    /// Secondary text
    Foreground2,
    /// Tertiary text and placeholder
    Foreground3,
    /// Disabled text
    ForegroundDisable1,
    /// Text drawn on a brand fill
    ForegroundOnColor,
    /// Text drawn on an inverted surface
    ForegroundInverted1,
}

/// Neutral outline colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeutralStrokeColorTokens {
    /// Default outline
    Stroke1,
    /// Subtle outline and dividers
    Stroke2,
    /// Outline meeting contrast requirements
    StrokeAccessible,
    /// Inner focus ring
    StrokeFocus1,
    /// Outer focus ring
    StrokeFocus2,
    /// Disabled outline
    StrokeDisabled,
}

/// Brand surface colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandBackgroundColorTokens {
    /// Primary brand fill
    BrandBackground1,
    /// Primary brand fill, pressed
    BrandBackground1Pressed,
    /// Primary brand fill, selected
    BrandBackground1Selected,
    /// Secondary brand fill
    BrandBackground2,
    /// Secondary brand fill, pressed
    BrandBackground2Pressed,
    /// Tertiary brand fill
    BrandBackground3,
    /// Tinted brand fill
    BrandBackgroundTint,
    /// Disabled brand fill
    BrandBackgroundDisabled,
}

/// Brand text and icon colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandForegroundColorTokens {
    /// Brand text
    BrandForeground1,
    /// Brand text, pressed
    BrandForeground1Pressed,
    /// Brand text on a tinted fill
    BrandForegroundTint,
    /// Disabled brand text
    BrandForegroundDisabled,
}

/// Brand outline colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandStrokeColorTokens {
    /// Brand outline
    BrandStroke1,
    /// Brand outline, pressed
    BrandStroke1Pressed,
}

// =============================================================================
// Alias Tokens
// =============================================================================

/// Semantic token tables for one brand
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AliasTokens {
    brand: BrandRamp,
}

fn neutral(light: NeutralColorTokens, dark: NeutralColorTokens) -> FluentColor {
    FluentColor::new(neutral_color(light), neutral_color(dark))
}

impl AliasTokens {
    /// Alias tokens for the default brand
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias tokens derived from a custom brand ramp
    pub fn with_brand(brand: BrandRamp) -> Self {
        Self { brand }
    }

    /// The brand ramp the brand tokens are derived from
    pub fn brand_ramp(&self) -> &BrandRamp {
        &self.brand
    }

    fn brand(&self, light: BrandColorTokens, dark: BrandColorTokens) -> FluentColor {
        FluentColor::new(self.brand.get(light), self.brand.get(dark))
    }

    /// Resolve a neutral background token
    pub fn neutral_background(&self, token: NeutralBackgroundColorTokens) -> FluentColor {
        use NeutralBackgroundColorTokens as T;
        use NeutralColorTokens as N;

        match token {
            T::Background1 => neutral(N::White, N::Black),
            T::Background1Pressed => neutral(N::Grey88, N::Grey18),
            T::Background1Selected => neutral(N::Grey92, N::Grey14),
            T::Background2 => neutral(N::White, N::Grey12),
            T::Background2Pressed => neutral(N::Grey88, N::Grey30),
            T::Background2Selected => neutral(N::Grey92, N::Grey26),
            T::Background3 => neutral(N::White, N::Grey16),
            T::Background4 => neutral(N::Grey98, N::Grey20),
            T::Background5 => neutral(N::Grey94, N::Grey24),
            T::Background5Pressed => neutral(N::Grey82, N::Grey36),
            T::Background5Selected => neutral(N::Grey88, N::Grey32),
            T::Background6 => neutral(N::Grey82, N::Grey36),
            T::BackgroundInverted => neutral(N::Grey46, N::Grey72),
            T::BackgroundDisabled => neutral(N::Grey88, N::Grey32),
        }
    }

    /// Resolve a neutral foreground token
    pub fn neutral_foreground(&self, token: NeutralForegroundColorTokens) -> FluentColor {
        use NeutralColorTokens as N;
        use NeutralForegroundColorTokens as T;

        match token {
            T::Foreground1 => neutral(N::Grey14, N::White),
            T::Foreground2 => neutral(N::Grey38, N::Grey84),
            T::Foreground3 => neutral(N::Grey50, N::Grey68),
            T::ForegroundDisable1 => neutral(N::Grey74, N::Grey36),
            T::ForegroundOnColor => neutral(N::White, N::Black),
            T::ForegroundInverted1 => neutral(N::White, N::Black),
        }
    }

    /// Resolve a neutral stroke token
    pub fn neutral_stroke(&self, token: NeutralStrokeColorTokens) -> FluentColor {
        use NeutralColorTokens as N;
        use NeutralStrokeColorTokens as T;

        match token {
            T::Stroke1 => neutral(N::Grey82, N::Grey30),
            T::Stroke2 => neutral(N::Grey88, N::Grey24),
            T::StrokeAccessible => neutral(N::Grey38, N::Grey62),
            T::StrokeFocus1 => neutral(N::White, N::Black),
            T::StrokeFocus2 => neutral(N::Black, N::White),
            T::StrokeDisabled => neutral(N::Grey88, N::Grey26),
        }
    }

    /// Resolve a brand background token
    pub fn brand_background(&self, token: BrandBackgroundColorTokens) -> FluentColor {
        use BrandBackgroundColorTokens as T;
        use BrandColorTokens as B;

        match token {
            T::BrandBackground1 => self.brand(B::Color80, B::Color100),
            T::BrandBackground1Pressed => self.brand(B::Color50, B::Color140),
            T::BrandBackground1Selected => self.brand(B::Color60, B::Color120),
            T::BrandBackground2 => self.brand(B::Color70, B::Color110),
            T::BrandBackground2Pressed => self.brand(B::Color40, B::Color150),
            T::BrandBackground3 => self.brand(B::Color60, B::Color120),
            T::BrandBackgroundTint => self.brand(B::Color150, B::Color40),
            T::BrandBackgroundDisabled => self.brand(B::Color140, B::Color40),
        }
    }

    /// Resolve a brand foreground token
    pub fn brand_foreground(&self, token: BrandForegroundColorTokens) -> FluentColor {
        use BrandColorTokens as B;
        use BrandForegroundColorTokens as T;

        match token {
            T::BrandForeground1 => self.brand(B::Color80, B::Color100),
            T::BrandForeground1Pressed => self.brand(B::Color50, B::Color140),
            T::BrandForegroundTint => self.brand(B::Color60, B::Color130),
            T::BrandForegroundDisabled => self.brand(B::Color90, B::Color60),
        }
    }

    /// Resolve a brand stroke token
    pub fn brand_stroke(&self, token: BrandStrokeColorTokens) -> FluentColor {
        use BrandColorTokens as B;
        use BrandStrokeColorTokens as T;

        match token {
            T::BrandStroke1 => self.brand(B::Color80, B::Color100),
            T::BrandStroke1Pressed => self.brand(B::Color50, B::Color140),
        }
    }

    /// Resolve a semantic text style
    pub fn typography(&self, token: TypographyTokens) -> FontInfo {
        typography::typography(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::theme::ThemeMode;

    #[test]
    fn test_background1_light_dark() {
        let alias = AliasTokens::new();
        let bg = alias.neutral_background(NeutralBackgroundColorTokens::Background1);
        assert_eq!(bg.value(ThemeMode::Light), Color::WHITE);
        assert_eq!(bg.value(ThemeMode::Dark), Color::BLACK);
    }

    #[test]
    fn test_foreground_contrast_flips() {
        let alias = AliasTokens::new();
        let fg = alias.neutral_foreground(NeutralForegroundColorTokens::Foreground1);
        assert_eq!(fg.value(ThemeMode::Light).to_hex(), "#242424");
        assert_eq!(fg.value(ThemeMode::Dark), Color::WHITE);
    }

    #[test]
    fn test_focus_strokes_are_inverse() {
        let alias = AliasTokens::new();
        let inner = alias.neutral_stroke(NeutralStrokeColorTokens::StrokeFocus1);
        let outer = alias.neutral_stroke(NeutralStrokeColorTokens::StrokeFocus2);
        assert_eq!(inner.light, outer.dark);
        assert_eq!(inner.dark, outer.light);
    }

    #[test]
    fn test_brand_tokens_follow_ramp() {
        let alias = AliasTokens::new();
        let bg = alias.brand_background(BrandBackgroundColorTokens::BrandBackground1);
        assert_eq!(bg.value(ThemeMode::Light).to_hex(), "#0F6CBD");
        assert_eq!(bg.value(ThemeMode::Dark).to_hex(), "#479EF5");
    }

    #[test]
    fn test_custom_brand() {
        let purple = Color::from_rgb_u32(0x9D4EDD);
        let ramp = BrandRamp::default().with(BrandColorTokens::Color80, purple);
        let alias = AliasTokens::with_brand(ramp);

        let bg = alias.brand_background(BrandBackgroundColorTokens::BrandBackground1);
        assert_eq!(bg.value(ThemeMode::Light), purple);
        let stroke = alias.brand_stroke(BrandStrokeColorTokens::BrandStroke1);
        assert_eq!(stroke.value(ThemeMode::Light), purple);
        // Neutral tokens are brand independent
        assert_eq!(
            alias.neutral_background(NeutralBackgroundColorTokens::Background5),
            AliasTokens::new().neutral_background(NeutralBackgroundColorTokens::Background5)
        );
    }

    #[test]
    fn test_typography_delegates() {
        let alias = AliasTokens::new();
        assert_eq!(
            alias.typography(TypographyTokens::Body1),
            typography::typography(TypographyTokens::Body1)
        );
    }
}
