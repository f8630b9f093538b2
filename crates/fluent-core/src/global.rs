//! Global design tokens
//!
//! Process-wide constant scales. Every function here is a total `match`
//! over its token enum, so adding a token without a value fails to compile.

use crate::color::Color;
use crate::typography::{FontSize, FontWeight};
use serde::{Deserialize, Serialize};

/// Density-independent pixels
pub type Dp = f32;

// =============================================================================
// Size Tokens
// =============================================================================

/// General purpose dimension scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeTokens {
    /// 0dp
    Size0,
    /// 2dp
    Size20,
    /// 4dp
    Size40,
    /// 6dp
    Size60,
    /// 8dp
    Size80,
    /// 10dp
    Size100,
    /// 12dp
    Size120,
    /// 16dp
    Size160,
    /// 20dp
    Size200,
    /// 24dp
    Size240,
    /// 28dp
    Size280,
    /// 32dp
    Size320,
    /// 36dp
    Size360,
    /// 40dp
    Size400,
    /// 48dp
    Size480,
    /// 52dp
    Size520,
    /// 56dp
    Size560,
}

/// Resolve a size token
pub fn size(token: SizeTokens) -> Dp {
    match token {
        SizeTokens::Size0 => 0.0,
        SizeTokens::Size20 => 2.0,
        SizeTokens::Size40 => 4.0,
        SizeTokens::Size60 => 6.0,
        SizeTokens::Size80 => 8.0,
        SizeTokens::Size100 => 10.0,
        SizeTokens::Size120 => 12.0,
        SizeTokens::Size160 => 16.0,
        SizeTokens::Size200 => 20.0,
        SizeTokens::Size240 => 24.0,
        SizeTokens::Size280 => 28.0,
        SizeTokens::Size320 => 32.0,
        SizeTokens::Size360 => 36.0,
        SizeTokens::Size400 => 40.0,
        SizeTokens::Size480 => 48.0,
        SizeTokens::Size520 => 52.0,
        SizeTokens::Size560 => 56.0,
    }
}

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpacingTokens {
    /// 0dp
    None,
    /// 2dp
    XXXSmall,
    /// 4dp
    XXSmall,
    /// 8dp
    XSmall,
    /// 12dp
    Small,
    /// 16dp
    Medium,
    /// 20dp
    Large,
    /// 24dp
    XLarge,
    /// 36dp
    XXLarge,
    /// 48dp
    XXXLarge,
    /// 72dp
    XXXXLarge,
}

/// Resolve a spacing token
pub fn spacing(token: SpacingTokens) -> Dp {
    match token {
        SpacingTokens::None => 0.0,
        SpacingTokens::XXXSmall => 2.0,
        SpacingTokens::XXSmall => 4.0,
        SpacingTokens::XSmall => 8.0,
        SpacingTokens::Small => 12.0,
        SpacingTokens::Medium => 16.0,
        SpacingTokens::Large => 20.0,
        SpacingTokens::XLarge => 24.0,
        SpacingTokens::XXLarge => 36.0,
        SpacingTokens::XXXLarge => 48.0,
        SpacingTokens::XXXXLarge => 72.0,
    }
}

// =============================================================================
// Font Tokens
// =============================================================================

/// Font size ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontSizeTokens {
    /// 12 / 16
    Size100,
    /// 13 / 16
    Size200,
    /// 15 / 20
    Size300,
    /// 18 / 24
    Size400,
    /// 20 / 25
    Size500,
    /// 24 / 32
    Size600,
    /// 28 / 36
    Size700,
    /// 34 / 41
    Size800,
    /// 60 / 72
    Size900,
}

/// Resolve a font size token to its size and line height
pub fn font_size(token: FontSizeTokens) -> FontSize {
    match token {
        FontSizeTokens::Size100 => FontSize::new(12.0, 16.0),
        FontSizeTokens::Size200 => FontSize::new(13.0, 16.0),
        FontSizeTokens::Size300 => FontSize::new(15.0, 20.0),
        FontSizeTokens::Size400 => FontSize::new(18.0, 24.0),
        FontSizeTokens::Size500 => FontSize::new(20.0, 25.0),
        FontSizeTokens::Size600 => FontSize::new(24.0, 32.0),
        FontSizeTokens::Size700 => FontSize::new(28.0, 36.0),
        FontSizeTokens::Size800 => FontSize::new(34.0, 41.0),
        FontSizeTokens::Size900 => FontSize::new(60.0, 72.0),
    }
}

/// Font weight ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeightTokens {
    /// 400
    Regular,
    /// 500
    Medium,
    /// 600
    SemiBold,
    /// 700
    Bold,
}

/// Resolve a font weight token
pub fn font_weight(token: FontWeightTokens) -> FontWeight {
    match token {
        FontWeightTokens::Regular => FontWeight(400),
        FontWeightTokens::Medium => FontWeight(500),
        FontWeightTokens::SemiBold => FontWeight(600),
        FontWeightTokens::Bold => FontWeight(700),
    }
}

// =============================================================================
// Icon Size Tokens
// =============================================================================

/// Icon glyph variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconType {
    /// Outline glyph
    #[default]
    Regular,
    /// Solid glyph
    Filled,
}

/// Icon dimension paired with the glyph variant to draw at that size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IconSize {
    /// Edge length of the icon box
    pub size: Dp,
    /// Glyph variant
    pub icon_type: IconType,
}

impl IconSize {
    /// Regular icon of the given size
    pub const fn new(size: Dp) -> Self {
        Self { size, icon_type: IconType::Regular }
    }
}

/// Icon size scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconSizeTokens {
    /// 12dp
    XXSmall,
    /// 16dp
    XSmall,
    /// 20dp
    Small,
    /// 24dp
    Medium,
    /// 28dp
    Large,
    /// 36dp
    XLarge,
    /// 40dp
    XXLarge,
    /// 48dp
    XXXLarge,
}

/// Resolve an icon size token
pub fn icon_size(token: IconSizeTokens) -> IconSize {
    match token {
        IconSizeTokens::XXSmall => IconSize::new(12.0),
        IconSizeTokens::XSmall => IconSize::new(16.0),
        IconSizeTokens::Small => IconSize::new(20.0),
        IconSizeTokens::Medium => IconSize::new(24.0),
        IconSizeTokens::Large => IconSize::new(28.0),
        IconSizeTokens::XLarge => IconSize::new(36.0),
        IconSizeTokens::XXLarge => IconSize::new(40.0),
        IconSizeTokens::XXXLarge => IconSize::new(48.0),
    }
}

// =============================================================================
// Corner Radius, Stroke Width, Elevation
// =============================================================================

/// Corner radius scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CornerRadiusTokens {
    /// Square corners
    None,
    /// 4dp
    Medium,
    /// 8dp
    Large,
    /// 12dp
    XLarge,
    /// Fully rounded
    Circle,
}

/// Resolve a corner radius token
pub fn corner_radius(token: CornerRadiusTokens) -> Dp {
    match token {
        CornerRadiusTokens::None => 0.0,
        CornerRadiusTokens::Medium => 4.0,
        CornerRadiusTokens::Large => 8.0,
        CornerRadiusTokens::XLarge => 12.0,
        CornerRadiusTokens::Circle => 9999.0,
    }
}

/// Stroke width scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrokeWidthTokens {
    /// No stroke
    None,
    /// 0.5dp hairline
    Width05,
    /// 1dp
    Width10,
    /// 1.5dp
    Width15,
    /// 2dp
    Width20,
    /// 4dp
    Width40,
}

/// Resolve a stroke width token
pub fn stroke_width(token: StrokeWidthTokens) -> Dp {
    match token {
        StrokeWidthTokens::None => 0.0,
        StrokeWidthTokens::Width05 => 0.5,
        StrokeWidthTokens::Width10 => 1.0,
        StrokeWidthTokens::Width15 => 1.5,
        StrokeWidthTokens::Width20 => 2.0,
        StrokeWidthTokens::Width40 => 4.0,
    }
}

/// Shadow elevation scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElevationTokens {
    /// Flat
    Elevation00,
    /// 2dp
    Elevation02,
    /// 4dp
    Elevation04,
    /// 8dp
    Elevation08,
    /// 16dp
    Elevation16,
    /// 28dp
    Elevation28,
    /// 64dp
    Elevation64,
}

/// Resolve an elevation token
pub fn elevation(token: ElevationTokens) -> Dp {
    match token {
        ElevationTokens::Elevation00 => 0.0,
        ElevationTokens::Elevation02 => 2.0,
        ElevationTokens::Elevation04 => 4.0,
        ElevationTokens::Elevation08 => 8.0,
        ElevationTokens::Elevation16 => 16.0,
        ElevationTokens::Elevation28 => 28.0,
        ElevationTokens::Elevation64 => 64.0,
    }
}

// =============================================================================
// Neutral Color Ramp
// =============================================================================

/// Grey levels used by the neutral alias tokens (the number is lightness %)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeutralColorTokens {
    /// Pure black
    Black,
    /// #1F1F1F
    Grey12,
    /// #242424
    Grey14,
    /// #292929
    Grey16,
    /// #2E2E2E
    Grey18,
    /// #333333
    Grey20,
    /// #3D3D3D
    Grey24,
    /// #424242
    Grey26,
    /// #4D4D4D
    Grey30,
    /// #525252
    Grey32,
    /// #5C5C5C
    Grey36,
    /// #616161
    Grey38,
    /// #757575
    Grey46,
    /// #808080
    Grey50,
    /// #9E9E9E
    Grey62,
    /// #ADADAD
    Grey68,
    /// #B8B8B8
    Grey72,
    /// #BDBDBD
    Grey74,
    /// #D1D1D1
    Grey82,
    /// #D6D6D6
    Grey84,
    /// #E0E0E0
    Grey88,
    /// #EBEBEB
    Grey92,
    /// #F0F0F0
    Grey94,
    /// #FAFAFA
    Grey98,
    /// Pure white
    White,
}

/// Resolve a neutral ramp entry
pub fn neutral_color(token: NeutralColorTokens) -> Color {
    match token {
        NeutralColorTokens::Black => Color::BLACK,
        NeutralColorTokens::Grey12 => Color::from_rgb_u32(0x1F1F1F),
        NeutralColorTokens::Grey14 => Color::from_rgb_u32(0x242424),
        NeutralColorTokens::Grey16 => Color::from_rgb_u32(0x292929),
        NeutralColorTokens::Grey18 => Color::from_rgb_u32(0x2E2E2E),
        NeutralColorTokens::Grey20 => Color::from_rgb_u32(0x333333),
        NeutralColorTokens::Grey24 => Color::from_rgb_u32(0x3D3D3D),
        NeutralColorTokens::Grey26 => Color::from_rgb_u32(0x424242),
        NeutralColorTokens::Grey30 => Color::from_rgb_u32(0x4D4D4D),
        NeutralColorTokens::Grey32 => Color::from_rgb_u32(0x525252),
        NeutralColorTokens::Grey36 => Color::from_rgb_u32(0x5C5C5C),
        NeutralColorTokens::Grey38 => Color::from_rgb_u32(0x616161),
        NeutralColorTokens::Grey46 => Color::from_rgb_u32(0x757575),
        NeutralColorTokens::Grey50 => Color::from_rgb_u32(0x808080),
        NeutralColorTokens::Grey62 => Color::from_rgb_u32(0x9E9E9E),
        NeutralColorTokens::Grey68 => Color::from_rgb_u32(0xADADAD),
        NeutralColorTokens::Grey72 => Color::from_rgb_u32(0xB8B8B8),
        NeutralColorTokens::Grey74 => Color::from_rgb_u32(0xBDBDBD),
        NeutralColorTokens::Grey82 => Color::from_rgb_u32(0xD1D1D1),
        NeutralColorTokens::Grey84 => Color::from_rgb_u32(0xD6D6D6),
        NeutralColorTokens::Grey88 => Color::from_rgb_u32(0xE0E0E0),
        NeutralColorTokens::Grey92 => Color::from_rgb_u32(0xEBEBEB),
        NeutralColorTokens::Grey94 => Color::from_rgb_u32(0xF0F0F0),
        NeutralColorTokens::Grey98 => Color::from_rgb_u32(0xFAFAFA),
        NeutralColorTokens::White => Color::WHITE,
    }
}

// =============================================================================
// Brand Color Ramp
// =============================================================================

/// The sixteen stops of a brand ramp, darkest (10) to lightest (160)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandColorTokens {
    /// Stop 10
    Color10,
    /// Stop 20
    Color20,
    /// Stop 30
    Color30,
    /// Stop 40
    Color40,
    /// Stop 50
    Color50,
    /// Stop 60
    Color60,
    /// Stop 70
    Color70,
    /// Stop 80 (the primary brand color)
    Color80,
    /// Stop 90
    Color90,
    /// Stop 100
    Color100,
    /// Stop 110
    Color110,
    /// Stop 120
    Color120,
    /// Stop 130
    Color130,
    /// Stop 140
    Color140,
    /// Stop 150
    Color150,
    /// Stop 160
    Color160,
}

impl BrandColorTokens {
    /// Every stop in ramp order
    pub const ALL: [BrandColorTokens; 16] = [
        BrandColorTokens::Color10,
        BrandColorTokens::Color20,
        BrandColorTokens::Color30,
        BrandColorTokens::Color40,
        BrandColorTokens::Color50,
        BrandColorTokens::Color60,
        BrandColorTokens::Color70,
        BrandColorTokens::Color80,
        BrandColorTokens::Color90,
        BrandColorTokens::Color100,
        BrandColorTokens::Color110,
        BrandColorTokens::Color120,
        BrandColorTokens::Color130,
        BrandColorTokens::Color140,
        BrandColorTokens::Color150,
        BrandColorTokens::Color160,
    ];

    /// Numeric stop (10, 20, ..., 160)
    pub fn shade(self) -> u16 {
        match self {
            BrandColorTokens::Color10 => 10,
            BrandColorTokens::Color20 => 20,
            BrandColorTokens::Color30 => 30,
            BrandColorTokens::Color40 => 40,
            BrandColorTokens::Color50 => 50,
            BrandColorTokens::Color60 => 60,
            BrandColorTokens::Color70 => 70,
            BrandColorTokens::Color80 => 80,
            BrandColorTokens::Color90 => 90,
            BrandColorTokens::Color100 => 100,
            BrandColorTokens::Color110 => 110,
            BrandColorTokens::Color120 => 120,
            BrandColorTokens::Color130 => 130,
            BrandColorTokens::Color140 => 140,
            BrandColorTokens::Color150 => 150,
            BrandColorTokens::Color160 => 160,
        }
    }

    /// Look a stop up by its number
    pub fn from_shade(shade: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.shade() == shade)
    }

    fn index(self) -> usize {
        usize::from(self.shade() / 10 - 1)
    }
}

/// A complete brand ramp; the alias tokens derive every brand color from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrandRamp {
    stops: [Color; 16],
}

impl BrandRamp {
    /// Build a ramp from its sixteen stops, darkest first
    pub const fn new(stops: [Color; 16]) -> Self {
        Self { stops }
    }

    /// Color at `token`
    pub fn get(&self, token: BrandColorTokens) -> Color {
        self.stops[token.index()]
    }

    /// Copy with one stop replaced
    pub fn with(mut self, token: BrandColorTokens, color: Color) -> Self {
        self.stops[token.index()] = color;
        self
    }

    /// The communication blue ramp
    pub const fn communication_blue() -> Self {
        Self::new([
            Color::from_rgb_u32(0x061724),
            Color::from_rgb_u32(0x082338),
            Color::from_rgb_u32(0x0A2E4A),
            Color::from_rgb_u32(0x0C3B5E),
            Color::from_rgb_u32(0x0E4775),
            Color::from_rgb_u32(0x0F548C),
            Color::from_rgb_u32(0x115EA3),
            Color::from_rgb_u32(0x0F6CBD),
            Color::from_rgb_u32(0x2886DE),
            Color::from_rgb_u32(0x479EF5),
            Color::from_rgb_u32(0x62ABF5),
            Color::from_rgb_u32(0x77B7F7),
            Color::from_rgb_u32(0x96C6FA),
            Color::from_rgb_u32(0xB4D6FA),
            Color::from_rgb_u32(0xCFE4FA),
            Color::from_rgb_u32(0xEBF3FC),
        ])
    }
}

impl Default for BrandRamp {
    fn default() -> Self {
        Self::communication_blue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_scale_is_monotonic() {
        let tokens = [
            SizeTokens::Size0,
            SizeTokens::Size20,
            SizeTokens::Size40,
            SizeTokens::Size60,
            SizeTokens::Size80,
            SizeTokens::Size100,
            SizeTokens::Size120,
            SizeTokens::Size160,
            SizeTokens::Size200,
            SizeTokens::Size240,
            SizeTokens::Size280,
            SizeTokens::Size320,
            SizeTokens::Size360,
            SizeTokens::Size400,
            SizeTokens::Size480,
            SizeTokens::Size520,
            SizeTokens::Size560,
        ];
        for pair in tokens.windows(2) {
            assert!(size(pair[0]) < size(pair[1]), "{:?} !< {:?}", pair[0], pair[1]);
        }
        assert_eq!(size(SizeTokens::Size80), 8.0);
        assert_eq!(size(SizeTokens::Size560), 56.0);
    }

    #[test]
    fn test_spacing_values() {
        assert_eq!(spacing(SpacingTokens::None), 0.0);
        assert_eq!(spacing(SpacingTokens::XXXSmall), 2.0);
        assert_eq!(spacing(SpacingTokens::XXSmall), 4.0);
        assert_eq!(spacing(SpacingTokens::XSmall), 8.0);
        assert_eq!(spacing(SpacingTokens::Medium), 16.0);
        assert_eq!(spacing(SpacingTokens::XXXXLarge), 72.0);
    }

    #[test]
    fn test_font_sizes() {
        let body = font_size(FontSizeTokens::Size300);
        assert_eq!(body.size, 15.0);
        assert_eq!(body.line_height, 20.0);
        assert!(font_size(FontSizeTokens::Size100).size < font_size(FontSizeTokens::Size900).size);
    }

    #[test]
    fn test_font_weights() {
        assert_eq!(font_weight(FontWeightTokens::Regular).0, 400);
        assert!(font_weight(FontWeightTokens::Bold) > font_weight(FontWeightTokens::SemiBold));
    }

    #[test]
    fn test_icon_sizes() {
        assert_eq!(icon_size(IconSizeTokens::Small).size, 20.0);
        assert_eq!(icon_size(IconSizeTokens::XXXLarge).size, 48.0);
        assert_eq!(icon_size(IconSizeTokens::Medium).icon_type, IconType::Regular);
    }

    #[test]
    fn test_neutral_ramp() {
        assert_eq!(neutral_color(NeutralColorTokens::Grey14).to_hex(), "#242424");
        assert_eq!(neutral_color(NeutralColorTokens::Grey88).to_hex(), "#E0E0E0");
        assert_eq!(neutral_color(NeutralColorTokens::White), Color::WHITE);
    }

    #[test]
    fn test_brand_ramp() {
        let ramp = BrandRamp::default();
        assert_eq!(ramp.get(BrandColorTokens::Color80).to_hex(), "#0F6CBD");
        assert_eq!(ramp.get(BrandColorTokens::Color10).to_hex(), "#061724");
        assert_eq!(ramp.get(BrandColorTokens::Color160).to_hex(), "#EBF3FC");

        let custom = ramp.with(BrandColorTokens::Color80, Color::rgb(1, 2, 3));
        assert_eq!(custom.get(BrandColorTokens::Color80), Color::rgb(1, 2, 3));
        assert_eq!(custom.get(BrandColorTokens::Color70), ramp.get(BrandColorTokens::Color70));
    }

    #[test]
    fn test_brand_shades() {
        for token in BrandColorTokens::ALL {
            assert_eq!(BrandColorTokens::from_shade(token.shade()), Some(token));
        }
        assert_eq!(BrandColorTokens::from_shade(85), None);
        assert_eq!(BrandColorTokens::from_shade(0), None);
    }
}
