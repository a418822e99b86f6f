//! The packed TFlags byte of a SAUCE trailer.
//!
//! ```text
//! bit  7 6 5 4 3 2 1 0
//!      . . . A A L L B
//! ```
//!
//! - **B** (bit 0): ICE colors. Blink is reinterpreted as bright background.
//! - **LL** (bits 1-2): letter spacing, see [`LetterSpacing`].
//! - **AA** (bits 3-4): aspect ratio, see [`AspectRatio`].
//!
//! "ICE colors" and "non-blink mode" are the same bit; there is no separate
//! blink flag.

const FLAG_ICE_COLORS: u8 = 0b0000_0001;
const MASK_LETTER_SPACING: u8 = 0b0000_0110;
const SHIFT_LETTER_SPACING: u8 = 1;
const MASK_ASPECT_RATIO: u8 = 0b0001_1000;
const SHIFT_ASPECT_RATIO: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Letter spacing mode, stored in bits 1-2 of TFlags.
pub enum LetterSpacing {
    /// Legacy / undefined spacing (value 0)
    #[default]
    Legacy,
    /// 8-pixel character width (value 1)
    EightPixel,
    /// 9-pixel character width (value 2)
    NinePixel,
    /// Reserved value (value 3) - not standardized
    Reserved,
}

impl LetterSpacing {
    /// Decode the two-bit field value; only the low two bits are looked at.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => LetterSpacing::Legacy,
            1 => LetterSpacing::EightPixel,
            2 => LetterSpacing::NinePixel,
            _ => LetterSpacing::Reserved,
        }
    }

    pub fn to_bits(self) -> u8 {
        match self {
            LetterSpacing::Legacy => 0,
            LetterSpacing::EightPixel => 1,
            LetterSpacing::NinePixel => 2,
            LetterSpacing::Reserved => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Pixel aspect ratio, stored in bits 3-4 of TFlags.
///
/// Legacy hardware had rectangular pixels; modern displays use square ones.
pub enum AspectRatio {
    /// Legacy (undefined) aspect ratio (value 0)
    #[default]
    Legacy,
    /// Legacy device ratio requiring vertical stretch (value 1)
    LegacyDevice,
    /// Square pixels, modern aspect ratio (value 2)
    Square,
    /// Reserved value (value 3) - not standardized
    Reserved,
}

impl AspectRatio {
    /// Decode the two-bit field value; only the low two bits are looked at.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => AspectRatio::Legacy,
            1 => AspectRatio::LegacyDevice,
            2 => AspectRatio::Square,
            _ => AspectRatio::Reserved,
        }
    }

    pub fn to_bits(self) -> u8 {
        match self {
            AspectRatio::Legacy => 0,
            AspectRatio::LegacyDevice => 1,
            AspectRatio::Square => 2,
            AspectRatio::Reserved => 3,
        }
    }
}

/// The raw TFlags byte with typed accessors for its three sub-fields.
///
/// Unknown high bits are kept so that a decoded byte is written back
/// unchanged.
///
/// ```
/// use ansi_sauce::{AspectRatio, LetterSpacing, SauceFlags};
///
/// let flags = SauceFlags::new(false, LetterSpacing::NinePixel, AspectRatio::Square);
/// assert_eq!(flags.bits(), 20);
/// assert!(!flags.ice_colors());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SauceFlags(u8);

impl SauceFlags {
    pub fn new(ice_colors: bool, letter_spacing: LetterSpacing, aspect_ratio: AspectRatio) -> Self {
        SauceFlags(0)
            .with_ice_colors(ice_colors)
            .with_letter_spacing(letter_spacing)
            .with_aspect_ratio(aspect_ratio)
    }

    pub fn from_bits(bits: u8) -> Self {
        SauceFlags(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn ice_colors(self) -> bool {
        self.0 & FLAG_ICE_COLORS != 0
    }

    pub fn letter_spacing(self) -> LetterSpacing {
        LetterSpacing::from_bits((self.0 & MASK_LETTER_SPACING) >> SHIFT_LETTER_SPACING)
    }

    pub fn aspect_ratio(self) -> AspectRatio {
        AspectRatio::from_bits((self.0 & MASK_ASPECT_RATIO) >> SHIFT_ASPECT_RATIO)
    }

    #[must_use]
    pub fn with_ice_colors(self, ice_colors: bool) -> Self {
        if ice_colors {
            SauceFlags(self.0 | FLAG_ICE_COLORS)
        } else {
            SauceFlags(self.0 & !FLAG_ICE_COLORS)
        }
    }

    #[must_use]
    pub fn with_letter_spacing(self, letter_spacing: LetterSpacing) -> Self {
        let bits = letter_spacing.to_bits() << SHIFT_LETTER_SPACING;
        SauceFlags((self.0 & !MASK_LETTER_SPACING) | bits)
    }

    #[must_use]
    pub fn with_aspect_ratio(self, aspect_ratio: AspectRatio) -> Self {
        let bits = aspect_ratio.to_bits() << SHIFT_ASPECT_RATIO;
        SauceFlags((self.0 & !MASK_ASPECT_RATIO) | bits)
    }
}

impl From<u8> for SauceFlags {
    fn from(bits: u8) -> Self {
        SauceFlags(bits)
    }
}

impl From<SauceFlags> for u8 {
    fn from(flags: SauceFlags) -> u8 {
        flags.0
    }
}
