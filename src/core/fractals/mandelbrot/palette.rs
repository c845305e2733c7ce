use std::fmt;
use std::str::FromStr;

use crate::core::fractals::mandelbrot::errors::InvalidPaletteError;

/// `base + (t * rate) % span`; a zero rate gives a constant channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub base: f32,
    pub rate: f32,
    pub span: f32,
}

impl Band {
    pub const fn fixed(value: f32) -> Self {
        Self {
            base: value,
            rate: 0.0,
            span: 1.0,
        }
    }

    pub const fn cycling(base: f32, rate: f32, span: f32) -> Self {
        Self { base, rate, span }
    }

    #[must_use]
    pub fn at(&self, t: f32) -> f32 {
        self.base + (t * self.rate) % self.span
    }
}

/// Hue, saturation and brightness as functions of the normalized escape index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteCurve {
    pub hue_offset: f32,
    pub hue_rate: f32,
    pub saturation: Band,
    pub brightness: Band,
}

impl PaletteCurve {
    /// Returns `(hue, saturation, brightness)`, hue wrapped into `[0, 1)`.
    #[must_use]
    pub fn hsb(&self, t: f32) -> (f32, f32, f32) {
        let hue = (self.hue_offset + self.hue_rate * t).rem_euclid(1.0);
        // rem_euclid rounds up to exactly 1.0 for tiny negative inputs.
        let hue = if hue < 1.0 { hue } else { 0.0 };

        (hue, self.saturation.at(t), self.brightness.at(t))
    }
}

const SUNRISE: PaletteCurve = PaletteCurve {
    hue_offset: 0.95,
    hue_rate: 10.0,
    saturation: Band::fixed(0.6),
    brightness: Band::fixed(1.0),
};

// Vibrant and fast-cycling.
const SOL: PaletteCurve = PaletteCurve {
    hue_offset: 0.1,
    hue_rate: 25.0,
    saturation: Band::cycling(0.8, 5.0, 0.2),
    brightness: Band::fixed(1.0),
};

const DARK: PaletteCurve = PaletteCurve {
    hue_offset: 0.6,
    hue_rate: 3.0,
    saturation: Band::fixed(0.9),
    brightness: Band::cycling(0.2, 4.0, 0.5),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteVariant {
    Sunrise,
    #[default]
    Sol,
    Dark,
}

impl PaletteVariant {
    pub const ALL: &'static [Self] = &[Self::Sol, Self::Sunrise, Self::Dark];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sol => "sol",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn curve(self) -> &'static PaletteCurve {
        match self {
            Self::Sunrise => &SUNRISE,
            Self::Sol => &SOL,
            Self::Dark => &DARK,
        }
    }
}

impl FromStr for PaletteVariant {
    type Err = InvalidPaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| InvalidPaletteError(s.to_owned()))
    }
}

impl fmt::Display for PaletteVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
