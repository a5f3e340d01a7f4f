use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rng::XorShift32;

/// Colors whose channel sum falls below this are lifted when brightening.
pub const MIN_CHANNEL_SUM: u16 = 180;

/// An 8-bit RGB color, serialized as `rgb(R, G, B)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draw a color from three consecutive values: red from bits 0..8 of the
    /// first, green from bits 8..16 of the second, blue from bits 16..24 of the third.
    pub fn draw(rng: &mut XorShift32, brighten: bool) -> Self {
        let r = (rng.next_u32() & 0xFF) as u8;
        let g = ((rng.next_u32() >> 8) & 0xFF) as u8;
        let b = ((rng.next_u32() >> 16) & 0xFF) as u8;
        let color = Self { r, g, b };
        if brighten {
            color.brightened()
        } else {
            color
        }
    }

    pub fn channel_sum(&self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }

    /// Lift dark colors so they read against any background.
    ///
    /// Each channel gains `(180 - sum) / 3 + 1`, saturating at 255.
    pub fn brightened(self) -> Self {
        let sum = self.channel_sum();
        if sum >= MIN_CHANNEL_SUM {
            return self;
        }
        let bump = ((MIN_CHANNEL_SUM - sum) / 3 + 1) as u8;
        Self {
            r: self.r.saturating_add(bump),
            g: self.g.saturating_add(bump),
            b: self.b.saturating_add(bump),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
