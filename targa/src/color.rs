use std::str::FromStr;

use crate::Error;

/// 32-bit color. Field order matches the on-disk BGRA byte order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            blue,
            green,
            red,
            alpha,
        }
    }

    pub const fn from_bgra(bytes: [u8; 4]) -> Self {
        let [blue, green, red, alpha] = bytes;
        Self {
            blue,
            green,
            red,
            alpha,
        }
    }

    pub const fn to_bgra(self) -> [u8; 4] {
        [self.blue, self.green, self.red, self.alpha]
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parses `RRGGBB` or `RRGGBBAA`, optionally prefixed with `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| Error::InvalidColor(s.to_string()))
        };
        let alpha = if hex.len() == 8 { channel(3)? } else { 255 };
        Ok(Color::new(channel(0)?, channel(1)?, channel(2)?, alpha))
    }
}
