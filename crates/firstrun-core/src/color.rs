#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color {0:?}: expected #RRGGBB or #RRGGBBAA")]
pub struct ParseColorError(pub String);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }

    /// Strict parse of `#RRGGBB` / `#RRGGBBAA` (leading `#` optional).
    pub fn parse_hex(hex: &str) -> Result<Self, ParseColorError> {
        let s = hex.trim().trim_start_matches('#');
        let err = || ParseColorError(hex.to_string());
        if !s.is_ascii() || !(s.len() == 6 || s.len() == 8) {
            return Err(err());
        }
        let byte = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| err());
        let a = if s.len() == 8 { byte(6)? } else { 255 };
        Ok(Color(byte(0)?, byte(2)?, byte(4)?, a))
    }

    pub fn to_hex(self) -> String {
        if self.3 == 255 {
            format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.0, self.1, self.2, self.3)
        }
    }

    /// Per-channel `(1 - t) * self + t * other`, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| ((1.0 - t) * a as f32 + t * b as f32).round() as u8;
        Color(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
            mix(self.3, other.3),
        )
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Color::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_hex())
    }
}
