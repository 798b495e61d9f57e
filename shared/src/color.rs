use std::fmt::Formatter;

////////////////////////////////////
// largely inspired by https://github.com/serenity-rs/serenity/blob/current/src/model/colour.rs
////////////////////////////////////

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Color(pub u32);

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("#{:06X}", self.0))
    }
}

impl From<Color> for u32 {
    fn from(val: Color) -> Self {
        val.0
    }
}

pub mod embeds {
    use super::Color;

    pub const ERROR: Color = Color(0xE74C3C);
    pub const SUCCESS: Color = Color(0x2ECC71);
    pub const INFO: Color = Color(0x3498DB);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_string() {
        assert_eq!(Color(15658734).to_string(), "#EEEEEE");
        assert_eq!(embeds::ERROR.to_string(), "#E74C3C");
    }

    #[test]
    fn test_into_u32() {
        assert_eq!(u32::from(embeds::SUCCESS), 0x2ECC71);
    }
}
