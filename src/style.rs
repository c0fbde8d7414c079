use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// An opaque RGB fill or text color.
///
/// Parses from the `#RRGGBB` and `#RGB` notations and always renders
/// back as uppercase `#RRGGBB`, so a round trip through a config file
/// normalizes the spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, DeserializeFromStr, SerializeDisplay)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or_else(|| {
            Error::new(
                ErrorKind::ColorParse,
                &format!("Color '{}' is missing a leading '#'", s),
            )
        })?;

        match hex.len() {
            6 => {
                let value = u32::from_str_radix(hex, 16).map_err(|_| {
                    Error::new(ErrorKind::ColorParse, &format!("Color '{}' is not hex", s))
                })?;
                Ok(Color::new(
                    (value >> 16) as u8,
                    (value >> 8) as u8,
                    value as u8,
                ))
            }
            3 => {
                let value = u16::from_str_radix(hex, 16).map_err(|_| {
                    Error::new(ErrorKind::ColorParse, &format!("Color '{}' is not hex", s))
                })?;
                // each shorthand digit doubles: #F00 == #FF0000
                let (r, g, b) = (
                    ((value >> 8) & 0xF) as u8,
                    ((value >> 4) & 0xF) as u8,
                    (value & 0xF) as u8,
                );
                Ok(Color::new(r * 0x11, g * 0x11, b * 0x11))
            }
            _ => Err(Error::new(
                ErrorKind::ColorParse,
                &format!("Color '{}' is neither '#RRGGBB' nor '#RGB'", s),
            )),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, DeserializeFromStr, SerializeDisplay)]
pub enum Decoration {
    #[default]
    None,
    Underline,
}

impl FromStr for Decoration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Decoration::None),
            "underline" => Ok(Decoration::Underline),
            _ => Err(Error::new(
                ErrorKind::StyleParse,
                &format!("Decoration '{}' not recognized", s),
            )),
        }
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoration::None => write!(f, "none"),
            Decoration::Underline => write!(f, "underline"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, DeserializeFromStr, SerializeDisplay)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FromStr for FontStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(FontStyle::Normal),
            "italic" => Ok(FontStyle::Italic),
            _ => Err(Error::new(
                ErrorKind::StyleParse,
                &format!("Font style '{}' not recognized", s),
            )),
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontStyle::Normal => write!(f, "normal"),
            FontStyle::Italic => write!(f, "italic"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, DeserializeFromStr, SerializeDisplay)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FromStr for FontWeight {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(FontWeight::Normal),
            "bold" => Ok(FontWeight::Bold),
            _ => Err(Error::new(
                ErrorKind::StyleParse,
                &format!("Font weight '{}' not recognized", s),
            )),
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Normal => write!(f, "normal"),
            FontWeight::Bold => write!(f, "bold"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_hex_color() {
        let color = "#E9E9E9".parse::<Color>().expect("'#E9E9E9' is valid");
        assert_eq!(color, Color::new(0xE9, 0xE9, 0xE9));
        assert_eq!(color.to_string(), "#E9E9E9");
    }

    #[test]
    fn shorthand_hex_color() {
        let color = "#f00".parse::<Color>().expect("'#f00' is valid");
        assert_eq!(color, Color::new(0xFF, 0x00, 0x00));
        assert_eq!(color.to_string(), "#FF0000");
    }

    #[test]
    fn malformed_colors_rejected() {
        assert!("E9E9E9".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn style_enums_parse_host_strings() {
        assert_eq!("underline".parse::<Decoration>().unwrap(), Decoration::Underline);
        assert_eq!("italic".parse::<FontStyle>().unwrap(), FontStyle::Italic);
        assert_eq!("bold".parse::<FontWeight>().unwrap(), FontWeight::Bold);
        assert!("wavy".parse::<Decoration>().is_err());
        assert!("oblique".parse::<FontStyle>().is_err());
        assert!("600".parse::<FontWeight>().is_err());
    }
}
