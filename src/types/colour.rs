//! Named colour entries.

use std::fmt;

/// A named colour with its hex string.
///
/// A `Colour` is an immutable value: two colours are equal when both the
/// name and the hex string match exactly (case-sensitive). The hex string
/// is stored verbatim; whether it looks like a real colour is a concern of
/// the surface that accepts it, not of the value itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    name: String,
    hex: String,
}

impl Colour {
    /// Create a new colour from a name and a hex string.
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }

    /// The colour's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The hex string, exactly as given at construction.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Parse the hex string into RGB components.
    ///
    /// Accepts `#RRGGBB` and shorthand `#RGB`, with the `#` optional.
    /// Returns `None` for anything else. Used for terminal previews and
    /// linting; a colour with an unparseable hex is still a valid value.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let s = self.hex.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = parse_hex_digit(hex.chars().next()?)?;
                let g = parse_hex_digit(hex.chars().nth(1)?)?;
                let b = parse_hex_digit(hex.chars().nth(2)?)?;
                Some((r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Some((r, g, b))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.hex)
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}
