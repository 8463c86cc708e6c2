//! RGB triples and hex conversions

/// Color input failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidColor {
    #[error("{channel} channel out of range 0-255: {value}")]
    OutOfRange { channel: &'static str, value: i64 },
    #[error("{channel} channel is not an integer: {value}")]
    NotAnInteger { channel: &'static str, value: String },
    #[error("invalid hex color: {0:?} (expected \"#rrggbb\")")]
    BadHex(String),
    #[error("expected 3 channel values, got {0}")]
    WrongChannelCount(usize),
}

const CHANNELS: [&str; 3] = ["red", "green", "blue"];

/// An RGB triple with all channels in 0-255
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Validate wide integer channels into an `Rgb`
    pub fn from_channels(r: i64, g: i64, b: i64) -> Result<Self, InvalidColor> {
        for (value, channel) in [r, g, b].into_iter().zip(CHANNELS) {
            if !(0..=255).contains(&value) {
                return Err(InvalidColor::OutOfRange { channel, value });
            }
        }
        Ok(Self::new(r as u8, g as u8, b as u8))
    }

    /// Parse channel tokens as given on the command line.
    /// Rejects non-integer tokens such as "1.5".
    pub fn from_tokens(tokens: [&str; 3]) -> Result<Self, InvalidColor> {
        let mut values = [0i64; 3];
        for (value, (token, channel)) in values.iter_mut().zip(tokens.iter().zip(CHANNELS)) {
            *value = token
                .trim()
                .parse()
                .map_err(|_| InvalidColor::NotAnInteger {
                    channel,
                    value: token.to_string(),
                })?;
        }
        Self::from_channels(values[0], values[1], values[2])
    }

    /// Parse a hex color. The leading '#' is optional and digits are
    /// case-insensitive; only the 6-digit form is accepted.
    pub fn from_hex(input: &str) -> Result<Self, InvalidColor> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidColor::BadHex(input.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| InvalidColor::BadHex(input.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Canonical lowercase "#rrggbb" encoding
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
