//! RGBA colors and CSS color parsing
//!
//! Bone and highlight colors arrive as CSS color strings from configuration
//! (`#E1E9EE`, `rgba(0, 0, 0, 0.1)`, `white`). They are parsed once into
//! [`Color`] and serialized back to hex notation.

use std::fmt;
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while_m_n},
    character::complete::{char, multispace0},
    combinator::{all_consuming, map_res, opt},
    number::complete::float,
    sequence::{delimited, preceded, terminated},
    IResult,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::ColorError;

/// RGBA color, components in 0.0..=1.0
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 0.5, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);
    pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Components quantized to 8 bits
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Hex notation, `#rrggbb` when opaque and `#rrggbbaa` otherwise
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    /// Linear interpolation between two colors
    ///
    /// `t` is clamped to 0..=1. The endpoints are exact: `t == 0` returns `a`
    /// and `t == 1` returns `b` bit for bit.
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;
        Color {
            r: a.r * s + b.r * t,
            g: a.g * s + b.g * t,
            b: a.b * s + b.b * t,
            a: a.a * s + b.a * t,
        }
    }

    /// Parse a CSS color: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`
    /// or a basic named color
    pub fn parse(input: &str) -> Result<Color, ColorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorError::Empty);
        }

        if let Ok((_, color)) = all_consuming(alt((hex_color, rgba_color, rgb_color)))(input) {
            return Ok(color);
        }

        named_color(input).ok_or_else(|| {
            debug!(value = input, "Failed to parse color");
            ColorError::Invalid(input.to_string())
        })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::parse(&text).map_err(de::Error::custom)
    }
}

// ============================================================================
// Parsers
// ============================================================================

fn hex_pair(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |s| {
        u8::from_str_radix(s, 16)
    })(input)
}

fn hex_single(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 1, |c: char| c.is_ascii_hexdigit()), |s| {
        u8::from_str_radix(s, 16).map(|v| v * 17)
    })(input)
}

/// RRGGBB with an optional AA suffix
fn hex_long(input: &str) -> IResult<&str, (u8, u8, u8, Option<u8>)> {
    let (input, r) = hex_pair(input)?;
    let (input, g) = hex_pair(input)?;
    let (input, b) = hex_pair(input)?;
    let (input, a) = opt(hex_pair)(input)?;
    Ok((input, (r, g, b, a)))
}

/// #RRGGBBAA, #RRGGBB, #RGBA or #RGB
fn hex_color(input: &str) -> IResult<&str, Color> {
    let (input, _) = char('#')(input)?;

    if let Ok((rest, (r, g, b, a))) = all_consuming(hex_long)(input) {
        return Ok((rest, Color::from_rgba8(r, g, b, a.unwrap_or(255))));
    }

    let (input, r) = hex_single(input)?;
    let (input, g) = hex_single(input)?;
    let (input, b) = hex_single(input)?;
    let (input, a) = opt(hex_single)(input)?;
    Ok((input, Color::from_rgba8(r, g, b, a.unwrap_or(255))))
}

fn component(input: &str) -> IResult<&str, f32> {
    delimited(multispace0, float, multispace0)(input)
}

fn comma_component(input: &str) -> IResult<&str, f32> {
    preceded(char(','), component)(input)
}

/// Channels above 1.0 are read as 0-255 values
fn normalize_channels(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    if r > 1.0 || g > 1.0 || b > 1.0 {
        (r / 255.0, g / 255.0, b / 255.0)
    } else {
        (r, g, b)
    }
}

/// rgba(r, g, b, a)
fn rgba_color(input: &str) -> IResult<&str, Color> {
    let (input, _) = terminated(tag_no_case("rgba"), multispace0)(input)?;
    let (input, _) = char('(')(input)?;
    let (input, r) = component(input)?;
    let (input, g) = comma_component(input)?;
    let (input, b) = comma_component(input)?;
    let (input, a) = comma_component(input)?;
    let (input, _) = char(')')(input)?;

    let (r, g, b) = normalize_channels(r, g, b);
    Ok((input, Color::rgba(r, g, b, a.clamp(0.0, 1.0))))
}

/// rgb(r, g, b)
fn rgb_color(input: &str) -> IResult<&str, Color> {
    let (input, _) = terminated(tag_no_case("rgb"), multispace0)(input)?;
    let (input, _) = char('(')(input)?;
    let (input, r) = component(input)?;
    let (input, g) = comma_component(input)?;
    let (input, b) = comma_component(input)?;
    let (input, _) = char(')')(input)?;

    let (r, g, b) = normalize_channels(r, g, b);
    Ok((input, Color::rgb(r, g, b)))
}

fn named_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(Color::BLACK),
        "white" => Some(Color::WHITE),
        "red" => Some(Color::RED),
        "green" => Some(Color::GREEN),
        "blue" => Some(Color::BLUE),
        "yellow" => Some(Color::YELLOW),
        "cyan" | "aqua" => Some(Color::CYAN),
        "magenta" | "fuchsia" => Some(Color::MAGENTA),
        "gray" | "grey" => Some(Color::GRAY),
        "lightgray" | "lightgrey" => Some(Color::from_hex(0xD3D3D3)),
        "silver" => Some(Color::from_hex(0xC0C0C0)),
        "orange" => Some(Color::ORANGE),
        "purple" => Some(Color::PURPLE),
        "transparent" => Some(Color::TRANSPARENT),
        _ => None,
    }
}
