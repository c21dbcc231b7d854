//! Card color themes
//!
//! A theme is a closed set of fixed palettes; there is no runtime color
//! customization beyond picking one of the named themes.

use crate::error::{Error, Result};
use image::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named color theme for the card faces and QR code
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Black text on a white background
    #[default]
    Light,
    /// White text on a black background
    Dark,
    /// Bitcoin orange accents on a black background
    Bitcoin,
}

/// Fixed color set derived from a [`Theme`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary text color (email domain)
    pub text: Rgb<u8>,
    /// Accent color (QR modules, the `@` separator)
    pub accent: Rgb<u8>,
    /// Muted secondary color (email user part)
    pub muted: Rgb<u8>,
    /// Canvas and QR background color
    pub background: Rgb<u8>,
}

impl Theme {
    /// Return the fixed palette for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                text: Rgb([0, 0, 0]),
                accent: Rgb([0, 0, 0]),
                muted: Rgb([0, 0, 0]),
                background: Rgb([255, 255, 255]),
            },
            Theme::Dark => Palette {
                text: Rgb([255, 255, 255]),
                accent: Rgb([255, 255, 255]),
                muted: Rgb([255, 255, 255]),
                background: Rgb([0, 0, 0]),
            },
            Theme::Bitcoin => Palette {
                text: Rgb([255, 255, 255]),
                accent: Rgb([242, 169, 0]),
                muted: Rgb([78, 78, 78]),
                background: Rgb([0, 0, 0]),
            },
        }
    }

    /// Stable lowercase name of the theme.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Bitcoin => "bitcoin",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "bitcoin" => Ok(Theme::Bitcoin),
            other => Err(Error::Config(format!(
                "Unknown theme '{}', expected light, dark, or bitcoin",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_palette_is_monochrome() {
        let p = Theme::Light.palette();
        assert_eq!(p.text, Rgb([0, 0, 0]));
        assert_eq!(p.accent, Rgb([0, 0, 0]));
        assert_eq!(p.muted, Rgb([0, 0, 0]));
        assert_eq!(p.background, Rgb([255, 255, 255]));
    }

    #[test]
    fn dark_palette_inverts_light() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();
        assert_eq!(dark.text, light.background);
        assert_eq!(dark.background, light.text);
    }

    #[test]
    fn bitcoin_palette_has_distinct_accents() {
        let p = Theme::Bitcoin.palette();
        assert_eq!(p.text, Rgb([255, 255, 255]));
        assert_eq!(p.accent, Rgb([242, 169, 0]));
        assert_eq!(p.muted, Rgb([78, 78, 78]));
        assert_eq!(p.background, Rgb([0, 0, 0]));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Bitcoin".parse::<Theme>().unwrap(), Theme::Bitcoin);
        assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
    }

    #[test]
    fn unknown_theme_is_a_config_error() {
        let err = "solarized".parse::<Theme>().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
