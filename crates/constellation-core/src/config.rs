//! Visual configuration for the particle formation.
//!
//! The site used to carry one hand-tuned copy of the visualization per page.
//! They differ only in counts, colors and thresholds, so each copy is now a
//! [`Preset`] over a single [`VisualConfig`]. JS callers can override any
//! field with a JSON object; missing fields keep the preset value.

use crate::constants::*;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB color parsed from `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba(...)` string with the given alpha, clamped to [0, 1].
    pub fn css(&self, alpha: f32) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| Error::InvalidColor(s.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Palette slot a point is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Ink,
    Accent,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualConfig {
    pub point_count: usize,
    pub connect_distance: f32,
    pub accent_ratio: f32,
    pub point_radius: f32,
    pub entrance_spread: f32,
    pub entrance_secs: f32,
    pub focal_length: f32,
    pub sphere_fraction: f32,
    pub pointer_smoothing: f32,
    pub max_tilt: f32,
    pub auto_rotate: f32,
    pub shadow: bool,
    pub ink: Rgb,
    pub accent: Rgb,
    pub edge: Rgb,
    /// Fixed seed for the entrance/tone draw; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            connect_distance: DEFAULT_CONNECT_DISTANCE,
            accent_ratio: DEFAULT_ACCENT_RATIO,
            point_radius: 2.6,
            entrance_spread: DEFAULT_ENTRANCE_SPREAD,
            entrance_secs: DEFAULT_ENTRANCE_SECS,
            focal_length: DEFAULT_FOCAL_LENGTH,
            sphere_fraction: SPHERE_VIEWPORT_FRACTION,
            pointer_smoothing: DEFAULT_POINTER_SMOOTHING,
            max_tilt: DEFAULT_MAX_TILT,
            auto_rotate: DEFAULT_AUTO_ROTATE,
            shadow: true,
            ink: Rgb::new(0x1a, 0x1a, 0x1a),
            accent: Rgb::new(0xc5, 0xa0, 0x59),
            edge: Rgb::new(0x1a, 0x1a, 0x1a),
            seed: None,
        }
    }
}

impl VisualConfig {
    pub fn color(&self, tone: Tone) -> Rgb {
        match tone {
            Tone::Ink => self.ink,
            Tone::Accent => self.accent,
        }
    }

    /// Apply a JSON object of overrides on top of `self`.
    pub fn with_overrides(&self, json: &str) -> Result<Self> {
        let mut merged = serde_json::to_value(self)?;
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        if let (Some(base), Some(patch)) = (merged.as_object_mut(), overrides.as_object()) {
            for (k, v) in patch {
                base.insert(k.clone(), v.clone());
            }
        }
        Ok(serde_json::from_value(merged)?)
    }
}

/// The formations used across the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Landing-page hero.
    Hero,
    /// About ("Architect") page portrait background.
    Architect,
    /// Black-and-white blog variant with a red accent.
    Brutalist,
}

impl Preset {
    pub fn config(self) -> VisualConfig {
        let base = VisualConfig::default();
        match self {
            Preset::Hero => base,
            Preset::Architect => VisualConfig {
                point_count: 80,
                connect_distance: 0.45,
                accent_ratio: 0.2,
                point_radius: 2.2,
                auto_rotate: 0.08,
                ..base
            },
            Preset::Brutalist => VisualConfig {
                point_count: 48,
                connect_distance: 0.62,
                accent_ratio: 0.3,
                point_radius: 3.0,
                shadow: false,
                ink: Rgb::new(0x00, 0x00, 0x00),
                accent: Rgb::new(0xd9, 0x2b, 0x2b),
                edge: Rgb::new(0x00, 0x00, 0x00),
                ..base
            },
        }
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hero" | "" => Ok(Preset::Hero),
            "architect" | "about" => Ok(Preset::Architect),
            "brutalist" | "blog" => Ok(Preset::Brutalist),
            _ => Err(Error::UnknownPreset(s.to_string())),
        }
    }
}
