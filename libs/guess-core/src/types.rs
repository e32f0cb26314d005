//! Core types and matching settings.

use crate::error::{Result, SettingsError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Normalization level applied before comparing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationLevel {
    Light,
    Strict,
}

impl Default for NormalizationLevel {
    fn default() -> Self {
        Self::Strict
    }
}

impl NormalizationLevel {
    /// Get the level name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Strict => "strict",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

/// Unit that distances and lengths are counted in.
///
/// `Utf16` reproduces the behaviour of the web client the answers were
/// calibrated against: a character outside the Basic Multilingual Plane
/// (most emoji, some CJK) counts as two units. `Char` counts Unicode scalar
/// values instead, so such a character costs one edit and adds one to the
/// length used by the tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharUnit {
    Utf16,
    Char,
}

impl Default for CharUnit {
    fn default() -> Self {
        Self::Utf16
    }
}

impl CharUnit {
    /// Get the unit name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf16 => "utf16",
            Self::Char => "char",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "utf16" => Some(Self::Utf16),
            "char" => Some(Self::Char),
            _ => None,
        }
    }

    /// Length of `text` in this unit.
    pub fn len(self, text: &str) -> usize {
        match self {
            Self::Utf16 => text.encode_utf16().count(),
            Self::Char => text.chars().count(),
        }
    }

    /// Split `text` into units, widened to `u32` so both units compare alike.
    pub fn units(self, text: &str) -> Vec<u32> {
        match self {
            Self::Utf16 => text.encode_utf16().map(u32::from).collect(),
            Self::Char => text.chars().map(u32::from).collect(),
        }
    }
}

/// Global matching settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub normalization: NormalizationLevel,
    pub unit: CharUnit,
    /// Added on top of the length-derived tolerance.
    pub extra_tolerance: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            normalization: NormalizationLevel::default(),
            unit: CharUnit::default(),
            extra_tolerance: 0,
        }
    }
}

impl MatchSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Merge global settings with optional per-question overrides.
    pub fn merge(global: &MatchSettings, overrides: Option<&QuestionOverrides>) -> Self {
        match overrides {
            Some(o) => Self {
                normalization: o.normalization.unwrap_or(global.normalization),
                unit: o.unit.unwrap_or(global.unit),
                extra_tolerance: o.extra_tolerance.unwrap_or(global.extra_tolerance),
            },
            None => *global,
        }
    }
}

/// Per-question settings (all fields optional for overrides).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalization: Option<NormalizationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<CharUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_tolerance: Option<usize>,
}
