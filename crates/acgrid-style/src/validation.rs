#![forbid(unsafe_code)]

//! Presence validation for themes arriving from outside the type system.
//!
//! A [`Theme`] is complete by construction. Theme documents parsed from
//! configuration files or user input may not be, so they are first read
//! into a [`RawTheme`] whose groups are all optional, validated, and only
//! then converted.

use std::fmt;

use crate::error::ThemeError;
use crate::theme::{
    Theme, ThemeBorders, ThemeColors, ThemeMeta, ThemeShadows, ThemeSpacing, ThemeTypography,
};

/// A required theme field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeField {
    Name,
    Colors,
    Spacing,
    Typography,
    Borders,
    Shadows,
}

impl ThemeField {
    pub const ALL: [ThemeField; 6] = [
        ThemeField::Name,
        ThemeField::Colors,
        ThemeField::Spacing,
        ThemeField::Typography,
        ThemeField::Borders,
        ThemeField::Shadows,
    ];

    /// Field key as it appears in theme documents.
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeField::Name => "name",
            ThemeField::Colors => "colors",
            ThemeField::Spacing => "spacing",
            ThemeField::Typography => "typography",
            ThemeField::Borders => "borders",
            ThemeField::Shadows => "shadows",
        }
    }

    /// Human readable defect description.
    pub const fn message(self) -> &'static str {
        match self {
            ThemeField::Name => "Theme name is required",
            ThemeField::Colors => "Theme colors are required",
            ThemeField::Spacing => "Theme spacing is required",
            ThemeField::Typography => "Theme typography is required",
            ThemeField::Borders => "Theme borders are required",
            ThemeField::Shadows => "Theme shadows are required",
        }
    }
}

impl fmt::Display for ThemeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`validate_theme`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeValidation {
    pub valid: bool,
    /// Missing fields; `None` when the theme is valid.
    pub errors: Option<Vec<ThemeField>>,
}

impl ThemeValidation {
    fn from_missing(missing: Vec<ThemeField>) -> Self {
        if missing.is_empty() {
            Self {
                valid: true,
                errors: None,
            }
        } else {
            Self {
                valid: false,
                errors: Some(missing),
            }
        }
    }

    /// Missing fields as a slice (empty when valid).
    pub fn missing(&self) -> &[ThemeField] {
        self.errors.as_deref().unwrap_or(&[])
    }

    /// Defect descriptions, one per missing field.
    pub fn messages(&self) -> Vec<&'static str> {
        self.missing().iter().map(|field| field.message()).collect()
    }
}

/// A theme whose required fields may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawTheme {
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub meta: ThemeMeta,
    pub colors: Option<ThemeColors>,
    pub spacing: Option<ThemeSpacing>,
    pub typography: Option<ThemeTypography>,
    pub borders: Option<ThemeBorders>,
    pub shadows: Option<ThemeShadows>,
}

impl RawTheme {
    /// Parse a theme document.
    ///
    /// Only syntax and leaf shapes are checked here; missing groups are
    /// reported later by [`validate_theme`].
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(json).map_err(|err| ThemeError::Parse {
            message: err.to_string(),
        })
    }

    /// The supplied name, if any and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Validate and convert into a [`Theme`].
    pub fn into_theme(self) -> Result<Theme, ThemeError> {
        let validation = validate_theme(&self);
        if !validation.valid {
            return Err(ThemeError::Invalid {
                name: self.name().map(str::to_owned),
                missing: validation.errors.unwrap_or_default(),
            });
        }

        match self {
            RawTheme {
                name: Some(name),
                meta,
                colors: Some(colors),
                spacing: Some(spacing),
                typography: Some(typography),
                borders: Some(borders),
                shadows: Some(shadows),
            } => Ok(Theme {
                name,
                meta,
                colors,
                spacing,
                typography,
                borders,
                shadows,
            }),
            // validate_theme reported every absent field above.
            other => Err(ThemeError::Invalid {
                name: other.name().map(str::to_owned),
                missing: ThemeField::ALL.to_vec(),
            }),
        }
    }
}

impl From<Theme> for RawTheme {
    fn from(theme: Theme) -> Self {
        Self {
            name: Some(theme.name),
            meta: theme.meta,
            colors: Some(theme.colors),
            spacing: Some(theme.spacing),
            typography: Some(theme.typography),
            borders: Some(theme.borders),
            shadows: Some(theme.shadows),
        }
    }
}

impl TryFrom<RawTheme> for Theme {
    type Error = ThemeError;

    fn try_from(raw: RawTheme) -> Result<Self, Self::Error> {
        raw.into_theme()
    }
}

/// Check that every required theme field is present.
///
/// All defects are accumulated so the caller sees the complete list; the
/// shape of each group beyond presence is not inspected.
pub fn validate_theme(theme: &RawTheme) -> ThemeValidation {
    let mut missing = Vec::new();

    if theme.name().is_none() {
        missing.push(ThemeField::Name);
    }
    if theme.colors.is_none() {
        missing.push(ThemeField::Colors);
    }
    if theme.spacing.is_none() {
        missing.push(ThemeField::Spacing);
    }
    if theme.typography.is_none() {
        missing.push(ThemeField::Typography);
    }
    if theme.borders.is_none() {
        missing.push(ThemeField::Borders);
    }
    if theme.shadows.is_none() {
        missing.push(ThemeField::Shadows);
    }

    ThemeValidation::from_missing(missing)
}
