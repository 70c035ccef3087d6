#![forbid(unsafe_code)]

//! Typed theme model.
//!
//! A [`Theme`] bundles the design tokens a grid is styled with: colors,
//! spacing, typography, borders and shadows. Every group is required, so a
//! `Theme` value is complete by construction; only the name needs a runtime
//! check. Values are CSS value strings and are passed through verbatim.
//!
//! # Example
//! ```
//! use acgrid_style::theme::{Theme, ThemeColors};
//!
//! let colors = ThemeColors {
//!     primary: "#2563eb".into(),
//!     border: "#e5e7eb".into(),
//!     bg_header: "#f8fafc".into(),
//!     bg_hover: "#f1f5f9".into(),
//!     bg_cell: "#ffffff".into(),
//!     bg_selected: "#dbeafe".into(),
//!     text_primary: "#0f172a".into(),
//!     text_secondary: "#64748b".into(),
//!     text_disabled: "#94a3b8".into(),
//!     success: "#10b981".into(),
//!     warning: "#f59e0b".into(),
//!     error: "#ef4444".into(),
//!     info: "#3b82f6".into(),
//! };
//!
//! let theme = Theme::new("paper", colors).with_display_name("Paper");
//! assert_eq!(theme.name, "paper");
//! assert!(theme.validate().is_ok());
//! ```

use crate::error::ThemeError;
use crate::validation::ThemeField;

/// Optional descriptive metadata carried by a theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ThemeMeta {
    /// Human readable name shown in theme pickers.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub display_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub author: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub version: Option<String>,
}

/// Semantic color slots.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ThemeColors {
    /// Accent color (sort indicators, focus rings, active controls).
    pub primary: String,
    /// Grid and cell border color.
    pub border: String,
    /// Header row background.
    pub bg_header: String,
    /// Row hover background.
    pub bg_hover: String,
    /// Body cell background.
    pub bg_cell: String,
    /// Selected row background.
    pub bg_selected: String,
    /// Main text color.
    pub text_primary: String,
    /// Secondary text color.
    pub text_secondary: String,
    /// Disabled text color.
    pub text_disabled: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
}

impl ThemeColors {
    /// Leaves as `(camelCaseKey, value)` pairs.
    pub fn entries(&self) -> [(&'static str, &str); 13] {
        [
            ("primary", self.primary.as_str()),
            ("border", self.border.as_str()),
            ("bgHeader", self.bg_header.as_str()),
            ("bgHover", self.bg_hover.as_str()),
            ("bgCell", self.bg_cell.as_str()),
            ("bgSelected", self.bg_selected.as_str()),
            ("textPrimary", self.text_primary.as_str()),
            ("textSecondary", self.text_secondary.as_str()),
            ("textDisabled", self.text_disabled.as_str()),
            ("success", self.success.as_str()),
            ("warning", self.warning.as_str()),
            ("error", self.error.as_str()),
            ("info", self.info.as_str()),
        ]
    }
}

/// Five-step spacing scale.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeSpacing {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl ThemeSpacing {
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("xs", self.xs.as_str()),
            ("sm", self.sm.as_str()),
            ("md", self.md.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
        ]
    }
}

impl Default for ThemeSpacing {
    fn default() -> Self {
        Self {
            xs: "0.25rem".into(),
            sm: "0.5rem".into(),
            md: "1rem".into(),
            lg: "1.5rem".into(),
            xl: "2rem".into(),
        }
    }
}

/// Font size scale.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontSizeScale {
    pub xs: String,
    pub sm: String,
    pub base: String,
    pub lg: String,
    pub xl: String,
}

impl FontSizeScale {
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("xs", self.xs.as_str()),
            ("sm", self.sm.as_str()),
            ("base", self.base.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
        ]
    }
}

impl Default for FontSizeScale {
    fn default() -> Self {
        Self {
            xs: "0.75rem".into(),
            sm: "0.875rem".into(),
            base: "1rem".into(),
            lg: "1.125rem".into(),
            xl: "1.25rem".into(),
        }
    }
}

/// Numeric font weight scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontWeightScale {
    pub normal: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

impl FontWeightScale {
    pub fn entries(&self) -> [(&'static str, u16); 4] {
        [
            ("normal", self.normal),
            ("medium", self.medium),
            ("semibold", self.semibold),
            ("bold", self.bold),
        ]
    }
}

impl Default for FontWeightScale {
    fn default() -> Self {
        Self {
            normal: 400,
            medium: 500,
            semibold: 600,
            bold: 700,
        }
    }
}

/// Line height scale (unitless CSS values).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineHeightScale {
    pub tight: String,
    pub normal: String,
    pub relaxed: String,
}

impl LineHeightScale {
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("tight", self.tight.as_str()),
            ("normal", self.normal.as_str()),
            ("relaxed", self.relaxed.as_str()),
        ]
    }
}

impl Default for LineHeightScale {
    fn default() -> Self {
        Self {
            tight: "1.25".into(),
            normal: "1.5".into(),
            relaxed: "1.75".into(),
        }
    }
}

/// Typography tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ThemeTypography {
    pub font_size: FontSizeScale,
    pub font_weight: FontWeightScale,
    pub line_height: LineHeightScale,
}

/// Border radius scale.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadiusScale {
    pub none: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub full: String,
}

impl RadiusScale {
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("none", self.none.as_str()),
            ("sm", self.sm.as_str()),
            ("md", self.md.as_str()),
            ("lg", self.lg.as_str()),
            ("full", self.full.as_str()),
        ]
    }
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self {
            none: "0".into(),
            sm: "0.125rem".into(),
            md: "0.25rem".into(),
            lg: "0.5rem".into(),
            full: "9999px".into(),
        }
    }
}

/// Border width scale.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderWidthScale {
    pub thin: String,
    pub base: String,
    pub thick: String,
}

impl BorderWidthScale {
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("thin", self.thin.as_str()),
            ("base", self.base.as_str()),
            ("thick", self.thick.as_str()),
        ]
    }
}

impl Default for BorderWidthScale {
    fn default() -> Self {
        Self {
            thin: "1px".into(),
            base: "1px".into(),
            thick: "2px".into(),
        }
    }
}

/// Border tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeBorders {
    pub radius: RadiusScale,
    pub width: BorderWidthScale,
}

/// Five-step elevation scale (CSS `box-shadow` values).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeShadows {
    pub none: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl ThemeShadows {
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("none", self.none.as_str()),
            ("sm", self.sm.as_str()),
            ("md", self.md.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
        ]
    }
}

impl Default for ThemeShadows {
    fn default() -> Self {
        Self {
            none: "none".into(),
            sm: "0 1px 2px 0 rgba(0, 0, 0, 0.05)".into(),
            md: "0 4px 6px -1px rgba(0, 0, 0, 0.1)".into(),
            lg: "0 10px 15px -3px rgba(0, 0, 0, 0.1)".into(),
            xl: "0 20px 25px -5px rgba(0, 0, 0, 0.1)".into(),
        }
    }
}

/// A complete, named theme.
///
/// Themes are immutable once registered with a
/// [`ThemeManager`](crate::manager::ThemeManager); replacing one means
/// unregistering the old definition and registering the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    /// Unique registry key.
    pub name: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub meta: ThemeMeta,
    pub colors: ThemeColors,
    pub spacing: ThemeSpacing,
    pub typography: ThemeTypography,
    pub borders: ThemeBorders,
    pub shadows: ThemeShadows,
}

impl Theme {
    /// Create a theme from a palette, using the standard spacing,
    /// typography, border and shadow scales.
    pub fn new(name: impl Into<String>, colors: ThemeColors) -> Self {
        Self {
            name: name.into(),
            meta: ThemeMeta::default(),
            colors,
            spacing: ThemeSpacing::default(),
            typography: ThemeTypography::default(),
            borders: ThemeBorders::default(),
            shadows: ThemeShadows::default(),
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.meta.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.meta.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.meta.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: ThemeSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_typography(mut self, typography: ThemeTypography) -> Self {
        self.typography = typography;
        self
    }

    #[must_use]
    pub fn with_borders(mut self, borders: ThemeBorders) -> Self {
        self.borders = borders;
        self
    }

    #[must_use]
    pub fn with_shadows(mut self, shadows: ThemeShadows) -> Self {
        self.shadows = shadows;
        self
    }

    /// Name shown to users: the display name when set, the key otherwise.
    pub fn label(&self) -> &str {
        self.meta.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Check the invariants the type system cannot express.
    ///
    /// All attribute groups are non-optional fields, so the only possible
    /// defect is an empty name.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.name.is_empty() {
            return Err(ThemeError::Invalid {
                name: None,
                missing: vec![ThemeField::Name],
            });
        }
        Ok(())
    }
}
