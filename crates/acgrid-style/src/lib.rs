#![forbid(unsafe_code)]

//! Theme system for AC Grid.
//!
//! Themes are typed bundles of design tokens. A [`ThemeManager`] registers
//! them, validates them, projects the active one onto `--ac-grid-*` CSS
//! custom properties, and notifies subscribers when it changes.

pub mod css;
pub mod error;
pub mod manager;
pub mod root;
pub mod system;
pub mod theme;
pub mod validation;

#[cfg(test)]
pub(crate) mod fixtures;

pub use css::{CSS_VAR_PREFIX, CssVariableMap, camel_to_kebab, theme_to_css_variables, to_css_rule};
pub use error::ThemeError;
pub use manager::{Subscription, ThemeListener, ThemeManager};
pub use root::{InMemoryStyleRoot, StyleRoot};
pub use system::{ColorScheme, SystemThemeBinding, apply_system_theme};
pub use theme::{
    BorderWidthScale, FontSizeScale, FontWeightScale, LineHeightScale, RadiusScale, Theme,
    ThemeBorders, ThemeColors, ThemeMeta, ThemeShadows, ThemeSpacing, ThemeTypography,
};
pub use validation::{RawTheme, ThemeField, ThemeValidation, validate_theme};
