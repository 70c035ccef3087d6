#![forbid(unsafe_code)]

//! Following the host's light/dark preference.
//!
//! The host reports its color scheme (a `prefers-color-scheme` media query,
//! a desktop setting, the terminal background) and the binding applies the
//! matching theme. Without a host signal, [`ColorScheme::detect`] falls back
//! to the `COLORFGBG` environment variable.

use std::env;

use crate::error::ThemeError;
use crate::manager::ThemeManager;
use crate::root::StyleRoot;

/// Theme name used for the light scheme unless overridden.
pub const DEFAULT_LIGHT_THEME: &str = "light";
/// Theme name used for the dark scheme unless overridden.
pub const DEFAULT_DARK_THEME: &str = "dark";

/// Host color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    /// Detect the preference from the environment.
    ///
    /// Heuristics:
    /// 1. Check the COLORFGBG environment variable
    /// 2. Default to dark
    #[must_use]
    pub fn detect() -> Self {
        Self::from_colorfgbg(env::var("COLORFGBG").ok().as_deref())
    }

    /// Interpret a `COLORFGBG` value (`"fg;bg"`, ANSI color indices).
    ///
    /// Background 7 (silver) or 15 (white) means light; anything else,
    /// including a missing or malformed value, means dark.
    pub fn from_colorfgbg(colorfgbg: Option<&str>) -> Self {
        if let Some(colorfgbg) = colorfgbg
            && let Some(bg_part) = colorfgbg.split(';').next_back()
            && let Ok(bg) = bg_part.trim().parse::<u8>()
            && (bg == 7 || bg == 15)
        {
            return Self::Light;
        }
        Self::Dark
    }

    /// Map a `prefers-color-scheme: dark` match result.
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Apply `light` or `dark` depending on `scheme`.
pub fn apply_system_theme<R: StyleRoot>(
    manager: &mut ThemeManager<R>,
    scheme: ColorScheme,
    light: &str,
    dark: &str,
) -> Result<(), ThemeError> {
    let name = if scheme.is_dark() { dark } else { light };
    manager.apply_theme(name)
}

/// Keeps the applied theme in step with the host color scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemThemeBinding {
    light: String,
    dark: String,
    last: Option<ColorScheme>,
}

impl Default for SystemThemeBinding {
    fn default() -> Self {
        Self::new(DEFAULT_LIGHT_THEME, DEFAULT_DARK_THEME)
    }
}

impl SystemThemeBinding {
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
            last: None,
        }
    }

    pub fn light(&self) -> &str {
        &self.light
    }

    pub fn dark(&self) -> &str {
        &self.dark
    }

    /// The scheme most recently applied through this binding.
    pub fn scheme(&self) -> Option<ColorScheme> {
        self.last
    }

    /// Apply the theme for the host's current scheme.
    pub fn bind<R: StyleRoot>(
        &mut self,
        manager: &mut ThemeManager<R>,
        scheme: ColorScheme,
    ) -> Result<(), ThemeError> {
        apply_system_theme(manager, scheme, &self.light, &self.dark)?;
        self.last = Some(scheme);
        Ok(())
    }

    /// Handle a scheme change reported by the host.
    ///
    /// Every reported change re-applies the matching theme, even when the
    /// scheme is unchanged, so a theme applied by hand in between is
    /// replaced.
    pub fn on_scheme_change<R: StyleRoot>(
        &mut self,
        manager: &mut ThemeManager<R>,
        scheme: ColorScheme,
    ) -> Result<(), ThemeError> {
        tracing::debug!(?scheme, "host color scheme changed");
        self.bind(manager, scheme)
    }
}
