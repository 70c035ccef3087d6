#![forbid(unsafe_code)]

//! AC Grid public facade crate.
//!
//! Re-exports the theme system and the data-grid core, and offers a prelude
//! for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use acgrid::prelude::*;
//!
//! # fn main() -> acgrid::Result<()> {
//! let mut themes = acgrid::default_theme_manager();
//! themes.apply_theme("dark")?;
//! assert_eq!(
//!     themes.root().property("--ac-grid-bg-cell").as_deref(),
//!     Some("#111827")
//! );
//!
//! let mut virt = Virtualizer::new(VirtualizationConfig::enabled());
//! virt.update_state(3500.0, 350.0, 10_000);
//! assert_eq!(virt.virtual_state().visible_range.as_range(), 95..115);
//! # Ok(())
//! # }
//! ```

use std::fmt;

// --- Style re-exports ------------------------------------------------------

pub use acgrid_style::{
    CSS_VAR_PREFIX, ColorScheme, CssVariableMap, InMemoryStyleRoot, RawTheme, StyleRoot,
    Subscription, SystemThemeBinding, Theme, ThemeColors, ThemeError, ThemeField, ThemeListener,
    ThemeManager, ThemeValidation, apply_system_theme, theme_to_css_variables, to_css_rule,
    validate_theme,
};

// --- Core re-exports -------------------------------------------------------

pub use acgrid_core::{
    CellValue, FilterColumn, FilterState, FilterType, GridConfig, PaginationConfig,
    PaginationState, RowAccessor, VirtualState, VirtualizationConfig, Virtualizer, VisibleRange,
    array_move,
};

// --- Themes ---------------------------------------------------------------

#[cfg(feature = "themes")]
pub use acgrid_themes::{DEFAULT_THEME, InstallReport, install_defaults};

/// A manager with every built-in preset registered and the default applied.
#[cfg(feature = "themes")]
#[must_use]
pub fn default_theme_manager() -> ThemeManager {
    let mut manager = ThemeManager::new();
    install_defaults(&mut manager);
    manager
}

/// Parse a theme document and register it.
#[cfg(feature = "serde")]
pub fn register_theme_json<R: StyleRoot>(manager: &mut ThemeManager<R>, json: &str) -> Result<()> {
    let raw = RawTheme::from_json(json)?;
    manager.register_raw(raw)?;
    Ok(())
}

// --- Errors ---------------------------------------------------------------

/// Top-level error type for AC Grid.
#[derive(Debug)]
pub enum Error {
    /// Theme registration, validation or lookup failed.
    Theme(ThemeError),
    /// A grid configuration document could not be parsed.
    #[cfg(feature = "serde")]
    Config(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theme(err) => write!(f, "{err}"),
            #[cfg(feature = "serde")]
            Self::Config(err) => write!(f, "invalid grid configuration: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Theme(err) => Some(err),
            #[cfg(feature = "serde")]
            Self::Config(err) => Some(err),
        }
    }
}

impl From<ThemeError> for Error {
    fn from(err: ThemeError) -> Self {
        Self::Theme(err)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for AC Grid APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Parse a JSON grid configuration.
#[cfg(feature = "serde")]
pub fn grid_config_from_json(json: &str) -> Result<GridConfig> {
    Ok(GridConfig::from_json(json)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CellValue, Error, FilterColumn, FilterState, FilterType, GridConfig, PaginationConfig,
        PaginationState, Result, RowAccessor, StyleRoot, Theme, ThemeListener, ThemeManager,
        VirtualizationConfig, Virtualizer,
    };

    pub use crate::{core, style};

    #[cfg(feature = "themes")]
    pub use crate::themes;
}

pub use acgrid_core as core;
pub use acgrid_style as style;
#[cfg(feature = "themes")]
pub use acgrid_themes as themes;
