#![forbid(unsafe_code)]

//! Built-in theme presets for AC Grid.
//!
//! Seven presets ship with the grid. [`install_defaults`] registers them on a
//! [`ThemeManager`] and applies [`DEFAULT_THEME`] when nothing is active yet.
//!
//! # Example
//! ```
//! use acgrid_style::ThemeManager;
//!
//! let mut manager = ThemeManager::new();
//! let report = acgrid_themes::install_defaults(&mut manager);
//! assert_eq!(report.registered.len(), 7);
//! assert_eq!(manager.current_theme(), Some("light"));
//! ```

pub mod presets;

use acgrid_style::{StyleRoot, Theme, ThemeManager};
use tracing::debug;

pub use presets::{bamboo, dark, forest, light, ocean, sunset, violet};

/// Name of the preset applied by [`install_defaults`].
pub const DEFAULT_THEME: &str = "light";

/// Every built-in preset, in declaration order.
#[must_use]
pub fn all() -> Vec<Theme> {
    vec![
        light(),
        dark(),
        ocean(),
        forest(),
        sunset(),
        bamboo(),
        violet(),
    ]
}

/// Look up a built-in preset by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    all().into_iter().find(|theme| theme.name == name)
}

/// Outcome of [`install_defaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Presets newly added to the registry.
    pub registered: Vec<String>,
    /// Presets left alone because a theme with that name already existed.
    pub skipped: Vec<String>,
    /// Whether [`DEFAULT_THEME`] was applied.
    pub applied_default: bool,
}

/// Register every preset not already present, then apply [`DEFAULT_THEME`]
/// if no theme is active.
///
/// User themes registered under a preset name win over the preset. An
/// already active theme is never replaced.
pub fn install_defaults<R: StyleRoot>(manager: &mut ThemeManager<R>) -> InstallReport {
    let mut report = InstallReport::default();

    for theme in all() {
        let name = theme.name.clone();
        if manager.has_theme(&name) {
            report.skipped.push(name);
            continue;
        }
        match manager.register_theme(theme) {
            Ok(()) => report.registered.push(name),
            Err(_) => report.skipped.push(name),
        }
    }

    if manager.current_theme().is_none() && manager.apply_theme(DEFAULT_THEME).is_ok() {
        report.applied_default = true;
    }

    debug!(
        registered = report.registered.len(),
        skipped = report.skipped.len(),
        applied_default = report.applied_default,
        "installed default themes"
    );
    report
}
