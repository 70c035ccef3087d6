//! Facade surface: prelude, top-level error, bundled defaults.

use std::error::Error as _;

use acgrid::prelude::*;
use acgrid::ThemeError;

#[test]
fn theme_errors_convert_into_facade_error() {
    let mut manager: ThemeManager = ThemeManager::new();
    let err: Error = manager.apply_theme("missing").unwrap_err().into();

    assert!(matches!(err, Error::Theme(ThemeError::NotFound { .. })));
    assert_eq!(err.to_string(), r#"theme "missing" not found"#);
    assert!(err.source().is_some());
}

#[test]
fn question_mark_lifts_theme_errors() {
    fn apply(manager: &mut ThemeManager, name: &str) -> Result<()> {
        manager.apply_theme(name)?;
        Ok(())
    }
    let mut manager = ThemeManager::new();
    assert!(apply(&mut manager, "light").is_err());
}

#[cfg(feature = "themes")]
#[test]
fn default_manager_has_presets_and_light_applied() {
    let manager = acgrid::default_theme_manager();
    assert_eq!(manager.len(), 7);
    assert_eq!(manager.current_theme(), Some(acgrid::DEFAULT_THEME));
    let css = manager.root().to_css();
    assert!(css.contains(&format!("{}-primary: #2563eb;", acgrid::CSS_VAR_PREFIX)));
}

#[test]
fn prelude_covers_grid_types() {
    let config = GridConfig::default();
    let virt = Virtualizer::new(config.virtualization);
    assert_eq!(virt.virtual_state().visible_range.len(), 0);

    let state = PaginationState::default();
    assert_eq!(state.page_size, 10);
}

#[cfg(feature = "serde")]
mod json {
    use super::*;

    #[test]
    fn malformed_theme_document_is_theme_error() {
        let mut manager = ThemeManager::new();
        let err = acgrid::register_theme_json(&mut manager, "{").unwrap_err();
        assert!(matches!(err, Error::Theme(ThemeError::Parse { .. })));
    }

    #[test]
    fn incomplete_theme_document_is_rejected() {
        let mut manager = ThemeManager::new();
        let err = acgrid::register_theme_json(&mut manager, r#"{"name":"x"}"#).unwrap_err();
        assert!(matches!(err, Error::Theme(ThemeError::Invalid { .. })));
        assert!(manager.is_empty());
    }

    #[test]
    fn grid_config_parses_camel_case() {
        let config = acgrid::grid_config_from_json(
            r#"{
                "pagination": { "enabled": true, "pageSize": 25, "mode": "server", "serverTotalRows": 900 },
                "virtualization": { "enabled": true, "rowHeight": 28 },
                "selection": { "enabled": true, "mode": "multiple" },
                "editing": { "enabled": true, "mode": "click" },
                "grouping": { "initialExpanded": { "g1": true } }
            }"#,
        )
        .unwrap();

        assert_eq!(config.pagination.page_size, 25);
        assert_eq!(config.pagination.total_rows(10), 900);
        assert_eq!(config.virtualization.row_height, Some(28.0));
        assert!(config.selection.shows_checkbox());
        assert_eq!(config.resizing.default_column_width, 150);
        assert!(config.grouping.initial_expanded.is_expanded("g1"));
    }

    #[test]
    fn bad_grid_config_is_config_error() {
        let err = acgrid::grid_config_from_json(r#"{"pagination": {"pageSize": "ten"}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("invalid grid configuration"));
    }
}
