//! End-to-end behavior of the theme registry: registration, application,
//! CSS projection onto the style root, and listener fan-out.

use std::cell::RefCell;
use std::rc::Rc;

use acgrid_style::{
    InMemoryStyleRoot, RawTheme, StyleRoot, Theme, ThemeColors, ThemeError, ThemeField,
    ThemeListener, ThemeManager, theme_to_css_variables,
};
use tracing_test::traced_test;

fn palette(primary: &str, bg_cell: &str) -> ThemeColors {
    ThemeColors {
        primary: primary.into(),
        border: "#e5e7eb".into(),
        bg_header: "#f8fafc".into(),
        bg_hover: "#f1f5f9".into(),
        bg_cell: bg_cell.into(),
        bg_selected: "#dbeafe".into(),
        text_primary: "#0f172a".into(),
        text_secondary: "#64748b".into(),
        text_disabled: "#94a3b8".into(),
        success: "#10b981".into(),
        warning: "#f59e0b".into(),
        error: "#ef4444".into(),
        info: "#3b82f6".into(),
    }
}

fn light() -> Theme {
    Theme::new("light", palette("#2563eb", "#ffffff")).with_display_name("Light")
}

fn dark() -> Theme {
    Theme::new("dark", palette("#3b82f6", "#111827")).with_display_name("Dark")
}

fn loaded_manager() -> ThemeManager {
    let mut manager = ThemeManager::new();
    manager.register_theme(light()).unwrap();
    manager.register_theme(dark()).unwrap();
    manager
}

#[test]
fn light_then_dark_scenario() {
    let mut manager = loaded_manager();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let _sub = manager.on_theme_change(ThemeListener::new(move |current, previous| {
        sink.borrow_mut()
            .push((current.to_owned(), previous.map(str::to_owned)));
    }));

    manager.apply_theme("light").unwrap();
    manager.apply_theme("dark").unwrap();

    assert_eq!(manager.current_theme(), Some("dark"));

    let light_vars = theme_to_css_variables(&light());
    let dark_vars = theme_to_css_variables(&dark());
    for name in light_vars.keys().filter(|name| dark_vars.contains_key(*name)) {
        assert_eq!(
            manager.root().property(name).as_deref(),
            Some(dark_vars[name].as_str()),
            "{name} should hold the dark value"
        );
    }

    assert_eq!(
        *calls.borrow(),
        vec![
            ("light".to_owned(), None),
            ("dark".to_owned(), Some("light".to_owned())),
        ]
    );
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut manager = loaded_manager();
    let err = manager
        .register_theme(Theme::new("light", palette("#000000", "#000000")))
        .unwrap_err();

    assert_eq!(
        err,
        ThemeError::Duplicate {
            name: "light".into()
        }
    );
    assert_eq!(manager.theme("light"), Some(&light()));
}

#[test]
fn failed_apply_leaves_variables_untouched() {
    let mut manager = loaded_manager();
    manager.apply_theme("light").unwrap();
    let before = manager.root().clone();

    assert!(manager.apply_theme("sepia").is_err());
    assert_eq!(manager.root(), &before);
    assert_eq!(manager.current_theme(), Some("light"));
}

#[test]
fn failed_registration_leaves_registry_untouched() {
    let mut manager = loaded_manager();
    let raw = RawTheme {
        name: Some("broken".into()),
        ..RawTheme::default()
    };

    match manager.register_raw(raw) {
        Err(ThemeError::Invalid { missing, .. }) => {
            assert_eq!(
                missing,
                vec![
                    ThemeField::Colors,
                    ThemeField::Spacing,
                    ThemeField::Typography,
                    ThemeField::Borders,
                    ThemeField::Shadows,
                ]
            );
        }
        other => panic!("expected invalid theme, got {other:?}"),
    }
    assert_eq!(manager.themes(), vec!["dark", "light"]);
}

#[test]
fn unregister_unknown_keeps_size() {
    let mut manager = loaded_manager();
    assert!(manager.unregister_theme("sepia").is_none());
    assert_eq!(manager.len(), 2);
}

#[test]
fn replace_requires_unregister_then_register() {
    let mut manager = loaded_manager();
    let updated = Theme::new("light", palette("#1d4ed8", "#ffffff"));

    manager.unregister_theme("light");
    manager.register_theme(updated.clone()).unwrap();
    manager.apply_theme("light").unwrap();

    assert_eq!(manager.theme("light"), Some(&updated));
    assert_eq!(
        manager.root().property("--ac-grid-primary").as_deref(),
        Some("#1d4ed8")
    );
}

#[test]
fn unsubscribed_listener_is_not_invoked() {
    let mut manager = loaded_manager();
    let count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&count);
    let sub = manager.on_theme_change(ThemeListener::new(move |_, _| {
        *counter.borrow_mut() += 1;
    }));

    sub.unsubscribe();
    manager.apply_theme("light").unwrap();
    manager.apply_theme("dark").unwrap();

    assert_eq!(*count.borrow(), 0);
}

#[test]
fn listener_may_unsubscribe_other_listener() {
    let mut manager = loaded_manager();
    let count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&count);
    let victim = manager.on_theme_change(ThemeListener::new(move |_, _| {
        *counter.borrow_mut() += 1;
    }));

    let slot = Rc::new(RefCell::new(Some(victim)));
    let remover = Rc::clone(&slot);
    let _killer = manager.on_theme_change(ThemeListener::new(move |_, _| {
        if let Some(sub) = remover.borrow_mut().take() {
            sub.unsubscribe();
        }
    }));

    manager.apply_theme("light").unwrap();
    manager.apply_theme("dark").unwrap();

    // Invoked on the first apply only.
    assert_eq!(*count.borrow(), 1);
    assert_eq!(manager.listener_count(), 1);
}

/// Style root shared between the manager and a listener.
#[derive(Clone, Default)]
struct SharedRoot(Rc<RefCell<InMemoryStyleRoot>>);

impl StyleRoot for SharedRoot {
    fn set_property(&mut self, name: &str, value: &str) {
        self.0.borrow_mut().set_property(name, value);
    }

    fn property(&self, name: &str) -> Option<String> {
        self.0.borrow().property(name)
    }

    fn remove_property(&mut self, name: &str) -> Option<String> {
        self.0.borrow_mut().remove_property(name)
    }
}

#[test]
fn listener_reads_new_variables_from_root() {
    let root = SharedRoot::default();
    let mut manager = ThemeManager::with_root(root.clone());
    manager.register_theme(light()).unwrap();
    manager.register_theme(dark()).unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let view = root.clone();
    let _sub = manager.on_theme_change(ThemeListener::new(move |current, _| {
        sink.borrow_mut().push((
            current.to_owned(),
            view.property("--ac-grid-primary"),
            view.property("--ac-grid-bg-cell"),
        ));
    }));

    manager.apply_theme("light").unwrap();
    manager.apply_theme("dark").unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            (
                "light".to_owned(),
                Some("#2563eb".to_owned()),
                Some("#ffffff".to_owned())
            ),
            (
                "dark".to_owned(),
                Some("#3b82f6".to_owned()),
                Some("#111827".to_owned())
            ),
        ]
    );
}

#[test]
fn current_definition_tracks_applied_theme() {
    let mut manager = loaded_manager();
    manager.apply_theme("dark").unwrap();
    let current = manager.current_theme_definition().unwrap();
    assert_eq!(current.label(), "Dark");
    assert_eq!(current.colors.bg_cell, "#111827");
}

#[test]
fn rendered_root_is_valid_rule() {
    let mut manager = loaded_manager();
    manager.apply_theme("light").unwrap();
    let css = manager.root().to_css();
    assert!(css.starts_with(":root {\n"));
    assert!(css.contains("  --ac-grid-bg-cell: #ffffff;\n"));
    assert!(css.ends_with('}'));
}

#[test]
#[traced_test]
fn apply_emits_debug_event() {
    let mut manager = loaded_manager();
    manager.apply_theme("dark").unwrap();
    assert!(logs_contain("applied theme"));
}

#[test]
#[traced_test]
fn rejected_registration_is_logged() {
    let mut manager = loaded_manager();
    let _ = manager.register_theme(light());
    assert!(logs_contain("rejected duplicate theme registration"));
}
