#![forbid(unsafe_code)]

//! Theme registry and applier.
//!
//! A [`ThemeManager`] owns the registered themes, remembers which one is
//! active, writes the active theme's variables to a [`StyleRoot`], and
//! notifies subscribers. It is constructed explicitly and handed to whatever
//! needs it; there is no process-wide instance.
//!
//! # Example
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use acgrid_style::manager::{ThemeListener, ThemeManager};
//! use acgrid_style::root::StyleRoot;
//! # use acgrid_style::theme::{Theme, ThemeColors};
//! # fn palette(primary: &str) -> ThemeColors {
//! #     ThemeColors {
//! #         primary: primary.into(), border: "#e5e7eb".into(), bg_header: "#f8fafc".into(),
//! #         bg_hover: "#f1f5f9".into(), bg_cell: "#ffffff".into(), bg_selected: "#dbeafe".into(),
//! #         text_primary: "#0f172a".into(), text_secondary: "#64748b".into(),
//! #         text_disabled: "#94a3b8".into(), success: "#10b981".into(), warning: "#f59e0b".into(),
//! #         error: "#ef4444".into(), info: "#3b82f6".into(),
//! #     }
//! # }
//!
//! let mut manager = ThemeManager::new();
//! manager.register_theme(Theme::new("light", palette("#2563eb")))?;
//! manager.register_theme(Theme::new("dark", palette("#3b82f6")))?;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let log = Rc::clone(&seen);
//! let _subscription = manager.on_theme_change(ThemeListener::new(move |current, previous| {
//!     log.borrow_mut().push((current.to_owned(), previous.map(str::to_owned)));
//! }));
//!
//! manager.apply_theme("light")?;
//! manager.apply_theme("dark")?;
//!
//! assert_eq!(manager.current_theme(), Some("dark"));
//! assert_eq!(manager.root().property("--ac-grid-primary").as_deref(), Some("#3b82f6"));
//! assert_eq!(seen.borrow().len(), 2);
//! # Ok::<(), acgrid_style::ThemeError>(())
//! ```
//!
//! # Reentrancy
//!
//! Listeners run synchronously inside [`ThemeManager::apply_theme`] while the
//! manager is mutably borrowed, so a listener cannot call back into the same
//! manager. Hosts that share a manager through `RefCell` get a borrow panic
//! instead of unbounded recursion.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::css::theme_to_css_variables;
use crate::error::ThemeError;
use crate::root::{InMemoryStyleRoot, StyleRoot};
use crate::theme::Theme;
use crate::validation::{RawTheme, ThemeValidation, validate_theme};

type ListenerFn = dyn Fn(&str, Option<&str>);
type ListenerList = RefCell<Vec<ThemeListener>>;

/// Callback invoked with `(current, previous)` after a theme is applied.
///
/// Handles compare by identity: clones of one handle are the same listener,
/// and registering it twice stores it once.
#[derive(Clone)]
pub struct ThemeListener(Rc<ListenerFn>);

impl ThemeListener {
    pub fn new(listener: impl Fn(&str, Option<&str>) + 'static) -> Self {
        Self(Rc::new(listener))
    }

    /// Whether both handles refer to the same callback.
    pub fn same(&self, other: &ThemeListener) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }

    fn call(&self, current: &str, previous: Option<&str>) {
        (self.0)(current, previous);
    }
}

impl fmt::Debug for ThemeListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ThemeListener")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// Handle returned by [`ThemeManager::on_theme_change`].
///
/// Dropping the handle leaves the listener registered; call
/// [`Subscription::unsubscribe`] to remove it. The handle does not keep the
/// manager alive.
#[derive(Debug)]
#[must_use = "dropping a Subscription keeps the listener registered"]
pub struct Subscription {
    listeners: Weak<ListenerList>,
    listener: ThemeListener,
}

impl Subscription {
    /// Remove the listener. A no-op if the manager is gone or the listener
    /// was already removed.
    pub fn unsubscribe(self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .retain(|existing| !existing.same(&self.listener));
        }
    }

    /// Whether the listener is still registered with a live manager.
    pub fn is_active(&self) -> bool {
        self.listeners.upgrade().is_some_and(|listeners| {
            listeners
                .borrow()
                .iter()
                .any(|existing| existing.same(&self.listener))
        })
    }
}

/// Registry of named themes plus the currently applied one.
#[derive(Debug)]
pub struct ThemeManager<R: StyleRoot = InMemoryStyleRoot> {
    themes: HashMap<String, Theme>,
    current: Option<String>,
    listeners: Rc<ListenerList>,
    root: R,
}

impl ThemeManager<InMemoryStyleRoot> {
    /// Create an empty manager writing to an in-memory style root.
    pub fn new() -> Self {
        Self::with_root(InMemoryStyleRoot::new())
    }
}

impl Default for ThemeManager<InMemoryStyleRoot> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: StyleRoot> ThemeManager<R> {
    /// Create an empty manager writing to `root`.
    pub fn with_root(root: R) -> Self {
        Self {
            themes: HashMap::new(),
            current: None,
            listeners: Rc::new(RefCell::new(Vec::new())),
            root,
        }
    }

    /// Register a theme.
    ///
    /// Fails with [`ThemeError::Duplicate`] if the name is taken (the
    /// existing theme is left untouched), or [`ThemeError::Invalid`] if the
    /// name is empty.
    pub fn register_theme(&mut self, theme: Theme) -> Result<(), ThemeError> {
        if self.themes.contains_key(&theme.name) {
            tracing::warn!(theme = %theme.name, "rejected duplicate theme registration");
            return Err(ThemeError::Duplicate { name: theme.name });
        }
        if let Err(err) = theme.validate() {
            tracing::warn!(error = %err, "rejected invalid theme");
            return Err(err);
        }

        tracing::debug!(theme = %theme.name, "registered theme");
        self.themes.insert(theme.name.clone(), theme);
        Ok(())
    }

    /// Register a theme from its untrusted form.
    ///
    /// The duplicate check runs first, then presence validation of every
    /// required field.
    pub fn register_raw(&mut self, raw: RawTheme) -> Result<(), ThemeError> {
        if let Some(name) = raw.name()
            && self.themes.contains_key(name)
        {
            tracing::warn!(theme = %name, "rejected duplicate theme registration");
            return Err(ThemeError::Duplicate {
                name: name.to_owned(),
            });
        }

        let theme = raw.into_theme().inspect_err(|err| {
            tracing::warn!(error = %err, "rejected invalid theme");
        })?;
        self.register_theme(theme)
    }

    /// Remove a theme. Unknown names are ignored.
    ///
    /// Removing the active theme clears [`current_theme`](Self::current_theme);
    /// the variables it wrote stay on the style root until another theme is
    /// applied.
    pub fn unregister_theme(&mut self, name: &str) -> Option<Theme> {
        let removed = self.themes.remove(name)?;
        if self.current.as_deref() == Some(name) {
            tracing::debug!(theme = %name, "unregistered active theme; clearing current theme");
            self.current = None;
        } else {
            tracing::debug!(theme = %name, "unregistered theme");
        }
        Some(removed)
    }

    /// Apply a registered theme.
    ///
    /// The full variable set is computed before anything is written. Every
    /// variable the theme defines is then written to the style root;
    /// variables from a previous theme that this one does not define are
    /// left as they were. Listeners run afterwards, in registration order,
    /// with `(name, previous)`. A panicking listener propagates to the caller.
    pub fn apply_theme(&mut self, name: &str) -> Result<(), ThemeError> {
        let Some(theme) = self.themes.get(name) else {
            tracing::warn!(theme = %name, "cannot apply unregistered theme");
            return Err(ThemeError::NotFound {
                name: name.to_owned(),
            });
        };

        let vars = theme_to_css_variables(theme);
        for (property, value) in &vars {
            self.root.set_property(property, value);
        }

        let previous = self.current.replace(name.to_owned());
        tracing::debug!(
            theme = %name,
            previous = previous.as_deref().unwrap_or("<none>"),
            variables = vars.len(),
            "applied theme"
        );

        let listeners = self.listeners.borrow().clone();
        for listener in &listeners {
            listener.call(name, previous.as_deref());
        }

        Ok(())
    }

    /// Name of the applied theme.
    pub fn current_theme(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Definition of the applied theme.
    pub fn current_theme_definition(&self) -> Option<&Theme> {
        self.current
            .as_deref()
            .and_then(|name| self.themes.get(name))
    }

    /// Registered theme names, sorted.
    pub fn themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    pub fn has_theme(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Number of registered themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Subscribe to theme changes.
    ///
    /// Subscribing a handle that is already registered does not add a
    /// second entry.
    pub fn on_theme_change(&mut self, listener: ThemeListener) -> Subscription {
        {
            let mut listeners = self.listeners.borrow_mut();
            if !listeners.iter().any(|existing| existing.same(&listener)) {
                listeners.push(listener.clone());
            }
        }
        Subscription {
            listeners: Rc::downgrade(&self.listeners),
            listener,
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Check a theme for missing required fields. Never fails.
    pub fn validate_theme(&self, theme: &RawTheme) -> ThemeValidation {
        validate_theme(theme)
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut R {
        &mut self.root
    }

    /// Consume the manager and return its style root.
    pub fn into_root(self) -> R {
        self.root
    }
}
