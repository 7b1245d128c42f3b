//! Theme preference cycle and controller.
//!
//! The preference is one of `auto`, `dark`, `light`, stored as a plain string
//! and mirrored onto an attribute of the `<html>` element that the stylesheet
//! keys on. The toggle button walks `auto -> dark -> light -> auto`.
//!
//! TRADE-OFFS
//! ==========
//! An unrecognized stored string reads as `auto` and advances to `dark`, the
//! same step taken from an unset preference. Storage failures never block the
//! visual change; they are only logged.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::store::PreferenceStore;

/// User-chosen display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    /// Follow the system color scheme.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Toggle order.
pub const CYCLE: [ThemePreference; 3] = [ThemePreference::Auto, ThemePreference::Dark, ThemePreference::Light];

impl ThemePreference {
    /// The persisted and attribute string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the three preference names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preference: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Next preference after `current`. `None` stands for an unrecognized stored
/// value, which always advances to `dark`.
#[must_use]
pub fn next_in_cycle(current: Option<ThemePreference>) -> ThemePreference {
    match current.and_then(|pref| CYCLE.iter().position(|p| *p == pref)) {
        Some(i) => CYCLE[(i + 1) % CYCLE.len()],
        None => ThemePreference::Dark,
    }
}

/// Where the active theme is published for the styling layer.
pub trait ThemeTarget {
    /// Set `attribute` on the document root to `value`.
    fn set_root_attribute(&self, attribute: &str, value: &str);
}

/// Reads, applies, and advances the persisted theme preference.
pub struct ThemeController<S, T> {
    store: S,
    target: T,
    key: String,
    attribute: String,
}

impl<S: PreferenceStore, T: ThemeTarget> ThemeController<S, T> {
    pub fn new(store: S, target: T, key: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self { store, target, key: key.into(), attribute: attribute.into() }
    }

    /// Persisted preference, or `auto` if unset or invalid.
    pub fn current(&self) -> ThemePreference {
        self.stored().unwrap_or_default()
    }

    /// Publish `pref` on the document root.
    pub fn apply(&self, pref: ThemePreference) {
        self.target.set_root_attribute(&self.attribute, pref.as_str());
    }

    /// Apply the persisted preference. Called once at page ready.
    pub fn init(&self) -> ThemePreference {
        let pref = self.current();
        self.apply(pref);
        pref
    }

    /// Step to the next preference, persist it, and apply it.
    pub fn advance(&self) -> ThemePreference {
        let next = next_in_cycle(self.stored());
        if let Err(err) = self.store.set(&self.key, next.as_str()) {
            log::warn!("theme: {err}");
        }
        self.apply(next);
        log::debug!("theme: switched to {next}");
        next
    }

    /// Stored value parsed strictly. Unset reads as `auto`; `None` means the
    /// stored string is not a known preference.
    fn stored(&self) -> Option<ThemePreference> {
        let Some(raw) = self.store.get(&self.key) else {
            return Some(ThemePreference::Auto);
        };
        match raw.parse() {
            Ok(pref) => Some(pref),
            Err(err) => {
                log::debug!("theme: {err}");
                None
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}
