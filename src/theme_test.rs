use std::cell::RefCell;

use super::*;
use crate::store::{MemoryStore, StoreError};

const KEY: &str = "vp-theme";
const ATTR: &str = "data-bs-theme";

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct RecordingRoot {
    writes: RefCell<Vec<(String, String)>>,
}

impl RecordingRoot {
    fn last(&self) -> Option<String> {
        self.writes.borrow().last().map(|(_, v)| v.clone())
    }
}

impl ThemeTarget for RecordingRoot {
    fn set_root_attribute(&self, attribute: &str, value: &str) {
        self.writes.borrow_mut().push((attribute.to_owned(), value.to_owned()));
    }
}

/// Readable but refuses every write, like a full or disabled `localStorage`.
struct ReadOnlyStore(Option<String>);

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        self.0.clone()
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::WriteRejected { key: key.to_owned(), reason: "QuotaExceededError".to_owned() })
    }
}

fn controller(stored: Option<&str>) -> ThemeController<MemoryStore, RecordingRoot> {
    let store = match stored {
        Some(value) => MemoryStore::with_value(KEY, value),
        None => MemoryStore::new(),
    };
    ThemeController::new(store, RecordingRoot::default(), KEY, ATTR)
}

// =============================================================
// Preference parsing
// =============================================================

#[test]
fn preference_strings_round_trip() {
    for pref in CYCLE {
        assert_eq!(pref.as_str().parse::<ThemePreference>(), Ok(pref));
        assert_eq!(pref.to_string(), pref.as_str());
    }
}

#[test]
fn parsing_is_case_sensitive() {
    assert_eq!("Dark".parse::<ThemePreference>(), Err(UnknownTheme("Dark".to_owned())));
    assert!("".parse::<ThemePreference>().is_err());
}

#[test]
fn default_preference_is_auto() {
    assert_eq!(ThemePreference::default(), ThemePreference::Auto);
}

// =============================================================
// next_in_cycle
// =============================================================

#[test]
fn cycle_steps_auto_dark_light() {
    assert_eq!(next_in_cycle(Some(ThemePreference::Auto)), ThemePreference::Dark);
    assert_eq!(next_in_cycle(Some(ThemePreference::Dark)), ThemePreference::Light);
    assert_eq!(next_in_cycle(Some(ThemePreference::Light)), ThemePreference::Auto);
}

#[test]
fn unknown_value_advances_to_dark() {
    assert_eq!(next_in_cycle(None), ThemePreference::Dark);
}

#[test]
fn three_steps_return_to_start() {
    for start in CYCLE {
        let mut pref = start;
        for _ in 0..3 {
            pref = next_in_cycle(Some(pref));
        }
        assert_eq!(pref, start);
    }
}

// =============================================================
// Controller
// =============================================================

#[test]
fn current_defaults_to_auto_when_unset() {
    assert_eq!(controller(None).current(), ThemePreference::Auto);
}

#[test]
fn current_reads_auto_for_unknown_value() {
    assert_eq!(controller(Some("sepia")).current(), ThemePreference::Auto);
}

#[test]
fn init_applies_persisted_value() {
    let c = controller(Some("light"));
    assert_eq!(c.init(), ThemePreference::Light);
    assert_eq!(*c.target().writes.borrow(), vec![(ATTR.to_owned(), "light".to_owned())]);
}

#[test]
fn init_applies_auto_when_unset() {
    let c = controller(None);
    c.init();
    assert_eq!(c.target().last().as_deref(), Some("auto"));
}

#[test]
fn init_does_not_write_storage() {
    let c = controller(None);
    c.init();
    assert_eq!(c.store().get(KEY), None);
}

#[test]
fn apply_is_idempotent() {
    let c = controller(None);
    c.apply(ThemePreference::Dark);
    c.apply(ThemePreference::Dark);
    assert_eq!(c.target().last().as_deref(), Some("dark"));
    assert_eq!(c.store().get(KEY), None);
}

#[test]
fn advance_from_light_yields_auto() {
    let c = controller(Some("light"));
    assert_eq!(c.advance(), ThemePreference::Auto);
    assert_eq!(c.store().get(KEY).as_deref(), Some("auto"));
    assert_eq!(c.target().last().as_deref(), Some("auto"));
}

#[test]
fn advance_from_auto_yields_dark() {
    assert_eq!(controller(Some("auto")).advance(), ThemePreference::Dark);
}

#[test]
fn advance_from_dark_yields_light() {
    assert_eq!(controller(Some("dark")).advance(), ThemePreference::Light);
}

#[test]
fn advance_from_unset_yields_dark() {
    let c = controller(None);
    assert_eq!(c.advance(), ThemePreference::Dark);
    assert_eq!(c.store().get(KEY).as_deref(), Some("dark"));
}

#[test]
fn advance_from_unknown_normalizes_to_dark_then_cycles() {
    let c = controller(Some("sepia"));
    let seen: Vec<_> = (0..4).map(|_| c.advance()).collect();
    assert_eq!(
        seen,
        vec![ThemePreference::Dark, ThemePreference::Light, ThemePreference::Auto, ThemePreference::Dark]
    );
}

#[test]
fn repeated_advances_cycle_strictly() {
    let c = controller(None);
    let seen: Vec<_> = (0..6).map(|_| c.advance().as_str()).collect();
    assert_eq!(seen, vec!["dark", "light", "auto", "dark", "light", "auto"]);
}

#[test]
fn advance_still_applies_when_storage_write_fails() {
    let c = ThemeController::new(ReadOnlyStore(Some("dark".to_owned())), RecordingRoot::default(), KEY, ATTR);
    assert_eq!(c.advance(), ThemePreference::Light);
    assert_eq!(c.target().last().as_deref(), Some("light"));
}
