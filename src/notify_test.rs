use std::cell::RefCell;
use std::rc::Rc;

use super::*;

type Log = Rc<RefCell<Vec<String>>>;

struct FakeToast {
    name: &'static str,
    log: Log,
}

impl ToastHandle for FakeToast {
    fn show(&self) {
        self.log.borrow_mut().push(format!("show {}", self.name));
    }
}

/// Rejects elements whose name starts with `broken`.
#[derive(Default)]
struct FakeLibrary {
    log: Log,
}

impl ToastFactory for FakeLibrary {
    type Element = &'static str;
    type Handle = FakeToast;

    fn construct(&self, element: &&'static str, options: ToastOptions) -> Result<FakeToast, ToastError> {
        if element.starts_with("broken") {
            return Err(ToastError::Unavailable("bootstrap is not defined".to_owned()));
        }
        self.log.borrow_mut().push(format!("new {element} {}", options.delay_ms));
        Ok(FakeToast { name: element, log: Rc::clone(&self.log) })
    }
}

#[test]
fn default_delay_is_3500ms() {
    assert_eq!(ToastOptions::default().delay_ms, 3500);
}

#[test]
fn no_elements_is_noop() {
    let lib = FakeLibrary::default();
    assert_eq!(show_all(&lib, &[], ToastOptions::default()), 0);
    assert!(lib.log.borrow().is_empty());
}

#[test]
fn each_toast_is_constructed_with_delay_then_shown() {
    let lib = FakeLibrary::default();
    let shown = show_all(&lib, &["saved", "welcome"], ToastOptions::default());
    assert_eq!(shown, 2);
    assert_eq!(
        *lib.log.borrow(),
        vec!["new saved 3500", "show saved", "new welcome 3500", "show welcome"]
    );
}

#[test]
fn construction_failure_skips_only_that_toast() {
    let lib = FakeLibrary::default();
    let shown = show_all(&lib, &["broken", "ok"], ToastOptions { delay_ms: 1000 });
    assert_eq!(shown, 1);
    assert_eq!(*lib.log.borrow(), vec!["new ok 1000", "show ok"]);
}
