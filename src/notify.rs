//! Auto-dismissing toasts.
//!
//! The server renders flash messages as toast markup; the widget library owns
//! the show/hide animation and the dismiss timer. This module only asks the
//! library to construct each toast with a delay and show it, once, at load.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Options passed to the toast widget constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastOptions {
    /// Milliseconds before the toast hides itself.
    pub delay_ms: u32,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self { delay_ms: crate::consts::TOAST_DELAY_MS }
    }
}

/// Errors raised by a toast factory.
#[derive(Debug, thiserror::Error)]
pub enum ToastError {
    #[error("toast widget unavailable: {0}")]
    Unavailable(String),
}

/// A constructed toast widget.
pub trait ToastHandle {
    fn show(&self);
}

/// Capability to turn a pre-rendered element into a toast widget.
pub trait ToastFactory {
    type Element;
    type Handle: ToastHandle;

    /// Construct a toast for `element`.
    ///
    /// # Errors
    ///
    /// Returns [`ToastError::Unavailable`] if the widget library is missing or
    /// rejects the element.
    fn construct(&self, element: &Self::Element, options: ToastOptions) -> Result<Self::Handle, ToastError>;
}

/// Construct and show a toast for every element. Returns how many were shown.
///
/// Failures are logged and skipped; each toast runs its own timer.
pub fn show_all<F: ToastFactory>(factory: &F, elements: &[F::Element], options: ToastOptions) -> usize {
    let mut shown = 0;
    for element in elements {
        match factory.construct(element, options) {
            Ok(toast) => {
                toast.show();
                shown += 1;
            }
            Err(err) => log::warn!("toast: {err}"),
        }
    }
    shown
}
