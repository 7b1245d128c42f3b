//! Page behavior for the video portal, compiled to WebAssembly.
//!
//! The crate owns three small, independent behaviors that run once the page is
//! parsed: the persisted three-state theme toggle, auto-dismissing toasts, and
//! hover/touch video previews inside cards. Everything except [`browser`] is
//! plain Rust over small capability traits, so it is tested natively without a
//! DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme preference cycle and the [`theme::ThemeController`] |
//! | [`store`] | Preference store trait and the in-memory store |
//! | [`notify`] | Toast capability traits and one-shot activation |
//! | [`preview`] | Per-widget preview state machine |
//! | [`config`] | DOM contract constants and JSON overrides |
//! | [`consts`] | Shared defaults (storage key, selectors, toast delay) |
//! | `browser` | `web-sys` bindings and the wasm entry point (`hydrate` only) |

pub mod config;
pub mod consts;
pub mod notify;
pub mod preview;
pub mod store;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod browser;
