//! Shared defaults for the page's DOM contract.

/// `localStorage` key holding the theme preference.
pub const STORAGE_KEY: &str = "vp-theme";

/// Attribute on `<html>` read by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

/// Element id of the theme toggle button.
pub const TOGGLE_ID: &str = "themeToggle";

/// Selector for pre-rendered toasts.
pub const TOAST_SELECTOR: &str = ".toast";

/// Milliseconds a toast stays visible before auto-dismissing.
pub const TOAST_DELAY_MS: u32 = 3500;

/// Selector for preview card containers.
pub const PREVIEW_SELECTOR: &str = ".preview-wrap";

/// Selector for the video inside a preview container.
pub const VIDEO_SELECTOR: &str = ".preview-video";

/// Selector for the static cover image inside a preview container.
pub const OVERLAY_SELECTOR: &str = ".video-overlay";

/// Element id of the optional JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "vp-page-config";
