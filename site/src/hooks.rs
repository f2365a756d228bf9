//! DOM hooks shared by the server-rendered markup and the wasm module.
//!
//! The renderer stamps these ids and attributes into the page; the browser
//! module looks them up to attach listeners. Change both sides together.

/// `id` of the mobile menu toggle button.
pub const MENU_TOGGLE_ID: &str = "menu-toggle";

/// `id` of the mobile menu panel.
pub const MOBILE_MENU_ID: &str = "mobile-menu";

/// `id` of the floating "back to top" button.
pub const BACK_TO_TOP_ID: &str = "back-to-top";

/// Attribute on links that close the mobile menu when followed.
pub const CLOSE_MENU_ATTR: &str = "data-close-menu";

/// Attribute on `<body>` carrying the scroll threshold in pixels.
pub const SCROLL_THRESHOLD_ATTR: &str = "data-scroll-threshold";

/// Attribute marking a fade-up block.
pub const REVEAL_ATTR: &str = "data-reveal";

/// Class added to a fade-up block once revealed.
pub const REVEALED_CLASS: &str = "is-revealed";

/// Class on `<html>` enabling the hidden initial state of fade-up blocks.
pub const REVEAL_READY_CLASS: &str = "reveal-ready";
