//! # digitech-site
//!
//! "Digital Tech 101": a single educational landing page, rendered to static
//! HTML with [Leptos](https://leptos.dev/) SSR.
//!
//! All copy, cards, roadmap stages, images and FAQ entries live in a
//! [`ContentRegistry`](types::ContentRegistry). The only runtime state is
//! two flags owned by the [`NavigationController`](navigation::NavigationController):
//! mobile menu open, and scrolled past the "back to top" threshold. The
//! companion `digitech-wasm` crate drives that controller from real browser
//! events.
//!
//! ## Quick Start
//!
//! ```rust
//! use digitech_site::{content, render_page, config::SiteConfig, navigation::UiState};
//!
//! let html = render_page(content::builtin(), UiState::default(), &SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("id=\"faq\""));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - page data model
//! - [`content`] - built-in registry, JSON loading and validation
//! - [`navigation`] - menu/scroll state machine and its browser seams
//! - [`reveal`] - one-shot fade-up flag
//! - [`components`] - Leptos components
//! - [`styles`] - CSS
//! - [`hooks`] - DOM ids shared with the wasm module
//! - [`config`] - `digitech.toml`

#![warn(missing_docs)]

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod hooks;
pub mod navigation;
pub mod reveal;
pub mod styles;
pub mod types;

use std::path::Path;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::{debug, info};

use config::SiteConfig;
use error::{Result, SiteError};
use navigation::UiState;
use types::ContentRegistry;

/// Render the complete page for a registry and UI state.
///
/// Pure: the same inputs always produce byte-identical output.
///
/// # Example
///
/// ```rust
/// use digitech_site::{content, render_page, config::SiteConfig, navigation::UiState};
///
/// let open = UiState { menu_open: true, ..Default::default() };
/// let html = render_page(content::builtin(), open, &SiteConfig::default());
/// assert!(html.contains("aria-expanded=\"true\""));
/// ```
pub fn render_page(content: &ContentRegistry, state: UiState, config: &SiteConfig) -> String {
    debug!(
        sections = content.sections.len(),
        ?state,
        interactive = config.wasm_module.is_some(),
        "rendering page"
    );

    let doc = view! {
        <PageDocument content=content.clone() state=state config=config.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Write rendered HTML to `path`, creating parent directories as needed.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    let to_write_error = |source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    std::fs::write(path, html).map_err(to_write_error)?;
    info!(path = %path.display(), bytes = html.len(), "page written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn renders_builtin_page() {
        let html = render_page(content::builtin(), UiState::default(), &SiteConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"th\""));
        assert!(html.contains("<title>Digital Tech 101</title>"));
        assert!(html.contains("data-scroll-threshold=\"400\""));
    }

    #[test]
    fn static_page_has_no_module_script() {
        let html = render_page(content::builtin(), UiState::default(), &SiteConfig::default());
        assert!(!html.contains("type=\"module\""));
    }

    #[test]
    fn configured_module_is_loaded() {
        let config = SiteConfig {
            wasm_module: Some("/pkg/digitech_wasm.js".into()),
            ..Default::default()
        };
        let html = render_page(content::builtin(), UiState::default(), &config);
        assert!(html.contains("type=\"module\""));
        assert!(html.contains("/pkg/digitech_wasm.js"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let config = SiteConfig::default();
        let first = render_page(content::builtin(), UiState::default(), &config);
        let second = render_page(content::builtin(), UiState::default(), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn write_page_creates_parent_dirs() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("dist").join("index.html");
        write_page(&path, "<!DOCTYPE html>").expect("write page");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<!DOCTYPE html>");
    }
}
