//! CSS for the page.
//!
//! Dark slate background, sky/indigo/cyan accents, soft neon glows. No
//! framework, no build step: the stylesheet is inlined into `<head>`.
//!
//! # Customization
//!
//! ```rust
//! use digitech_site::styles::page_css;
//!
//! let my_css = ".card { border-radius: 0; }";
//! let combined = format!("{}\n{}", page_css(), my_css);
//! assert!(combined.ends_with(my_css));
//! ```

use crate::reveal::FADE_UP;

/// Base stylesheet (layout, typography, components).
pub const PAGE_CSS: &str = r#"
:root {
    --bg: #020617;
    --bg-band: rgba(15, 23, 42, 0.4);
    --bg-card: rgba(15, 23, 42, 0.6);
    --bg-card-deep: rgba(2, 6, 23, 0.6);
    --text: #f1f5f9;
    --text-dim: #cbd5e1;
    --text-muted: #94a3b8;
    --border: #1e293b;
    --border-strong: #334155;
    --sky: #7dd3fc;
    --indigo: #a5b4fc;
    --cyan: #67e8f9;
    --grad: linear-gradient(90deg, #0284c7, #4f46e5);
    --radius: 1rem;
    --container-max: 72rem;
    --font: "Noto Sans Thai", "IBM Plex Sans Thai", system-ui, sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }

[hidden] { display: none !important; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    min-height: 100vh;
    font-family: var(--font);
    color: var(--text);
    background: linear-gradient(180deg, #020617 0%, #020617 50%, #0f172a 100%);
}

::selection { background: rgba(2, 132, 199, 0.4); }

a { color: inherit; text-decoration: none; }

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1rem;
}

/* Glow backdrop */
.backdrop { pointer-events: none; position: fixed; inset: 0; z-index: -10; }
.glow { position: absolute; border-radius: 9999px; filter: blur(64px); }
.glow-sky { top: -8rem; left: -5rem; width: 24rem; height: 24rem; background: rgba(2, 132, 199, 0.2); }
.glow-indigo { top: 10rem; right: 0; width: 28rem; height: 28rem; background: rgba(79, 70, 229, 0.2); }
.glow-cyan { bottom: 0; left: 50%; transform: translateX(-50%); width: 16rem; height: 16rem; background: rgba(6, 182, 212, 0.1); filter: blur(40px); }

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    backdrop-filter: blur(8px);
    background: rgba(15, 23, 42, 0.6);
    border-bottom: 1px solid var(--border);
}
.header-bar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 0.75rem;
    padding-bottom: 0.75rem;
}
.brand { display: flex; align-items: center; gap: 0.5rem; font-weight: 600; color: #fff; }
.brand-badge {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 2rem;
    height: 2rem;
    border-radius: 0.75rem;
    background: var(--grad);
    box-shadow: 0 10px 15px rgba(12, 74, 110, 0.4);
    font-size: 0.8rem;
}
.nav-desktop { display: none; gap: 1.5rem; font-size: 0.875rem; }
.nav-link { color: var(--text-dim); transition: color 0.15s; }
.nav-link:hover { color: #fff; }
.menu-toggle {
    padding: 0.5rem 0.7rem;
    border-radius: 0.75rem;
    border: 1px solid var(--border-strong);
    background: transparent;
    color: var(--text-dim);
    font-size: 1rem;
    cursor: pointer;
}
.mobile-menu {
    border-top: 1px solid var(--border);
    padding: 0.5rem 1rem 0.75rem;
    background: rgba(15, 23, 42, 0.8);
}
.mobile-nav { display: flex; flex-direction: column; gap: 0.5rem; }
.mobile-link { padding: 0.5rem 0; color: var(--text-dim); }

@media (min-width: 768px) {
    .nav-desktop { display: flex; }
    .menu-toggle, .mobile-menu { display: none; }
}

/* Hero */
.hero { position: relative; overflow: hidden; }
.hero-inner { padding-top: 5rem; padding-bottom: 5rem; }
.hero-copy { max-width: 48rem; }
.hero-title { font-size: clamp(1.9rem, 5vw, 3rem); font-weight: 800; line-height: 1.2; margin: 0; }
.hero-highlight {
    background: linear-gradient(90deg, #38bdf8, #67e8f9, #818cf8);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
    filter: drop-shadow(0 1px 6px rgba(14, 165, 233, 0.5));
}
.hero-subtitle { margin-top: 1rem; color: var(--text-dim); font-size: 1.125rem; }
.hero-images { margin-top: 2.5rem; display: grid; gap: 1.5rem; }
.hero-img { width: 100%; height: 16rem; object-fit: cover; border-radius: var(--radius); box-shadow: 0 20px 25px rgba(0, 0, 0, 0.4); }

/* Buttons */
.cta-row { margin-top: 1.5rem; display: flex; flex-wrap: wrap; gap: 0.75rem; }
.btn { padding: 0.75rem 1.25rem; border-radius: var(--radius); font-weight: 500; }
.btn-primary { background: var(--grad); color: #fff; box-shadow: 0 10px 15px rgba(12, 74, 110, 0.3); }
.btn-outline { border: 1px solid var(--border-strong); color: var(--text); }
.btn-outline:hover { background: rgba(30, 41, 59, 0.6); }

/* Sections */
.section { padding: 4rem 0; }
.section.band { background: var(--bg-band); border-top: 1px solid var(--border); border-bottom: 1px solid var(--border); }
.section-title { font-size: clamp(1.5rem, 3vw, 1.875rem); font-weight: 700; margin: 0; }
.section-intro { margin-top: 1rem; color: var(--text-dim); line-height: 1.7; }
.accent { color: var(--sky); }

/* Cards */
.card-grid, .stage-grid, .gallery-grid { margin-top: 1.5rem; display: grid; gap: 1rem; }
.card {
    padding: 1.25rem;
    border-radius: var(--radius);
    border: 1px solid var(--border);
    background: var(--bg-card);
}
.band .card { background: var(--bg-card-deep); }
.card-head { display: flex; align-items: center; gap: 0.75rem; }
.card-title { font-weight: 600; margin: 0; font-size: 1rem; }
.card-desc, .card-line { margin: 0.5rem 0 0; font-size: 0.875rem; color: var(--text-dim); }
.card-label { font-weight: 500; color: var(--sky); }
.icon { width: 1.5rem; height: 1.5rem; display: block; }
.tone-sky .card-icon { color: var(--sky); }
.tone-indigo .card-icon { color: var(--indigo); }
.tone-cyan .card-icon { color: var(--cyan); }
.tone-cyan:hover { border-color: rgba(3, 105, 161, 0.4); }

/* Roadmap */
.stage-title { display: flex; align-items: center; justify-content: space-between; gap: 0.5rem; font-weight: 600; margin: 0; font-size: 1rem; }
.stage-badge { font-size: 0.75rem; padding: 0.25rem 0.5rem; border-radius: 9999px; background: var(--border); border: 1px solid var(--border-strong); white-space: nowrap; }
.stage-points { margin: 0.75rem 0 0; padding-left: 1.25rem; font-size: 0.875rem; color: var(--text-dim); }
.stage-points li + li { margin-top: 0.25rem; }
.resource-panel { margin-top: 2rem; padding: 1.25rem; border-radius: var(--radius); border: 1px solid var(--border); background: var(--bg-card); }
.resource-heading { margin: 0; font-weight: 600; color: var(--sky); font-size: 1rem; }
.resource-columns { margin-top: 0.75rem; display: grid; gap: 0.75rem; font-size: 0.875rem; color: var(--text-dim); }
.resource-list { margin: 0; padding-left: 1.25rem; }

/* Gallery */
.figure { position: relative; overflow: hidden; margin: 0; border-radius: var(--radius); }
.figure-img { display: block; width: 100%; height: 14rem; object-fit: cover; transition: transform 0.3s; }
.figure:hover .figure-img { transform: scale(1.05); }
.figure-caption {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0;
    padding: 0.75rem;
    font-size: 0.75rem;
    color: #e2e8f0;
    background: linear-gradient(0deg, rgba(2, 6, 23, 0.8), transparent);
}

/* FAQ */
.faq-list { margin-top: 1.5rem; border-radius: var(--radius); border: 1px solid var(--border); background: var(--bg-card); }
.faq-item { padding: 1.25rem; }
.faq-item + .faq-item { border-top: 1px solid var(--border); }
.faq-question { cursor: pointer; list-style: none; display: flex; align-items: center; justify-content: space-between; font-weight: 500; }
.faq-question::-webkit-details-marker { display: none; }
.faq-caret { color: var(--text-muted); transition: transform 0.2s; }
.faq-item[open] .faq-caret { transform: rotate(180deg); }
.faq-answer { margin: 0.5rem 0 0; font-size: 0.875rem; color: var(--text-dim); }

/* Footer */
.site-footer { border-top: 1px solid var(--border); }
.footer-bar { padding-top: 2.5rem; padding-bottom: 2.5rem; display: flex; flex-direction: column; align-items: center; justify-content: space-between; gap: 1rem; }
.footer-heading { margin: 0; font-weight: 600; }
.footer-tagline { margin: 0.25rem 0 0; font-size: 0.875rem; color: var(--text-dim); }
.site-footer .cta-row { margin-top: 0; }

/* Back to top */
.back-to-top {
    position: fixed;
    right: 1.5rem;
    bottom: 1.5rem;
    padding: 0.75rem 1rem;
    border-radius: var(--radius);
    border: 1px solid var(--border-strong);
    background: rgba(15, 23, 42, 0.8);
    backdrop-filter: blur(8px);
    color: #e2e8f0;
    cursor: pointer;
}

@media (min-width: 640px) {
    .card-grid, .gallery-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 768px) {
    .hero-images, .resource-columns { grid-template-columns: repeat(2, 1fr); }
    .footer-bar { flex-direction: row; }
}

@media (min-width: 1024px) {
    .card-grid, .stage-grid, .gallery-grid { grid-template-columns: repeat(3, 1fr); }
}

@media (prefers-reduced-motion: reduce) {
    html { scroll-behavior: auto; }
}
"#;

/// Base stylesheet followed by the fade-up rules.
pub fn page_css() -> String {
    format!("{}\n{}", PAGE_CSS, FADE_UP.css())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_css_has_base_and_reveal_rules() {
        let css = page_css();
        assert!(css.starts_with(PAGE_CSS));
        assert!(css.contains("[hidden] { display: none !important; }"));
        assert!(css.contains(".reveal-ready [data-reveal]"));
    }

    #[test]
    fn css_is_safe_as_raw_style_text() {
        // The stylesheet is emitted as a text child of <style>.
        let css = page_css();
        assert!(!css.contains('<'));
        assert!(!css.contains('>'));
        assert!(!css.contains('&'));
    }
}
