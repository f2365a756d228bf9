//! Root document component - the complete HTML page.
//!
//! Page shell: header, the fixed section sequence, footer and the floating
//! back-to-top control, followed by the loader for the interaction module.

use leptos::prelude::*;

use super::{
    BackToTop, CardSectionView, CardTone, FaqSectionView, FooterCtaView, GallerySectionView,
    HeroSection, LearnSectionView, SiteHeader,
};
use crate::config::SiteConfig;
use crate::navigation::UiState;
use crate::styles::page_css;
use crate::types::{ContentRegistry, PageSection};

/// The complete HTML document.
#[component]
pub fn PageDocument(content: ContentRegistry, state: UiState, config: SiteConfig) -> impl IntoView {
    let threshold = config.scroll_threshold_px.to_string();
    let sections = PageSection::ORDER
        .into_iter()
        .map(|section| render_section(section, &content))
        .collect::<Vec<_>>();

    view! {
        <html lang=config.lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{config.title}</title>
                <style>{page_css()}</style>
            </head>
            <body data-scroll-threshold=threshold>
                <div class="backdrop" aria-hidden="true">
                    <div class="glow glow-sky"></div>
                    <div class="glow glow-indigo"></div>
                    <div class="glow glow-cyan"></div>
                </div>
                <SiteHeader
                    brand=content.brand.clone()
                    sections=content.sections.clone()
                    menu_open=state.show_mobile_menu()
                />
                {sections}
                <BackToTop visible=state.show_back_to_top() />
                <InteractionScript module=config.wasm_module />
            </body>
        </html>
    }
}

fn render_section(section: PageSection, content: &ContentRegistry) -> AnyView {
    let anchor = section.anchor().unwrap_or_default();
    let labels = content.labels.clone();
    match section {
        PageSection::Hero => view! { <HeroSection anchor=anchor hero=content.hero.clone() /> }.into_any(),
        PageSection::What => view! {
            <CardSectionView
                anchor=anchor
                section=content.what.clone()
                labels=labels
                tone=CardTone::Sky
            />
        }
        .into_any(),
        PageSection::Why => view! {
            <CardSectionView
                anchor=anchor
                section=content.why.clone()
                labels=labels
                tone=CardTone::Indigo
                banded=true
            />
        }
        .into_any(),
        PageSection::Types => view! {
            <CardSectionView
                anchor=anchor
                section=content.types.clone()
                labels=labels
                tone=CardTone::Cyan
            />
        }
        .into_any(),
        PageSection::Learn => view! {
            <LearnSectionView anchor=anchor section=content.learn.clone() labels=labels />
        }
        .into_any(),
        PageSection::Gallery => view! {
            <GallerySectionView anchor=anchor section=content.gallery.clone() />
        }
        .into_any(),
        PageSection::Faq => view! { <FaqSectionView anchor=anchor section=content.faq.clone() /> }
            .into_any(),
        PageSection::FooterCta => view! { <FooterCtaView footer=content.footer.clone() /> }.into_any(),
    }
}

/// Loads the browser interaction module when one is configured.
#[component]
fn InteractionScript(module: Option<String>) -> impl IntoView {
    module.map(|url| view! { <script type="module">{module_loader(&url)}</script> })
}

/// ES module snippet importing the wasm-bindgen glue and running its init.
pub fn module_loader(url: &str) -> String {
    // JSON string syntax is valid JS string syntax.
    let quoted = serde_json::Value::from(url).to_string();
    format!("import init from {quoted};\ninit();")
}
