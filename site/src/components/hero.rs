use leptos::prelude::*;

use super::CtaButton;
use crate::types::HeroContent;

/// Identity block at the top of the page.
#[component]
pub fn HeroSection(anchor: &'static str, hero: HeroContent) -> impl IntoView {
    let HeroContent {
        headline_lead,
        headline_highlight,
        headline_tail,
        subtitle,
        primary_cta,
        secondary_cta,
        images,
    } = hero;

    view! {
        <section id=anchor class="hero">
            <div class="container hero-inner">
                <div class="hero-copy" data-reveal="">
                    <h1 class="hero-title">
                        {headline_lead}
                        " "
                        <span class="hero-highlight">{headline_highlight}</span>
                        " "
                        {headline_tail}
                    </h1>
                    <p class="hero-subtitle">{subtitle}</p>
                    <div class="cta-row">
                        <CtaButton link=primary_cta />
                        <CtaButton link=secondary_cta outline=true />
                    </div>
                </div>
                <div class="hero-images" data-reveal="">
                    {images
                        .into_iter()
                        .map(|img| {
                            view! {
                                <img
                                    class="hero-img"
                                    src=img.source_url
                                    alt=img.alt_text
                                    loading="lazy"
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
