//! FAQ accordion.
//!
//! Each entry is a native `<details>` element, so its open/closed state
//! belongs to the element itself and nothing else tracks it.

use leptos::prelude::*;

use crate::types::{FaqEntry, FaqSection};

/// One collapsible question.
#[component]
pub fn FaqItem(entry: FaqEntry, index: usize) -> impl IntoView {
    view! {
        <details class="faq-item" data-key=index.to_string()>
            <summary class="faq-question">
                <span>{entry.question}</span>
                <span class="faq-caret" aria-hidden="true">"⌄"</span>
            </summary>
            <p class="faq-answer">{entry.answer}</p>
        </details>
    }
}

/// The `#faq` section.
#[component]
pub fn FaqSectionView(anchor: &'static str, section: FaqSection) -> impl IntoView {
    view! {
        <section id=anchor class="section">
            <div class="container" data-reveal="">
                <h2 class="section-title">{section.heading}</h2>
                <div class="faq-list">
                    {section
                        .entries
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <FaqItem entry=entry index=index /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
