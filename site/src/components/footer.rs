use leptos::prelude::*;

use crate::hooks::BACK_TO_TOP_ID;
use crate::types::{CtaLink, FooterCta};

/// Call-to-action link styled as a button.
#[component]
pub fn CtaButton(
    link: CtaLink,
    /// Outlined instead of filled
    #[prop(default = false)]
    outline: bool,
) -> impl IntoView {
    let class = if outline { "btn btn-outline" } else { "btn btn-primary" };
    view! { <a href=link.href class=class>{link.label}</a> }
}

/// Closing call-to-action.
#[component]
pub fn FooterCtaView(footer: FooterCta) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-bar">
                <div>
                    <p class="footer-heading">{footer.heading}</p>
                    <p class="footer-tagline">{footer.tagline}</p>
                </div>
                <div class="cta-row">
                    <CtaButton link=footer.primary />
                    <CtaButton link=footer.secondary outline=true />
                </div>
            </div>
        </footer>
    }
}

/// Floating "back to top" control, shown only past the scroll threshold.
#[component]
pub fn BackToTop(#[prop(default = false)] visible: bool) -> impl IntoView {
    let concealed = !visible;
    view! {
        <button
            id=BACK_TO_TOP_ID
            class="back-to-top"
            type="button"
            aria-label="Back to top"
            hidden=concealed
        >
            "↑"
        </button>
    }
}
