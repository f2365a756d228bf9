//! Sticky header: brand, desktop nav, menu toggle and the mobile menu panel.

use leptos::prelude::*;

use crate::hooks::{MENU_TOGGLE_ID, MOBILE_MENU_ID};
use crate::types::{Brand, SectionDescriptor};

/// The page header. `menu_open` decides whether the mobile panel starts
/// visible; the browser module flips it afterwards.
#[component]
pub fn SiteHeader(
    brand: Brand,
    sections: Vec<SectionDescriptor>,
    /// Initial state of the mobile menu
    #[prop(default = false)]
    menu_open: bool,
) -> impl IntoView {
    let expanded = if menu_open { "true" } else { "false" };
    let collapsed = !menu_open;
    let desktop = sections.clone();

    view! {
        <header class="site-header">
            <div class="container header-bar">
                <a href="#top" class="brand">
                    <span class="brand-badge">{brand.badge}</span>
                    <span class="brand-name">{brand.name}</span>
                </a>
                <nav class="nav-desktop" aria-label="Sections">
                    {desktop
                        .into_iter()
                        .map(|s| view! { <a href=s.href() class="nav-link">{s.label.clone()}</a> })
                        .collect::<Vec<_>>()}
                </nav>
                <button
                    id=MENU_TOGGLE_ID
                    class="menu-toggle"
                    type="button"
                    aria-label="Toggle menu"
                    aria-controls=MOBILE_MENU_ID
                    aria-expanded=expanded
                >
                    "☰"
                </button>
            </div>
            <div id=MOBILE_MENU_ID class="mobile-menu" hidden=collapsed>
                <nav class="mobile-nav" aria-label="Sections">
                    {sections
                        .into_iter()
                        .map(|s| {
                            view! {
                                <a href=s.href() class="mobile-link" data-close-menu="">
                                    {s.label.clone()}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </div>
        </header>
    }
}
