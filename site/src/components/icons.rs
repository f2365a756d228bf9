//! Icon set: symbolic [`IconName`] to an inline 24x24 stroke glyph.
//!
//! Every glyph is a list of path strings drawn with `currentColor`, so the
//! icon takes the text colour of whatever card it sits in.

use leptos::prelude::*;

use crate::types::IconName;

/// Renders a glyph from the icon set.
///
/// ```rust,ignore
/// view! { <Icon name=IconName::Cloud /> }
/// ```
#[component]
pub fn Icon(
    /// Which glyph
    name: IconName,
    /// Additional CSS class names
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            class=class
            data-icon=icon_key(name)
            aria-hidden="true"
        >
            {glyph(name)
                .iter()
                .copied()
                .map(|d| view! { <path d=d></path> })
                .collect::<Vec<_>>()}
        </svg>
    }
}

/// Stable identifier of a glyph, used as `data-icon`.
pub fn icon_key(name: IconName) -> &'static str {
    match name {
        IconName::Chip => "chip",
        IconName::Cloud => "cloud",
        IconName::Shield => "shield",
        IconName::Robot => "robot",
        IconName::ArVr => "ar_vr",
        IconName::Blocks => "blocks",
        IconName::Wifi => "wifi",
        IconName::Database => "database",
    }
}

/// Path data of a glyph.
pub fn glyph(name: IconName) -> &'static [&'static str] {
    match name {
        IconName::Chip => ICON_CHIP,
        IconName::Cloud => ICON_CLOUD,
        IconName::Shield => ICON_SHIELD,
        IconName::Robot => ICON_ROBOT,
        IconName::ArVr => ICON_AR_VR,
        IconName::Blocks => ICON_BLOCKS,
        IconName::Wifi => ICON_WIFI,
        IconName::Database => ICON_DATABASE,
    }
}

// =============================================================================
// Glyphs (24x24, 1.5 stroke). Rects, circles and ellipses are written as arcs.
// =============================================================================

/// Chip with pins
pub const ICON_CHIP: &[&str] = &[
    "M9 3v2M15 3v2M9 19v2M15 19v2M3 9h2M3 15h2M19 9h2M19 15h2",
    "M8.75 6.75h6.5a2 2 0 0 1 2 2v6.5a2 2 0 0 1-2 2h-6.5a2 2 0 0 1-2-2v-6.5a2 2 0 0 1 2-2z",
];

/// Cloud outline
pub const ICON_CLOUD: &[&str] = &["M7 18a5 5 0 1 1 .9-9.9A6 6 0 1 1 19 13.5h-1"];

/// Shield
pub const ICON_SHIELD: &[&str] = &["M12 3l7 3v6c0 5-3.5 8-7 9-3.5-1-7-4-7-9V6l7-3z"];

/// Robot head with antenna
pub const ICON_ROBOT: &[&str] = &[
    "M7 7h10a2 2 0 0 1 2 2v6a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
    "M7.5 12a1.5 1.5 0 1 0 3 0a1.5 1.5 0 1 0-3 0",
    "M13.5 12a1.5 1.5 0 1 0 3 0a1.5 1.5 0 1 0-3 0",
    "M12 3v3M8 19v2M16 19v2",
];

/// Headset
pub const ICON_AR_VR: &[&str] = &[
    "M5 8h14a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
    "M7 12h2l1 2 1-2h2l1 2 1-2h2",
];

/// Four blocks
pub const ICON_BLOCKS: &[&str] = &[
    "M4 3h6a1 1 0 0 1 1 1v6a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
    "M14 3h6a1 1 0 0 1 1 1v6a1 1 0 0 1-1 1h-6a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
    "M4 13h6a1 1 0 0 1 1 1v6a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1v-6a1 1 0 0 1 1-1z",
    "M14 13h6a1 1 0 0 1 1 1v6a1 1 0 0 1-1 1h-6a1 1 0 0 1-1-1v-6a1 1 0 0 1 1-1z",
];

/// Wireless arcs
pub const ICON_WIFI: &[&str] = &[
    "M2.5 8.5a15 15 0 0 1 19 0M5 11.5a11 11 0 0 1 14 0M7.5 14.5a7 7 0 0 1 9 0",
    "M10.5 18a1.5 1.5 0 1 0 3 0a1.5 1.5 0 1 0-3 0",
];

/// Stacked database cylinder
pub const ICON_DATABASE: &[&str] = &[
    "M5 5a7 3 0 1 0 14 0a7 3 0 1 0-14 0",
    "M5 5v6c0 1.7 3.1 3 7 3s7-1.3 7-3V5M5 11v6c0 1.7 3.1 3 7 3s7-1.3 7-3v-6",
];

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    const ALL: [IconName; 8] = [
        IconName::Chip,
        IconName::Cloud,
        IconName::Shield,
        IconName::Robot,
        IconName::ArVr,
        IconName::Blocks,
        IconName::Wifi,
        IconName::Database,
    ];

    #[test]
    fn every_icon_has_a_glyph_and_unique_key() {
        let mut keys: Vec<_> = ALL.iter().map(|n| icon_key(*n)).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ALL.len());
        assert!(ALL.iter().all(|n| !glyph(*n).is_empty()));
    }

    #[test]
    fn renders_one_path_per_glyph_part() {
        let html = view! { <Icon name=IconName::Robot /> }.to_html();
        assert!(html.contains("data-icon=\"robot\""));
        assert_eq!(html.matches("<path").count(), ICON_ROBOT.len());
        assert!(html.contains("viewBox=\"0 0 24 24\""));
    }
}
