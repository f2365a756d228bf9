//! Page data types.
//!
//! Everything here is plain immutable data: defined once, read at render
//! time, never mutated. The types are:
//!
//! - **Serializable** - the registry can be exported to and loaded from JSON
//! - **Clone-friendly** - components take owned props, like any Leptos view
//! - **Default-able** - partial registries in tests via `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use digitech_site::types::{CategoryCard, IconName};
//!
//! let card = CategoryCard {
//!     icon: IconName::Cloud,
//!     title: "Cloud".into(),
//!     description: "Rent computers by the minute".into(),
//!     skills: Some("Docker, CI/CD".into()),
//!     ..Default::default()
//! };
//! assert!(card.related_jobs.is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Symbolic name of a glyph in the icon set.
///
/// The glyphs themselves live in [`crate::components::icons`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconName {
    /// Integrated circuit
    #[default]
    Chip,
    /// Cloud outline
    Cloud,
    /// Shield (security)
    Shield,
    /// Robot head
    Robot,
    /// Headset (AR/VR)
    ArVr,
    /// Four blocks
    Blocks,
    /// Wireless signal
    Wifi,
    /// Database cylinder
    Database,
}

/// One navigation entry. `id` doubles as the anchor fragment and the
/// iteration key, so it must be unique within the registry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    /// Anchor id without the leading `#`
    pub id: String,
    /// Display text
    pub label: String,
}

impl SectionDescriptor {
    /// Fragment link for this entry, e.g. `#faq`.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Card used by the "what", "why" and "types" sections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCard {
    /// Glyph shown next to the title
    pub icon: IconName,
    /// Card heading (always present)
    pub title: String,
    /// Body text (always present)
    pub description: String,
    /// Skills line, shown only when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    /// Related jobs line, shown only when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_jobs: Option<String>,
}

/// One step of the learning roadmap. Point order is display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStage {
    /// Stage heading
    pub title: String,
    /// Ordered guidance points
    pub points: Vec<String>,
    /// Suggested next action
    pub action_hint: String,
}

/// Externally hosted image. Reachability is never checked; a broken URL is
/// left to the browser's own fallback.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Absolute image URL
    pub source_url: String,
    /// Alt text, also used as the visible caption
    pub alt_text: String,
}

/// Question/answer pair for the FAQ accordion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Question, shown in the summary row
    pub question: String,
    /// Answer, shown when expanded
    pub answer: String,
}

/// Link rendered as a call-to-action button.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaLink {
    /// Target, usually a fragment like `#learn`
    pub href: String,
    /// Button text
    pub label: String,
}

/// Paragraph with an optional emphasised lead term.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intro {
    /// Emphasised term placed before the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<String>,
    /// Remaining paragraph text
    pub text: String,
}

/// Site brand shown at the left of the header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Short badge text, e.g. `DT`
    pub badge: String,
    /// Site name
    pub name: String,
}

/// Hero block copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    /// Headline text before the highlight
    pub headline_lead: String,
    /// Highlighted phrase
    pub headline_highlight: String,
    /// Headline text after the highlight
    pub headline_tail: String,
    /// Line under the headline
    pub subtitle: String,
    /// Filled CTA button
    pub primary_cta: CtaLink,
    /// Outlined CTA button
    pub secondary_cta: CtaLink,
    /// Images shown under the CTAs
    pub images: Vec<GalleryImage>,
}

/// A heading plus a grid of [`CategoryCard`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSection {
    /// Section heading
    pub heading: String,
    /// Optional paragraph between heading and grid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<Intro>,
    /// Cards in display order
    pub cards: Vec<CategoryCard>,
}

/// Two-column list of learning resources shown under the roadmap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePanel {
    /// Panel heading
    pub heading: String,
    /// Bullet columns, left to right
    pub columns: Vec<Vec<String>>,
}

/// The roadmap section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnSection {
    /// Section heading
    pub heading: String,
    /// Stages in order; the 1-based position is shown as a badge
    pub stages: Vec<RoadmapStage>,
    /// Resource panel under the stages
    pub resources: ResourcePanel,
}

/// Image grid section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GallerySection {
    /// Section heading
    pub heading: String,
    /// Line under the heading
    pub subtitle: String,
    /// Images in display order
    pub images: Vec<GalleryImage>,
}

/// FAQ accordion section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqSection {
    /// Section heading
    pub heading: String,
    /// Entries in display order
    pub entries: Vec<FaqEntry>,
}

/// Closing call-to-action in the footer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterCta {
    /// Bold first line
    pub heading: String,
    /// Smaller second line
    pub tagline: String,
    /// Filled button
    pub primary: CtaLink,
    /// Outlined button
    pub secondary: CtaLink,
}

/// Small fixed strings the renderers need besides the content itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    /// Prefix of the skills line on category cards
    pub skills: String,
    /// Prefix of the related-jobs line on category cards
    pub related_jobs: String,
    /// Prefix of the roadmap stage badge, followed by the 1-based number
    pub stage: String,
    /// Prefix of the roadmap action hint
    pub action: String,
}

/// The whole page, as data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRegistry {
    /// Header brand
    pub brand: Brand,
    /// Navigation entries (desktop and mobile share them)
    pub sections: Vec<SectionDescriptor>,
    /// Hero block
    pub hero: HeroContent,
    /// "What is digital technology"
    pub what: CardSection,
    /// "Why it matters"
    pub why: CardSection,
    /// "What kinds are there"
    pub types: CardSection,
    /// Roadmap and resources
    pub learn: LearnSection,
    /// Image gallery
    pub gallery: GallerySection,
    /// FAQ
    pub faq: FaqSection,
    /// Footer call-to-action
    pub footer: FooterCta,
    /// Renderer labels
    pub labels: Labels,
}

/// Top-level regions of the page, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageSection {
    /// Identity/hero block (`#top`)
    Hero,
    /// `#what`
    What,
    /// `#why`
    Why,
    /// `#types`
    Types,
    /// `#learn`
    Learn,
    /// `#gallery`
    Gallery,
    /// `#faq`
    Faq,
    /// Footer call-to-action (no anchor)
    FooterCta,
}

impl PageSection {
    /// Fixed render order of the page.
    pub const ORDER: [PageSection; 8] = [
        PageSection::Hero,
        PageSection::What,
        PageSection::Why,
        PageSection::Types,
        PageSection::Learn,
        PageSection::Gallery,
        PageSection::Faq,
        PageSection::FooterCta,
    ];

    /// Anchor id the section renders, if any.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            PageSection::Hero => Some("top"),
            PageSection::What => Some("what"),
            PageSection::Why => Some("why"),
            PageSection::Types => Some("types"),
            PageSection::Learn => Some("learn"),
            PageSection::Gallery => Some("gallery"),
            PageSection::Faq => Some("faq"),
            PageSection::FooterCta => None,
        }
    }

    /// Look a section up by its anchor id.
    pub fn from_anchor(id: &str) -> Option<PageSection> {
        Self::ORDER.into_iter().find(|s| s.anchor() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_unique_and_footer_has_none() {
        let anchors: Vec<_> = PageSection::ORDER.iter().filter_map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            vec!["top", "what", "why", "types", "learn", "gallery", "faq"]
        );
        assert_eq!(PageSection::FooterCta.anchor(), None);
    }

    #[test]
    fn from_anchor_round_trips() {
        for section in PageSection::ORDER {
            if let Some(anchor) = section.anchor() {
                assert_eq!(PageSection::from_anchor(anchor), Some(section));
            }
        }
        assert_eq!(PageSection::from_anchor("nope"), None);
    }

    #[test]
    fn descriptor_href_prefixes_hash() {
        let s = SectionDescriptor {
            id: "faq".into(),
            label: "FAQ".into(),
        };
        assert_eq!(s.href(), "#faq");
    }

    #[test]
    fn optional_card_lines_are_skipped_in_json() {
        let card = CategoryCard {
            title: "t".into(),
            description: "d".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&card).unwrap();
        assert!(!json.contains("skills"));
        assert!(!json.contains("related_jobs"));
        assert!(json.contains("\"icon\":\"chip\""));
    }
}
