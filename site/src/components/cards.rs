//! Category cards and the card-grid sections ("what", "why", "types").

use leptos::prelude::*;

use super::Icon;
use crate::types::{CardSection, CategoryCard, Intro, Labels};

/// Accent colour of a card grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTone {
    /// Sky blue accent
    Sky,
    /// Indigo accent
    Indigo,
    /// Cyan accent
    Cyan,
}

impl CardTone {
    fn class(self) -> &'static str {
        match self {
            CardTone::Sky => "card tone-sky",
            CardTone::Indigo => "card tone-indigo",
            CardTone::Cyan => "card tone-cyan",
        }
    }
}

/// One category card. Every field of the entry ends up in the markup; the
/// skills and jobs lines only when present.
#[component]
pub fn CategoryCardView(
    card: CategoryCard,
    /// Position in the grid, used as the stable key
    index: usize,
    labels: Labels,
    tone: CardTone,
) -> impl IntoView {
    let CategoryCard {
        icon,
        title,
        description,
        skills,
        related_jobs,
    } = card;
    let Labels {
        skills: skills_label,
        related_jobs: jobs_label,
        ..
    } = labels;

    view! {
        <article class=tone.class() data-reveal="" data-key=index.to_string()>
            <div class="card-head">
                <span class="card-icon">
                    <Icon name=icon />
                </span>
                <h3 class="card-title">{title}</h3>
            </div>
            <p class="card-desc">{description}</p>
            {skills
                .map(|s| {
                    view! {
                        <p class="card-line" data-line="skills">
                            <span class="card-label">{skills_label}</span>
                            " "
                            {s}
                        </p>
                    }
                })}
            {related_jobs
                .map(|j| {
                    view! {
                        <p class="card-line" data-line="jobs">
                            <span class="card-label">{jobs_label}</span>
                            " "
                            {j}
                        </p>
                    }
                })}
        </article>
    }
}

/// Paragraph with an optional emphasised lead term.
#[component]
pub fn IntroText(intro: Intro) -> impl IntoView {
    view! {
        <p class="section-intro">
            {intro
                .emphasis
                .map(|e| view! { <strong class="accent">{e}</strong> " " })}
            {intro.text}
        </p>
    }
}

/// A full card-grid section.
#[component]
pub fn CardSectionView(
    anchor: &'static str,
    section: CardSection,
    labels: Labels,
    tone: CardTone,
    /// Draw the section on the darker band background
    #[prop(default = false)]
    banded: bool,
) -> impl IntoView {
    let CardSection {
        heading,
        intro,
        cards,
    } = section;
    let class = if banded { "section band" } else { "section" };

    view! {
        <section id=anchor class=class>
            <div class="container" data-reveal="">
                <h2 class="section-title">{heading}</h2>
                {intro.map(|intro| view! { <IntroText intro=intro /> })}
                <div class="card-grid">
                    {cards
                        .into_iter()
                        .enumerate()
                        .map(|(index, card)| {
                            view! {
                                <CategoryCardView
                                    card=card
                                    index=index
                                    labels=labels.clone()
                                    tone=tone
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IconName;
    use leptos::tachys::view::RenderHtml;

    fn labels() -> Labels {
        Labels {
            skills: "Skills:".into(),
            related_jobs: "Jobs:".into(),
            ..Default::default()
        }
    }

    #[test]
    fn card_without_optional_lines() {
        let card = CategoryCard {
            icon: IconName::Wifi,
            title: "Networks".into(),
            description: "Moving bits around".into(),
            ..Default::default()
        };
        let html = view! {
            <CategoryCardView card=card index=4 labels=labels() tone=CardTone::Sky />
        }
        .to_html();

        assert!(html.contains("Networks"));
        assert!(html.contains("Moving bits around"));
        assert!(html.contains("data-icon=\"wifi\""));
        assert!(html.contains("data-key=\"4\""));
        assert!(html.contains("data-reveal"));
        assert!(!html.contains("data-line"));
    }

    #[test]
    fn card_with_every_field() {
        let card = CategoryCard {
            icon: IconName::Robot,
            title: "AI".into(),
            description: "Learning from data".into(),
            skills: Some("Python, ML".into()),
            related_jobs: Some("ML Engineer".into()),
        };
        let html = view! {
            <CategoryCardView card=card index=0 labels=labels() tone=CardTone::Cyan />
        }
        .to_html();

        for needle in [
            "AI",
            "Learning from data",
            "Skills:",
            "Python, ML",
            "Jobs:",
            "ML Engineer",
            "data-icon=\"robot\"",
            "tone-cyan",
        ] {
            assert!(html.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn intro_emphasis_is_strong() {
        let intro = Intro {
            emphasis: Some("Digital".into()),
            text: "is everywhere".into(),
        };
        let html = view! { <IntroText intro=intro /> }.to_html();
        assert!(html.contains("<strong class=\"accent\">Digital</strong>"));
        assert!(html.contains("is everywhere"));
    }
}
