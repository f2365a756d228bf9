//! Learning roadmap: numbered stages plus the resources panel.

use leptos::prelude::*;

use crate::types::{Labels, LearnSection, ResourcePanel, RoadmapStage};

/// One roadmap stage. The badge number is the 1-based position.
#[component]
pub fn RoadmapStageView(stage: RoadmapStage, index: usize, labels: Labels) -> impl IntoView {
    let RoadmapStage {
        title,
        points,
        action_hint,
    } = stage;
    let badge = format!("{} {}", labels.stage, index + 1);

    view! {
        <article class="card stage" data-reveal="" data-key=index.to_string()>
            <h3 class="stage-title">
                {title}
                <span class="stage-badge">{badge}</span>
            </h3>
            <ol class="stage-points">
                {points.into_iter().map(|p| view! { <li>{p}</li> }).collect::<Vec<_>>()}
            </ol>
            <p class="card-line">
                <span class="card-label">{labels.action}</span>
                " "
                {action_hint}
            </p>
        </article>
    }
}

/// Resource bullet lists, one column each.
#[component]
pub fn ResourcePanelView(panel: ResourcePanel) -> impl IntoView {
    view! {
        <div class="resource-panel">
            <h3 class="resource-heading">{panel.heading}</h3>
            <div class="resource-columns">
                {panel
                    .columns
                    .into_iter()
                    .map(|column| {
                        view! {
                            <ul class="resource-list">
                                {column
                                    .into_iter()
                                    .map(|item| view! { <li>{item}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// The `#learn` section.
#[component]
pub fn LearnSectionView(anchor: &'static str, section: LearnSection, labels: Labels) -> impl IntoView {
    let LearnSection {
        heading,
        stages,
        resources,
    } = section;

    view! {
        <section id=anchor class="section band">
            <div class="container" data-reveal="">
                <h2 class="section-title">{heading}</h2>
                <div class="stage-grid">
                    {stages
                        .into_iter()
                        .enumerate()
                        .map(|(index, stage)| {
                            view! {
                                <RoadmapStageView stage=stage index=index labels=labels.clone() />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <ResourcePanelView panel=resources />
            </div>
        </section>
    }
}
