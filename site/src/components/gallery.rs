use leptos::prelude::*;

use crate::types::{GalleryImage, GallerySection};

/// One lazily loaded image with its alt text repeated as a caption.
#[component]
pub fn GalleryFigure(image: GalleryImage, index: usize) -> impl IntoView {
    let GalleryImage {
        source_url,
        alt_text,
    } = image;

    view! {
        <figure class="figure" data-key=index.to_string()>
            <img class="figure-img" src=source_url alt=alt_text.clone() loading="lazy" />
            <figcaption class="figure-caption">{alt_text}</figcaption>
        </figure>
    }
}

/// The `#gallery` section.
#[component]
pub fn GallerySectionView(anchor: &'static str, section: GallerySection) -> impl IntoView {
    view! {
        <section id=anchor class="section">
            <div class="container" data-reveal="">
                <h2 class="section-title">{section.heading}</h2>
                <p class="section-intro">{section.subtitle}</p>
                <div class="gallery-grid">
                    {section
                        .images
                        .into_iter()
                        .enumerate()
                        .map(|(index, image)| view! { <GalleryFigure image=image index=index /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
