//! Leptos UI components for rendering the page.
//!
//! Each component is a pure function of its props: the same content and
//! [`UiState`](crate::navigation::UiState) always produce the same markup.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── SiteHeader (brand, desktop nav, menu toggle, mobile menu)
//! ├── HeroSection            #top
//! ├── CardSectionView        #what, #why, #types
//! │   └── CategoryCardView
//! ├── LearnSectionView       #learn
//! │   ├── RoadmapStageView
//! │   └── ResourcePanelView
//! ├── GallerySectionView     #gallery
//! │   └── GalleryFigure
//! ├── FaqSectionView         #faq
//! │   └── FaqItem
//! ├── FooterCtaView
//! └── BackToTop
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! used directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use digitech_site::components::FaqItem;
//!
//! view! { <FaqItem entry=entry index=0 /> }
//! ```

mod cards;
mod document;
mod faq;
mod footer;
mod gallery;
mod header;
mod hero;
pub mod icons;
mod roadmap;

pub use cards::{CardSectionView, CardTone, CategoryCardView, IntroText};
pub use document::{PageDocument, module_loader};
pub use faq::{FaqItem, FaqSectionView};
pub use footer::{BackToTop, CtaButton, FooterCtaView};
pub use gallery::{GalleryFigure, GallerySectionView};
pub use header::SiteHeader;
pub use hero::HeroSection;
pub use icons::Icon;
pub use roadmap::{LearnSectionView, ResourcePanelView, RoadmapStageView};
