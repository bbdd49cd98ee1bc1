//! Gallery page: category menu, image grid and the lightbox overlay
//!
//! The lightbox is open when the URL names an image of the filtered list.
//! Its previous/next links point at the neighbouring images, wrapping at the
//! ends, and closing it drops the `view` parameter but keeps the category.

use catalog::{Direction, GalleryImage, GalleryView, Lightbox, SiteContent};
use maud::{Markup, html};

use super::{NavItem, category_menu, empty_state, layout};
use crate::web::links;

pub fn render(content: &SiteContent, view: &GalleryView) -> Markup {
    let lightbox = view.lightbox(&content.gallery);
    let filter = view.filter();

    let body = html! {
        section.hero {
            h1 { "Gallery" }
            p { "From the farms to the warehouse: a look at where our products come from." }
        }
        section id="gallery" {
            (category_menu(&content.gallery_menu, filter, |target| links::gallery_url(target, None)))
            @if lightbox.items().is_empty() {
                (empty_state("No images in this category."))
            } @else {
                div.grid {
                    @for image in lightbox.items() {
                        a.card id={ "image-" (image.id) } href=(links::gallery_url(filter, Some(image.id.as_str()))) {
                            img src=(image.src) alt=(image.alt) loading="lazy";
                            div.body {
                                strong { (image.title) }
                                br;
                                small { (image.description) }
                            }
                        }
                    }
                }
            }
        }
        (overlay(view, &lightbox))
    };

    layout(Some(NavItem::Gallery), "Gallery", &content.contact, body)
}

fn overlay(view: &GalleryView, lightbox: &Lightbox<'_, GalleryImage>) -> Markup {
    let filter = view.filter();

    html! {
        @if let (Some(image), Some((position, total))) = (lightbox.current(), lightbox.position()) {
            div.lightbox role="dialog" aria-modal="true" aria-label=(image.title) {
                a.close href=(links::gallery_url(filter, None)) aria-label="Close" { "✕ Close" }
                img src=(image.src) alt=(image.alt);
                h2 { (image.title) }
                p { (image.description) }
                p.position { (position) " / " (total) }
                nav {
                    @if let Some(prev) = lightbox.peek(Direction::Prev) {
                        a rel="prev" href=(links::gallery_url(filter, Some(prev.id.as_str()))) { "‹ Previous" }
                    }
                    @if let Some(next) = lightbox.peek(Direction::Next) {
                        a rel="next" href=(links::gallery_url(filter, Some(next.id.as_str()))) { "Next ›" }
                    }
                }
            }
        }
    }
}
