//! Home page: products, testimonials and the inquiry form

use catalog::content::COMPANY_NAME;
use catalog::{Carousel, CategoryFilter, Product, SiteContent, Testimonial, filter_items};
use maud::{Markup, html};

use super::inquiry_form::{self, InquiryPanel};
use super::{NavItem, category_menu, empty_state, layout};
use crate::web::links;

pub struct HomeView<'a> {
    pub content: &'a SiteContent,
    pub filter: &'a CategoryFilter,
    pub carousel: Carousel,
    pub show_prices: bool,
    pub inquiry: InquiryPanel<'a>,
}

pub fn render(view: &HomeView<'_>) -> Markup {
    let body = html! {
        section.hero {
            h1 { (COMPANY_NAME) }
            p { "Pepper, cloves and palm sugar sourced directly from Indonesian smallholder farms." }
            p {
                a href="#products" { "Explore our products" }
                " · "
                a href="#contact" { "Request a quote" }
            }
        }
        section id="story" {
            h2 { "Our Story" }
            p {
                "We began by working side by side with farming families across the archipelago. "
                "Today we bring their harvest to buyers around the world, with full traceability "
                "from farm to container."
            }
        }
        section id="mission" {
            h2 { "Our Mission" }
            p {
                "To deliver consistent export-grade commodities while paying farmers fairly and "
                "protecting the land they grow on."
            }
        }
        (products(view))
        (testimonials(view))
        (contact(view))
    };

    layout(Some(NavItem::Home), "Home", &view.content.contact, body)
}

fn products(view: &HomeView<'_>) -> Markup {
    let content = view.content;
    let visible = filter_items(&content.products, view.filter);
    let slide = view.carousel.active();
    let contact_link = content.contact.whatsapp_link();

    html! {
        section id="products" {
            h2 { "Our Products" }
            (category_menu(&content.product_menu, view.filter, |target| links::home_url(target, slide, "products")))
            @if visible.is_empty() {
                (empty_state("No products in this category."))
            } @else {
                div.grid {
                    @for product in visible {
                        (product_card(product, view.show_prices, &contact_link))
                    }
                }
            }
        }
    }
}

fn product_card(product: &Product, show_prices: bool, contact_link: &str) -> Markup {
    html! {
        article.card id={ "product-" (product.id) } {
            img src=(product.image) alt=(product.name) loading="lazy";
            div.body {
                h3 { (product.name) }
                p { small { (product.origin) " · " (product.altitude) " · " (product.process) } }
                p { (product.description) }
                div.tags {
                    @for note in &product.flavor_profile {
                        span { (note) }
                    }
                }
                @if show_prices {
                    ul.prices {
                        li { "5 kg: $" (product.price.kg5) }
                        li { "10 kg: $" (product.price.kg10) }
                        li { "25 kg: $" (product.price.kg25) }
                    }
                } @else {
                    p.prices {
                        a href=(contact_link) target="_blank" rel="noopener" { "For Price Contact Us" }
                    }
                }
            }
        }
    }
}

fn testimonials(view: &HomeView<'_>) -> Markup {
    let carousel = view.carousel;
    let active = view.content.testimonials.get(carousel.active());

    html! {
        section.carousel id="testimonials" {
            h2 { "What Our Clients Say" }
            @if let Some(testimonial) = active {
                (testimonial_card(testimonial))
                @if carousel.len() > 1 {
                    nav {
                        a rel="prev" href=(links::home_url(view.filter, carousel.prev_index(), "testimonials")) { "‹ Previous" }
                        " "
                        a rel="next" href=(links::home_url(view.filter, carousel.next_index(), "testimonials")) { "Next ›" }
                    }
                    div.dots {
                        @for (index, is_active) in carousel.dots() {
                            a class=[is_active.then_some("active")]
                                href=(links::home_url(view.filter, index, "testimonials"))
                                aria-label={ "Testimonial " (index + 1) } { "●" }
                        }
                    }
                }
            } @else {
                (empty_state("No testimonials yet."))
            }
        }
    }
}

fn testimonial_card(testimonial: &Testimonial) -> Markup {
    html! {
        figure id={ "testimonial-" (testimonial.id) } {
            blockquote { "“" (testimonial.quote) "”" }
            figcaption {
                @match &testimonial.image {
                    Some(src) => {
                        img.avatar src=(src) alt=(testimonial.name) width="48" height="48";
                    }
                    None => {
                        span.avatar { (testimonial.initials()) }
                    }
                }
                " "
                strong { (testimonial.name) }
                br;
                small { (testimonial.company) ", " (testimonial.location) }
            }
        }
    }
}

fn contact(view: &HomeView<'_>) -> Markup {
    let details = &view.content.contact;

    html! {
        section id="contact" {
            h2 { "Contact Us" }
            p { "Tell us about your business and we will prepare a tailored offer." }
            div.grid {
                div {
                    h3 { "Reach us directly" }
                    p { a href={ "mailto:" (details.email) } { (details.email) } }
                    @for line in &details.address_lines {
                        p { (line) }
                    }
                    p { a href=(details.whatsapp_link()) target="_blank" rel="noopener" { "Chat on WhatsApp" } }
                }
                div {
                    h3 { "Wholesale Inquiry" }
                    (inquiry_form::render(&view.inquiry))
                }
            }
        }
    }
}
