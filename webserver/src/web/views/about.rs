use catalog::SiteContent;
use catalog::content::COMPANY_NAME;
use maud::{Markup, html};

use super::{NavItem, layout};

pub fn render(content: &SiteContent) -> Markup {
    let body = html! {
        section.hero {
            h1 { "About Us" }
            p { (COMPANY_NAME) " connects Indonesian growers with buyers who care where their ingredients come from." }
        }
        section id="story" {
            h2 { "Our Story" }
            p {
                "What started as a small family trading business has grown into a partner network of "
                "farms across Sumatra, Java, Sulawesi and Maluku. We still visit every farm we buy from."
            }
        }
        section id="mission" {
            h2 { "Our Mission" }
            p {
                "Bring the best of Indonesia's commodities to the world while creating lasting value "
                "for the communities that grow them."
            }
        }
        section id="values" {
            h2 { "Our Values" }
            div.grid {
                @for value in &content.values {
                    div.card {
                        div.body {
                            h3 { (value.title) }
                            p { (value.description) }
                        }
                    }
                }
            }
        }
        section id="journey" {
            h2 { "Our Journey" }
            ol.timeline {
                @for milestone in &content.milestones {
                    li { strong { (milestone.year) } " " (milestone.event) }
                }
            }
        }
        section id="team" {
            h2 { "Meet the Team" }
            div.grid {
                @for member in &content.team {
                    figure.card {
                        img src=(member.image) alt=(member.name) loading="lazy";
                        figcaption.body {
                            strong { (member.name) }
                            br;
                            small { (member.role) }
                        }
                    }
                }
            }
        }
    };

    layout(Some(NavItem::About), "About Us", &content.contact, body)
}
