//! Portfolio page: headline stats and filterable project cards

use catalog::{CategoryFilter, Project, SiteContent, filter_items};
use maud::{Markup, html};

use super::{NavItem, empty_state, layout, list_menu};

pub fn render(content: &SiteContent, filter: &CategoryFilter) -> Markup {
    let projects = filter_items(&content.projects, filter);

    let body = html! {
        section.hero {
            h1 { "Our Portfolio" }
            p { "Supply programs and partnerships we have delivered for clients worldwide." }
        }
        section id="stats" {
            div.grid {
                @for stat in &content.portfolio_stats {
                    div.card {
                        div.body {
                            h2 { (stat.value) }
                            p { (stat.label) }
                        }
                    }
                }
            }
        }
        section id="projects" {
            (list_menu("/portfolio", &content.portfolio_menu, filter))
            @if projects.is_empty() {
                (empty_state("No projects in this category yet."))
            } @else {
                div.grid {
                    @for project in projects {
                        (project_card(project, content.portfolio_menu.label_for(&project.category)))
                    }
                }
            }
        }
    };

    layout(Some(NavItem::Portfolio), "Portfolio", &content.contact, body)
}

fn project_card(project: &Project, category_label: &str) -> Markup {
    html! {
        article.card id={ "project-" (project.id) } {
            img src=(project.image) alt=(project.title) loading="lazy";
            div.body {
                p { small { (category_label) " · " (project.year) } }
                h3 { (project.title) }
                p { strong { (project.client) } " · " (project.location) }
                p { (project.description) }
                h4 { "Results" }
                ul {
                    @for result in &project.results {
                        li { (result) }
                    }
                }
                div.tags {
                    @for product_type in &project.product_types {
                        span { (product_type) }
                    }
                }
                p { small { "Volume: " (project.volume) } }
            }
        }
    }
}
