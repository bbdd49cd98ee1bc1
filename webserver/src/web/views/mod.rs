//! Server-rendered pages
//!
//! Every page is a pure function of the site content and the state decoded
//! from the request URL. Markup is built with maud and escaped on output.

pub mod about;
pub mod gallery;
pub mod home;
pub mod inquiry_form;
pub mod portfolio;

use catalog::content::COMPANY_NAME;
use catalog::{CategoryFilter, CategoryMenu, ContactDetails};
use chrono::{Datelike, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::web::links;

/// Top-level navigation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    About,
    Gallery,
    Portfolio,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [NavItem::Home, NavItem::About, NavItem::Gallery, NavItem::Portfolio];

    pub fn path(&self) -> &'static str {
        match self {
            NavItem::Home => "/",
            NavItem::About => "/about",
            NavItem::Gallery => "/gallery",
            NavItem::Portfolio => "/portfolio",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::About => "About Us",
            NavItem::Gallery => "Gallery",
            NavItem::Portfolio => "Portfolio",
        }
    }
}

const STYLESHEET: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:Georgia,serif;color:#2b2118;background:#faf7f2;line-height:1.6}
a{color:#7a4b1e}
header.navbar{display:flex;justify-content:space-between;align-items:center;padding:1rem 2rem;background:#2b2118}
header.navbar a{color:#f3e9dc;text-decoration:none;margin-left:1.5rem}
header.navbar a.active{border-bottom:2px solid #d9a25f}
header.navbar .brand{margin-left:0;font-weight:bold}
main{max-width:1100px;margin:0 auto;padding:2rem}
section{margin-bottom:3rem}
.hero{padding:4rem 2rem;text-align:center;background:#efe4d4;border-radius:8px}
.menu{display:flex;flex-wrap:wrap;gap:.5rem;margin:1rem 0}
.menu a{padding:.4rem 1rem;border:1px solid #7a4b1e;border-radius:999px;text-decoration:none}
.menu a.selected{background:#7a4b1e;color:#fff}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(280px,1fr));gap:1.5rem}
.card{background:#fff;border-radius:8px;overflow:hidden;box-shadow:0 1px 4px rgba(0,0,0,.1)}
.card img{width:100%;height:200px;object-fit:cover}
.card .body{padding:1rem}
.tags span{display:inline-block;font-size:.8rem;background:#efe4d4;border-radius:4px;padding:0 .4rem;margin:0 .3rem .3rem 0}
.lightbox{position:fixed;inset:0;background:rgba(0,0,0,.9);color:#fff;display:flex;flex-direction:column;align-items:center;justify-content:center;padding:2rem}
.lightbox img{max-width:90vw;max-height:70vh}
.lightbox a{color:#fff}
.lightbox nav{display:flex;gap:2rem;margin-top:1rem}
.carousel blockquote{font-size:1.2rem;font-style:italic}
.avatar{display:inline-flex;width:48px;height:48px;border-radius:50%;background:#7a4b1e;color:#fff;align-items:center;justify-content:center}
.dots a{margin:0 .25rem;text-decoration:none}
.dots a.active{font-weight:bold}
form .field{margin-bottom:1rem}
form label{display:block;font-weight:bold}
form input,form select,form textarea{width:100%;padding:.5rem}
form .checks label{display:inline-block;font-weight:normal;margin-right:1rem}
form .checks input{width:auto}
.error{color:#b00020;font-size:.9rem}
.notice{padding:1rem;border-radius:8px;background:#e3f1e3}
footer{padding:2rem;background:#2b2118;color:#f3e9dc;text-align:center}
footer a{color:#f3e9dc}
"#;

/// Full HTML document around `body`
pub fn layout(active: Option<NavItem>, title: &str, contact: &ContactDetails, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (COMPANY_NAME) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                (navbar(active, contact))
                main { (body) }
                (footer(contact))
            }
        }
    }
}

fn navbar(active: Option<NavItem>, contact: &ContactDetails) -> Markup {
    html! {
        header.navbar {
            a.brand href="/" { (COMPANY_NAME) }
            nav {
                @for item in NavItem::ALL {
                    a class=[(active == Some(item)).then_some("active")] href=(item.path()) { (item.label()) }
                }
                a href=(contact.whatsapp_link()) target="_blank" rel="noopener" { "Contact" }
            }
        }
    }
}

fn footer(contact: &ContactDetails) -> Markup {
    html! {
        footer {
            p { strong { (COMPANY_NAME) } }
            @for line in &contact.address_lines {
                p { (line) }
            }
            p {
                a href={ "mailto:" (contact.email) } { (contact.email) }
                " · "
                a href=(contact.whatsapp_link()) target="_blank" rel="noopener" { "WhatsApp" }
            }
            p { "© " (Utc::now().year()) " " (COMPANY_NAME) ". All rights reserved." }
        }
    }
}

/// Category buttons linking to `path` with each selection applied
pub fn category_menu(menu: &CategoryMenu, filter: &CategoryFilter, href: impl Fn(&CategoryFilter) -> String) -> Markup {
    html! {
        nav.menu {
            @for option in menu.iter() {
                @let target = CategoryFilter::parse(Some(option.id.as_str()));
                a class=[menu.is_selected(&option.id, filter).then_some("selected")] href=(href(&target)) {
                    (option.label)
                }
            }
        }
    }
}

/// Simple list-page menu: `path?category=<id>`
pub fn list_menu(path: &str, menu: &CategoryMenu, filter: &CategoryFilter) -> Markup {
    category_menu(menu, filter, |target| links::category_url(path, target))
}

pub fn empty_state(message: &str) -> Markup {
    html! {
        p.empty { (message) }
    }
}

pub fn not_found(path: &str, contact: &ContactDetails) -> Markup {
    let body = html! {
        section.hero {
            h1 { "Page not found" }
            p { "Nothing lives at " code { (path) } "." }
            p { a href="/" { "Back to the home page" } }
        }
    };
    layout(None, "Not Found", contact, body)
}
