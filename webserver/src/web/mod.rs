//! HTTP surface: page handlers, JSON API and the HTML views they render

pub mod handlers;
pub mod links;
pub mod views;
