//! Service tests for webserver

pub mod fixtures;
