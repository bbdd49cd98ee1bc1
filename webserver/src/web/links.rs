//! URL builders for page state carried in query strings

use catalog::CategoryFilter;
use url::form_urlencoded;

/// `path` with `params` appended as an encoded query string
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, value);
    }
    let query = serializer.finish();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

fn category_param(filter: &CategoryFilter) -> Option<(&'static str, &str)> {
    match filter {
        CategoryFilter::All => None,
        CategoryFilter::Only(category) => Some(("category", category.as_str())),
    }
}

/// List page filtered by `filter`; the default selection is left implicit
pub fn category_url(path: &str, filter: &CategoryFilter) -> String {
    let params: Vec<_> = category_param(filter).into_iter().collect();
    with_query(path, &params)
}

/// Gallery with `filter` applied and, optionally, `view` open in the lightbox
pub fn gallery_url(filter: &CategoryFilter, view: Option<&str>) -> String {
    let mut params: Vec<(&str, &str)> = category_param(filter).into_iter().collect();
    if let Some(id) = view {
        params.push(("view", id));
    }
    with_query("/gallery", &params)
}

/// Home page keeping the product filter and showing testimonial `slide`
pub fn home_url(filter: &CategoryFilter, slide: usize, anchor: &str) -> String {
    let slide = slide.to_string();
    let mut params: Vec<(&str, &str)> = category_param(filter).into_iter().collect();
    if slide != "0" {
        params.push(("slide", slide.as_str()));
    }
    format!("{}#{}", with_query("/", &params), anchor)
}
