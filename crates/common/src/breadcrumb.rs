//! Navigation breadcrumbs derived from a request path.
//!
//! `/products/shoes` becomes
//!
//! ```text
//! Home (/) › Products (/products) › Shoes
//! ```
//!
//! The final crumb is the current page and never carries a link.

use serde::{Deserialize, Serialize};

/// One navigational label of the current page's path hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Path segment with its first character upper-cased.
    pub name: String,
    /// Cumulative path up to this segment; `None` for the current page.
    pub url: Option<String>,
}

impl Breadcrumb {
    fn link(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
        }
    }

    fn current(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }
}

/// Derive the breadcrumb trail for `path`.
///
/// The trail always starts with `Home` linking to `/`. Every segment of the
/// path (split on `/` after the leading slash, empty segments included)
/// contributes one crumb, so `/` yields `Home` followed by a single unnamed
/// current-page crumb.
pub fn derive_breadcrumbs(path: &str) -> Vec<Breadcrumb> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let segments: Vec<&str> = trimmed.split('/').collect();

    let mut crumbs = Vec::with_capacity(segments.len() + 1);
    crumbs.push(Breadcrumb::link("Home", "/"));

    let mut acc = String::new();
    let last = segments.len() - 1;
    for (i, segment) in segments.iter().enumerate() {
        let name = capitalize_first(segment);
        if i == last {
            crumbs.push(Breadcrumb::current(name));
        } else {
            acc.push('/');
            acc.push_str(segment);
            crumbs.push(Breadcrumb::link(name, acc.clone()));
        }
    }
    crumbs
}

/// Upper-case the first character and leave the remainder untouched.
fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(name: &str, url: &str) -> Breadcrumb {
        Breadcrumb::link(name, url)
    }

    fn current(name: &str) -> Breadcrumb {
        Breadcrumb::current(name)
    }

    #[test]
    fn two_segment_path() {
        assert_eq!(
            derive_breadcrumbs("/products/shoes"),
            vec![link("Home", "/"), link("Products", "/products"), current("Shoes")]
        );
    }

    #[test]
    fn single_segment_has_no_link() {
        assert_eq!(
            derive_breadcrumbs("/products"),
            vec![link("Home", "/"), current("Products")]
        );
    }

    #[test]
    fn root_path_yields_one_empty_current_crumb() {
        // Splitting the empty remainder of "/" still produces one segment.
        assert_eq!(derive_breadcrumbs("/"), vec![link("Home", "/"), current("")]);
    }

    #[test]
    fn only_first_character_is_capitalized() {
        let crumbs = derive_breadcrumbs("/aBC");
        assert_eq!(crumbs[1].name, "ABC");

        let crumbs = derive_breadcrumbs("/about-us");
        assert_eq!(crumbs[1].name, "About-us");
    }

    #[test]
    fn deep_path_accumulates_urls() {
        let crumbs = derive_breadcrumbs("/user/orders/42/items");
        assert_eq!(crumbs.len(), 5);
        assert_eq!(crumbs[1].url.as_deref(), Some("/user"));
        assert_eq!(crumbs[2].url.as_deref(), Some("/user/orders"));
        assert_eq!(crumbs[3].url.as_deref(), Some("/user/orders/42"));
        assert_eq!(crumbs[4], current("Items"));
    }

    #[test]
    fn trailing_slash_keeps_empty_segment() {
        assert_eq!(
            derive_breadcrumbs("/products/"),
            vec![link("Home", "/"), link("Products", "/products"), current("")]
        );
    }

    #[test]
    fn length_and_terminal_crumb_hold_for_any_path() {
        for path in ["/a", "/a/b", "/a/b/c", "/x/y/z/w/v", "/pages/about-us"] {
            let segments = path[1..].split('/').count();
            let crumbs = derive_breadcrumbs(path);
            assert_eq!(crumbs.len(), segments + 1, "path {path}");
            assert_eq!(crumbs[0], link("Home", "/"));
            assert!(crumbs.last().unwrap().url.is_none());
            assert!(crumbs[..segments].iter().all(|c| c.url.is_some()));
        }
    }

    #[test]
    fn non_ascii_first_character() {
        assert_eq!(derive_breadcrumbs("/épicerie")[1].name, "Épicerie");
    }

    #[test]
    fn serializes_current_page_url_as_null() {
        let json = serde_json::to_value(derive_breadcrumbs("/products")).unwrap();
        assert_eq!(json[0]["url"], "/");
        assert!(json[1]["url"].is_null());
    }
}
