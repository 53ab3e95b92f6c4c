//! WhatsApp deep-link builder with campaign attribution passthrough.
//!
//! Links are rebuilt on every render from the current location, so the
//! `utm_*` parameters are always the ones present on this page load.

#[cfg(test)]
#[path = "whatsapp_test.rs"]
mod whatsapp_test;

use url::{Url, form_urlencoded};

pub const WHATSAPP_BASE: &str = "https://wa.me/";

/// Greeting used when no template message is given.
pub const DEFAULT_GREETING: &str = "Olá, gostaria de um orçamento.";

/// Attribution parameters copied from the page, in output order.
pub const ATTRIBUTION_KEYS: [&str; 5] = ["utm_source", "utm_medium", "utm_campaign", "utm_term", "utm_content"];

/// Build `https://wa.me/<number>?text=...[&utm_*=...]`.
///
/// `page` is the absolute page URL or a `?`-prefixed search string. Attribution
/// parameters are copied only when present with a non-empty value; an
/// unparseable page contributes none. Never fails.
pub fn build_deep_link(number: &str, page: &str, template: Option<&str>) -> String {
    let text = template.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_GREETING);

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("text", text);
    for (key, value) in attribution_params(page) {
        query.append_pair(key, &value);
    }
    format!("{WHATSAPP_BASE}{number}?{}", query.finish())
}

/// `utm_*` parameters present on `page`, first occurrence wins.
pub fn attribution_params(page: &str) -> Vec<(&'static str, String)> {
    let pairs = page_query_pairs(page);

    ATTRIBUTION_KEYS
        .iter()
        .filter_map(|key| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .filter(|(_, v)| !v.is_empty())
                .map(|(_, v)| (*key, v.clone()))
        })
        .collect()
}

/// Router search string (with or without its leading `?`) as a page
/// reference [`build_deep_link`] accepts. Empty stays empty.
pub fn search_as_page(search: &str) -> String {
    match search {
        "" => String::new(),
        s if s.starts_with('?') => s.to_owned(),
        s => format!("?{s}"),
    }
}

/// Greeting that introduces the visitor by name, if one was typed.
pub fn greeting_for_name(name: &str) -> Option<String> {
    let name = name.trim();
    (!name.is_empty()).then(|| format!("Olá, sou {name} e gostaria de um orçamento."))
}

/// Query pairs of an absolute URL, or of a bare `?search` string.
/// Anything else has no query.
fn page_query_pairs(page: &str) -> Vec<(String, String)> {
    if let Ok(url) = Url::parse(page) {
        return url.query_pairs().into_owned().collect();
    }
    let Some(search) = page.strip_prefix('?') else {
        return Vec::new();
    };
    let query = search.split_once('#').map_or(search, |(q, _)| q);
    form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}
