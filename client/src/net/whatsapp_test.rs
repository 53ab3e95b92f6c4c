use super::*;

fn query_pairs(link: &str) -> Vec<(String, String)> {
    let (_, query) = link.split_once('?').expect("link has a query");
    form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}

fn keys(link: &str) -> Vec<String> {
    query_pairs(link).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn default_greeting_when_template_absent() {
    let link = build_deep_link("5531989484903", "https://site.com/", None);
    assert_eq!(link, "https://wa.me/5531989484903?text=Ol%C3%A1%2C+gostaria+de+um+or%C3%A7amento.");
    assert_eq!(query_pairs(&link), vec![("text".to_owned(), DEFAULT_GREETING.to_owned())]);
}

#[test]
fn empty_template_falls_back_to_default_greeting() {
    let link = build_deep_link("1", "", Some(""));
    assert_eq!(query_pairs(&link)[0].1, DEFAULT_GREETING);
}

#[test]
fn template_message_is_encoded_as_text() {
    let link = build_deep_link("1", "", Some("Quero um Jardim Vertical & irrigação"));
    assert_eq!(
        query_pairs(&link),
        vec![("text".to_owned(), "Quero um Jardim Vertical & irrigação".to_owned())]
    );
}

#[test]
fn present_utm_params_are_copied_and_absent_ones_omitted() {
    let link = build_deep_link("1", "https://site.com/?utm_source=ads&utm_campaign=spring", None);
    let pairs = query_pairs(&link);
    assert!(pairs.contains(&("utm_source".to_owned(), "ads".to_owned())));
    assert!(pairs.contains(&("utm_campaign".to_owned(), "spring".to_owned())));
    assert_eq!(keys(&link), vec!["text", "utm_source", "utm_campaign"]);
    assert!(link.ends_with("&utm_source=ads&utm_campaign=spring"));
}

#[test]
fn accepts_bare_search_string() {
    let link = build_deep_link("1", "?utm_medium=cpc", None);
    assert_eq!(keys(&link), vec!["text", "utm_medium"]);
}

#[test]
fn non_attribution_params_are_never_copied() {
    let link = build_deep_link("1", "https://site.com/?gclid=abc&ref=x&utm_term=grama", None);
    assert_eq!(keys(&link), vec!["text", "utm_term"]);
}

#[test]
fn empty_utm_values_are_omitted() {
    let link = build_deep_link("1", "https://site.com/?utm_source=&utm_content=banner", None);
    assert_eq!(keys(&link), vec!["text", "utm_content"]);
}

#[test]
fn utm_values_survive_decoding_verbatim() {
    let params = attribution_params("https://site.com/?utm_campaign=primavera%20verde&utm_source=insta+stories");
    assert_eq!(
        params,
        vec![("utm_source", "insta stories".to_owned()), ("utm_campaign", "primavera verde".to_owned())]
    );
}

#[test]
fn first_occurrence_wins_and_fragment_is_ignored() {
    let params = attribution_params("https://site.com/?utm_source=a&utm_source=b#contato");
    assert_eq!(params, vec![("utm_source", "a".to_owned())]);
}

#[test]
fn unparseable_page_yields_plain_link() {
    let link = build_deep_link("1", "%%%not a url", None);
    assert_eq!(keys(&link), vec!["text"]);
}

#[test]
fn output_is_deterministic() {
    let page = "https://site.com/?utm_source=ads";
    assert_eq!(build_deep_link("1", page, Some("oi")), build_deep_link("1", page, Some("oi")));
}

#[test]
fn greeting_for_name_uses_trimmed_name() {
    assert_eq!(
        greeting_for_name("  Ana "),
        Some("Olá, sou Ana e gostaria de um orçamento.".to_owned())
    );
    assert_eq!(greeting_for_name("   "), None);
}

#[test]
fn path_without_query_contributes_nothing() {
    assert!(attribution_params("https://site.com/promo&utm_source=ads").is_empty());
    assert!(attribution_params("utm_source=ads").is_empty());
}

#[test]
fn query_inside_fragment_is_ignored() {
    assert!(attribution_params("https://site.com/#contato?utm_campaign=spring").is_empty());
    assert!(attribution_params("?#contato?utm_campaign=spring").is_empty());
}

#[test]
fn search_as_page_adds_missing_question_mark() {
    assert_eq!(search_as_page(""), "");
    assert_eq!(search_as_page("utm_source=ads"), "?utm_source=ads");
    assert_eq!(search_as_page("?utm_source=ads"), "?utm_source=ads");
    assert_eq!(attribution_params(&search_as_page("utm_source=ads")), vec![("utm_source", "ads".to_owned())]);
}
