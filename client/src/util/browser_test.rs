use super::*;

#[test]
fn anchor_target_strips_hash() {
    assert_eq!(anchor_target("#contato"), Some("contato"));
}

#[test]
fn anchor_target_ignores_bare_hash_and_external_links() {
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("https://wa.me/1"), None);
    assert_eq!(anchor_target("/images/a.png"), None);
}

#[test]
fn current_year_matches_utc_clock() {
    assert_eq!(current_year(), time::OffsetDateTime::now_utc().year());
    assert!(current_year() >= 2024);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_helpers_are_inert_outside_browser() {
    assert_eq!(page_href(), "");
    assert!(!scroll_to_anchor("#contato"));
    WindowLocation.navigate("mailto:a@b.com");
    assert!(current_year() >= 2024);
}
