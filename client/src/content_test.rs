use super::*;
use crate::util::browser::anchor_target;

#[test]
fn every_project_has_images() {
    for project in PROJECTS {
        assert!(!project.images.is_empty(), "{} has no images", project.title);
    }
}

#[test]
fn nav_items_are_in_page_anchors() {
    for item in NAV_ITEMS {
        assert!(anchor_target(item.href).is_some(), "{} is not an anchor", item.href);
    }
}

#[test]
fn skill_percentages_are_bounded() {
    assert!(SKILLS.iter().all(|s| s.percentage <= 100));
}

#[test]
fn stars_repeats_rating() {
    assert_eq!(stars(5), "★★★★★");
    assert_eq!(stars(0), "");
}

#[test]
fn awards_are_listed_newest_first() {
    assert_eq!(AWARDS.len(), 3);
    let years: Vec<u16> = AWARDS.iter().map(|a| a.year.parse().expect("numeric year")).collect();
    assert!(years.windows(2).all(|w| w[0] > w[1]), "{years:?}");
}
