//! Location, navigation, scrolling and date helpers.
//!
//! Location, navigation and scrolling need a browser; non-hydrate builds
//! get inert values. The footer year reads the UTC clock through `time` in
//! both builds.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use crate::net::lead_router::Navigator;

/// Full URL of the current page (`window.location.href`).
pub fn page_href() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// [`Navigator`] that assigns `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowLocation;

impl Navigator for WindowLocation {
    fn navigate(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(url);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    }
}

/// Element id targeted by an in-page link, or `None` for `#` and
/// non-anchor hrefs.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scroll the target of an in-page link into view.
///
/// Returns `true` when a target was found; callers then cancel the default
/// jump.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_target(href) else {
        return false;
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(target) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}

/// Current calendar year (UTC) for the footer.
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
