use dioxus::prelude::*;

use crate::core::topic::display_topic;
use crate::header::{PageKind, SortOrder};
use crate::route;

/// Page body for every routed location. Feed content itself is served
/// elsewhere; this view names what the location shows.
#[component]
pub fn Listing(path: String) -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_marker = try_use_context::<Signal<String>>()
        .map(|s| s())
        .unwrap_or_default();

    let kind = route::resolve(&path).and_then(|r| PageKind::try_from(&r).ok());
    let heading = match &kind {
        Some(PageKind::PostsIndex { sort: SortOrder::Home, .. }) => crate::t!("feed-title"),
        Some(PageKind::PostsIndex { sort, qualifier: Some(topic) }) => {
            format!("{} · {}", display_topic(topic), sort)
        }
        Some(PageKind::PostsIndex { .. }) => crate::t!("listing-posts-heading"),
        Some(PageKind::Post { .. }) => crate::t!("listing-post-heading"),
        Some(PageKind::UserProfile { user }) => {
            crate::t!("listing-profile-heading", user = user.as_str())
        }
        Some(PageKind::Other(page)) if page == "NotFound" => crate::t!("listing-not-found"),
        Some(PageKind::Other(page)) => page.clone(),
        None => crate::t!("listing-not-found"),
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-listing",
            h1 { "{heading}" }
            p { class: "page-listing__placeholder", {crate::t!("listing-placeholder")} }
        }
    }
}
