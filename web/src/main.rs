use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::FeedHeader;
use ui::core::analytics::Analytics;
use ui::core::session::Session;
use ui::core::sort_memory::SortMemory;
use ui::views::Listing;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebHeader)]
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; the header's locale switcher updates it.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    let session = use_signal(Session::restore);
    use_context_provider(|| session);
    use_context_provider(SortMemory::global);
    use_context_provider(Analytics::platform_default);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[component]
fn Root() -> Element {
    rsx! { Listing { path: "/" } }
}

#[component]
fn Page(segments: Vec<String>) -> Element {
    let path = location_path(&Route::Page { segments });
    rsx! { Listing { path } }
}

/// Location path as the header and views expect it: built from the decoded
/// route segments, since `Route`'s `Display` percent-encodes them (`@` → `%40`).
fn location_path(route: &Route) -> String {
    match route {
        Route::Root {} => "/".to_string(),
        Route::Page { segments } => format!("/{}", segments.join("/")),
    }
}

/// Web layout: the shared header above the routed page, fed with the
/// router's current location.
#[component]
fn WebHeader() -> Element {
    let route = use_route::<Route>();
    let path = location_path(&route);
    tracing::debug!(%path, "routed");

    rsx! {
        FeedHeader { path }
        main { class: "page-body",
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui::route::{resolve, RouteInfo};

    fn page(segments: &[&str]) -> Route {
        Route::Page {
            segments: segments.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn root_maps_to_slash() {
        assert_eq!(location_path(&Route::Root {}), "/");
    }

    #[test]
    fn account_segments_keep_their_sigil() {
        let path = location_path(&page(&["@alice", "feed"]));
        assert_eq!(path, "/@alice/feed");
        assert_eq!(
            resolve(&path),
            Some(RouteInfo::new("PostsIndex", &["home", "@alice"]))
        );
    }

    #[test]
    fn posts_and_profiles_resolve() {
        let post = location_path(&page(&["cats", "@bob", "hello"]));
        assert_eq!(
            resolve(&post),
            Some(RouteInfo::new("Post", &["cats", "@bob", "hello"]))
        );
        let profile = location_path(&page(&["@carol"]));
        assert_eq!(resolve(&profile), Some(RouteInfo::new("UserProfile", &["@carol"])));
    }

    #[test]
    fn parsed_route_round_trips_to_the_raw_path() {
        let route: Route = "/@alice/feed".parse().unwrap_or_else(|_| panic!("route parses"));
        assert_eq!(location_path(&route), "/@alice/feed");
    }
}
