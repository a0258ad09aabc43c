//! Path → page resolution for the feed application.
//!
//! The resolver only names the page and extracts its positional parameters;
//! interpreting them is left to consumers such as the header.

use once_cell::sync::Lazy;
use regex::Regex;

/// Page identifier plus its positional parameters, in path order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    pub page: String,
    pub params: Vec<String>,
}

impl RouteInfo {
    pub fn new(page: &str, params: &[&str]) -> Self {
        Self {
            page: page.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn bare(page: &str) -> Self {
        Self::new(page, &[])
    }
}

const STATIC_PAGES: &[(&str, &str)] = &[
    ("/about.html", "About"),
    ("/welcome", "Welcome"),
    ("/faq.html", "Faq"),
    ("/login.html", "Login"),
    ("/privacy.html", "Privacy"),
    ("/support.html", "Support"),
    ("/tos.html", "Tos"),
    ("/change_password", "ChangePassword"),
    ("/create_account", "CreateAccount"),
    ("/pick_account", "PickAccount"),
    ("/recover_account_step_1", "RecoverAccountStep1"),
    ("/recover_account_step_2", "RecoverAccountStep2"),
    ("/market", "Market"),
    ("/~witnesses", "Witnesses"),
    ("/submit.html", "SubmitPost"),
];

static HOME_FEED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(@[\w.\-]+)/feed/?$").expect("valid home feed pattern"));

static USER_PROFILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^/(@[\w.\-]+)(?:/(blog|posts|comments|recommended|transfers|curation-rewards|author-rewards|permissions|created|recent-replies|password|followed|followers|settings))?/?$",
    )
    .expect("valid user profile pattern")
});

static POST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/([\w\-]+)/(@[\w.\-]+)/([\w\-]+)/?$").expect("valid post pattern")
});

static POST_NO_CATEGORY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(@[\w.\-]+)/([\w\-]+)/?$").expect("valid post pattern"));

static POSTS_INDEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/(hot|created|trending|trending30|active)(?:/([\w\-]+))?/?$")
        .expect("valid posts index pattern")
});

/// Resolve a location path. Returns `None` for anything that is not an
/// absolute path; unknown absolute paths resolve to `NotFound`.
pub fn resolve(path: &str) -> Option<RouteInfo> {
    if !path.starts_with('/') {
        return None;
    }
    // Query and fragment never take part in routing.
    let path = path.split(['?', '#']).next().unwrap_or(path);

    if path == "/" {
        return Some(RouteInfo::new("PostsIndex", &["trending"]));
    }
    if let Some((_, page)) = STATIC_PAGES.iter().find(|(p, _)| *p == path) {
        return Some(RouteInfo::bare(page));
    }
    if let Some(caps) = HOME_FEED.captures(path) {
        return Some(RouteInfo::new("PostsIndex", &["home", &caps[1]]));
    }
    if let Some(caps) = USER_PROFILE.captures(path) {
        let params = caps
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str())
            .collect::<Vec<_>>();
        return Some(RouteInfo::new("UserProfile", &params));
    }
    if let Some(caps) = POST_NO_CATEGORY.captures(path) {
        return Some(RouteInfo::new("PostNoCategory", &[&caps[1], &caps[2]]));
    }
    if let Some(caps) = POST.captures(path) {
        return Some(RouteInfo::new("Post", &[&caps[1], &caps[2], &caps[3]]));
    }
    if let Some(caps) = POSTS_INDEX.captures(path) {
        let params = caps
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str())
            .collect::<Vec<_>>();
        return Some(RouteInfo::new("PostsIndex", &params));
    }
    Some(RouteInfo::bare("NotFound"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(path: &str) -> RouteInfo {
        resolve(path).unwrap_or_else(|| panic!("{path} should resolve"))
    }

    #[test]
    fn root_is_trending_index() {
        assert_eq!(resolved("/"), RouteInfo::new("PostsIndex", &["trending"]));
    }

    #[test]
    fn sort_and_topic_index() {
        assert_eq!(resolved("/hot"), RouteInfo::new("PostsIndex", &["hot"]));
        assert_eq!(resolved("/hot/cats"), RouteInfo::new("PostsIndex", &["hot", "cats"]));
        assert_eq!(
            resolved("/trending30/ru--kotiki/"),
            RouteInfo::new("PostsIndex", &["trending30", "ru--kotiki"])
        );
    }

    #[test]
    fn home_feed_keeps_the_account_sigil() {
        assert_eq!(
            resolved("/@alice/feed"),
            RouteInfo::new("PostsIndex", &["home", "@alice"])
        );
    }

    #[test]
    fn profiles_and_sections() {
        assert_eq!(resolved("/@bob"), RouteInfo::new("UserProfile", &["@bob"]));
        assert_eq!(
            resolved("/@bob.test/transfers"),
            RouteInfo::new("UserProfile", &["@bob.test", "transfers"])
        );
    }

    #[test]
    fn posts_with_and_without_category() {
        assert_eq!(
            resolved("/cats/@bob/my-first-post"),
            RouteInfo::new("Post", &["cats", "@bob", "my-first-post"])
        );
        assert_eq!(
            resolved("/@bob/my-first-post"),
            RouteInfo::new("PostNoCategory", &["@bob", "my-first-post"])
        );
    }

    #[test]
    fn static_pages_and_unknown_paths() {
        assert_eq!(resolved("/~witnesses"), RouteInfo::new("Witnesses", &[]));
        assert_eq!(resolved("/hot?page=2"), RouteInfo::new("PostsIndex", &["hot"]));
        assert_eq!(resolved("/nope/nope/nope/nope"), RouteInfo::new("NotFound", &[]));
        assert_eq!(resolved("/promoted"), RouteInfo::new("NotFound", &[]));
    }

    #[test]
    fn relative_or_empty_paths_do_not_resolve() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("hot/cats"), None);
    }
}
