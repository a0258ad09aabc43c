//! Classification of a resolved route into what the header shows for it.

use crate::core::error::HeaderError;
use crate::route::RouteInfo;
use crate::t;

use super::SortOrder;

/// The pages the header treats specially; everything else is `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    /// A listing. `home` listings carry the viewed account (`@name`),
    /// other listings an optional topic.
    PostsIndex {
        sort: SortOrder,
        qualifier: Option<String>,
    },
    Post {
        topic: String,
    },
    UserProfile {
        user: String,
    },
    Other(String),
}

impl TryFrom<&RouteInfo> for PageKind {
    type Error = HeaderError;

    fn try_from(route: &RouteInfo) -> Result<Self, Self::Error> {
        let page = route.page.as_str();
        match (page, route.params.as_slice()) {
            ("PostsIndex", [sort, rest @ ..]) => {
                let sort: SortOrder = sort.parse()?;
                let qualifier = rest.first().cloned();
                if sort == SortOrder::Home && qualifier.is_none() {
                    return Err(HeaderError::malformed(page, "home feed without an account"));
                }
                Ok(PageKind::PostsIndex { sort, qualifier })
            }
            ("PostsIndex", []) => Err(HeaderError::malformed(page, "missing sort order")),
            ("Post", [topic, ..]) => Ok(PageKind::Post {
                topic: topic.clone(),
            }),
            ("Post", []) => Err(HeaderError::malformed(page, "missing category")),
            ("UserProfile", [account, ..]) => {
                let user = account
                    .strip_prefix('@')
                    .ok_or_else(|| HeaderError::malformed(page, "account without leading @"))?;
                Ok(PageKind::UserProfile {
                    user: user.to_string(),
                })
            }
            ("UserProfile", []) => Err(HeaderError::malformed(page, "missing account")),
            (other, _) => Ok(PageKind::Other(other.to_string())),
        }
    }
}

/// Everything the header derives from the page alone (plus the signed-in account).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub kind: PageKind,
    pub title: String,
    pub sort_order: Option<SortOrder>,
    pub topic: Option<String>,
    pub user_name: Option<String>,
    /// A `home` listing of the signed-in account itself.
    pub home_account: bool,
}

impl PageContext {
    pub fn classify(route: &RouteInfo, current_account: Option<&str>) -> Result<Self, HeaderError> {
        let kind = PageKind::try_from(route)?;
        let mut ctx = PageContext {
            title: route.page.clone(),
            sort_order: None,
            topic: None,
            user_name: None,
            home_account: false,
            kind: kind.clone(),
        };

        match kind {
            PageKind::PostsIndex {
                sort: SortOrder::Home,
                qualifier,
            } => {
                ctx.sort_order = Some(SortOrder::Home);
                ctx.title = t!("feed-title");
                let viewed = qualifier.as_deref().and_then(|a| a.strip_prefix('@'));
                ctx.home_account = matches!((viewed, current_account), (Some(v), Some(c)) if v == c);
            }
            PageKind::PostsIndex { sort, qualifier } => {
                ctx.sort_order = Some(sort);
                ctx.title = match &qualifier {
                    Some(topic) => format!("{topic}/{sort}"),
                    None => sort.to_string(),
                };
                ctx.topic = qualifier;
            }
            PageKind::Post { topic } => {
                ctx.topic = Some(topic);
            }
            PageKind::UserProfile { user } => {
                ctx.title = user.clone();
                ctx.user_name = Some(user);
            }
            PageKind::Other(_) => {}
        }
        Ok(ctx)
    }

    /// Posts set their own document title.
    pub fn sets_document_title(&self) -> bool {
        !matches!(self.kind, PageKind::Post { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(page: &str, params: &[&str], account: Option<&str>) -> PageContext {
        PageContext::classify(&RouteInfo::new(page, params), account).unwrap()
    }

    #[test]
    fn topic_listing_title() {
        let ctx = classify("PostsIndex", &["hot", "cats"], Some("bob"));
        assert_eq!(ctx.title, "cats/hot");
        assert_eq!(ctx.sort_order, Some(SortOrder::Hot));
        assert_eq!(ctx.topic.as_deref(), Some("cats"));
        assert!(!ctx.home_account);
        assert!(ctx.sets_document_title());
    }

    #[test]
    fn plain_listing_title_is_the_sort() {
        let ctx = classify("PostsIndex", &["trending30"], None);
        assert_eq!(ctx.title, "trending30");
        assert_eq!(ctx.topic, None);
    }

    #[test]
    fn own_home_feed() {
        crate::i18n::init();
        let ctx = classify("PostsIndex", &["home", "@alice"], Some("alice"));
        assert!(ctx.home_account);
        assert_eq!(ctx.sort_order, Some(SortOrder::Home));
        assert_eq!(ctx.topic, None);
        assert_eq!(ctx.title, crate::t!("feed-title"));
    }

    #[test]
    fn someone_elses_home_feed() {
        assert!(!classify("PostsIndex", &["home", "@alice"], Some("bob")).home_account);
        assert!(!classify("PostsIndex", &["home", "@alice"], None).home_account);
        // A prefix match is not the same account.
        assert!(!classify("PostsIndex", &["home", "@alicex"], Some("alice")).home_account);
    }

    #[test]
    fn post_keeps_topic_and_skips_document_title() {
        let ctx = classify("Post", &["cats", "@bob", "hello"], Some("bob"));
        assert_eq!(ctx.topic.as_deref(), Some("cats"));
        assert_eq!(ctx.sort_order, None);
        assert_eq!(ctx.title, "Post");
        assert!(!ctx.sets_document_title());
    }

    #[test]
    fn profile_strips_sigil() {
        let ctx = classify("UserProfile", &["@carol", "transfers"], None);
        assert_eq!(ctx.user_name.as_deref(), Some("carol"));
        assert_eq!(ctx.title, "carol");
    }

    #[test]
    fn other_pages_keep_raw_identifier() {
        let ctx = classify("Witnesses", &[], Some("bob"));
        assert_eq!(ctx.kind, PageKind::Other("Witnesses".into()));
        assert_eq!(ctx.title, "Witnesses");
        assert_eq!((ctx.topic, ctx.user_name, ctx.sort_order), (None, None, None));
    }

    #[test]
    fn arity_violations_fail_fast() {
        let bad = [
            RouteInfo::new("PostsIndex", &[]),
            RouteInfo::new("PostsIndex", &["home"]),
            RouteInfo::new("Post", &[]),
            RouteInfo::new("UserProfile", &[]),
            RouteInfo::new("UserProfile", &["carol"]),
        ];
        for route in bad {
            assert!(
                matches!(
                    PageContext::classify(&route, None),
                    Err(HeaderError::MalformedRoute { .. })
                ),
                "{route:?} should be rejected"
            );
        }
        assert_eq!(
            PageContext::classify(&RouteInfo::new("PostsIndex", &["promoted"]), None),
            Err(HeaderError::UnknownSortOrder("promoted".into()))
        );
    }
}
