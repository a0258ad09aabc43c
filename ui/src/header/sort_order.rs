//! Listing sort orders and the link rule shared by every header menu.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::HeaderError;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Personal feed of followed accounts (`/@account/feed`).
    Home,
    Created,
    Hot,
    Trending,
    Trending30,
    Active,
}

/// Which menu a label is rendered in; the wide menu uses shorter labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    Dropdown,
    Horizontal,
}

impl SortOrder {
    pub const ALL: [SortOrder; 6] = [
        SortOrder::Home,
        SortOrder::Created,
        SortOrder::Hot,
        SortOrder::Trending,
        SortOrder::Trending30,
        SortOrder::Active,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Home => "home",
            SortOrder::Created => "created",
            SortOrder::Hot => "hot",
            SortOrder::Trending => "trending",
            SortOrder::Trending30 => "trending30",
            SortOrder::Active => "active",
        }
    }

    /// Menu entries in display order; `home` leads only for a signed-in account.
    pub fn menu_entries(signed_in: bool) -> Vec<SortOrder> {
        let mut entries = vec![
            SortOrder::Created,
            SortOrder::Hot,
            SortOrder::Trending,
            SortOrder::Active,
        ];
        if signed_in {
            entries.insert(0, SortOrder::Home);
        }
        entries
    }

    pub fn label(self, style: LabelStyle) -> String {
        match (self, style) {
            (SortOrder::Home, _) => t!("sort-home"),
            (SortOrder::Created, _) => t!("sort-new"),
            (SortOrder::Hot, _) => t!("sort-hot"),
            (SortOrder::Trending, LabelStyle::Dropdown) => t!("sort-trending-24-hour"),
            (SortOrder::Trending30, LabelStyle::Dropdown) => t!("sort-trending-30-day"),
            (SortOrder::Trending | SortOrder::Trending30, LabelStyle::Horizontal) => {
                t!("sort-trending")
            }
            (SortOrder::Active, _) => t!("sort-active"),
        }
    }

    /// Whether `self` counts as the current listing in the wide menu.
    pub fn highlights(self, current: Option<SortOrder>) -> bool {
        match current {
            Some(SortOrder::Trending30) => {
                matches!(self, SortOrder::Trending | SortOrder::Trending30)
            }
            Some(current) => self == current,
            None => false,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| HeaderError::UnknownSortOrder(s.to_string()))
    }
}

/// Link target for a sort order:
/// - `home` → `/@{account}/feed`
/// - with a topic → `/{order}/{topic}`
/// - otherwise → `/{order}`
pub fn sort_order_to_link(order: SortOrder, topic: Option<&str>, account: Option<&str>) -> String {
    if order == SortOrder::Home {
        return format!("/@{}/feed", account.unwrap_or_default());
    }
    match topic.filter(|t| !t.is_empty()) {
        Some(topic) => format!("/{order}/{topic}"),
        None => format!("/{order}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_rule_table() {
        assert_eq!(
            sort_order_to_link(SortOrder::Home, None, Some("alice")),
            "/@alice/feed"
        );
        assert_eq!(
            sort_order_to_link(SortOrder::Home, Some("funny"), Some("alice")),
            "/@alice/feed"
        );
        assert_eq!(
            sort_order_to_link(SortOrder::Hot, Some("funny"), None),
            "/hot/funny"
        );
        assert_eq!(sort_order_to_link(SortOrder::Active, None, None), "/active");
        assert_eq!(sort_order_to_link(SortOrder::Created, Some(""), None), "/created");
        assert_eq!(
            sort_order_to_link(SortOrder::Trending30, Some("art"), Some("bob")),
            "/trending30/art"
        );
    }

    #[test]
    fn every_order_links_under_its_own_name() {
        for order in SortOrder::ALL.into_iter().filter(|o| *o != SortOrder::Home) {
            assert_eq!(sort_order_to_link(order, None, None), format!("/{}", order.as_str()));
            assert_eq!(
                sort_order_to_link(order, Some("t"), Some("x")),
                format!("/{}/t", order.as_str())
            );
        }
    }

    #[test]
    fn parses_every_name_and_rejects_others() {
        for order in SortOrder::ALL {
            assert_eq!(order.as_str().parse::<SortOrder>().unwrap(), order);
        }
        assert!(matches!(
            "promoted".parse::<SortOrder>(),
            Err(HeaderError::UnknownSortOrder(name)) if name == "promoted"
        ));
    }

    #[test]
    fn home_leads_only_when_signed_in() {
        assert_eq!(SortOrder::menu_entries(true)[0], SortOrder::Home);
        assert!(!SortOrder::menu_entries(false).contains(&SortOrder::Home));
        assert!(!SortOrder::menu_entries(true).contains(&SortOrder::Trending30));
    }

    #[test]
    fn trending30_highlights_trending() {
        assert!(SortOrder::Trending.highlights(Some(SortOrder::Trending30)));
        assert!(SortOrder::Hot.highlights(Some(SortOrder::Hot)));
        assert!(!SortOrder::Hot.highlights(None));
        assert!(!SortOrder::Trending30.highlights(Some(SortOrder::Trending)));
    }

    #[test]
    fn wide_menu_shares_the_trending_label() {
        crate::i18n::init();
        let wide = |o: SortOrder| o.label(LabelStyle::Horizontal);
        let compact = |o: SortOrder| o.label(LabelStyle::Dropdown);
        assert_eq!(wide(SortOrder::Trending), wide(SortOrder::Trending30));
        assert_ne!(compact(SortOrder::Trending), compact(SortOrder::Trending30));
        assert_ne!(compact(SortOrder::Trending), wide(SortOrder::Trending));
        assert_eq!(compact(SortOrder::Hot), wide(SortOrder::Hot));
    }

    #[test]
    fn serde_uses_route_names() {
        let order: SortOrder = serde_json::from_str("\"trending30\"").unwrap();
        assert_eq!(order, SortOrder::Trending30);
    }
}
