//! Menu derivation for the two header layouts.
//!
//! Both menus are pure functions of the current sort order, the topic and the
//! signed-in account; the compact layout shows a dropdown of the *other* sort
//! orders, the wide layout a horizontal strip of all of them.

use super::sort_order::{sort_order_to_link, LabelStyle, SortOrder};
use crate::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub link: String,
    pub label: String,
    pub active: bool,
}

/// Inputs shared by every menu derivation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuInputs<'a> {
    pub sort_order: Option<SortOrder>,
    pub topic: Option<&'a str>,
    pub account: Option<&'a str>,
    /// Only consulted when `sort_order` is `home`.
    pub home_account: bool,
}

impl MenuInputs<'_> {
    fn item(&self, order: SortOrder, style: LabelStyle, active: bool) -> MenuItem {
        MenuItem {
            link: sort_order_to_link(order, self.topic, self.account),
            label: order.label(style),
            active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownMenu {
    pub items: Vec<MenuItem>,
    /// Label shown on the closed dropdown.
    pub selected: SortOrder,
    pub selected_label: String,
}

/// Dropdown (compact layout): every sort order except the current one.
/// Routes without a matching sort order fall back to `trending` as the
/// selected entry so the dropdown never shows an empty caption.
pub fn dropdown_menu(inputs: &MenuInputs<'_>) -> DropdownMenu {
    let entries = SortOrder::menu_entries(inputs.account.is_some());
    let items = entries
        .iter()
        .copied()
        .filter(|order| Some(*order) != inputs.sort_order)
        .map(|order| inputs.item(order, LabelStyle::Dropdown, false))
        .collect();
    let selected = inputs
        .sort_order
        .filter(|current| entries.contains(current))
        .unwrap_or(SortOrder::Trending);
    DropdownMenu {
        items,
        selected,
        selected_label: selected.label(LabelStyle::Dropdown),
    }
}

/// Horizontal menu (wide layout): all sort orders with an `active` flag.
pub fn horizontal_menu(inputs: &MenuInputs<'_>) -> Vec<MenuItem> {
    SortOrder::menu_entries(inputs.account.is_some())
        .into_iter()
        .map(|order| {
            let mut active = order.highlights(inputs.sort_order);
            if order == SortOrder::Home && !inputs.home_account {
                active = false;
            }
            inputs.item(order, LabelStyle::Horizontal, active)
        })
        .collect()
}

/// 24h / 30d toggle for trending listings; `None` elsewhere.
pub fn extra_menu(inputs: &MenuInputs<'_>) -> Option<Vec<MenuItem>> {
    let current = inputs.sort_order?;
    if !matches!(current, SortOrder::Trending | SortOrder::Trending30) {
        return None;
    }
    let topic = inputs.topic.unwrap_or_default();
    Some(vec![
        MenuItem {
            link: format!("/trending/{topic}"),
            label: t!("sort-window-24-hour"),
            active: current == SortOrder::Trending,
        },
        MenuItem {
            link: format!("/trending30/{topic}"),
            label: t!("sort-window-30-day"),
            active: current == SortOrder::Trending30,
        },
    ])
}
