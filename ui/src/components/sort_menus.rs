use dioxus::prelude::*;

use crate::header::MenuItem;
use crate::t;

/// Compact layout: caption shows the current listing, the list the others.
#[component]
pub fn SortDropdown(class: String, items: Vec<MenuItem>, selected: String) -> Element {
    let mut open = use_signal(|| false);
    let state = if open() { "is-open" } else { "is-closed" };
    let label = t!("header-sort-menu-label");

    rsx! {
        li { class: "DropdownMenu {class} {state}",
            button {
                class: "DropdownMenu__toggle",
                aria_label: "{label}",
                aria_expanded: "{open()}",
                onclick: move |_| open.toggle(),
                "{selected}"
                span { class: "DropdownMenu__caret", aria_hidden: "true", "▾" }
            }
            if open() {
                ul { class: "DropdownMenu__items",
                    for item in items {
                        li { key: "{item.link}",
                            Link {
                                to: item.link.clone(),
                                onclick: move |_| open.set(false),
                                {item.label}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Wide layout: every entry, the current one marked active.
#[component]
pub fn HorizontalMenu(items: Vec<MenuItem>) -> Element {
    rsx! {
        ul { class: "HorizontalMenu menu",
            for item in items {
                li {
                    key: "{item.link}",
                    class: if item.active { "active" } else { "" },
                    Link { to: item.link.clone(), {item.label} }
                }
            }
        }
    }
}
