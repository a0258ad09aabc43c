use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::{HorizontalMenu, LocaleSwitcher, SortDropdown};
use crate::config::HeaderConfig;
use crate::core::analytics::Analytics;
use crate::core::scroll::ScrollListener;
use crate::core::session::use_session;
use crate::core::sort_memory::SortMemory;
use crate::header::HeaderController;
use crate::i18n;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Site header: logo, breadcrumb, sort-order menus and the sub-navigation
/// strip that hides while the page scrolls down.
///
/// The platform shell passes the current location path; the signed-in account
/// comes from the `Signal<Session>` context. A `SortMemory` or `Analytics`
/// provided as context replaces the process-wide defaults.
#[component]
pub fn FeedHeader(path: String) -> Element {
    i18n::init();

    let session = use_session();
    let account = session.current_account.clone();
    // Re-render on language switches provided by the platform shell.
    let _lang_marker = try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default();

    let controller = use_hook(|| {
        let sort_memory = try_consume_context::<SortMemory>().unwrap_or_else(SortMemory::global);
        let analytics = try_consume_context::<Analytics>().unwrap_or_default();
        Rc::new(RefCell::new(HeaderController::new(
            HeaderConfig::client().clone(),
            sort_memory,
            analytics,
        )))
    });
    let hidden = use_signal(|| false);
    let listener: Rc<RefCell<Option<ScrollListener>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_hook({
        let controller = controller.clone();
        let account = account.clone();
        move || controller.borrow().identify(account.as_deref())
    });

    use_effect({
        let controller = controller.clone();
        let listener = listener.clone();
        move || {
            if listener.borrow().is_some() {
                return;
            }
            let controller = controller.clone();
            let mut hidden = hidden;
            *listener.borrow_mut() = ScrollListener::attach(move |y| {
                let mut header = controller.borrow_mut();
                if header.on_scroll(y) {
                    hidden.set(header.subheader_hidden());
                }
            });
        }
    });

    use_drop({
        let listener = listener.clone();
        move || {
            listener.borrow_mut().take();
        }
    });

    controller.borrow_mut().observe_path(&path);
    let derived = controller.borrow().view(&path, account.as_deref());
    let config = HeaderConfig::client();
    let app_name = config.app_name.clone();
    let beta = config.beta_label.clone();
    let icon = config.app_icon.clone();

    let view = match derived {
        Ok(view) => view,
        Err(err) => {
            tracing::error!(%err, path = %path, "header could not be derived");
            let home = format!("/{}", config.default_sort);
            return rsx! {
                document::Link { rel: "stylesheet", href: HEADER_CSS }
                header { class: "Header noPrint",
                    div { class: "Header__top header",
                        ul { class: "menu",
                            li { class: "Header__top-brand",
                                Link { to: home, "{app_name}" }
                            }
                        }
                    }
                }
            };
        }
    };

    let sub_nav_class = if hidden() {
        "Header__sub-nav expanded show-for-medium row hidden"
    } else {
        "Header__sub-nav expanded show-for-medium row"
    };
    let show_sort_delim = view.has_breadcrumb() && view.page.sort_order.is_some();
    let extra = view.extra.clone().filter(|_| view.show_extra);

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if let Some(title) = view.document_title.clone() {
            document::Title { "{title}" }
        }

        header { class: "Header noPrint",
            div { class: "Header__top header",
                div { class: "expanded row",
                    div { class: "columns",
                        ul { class: "menu",
                            li { class: "Header__top-logo",
                                Link { to: view.logo_link.clone(),
                                    span { class: "Header__icon Header__icon--{icon}", aria_hidden: "true" }
                                }
                            }
                            li { class: "Header__top-brand show-for-medium noPrint",
                                Link { to: view.logo_link.clone(),
                                    "{app_name}"
                                    if !beta.is_empty() {
                                        span { class: "beta", "{beta}" }
                                    }
                                }
                            }

                            if view.has_breadcrumb() {
                                li { class: "delim show-for-medium", "|" }
                            }
                            if let Some(topic) = view.topic.clone() {
                                li { class: "Header__top-topic",
                                    Link { to: topic.link, {topic.label} }
                                }
                            }
                            if let Some(user) = view.user.clone() {
                                li { class: "Header__top-user",
                                    Link { to: user.link, {user.label} }
                                }
                            }
                            if show_sort_delim {
                                li { class: "delim show-for-small-only", "|" }
                            }
                            SortDropdown {
                                class: "Header__sort-order-menu show-for-small-only",
                                items: view.dropdown.items.clone(),
                                selected: view.dropdown.selected_label.clone(),
                            }
                        }
                    }
                    div { class: "columns shrink",
                        LocaleSwitcher {}
                    }
                }
            }
            div { class: sub_nav_class,
                div { class: "columns",
                    HorizontalMenu { items: view.horizontal.clone() }
                }
                div { class: "columns shrink",
                    if let Some(items) = extra {
                        HorizontalMenu { items }
                    }
                }
            }
        }
    }
}
