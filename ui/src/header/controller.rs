use crate::config::HeaderConfig;
use crate::core::analytics::{report_identify, report_page, Analytics};
use crate::core::error::HeaderError;
use crate::core::sort_memory::SortMemory;
use crate::core::topic::display_topic;
use crate::route::{self, RouteInfo};

use super::menu::{dropdown_menu, extra_menu, horizontal_menu, DropdownMenu, MenuInputs, MenuItem};
use super::page::PageContext;
use super::visibility::SubheaderVisibility;
use super::SortOrder;

/// A labelled link in the header's breadcrumb area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub link: String,
    pub label: String,
}

/// Everything the header renders for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub page: PageContext,
    /// `None` when the page manages the document title itself.
    pub document_title: Option<String>,
    pub logo_link: String,
    pub topic: Option<Breadcrumb>,
    pub user: Option<Breadcrumb>,
    pub dropdown: DropdownMenu,
    pub horizontal: Vec<MenuItem>,
    /// Computed for trending listings, rendered only when `show_extra` is set.
    pub extra: Option<Vec<MenuItem>>,
    pub show_extra: bool,
    pub subheader_hidden: bool,
}

impl HeaderView {
    pub fn has_breadcrumb(&self) -> bool {
        self.topic.is_some() || self.user.is_some()
    }
}

/// Per-instance header state: scroll visibility and route bookkeeping.
///
/// One controller lives as long as the mounted header. Rendering is a pure
/// function of the path, the signed-in account and this state.
#[derive(Debug)]
pub struct HeaderController {
    config: HeaderConfig,
    sort_memory: SortMemory,
    analytics: Analytics,
    visibility: SubheaderVisibility,
    previous_path: Option<String>,
}

impl HeaderController {
    pub fn new(config: HeaderConfig, sort_memory: SortMemory, analytics: Analytics) -> Self {
        Self {
            config,
            sort_memory,
            analytics,
            visibility: SubheaderVisibility::new(),
            previous_path: None,
        }
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    pub fn sort_memory(&self) -> &SortMemory {
        &self.sort_memory
    }

    /// Tell analytics who is browsing; called once when the header mounts.
    pub fn identify(&self, account: Option<&str>) {
        report_identify(self.analytics.sink(), account);
    }

    /// Record a location. Returns `false` when `path` equals the previously
    /// observed path, in which case nothing happens.
    pub fn observe_path(&mut self, path: &str) -> bool {
        if self.previous_path.as_deref() == Some(path) {
            return false;
        }
        report_page(self.analytics.sink(), path);

        if let Some(RouteInfo { page, params }) = route::resolve(path) {
            if page == "PostsIndex" {
                if let Some(Ok(order)) = params.first().map(|p| p.parse::<SortOrder>()) {
                    if order != SortOrder::Home {
                        tracing::debug!(%order, "remembering listing sort order");
                        self.sort_memory.remember(order);
                    }
                }
            }
        }
        self.previous_path = Some(path.to_string());
        true
    }

    /// Feed a scroll offset; returns whether the sub-navigation visibility changed.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        self.visibility.on_scroll(y)
    }

    pub fn subheader_hidden(&self) -> bool {
        self.visibility.is_hidden()
    }

    /// Sort order the logo and breadcrumbs lead back to.
    pub fn return_sort(&self) -> SortOrder {
        self.sort_memory.get().unwrap_or(self.config.default_sort)
    }

    pub fn view(&self, path: &str, account: Option<&str>) -> Result<HeaderView, HeaderError> {
        let route = route::resolve(path).ok_or_else(|| HeaderError::RouteResolution {
            path: path.to_string(),
        })?;
        let page = PageContext::classify(&route, account)?;
        let return_sort = self.return_sort();

        let document_title = page
            .sets_document_title()
            .then(|| self.config.document_title(&page.title));

        let topic = page.topic.as_deref().map(|topic| Breadcrumb {
            link: format!("/{return_sort}/{topic}"),
            label: display_topic(topic),
        });
        let user = page.user_name.as_deref().map(|user| Breadcrumb {
            link: format!("/@{user}"),
            label: user.to_string(),
        });

        let inputs = MenuInputs {
            sort_order: page.sort_order,
            topic: page.topic.as_deref(),
            account,
            home_account: page.home_account,
        };
        let dropdown = dropdown_menu(&inputs);
        let horizontal = horizontal_menu(&inputs);
        let extra = extra_menu(&inputs);

        Ok(HeaderView {
            document_title,
            logo_link: format!("/{return_sort}"),
            topic,
            user,
            dropdown,
            horizontal,
            show_extra: self.config.show_trending_toggle && extra.is_some(),
            extra,
            subheader_hidden: self.visibility.is_hidden(),
            page,
        })
    }
}
