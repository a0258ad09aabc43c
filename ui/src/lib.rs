//! Shared UI crate for Feedline: the navigation header, route resolution and
//! localization used by every platform shell.

pub mod config;
pub mod core;
pub mod header;
pub mod i18n;
pub mod route;
pub mod views;

pub mod components {
    // Site header (components/feed_header.rs)
    mod feed_header;
    pub use feed_header::FeedHeader;

    // Sort-order menus for the compact and wide layouts
    mod sort_menus;
    pub use sort_menus::{HorizontalMenu, SortDropdown};

    mod locale_switcher;
    pub use locale_switcher::LocaleSwitcher;
}

pub use header::{HeaderController, HeaderView, SortOrder};
