//! Navigation header: page classification, sort-order menus and the
//! scroll-driven sub-navigation visibility.
//!
//! [`HeaderController`] is the entry point; the remaining modules are the
//! pure pieces it is assembled from.

mod controller;
pub mod menu;
pub mod page;
pub mod sort_order;
pub mod visibility;

pub use controller::{Breadcrumb, HeaderController, HeaderView};
pub use menu::{DropdownMenu, MenuInputs, MenuItem};
pub use page::{PageContext, PageKind};
pub use sort_order::{sort_order_to_link, LabelStyle, SortOrder};
pub use visibility::{SubheaderVisibility, Visibility};
