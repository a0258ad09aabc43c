mod listing;
pub use listing::Listing;
