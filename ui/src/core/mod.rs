//! Services the header is built on: analytics, shared sort memory, session,
//! scroll subscription and formatting helpers.

pub mod analytics;
pub mod error;
pub mod scroll;
pub mod session;
pub mod sort_memory;
pub mod topic;
