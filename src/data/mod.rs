//! Demo data sources
//!
//! Screens depend on the [`DataProvider`] trait; [`MockDataProvider`] supplies
//! the fixed data set used by both front-ends.

pub mod mock;
pub mod provider;

pub use mock::MockDataProvider;
pub use provider::{AccountBalance, DataProvider};
