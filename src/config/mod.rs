//! Configuration module for GrowBank
//!
//! - Platform-aware path resolution
//! - User settings persistence
//! - Demo knobs handed to screens as configuration

pub mod paths;
pub mod settings;

pub use paths::GrowBankPaths;
pub use settings::Settings;
