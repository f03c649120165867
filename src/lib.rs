//! GrowBank - a youth banking demo for the terminal
//!
//! Parents onboard a child and manage allowances and spending limits; young
//! savers track savings pots and, on turning 18, get a graduation celebration.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: tracing subscriber setup
//! - `models`: Core data models (money, savings pots, children, transactions)
//! - `data`: Read-only data provider with the demo data set
//! - `navigation`: Routes and the navigation history
//! - `flow`: Step wizard, celebration sequencer and deferred progress
//! - `screens`: View models for every screen
//! - `display`: Table formatting for CLI output
//! - `cli`: Command handlers and line-prompt flows
//! - `tui`: Terminal user interface
//!
//! # Example
//!
//! ```rust,ignore
//! use growbank::config::{GrowBankPaths, Settings};
//!
//! let paths = GrowBankPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod flow;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod screens;
pub mod tui;

pub use error::{GrowBankError, GrowBankResult};
