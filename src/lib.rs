//! # datepoll
//!
//! Create Framadate date polls from compact day and time expressions.
//!
//! ## Usage
//!
//! ```bash
//! datepoll create --name Ann --title Climbing --email ann@example.org \
//!     --framadate https://framadate.org mo-fr 18,20:30
//! ```
//!
//! ## Modules
//!
//! - `app` - Logging setup and fatal error reporting
//! - `cli` - Command line arguments and command implementations
//! - `config` - User defaults from a TOML file and environment variables
//! - `error` - Crate-wide error type and exit codes
//! - `expr` - Day range and time list expression parsing
//! - `framadate` - The three-step poll creation workflow and poll deletion
//! - `transport` - Cookie-session HTTP form transport, with a mock for tests
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod expr;
pub mod framadate;
pub mod transport;

pub use error::{Error, Result};
