//! pr-mill - create and merge pull requests to build up activity on a
//! GitHub repository
//!
//! The library is split the same way the binary uses it:
//! - [`config`] - validated run configuration and the opaque token type
//! - [`auth`] - token resolution from flag or environment
//! - [`generate`] - randomized text and pacing capabilities
//! - [`run`] - the sequential run engine (plan pure / execute effectful)
//! - [`platform`] - the repository service trait and its GitHub backing
//! - [`error`] / [`types`] - shared error and domain types

pub mod auth;
pub mod config;
pub mod error;
pub mod generate;
pub mod platform;
pub mod run;
pub mod types;
