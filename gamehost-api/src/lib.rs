//! # gamehost-api
//!
//! The host runtime interface a hosted extension module is written against,
//! plus the payload types its operations move around.
//!
//! This crate carries no implementation: the live runtime implements
//! [`HostModule`] against real state, and `gamehost-mock` implements it as a
//! configurable test double. Module code that takes `&dyn HostModule` runs
//! unmodified against either.
//!
//! The crate is deliberately minimal so that extension modules depend only on
//! the contract, not on any runtime machinery.

#![deny(clippy::wildcard_imports)]

mod error;
mod module;
pub mod types;

pub use error::{BoxError, HostError};
pub use module::{HostModule, RecordPage};
