//! # gamehost-mock
//!
//! A configurable test double for the gamehost runtime API, for exercising
//! extension-module logic without a live host process.
//!
//! The double has two parts:
//!
//! - **Capability table** ([`MockHostModule`]): one optional behavior slot
//!   per host operation, all empty by default. Slots are plain public fields
//!   named after their operations; binding one is a struct-literal field, so
//!   an unknown operation or a mismatched signature is a compile error.
//! - **Dispatcher** (the `HostModule` impl): resolves each call to its slot
//!   and invokes the bound behavior with every argument forwarded verbatim.
//!   An empty slot fails with [`HostError::Unconfigured`] naming the
//!   operation - never a silent default, so forgotten setup fails the test
//!   instead of passing it.
//!
//! The double records nothing and matches nothing: it is a substitution
//! mechanism, not a mocking framework. Call counting, argument capture, and
//! shared state all live inside the behaviors a test chooses to bind.
//!
//! # Example
//!
//! ```
//! use gamehost_api::HostModule;
//! use gamehost_api::types::Wallet;
//! use gamehost_mock::MockHostModule;
//!
//! let nk = MockHostModule {
//!     wallet_update: Some(Box::new(|_user_id, _changeset, _metadata, _update_ledger| {
//!         Ok((Wallet::from([("gems".to_string(), 10)]), None))
//!     })),
//!     ..Default::default()
//! };
//!
//! // Module code written against `&dyn HostModule` runs unmodified.
//! fn grant_gems(nk: &dyn HostModule) -> Result<i64, gamehost_api::HostError> {
//!     let (updated, _previous) =
//!         nk.wallet_update("user-1", &Wallet::new(), &Default::default(), false)?;
//!     Ok(updated["gems"])
//! }
//!
//! assert_eq!(grant_gems(&nk).unwrap(), 10);
//! ```
//!
//! # Feature flags
//!
//! - `tracing`: emit trace/debug events at slot resolution. Off by default;
//!   the double itself never logs otherwise.
//!
//! [`HostError::Unconfigured`]: gamehost_api::HostError::Unconfigured

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatch;
mod mock;
pub mod slot;

pub use gamehost_api;
pub use mock::MockHostModule;
pub use slot::Slot;
