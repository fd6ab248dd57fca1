//! # Engine crate — the client-side state machines
//!
//! The two stateful cores of the booking client, written against the abstract
//! [`api::Gateway`] so they are testable without a backend:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`auth::AuthFlow`] — phone-verification session state machine (mode transitions, OTP dispatch/verify, resend cooldown) |
//! | [`search`] | [`search::SearchFeed`] — incremental provider-search pagination (cursor, run token, duplicate/race guards) |
//! | [`phone`] | Country registry and E.164 number composition |
//! | [`window`] | Fixed-row-height windowing math for the virtualized list |
//!
//! Both engines assume the single-threaded cooperative async model of the UI
//! shells: state lives behind `RefCell` and is never borrowed across an await,
//! so overlapping async operations interleave only at suspension points.

pub mod auth;
pub mod phone;
pub mod search;
pub mod window;

#[cfg(test)]
mod mock;

pub use auth::{AuthError, AuthFlow, AuthMode, BaseMode, SocialProvider};
pub use phone::{Country, PhoneError};
pub use search::{PageCursor, SearchFeed, SearchQuery, PAGE_SIZE};
