//! Locale-routing gateway for the AskYourMufti Q&A and lecture archive.
//!
//! Every public page URL carries a locale prefix (`/ur/topics`). Requests
//! without one are redirected using the visitor's stored preference, and
//! requests with one refresh that preference. API, framework and static
//! asset routes are left alone.

pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod routing;
pub mod server;
