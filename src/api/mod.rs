//! # API Module
//!
//! HTTP handlers of the reference backend. They implement the two endpoints the
//! client consumes, plus a health check:
//!
//! - [`create_url`] - `POST /api/urls`, assigns a short URL to a full URL
//! - [`find_by_short_url`] - `GET /api/urls/shorturl?url=`, resolves a short URL
//!   or answers `404`
//! - [`health`] - `GET /health`, status, version and number of stored URLs
//!
//! All handlers share the in-memory store through an axum [`Extension`]
//! holding a [`SharedStore`](crate::management::SharedStore).
//!
//! [`Extension`]: axum::Extension

mod health;
mod urls;

pub use health::health;
pub use urls::create_url;
pub use urls::find_by_short_url;
