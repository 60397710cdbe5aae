//! # CLI Module
//!
//! User-facing commands of the shortener client. Each command maps to one
//! client call, folds the result into a [`ViewState`] and prints the view.
//!
//! ## Commands
//!
//! - [`shorten`] - create a short URL for a full URL
//! - [`expand`] - resolve a short URL, optionally opening it in the browser
//! - [`shell`] - interactive loop threading one view through many calls
//! - [`serve`] - run the reference backend
//!
//! ## Usage Patterns
//!
//! ```bash
//! shorturl serve                                     # local backend on 127.0.0.1:8080
//! shorturl shorten https://example.com/very/long/path
//! shorturl expand http://short.url/5d41402abc --open
//! shorturl --api-url https://sho.rt shell
//! ```
//!
//! Failures of the shorten and expand flows are displayed through the view,
//! never escalated; the commands only report them through the exit status.

mod expand;
mod serve;
mod shell;
mod shorten;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{info, success, view::ViewState, warning};

pub use expand::expand;
pub use serve::serve;
pub use shell::shell;
pub use shorten::shorten;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Prints the display fields of the view.
pub fn render(view: &ViewState) {
    if !view.short_url().is_empty() {
        success!("Short URL: {}", view.short_url());
    }
    if !view.last_queried().is_empty() {
        info!("Last queried: {}", view.last_queried());
    }
    if !view.full_url().is_empty() {
        success!("Full URL: {}", view.full_url());
    }
    if view.has_error() {
        warning!("{}", view.error_message());
    }
}
