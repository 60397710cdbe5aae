//! URL Shortener Client Library
//!
//! This library provides a typed client for a URL-shortening service: it turns
//! a full URL into a server-assigned short URL and resolves a short URL back to
//! the full URL it points at. Results are folded into an explicit view state so
//! that every display transition can be tested without a terminal.
//!
//! # Modules
//!
//! - `api` - HTTP handlers of the reference backend
//! - `cli` - Command-line interface implementations
//! - `client` - Shortener and expander HTTP client
//! - `config` - Configuration management and environment variables
//! - `error` - Error types of the shorten and expand flows
//! - `management` - In-memory storage behind the reference backend
//! - `server` - Reference backend HTTP server
//! - `types` - Data structures and wire formats
//! - `utils` - Utility functions and helpers
//! - `view` - Display state and its transitions
//!
//! # Example
//!
//! ```
//! use shorturl::{client::UrlClient, view::ViewState};
//!
//! #[tokio::main]
//! async fn main() -> shorturl::Res<()> {
//!     let client = UrlClient::new("http://localhost:8080");
//!     let (view, ticket) = ViewState::default().issue();
//!     let view = view.apply_shortened(ticket, client.shorten_url("https://example.com").await);
//!     println!("{}", view.short_url());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod types;
pub mod utils;
pub mod view;

/// A convenient Result type alias for operations that may fail.
///
/// Used for top-level plumbing such as configuration loading and server
/// start-up, where the caller only reports the error. The shorten and expand
/// flows use the typed errors in [`error`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for failures the program cannot recover from, such as a server that
/// cannot bind its address. Errors of the shorten and expand flows are shown
/// through the view state instead.
///
/// # Example
///
/// ```
/// error!("Failed to bind {}: {}", addr, e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
