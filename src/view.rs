//! Display state of the shortener and its transitions.
//!
//! The state is a plain value: every transition consumes it and returns the
//! next one, so the same request result always produces the same display.
//!
//! Requests are sequenced with [`Ticket`]s. A result carrying a ticket older
//! than the last applied one is dropped, so a slow response can never
//! overwrite a newer one.

use crate::error::{ExpandError, GENERIC_ERROR_MESSAGE, ShortenError};

/// Sequence number handed out when a request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    short_url: String,
    full_url: String,
    error_message: String,
    last_queried: String,
    issued: u64,
    applied: u64,
}

impl ViewState {
    /// Issues a ticket for a new request.
    ///
    /// A result is applied only if its ticket is newer than the last applied
    /// one, so whichever request was issued last wins regardless of the order
    /// in which responses arrive.
    pub fn issue(mut self) -> (Self, Ticket) {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        (self, ticket)
    }

    pub fn short_url(&self) -> &str {
        &self.short_url
    }

    pub fn full_url(&self) -> &str {
        &self.full_url
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn last_queried(&self) -> &str {
        &self.last_queried
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    fn accepts(&self, ticket: Ticket) -> bool {
        ticket.0 > self.applied
    }

    fn stamped(mut self, ticket: Ticket) -> Self {
        self.applied = ticket.0;
        self.issued = self.issued.max(ticket.0);
        self
    }

    /// Folds the result of a shorten call into the view.
    ///
    /// On failure the previous short URL stays on screen and the generic
    /// message is shown.
    pub fn apply_shortened(self, ticket: Ticket, result: Result<String, ShortenError>) -> Self {
        if !self.accepts(ticket) {
            return self;
        }

        let mut next = self.stamped(ticket);
        match result {
            Ok(short_url) => {
                next.short_url = short_url;
                next.error_message.clear();
            }
            Err(_) => {
                next.error_message = GENERIC_ERROR_MESSAGE.to_string();
            }
        }
        next
    }

    /// Folds the result of an expand call for `short_url` into the view.
    ///
    /// | result    | full URL  | error message              |
    /// |-----------|-----------|----------------------------|
    /// | success   | resolved  | cleared                    |
    /// | not found | cleared   | `<short_url> URL not found`|
    /// | other     | unchanged | `An error occurred`        |
    pub fn apply_expanded(
        self,
        ticket: Ticket,
        short_url: &str,
        result: Result<String, ExpandError>,
    ) -> Self {
        if !self.accepts(ticket) {
            return self;
        }

        let mut next = self.stamped(ticket);
        next.last_queried = short_url.to_string();
        match result {
            Ok(full_url) => {
                next.full_url = full_url;
                next.error_message.clear();
            }
            Err(err @ ExpandError::NotFound { .. }) => {
                next.full_url.clear();
                next.error_message = err.to_string();
            }
            Err(err @ ExpandError::Other { .. }) => {
                next.error_message = err.to_string();
            }
        }
        next
    }
}
