use std::collections::HashMap;

use chrono::Utc;

use crate::{types::ShortenedUrl, utils};

/// Outcome of [`UrlStore::create`].
#[derive(Debug, Clone, PartialEq)]
pub enum Created {
    New(ShortenedUrl),
    Existing(ShortenedUrl),
}

#[derive(Debug, PartialEq, Eq)]
pub enum StoreError {
    IdPresent,
    MissingFullUrl,
}

/// In-memory URL entities, indexed by short URL.
pub struct UrlStore {
    short_base: String,
    next_id: i64,
    by_short: HashMap<String, ShortenedUrl>,
}

impl UrlStore {
    pub fn new(short_base: impl Into<String>) -> Self {
        Self {
            short_base: short_base.into(),
            next_id: 1,
            by_short: HashMap::new(),
        }
    }

    /// Stores a new entity.
    ///
    /// The short URL is derived from the full URL unless the request brings
    /// its own. Short URLs stay unique: creating one that already exists
    /// returns the stored entity untouched.
    pub fn create(&mut self, mut url: ShortenedUrl) -> Result<Created, StoreError> {
        if url.id.is_some() {
            return Err(StoreError::IdPresent);
        }

        let full_url = match url.full_url.as_deref() {
            Some(f) if !f.trim().is_empty() => f.to_string(),
            _ => return Err(StoreError::MissingFullUrl),
        };

        let short_url = match url.short_url.take() {
            Some(s) if !s.is_empty() => s,
            _ => utils::generate_short_url(&full_url, &self.short_base),
        };

        if let Some(existing) = self.by_short.get(&short_url) {
            return Ok(Created::Existing(existing.clone()));
        }

        url.id = Some(self.next_id);
        self.next_id += 1;
        url.short_url = Some(short_url.clone());
        url.creation_date_time = Some(Utc::now());

        self.by_short.insert(short_url, url.clone());
        Ok(Created::New(url))
    }

    pub fn find_by_short_url(&self, short_url: &str) -> Option<&ShortenedUrl> {
        self.by_short.get(short_url)
    }

    pub fn count(&self) -> usize {
        self.by_short.len()
    }
}
