use sha2::{Digest, Sha256};

pub const SHORT_CODE_LEN: usize = 10;

/// Derives the short code for a full URL: the first ten lowercase hex
/// characters of its SHA-256 digest.
pub fn generate_short_code(full_url: &str) -> String {
    let mut code = hex::encode(Sha256::digest(full_url.as_bytes()));
    code.truncate(SHORT_CODE_LEN);
    code
}

/// Builds the short URL for `full_url` under `base`, e.g.
/// `http://short.url/` + `generate_short_code(full_url)`.
///
/// Returns an empty string for an empty full URL.
pub fn generate_short_url(full_url: &str, base: &str) -> String {
    if full_url.is_empty() {
        return String::new();
    }
    format!("{}{}", base, generate_short_code(full_url))
}
