use crate::{
    error::ShortenError,
    types::{NewUrlRequest, ShortenedUrl},
};

use super::{URLS_PATH, UrlClient};

impl UrlClient {
    /// Creates a short URL for `full_url`.
    ///
    /// The only client-side check is that `full_url` is not blank; everything
    /// else about the URL is left to the server. Exactly one request is sent
    /// and a failure is returned as is, without retry.
    ///
    /// # Returns
    ///
    /// - `Ok(ShortenedUrl)` - the created entity, guaranteed to carry a short URL
    /// - `Err(ShortenError::EmptyUrl)` - blank input, nothing was sent
    /// - `Err(ShortenError::Status)` - the server answered with a non-2xx status
    /// - `Err(ShortenError::Http)` - network or transport error
    /// - `Err(ShortenError::Malformed)` - 2xx body without a usable `shortUrl`
    ///
    /// # Example
    ///
    /// ```
    /// let client = UrlClient::new("http://localhost:8080");
    /// let url = client.shorten("https://example.com/very/long/path").await?;
    /// println!("{}", url.short_url.unwrap_or_default());
    /// ```
    pub async fn shorten(&self, full_url: &str) -> Result<ShortenedUrl, ShortenError> {
        if full_url.trim().is_empty() {
            return Err(ShortenError::EmptyUrl);
        }

        let body = NewUrlRequest {
            full_url: full_url.to_string(),
        };

        let response = self
            .http
            .post(self.endpoint(URLS_PATH))
            .json(&body)
            .send()
            .await?;

        let response = match response.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(err) => {
                return Err(match err.status() {
                    Some(status) => ShortenError::Status(status.as_u16()),
                    None => ShortenError::Http(err),
                });
            }
        };

        let created = response
            .json::<ShortenedUrl>()
            .await
            .map_err(|e| ShortenError::Malformed(e.to_string()))?;

        match created.short_url.as_deref() {
            Some(s) if !s.is_empty() => Ok(created),
            _ => Err(ShortenError::Malformed(
                "response carries no shortUrl".to_string(),
            )),
        }
    }

    /// Like [`UrlClient::shorten`], but returns only the assigned short URL.
    pub async fn shorten_url(&self, full_url: &str) -> Result<String, ShortenError> {
        let created = self.shorten(full_url).await?;
        Ok(created.short_url.unwrap_or_default())
    }
}
