use reqwest::StatusCode;

use crate::{error::ExpandError, types::ShortenedUrl};

use super::{LOOKUP_PATH, UrlClient};

impl UrlClient {
    /// Resolves `short_url` to the full URL it was created for.
    ///
    /// The short URL is not validated; it is sent verbatim as the `url` query
    /// parameter. Every call queries the server again.
    ///
    /// # Returns
    ///
    /// - `Ok(String)` - the resolved full URL
    /// - `Err(ExpandError::NotFound)` - the server answered 404
    /// - `Err(ExpandError::Other)` - any other status, a transport error, or a
    ///   body without `fullUrl`
    ///
    /// # Example
    ///
    /// ```
    /// match client.expand("abc123").await {
    ///     Ok(full) => println!("{}", full),
    ///     Err(e) => println!("{}", e), // "abc123 URL not found" or "An error occurred"
    /// }
    /// ```
    pub async fn expand(&self, short_url: &str) -> Result<String, ExpandError> {
        let response = self
            .http
            .get(self.endpoint(LOOKUP_PATH))
            .query(&[("url", short_url)])
            .send()
            .await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if err.status() == Some(StatusCode::NOT_FOUND) {
                        return Err(ExpandError::NotFound {
                            short_url: short_url.to_string(),
                        });
                    }
                    return Err(err.into());
                }
            },
            Err(err) => return Err(err.into()), // network or reqwest error
        };

        let found = response.json::<ShortenedUrl>().await?;

        found
            .full_url
            .ok_or_else(|| ExpandError::other("response carries no fullUrl"))
    }
}
