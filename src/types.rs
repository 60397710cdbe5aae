use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tabled::Tabled;

/// A full URL together with the short URL the service assigned to it.
///
/// Every field is optional on the wire: clients only rely on `short_url` after
/// a create call and on `full_url` after a lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedUrl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub full_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub creation_date_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub expiration_date_time: Option<DateTime<Utc>>,
}

/// Reads an RFC 3339 timestamp, or a zoneless one taken as UTC. Anything else
/// becomes `None` instead of failing the whole entity.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::String(raw)) = value else {
        return Ok(None);
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }

    Ok(NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc()))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUrlRequest {
    pub full_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookupQuery {
    pub url: Option<String>,
}

#[derive(Tabled)]
pub struct UrlTableRow {
    pub short_url: String,
    pub full_url: String,
    pub created: String,
    pub expires: String,
}

impl From<&ShortenedUrl> for UrlTableRow {
    fn from(url: &ShortenedUrl) -> Self {
        let fmt = |ts: &Option<DateTime<Utc>>| {
            ts.as_ref()
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "-".to_string())
        };

        UrlTableRow {
            short_url: url.short_url.clone().unwrap_or_default(),
            full_url: url.full_url.clone().unwrap_or_default(),
            created: fmt(&url.creation_date_time),
            expires: fmt(&url.expiration_date_time),
        }
    }
}
