//! Wire DTOs for the scrape and auth services.
//!
//! DESIGN
//! ======
//! Scraped rows come from several independent services whose JSON is loosely
//! typed (nulls, numbers where strings are expected, extra Mongo fields), so
//! every row field deserializes leniently into a `String`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// One scraped product listing from a retailer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub platform: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub product_name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub price: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub quantity: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub raw_text: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub search_term: String,
}

/// Body of `GET /results` and `GET /latest`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ResultsResponse {
    #[serde(default)]
    pub items: Vec<ProductRow>,
    /// Only present on `/latest`.
    #[serde(default)]
    pub last_term: Option<String>,
}

/// Body of `POST /scrape`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
}

impl ScrapeResponse {
    /// Error message for a scrape reply, or `None` when it succeeded.
    pub fn failure(&self, http_ok: bool) -> Option<String> {
        if http_ok && self.status.as_deref() != Some("error") {
            return None;
        }
        let message = [self.error.as_deref(), self.stderr.as_deref()]
            .into_iter()
            .flatten()
            .find(|m| !m.is_empty())
            .unwrap_or("Scrape error");
        Some(message.to_owned())
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ScrapeRequest<'a> {
    pub product: &'a str,
}

/// Signed-in user as returned by the auth service.
///
/// Round-tripped through storage untouched; only `name` and `created_at`
/// are read by the UI.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of `POST /auth/login` and `POST /auth/signup`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Generic `{ "error": ... }` body returned with non-OK statuses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

pub(crate) fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}
