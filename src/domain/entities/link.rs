//! Link entities: the creation request accepted by the gateway and the
//! record shape owned by the backing service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request to create a short link mapping.
///
/// Lives only for the duration of one incoming call; the gateway never stores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkCreateRequest {
    pub short_code: String,
    pub long_url: String,
}

impl LinkCreateRequest {
    /// Creates a new request from its two fields.
    pub fn new(short_code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            long_url: long_url.into(),
        }
    }

    /// Extracts the request fields from an arbitrary JSON object.
    ///
    /// Absent fields and non-string values are treated as empty, so they fail
    /// validation as missing instead of failing deserialization.
    pub fn from_json(object: &Map<String, Value>) -> Self {
        let field = |name: &str| {
            object
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            short_code: field("short_code"),
            long_url: field("long_url"),
        }
    }
}

/// A link record as returned by the backing service.
///
/// Read-only to this crate. The HTTP gateway relays records as raw bytes and
/// only the admin CLI decodes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub short_code: String,
    pub long_url: String,
    #[serde(default)]
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl LinkRecord {
    /// Decodes a list response body.
    ///
    /// The backing service answers `null` instead of `[]` when it has no links.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if the body is not a JSON
    /// array of link records (or `null`).
    pub fn parse_list(body: &[u8]) -> Result<Vec<LinkRecord>, serde_json::Error> {
        let links: Option<Vec<LinkRecord>> = serde_json::from_slice(body)?;
        Ok(links.unwrap_or_default())
    }
}
