//! Salesforce REST wire types

use serde::{Deserialize, Serialize};

/// OAuth2 token endpoint response
#[derive(Clone, Deserialize, Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub instance_url: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub issued_at: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("instance_url", &self.instance_url)
            .field("token_type", &self.token_type)
            .field("issued_at", &self.issued_at)
            .finish()
    }
}

/// One page of a SOQL query result
///
/// Records stay untyped here so that a malformed page and a malformed
/// record can be told apart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage {
    #[serde(default)]
    pub total_size: Option<u64>,
    #[serde(default)]
    pub done: Option<bool>,
    #[serde(default)]
    pub records: Vec<serde_json::Value>,
    #[serde(default)]
    pub next_records_url: Option<String>,
}
