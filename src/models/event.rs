use crate::utils::normalize_directory_uri;

/// The event envelope the hosting runtime hands to the function trigger.
///
/// Only `request` matters to us; `version`, `context`, `viewer` and whatever
/// else the host attaches are captured untyped so the envelope shape never
/// constrains which platform revisions we can sit behind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventV1 {
    pub request: RequestV1,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A single incoming request as seen at the edge.
///
/// The rewrite inspects `uri` and nothing else. Headers, cookies and the
/// query string ride along in `extra` and are returned to the host unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestV1 {
    pub uri: String,

    #[serde(default = "default_method")]
    pub method: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_method() -> String {
    "GET".to_string()
}

json_responder!(RequestV1);

impl RequestV1 {
    /// Applies the directory-index rewrite to this descriptor's URI.
    ///
    /// Pure and deterministic; no field other than `uri` is touched. See
    /// [`normalize_directory_uri`] for the rule and its preserved quirks.
    pub fn normalize(mut self) -> Self {
        self.uri = normalize_directory_uri(&self.uri);
        self
    }
}
