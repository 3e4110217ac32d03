//! GitHub gist data model.
//!
//! Modelled fields that GitHub omits or sends as `null` stay `None` and are
//! left out when re-encoded. Fields not modelled here are kept in `extra`
//! exactly as received, `null` included, so an encoded gist carries
//! everything the API returned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A gist as returned by the GitHub REST API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gist {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_pull_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_push_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<GistOwner>,

    /// Files keyed by file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<BTreeMap<String, GistFile>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The account owning a gist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GistOwner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_admin: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single file inside a gist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GistFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIST_JSON: &str = r#"{
        "id": "aa5a315d61ae9438b18d",
        "node_id": "MDQ6R2lzdGFhNWEzMTVkNjFhZTk0MzhiMThk",
        "html_url": "https://gist.github.com/aa5a315d61ae9438b18d",
        "description": "Hello World Examples",
        "public": true,
        "owner": {"login": "octocat", "id": 1, "type": "User", "site_admin": false},
        "files": {
            "hello_world.rb": {
                "filename": "hello_world.rb",
                "type": "application/x-ruby",
                "language": "Ruby",
                "size": 167
            }
        },
        "comments": 0,
        "created_at": "2010-04-14T02:15:15Z",
        "updated_at": "2011-06-20T11:34:15Z",
        "comments_enabled": true
    }"#;

    #[test]
    fn test_decode_gist() {
        let gist: Gist = serde_json::from_str(GIST_JSON).unwrap();
        assert_eq!(gist.id.as_deref(), Some("aa5a315d61ae9438b18d"));
        assert_eq!(gist.public, Some(true));
        let owner = gist.owner.as_ref().unwrap();
        assert_eq!(owner.login.as_deref(), Some("octocat"));
        assert_eq!(owner.kind.as_deref(), Some("User"));
        let files = gist.files.as_ref().unwrap();
        assert_eq!(files["hello_world.rb"].language.as_deref(), Some("Ruby"));
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let gist: Gist = serde_json::from_str(GIST_JSON).unwrap();
        assert_eq!(gist.extra.get("comments_enabled"), Some(&Value::Bool(true)));

        let encoded = serde_json::to_string(&gist).unwrap();
        assert!(encoded.contains(r#""comments_enabled":true"#));
    }

    #[test]
    fn test_timestamps_round_trip() {
        let gist: Gist = serde_json::from_str(GIST_JSON).unwrap();
        let encoded = serde_json::to_string(&gist).unwrap();
        assert!(encoded.contains(r#""created_at":"2010-04-14T02:15:15Z""#));

        let again: Gist = serde_json::from_str(&encoded).unwrap();
        assert_eq!(again, gist);
        assert_eq!(serde_json::to_string(&again).unwrap(), encoded);
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let gist: Gist = serde_json::from_str(r#"{"id":"42","description":"demo"}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&gist).unwrap(),
            r#"{"id":"42","description":"demo"}"#
        );
    }

    #[test]
    fn test_null_modelled_fields_drop_but_unknown_nulls_stay() {
        let gist: Gist =
            serde_json::from_str(r#"{"id":"7","description":null,"user":null}"#).unwrap();
        assert_eq!(gist.description, None);
        assert_eq!(gist.extra.get("user"), Some(&Value::Null));
        assert_eq!(
            serde_json::to_string(&gist).unwrap(),
            r#"{"id":"7","user":null}"#
        );
    }
}
