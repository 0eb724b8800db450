use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Profile record
// ---------------------------------------------------------------------------

/// A GitHub user profile as returned by `GET /users/{username}`.
///
/// Only the fields the viewer shows are kept. String fields that GitHub
/// reports as `null` (users without a display name or bio) decode to "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub login: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bio: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub html_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub avatar_url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Error body
// ---------------------------------------------------------------------------

/// Error payload GitHub sends with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_profile() {
        let json = r#"{
            "login": "barkhaaroraa",
            "id": 1234,
            "name": "Barkha Arora",
            "bio": "builds things",
            "followers": 10,
            "following": 3,
            "public_repos": 5,
            "html_url": "https://github.com/barkhaaroraa",
            "avatar_url": "https://avatars.githubusercontent.com/u/1234?v=4"
        }"#;
        let record: ProfileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.login, "barkhaaroraa");
        assert_eq!(record.name, "Barkha Arora");
        assert_eq!(record.bio, "builds things");
        assert_eq!(record.followers, 10);
        assert_eq!(record.public_repos, 5);
        assert_eq!(record.html_url, "https://github.com/barkhaaroraa");
    }

    #[test]
    fn null_and_missing_strings_decode_empty() {
        let json = r#"{"login": "octo", "name": null, "bio": null, "followers": 1}"#;
        let record: ProfileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.bio, "");
        assert_eq!(record.html_url, "");
        assert_eq!(record.public_repos, 0);
    }

    #[test]
    fn rejects_wrong_shape() {
        let json = r#"{"login": "octo", "followers": "many"}"#;
        assert!(serde_json::from_str::<ProfileRecord>(json).is_err());
    }

    #[test]
    fn decodes_error_body() {
        let json = r#"{"message": "Not Found", "documentation_url": "https://docs.github.com"}"#;
        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.message, "Not Found");
    }
}
