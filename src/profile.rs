use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Profile name -> identity, kept in insertion order so listings are stable
pub type ProfileTable = IndexMap<String, IdentityRecord>;

/// Git identity stored under a profile name
///
/// Serialized as `{ "name": ..., "email": ... }`. Unknown keys are ignored on read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    /// Git username (user.name)
    #[serde(rename = "name")]
    pub display_name: String,
    /// Git email address (user.email)
    pub email: String,
}

impl IdentityRecord {
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
        }
    }

    /// Exact, case-sensitive comparison against a live identity
    pub fn matches(&self, live: &IdentityRecord) -> bool {
        self.display_name == live.display_name && self.email == live.email
    }
}

/// A stored profile annotated with whether it is the live Git identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileListing {
    pub profile_name: String,
    pub record: IdentityRecord,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_name_and_email_keys() {
        let record = IdentityRecord::new("Work Name", "work@company.com");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Work Name", "email": "work@company.com" })
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let record: IdentityRecord = serde_json::from_str(
            r#"{ "name": "A", "email": "a@b.c", "signingkey": "ABC123" }"#,
        )
        .unwrap();
        assert_eq!(record, IdentityRecord::new("A", "a@b.c"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let record = IdentityRecord::new("Work Name", "work@company.com");
        assert!(record.matches(&IdentityRecord::new("Work Name", "work@company.com")));
        assert!(!record.matches(&IdentityRecord::new("work name", "work@company.com")));
        assert!(!record.matches(&IdentityRecord::new("Work Name", "Work@company.com")));
    }
}
