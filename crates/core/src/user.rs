use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Group the collaborator's authorization middleware accepts for
/// privileged (mutating) calls
pub const ELEVATED_GROUP: &str = "admin";

/// Identity presented to the token endpoint to obtain a bearer
/// credential. Not persisted by the client, and not a patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,

    /// The authorization groups this actor claims membership of
    #[serde(default)]
    pub groups: HashSet<String>,
}

impl LoginRequest {
    /// An actor with no group memberships, enough for read-only calls
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
            groups: HashSet::new(),
        }
    }

    /// An actor carrying the elevated group required for mutating calls
    pub fn elevated(email: &str) -> Self {
        Self::new(email).with_group(ELEVATED_GROUP)
    }

    pub fn with_group(mut self, group: &str) -> Self {
        self.groups.insert(group.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_serializes_email_and_groups() {
        let actor = LoginRequest::elevated("admin@dsh.ca.gov");
        let json = serde_json::to_value(&actor).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"email": "admin@dsh.ca.gov", "groups": ["admin"]})
        );
    }

    #[test]
    fn joining_the_same_group_twice_has_no_effect() {
        let actor = LoginRequest::new("john.doe@dsh.ca.gov")
            .with_group("admin")
            .with_group("admin");

        assert_eq!(actor.groups.len(), 1);
    }
}
