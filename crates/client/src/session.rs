//! Bearer-credential state for one authenticate-then-operate workflow

/// Holds the bearer credential for the currently authenticated actor.
///
/// One session serves one logical workflow. Privilege is proven per
/// call, not cached as a role: re-authenticating as a different actor
/// replaces the credential outright, and a privileged operation expects
/// the caller to have authenticated as an elevated actor immediately
/// beforehand. An expired or rejected credential surfaces as an
/// `Unauthorized` failure from the next call.
#[derive(Debug, Default)]
pub struct AdmissionSession {
    bearer: Option<String>,
}

impl AdmissionSession {
    /// An unauthenticated session holding no credential
    pub fn new() -> Self {
        Self { bearer: None }
    }

    /// Replaces the held credential with a freshly issued one
    pub fn store(&mut self, token: String) {
        self.bearer = Some(token);
    }

    pub fn token(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_new_session_holds_no_credential() {
        let session = AdmissionSession::new();

        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn storing_a_credential_replaces_the_previous_one() {
        let mut session = AdmissionSession::new();
        session.store("first".to_string());
        session.store("second".to_string());

        assert_eq!(session.token(), Some("second"));
    }
}
