//! HTTP client for the remote admissions service API

use std::collections::HashSet;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use admission_core::{
    Hospital, HospitalAllowance, HospitalNames, LoginRequest, Patient, ordering,
};

use crate::config::Config;
use crate::error::AdmissionsError;
use crate::session::AdmissionSession;

/// Client for the admissions service HTTP API.
///
/// Callers authenticate as a request actor, then issue one domain
/// operation; the collaborator enforces authorization, so a privileged
/// call made under an insufficiently privileged credential comes back
/// as `Unauthorized`.
pub struct AdmissionsClient {
    http: reqwest::Client,
    base_url: String,
    session: AdmissionSession,
}

impl AdmissionsClient {
    /// Create an unauthenticated client for the service at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session: AdmissionSession::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.base_url)
    }

    pub fn session(&self) -> &AdmissionSession {
        &self.session
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path)
    }

    /// Decorate a request with the session credential, if one is held
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut req = self.http.request(method, url);
        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Exchange the actor's identity for a bearer credential.
    ///
    /// On success every subsequent operation through this client carries
    /// the credential as a bearer token; on failure the previously held
    /// credential stays in place.
    pub async fn authenticate_as(
        &mut self,
        actor: &LoginRequest,
    ) -> Result<(), AdmissionsError> {
        let response = self
            .http
            .post(format!("{}/jwt", self.base_url))
            .json(actor)
            .send()
            .await
            .map_err(|e| AdmissionsError::AuthenticationFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdmissionsError::AuthenticationFailure(format!(
                "token endpoint responded {status}"
            )));
        }

        let token = response
            .text()
            .await
            .map_err(|e| AdmissionsError::AuthenticationFailure(e.to_string()))?;
        if token.is_empty() {
            return Err(AdmissionsError::AuthenticationFailure(
                "token endpoint returned an empty body".into(),
            ));
        }

        tracing::debug!(email = %actor.email, "authenticated with admissions service");
        self.session.store(token);
        Ok(())
    }

    /// All hospitals, in whatever order the service returns them.
    /// Callers apply `ordering::by_hospital_name` before display.
    pub async fn list_hospitals(&self) -> Result<Vec<Hospital>, AdmissionsError> {
        let response = self
            .request(Method::GET, &self.api_url("hospitals"))
            .send()
            .await?;
        let response = check_status(response).await?;
        decode_json(response).await
    }

    /// Look up one hospital by name.
    ///
    /// An unknown name is an expected outcome for this lookup, so a 404
    /// from the service is a normal `None` rather than an error; every
    /// other non-success status propagates.
    pub async fn get_hospital_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Hospital>, AdmissionsError> {
        let response = self
            .request(Method::GET, &self.api_url(&format!("hospitals/{name}")))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check_status(response).await?;
        decode_json(response).await.map(Some)
    }

    /// The names of every hospital, unwrapped from the service's
    /// `{"names": [...]}` response object
    pub async fn list_hospital_names(&self) -> Result<HashSet<String>, AdmissionsError> {
        let response = self
            .request(Method::GET, &self.api_url("hospital-names"))
            .send()
            .await?;
        let response = check_status(response).await?;
        let wrapper: HospitalNames = decode_json(response).await?;
        Ok(wrapper.names)
    }

    /// Patients awaiting admission, none of whom carry a hospital
    /// assignment
    pub async fn list_waitlist(&self) -> Result<Vec<Patient>, AdmissionsError> {
        let response = self
            .request(Method::GET, &self.api_url("waitlist"))
            .send()
            .await?;
        let response = check_status(response).await?;
        decode_json(response).await
    }

    /// Add a patient (no id yet) to the waitlist.
    ///
    /// The service happens to answer with the stored patient, but what
    /// mutations return is an open contract with the collaborator, so
    /// the body is ignored beyond the status line.
    pub async fn create_patient(&self, patient: &Patient) -> Result<(), AdmissionsError> {
        let response = self
            .request(Method::POST, &self.api_url("waitlist"))
            .json(patient)
            .send()
            .await?;
        check_status(response).await?;

        tracing::debug!(patient = %patient.name, "added patient to waitlist");
        Ok(())
    }

    /// Ask the service to admit waitlisted patients to hospitals.
    ///
    /// Requires the session to currently hold a credential for an
    /// elevated actor; authenticate as one immediately before calling.
    pub async fn admit_from_waitlist(&self) -> Result<(), AdmissionsError> {
        let response = self
            .request(Method::POST, &self.api_url("hospitals/admit-from-waitlist"))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Remove a patient from the named hospital, returning them to the
    /// waitlist. Same elevated-actor requirement as admission.
    pub async fn unadmit(
        &self,
        hospital_name: &str,
        patient_id: Uuid,
    ) -> Result<(), AdmissionsError> {
        let url = self.api_url(&format!("hospitals/{hospital_name}/{patient_id}"));
        let response = self.request(Method::DELETE, &url).send().await?;
        check_status(response).await?;

        tracing::debug!(hospital = hospital_name, %patient_id, "unadmitted patient");
        Ok(())
    }

    /// Build the "allowed hospitals" checklist for the create-patient
    /// form: every hospital in display order, each initially allowed
    pub async fn hospital_allowances(
        &self,
    ) -> Result<Vec<HospitalAllowance>, AdmissionsError> {
        let mut hospitals = self.list_hospitals().await?;
        hospitals.sort_by(ordering::by_hospital_name);

        Ok(hospitals
            .into_iter()
            .map(|h| HospitalAllowance {
                hospital_name: h.name,
                is_allowed: true,
            })
            .collect())
    }
}

/// Map a non-success response to the error taxonomy. The one lookup
/// that treats 404 as absence handles that status before calling this.
async fn check_status(response: Response) -> Result<Response, AdmissionsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.is_empty() {
        status.to_string()
    } else {
        body
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(AdmissionsError::Unauthorized(message))
        }
        _ => Err(AdmissionsError::ServiceError {
            status: status.as_u16(),
            message,
        }),
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, AdmissionsError> {
    response
        .json()
        .await
        .map_err(|e| AdmissionsError::DeserializationFailure(e.to_string()))
}
