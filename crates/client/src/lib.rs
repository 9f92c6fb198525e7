//! admission-client: typed client for the remote admissions service
//!
//! Exposes the `AdmissionsClient` façade, the per-workflow
//! `AdmissionSession` holding the bearer credential, and the error
//! taxonomy for collaborator failures. The admissions service itself is
//! an external collaborator reached over HTTP+JSON.

pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use client::AdmissionsClient;
pub use config::Config;
pub use error::AdmissionsError;
pub use session::AdmissionSession;
