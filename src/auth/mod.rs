//! Credential verification for the login gate.
//!
//! The router depends on the [`CredentialVerifier`] capability rather than a
//! hardcoded comparison; the shipped implementation is a single static
//! credential pair from configuration.

mod credentials;

pub use credentials::{CredentialVerifier, StaticCredentials};
