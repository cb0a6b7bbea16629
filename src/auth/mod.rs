//! Authentication for the legacy API.
//!
//! The legacy API uses HTTP Basic authentication with the store's API
//! username and token. See [`EncodedCredential`].

mod basic;

pub use basic::EncodedCredential;
