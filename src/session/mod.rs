//! Credential and session storage.

pub mod store;

pub use store::{
    ApiCredentials, CredentialStore, CREDENTIALS_FILE, SESSION_FILE, SESSION_FILE_ALT,
};
