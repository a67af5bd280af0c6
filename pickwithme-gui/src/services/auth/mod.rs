//! Authentication gateway interface.
//!
//! The login screen only depends on the [`AuthGateway`] trait; the shipped
//! implementation simulates a backend round-trip. A real client would slot in
//! here with its own transport and error taxonomy.

mod cloud;

pub use cloud::CloudAuthGateway;

use async_trait::async_trait;

/// An e-mail/password pair, captured at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The result of an authentication attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    InvalidCredentials,
}

#[async_trait]
pub trait AuthGateway: std::fmt::Debug {
    /// Login with e-mail and password.
    ///
    /// Always resolves to an outcome, never to a transport error.
    async fn login(&self, credentials: Credentials) -> LoginOutcome;
}
