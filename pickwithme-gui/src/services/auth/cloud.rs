use std::time::Duration;

use async_trait::async_trait;

use super::{AuthGateway, Credentials, LoginOutcome};

const VALID_EMAIL: &str = "thomasneuteboom@theappcapital.com";
const VALID_PASSWORD: &str = "secret";

/// Simulated duration of the authentication round-trip.
const SIMULATED_LATENCY: Duration = Duration::from_secs(1);

/// Stand-in for the backend authentication service: accepts a single
/// hardcoded credential pair after a fixed delay.
#[derive(Debug, Default)]
pub struct CloudAuthGateway {}

#[async_trait]
impl AuthGateway for CloudAuthGateway {
    async fn login(&self, credentials: Credentials) -> LoginOutcome {
        tokio::time::sleep(SIMULATED_LATENCY).await;

        if credentials.email == VALID_EMAIL && credentials.password == VALID_PASSWORD {
            LoginOutcome::Success
        } else {
            LoginOutcome::InvalidCredentials
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_after_the_simulated_delay() {
        let gateway = CloudAuthGateway::default();
        let started = std::time::Instant::now();
        let outcome = gateway
            .login(Credentials {
                email: VALID_EMAIL.to_string(),
                password: VALID_PASSWORD.to_string(),
            })
            .await;
        assert_eq!(outcome, LoginOutcome::Success);
        assert!(started.elapsed() >= SIMULATED_LATENCY);
    }

    #[tokio::test]
    async fn rejects_any_other_combination() {
        let gateway = CloudAuthGateway::default();
        for (email, password) in [
            (VALID_EMAIL, "wrong"),
            ("someone@else.com", VALID_PASSWORD),
            ("", ""),
        ] {
            let outcome = gateway
                .login(Credentials {
                    email: email.to_string(),
                    password: password.to_string(),
                })
                .await;
            assert_eq!(outcome, LoginOutcome::InvalidCredentials);
        }
    }
}
