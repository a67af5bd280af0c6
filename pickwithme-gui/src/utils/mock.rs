use std::sync::Mutex;

use async_trait::async_trait;

use crate::services::auth::{AuthGateway, Credentials, LoginOutcome};

/// A gateway with scripted outcomes, resolved in order and without delay.
#[derive(Debug)]
pub struct FakeGateway {
    outcomes: Mutex<Vec<LoginOutcome>>,
    calls: Mutex<Vec<Credentials>>,
}

impl FakeGateway {
    pub fn new(outcomes: Vec<LoginOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The credentials received so far, in call order.
    pub fn calls(&self) -> Vec<Credentials> {
        self.calls.lock().expect("poisoned").clone()
    }
}

#[async_trait]
impl AuthGateway for FakeGateway {
    async fn login(&self, credentials: Credentials) -> LoginOutcome {
        self.calls.lock().expect("poisoned").push(credentials);
        let mut outcomes = self.outcomes.lock().expect("poisoned");
        assert!(
            !outcomes.is_empty(),
            "Fake gateway must have all outcomes scripted in order"
        );
        outcomes.remove(0)
    }
}
