use std::sync::Arc;

use iced::futures::StreamExt;
use iced_runtime::{task::into_stream, Action};

use crate::{
    login::{LoginPanel, Message},
    services::auth::AuthGateway,
};

/// Drives a [`LoginPanel`] the way the iced runtime would: feeds it a
/// message, awaits every task it produces and feeds the outputs back.
pub struct Sandbox {
    panel: LoginPanel,
    emitted: Vec<Message>,
}

impl Sandbox {
    pub fn new(panel: LoginPanel) -> Self {
        Self {
            panel,
            emitted: Vec::new(),
        }
    }

    pub fn state(&self) -> &LoginPanel {
        &self.panel
    }

    /// Messages produced by awaited tasks, in delivery order.
    pub fn emitted(&self) -> &[Message] {
        &self.emitted
    }

    pub async fn update(
        mut self,
        gateway: Arc<dyn AuthGateway + Send + Sync>,
        message: Message,
    ) -> Self {
        let mut tasks = vec![self.panel.update(gateway.clone(), message)];
        while let Some(task) = tasks.pop() {
            if let Some(mut stream) = into_stream(task) {
                while let Some(action) = stream.next().await {
                    if let Action::Output(message) = action {
                        self.emitted.push(message.clone());
                        tasks.push(self.panel.update(gateway.clone(), message));
                    }
                }
            }
        }

        self
    }
}
