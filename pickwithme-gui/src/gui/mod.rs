use std::sync::Arc;

use iced::{Alignment, Length, Task};

use pickwithme_ui::{component::text::*, theme, widget::*};

use crate::{
    login::{self, LoginPanel},
    services::auth::AuthGateway,
};

#[derive(Debug, Clone)]
pub enum Message {
    Login(login::Message),
}

pub enum Screen {
    Login(LoginPanel),
    Account { email: String },
}

pub struct PickWithMe {
    gateway: Arc<dyn AuthGateway + Send + Sync>,
    screen: Screen,
}

impl PickWithMe {
    pub fn new(gateway: Arc<dyn AuthGateway + Send + Sync>) -> (Self, Task<Message>) {
        (
            Self {
                gateway,
                screen: Screen::Login(LoginPanel::new()),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        "PickWithMe".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let Message::Login(message) = message;
        match &mut self.screen {
            Screen::Login(panel) => {
                if let login::Message::LoggedIn = message {
                    let email = panel.email().to_string();
                    tracing::info!("user successfully logged in");
                    self.screen = Screen::Account { email };
                    Task::none()
                } else {
                    panel
                        .update(self.gateway.clone(), message)
                        .map(Message::Login)
                }
            }
            // A completion delivered after the login screen was torn down is
            // dropped without touching state.
            Screen::Account { .. } => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Login(panel) => panel.view().map(Message::Login),
            Screen::Account { email } => account_view(email),
        }
    }
}

fn account_view(email: &str) -> Element<'_, Message> {
    Container::new(
        Column::new()
            .align_x(Alignment::Center)
            .spacing(20)
            .push(h2("Welcome"))
            .push(text(format!("You are logged in as {}", email)).style(theme::text::secondary)),
    )
    .padding(50)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
