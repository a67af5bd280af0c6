use std::sync::Arc;

use iced::{Alignment, Length, Task};
use unicode_segmentation::UnicodeSegmentation;

use pickwithme_ui::{
    component::{button, form, text::*},
    theme,
    widget::*,
};

use crate::services::auth::{AuthGateway, Credentials, LoginOutcome};

/// Minimum length, in user-perceived characters, of a trimmed e-mail.
const EMAIL_MIN_CHARS: usize = 5;
/// Minimum length, in user-perceived characters, of a password.
const PASSWORD_MIN_CHARS: usize = 3;

pub const LOGIN_FAILED_MESSAGE: &str =
    "Login failed, check if the correct combination was used and try again";

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    LoginFinished(LoginOutcome),
    // Handled by the upper level wrapping the panel.
    LoggedIn,
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    EmailEdited(String),
    PasswordEdited(String),
    Submit,
}

/// An e-mail is filled once its trimmed content reaches 5 characters.
pub fn email_filled(email: &str) -> bool {
    email.trim().graphemes(true).count() >= EMAIL_MIN_CHARS
}

/// A password is filled once it reaches 3 characters.
pub fn password_filled(password: &str) -> bool {
    password.graphemes(true).count() >= PASSWORD_MIN_CHARS
}

pub struct LoginPanel {
    email: form::Value<String>,
    password: form::Value<String>,
    processing: bool,
    auth_error: Option<&'static str>,
}

impl LoginPanel {
    pub fn new() -> Self {
        Self {
            email: form::Value::default(),
            password: form::Value::default(),
            processing: false,
            auth_error: None,
        }
    }

    pub fn email(&self) -> &str {
        &self.email.value
    }

    /// Whether a login attempt may be started. Always derived from the
    /// current fields, never stored.
    pub fn can_submit(&self) -> bool {
        !self.processing
            && email_filled(&self.email.value)
            && password_filled(&self.password.value)
    }

    pub fn update(
        &mut self,
        gateway: Arc<dyn AuthGateway + Send + Sync>,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::View(ViewMessage::EmailEdited(value)) => {
                self.email.valid = value.is_empty() || email_filled(&value);
                self.email.value = value;
            }
            Message::View(ViewMessage::PasswordEdited(value)) => {
                self.password.valid = value.is_empty() || password_filled(&value);
                self.password.value = value;
            }
            Message::View(ViewMessage::Submit) => {
                // The view withholds the button while a request is in flight,
                // but a tap queued before disablement must also be ignored.
                if !self.can_submit() {
                    return Task::none();
                }
                // Captured now; later edits do not affect the in-flight
                // attempt.
                let credentials = Credentials {
                    email: self.email.value.clone(),
                    password: self.password.value.clone(),
                };
                self.processing = true;
                self.auth_error = None;
                return Task::perform(
                    async move { gateway.login(credentials).await },
                    Message::LoginFinished,
                );
            }
            Message::LoginFinished(outcome) => {
                self.processing = false;
                match outcome {
                    LoginOutcome::Success => {
                        return Task::perform(async move {}, |_| Message::LoggedIn);
                    }
                    LoginOutcome::InvalidCredentials => {
                        tracing::warn!("login attempt rejected by the gateway");
                        self.auth_error = Some(LOGIN_FAILED_MESSAGE);
                    }
                }
            }
            // Handled by the upper level wrapping the panel.
            Message::LoggedIn => {}
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let email = if self.processing {
            form::Form::new_disabled("Email", &self.email)
        } else {
            form::Form::new("Email", &self.email, ViewMessage::EmailEdited)
        }
        .warning("An e-mail of at least 5 characters is required")
        .size(P1_SIZE)
        .padding(10);

        let password = if self.processing {
            form::Form::new_disabled("Password", &self.password)
        } else {
            form::Form::new("Password", &self.password, ViewMessage::PasswordEdited)
        }
        .secure()
        .warning("A password of at least 3 characters is required")
        .size(P1_SIZE)
        .padding(10);

        let submit = button::primary(
            None,
            if self.processing {
                "Logging in..."
            } else {
                "Login"
            },
        )
        .width(Length::Fixed(200.0))
        .on_press_maybe(self.can_submit().then_some(ViewMessage::Submit));

        Into::<Element<ViewMessage>>::into(
            Container::new(
                Column::new()
                    .align_x(Alignment::Center)
                    .spacing(20)
                    .max_width(500)
                    .push(h2("PickWithMe"))
                    .push(
                        text("Sign in with your e-mail and password")
                            .style(theme::text::secondary),
                    )
                    .push_maybe(self.auth_error.map(|e| text(e).style(theme::text::warning)))
                    .push(email)
                    .push(password)
                    .push(submit),
            )
            .padding(50)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        )
        .map(Message::View)
    }
}

impl Default for LoginPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{mock::FakeGateway, sandbox::Sandbox};
    use iced_runtime::task::into_stream;

    const EMAIL: &str = "thomasneuteboom@theappcapital.com";
    const PASSWORD: &str = "secret";

    fn edited(value: &str, edit: fn(String) -> ViewMessage) -> Message {
        Message::View(edit(value.to_string()))
    }

    #[test]
    fn email_validity_boundaries() {
        assert!(!email_filled(""));
        assert!(!email_filled("a@io")); // 4 characters
        assert!(email_filled("ab@io")); // exactly 5
        assert!(!email_filled("      ")); // whitespace only, any length
        assert!(email_filled("  ab@io  ")); // trimmed before counting
        assert!(email_filled("e\u{301}b@io")); // 5 grapheme clusters, 6 scalars
    }

    #[test]
    fn password_validity_boundaries() {
        assert!(!password_filled(""));
        assert!(!password_filled("ab")); // 2 characters
        assert!(password_filled("abc")); // exactly 3
        assert!(password_filled("   ")); // passwords are not trimmed
        assert!(!password_filled("e\u{301}a")); // 2 grapheme clusters, 3 scalars
    }

    #[test]
    fn can_submit_is_derived_from_the_fields() {
        let gateway = Arc::new(FakeGateway::new(vec![]));
        let mut panel = LoginPanel::new();
        assert!(!panel.can_submit());

        let _ = panel.update(gateway.clone(), edited(EMAIL, ViewMessage::EmailEdited));
        assert!(!panel.can_submit());

        let _ = panel.update(gateway.clone(), edited("ab", ViewMessage::PasswordEdited));
        assert!(!panel.can_submit());

        let _ = panel.update(gateway.clone(), edited("abc", ViewMessage::PasswordEdited));
        assert!(panel.can_submit());

        let _ = panel.update(gateway.clone(), edited("      ", ViewMessage::EmailEdited));
        assert!(!panel.can_submit());
    }

    #[test]
    fn submit_is_ignored_while_processing() {
        let gateway = Arc::new(FakeGateway::new(vec![LoginOutcome::Success]));
        let mut panel = LoginPanel::new();
        let _ = panel.update(gateway.clone(), edited(EMAIL, ViewMessage::EmailEdited));
        let _ = panel.update(gateway.clone(), edited(PASSWORD, ViewMessage::PasswordEdited));

        let first = panel.update(gateway.clone(), Message::View(ViewMessage::Submit));
        assert!(panel.processing);
        assert!(!panel.can_submit());
        assert!(into_stream(first).is_some());

        // A second submit while the first is in flight is a hard no-op.
        let second = panel.update(gateway.clone(), Message::View(ViewMessage::Submit));
        assert!(into_stream(second).is_none());
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn failure_restores_idle_and_stores_the_message() {
        let gateway = Arc::new(FakeGateway::new(vec![]));
        let mut panel = LoginPanel::new();
        let _ = panel.update(gateway.clone(), edited(EMAIL, ViewMessage::EmailEdited));
        let _ = panel.update(gateway.clone(), edited(PASSWORD, ViewMessage::PasswordEdited));
        panel.processing = true;

        let _ = panel.update(
            gateway,
            Message::LoginFinished(LoginOutcome::InvalidCredentials),
        );
        assert!(!panel.processing);
        assert_eq!(panel.auth_error, Some(LOGIN_FAILED_MESSAGE));
        assert!(panel.can_submit());
    }

    #[tokio::test]
    async fn successful_login_emits_logged_in() {
        let gateway = Arc::new(FakeGateway::new(vec![LoginOutcome::Success]));
        let sandbox = Sandbox::new(LoginPanel::new())
            .update(gateway.clone(), edited(EMAIL, ViewMessage::EmailEdited))
            .await
            .update(gateway.clone(), edited(PASSWORD, ViewMessage::PasswordEdited))
            .await
            .update(gateway.clone(), Message::View(ViewMessage::Submit))
            .await;

        let panel = sandbox.state();
        assert!(!panel.processing);
        assert_eq!(panel.auth_error, None);
        assert!(sandbox
            .emitted()
            .iter()
            .any(|m| matches!(m, Message::LoggedIn)));
        // The gateway received the credentials captured at submit time.
        assert_eq!(
            gateway.calls(),
            vec![Credentials {
                email: EMAIL.to_string(),
                password: PASSWORD.to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn repeated_failures_always_recover() {
        let gateway = Arc::new(FakeGateway::new(vec![
            LoginOutcome::InvalidCredentials,
            LoginOutcome::InvalidCredentials,
        ]));
        let mut sandbox = Sandbox::new(LoginPanel::new())
            .update(gateway.clone(), edited(EMAIL, ViewMessage::EmailEdited))
            .await
            .update(gateway.clone(), edited("wrong", ViewMessage::PasswordEdited))
            .await;

        for _ in 0..2 {
            sandbox = sandbox
                .update(gateway.clone(), Message::View(ViewMessage::Submit))
                .await;
            let panel = sandbox.state();
            assert!(!panel.processing);
            assert_eq!(panel.auth_error, Some(LOGIN_FAILED_MESSAGE));
            assert!(panel.can_submit());
        }

        assert!(!sandbox
            .emitted()
            .iter()
            .any(|m| matches!(m, Message::LoggedIn)));
        assert_eq!(gateway.calls().len(), 2);
    }
}
