use crate::{
    core::{
        api::ApiClient,
        navigation::HOME_PATH,
        session::Session,
        toast::{ToastId, ToastSlot},
        validation::{is_valid_email, is_valid_password},
    },
    models::Credentials,
};

pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct LoginView {
    pub email: String,
    pub password: String,
    pub toast: ToastSlot,
}

impl LoginView {
    pub fn is_valid(&self) -> bool {
        is_valid_email(&self.email) && is_valid_password(&self.password)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Prime CSRF, log in, and persist the returned token.
    pub async fn submit(api: ApiClient, session: Session, credentials: Credentials) -> LoginOutcome {
        super::prime_csrf(&api).await;

        let token = match api.login(&credentials).await {
            Ok(token) => token,
            Err(err) => {
                tracing::error!(error = %err, "login failed");
                return LoginOutcome::Failed;
            }
        };
        match session.set(&token).await {
            Ok(()) => {
                tracing::info!(email = %credentials.email, "logged in");
                LoginOutcome::LoggedIn
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to persist session token");
                LoginOutcome::Failed
            }
        }
    }

    /// Returns the path to navigate to on success, or the toast shown on failure.
    pub fn finish(&mut self, outcome: &LoginOutcome) -> Result<&'static str, ToastId> {
        match outcome {
            LoginOutcome::LoggedIn => {
                *self = Self::default();
                Ok(HOME_PATH)
            }
            LoginOutcome::Failed => Err(self.toast.show(LOGIN_FAILED_MESSAGE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_tracks_both_fields() {
        let mut view = LoginView::default();
        assert!(!view.is_valid());
        view.email = "user@test.com".to_string();
        assert!(!view.is_valid());
        view.password = "passwor".to_string();
        assert!(!view.is_valid());
        view.password.push('d');
        assert!(view.is_valid());
        view.email = "user@test".to_string();
        assert!(!view.is_valid());
    }

    #[tokio::test]
    async fn failure_shows_generic_message() {
        let mut view = LoginView::default();
        assert!(view.finish(&LoginOutcome::Failed).is_err());
        assert_eq!(view.toast.visible(), Some(LOGIN_FAILED_MESSAGE));
    }
}
