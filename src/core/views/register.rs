use reqwest::StatusCode;

use crate::{
    core::{
        api::ApiClient,
        navigation::LOGIN_PATH,
        toast::{ToastId, ToastSlot},
        validation::{is_valid_email, is_valid_name, is_valid_password},
    },
    models::Registration,
};

pub const REGISTER_FAILED_MESSAGE: &str = "Failed Registration. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// `200 OK`: the account exists, go log in.
    Registered,
    /// Some other 2xx; nothing to do.
    Accepted(StatusCode),
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct RegisterView {
    pub name: String,
    pub email: String,
    pub password: String,
    pub toast: ToastSlot,
}

impl RegisterView {
    pub fn is_valid(&self) -> bool {
        is_valid_name(&self.name) && is_valid_email(&self.email) && is_valid_password(&self.password)
    }

    pub fn registration(&self) -> Registration {
        Registration {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub async fn submit(api: ApiClient, registration: Registration) -> RegisterOutcome {
        match api.register(&registration).await {
            Ok(StatusCode::OK) => {
                tracing::info!(email = %registration.email, "registered");
                RegisterOutcome::Registered
            }
            Ok(status) => {
                tracing::warn!(%status, "registration answered without 200");
                RegisterOutcome::Accepted(status)
            }
            Err(err) => {
                tracing::error!(error = %err, "registration failed");
                RegisterOutcome::Failed
            }
        }
    }

    /// `Ok(Some(path))` to navigate, `Ok(None)` to stay, `Err` with the toast shown.
    pub fn finish(&mut self, outcome: &RegisterOutcome) -> Result<Option<&'static str>, ToastId> {
        match outcome {
            RegisterOutcome::Registered => {
                *self = Self::default();
                Ok(Some(LOGIN_PATH))
            }
            RegisterOutcome::Accepted(_) => Ok(None),
            RegisterOutcome::Failed => Err(self.toast.show(REGISTER_FAILED_MESSAGE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_blocks_submit() {
        let mut view = RegisterView {
            name: "   ".to_string(),
            email: "a@b.co".to_string(),
            password: "longenough".to_string(),
            ..Default::default()
        };
        assert!(!view.is_valid());
        view.name = "Ada".to_string();
        assert!(view.is_valid());
    }

    #[test]
    fn non_200_success_stays_put() {
        let mut view = RegisterView::default();
        assert_eq!(
            view.finish(&RegisterOutcome::Accepted(StatusCode::CREATED)),
            Ok(None)
        );
        assert!(view.toast.visible().is_none());
    }
}
