use crate::core::{api::ApiClient, navigation::ROOT_PATH, session::Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutOutcome {
    LoggedOut,
    Failed,
}

/// Top bar holding the Logout control.
#[derive(Debug, Clone, Default)]
pub struct NavBar {
    pub loading: bool,
}

impl NavBar {
    pub fn logout_label(&self) -> &'static str {
        if self.loading { "Logging out..." } else { "Logout" }
    }

    /// Returns the token to revoke, or `None` when a logout is already
    /// running or there is nothing to log out of.
    pub fn begin_logout(&mut self, session: &Session) -> Option<String> {
        if self.loading {
            return None;
        }
        let Some(token) = session.token() else {
            tracing::error!("No token found in session store");
            return None;
        };
        self.loading = true;
        Some(token)
    }

    /// Revoke the token server-side, then forget it locally.
    pub async fn logout(api: ApiClient, session: Session, token: String) -> LogoutOutcome {
        if let Err(err) = api.logout(Some(&token)).await {
            tracing::error!(error = %err, "Error during logout");
            return LogoutOutcome::Failed;
        }
        match session.clear().await {
            Ok(()) => {
                tracing::info!("logged out");
                LogoutOutcome::LoggedOut
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to clear session token");
                LogoutOutcome::Failed
            }
        }
    }

    /// The path to navigate to after a successful logout.
    pub fn finish_logout(&mut self, outcome: &LogoutOutcome) -> Option<&'static str> {
        self.loading = false;
        match outcome {
            LogoutOutcome::LoggedOut => Some(ROOT_PATH),
            LogoutOutcome::Failed => None,
        }
    }
}
