use crate::{
    core::{
        api::ApiClient,
        session::Session,
        toast::{ToastId, ToastSlot},
    },
    models::GeoRecord,
};

/// Result of one lookup; the error is already the text to show.
pub type LookupOutcome = Result<GeoRecord, String>;

/// A lookup that passed the client-side checks and is ready to send.
#[derive(Debug, Clone)]
pub struct PendingLookup {
    token: String,
    search_value: String,
}

impl PendingLookup {
    pub fn search_value(&self) -> &str {
        &self.search_value
    }
}

/// Search field plus the records found during this visit.
#[derive(Debug, Clone, Default)]
pub struct LookupView {
    pub search_value: String,
    pub records: Vec<GeoRecord>,
    pub loading: bool,
    pub toast: ToastSlot,
}

impl LookupView {
    /// Start a lookup for the current input. Shared by the search button
    /// and the Enter key; does nothing while a lookup is in flight or when
    /// there is no session token.
    pub fn begin_submit(&mut self, session: &Session) -> Option<PendingLookup> {
        if self.loading {
            return None;
        }
        let Some(token) = session.token() else {
            tracing::error!("No token found in session store");
            return None;
        };
        self.toast.dismiss();
        self.loading = true;
        Some(PendingLookup {
            token,
            search_value: self.search_value.clone(),
        })
    }

    pub async fn submit(api: ApiClient, pending: PendingLookup) -> LookupOutcome {
        super::prime_csrf(&api).await;
        api.lookup(Some(&pending.token), &pending.search_value)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, search_value = %pending.search_value, "lookup failed");
                err.display_message()
            })
    }

    /// Append the record or show the error. The input is cleared either way.
    pub fn finish_submit(&mut self, outcome: LookupOutcome) -> Option<ToastId> {
        self.loading = false;
        self.search_value.clear();
        match outcome {
            Ok(record) => {
                tracing::debug!(ip = %record.ip, "lookup succeeded");
                self.records.push(record);
                None
            }
            Err(message) => Some(self.toast.show(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::SessionDb;

    async fn session_with(token: Option<&str>) -> Session {
        let session = Session::load(SessionDb::in_memory().await.unwrap())
            .await
            .unwrap();
        if let Some(token) = token {
            session.set(token).await.unwrap();
        }
        session
    }

    #[tokio::test]
    async fn no_token_means_no_request() {
        let session = session_with(None).await;
        let mut view = LookupView {
            search_value: "8.8.8.8".to_string(),
            ..Default::default()
        };
        assert!(view.begin_submit(&session).is_none());
        assert!(!view.loading);
        assert_eq!(view.search_value, "8.8.8.8");
    }

    #[tokio::test]
    async fn second_submit_while_loading_is_ignored() {
        let session = session_with(Some("tok")).await;
        let mut view = LookupView {
            search_value: "1.1.1.1".to_string(),
            ..Default::default()
        };
        let pending = view.begin_submit(&session).unwrap();
        assert_eq!(pending.search_value(), "1.1.1.1");
        assert!(view.loading);
        assert!(view.begin_submit(&session).is_none());

        view.finish_submit(Ok(GeoRecord::default()));
        assert!(!view.loading);
        assert_eq!(view.records.len(), 1);
        assert!(view.search_value.is_empty());
    }
}
