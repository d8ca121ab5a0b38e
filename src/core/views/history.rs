use crate::{core::api::ApiClient, models::GeoRecord};

/// The history overlay. Opening it starts from an empty list and loads
/// everything the server has recorded for the current user.
#[derive(Debug, Clone, Default)]
pub struct HistoryView {
    pub open: bool,
    pub records: Vec<GeoRecord>,
}

impl HistoryView {
    /// Flip visibility. Returns `true` when the overlay was just opened and
    /// its records should be fetched.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
            false
        } else {
            self.open = true;
            self.records.clear();
            true
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Fetch the history; failures (including a missing token) are logged
    /// and yield `None`.
    pub async fn load(api: ApiClient, token: Option<String>) -> Option<Vec<GeoRecord>> {
        match api.history(token.as_deref()).await {
            Ok(records) => Some(records),
            Err(err) => {
                tracing::error!(error = %err, "Error fetching history");
                None
            }
        }
    }

    pub fn finish_load(&mut self, records: Option<Vec<GeoRecord>>) {
        if let Some(records) = records {
            self.records = records;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reopening_starts_empty() {
        let mut view = HistoryView::default();
        assert!(view.toggle());
        view.finish_load(Some(vec![GeoRecord::default(), GeoRecord::default()]));
        assert_eq!(view.records.len(), 2);

        assert!(!view.toggle());
        assert!(!view.open);
        assert!(view.toggle());
        assert!(view.records.is_empty());
    }

    #[test]
    fn failed_load_keeps_list() {
        let mut view = HistoryView::default();
        view.toggle();
        view.finish_load(None);
        assert!(view.records.is_empty());
    }
}
