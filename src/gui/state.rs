use crate::core::{api::ApiClient, navigation::Router, session::Session};

/// Everything screens share: the API client, the session context and the
/// router that applies the guard.
#[derive(Debug)]
pub struct AppState {
    pub api: ApiClient,
    pub session: Session,
    pub router: Router,
}

impl AppState {
    pub fn new(api: ApiClient, session: Session) -> Self {
        let router = Router::new(crate::core::navigation::ROOT_PATH, session.is_authenticated());
        Self {
            api,
            session,
            router,
        }
    }
}
