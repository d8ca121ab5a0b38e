//! Per-screen state machines.
//!
//! Each view owns its form fields, result lists, loading flags and toast.
//! Network work is split into an owned async step (safe to hand to an
//! executor) and a synchronous `finish` that folds the outcome back into
//! the view and tells the caller where to navigate, if anywhere.

mod history;
mod login;
mod lookup;
mod nav;
mod register;

pub use history::HistoryView;
pub use login::{LoginOutcome, LoginView};
pub use lookup::{LookupOutcome, LookupView, PendingLookup};
pub use nav::{LogoutOutcome, NavBar};
pub use register::{RegisterOutcome, RegisterView};

use crate::core::api::ApiClient;

/// CSRF priming before a state-changing call. Failures are logged and
/// otherwise ignored; the following call reports its own error.
async fn prime_csrf(api: &ApiClient) {
    if let Err(err) = api.prime_csrf().await {
        tracing::warn!(error = %err, "csrf priming failed");
    }
}
