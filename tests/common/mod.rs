mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from geolookup for tests
pub use geolookup::{
    ApiClient, GeoRecord, Route, Router, Session, SessionDb, SessionRepository,
    core::views::{HistoryView, LoginView, LookupView, NavBar, RegisterView},
};
