pub mod config;
pub mod core;
pub mod logging;
pub mod models;

pub use config::Config;
pub use crate::core::api::{ApiClient, ApiError};
pub use crate::core::navigation::{Route, Router, guard};
pub use crate::core::session::{Session, SessionDb, SessionRepository};
pub use models::GeoRecord;

#[cfg(feature = "gui")]
pub mod gui;
