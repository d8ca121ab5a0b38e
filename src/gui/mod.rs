mod app;
mod message;
mod screens;
mod state;
mod widgets;

pub use app::GeoLookupApp;
pub use message::Message;
pub use state::AppState;

use crate::{Config, core::api::ApiClient};

/// Open the window and block until it is closed.
pub fn run(config: Config, api: ApiClient) -> iced::Result {
    iced::application(
        move || GeoLookupApp::new(config.clone(), api.clone()),
        GeoLookupApp::update,
        GeoLookupApp::view,
    )
    .title(GeoLookupApp::title)
    .run()
}
