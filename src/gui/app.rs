use iced::{Element, Task};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, loading_page::LoadingPageScreen},
};
use crate::{Config, core::api::ApiClient};

pub enum GeoLookupApp {
    Booting {
        api: ApiClient,
        page: LoadingPageScreen,
    },
    Running {
        state: AppState,
        screen: ScreenData,
    },
}

fn unwrap_screen_message(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}

impl GeoLookupApp {
    pub fn new(config: Config, api: ApiClient) -> (Self, Task<Message>) {
        let boot = Task::perform(
            async move { config.open_session().await.map_err(|err| format!("{err:#}")) },
            Message::Booted,
        );
        (
            Self::Booting {
                api,
                page: LoadingPageScreen::default(),
            },
            boot,
        )
    }

    pub fn title(&self) -> String {
        match self {
            GeoLookupApp::Running { state, .. } => format!("Geo Lookup - {}", state.router.path()),
            GeoLookupApp::Booting { .. } => "Geo Lookup".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match self {
            GeoLookupApp::Running { state, screen } => {
                screen.update(message, state).map(unwrap_screen_message)
            }
            GeoLookupApp::Booting { api, page } => {
                let Message::Booted(result) = message else {
                    return Task::none();
                };
                match result {
                    Ok(session) => {
                        let state = AppState::new(api.clone(), session);
                        let screen = ScreenData::for_route(state.router.route());
                        tracing::info!(path = state.router.path(), "session ready");
                        *self = GeoLookupApp::Running { state, screen };
                    }
                    Err(error) => {
                        tracing::error!(%error, "failed to open session store");
                        *page = LoadingPageScreen::failed(error);
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self {
            GeoLookupApp::Booting { page, .. } => page.view(),
            GeoLookupApp::Running { screen, .. } => screen.view().map(unwrap_screen_message),
        }
    }
}
