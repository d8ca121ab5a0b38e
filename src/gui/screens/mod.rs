pub mod home;
pub mod loading_page;
pub mod login;
pub mod register;

use std::time::Duration;

use iced::{Element, Task};

use crate::{
    core::{navigation::Route, toast::ToastId},
    gui::{AppState, Message},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// Asks the parent to move to a path; the router's guard has the final say.
#[derive(Debug, Clone, Copy)]
pub struct Navigate(pub &'static str);

/// Hide toast `id` once `duration` has passed.
pub fn expire_toast<M>(duration: Duration, id: ToastId, on_expire: fn(ToastId) -> M) -> Task<M>
where
    M: Send + 'static,
{
    Task::perform(tokio::time::sleep(duration), move |_| on_expire(id))
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Login(login::LoginScreen),
    Register(register::RegisterScreen),
    Home(home::HomeScreen),
}

impl ScreenData {
    /// A fresh screen; form state from a previous visit is discarded.
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Login => ScreenData::Login(Default::default()),
            Route::Register => ScreenData::Register(Default::default()),
            Route::Home => ScreenData::Home(Default::default()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            ScreenData::Login(_) => Route::Login,
            ScreenData::Register(_) => Route::Register,
            ScreenData::Home(_) => Route::Home,
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Login(screen) => screen.view().map(Message::Login),
            ScreenData::Register(screen) => screen.view().map(Message::Register),
            ScreenData::Home(screen) => screen.view().map(Message::Home),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::Navigate(path)) => {
                let route = state
                    .router
                    .navigate(path, state.session.is_authenticated());
                if x.route() != route {
                    *x = ScreenData::for_route(route);
                }
                Task::none()
            }
            (ScreenData::Login(page), Message::Login(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Login)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(Navigate(path)) => {
                    Task::done(ScreenMessage::ScreenMessage(Message::Navigate(path)))
                }
            },
            (ScreenData::Register(page), Message::Register(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Register)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(Navigate(path)) => {
                    Task::done(ScreenMessage::ScreenMessage(Message::Navigate(path)))
                }
            },
            (ScreenData::Home(page), Message::Home(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Home)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(Navigate(path)) => {
                    Task::done(ScreenMessage::ScreenMessage(Message::Navigate(path)))
                }
            },
            // Late results for a screen that is no longer shown.
            (_, msg) => {
                tracing::debug!(?msg, "dropping message for inactive screen");
                Task::none()
            }
        }
    }
}
