use crate::{
    core::session::Session,
    gui::screens::{
        ScreenMessage, home::HomeScreen, login::LoginScreen, register::RegisterScreen,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    Booted(Result<Session, String>),
    Login(ScreenMessage<LoginScreen>),
    Register(ScreenMessage<RegisterScreen>),
    Home(ScreenMessage<HomeScreen>),
    Navigate(&'static str),
}
