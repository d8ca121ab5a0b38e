use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, row, text, text_input},
};

use crate::{
    core::{
        navigation::REGISTER_PATH,
        toast::ToastId,
        views::{LoginOutcome, LoginView},
    },
    gui::{
        AppState,
        screens::{Navigate, Screen, ScreenMessage, expire_toast},
        widgets::{form_card, with_toast},
    },
};

#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    view: LoginView,
}

#[derive(Debug, Clone)]
pub enum LoginMessage {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    Submitted(LoginOutcome),
    ToastExpired(ToastId),
    Register,
}

impl Screen for LoginScreen {
    type Message = LoginMessage;
    type ParentMessage = Navigate;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let submit = self
            .view
            .is_valid()
            .then_some(ScreenMessage::ScreenMessage(LoginMessage::Submit));

        let form = column![
            text("Login").size(32),
            text_input("Email", &self.view.email)
                .on_input(|value| ScreenMessage::ScreenMessage(LoginMessage::EmailChanged(value)))
                .padding(10),
            text_input("Password", &self.view.password)
                .on_input(|value| ScreenMessage::ScreenMessage(LoginMessage::PasswordChanged(value)))
                .on_submit_maybe(submit.clone())
                .secure(true)
                .padding(10),
            row![
                button("Login").on_press_maybe(submit),
                button("Register Instead")
                    .style(button::text)
                    .on_press(ScreenMessage::ScreenMessage(LoginMessage::Register)),
            ]
            .spacing(20)
            .align_y(Center),
        ]
        .spacing(16);

        with_toast(form_card(form), self.view.toast.visible())
    }

    fn update(&mut self, message: Self::Message, state: &mut AppState) -> Task<ScreenMessage<Self>> {
        match message {
            LoginMessage::EmailChanged(email) => {
                self.view.email = email;
                Task::none()
            }
            LoginMessage::PasswordChanged(password) => {
                self.view.password = password;
                Task::none()
            }
            LoginMessage::Submit if self.view.is_valid() => Task::perform(
                LoginView::submit(state.api.clone(), state.session.clone(), self.view.credentials()),
                |outcome| ScreenMessage::ScreenMessage(LoginMessage::Submitted(outcome)),
            ),
            LoginMessage::Submit => Task::none(),
            LoginMessage::Submitted(outcome) => match self.view.finish(&outcome) {
                Ok(path) => Task::done(ScreenMessage::ParentMessage(Navigate(path))),
                Err(toast) => expire_toast(self.view.toast.duration(), toast, |id| {
                    ScreenMessage::ScreenMessage(LoginMessage::ToastExpired(id))
                }),
            },
            LoginMessage::ToastExpired(id) => {
                self.view.toast.expire(id);
                Task::none()
            }
            LoginMessage::Register => Task::done(ScreenMessage::ParentMessage(Navigate(REGISTER_PATH))),
        }
    }
}
