use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, row, text, text_input},
};

use crate::{
    core::{
        navigation::LOGIN_PATH,
        toast::ToastId,
        views::{RegisterOutcome, RegisterView},
    },
    gui::{
        AppState,
        screens::{Navigate, Screen, ScreenMessage, expire_toast},
        widgets::{form_card, with_toast},
    },
};

#[derive(Debug, Clone, Default)]
pub struct RegisterScreen {
    view: RegisterView,
}

#[derive(Debug, Clone)]
pub enum RegisterMessage {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    Submitted(RegisterOutcome),
    ToastExpired(ToastId),
    Login,
}

fn local(message: RegisterMessage) -> ScreenMessage<RegisterScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl Screen for RegisterScreen {
    type Message = RegisterMessage;
    type ParentMessage = Navigate;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let submit = self.view.is_valid().then_some(local(RegisterMessage::Submit));

        let form = column![
            text("Register").size(32),
            text("Name"),
            text_input("e.g Juan Dela Cruz", &self.view.name)
                .on_input(|value| local(RegisterMessage::NameChanged(value)))
                .padding(10),
            text_input("Email", &self.view.email)
                .on_input(|value| local(RegisterMessage::EmailChanged(value)))
                .padding(10),
            text_input("Password", &self.view.password)
                .on_input(|value| local(RegisterMessage::PasswordChanged(value)))
                .on_submit_maybe(submit.clone())
                .secure(true)
                .padding(10),
            row![
                button("Register").on_press_maybe(submit),
                button("Login Instead")
                    .style(button::text)
                    .on_press(local(RegisterMessage::Login)),
            ]
            .spacing(20)
            .align_y(Center),
        ]
        .spacing(16);

        with_toast(form_card(form), self.view.toast.visible())
    }

    fn update(&mut self, message: Self::Message, state: &mut AppState) -> Task<ScreenMessage<Self>> {
        match message {
            RegisterMessage::NameChanged(name) => {
                self.view.name = name;
                Task::none()
            }
            RegisterMessage::EmailChanged(email) => {
                self.view.email = email;
                Task::none()
            }
            RegisterMessage::PasswordChanged(password) => {
                self.view.password = password;
                Task::none()
            }
            RegisterMessage::Submit if self.view.is_valid() => Task::perform(
                RegisterView::submit(state.api.clone(), self.view.registration()),
                |outcome| local(RegisterMessage::Submitted(outcome)),
            ),
            RegisterMessage::Submit => Task::none(),
            RegisterMessage::Submitted(outcome) => match self.view.finish(&outcome) {
                Ok(Some(path)) => Task::done(ScreenMessage::ParentMessage(Navigate(path))),
                Ok(None) => Task::none(),
                Err(toast) => expire_toast(self.view.toast.duration(), toast, |id| {
                    local(RegisterMessage::ToastExpired(id))
                }),
            },
            RegisterMessage::ToastExpired(id) => {
                self.view.toast.expire(id);
                Task::none()
            }
            RegisterMessage::Login => Task::done(ScreenMessage::ParentMessage(Navigate(LOGIN_PATH))),
        }
    }
}
