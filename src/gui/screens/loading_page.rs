use iced::{
    Alignment::Center,
    Element,
    widget::{column, container, text},
};

/// Shown while the session store opens, or in its place if that failed.
#[derive(Debug, Clone, Default)]
pub struct LoadingPageScreen {
    error: Option<String>,
}

impl LoadingPageScreen {
    pub fn failed(error: String) -> Self {
        Self { error: Some(error) }
    }

    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        let content = match &self.error {
            None => column![text("Loading...")],
            Some(error) => column![
                text("Could not open the session store").size(24),
                text(error.as_str()),
            ]
            .spacing(10)
            .align_x(Center),
        };
        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }
}
