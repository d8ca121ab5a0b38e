use iced::{
    Element, Length, Task,
    widget::{button, center, column, container, opaque, row, stack, text, text_input},
};

use crate::{
    core::{
        toast::ToastId,
        views::{HistoryView, LogoutOutcome, LookupOutcome, LookupView, NavBar},
    },
    gui::{
        AppState,
        screens::{Navigate, Screen, ScreenMessage, expire_toast},
        widgets::{nav_bar, records_table, with_toast},
    },
    models::GeoRecord,
};

/// Search form, results of this visit, and the history overlay.
#[derive(Debug, Clone, Default)]
pub struct HomeScreen {
    lookup: LookupView,
    history: HistoryView,
    nav: NavBar,
}

#[derive(Debug, Clone)]
pub enum HomeMessage {
    SearchChanged(String),
    Search,
    Searched(LookupOutcome),
    ToastExpired(ToastId),
    ToggleHistory,
    HistoryLoaded(Option<Vec<GeoRecord>>),
    Logout,
    LoggedOut(LogoutOutcome),
}

fn local(message: HomeMessage) -> ScreenMessage<HomeScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl HomeScreen {
    fn history_overlay(&self) -> Element<'_, ScreenMessage<Self>> {
        let card = column![
            row![
                container(text("History").size(24)).width(Length::Fill),
                button("Close").on_press(local(HomeMessage::ToggleHistory)),
            ],
            records_table(&self.history.records, true),
        ]
        .spacing(12);

        opaque(center(
            container(card)
                .padding(20)
                .max_width(1100.0)
                .max_height(600.0)
                .style(container::rounded_box),
        ))
    }
}

impl Screen for HomeScreen {
    type Message = HomeMessage;
    type ParentMessage = Navigate;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let idle = !self.lookup.loading;

        let mut search = text_input("Search", &self.lookup.search_value).padding(10);
        if idle {
            search = search
                .on_input(|value| local(HomeMessage::SearchChanged(value)))
                .on_submit(local(HomeMessage::Search));
        }

        let search_bar = row![
            button("History").on_press_maybe(idle.then_some(local(HomeMessage::ToggleHistory))),
            search,
            button("Search").on_press_maybe(idle.then_some(local(HomeMessage::Search))),
        ]
        .spacing(10);

        let logout = (!self.nav.loading).then_some(local(HomeMessage::Logout));
        let page = column![
            nav_bar(self.nav.logout_label(), logout),
            search_bar,
            records_table(&self.lookup.records, false),
        ]
        .spacing(16);

        let page = with_toast(page, self.lookup.toast.visible());
        if self.history.open {
            stack![page, self.history_overlay()].into()
        } else {
            page
        }
    }

    fn update(&mut self, message: Self::Message, state: &mut AppState) -> Task<ScreenMessage<Self>> {
        match message {
            HomeMessage::SearchChanged(value) => {
                self.lookup.search_value = value;
                Task::none()
            }
            HomeMessage::Search => match self.lookup.begin_submit(&state.session) {
                Some(pending) => Task::perform(LookupView::submit(state.api.clone(), pending), |outcome| {
                    local(HomeMessage::Searched(outcome))
                }),
                None => Task::none(),
            },
            HomeMessage::Searched(outcome) => match self.lookup.finish_submit(outcome) {
                Some(toast) => expire_toast(self.lookup.toast.duration(), toast, |id| {
                    local(HomeMessage::ToastExpired(id))
                }),
                None => Task::none(),
            },
            HomeMessage::ToastExpired(id) => {
                self.lookup.toast.expire(id);
                Task::none()
            }
            HomeMessage::ToggleHistory => {
                if self.history.toggle() {
                    Task::perform(
                        HistoryView::load(state.api.clone(), state.session.token()),
                        |records| local(HomeMessage::HistoryLoaded(records)),
                    )
                } else {
                    Task::none()
                }
            }
            HomeMessage::HistoryLoaded(records) => {
                if self.history.open {
                    self.history.finish_load(records);
                }
                Task::none()
            }
            HomeMessage::Logout => match self.nav.begin_logout(&state.session) {
                Some(token) => Task::perform(
                    NavBar::logout(state.api.clone(), state.session.clone(), token),
                    |outcome| local(HomeMessage::LoggedOut(outcome)),
                ),
                None => Task::none(),
            },
            HomeMessage::LoggedOut(outcome) => match self.nav.finish_logout(&outcome) {
                Some(path) => Task::done(ScreenMessage::ParentMessage(Navigate(path))),
                None => Task::none(),
            },
        }
    }
}
