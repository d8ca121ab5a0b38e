use iced::{
    Alignment::Center,
    Color, Element, Length, Theme,
    widget::{button, column, container, row, scrollable, text},
};

use crate::models::{GEO_COLUMNS, GeoRecord};

const CELL_WIDTH: f32 = 130.0;

fn toast_style(theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(Color::WHITE),
        ..container::rounded_box(theme).background(theme.palette().danger)
    }
}

/// The error notification, or nothing when `text` is `None`.
pub fn toast<'a, Message: 'a>(text_content: Option<&'a str>) -> Option<Element<'a, Message>> {
    text_content.map(|content| {
        container(text(content))
            .padding(12)
            .style(toast_style)
            .into()
    })
}

/// Puts the toast (if any) above `content`, aligned to the right.
pub fn with_toast<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    toast_text: Option<&'a str>,
) -> Element<'a, Message> {
    let mut page = column![].spacing(10).padding(10);
    if let Some(toast) = toast(toast_text) {
        page = page.push(container(toast).align_right(Length::Fill));
    }
    page.push(content.into()).into()
}

fn cell<'a, Message: 'a>(content: &'a str) -> Element<'a, Message> {
    container(text(content).size(13))
        .width(Length::Fixed(CELL_WIDTH))
        .padding(4)
        .into()
}

/// One row per record, one column per attribute. `with_updated` adds the
/// history's "Updated" column.
pub fn records_table<'a, Message: 'a>(
    records: &'a [GeoRecord],
    with_updated: bool,
) -> Element<'a, Message> {
    if records.is_empty() {
        return text("No data available").into();
    }

    let mut header = row(GEO_COLUMNS.iter().map(|title| cell(title)));
    if with_updated {
        header = header.push(cell("Updated"));
    }

    let mut table = column![header].spacing(2);
    for record in records {
        let mut line = row(record.cells().into_iter().map(cell));
        if with_updated {
            line = line.push(
                container(text(record.updated_at_label()).size(13))
                    .width(Length::Fixed(CELL_WIDTH))
                    .padding(4),
            );
        }
        table = table.push(line);
    }

    scrollable(table).height(Length::Fill).into()
}

/// Title on the left, the logout button on the right.
pub fn nav_bar<'a, Message: Clone + 'a>(
    logout_label: &'a str,
    on_logout: Option<Message>,
) -> Element<'a, Message> {
    container(
        row![
            container(text("Geo Lookup").size(24)).width(Length::Fill),
            button(logout_label).on_press_maybe(on_logout),
        ]
        .align_y(Center)
        .spacing(20),
    )
    .padding(10)
    .style(container::bordered_box)
    .into()
}

/// A centred card used by the login and register forms.
pub fn form_card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(
        container(content)
            .padding(30)
            .max_width(420.0)
            .style(container::rounded_box),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
