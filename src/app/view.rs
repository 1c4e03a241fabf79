// SPDX-License-Identifier: MPL-2.0
//! View rendering for the gallery.
//!
//! The page is a scrollable column of component demos. The side panel and
//! the toast stack are layered on top of it.

use super::{FieldSlot, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::field::Field;
use crate::ui::notifications::{Coordinator, Kind};
use crate::ui::side_panel::SidePanel;
use crate::ui::styles;
use crate::ui::widgets::scroll_lock;
use iced::widget::{button, scrollable, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Context required to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub notifications: &'a Coordinator,
    pub panel: &'a SidePanel,
    pub fields: [(FieldSlot, &'a Field); 5],
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let locale = i18n.current_locale().to_string();

    let header = Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(i18n.tr("gallery-title"))
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(action(
            i18n.tr_with_args("gallery-next-language", &[("locale", locale.as_str())]),
            Message::NextLanguage,
        ))
        .push(
            button(Text::new(i18n.tr("gallery-open-menu")))
                .on_press(Message::OpenMenu)
                .style(styles::button::primary),
        );

    let toast_buttons = Row::new()
        .spacing(spacing::XS)
        .push(action(i18n.tr("gallery-toast-success"), Message::ShowToast(Kind::Success)))
        .push(action(i18n.tr("gallery-toast-error"), Message::ShowToast(Kind::Error)))
        .push(action(i18n.tr("gallery-toast-warning"), Message::ShowToast(Kind::Warning)))
        .push(action(i18n.tr("gallery-toast-info"), Message::ShowToast(Kind::Info)))
        .push(action(i18n.tr("gallery-toast-sticky"), Message::ShowSticky))
        .push(action(i18n.tr("gallery-clear-toasts"), Message::ClearToasts));

    let fields = ctx.fields.into_iter().fold(
        Column::new().spacing(spacing::MD).max_width(420.0),
        |column, (slot, field)| {
            column.push(
                field
                    .view(i18n)
                    .map(move |message| Message::Field(slot, message)),
            )
        },
    );

    let page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header)
        .push(section(i18n.tr("gallery-notifications-heading"), toast_buttons))
        .push(section(i18n.tr("gallery-fields-heading"), fields));

    let content = scroll_lock(
        scrollable(page).width(Length::Fill).height(Length::Fill),
        ctx.panel.locks_scroll(),
    );

    let mut stack = Stack::new().push(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill),
    );
    if let Some(panel) = ctx.panel.view(i18n) {
        stack = stack.push(panel.map(Message::Panel));
    }
    stack = stack.push(ctx.notifications.view(i18n).map(Message::Notification));

    stack.into()
}

fn action<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .into()
}

fn section<'a>(title: String, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(body)
        .into()
}
