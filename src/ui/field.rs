// SPDX-License-Identifier: MPL-2.0
//! Labeled text field with optional clear button and password reveal toggle.
//!
//! The field works in two modes. Without an external value it keeps its own
//! text (uncontrolled). With [`Field::set_value`] the host owns the text and
//! the field only reports edits through [`Event::Changed`].

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, operation, text, text_input, tooltip, Column, Container, Id, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Task, Theme};

/// What the field holds; drives masking and character filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Number,
    Email,
    Tel,
}

impl InputKind {
    /// Whether `value` is acceptable input for this kind.
    ///
    /// Number and Tel reject characters that cannot appear in them; the
    /// other kinds accept anything.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            InputKind::Number => value
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')),
            InputKind::Tel => value
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' ' | '.')),
            InputKind::Text | InputKind::Password | InputKind::Email => true,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The user typed or pasted into the input.
    Edited(String),
    /// The clear button was pressed.
    Clear,
    /// The password reveal button was pressed.
    ToggleReveal,
}

/// Events propagated to the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The text changed; carries the new value (empty after a clear).
    Changed(String),
}

/// Field state and configuration.
#[derive(Debug, Clone)]
pub struct Field {
    id: Id,
    kind: InputKind,
    label: Option<String>,
    placeholder: String,
    clearable: bool,
    disabled: bool,
    error: Option<String>,
    /// Host-owned value; `None` in uncontrolled mode.
    external: Option<String>,
    internal: String,
    revealed: bool,
}

impl Default for Field {
    fn default() -> Self {
        Self::new(InputKind::default())
    }
}

impl Field {
    pub fn new(kind: InputKind) -> Self {
        Self {
            id: Id::unique(),
            kind,
            label: None,
            placeholder: String::new(),
            clearable: false,
            disabled: false,
            error: None,
            external: None,
            internal: String::new(),
            revealed: false,
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Starts in controlled mode with the given value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.external = Some(value.into());
        self
    }

    /// Starts in uncontrolled mode with the given text.
    #[must_use]
    pub fn initial_text(mut self, text: impl Into<String>) -> Self {
        self.internal = text.into();
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Sets or clears the error message shown under the field.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Switches to (or updates) controlled mode.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.external = Some(value.into());
    }

    /// Returns to uncontrolled mode, keeping the last uncontrolled text.
    pub fn release_value(&mut self) {
        self.external = None;
    }

    #[must_use]
    pub fn id(&self) -> Id {
        self.id.clone()
    }

    #[must_use]
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Displayed text: the host value when controlled, the own text otherwise.
    #[must_use]
    pub fn text(&self) -> &str {
        self.external.as_deref().unwrap_or(&self.internal)
    }

    #[must_use]
    pub fn shows_clear(&self) -> bool {
        self.clearable && !self.text().is_empty() && !self.disabled
    }

    #[must_use]
    pub fn shows_reveal_toggle(&self) -> bool {
        self.kind == InputKind::Password && !self.text().is_empty() && !self.disabled
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the input renders its text as bullets.
    #[must_use]
    pub fn is_masked(&self) -> bool {
        self.kind == InputKind::Password && !self.revealed
    }

    /// Process a field message and return the corresponding event.
    ///
    /// Clearing also returns a task that moves focus back to the input.
    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        if self.disabled {
            return (Event::None, Task::none());
        }

        match message {
            Message::Edited(value) => {
                if !self.kind.accepts(&value) {
                    return (Event::None, Task::none());
                }
                if !self.is_controlled() {
                    self.internal.clone_from(&value);
                }
                (Event::Changed(value), Task::none())
            }
            Message::Clear => {
                if !self.is_controlled() {
                    self.internal.clear();
                }
                (Event::Changed(String::new()), operation::focus(self.id.clone()))
            }
            Message::ToggleReveal => {
                self.revealed = !self.revealed;
                (Event::None, Task::none())
            }
        }
    }

    /// Render the field: label, framed input with trailing buttons, error line.
    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let mut column = Column::new().spacing(spacing::XXS).width(Length::Fill);

        if let Some(label) = &self.label {
            let disabled = self.disabled;
            column = column.push(
                Text::new(label.as_str())
                    .size(typography::BODY)
                    .style(move |theme: &Theme| label_style(theme, disabled)),
            );
        }

        let mut input = text_input(&self.placeholder, self.text())
            .id(self.id.clone())
            .secure(self.is_masked())
            .size(typography::BODY_LG)
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(borderless_input);
        if !self.disabled {
            input = input.on_input(Message::Edited);
        }

        let mut row = Row::new()
            .align_y(alignment::Vertical::Center)
            .spacing(spacing::XXS)
            .push(input);

        if self.shows_clear() {
            row = row.push(trailing_button("✕", i18n.tr("field-clear"), Message::Clear));
        }
        if self.shows_reveal_toggle() {
            let (glyph, key) = if self.revealed {
                ("◎", "field-hide-password")
            } else {
                ("◉", "field-show-password")
            };
            row = row.push(trailing_button(glyph, i18n.tr(key), Message::ToggleReveal));
        }

        column = column.push(
            Container::new(row.padding([0.0, spacing::XS]))
                .height(Length::Fixed(sizing::INPUT_HEIGHT))
                .align_y(alignment::Vertical::Center)
                .style(styles::container::field_frame(
                    self.error.is_some(),
                    self.disabled,
                )),
        );

        if let Some(error) = &self.error {
            column = column.push(
                Text::new(error.as_str())
                    .size(typography::BODY_SM)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );
        }

        column.into()
    }
}

fn trailing_button<'a>(glyph: &'a str, hint: String, message: Message) -> Element<'a, Message> {
    let button = button(Text::new(glyph).size(sizing::ICON_SM))
        .on_press(message)
        .padding(spacing::XXS)
        .style(styles::button::ghost);

    tooltip(
        button,
        Text::new(hint).size(typography::CAPTION),
        tooltip::Position::Top,
    )
    .into()
}

fn label_style(theme: &Theme, disabled: bool) -> text::Style {
    let color = theme.extended_palette().background.strong.text;
    text::Style {
        color: Some(if disabled {
            Color {
                a: opacity::DISABLED,
                ..color
            }
        } else {
            color
        }),
    }
}

/// The frame is drawn by the surrounding container, so the input itself is flat.
fn borderless_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border::default(),
        ..text_input::default(theme, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(kind: InputKind, value: &str) -> Field {
        Field::new(kind).clearable(true).initial_text(value)
    }

    #[test]
    fn uncontrolled_edit_updates_text_and_reports() {
        let mut field = Field::new(InputKind::Text);
        let (event, _) = field.update(Message::Edited("hello".into()));
        assert_eq!(event, Event::Changed("hello".into()));
        assert_eq!(field.text(), "hello");
    }

    #[test]
    fn controlled_edit_reports_without_changing_text() {
        let mut field = Field::new(InputKind::Text).value("fixed");
        let (event, _) = field.update(Message::Edited("fixed!".into()));
        assert_eq!(event, Event::Changed("fixed!".into()));
        assert_eq!(field.text(), "fixed");

        field.set_value("fixed!");
        assert_eq!(field.text(), "fixed!");
    }

    #[test]
    fn clear_empties_text_and_reports_once() {
        let mut field = filled(InputKind::Text, "something");
        let (event, _task) = field.update(Message::Clear);
        assert_eq!(event, Event::Changed(String::new()));
        assert_eq!(field.text(), "");
    }

    #[test]
    fn clear_in_controlled_mode_reports_empty_value() {
        let mut field = Field::new(InputKind::Text).clearable(true).value("abc");
        let (event, _task) = field.update(Message::Clear);
        assert_eq!(event, Event::Changed(String::new()));
        // The host applies the change
        field.set_value("");
        assert_eq!(field.text(), "");
    }

    #[test]
    fn clear_button_needs_text_and_enabled() {
        assert!(!Field::new(InputKind::Text).clearable(true).shows_clear());
        assert!(filled(InputKind::Text, "x").shows_clear());
        assert!(!filled(InputKind::Text, "x").clearable(false).shows_clear());
        assert!(!filled(InputKind::Text, "x").disabled(true).shows_clear());
    }

    #[test]
    fn reveal_toggle_only_for_non_empty_password() {
        assert!(!Field::new(InputKind::Password).shows_reveal_toggle());
        assert!(filled(InputKind::Password, "secret").shows_reveal_toggle());
        assert!(!filled(InputKind::Text, "secret").shows_reveal_toggle());
        assert!(!filled(InputKind::Password, "secret")
            .disabled(true)
            .shows_reveal_toggle());
    }

    #[test]
    fn toggle_reveal_unmasks_password() {
        let mut field = filled(InputKind::Password, "secret");
        assert!(field.is_masked());
        let (event, _) = field.update(Message::ToggleReveal);
        assert_eq!(event, Event::None);
        assert!(field.is_revealed());
        assert!(!field.is_masked());
        field.update(Message::ToggleReveal);
        assert!(field.is_masked());
    }

    #[test]
    fn disabled_field_ignores_messages() {
        let mut field = filled(InputKind::Text, "keep").disabled(true);
        let (event, _) = field.update(Message::Clear);
        assert_eq!(event, Event::None);
        assert_eq!(field.text(), "keep");
    }

    #[test]
    fn number_field_rejects_letters() {
        let mut field = Field::new(InputKind::Number);
        let (event, _) = field.update(Message::Edited("12a".into()));
        assert_eq!(event, Event::None);
        assert_eq!(field.text(), "");

        let (event, _) = field.update(Message::Edited("-1.5e3".into()));
        assert_eq!(event, Event::Changed("-1.5e3".into()));
    }

    #[test]
    fn tel_field_accepts_phone_punctuation() {
        assert!(InputKind::Tel.accepts("+33 (0)1-23.45"));
        assert!(!InputKind::Tel.accepts("call me"));
        assert!(InputKind::Email.accepts("a@b.c"));
    }

    #[test]
    fn release_value_returns_to_own_text() {
        let mut field = Field::new(InputKind::Text).initial_text("mine");
        field.set_value("theirs");
        assert!(field.is_controlled());
        field.release_value();
        assert_eq!(field.text(), "mine");
    }

    #[test]
    fn view_renders_all_variants() {
        let i18n = I18n::default();
        let mut with_error = filled(InputKind::Password, "pw").label("Password");
        with_error.set_error(Some("Too short".into()));
        let fields = [
            Field::new(InputKind::Text).placeholder("Type here"),
            with_error,
            filled(InputKind::Email, "a@b.c").disabled(true),
        ];
        for field in &fields {
            let _element = field.view(&i18n);
        }
    }
}
