// SPDX-License-Identifier: MPL-2.0
//! Gallery application exercising every component.
//!
//! The `App` struct wires the components to localization and the persisted
//! configuration, and translates component events into follow-up actions
//! such as showing a toast when a menu entry is picked.

pub mod menu;
mod message;
mod view;

pub use message::{FieldSlot, Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::field::{self, Field, InputKind};
use crate::ui::notifications::{self, Coordinator, Handle, Kind, Notification};
use crate::ui::side_panel::{self, entry, SidePanel};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

/// Passwords shorter than this get an inline error.
const MIN_PASSWORD_LEN: usize = 8;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    notifications: Coordinator,
    /// Used by event handlers that only need to show toasts.
    toasts: Handle,
    panel: SidePanel,
    /// Host-owned value of the controlled email field.
    email: String,
    email_field: Field,
    password_field: Field,
    amount_field: Field,
    search_field: Field,
    disabled_field: Field,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("toasts", &self.notifications.len())
            .field("panel", &self.panel.stage())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 700.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(None, &Config::default(), menu::default_entries())
    }
}

impl App {
    /// Loads configuration and menu entries, then builds the gallery.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match flags.config_path.as_deref() {
            Some(path) => config::load_from_path(Path::new(path)),
            None => config::load(),
        }
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "using default configuration");
            Config::default()
        });

        let entries = menu::resolve(flags.menu_path.as_deref().map(Path::new));
        (Self::with_config(flags.lang, &config, entries), Task::none())
    }

    fn with_config(
        lang: Option<String>,
        config: &Config,
        entries: Vec<side_panel::Entry>,
    ) -> Self {
        let i18n = I18n::new(lang, config);
        let notifications =
            Coordinator::with_timing(notifications::Timing::from_config(&config.notifications));
        let toasts = notifications.handle();

        let mut app = Self {
            notifications,
            toasts,
            panel: SidePanel::new(entries).with_config(&config.panel),
            email: String::new(),
            email_field: Field::new(InputKind::Email).clearable(true).value(""),
            password_field: Field::new(InputKind::Password).clearable(true),
            amount_field: Field::new(InputKind::Number),
            search_field: Field::new(InputKind::Text).clearable(true),
            disabled_field: Field::new(InputKind::Text)
                .initial_text("read only")
                .disabled(true),
            i18n,
        };
        app.relabel_fields();
        app
    }

    /// Field labels and placeholders follow the current locale.
    fn relabel_fields(&mut self) {
        let i18n = &self.i18n;
        let relabel = |field: &Field, label: &str, placeholder: Option<&str>| {
            let field = field.clone().label(i18n.tr(label));
            match placeholder {
                Some(key) => field.placeholder(i18n.tr(key)),
                None => field,
            }
        };

        self.email_field = relabel(
            &self.email_field,
            "gallery-email-label",
            Some("gallery-email-placeholder"),
        );
        self.password_field = relabel(
            &self.password_field,
            "gallery-password-label",
            Some("gallery-password-placeholder"),
        );
        self.amount_field = relabel(
            &self.amount_field,
            "gallery-amount-label",
            Some("gallery-amount-placeholder"),
        );
        self.search_field = relabel(&self.search_field, "gallery-search-label", None);
        self.disabled_field = relabel(&self.disabled_field, "gallery-disabled-label", None);
        self.validate_password();
    }

    fn title(&self) -> String {
        self.i18n.tr("gallery-title")
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            notifications: &self.notifications,
            panel: &self.panel,
            fields: [
                (FieldSlot::Email, &self.email_field),
                (FieldSlot::Password, &self.password_field),
                (FieldSlot::Amount, &self.amount_field),
                (FieldSlot::Search, &self.search_field),
                (FieldSlot::Disabled, &self.disabled_field),
            ],
        })
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.notifications
                .subscription()
                .map(Message::Notification),
            self.panel.subscription().map(Message::Panel),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(message) => {
                for event in self.notifications.update(message) {
                    let notifications::Event::Closed(id) = event;
                    tracing::debug!(%id, "toast closed");
                }
                Task::none()
            }
            Message::Panel(message) => {
                match self.panel.update(message) {
                    side_panel::Event::Selected { id, href } => {
                        let label = entry::find(self.panel.entries(), &id)
                            .map_or(id.as_str(), |entry| entry.label.as_str());
                        let mut notification = Notification::info(
                            self.i18n.tr_with_args("gallery-selected", &[("entry", label)]),
                        );
                        if let Some(href) = href {
                            notification = notification.description(href);
                        }
                        self.toasts.show(notification);
                    }
                    side_panel::Event::Closed | side_panel::Event::None => {}
                }
                Task::none()
            }
            Message::Field(slot, message) => self.update_field(slot, message),
            Message::ShowToast(kind) => {
                let notification = match kind {
                    Kind::Success => Notification::success(self.i18n.tr("gallery-saved"))
                        .description(self.i18n.tr("gallery-saved-description")),
                    Kind::Error => Notification::error(self.i18n.tr("gallery-failed")),
                    Kind::Warning => Notification::warning(self.i18n.tr("gallery-careful")),
                    Kind::Info => Notification::info(self.i18n.tr("gallery-info")),
                };
                self.notifications.show(notification);
                Task::none()
            }
            Message::ShowSticky => {
                self.notifications
                    .show(Notification::info(self.i18n.tr("gallery-sticky")).persistent());
                Task::none()
            }
            Message::ClearToasts => {
                self.notifications.clear();
                Task::none()
            }
            Message::OpenMenu => {
                self.panel.open();
                Task::none()
            }
            Message::NextLanguage => {
                let next = self.next_locale();
                self.i18n.set_locale(next);
                self.relabel_fields();
                Task::none()
            }
        }
    }

    fn update_field(&mut self, slot: FieldSlot, message: field::Message) -> Task<Message> {
        let field = match slot {
            FieldSlot::Email => &mut self.email_field,
            FieldSlot::Password => &mut self.password_field,
            FieldSlot::Amount => &mut self.amount_field,
            FieldSlot::Search => &mut self.search_field,
            FieldSlot::Disabled => &mut self.disabled_field,
        };
        let (event, task) = field.update(message);

        if let field::Event::Changed(value) = event {
            match slot {
                FieldSlot::Email => {
                    self.email_field.set_value(value.as_str());
                    self.email = value;
                }
                FieldSlot::Password => self.validate_password(),
                FieldSlot::Amount | FieldSlot::Search | FieldSlot::Disabled => {}
            }
        }

        task.map(move |message| Message::Field(slot, message))
    }

    fn validate_password(&mut self) {
        let length = self.password_field.text().chars().count();
        let error = (length > 0 && length < MIN_PASSWORD_LEN)
            .then(|| self.i18n.tr("gallery-password-error"));
        self.password_field.set_error(error);
    }

    fn next_locale(&self) -> unic_langid::LanguageIdentifier {
        let locales = &self.i18n.available_locales;
        let current = self.i18n.current_locale();
        locales
            .iter()
            .position(|locale| locale == current)
            .and_then(|index| locales.get((index + 1) % locales.len()))
            .unwrap_or(current)
            .clone()
    }
}
