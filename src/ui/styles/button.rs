// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: 0.85,
            ..palette::PRIMARY_500
        },
        button::Status::Disabled => palette::GRAY_300,
        button::Status::Active | button::Status::Pressed => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless icon button: toast close, field clear and reveal, panel close.
///
/// Only shows a background while hovered or pressed.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_500
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE * 2.0,
            ..palette::GRAY_500
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    let text_color = match status {
        button::Status::Disabled => Color {
            a: opacity::DISABLED,
            ..base.text
        },
        _ => base.text,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Full-width side panel entry.
pub fn menu_entry(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered => Some(palette.background.weak.color.into()),
        button::Status::Pressed => Some(palette.background.strong.color.into()),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
